//! Admin authentication for moderation.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/admin/login` | Exchange the admin password for a session token |
//! | POST | `/admin/logout` | Revoke a session token |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::SessionService;
