//! Realtime channel. Clients get a welcome frame on connect; no further
//! protocol is defined yet.

pub mod handlers;
pub mod models;
pub mod routes;
