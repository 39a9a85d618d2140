//! Scam reports and their moderation workflow.
//!
//! Reports are submitted as `pending`, approved or deleted by an admin
//! holding a live session token. Seed records start out approved.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{InMemoryReportRepository, ReportRepository};
pub use services::ReportService;
