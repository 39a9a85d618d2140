pub mod status_handler;

pub use status_handler::{banner, health_check, not_found};
