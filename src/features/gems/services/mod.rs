mod gem_service;
pub mod scoring;

pub use gem_service::{GemService, GemSnapshot};
