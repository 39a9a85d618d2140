//! Trending token lookups ("gems") cached in front of Birdeye.
//!
//! The cache serves a snapshot for a short window and falls back to the last
//! good snapshot whenever the upstream fails.

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::{BirdeyeClient, TrendingProvider};
pub use services::GemService;
