//! Referral tracking hook. Accepted and acknowledged; nothing is recorded yet.

pub mod handlers;
pub mod routes;
