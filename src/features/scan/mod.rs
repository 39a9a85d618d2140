//! Address scan placeholder.
//!
//! Results come from a pluggable [`RiskEvaluator`]. The evaluators shipped
//! here are simulations and mark every result `simulated: true`.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{create_evaluator, EvaluatorKind, RiskEvaluator};
