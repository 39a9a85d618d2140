mod risk;

pub use risk::{RiskAssessment, RiskLevel};
