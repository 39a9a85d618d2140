mod risk_evaluator;

pub use risk_evaluator::{
    EvaluatorKind, RiskEvaluator, SimulatedRiskEvaluator, StaticRiskEvaluator,
};

use std::sync::Arc;

/// Build the evaluator selected in configuration
pub fn create_evaluator(kind: EvaluatorKind) -> Arc<dyn RiskEvaluator> {
    match kind {
        EvaluatorKind::Simulated => Arc::new(SimulatedRiskEvaluator),
        EvaluatorKind::Static => Arc::new(StaticRiskEvaluator),
    }
}
