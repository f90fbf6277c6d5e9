// ============================================
// Simulation (離線模擬)
// ============================================
//
// round      - one pass: recommend to every user, draw clicks
// evaluation - baseline vs. personalized driver, CTR report

pub mod evaluation;
pub mod round;

pub use evaluation::{ArmReport, Evaluation, EvaluationReport, EvaluationSettings, RoundSummary};
pub use round::{run_round, RoundResult};
