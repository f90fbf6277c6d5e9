//! Recommendation evaluation harness
//!
//! Offline comparison of a static rule-based recommender against an
//! online-adaptive one on a synthetic user/item/click simulation:
//! - Synthetic users and items with correlated traits
//! - Additive, auditable click model
//! - Baseline and personalized recommender policies
//! - Multi-round evaluation with learning between rounds, reported as CTR

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, VariantKind};
pub use domain::{Domain, PetActivity, PetHealth};
pub use error::{EvalError, Result};
pub use models::{Item, User};
pub use services::simulation::{Evaluation, EvaluationReport, EvaluationSettings};

use rand::Rng;
use tracing::{debug, Level};

/// Run one full evaluation of the configured variant.
pub fn run(config: &Config) -> Result<EvaluationReport> {
    let (_, mut rng) = config.rng();
    let report = match config.variant {
        VariantKind::PetActivity => evaluate::<PetActivity, _>(config, &mut rng),
        VariantKind::PetHealth => evaluate::<PetHealth, _>(config, &mut rng),
    };

    if tracing::enabled!(Level::DEBUG) {
        let json = serde_json::to_string(&report)?;
        debug!(report = %json, "Evaluation report");
    }
    Ok(report)
}

fn evaluate<D: Domain, R: Rng + ?Sized>(config: &Config, rng: &mut R) -> EvaluationReport {
    Evaluation::<D>::default()
        .with_learning(config.learning)
        .run(rng)
}
