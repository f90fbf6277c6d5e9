//! Configuration for the evaluation harness
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tracing::info;

/// Product variant to evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    #[default]
    PetActivity,
    PetHealth,
}

/// Loaded from `EVAL_*` environment variables; every field has a default
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Random seed (`EVAL_SEED`); a fresh one is drawn and logged when unset
    #[serde(default)]
    pub seed: Option<u64>,

    /// Product variant (`EVAL_VARIANT`)
    #[serde(default)]
    pub variant: VariantKind,

    /// Learn between personalized rounds (`EVAL_LEARNING`)
    #[serde(default = "default_learning")]
    pub learning: bool,
}

fn default_learning() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            variant: VariantKind::default(),
            learning: default_learning(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from `(name, value)` pairs; only `EVAL_*` names are read
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed("EVAL_").from_iter(vars)?)
    }

    /// Seeded random source for one run, with the seed actually used
    pub fn rng(&self) -> (u64, StdRng) {
        let seed = self.seed.unwrap_or_else(rand::random);
        info!(seed = seed, "Random source seeded");
        (seed, StdRng::seed_from_u64(seed))
    }
}
