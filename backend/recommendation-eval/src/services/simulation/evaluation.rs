use super::round::run_round;
use crate::domain::Domain;
use crate::services::generator::{generate_items, generate_users};
use crate::services::recommender::{BaselineRecommender, PersonalizedRecommender, DEFAULT_K};
use crate::utils::ctr;
use rand::Rng;
use serde::Serialize;
use std::fmt::Write;
use std::marker::PhantomData;
use tracing::info;

/// Fixed shape of one evaluation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationSettings {
    pub users: usize,
    pub items: usize,
    pub k: usize,
    pub personalized_rounds: usize,
}

impl Default for EvaluationSettings {
    fn default() -> Self {
        Self {
            users: 80,
            items: 40,
            k: DEFAULT_K,
            personalized_rounds: 5,
        }
    }
}

/// Accumulated totals for one policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ArmReport {
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
}

impl ArmReport {
    fn accumulate(&mut self, impressions: u64, clicks: u64) {
        self.impressions += impressions;
        self.clicks += clicks;
        self.ctr = ctr(self.clicks, self.impressions);
    }
}

/// One personalized round, after its learning update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoundSummary {
    pub round: usize,
    pub impressions: u64,
    pub clicks: u64,
    pub ctr: f64,
    pub total_preference_weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationReport {
    pub variant: &'static str,
    pub banner: &'static str,
    pub learning: bool,
    pub baseline: ArmReport,
    pub personalized: ArmReport,
    pub rounds: Vec<RoundSummary>,
}

impl EvaluationReport {
    /// Console report: banner, then one CTR line per policy
    pub fn render_summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", self.banner);
        let _ = writeln!(out);
        let _ = writeln!(out, "Baseline CTR:      {:.4}", self.baseline.ctr);
        let _ = writeln!(out, "Personalized CTR: {:.4}", self.personalized.ctr);
        out
    }
}

/// Evaluation driver
///
/// Generates one population, runs the baseline for a single round, then a
/// single personalized instance for `personalized_rounds` rounds, feeding
/// each round's clicks back through `update` before the next round.
#[derive(Debug, Clone)]
pub struct Evaluation<D: Domain> {
    settings: EvaluationSettings,
    learning: bool,
    _domain: PhantomData<D>,
}

impl<D: Domain> Default for Evaluation<D> {
    fn default() -> Self {
        Self::new(EvaluationSettings::default())
    }
}

impl<D: Domain> Evaluation<D> {
    pub fn new(settings: EvaluationSettings) -> Self {
        Self {
            settings,
            learning: true,
            _domain: PhantomData,
        }
    }

    /// Disable `update` between rounds (no-learning control)
    pub fn with_learning(mut self, learning: bool) -> Self {
        self.learning = learning;
        self
    }

    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> EvaluationReport {
        let EvaluationSettings {
            users: user_count,
            items: item_count,
            k,
            personalized_rounds,
        } = self.settings;

        let users = generate_users::<D, _>(user_count, rng);
        let items = generate_items::<D, _>(item_count, rng);

        // Baseline: one round
        let baseline_policy = BaselineRecommender::<D>::new();
        let mut baseline = ArmReport::default();
        let result = run_round(&users, &items, k, &baseline_policy, rng);
        baseline.accumulate(result.impressions, result.clicks);

        info!(
            variant = D::NAME,
            impressions = baseline.impressions,
            clicks = baseline.clicks,
            ctr = baseline.ctr,
            "Baseline round completed"
        );

        // Personalized: several rounds, learning in between
        let mut personalized_policy = PersonalizedRecommender::<D>::new();
        let mut personalized = ArmReport::default();
        let mut rounds = Vec::with_capacity(personalized_rounds);

        for round in 1..=personalized_rounds {
            let result = run_round(&users, &items, k, &personalized_policy, rng);
            personalized.accumulate(result.impressions, result.clicks);

            if self.learning {
                for (user_id, clicked) in &result.clicked_by_user {
                    personalized_policy.update(user_id, clicked);
                }
            }

            let summary = RoundSummary {
                round,
                impressions: result.impressions,
                clicks: result.clicks,
                ctr: result.ctr(),
                total_preference_weight: personalized_policy.preferences().total_weight(),
            };

            info!(
                variant = D::NAME,
                round = summary.round,
                impressions = summary.impressions,
                clicks = summary.clicks,
                ctr = summary.ctr,
                total_preference_weight = summary.total_preference_weight,
                learning = self.learning,
                "Personalized round completed"
            );

            rounds.push(summary);
        }

        EvaluationReport {
            variant: D::NAME,
            banner: D::BANNER,
            learning: self.learning,
            baseline,
            personalized,
            rounds,
        }
    }
}
