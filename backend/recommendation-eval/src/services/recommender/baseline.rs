use super::{rank_top_k, Recommender};
use crate::domain::Domain;
use crate::models::{Item, User};
use rand::Rng;
use std::marker::PhantomData;

/// Baseline Recommender - 靜態規則打分
///
/// Scores each item from the user's static traits only:
/// `preferred_level_bonus` when the item level equals the preferred level,
/// `useful_category_bonus` for the domain's generally useful category, and
/// `escalation_bonus` when the domain's escalation rule matches.
#[derive(Debug, Clone, Copy)]
pub struct BaselineRecommender<D: Domain> {
    _domain: PhantomData<D>,
}

impl<D: Domain> Default for BaselineRecommender<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Domain> BaselineRecommender<D> {
    pub fn new() -> Self {
        Self {
            _domain: PhantomData,
        }
    }

    pub fn score(&self, user: &User<D>, item: &Item<D>) -> f64 {
        let rules = D::BASELINE;
        let preferred = D::preferred_level(user);
        let mut score = 0.0;

        if item.level == preferred {
            score += rules.preferred_level_bonus;
        }
        if D::is_useful_category(item.category) {
            score += rules.useful_category_bonus;
        }
        if D::baseline_escalation(user, item) {
            score += rules.escalation_bonus;
        }

        score
    }
}

impl<D: Domain> Recommender<D> for BaselineRecommender<D> {
    fn name(&self) -> &'static str {
        "baseline"
    }

    fn recommend<'a, R: Rng + ?Sized>(
        &self,
        user: &User<D>,
        items: &'a [Item<D>],
        k: usize,
        rng: &mut R,
    ) -> Vec<&'a Item<D>> {
        rank_top_k(items, k, rng, |item| self.score(user, item))
    }
}
