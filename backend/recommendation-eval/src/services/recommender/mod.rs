/// Recommender policies
///
/// Both policies score every catalog item, attach a fresh random tiebreak to
/// each score and return the top `k` by `(score, tiebreak)` descending.
///
/// # Policies
/// - **Baseline**: static rule table over the user's traits, no memory
/// - **Personalized**: per-user weights learned from observed clicks
pub mod baseline;
pub mod personalized;

pub use baseline::BaselineRecommender;
pub use personalized::{PersonalizedRecommender, PreferenceState, UserPreferences};

use crate::domain::Domain;
use crate::models::{Item, User};
use rand::Rng;

/// Default list length
pub const DEFAULT_K: usize = 5;

pub trait Recommender<D: Domain> {
    fn name(&self) -> &'static str;

    /// Rank `items` for `user` and return at most `k` of them.
    fn recommend<'a, R: Rng + ?Sized>(
        &self,
        user: &User<D>,
        items: &'a [Item<D>],
        k: usize,
        rng: &mut R,
    ) -> Vec<&'a Item<D>>;
}

/// Score each item, draw one tiebreak per item in catalog order, and keep
/// the `k` best by `(score, tiebreak)` descending.
pub(crate) fn rank_top_k<'a, D, R, F>(
    items: &'a [Item<D>],
    k: usize,
    rng: &mut R,
    mut score: F,
) -> Vec<&'a Item<D>>
where
    D: Domain,
    R: Rng + ?Sized,
    F: FnMut(&Item<D>) -> f64,
{
    let mut scored: Vec<(f64, f64, &'a Item<D>)> = items
        .iter()
        .map(|item| (score(item), rng.gen::<f64>(), item))
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.total_cmp(&a.1)));

    scored.into_iter().take(k).map(|(_, _, item)| item).collect()
}
