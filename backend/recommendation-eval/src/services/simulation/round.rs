use crate::domain::Domain;
use crate::models::{Item, User};
use crate::services::click_model::click_probability;
use crate::services::recommender::Recommender;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Outcome of one pass over the population
#[derive(Debug, Clone)]
pub struct RoundResult<'a, D: Domain> {
    pub impressions: u64,
    pub clicks: u64,
    /// Clicked items per user in recommendation order; every user has an
    /// entry, possibly empty
    pub clicked_by_user: HashMap<String, Vec<&'a Item<D>>>,
}

impl<'a, D: Domain> RoundResult<'a, D> {
    pub fn ctr(&self) -> f64 {
        crate::utils::ctr(self.clicks, self.impressions)
    }
}

/// Recommend to every user in population order and simulate clicks.
///
/// One random draw per shown item decides the click: the item is clicked
/// when the draw is below `click_probability(user, item)`.
pub fn run_round<'a, D, P, R>(
    users: &[User<D>],
    items: &'a [Item<D>],
    k: usize,
    recommender: &P,
    rng: &mut R,
) -> RoundResult<'a, D>
where
    D: Domain,
    P: Recommender<D>,
    R: Rng + ?Sized,
{
    let mut impressions = 0u64;
    let mut clicks = 0u64;
    let mut clicked_by_user: HashMap<String, Vec<&'a Item<D>>> = users
        .iter()
        .map(|user| (user.user_id.clone(), Vec::new()))
        .collect();

    for user in users {
        let recs = recommender.recommend(user, items, k, rng);
        impressions += recs.len() as u64;

        for item in recs {
            if rng.gen::<f64>() < click_probability(user, item) {
                clicks += 1;
                clicked_by_user
                    .entry(user.user_id.clone())
                    .or_default()
                    .push(item);
            }
        }
    }

    debug!(
        policy = recommender.name(),
        users = users.len(),
        impressions = impressions,
        clicks = clicks,
        "Round completed"
    );

    RoundResult {
        impressions,
        clicks,
        clicked_by_user,
    }
}
