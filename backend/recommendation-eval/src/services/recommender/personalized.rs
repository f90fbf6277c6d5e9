// ============================================
// Personalized Recommender (個性化推薦)
// ============================================
//
// Online-adaptive policy. Every observed click adds
//   +category_increment to the weight of the item's category/topic
//   +level_increment    to the weight of the item's level
// in the user's bucket. Weights never decay within a run.
//
// Score(item) = w[category] + w[level] (+ safety_bias when it applies).
// A user with no bucket scores every item at the safety bias only, so the
// cold-start ranking is decided by the random tiebreak.

use super::{rank_top_k, Recommender};
use crate::domain::Domain;
use crate::models::{Item, Level, User, Vocabulary};
use rand::Rng;
use std::collections::HashMap;
use std::marker::PhantomData;
use tracing::debug;

/// Learned weights of one user: one slot per category/topic, one per level
#[derive(Debug, Clone, PartialEq)]
pub struct UserPreferences {
    categories: Vec<f64>,
    levels: [f64; 3],
}

impl UserPreferences {
    fn new<C: Vocabulary>() -> Self {
        Self {
            categories: vec![0.0; C::ALL.len()],
            levels: [0.0; 3],
        }
    }

    pub fn category_weight<C: Vocabulary>(&self, category: C) -> f64 {
        self.categories
            .get(category.index())
            .copied()
            .unwrap_or(0.0)
    }

    pub fn level_weight(&self, level: Level) -> f64 {
        self.levels[level.index()]
    }

    pub fn total(&self) -> f64 {
        self.categories.iter().sum::<f64>() + self.levels.iter().sum::<f64>()
    }
}

/// Per-user preference buckets, created lazily on a user's first update
#[derive(Debug, Clone)]
pub struct PreferenceState<D: Domain> {
    users: HashMap<String, UserPreferences>,
    _domain: PhantomData<D>,
}

impl<D: Domain> Default for PreferenceState<D> {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            _domain: PhantomData,
        }
    }
}

impl<D: Domain> PreferenceState<D> {
    pub fn get(&self, user_id: &str) -> Option<&UserPreferences> {
        self.users.get(user_id)
    }

    fn bucket_mut(&mut self, user_id: &str) -> &mut UserPreferences {
        self.users
            .entry(user_id.to_string())
            .or_insert_with(UserPreferences::new::<D::Category>)
    }

    fn record_clicks(&mut self, user_id: &str, clicked_items: &[&Item<D>]) {
        let rules = D::PERSONALIZED;
        let bucket = self.bucket_mut(user_id);
        for item in clicked_items {
            bucket.categories[item.category.index()] += rules.category_increment;
            bucket.levels[item.level.index()] += rules.level_increment;
        }
    }

    /// Learned weight for `item`, 0 for an unseen user or key
    pub fn learned_score(&self, user_id: &str, item: &Item<D>) -> f64 {
        self.users
            .get(user_id)
            .map(|prefs| prefs.category_weight(item.category) + prefs.level_weight(item.level))
            .unwrap_or(0.0)
    }

    /// Number of users with a bucket
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Sum of all weights across the population
    pub fn total_weight(&self) -> f64 {
        self.users.values().map(UserPreferences::total).sum()
    }
}

#[derive(Debug)]
pub struct PersonalizedRecommender<D: Domain> {
    preferences: PreferenceState<D>,
}

impl<D: Domain> Default for PersonalizedRecommender<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Domain> PersonalizedRecommender<D> {
    pub fn new() -> Self {
        Self {
            preferences: PreferenceState::default(),
        }
    }

    /// Learn from the items `user_id` clicked in one round.
    ///
    /// The user's bucket exists after the first call, even with no clicks.
    pub fn update(&mut self, user_id: &str, clicked_items: &[&Item<D>]) {
        self.preferences.record_clicks(user_id, clicked_items);

        if !clicked_items.is_empty() {
            debug!(
                user_id = user_id,
                clicks = clicked_items.len(),
                "Preferences updated"
            );
        }
    }

    pub fn score(&self, user: &User<D>, item: &Item<D>) -> f64 {
        let mut score = self.preferences.learned_score(&user.user_id, item);
        if D::safety_bias_applies(user, item) {
            score += D::PERSONALIZED.safety_bias;
        }
        score
    }

    /// Read-only view of the learned state
    pub fn preferences(&self) -> &PreferenceState<D> {
        &self.preferences
    }
}

impl<D: Domain> Recommender<D> for PersonalizedRecommender<D> {
    fn name(&self) -> &'static str {
        "personalized"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PetActivity, PetHealth};
    use crate::models::{Breed, Category, Concern, HealthProfile, PetType, Topic};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn walk_high() -> Item<PetActivity> {
        Item {
            item_id: "item_0".to_string(),
            category: Category::Walk,
            level: Level::High,
        }
    }

    fn meal_low() -> Item<PetActivity> {
        Item {
            item_id: "item_1".to_string(),
            category: Category::Meal,
            level: Level::Low,
        }
    }

    fn corgi() -> User<PetActivity> {
        User {
            user_id: "user_0".to_string(),
            profile: Breed::Corgi,
            level: Level::Low,
        }
    }

    #[test]
    fn test_update_increments() {
        let mut recommender = PersonalizedRecommender::<PetActivity>::new();
        let walk = walk_high();

        recommender.update("user_0", &[&walk, &walk]);

        let prefs = recommender.preferences().get("user_0").unwrap();
        assert_eq!(prefs.category_weight(Category::Walk), 2.0);
        assert_eq!(prefs.level_weight(Level::High), 1.0);
        assert_eq!(prefs.category_weight(Category::Meal), 0.0);
        assert_eq!(prefs.total(), 3.0);
    }

    #[test]
    fn test_empty_update_creates_empty_bucket() {
        let mut recommender = PersonalizedRecommender::<PetActivity>::new();
        recommender.update("user_0", &[]);
        assert_eq!(recommender.preferences().user_count(), 1);
        assert_eq!(recommender.preferences().total_weight(), 0.0);
        assert_eq!(recommender.score(&corgi(), &walk_high()), 0.0);
    }

    #[test]
    fn test_weights_accumulate_across_updates() {
        let mut recommender = PersonalizedRecommender::<PetActivity>::new();
        let walk = walk_high();
        let meal = meal_low();

        recommender.update("user_0", &[&walk]);
        let before = recommender.preferences().total_weight();
        recommender.update("user_0", &[&meal]);
        recommender.update("user_1", &[&walk]);

        assert!(recommender.preferences().total_weight() > before);
        assert_eq!(recommender.preferences().total_weight(), 4.5);
        assert_eq!(recommender.preferences().user_count(), 2);
    }

    #[test]
    fn test_cold_start_scores_are_zero() {
        let recommender = PersonalizedRecommender::<PetActivity>::new();
        let user = corgi();
        assert_eq!(recommender.score(&user, &walk_high()), 0.0);
        assert_eq!(recommender.score(&user, &meal_low()), 0.0);
    }

    #[test]
    fn test_cold_start_safety_bias_only() {
        let recommender = PersonalizedRecommender::<PetHealth>::new();
        let urgent = User {
            user_id: "user_0".to_string(),
            profile: HealthProfile {
                pet_type: PetType::Cat,
                concern: Concern::Skin,
            },
            level: Level::High,
        };

        for topic in Topic::ALL {
            let item = Item {
                item_id: "item_0".to_string(),
                category: *topic,
                level: Level::Low,
            };
            let expected = if *topic == Topic::VetGuidance { 0.5 } else { 0.0 };
            assert_eq!(recommender.score(&urgent, &item), expected);
        }
    }

    #[test]
    fn test_learned_preference_wins_ranking() {
        let mut recommender = PersonalizedRecommender::<PetActivity>::new();
        let user = corgi();
        let items: Vec<Item<PetActivity>> = (0..12)
            .map(|i| Item {
                item_id: format!("item_{}", i),
                category: if i == 7 { Category::Training } else { Category::Meal },
                level: Level::Low,
            })
            .collect();

        recommender.update(&user.user_id, &[&items[7]]);

        let mut rng = StdRng::seed_from_u64(13);
        let recs = recommender.recommend(&user, &items, 3, &mut rng);
        assert_eq!(recs[0].item_id, "item_7");
    }

    #[test]
    fn test_other_users_unaffected() {
        let mut recommender = PersonalizedRecommender::<PetActivity>::new();
        recommender.update("user_9", &[&walk_high()]);
        assert_eq!(recommender.score(&corgi(), &walk_high()), 0.0);
    }
}
