// ============================================
// Evaluation Domains
// ============================================
//
// One simulation engine, several product vocabularies. A domain supplies:
// - trait vocabularies and how a user's traits are drawn
// - click-model coefficients and predicates
// - baseline scoring rule table
// - personalized safety bias
//
// Implementations are zero-sized markers; every rule is a pure function of
// (user, item) so the engine stays generic over the domain.

pub mod pet_activity;
pub mod pet_health;

pub use pet_activity::PetActivity;
pub use pet_health::PetHealth;

use crate::models::{Item, Level, User, Vocabulary};
use rand::Rng;
use std::fmt::Debug;

/// Additive click-probability coefficients
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickCoefficients {
    pub base: f64,
    /// Item category/topic is the one associated with the user
    pub category_match: f64,
    /// Item level equals the user's level
    pub level_match: f64,
    pub escalation: f64,
    pub cap: f64,
}

/// Baseline recommender score table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaselineRules {
    pub preferred_level_bonus: f64,
    pub useful_category_bonus: f64,
    pub escalation_bonus: f64,
}

/// Personalized recommender learning rates and static bias
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalizedRules {
    /// Added to the clicked item's category/topic weight
    pub category_increment: f64,
    /// Added to the clicked item's level weight
    pub level_increment: f64,
    pub safety_bias: f64,
}

pub trait Domain: Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    type Profile: Debug + Clone + Copy + PartialEq + Send + Sync;
    type Category: Vocabulary;

    /// Configuration name (`pet_activity`, `pet_health`)
    const NAME: &'static str;
    /// Product line printed above the CTR report
    const BANNER: &'static str;

    const CLICK: ClickCoefficients;
    const BASELINE: BaselineRules;
    const PERSONALIZED: PersonalizedRules;

    /// Levels used to re-draw the level of a high-salience user
    const SALIENT_LEVELS: &'static [Level];

    fn draw_profile<R: Rng + ?Sized>(rng: &mut R) -> Self::Profile;

    /// Profiles whose level is re-drawn from `SALIENT_LEVELS`
    fn is_high_salience(profile: &Self::Profile) -> bool;

    // ---- click model ----

    fn category_affinity(user: &User<Self>, item: &Item<Self>) -> bool;

    fn click_escalation(user: &User<Self>, item: &Item<Self>) -> bool;

    // ---- baseline ----

    fn preferred_level(user: &User<Self>) -> Level;

    fn is_useful_category(category: Self::Category) -> bool;

    fn baseline_escalation(_user: &User<Self>, _item: &Item<Self>) -> bool {
        false
    }

    // ---- personalized ----

    fn safety_bias_applies(_user: &User<Self>, _item: &Item<Self>) -> bool {
        false
    }
}
