use super::{BaselineRules, ClickCoefficients, Domain, PersonalizedRules};
use crate::models::{Concern, HealthProfile, Item, Level, PetType, Topic, User, Vocabulary};
use rand::Rng;

/// Pet health assistant (PetCare): concerns, care topics, urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PetHealth;

impl PetHealth {
    /// Topic most relevant to a concern
    pub fn associated_topic(concern: Concern) -> Topic {
        match concern {
            Concern::Digestive => Topic::Nutrition,
            Concern::Skin => Topic::SymptomCheck,
            Concern::Behavior | Concern::Mobility => Topic::HomeCare,
            Concern::Breathing => Topic::VetGuidance,
        }
    }

    fn is_escalation(user: &User<Self>, item: &Item<Self>) -> bool {
        user.level == Level::High && item.category == Topic::VetGuidance
    }
}

impl Domain for PetHealth {
    type Profile = HealthProfile;
    type Category = Topic;

    const NAME: &'static str = "pet_health";
    const BANNER: &'static str = "PetCare AI Evaluation (Metric: CTR)";

    const CLICK: ClickCoefficients = ClickCoefficients {
        base: 0.05,
        category_match: 0.06,
        level_match: 0.08,
        escalation: 0.10,
        cap: 0.45,
    };

    const BASELINE: BaselineRules = BaselineRules {
        preferred_level_bonus: 2.0,
        useful_category_bonus: 1.0,
        escalation_bonus: 1.0,
    };

    const PERSONALIZED: PersonalizedRules = PersonalizedRules {
        category_increment: 1.0,
        level_increment: 0.5,
        safety_bias: 0.5,
    };

    // Skewed toward medium, low excluded
    const SALIENT_LEVELS: &'static [Level] = &[Level::Medium, Level::Medium, Level::High];

    fn draw_profile<R: Rng + ?Sized>(rng: &mut R) -> HealthProfile {
        let pet_type = PetType::draw(rng);
        let concern = Concern::draw(rng);
        HealthProfile { pet_type, concern }
    }

    fn is_high_salience(profile: &HealthProfile) -> bool {
        matches!(profile.concern, Concern::Breathing | Concern::Digestive)
    }

    fn category_affinity(user: &User<Self>, item: &Item<Self>) -> bool {
        item.category == Self::associated_topic(user.profile.concern)
    }

    fn click_escalation(user: &User<Self>, item: &Item<Self>) -> bool {
        Self::is_escalation(user, item)
    }

    fn preferred_level(user: &User<Self>) -> Level {
        user.level
    }

    fn is_useful_category(topic: Topic) -> bool {
        topic == Topic::SymptomCheck
    }

    fn baseline_escalation(user: &User<Self>, item: &Item<Self>) -> bool {
        Self::is_escalation(user, item)
    }

    fn safety_bias_applies(user: &User<Self>, item: &Item<Self>) -> bool {
        Self::is_escalation(user, item)
    }
}
