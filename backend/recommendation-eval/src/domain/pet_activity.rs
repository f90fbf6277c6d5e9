use super::{BaselineRules, ClickCoefficients, Domain, PersonalizedRules};
use crate::models::{Breed, Category, Item, Level, User, Vocabulary};
use rand::Rng;

/// Dog activity planner (WoofFit): breeds, walks/meals/training, intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PetActivity;

impl Domain for PetActivity {
    type Profile = Breed;
    type Category = Category;

    const NAME: &'static str = "pet_activity";
    const BANNER: &'static str = "WoofFit AI Evaluation (Metric: CTR)";

    const CLICK: ClickCoefficients = ClickCoefficients {
        base: 0.05,
        category_match: 0.05,
        level_match: 0.08,
        escalation: 0.07,
        cap: 0.40,
    };

    const BASELINE: BaselineRules = BaselineRules {
        preferred_level_bonus: 2.0,
        useful_category_bonus: 1.0,
        escalation_bonus: 0.0,
    };

    const PERSONALIZED: PersonalizedRules = PersonalizedRules {
        category_increment: 1.0,
        level_increment: 0.5,
        safety_bias: 0.0,
    };

    // High-energy breeds are never low activity
    const SALIENT_LEVELS: &'static [Level] = &[Level::Medium, Level::High];

    fn draw_profile<R: Rng + ?Sized>(rng: &mut R) -> Breed {
        Breed::draw(rng)
    }

    fn is_high_salience(breed: &Breed) -> bool {
        matches!(breed, Breed::Husky | Breed::BorderCollie)
    }

    fn category_affinity(_user: &User<Self>, item: &Item<Self>) -> bool {
        item.category == Category::Walk
    }

    fn click_escalation(user: &User<Self>, item: &Item<Self>) -> bool {
        user.profile == Breed::Husky && item.level == Level::High
    }

    fn preferred_level(user: &User<Self>) -> Level {
        if Self::is_high_salience(&user.profile) || user.level == Level::High {
            Level::High
        } else {
            Level::Medium
        }
    }

    fn is_useful_category(category: Category) -> bool {
        category == Category::Walk
    }
}
