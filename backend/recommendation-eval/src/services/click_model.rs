// ============================================
// Click Model (點擊模型)
// ============================================
//
// Transparent additive click probability:
//   p = base
//     + category_match  if the item's category/topic suits the user
//     + level_match     if item level == user level
//     + escalation      if the domain's escalation condition holds
//   p = min(p, cap)
//
// Pure function of (user, item); the round runner draws the click.

use crate::domain::Domain;
use crate::models::{Item, User};

/// Probability that `user` clicks `item`, in `[D::CLICK.base, D::CLICK.cap]`
pub fn click_probability<D: Domain>(user: &User<D>, item: &Item<D>) -> f64 {
    let coefficients = D::CLICK;
    let mut p = coefficients.base;

    if D::category_affinity(user, item) {
        p += coefficients.category_match;
    }
    if user.level == item.level {
        p += coefficients.level_match;
    }
    if D::click_escalation(user, item) {
        p += coefficients.escalation;
    }

    p.min(coefficients.cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PetActivity, PetHealth};
    use crate::models::{Breed, Category, Concern, HealthProfile, Level, PetType, Topic};

    #[test]
    fn test_pet_activity_additive_terms() {
        let husky = User::<PetActivity> {
            user_id: "user_0".to_string(),
            profile: Breed::Husky,
            level: Level::High,
        };
        let walk = Item::<PetActivity> {
            item_id: "item_0".to_string(),
            category: Category::Walk,
            level: Level::High,
        };
        let meal = Item::<PetActivity> {
            item_id: "item_1".to_string(),
            category: Category::Meal,
            level: Level::Low,
        };

        // 0.05 + 0.05 + 0.08 + 0.07
        assert!((click_probability(&husky, &walk) - 0.25).abs() < 1e-9);
        assert!((click_probability(&husky, &meal) - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_pet_health_escalation() {
        let user = User::<PetHealth> {
            user_id: "user_0".to_string(),
            profile: HealthProfile {
                pet_type: PetType::Dog,
                concern: Concern::Breathing,
            },
            level: Level::High,
        };
        let vet = Item::<PetHealth> {
            item_id: "item_0".to_string(),
            category: Topic::VetGuidance,
            level: Level::High,
        };

        // 0.05 + 0.06 + 0.08 + 0.10
        assert!((click_probability(&user, &vet) - 0.29).abs() < 1e-9);
    }
}
