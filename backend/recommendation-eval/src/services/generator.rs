use crate::domain::Domain;
use crate::models::{pick, Item, Level, User, Vocabulary};
use rand::Rng;
use tracing::debug;

/// Generate `n` synthetic users with ids `user_0..user_{n-1}`.
///
/// Draw order per user: profile, level, then a re-draw of the level from
/// `D::SALIENT_LEVELS` when the profile is high-salience. The re-draw always
/// consumes random values after the first level draw.
pub fn generate_users<D: Domain, R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<User<D>> {
    let users: Vec<User<D>> = (0..n)
        .map(|i| {
            let profile = D::draw_profile(rng);
            let mut level = Level::draw(rng);
            if D::is_high_salience(&profile) {
                level = pick(D::SALIENT_LEVELS, rng);
            }
            User {
                user_id: format!("user_{}", i),
                profile,
                level,
            }
        })
        .collect();

    debug!(domain = D::NAME, count = users.len(), "Users generated");
    users
}

/// Generate `n` catalog items with ids `item_0..item_{n-1}`.
pub fn generate_items<D: Domain, R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Item<D>> {
    let items: Vec<Item<D>> = (0..n)
        .map(|i| Item {
            item_id: format!("item_{}", i),
            category: D::Category::draw(rng),
            level: Level::draw(rng),
        })
        .collect();

    debug!(
        domain = D::NAME,
        count = items.len(),
        mix = %category_mix(&items),
        "Items generated"
    );
    items
}

/// `walk=14 meal=12 training=14` style tally of the catalog
fn category_mix<D: Domain>(items: &[Item<D>]) -> String {
    D::Category::ALL
        .iter()
        .map(|category| {
            let count = items.iter().filter(|i| i.category == *category).count();
            format!("{}={}", category.as_str(), count)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PetActivity, PetHealth};
    use crate::models::{Breed, Concern};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_category_mix_names_every_category() {
        let mut rng = StdRng::seed_from_u64(5);
        let items = generate_items::<PetHealth, _>(40, &mut rng);
        let mix = category_mix(&items);

        assert!(mix.starts_with("symptom_check="));
        assert!(mix.contains(" vet_guidance="));
        let total: usize = mix
            .split(' ')
            .filter_map(|pair| pair.split_once('=')?.1.parse::<usize>().ok())
            .sum();
        assert_eq!(total, 40);
    }

    #[test]
    fn test_empty_population() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate_users::<PetActivity, _>(0, &mut rng).is_empty());
        assert!(generate_items::<PetHealth, _>(0, &mut rng).is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let mut rng = StdRng::seed_from_u64(2);
        let users = generate_users::<PetActivity, _>(80, &mut rng);
        let items = generate_items::<PetActivity, _>(40, &mut rng);

        let user_ids: HashSet<_> = users.iter().map(|u| u.user_id.as_str()).collect();
        let item_ids: HashSet<_> = items.iter().map(|i| i.item_id.as_str()).collect();
        assert_eq!(user_ids.len(), 80);
        assert_eq!(item_ids.len(), 40);
        assert_eq!(users[7].user_id, "user_7");
        assert_eq!(items[39].item_id, "item_39");
    }

    #[test]
    fn test_high_energy_breeds_never_low_activity() {
        let mut rng = StdRng::seed_from_u64(3);
        let users = generate_users::<PetActivity, _>(2000, &mut rng);

        for user in users
            .iter()
            .filter(|u| matches!(u.profile, Breed::Husky | Breed::BorderCollie))
        {
            assert_ne!(user.level, Level::Low, "{} drew low activity", user.user_id);
        }
        // other breeds keep the full range
        assert!(users
            .iter()
            .any(|u| u.profile == Breed::Corgi && u.level == Level::Low));
    }

    #[test]
    fn test_salient_concerns_skew_to_medium() {
        let mut rng = StdRng::seed_from_u64(4);
        let users = generate_users::<PetHealth, _>(4000, &mut rng);

        let salient: Vec<_> = users
            .iter()
            .filter(|u| matches!(u.profile.concern, Concern::Breathing | Concern::Digestive))
            .collect();
        assert!(!salient.is_empty());
        assert!(salient.iter().all(|u| u.level != Level::Low));

        let medium = salient.iter().filter(|u| u.level == Level::Medium).count();
        let high = salient.iter().filter(|u| u.level == Level::High).count();
        assert!(medium > high);
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = generate_users::<PetHealth, _>(50, &mut StdRng::seed_from_u64(9));
        let b = generate_users::<PetHealth, _>(50, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
