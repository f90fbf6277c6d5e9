use crate::domain::Domain;
use rand::Rng;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Closed set of trait values with a stable position for each value.
///
/// Positions index the fixed-shape weight records kept by the personalized
/// recommender, so `ALL[v.index()] == v` must hold for every value.
pub trait Vocabulary: Copy + Debug + Eq + Hash + Send + Sync + 'static {
    const ALL: &'static [Self];

    fn index(self) -> usize;

    fn as_str(&self) -> &'static str;

    /// Uniform draw over the whole vocabulary.
    fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        pick(Self::ALL, rng)
    }
}

/// Uniform draw from a non-empty slice of values.
pub fn pick<T: Copy, R: Rng + ?Sized>(values: &[T], rng: &mut R) -> T {
    values[rng.gen_range(0..values.len())]
}

/// Low / medium / high scale shared by activity level, intensity and urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl Vocabulary for Level {
    const ALL: &'static [Self] = &[Level::Low, Level::Medium, Level::High];

    fn index(self) -> usize {
        match self {
            Level::Low => 0,
            Level::Medium => 1,
            Level::High => 2,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        }
    }
}

/// Synthetic user. Traits are fixed at generation time.
#[derive(Debug, Clone, PartialEq)]
pub struct User<D: Domain> {
    pub user_id: String,
    /// Primary traits (breed, or pet type + concern)
    pub profile: D::Profile,
    /// Activity level or urgency
    pub level: Level,
}

/// Recommendable content unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<D: Domain> {
    pub item_id: String,
    /// Category or topic
    pub category: D::Category,
    /// Intensity or urgency
    pub level: Level,
}

// ============================================
// Variant A: pet activity
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Breed {
    Husky,
    Corgi,
    Labrador,
    BorderCollie,
    Poodle,
}

impl Vocabulary for Breed {
    const ALL: &'static [Self] = &[
        Breed::Husky,
        Breed::Corgi,
        Breed::Labrador,
        Breed::BorderCollie,
        Breed::Poodle,
    ];

    fn index(self) -> usize {
        match self {
            Breed::Husky => 0,
            Breed::Corgi => 1,
            Breed::Labrador => 2,
            Breed::BorderCollie => 3,
            Breed::Poodle => 4,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Breed::Husky => "husky",
            Breed::Corgi => "corgi",
            Breed::Labrador => "labrador",
            Breed::BorderCollie => "border collie",
            Breed::Poodle => "poodle",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Walk,
    Meal,
    Training,
}

impl Vocabulary for Category {
    const ALL: &'static [Self] = &[Category::Walk, Category::Meal, Category::Training];

    fn index(self) -> usize {
        match self {
            Category::Walk => 0,
            Category::Meal => 1,
            Category::Training => 2,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Category::Walk => "walk",
            Category::Meal => "meal",
            Category::Training => "training",
        }
    }
}

// ============================================
// Variant B: pet health
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PetType {
    Dog,
    Cat,
}

impl Vocabulary for PetType {
    const ALL: &'static [Self] = &[PetType::Dog, PetType::Cat];

    fn index(self) -> usize {
        match self {
            PetType::Dog => 0,
            PetType::Cat => 1,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            PetType::Dog => "dog",
            PetType::Cat => "cat",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Concern {
    Digestive,
    Skin,
    Behavior,
    Mobility,
    Breathing,
}

impl Vocabulary for Concern {
    const ALL: &'static [Self] = &[
        Concern::Digestive,
        Concern::Skin,
        Concern::Behavior,
        Concern::Mobility,
        Concern::Breathing,
    ];

    fn index(self) -> usize {
        match self {
            Concern::Digestive => 0,
            Concern::Skin => 1,
            Concern::Behavior => 2,
            Concern::Mobility => 3,
            Concern::Breathing => 4,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Concern::Digestive => "digestive",
            Concern::Skin => "skin",
            Concern::Behavior => "behavior",
            Concern::Mobility => "mobility",
            Concern::Breathing => "breathing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    SymptomCheck,
    HomeCare,
    Nutrition,
    VetGuidance,
}

impl Vocabulary for Topic {
    const ALL: &'static [Self] = &[
        Topic::SymptomCheck,
        Topic::HomeCare,
        Topic::Nutrition,
        Topic::VetGuidance,
    ];

    fn index(self) -> usize {
        match self {
            Topic::SymptomCheck => 0,
            Topic::HomeCare => 1,
            Topic::Nutrition => 2,
            Topic::VetGuidance => 3,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Topic::SymptomCheck => "symptom_check",
            Topic::HomeCare => "home_care",
            Topic::Nutrition => "nutrition",
            Topic::VetGuidance => "vet_guidance",
        }
    }
}

/// Profile of a pet-health user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HealthProfile {
    pub pet_type: PetType,
    pub concern: Concern,
}
