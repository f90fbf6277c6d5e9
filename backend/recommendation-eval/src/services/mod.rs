pub mod click_model;
pub mod generator;
pub mod recommender;
pub mod simulation;

pub use click_model::click_probability;
pub use generator::{generate_items, generate_users};
pub use recommender::{BaselineRecommender, PersonalizedRecommender, Recommender};
pub use simulation::{run_round, Evaluation, EvaluationReport, RoundResult};
