pub mod calories;
pub mod catalog;
pub mod diet;
pub mod error;
pub mod favorites;
pub mod ingest;
pub mod recipe;
pub mod recommend;
pub mod share;
pub mod synth;

pub use diet::{filter_ingredients, is_allowed};
pub use error::LarderError;
pub use favorites::Favorites;
pub use recipe::{Cuisine, DietaryTag, Recipe, RecipeRequest};
pub use recommend::{Recommendation, Recommender};
pub use synth::{generate_recipe, synthesize, SynthesisOptions, Synthesizer};
