// Cinerec: content-based and item-based collaborative movie recommendations.
//
// This is the library root. The engine owns the catalog; users borrow it
// through a shared handle and hand their ratings to the scoring functions.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod output;
pub mod scoring;
pub mod user;

pub use catalog::{Catalog, FeatureVector, MovieId};
pub use engine::{RecommendationEngine, SharedEngine};
pub use error::{EngineError, EngineResult};
pub use scoring::Recommendation;
pub use user::{RatingMap, RatingSource, User};
