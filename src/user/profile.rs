// User: a named rating map bound to a shared recommendation engine.
//
// The user owns its ratings; the engine owns the catalog. Adding a movie
// is the one operation that touches both: the catalog insert happens under
// the engine's write lock, then the rating lands in this user's own map.

use tracing::info;

use super::{RatingMap, RatingSource};
use crate::catalog::{FeatureVector, MovieId};
use crate::engine::{self, SharedEngine};
use crate::error::{EngineError, EngineResult};
use crate::scoring::collaborative::Prediction;
use crate::scoring::Recommendation;

#[derive(Debug, Clone)]
pub struct User {
    name: String,
    ratings: RatingMap,
    engine: SharedEngine,
}

impl User {
    pub fn new(name: impl Into<String>, ratings: RatingMap, engine: SharedEngine) -> Self {
        Self {
            name: name.into(),
            ratings,
            engine,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a movie to the shared catalog and record this user's rating for it.
    pub fn add_movie_to_catalog(
        &mut self,
        title: &str,
        year: i32,
        features: FeatureVector,
        rating: f64,
    ) -> EngineResult<MovieId> {
        let movie = engine::write(&self.engine).add_movie(title, year, features)?;
        self.ratings.insert(movie.clone(), rating);
        info!(user = %self.name, movie = %movie, rating, "Rated new catalog movie");
        Ok(movie)
    }

    pub fn recommend_by_content(&self) -> EngineResult<Recommendation> {
        engine::read(&self.engine).recommend_by_content(self)
    }

    pub fn recommend_by_cf(&self, k: usize) -> EngineResult<Option<Recommendation>> {
        engine::read(&self.engine).recommend_by_cf(self, k)
    }

    /// Predict this user's rating for the catalog movie (title, year).
    pub fn predict_score_for(&self, title: &str, year: i32, k: usize) -> EngineResult<f64> {
        self.explain_prediction_for(title, year, k).map(|p| p.score)
    }

    /// Like `predict_score_for`, but keeps the neighbors behind the score.
    /// Lookup and prediction share one read lock.
    pub fn explain_prediction_for(
        &self,
        title: &str,
        year: i32,
        k: usize,
    ) -> EngineResult<Prediction> {
        let engine = engine::read(&self.engine);
        let movie = engine
            .get_movie(title, year)
            .ok_or_else(|| EngineError::UnknownMovie {
                title: title.to_string(),
                year,
            })?;
        engine.explain_prediction(self, &movie, k)
    }

    pub fn preferences(&self) -> EngineResult<FeatureVector> {
        engine::read(&self.engine).preferences(self)
    }
}

impl RatingSource for User {
    fn ratings(&self) -> &RatingMap {
        &self.ratings
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "name: {}", self.name)?;
        write!(f, "{}", engine::read(&self.engine))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecommendationEngine;

    #[test]
    fn test_add_movie_records_rating() {
        let shared = RecommendationEngine::new().into_shared();
        let mut user = User::new("dana", RatingMap::new(), shared.clone());

        let movie = user
            .add_movie_to_catalog("Paprika", 2006, vec![0.2, 0.9], 4.5)
            .unwrap();

        assert_eq!(user.ratings().get(&movie), Some(&4.5));
        let found = engine::read(&shared).get_movie("Paprika", 2006);
        assert_eq!(found, Some(movie));
    }

    #[test]
    fn test_failed_insert_leaves_ratings_untouched() {
        let shared = RecommendationEngine::new().into_shared();
        let mut user = User::new("dana", RatingMap::new(), shared);
        user.add_movie_to_catalog("A", 2000, vec![1.0, 0.0], 3.0)
            .unwrap();

        let err = user
            .add_movie_to_catalog("B", 2001, vec![1.0], 5.0)
            .unwrap_err();
        assert!(matches!(err, EngineError::DimensionMismatch { .. }));
        assert_eq!(user.ratings().len(), 1);
    }

    #[test]
    fn test_predict_unknown_movie() {
        let shared = RecommendationEngine::new().into_shared();
        let mut user = User::new("dana", RatingMap::new(), shared);
        user.add_movie_to_catalog("A", 2000, vec![1.0, 0.0], 3.0)
            .unwrap();
        assert_eq!(
            user.predict_score_for("Nope", 1999, 2),
            Err(EngineError::UnknownMovie {
                title: "Nope".to_string(),
                year: 1999
            })
        );
    }

    #[test]
    fn test_explained_prediction_keeps_neighbors() {
        let shared = RecommendationEngine::new().into_shared();
        let mut user = User::new("dana", RatingMap::new(), shared.clone());
        user.add_movie_to_catalog("A", 2000, vec![1.0, 0.0], 4.0)
            .unwrap();
        user.add_movie_to_catalog("B", 2001, vec![0.0, 1.0], 2.0)
            .unwrap();
        engine::write(&shared)
            .add_movie("C", 2002, vec![1.0, 1.0])
            .unwrap();

        let prediction = user.explain_prediction_for("C", 2002, 2).unwrap();
        assert_eq!(prediction.movie, MovieId::new("C", 2002));
        assert_eq!(prediction.neighbors.len(), 2);
        assert!((prediction.score - 3.0).abs() < 1e-9);
        assert_eq!(user.predict_score_for("C", 2002, 2), Ok(prediction.score));
    }

    #[test]
    fn test_display() {
        let shared = RecommendationEngine::new().into_shared();
        let mut user = User::new("dana", RatingMap::new(), shared);
        user.add_movie_to_catalog("B", 2001, vec![1.0], 3.0).unwrap();
        user.add_movie_to_catalog("A", 2000, vec![0.5], 2.0).unwrap();
        assert_eq!(user.to_string(), "name: dana\nA (2000)\nB (2001)\n");
    }
}
