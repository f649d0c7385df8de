// Recommendation engine: owns the catalog and answers recommendation
// requests for any rating source.
//
// The engine is the only mutable store. Users hold a SharedEngine handle:
// adding a movie takes the write lock, every query runs under a read lock.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use crate::catalog::{Catalog, FeatureVector, MovieId};
use crate::error::EngineResult;
use crate::scoring::collaborative::{self, Prediction};
use crate::scoring::{content, preferences, Recommendation};
use crate::user::RatingSource;

/// Engine handle shared between users.
pub type SharedEngine = Arc<RwLock<RecommendationEngine>>;

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    catalog: Catalog,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_shared(self) -> SharedEngine {
        Arc::new(RwLock::new(self))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Add a movie to the catalog (or replace its features) and return its id.
    pub fn add_movie(
        &mut self,
        title: &str,
        year: i32,
        features: FeatureVector,
    ) -> EngineResult<MovieId> {
        let movie = MovieId::new(title, year);
        self.catalog.insert(movie.clone(), features)?;
        debug!(movie = %movie, catalog_size = self.catalog.len(), "Added movie");
        Ok(movie)
    }

    /// Find a catalog movie by identity. `None` when it isn't in the catalog.
    pub fn get_movie(&self, title: &str, year: i32) -> Option<MovieId> {
        self.catalog.get(title, year).cloned()
    }

    /// The user's preference vector over the catalog's features.
    pub fn preferences<U: RatingSource + ?Sized>(&self, user: &U) -> EngineResult<FeatureVector> {
        preferences::build_preferences(&self.catalog, user.ratings())
    }

    pub fn recommend_by_content<U: RatingSource + ?Sized>(
        &self,
        user: &U,
    ) -> EngineResult<Recommendation> {
        let rec = content::recommend_by_content(&self.catalog, user.ratings())?;
        info!(movie = %rec.movie, similarity = rec.score, "Content recommendation");
        Ok(rec)
    }

    /// Collaborative-filtering recommendation using the `k` nearest rated movies.
    ///
    /// `Ok(None)` means no unseen movie has a positive predicted rating.
    pub fn recommend_by_cf<U: RatingSource + ?Sized>(
        &self,
        user: &U,
        k: usize,
    ) -> EngineResult<Option<Recommendation>> {
        let rec = collaborative::recommend_by_cf(&self.catalog, user.ratings(), k)?;
        match &rec {
            Some(rec) => info!(movie = %rec.movie, predicted = rec.score, k, "CF recommendation"),
            None => info!(k, "CF found no movie above the prediction floor"),
        }
        Ok(rec)
    }

    pub fn predict_score<U: RatingSource + ?Sized>(
        &self,
        user: &U,
        movie: &MovieId,
        k: usize,
    ) -> EngineResult<f64> {
        collaborative::predict_score(&self.catalog, user.ratings(), movie, k)
    }

    /// Predicted rating plus the neighbors it was averaged from.
    pub fn explain_prediction<U: RatingSource + ?Sized>(
        &self,
        user: &U,
        movie: &MovieId,
        k: usize,
    ) -> EngineResult<Prediction> {
        collaborative::explain_prediction(&self.catalog, user.ratings(), movie, k)
    }

    pub fn render(&self) -> String {
        self.catalog.render()
    }
}

impl std::fmt::Display for RecommendationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

/// Take the shared read lock. A panic elsewhere never leaves the catalog
/// half-written, so a poisoned lock is still safe to read.
pub fn read(engine: &SharedEngine) -> RwLockReadGuard<'_, RecommendationEngine> {
    engine.read().unwrap_or_else(PoisonError::into_inner)
}

/// Take the exclusive write lock.
pub fn write(engine: &SharedEngine) -> RwLockWriteGuard<'_, RecommendationEngine> {
    engine.write().unwrap_or_else(PoisonError::into_inner)
}
