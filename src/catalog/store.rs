// Catalog storage: an ordered map from MovieId to its feature vector.
//
// A BTreeMap keyed by MovieId gives lookups by identity and a fixed
// (year, title) iteration order in one structure, so every algorithm that
// walks the catalog is deterministic and ties always resolve the same way.
//
// The first vector inserted fixes the catalog's dimension. Later inserts
// with a different length are rejected, as are vectors that could never
// take part in a cosine similarity (empty, non-finite, or all zeros).

use std::collections::BTreeMap;

use tracing::debug;

use super::movie::MovieId;
use crate::error::{EngineError, EngineResult};

/// Fixed-length feature vector describing one movie.
pub type FeatureVector = Vec<f64>;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: BTreeMap<MovieId, FeatureVector>,
    dimension: Option<usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie, replacing the features of an existing entry with the
    /// same identity.
    pub fn insert(&mut self, movie: MovieId, features: FeatureVector) -> EngineResult<()> {
        validate_features(&movie, &features)?;

        if let Some(expected) = self.dimension {
            if features.len() != expected {
                return Err(EngineError::DimensionMismatch {
                    expected,
                    found: features.len(),
                });
            }
        }

        self.dimension = Some(features.len());
        if self.movies.insert(movie.clone(), features).is_some() {
            debug!(movie = %movie, "Replaced features of existing catalog entry");
        }
        Ok(())
    }

    /// Look up the stored identity for (title, year).
    pub fn get(&self, title: &str, year: i32) -> Option<&MovieId> {
        self.movies
            .get_key_value(&MovieId::new(title, year))
            .map(|(movie, _)| movie)
    }

    pub fn features(&self, movie: &MovieId) -> Option<&[f64]> {
        self.movies.get(movie).map(Vec::as_slice)
    }

    /// Entries in (year, title) order.
    pub fn iter(&self) -> impl Iterator<Item = (&MovieId, &[f64])> {
        self.movies
            .iter()
            .map(|(movie, features)| (movie, features.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Feature length shared by every entry, once the first movie is in.
    pub fn dimension(&self) -> Option<usize> {
        self.dimension
    }

    /// One `"<title> (<year>)"` line per movie, in catalog order.
    pub fn render(&self) -> String {
        self.movies
            .keys()
            .map(|movie| format!("{movie}\n"))
            .collect()
    }
}

fn validate_features(movie: &MovieId, features: &[f64]) -> EngineResult<()> {
    let reason = if features.is_empty() {
        Some("feature vector is empty")
    } else if features.iter().any(|f| !f.is_finite()) {
        Some("feature values must be finite")
    } else if features.iter().all(|f| *f == 0.0) {
        Some("feature vector is all zeros")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(EngineError::InvalidFeatures {
            movie: movie.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
