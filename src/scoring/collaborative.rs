// Item-based collaborative filtering.
//
// To predict how a user would rate a movie, rank the movies they already
// rated by how similar each one is to the target, keep the k closest, and
// take the similarity-weighted average of their ratings:
//
//   predicted = sum(sim_i * rating_i) / sum(sim_i)
//
// The recommender repeats that for every unseen movie and returns the best
// prediction above PREDICTION_FLOOR. Movies whose best guess is zero or
// negative are never recommended.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::similarity::cosine_similarity;
use super::Recommendation;
use crate::catalog::{Catalog, MovieId};
use crate::error::{EngineError, EngineResult};
use crate::user::RatingMap;

/// Predictions must be strictly above this to be recommended.
pub const PREDICTION_FLOOR: f64 = 0.0;

/// A predicted rating together with the neighbors it was averaged from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    pub movie: MovieId,
    pub score: f64,
    pub neighbors: Vec<Neighbor>,
}

/// A rated movie together with its similarity to the prediction target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Neighbor {
    pub movie: MovieId,
    pub similarity: f64,
    pub rating: f64,
}

/// The `k` rated catalog movies most similar to `target`, most similar first.
///
/// Rated movies the catalog doesn't know are skipped. The sort is stable,
/// so equal similarities stay in catalog order.
pub fn nearest_rated(
    catalog: &Catalog,
    ratings: &RatingMap,
    target: &[f64],
    k: usize,
) -> EngineResult<Vec<Neighbor>> {
    let mut ranked = Vec::with_capacity(ratings.len());

    for (movie, features) in catalog.iter() {
        let Some(&rating) = ratings.get(movie) else {
            continue;
        };
        ranked.push(Neighbor {
            movie: movie.clone(),
            similarity: cosine_similarity(target, features)?,
            rating,
        });
    }

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    ranked.truncate(k);
    Ok(ranked)
}

/// Similarity-weighted average of the neighbors' ratings.
pub fn weighted_average(neighbors: &[Neighbor]) -> EngineResult<f64> {
    let (numerator, denominator) = neighbors
        .iter()
        .fold((0.0, 0.0), |(num, den), n| {
            (num + n.similarity * n.rating, den + n.similarity)
        });

    if denominator.abs() < f64::EPSILON {
        return Err(EngineError::ZeroTotalWeight);
    }
    Ok(numerator / denominator)
}

/// Predict the rating for `target` and keep the neighbors that produced it.
pub fn explain_prediction(
    catalog: &Catalog,
    ratings: &RatingMap,
    target: &MovieId,
    k: usize,
) -> EngineResult<Prediction> {
    let features = catalog
        .features(target)
        .ok_or_else(|| EngineError::UnknownMovie {
            title: target.title().to_string(),
            year: target.year(),
        })?;

    let neighbors = nearest_rated(catalog, ratings, features, k)?;
    let score = weighted_average(&neighbors)?;
    Ok(Prediction {
        movie: target.clone(),
        score,
        neighbors,
    })
}

/// Predict the rating for `target` from the user's `k` most similar rated movies.
pub fn predict_score(
    catalog: &Catalog,
    ratings: &RatingMap,
    target: &MovieId,
    k: usize,
) -> EngineResult<f64> {
    explain_prediction(catalog, ratings, target, k).map(|p| p.score)
}

/// Recommend the unseen movie with the highest predicted rating.
///
/// Returns `Ok(None)` when no unseen movie clears `PREDICTION_FLOOR`, which
/// includes an empty catalog and a fully rated one. Movies with no usable
/// neighbors are skipped rather than failing the whole search.
pub fn recommend_by_cf(
    catalog: &Catalog,
    ratings: &RatingMap,
    k: usize,
) -> EngineResult<Option<Recommendation>> {
    let mut best: Option<Recommendation> = None;
    let mut best_score = PREDICTION_FLOOR;

    for (movie, _) in catalog.iter().filter(|(m, _)| !ratings.contains_key(*m)) {
        let score = match predict_score(catalog, ratings, movie, k) {
            Ok(score) => score,
            Err(EngineError::ZeroTotalWeight) => {
                debug!(movie = %movie, k, "No neighbor weight, skipping candidate");
                continue;
            }
            Err(e) => return Err(e),
        };

        if score > best_score {
            best_score = score;
            best = Some(Recommendation {
                movie: movie.clone(),
                score,
            });
        }
    }

    Ok(best)
}
