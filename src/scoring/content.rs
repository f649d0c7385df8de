// Content-based recommendation: the unseen movie closest to the user's
// preference vector.

use tracing::debug;

use super::preferences::build_preferences;
use super::similarity::cosine_similarity;
use super::Recommendation;
use crate::catalog::Catalog;
use crate::error::{EngineError, EngineResult};
use crate::user::RatingMap;

/// Recommend the unseen catalog movie whose features best match the
/// preference vector derived from `ratings`.
///
/// Fails with `EmptyCatalog`, `NoUnseenMovies` when every catalog movie is
/// already rated, `EmptyRatings`, or `NoPreferenceSignal` when the ratings
/// don't lean toward any feature.
pub fn recommend_by_content(catalog: &Catalog, ratings: &RatingMap) -> EngineResult<Recommendation> {
    if catalog.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }
    if catalog.iter().all(|(movie, _)| ratings.contains_key(movie)) {
        return Err(EngineError::NoUnseenMovies);
    }

    let prefs = build_preferences(catalog, ratings)?;
    find_best_fit(catalog, &prefs, ratings)
}

/// Scan unseen movies for the highest cosine similarity to `prefs`.
///
/// Ties keep the first movie in catalog order.
pub fn find_best_fit(
    catalog: &Catalog,
    prefs: &[f64],
    ratings: &RatingMap,
) -> EngineResult<Recommendation> {
    if catalog.is_empty() {
        return Err(EngineError::EmptyCatalog);
    }

    let mut best: Option<Recommendation> = None;

    for (movie, features) in catalog.iter().filter(|(m, _)| !ratings.contains_key(*m)) {
        let score = match cosine_similarity(prefs, features) {
            Ok(score) => score,
            Err(EngineError::ZeroNorm) => return Err(EngineError::NoPreferenceSignal),
            Err(e) => return Err(e),
        };

        if best.as_ref().map_or(true, |b| score > b.score) {
            best = Some(Recommendation {
                movie: movie.clone(),
                score,
            });
        }
    }

    let best = best.ok_or(EngineError::NoUnseenMovies)?;
    debug!(movie = %best.movie, similarity = best.score, "Content best fit");
    Ok(best)
}
