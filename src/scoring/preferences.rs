// Preference vector: a user's taste expressed in feature space.
//
// Each rated catalog movie pulls the vector toward (or away from) its own
// features by how far its rating sits from the user's average rating:
//
//   prefs[i] = sum over rated movies m of features(m)[i] * (rating(m) - avg)
//
// Features that show up in above-average movies get positive weight,
// features from below-average movies get negative weight.

use crate::catalog::{Catalog, FeatureVector};
use crate::error::{EngineError, EngineResult};
use crate::user::RatingMap;

/// Arithmetic mean of every rating in the map.
pub fn average_rating(ratings: &RatingMap) -> EngineResult<f64> {
    if ratings.is_empty() {
        return Err(EngineError::EmptyRatings);
    }
    Ok(ratings.values().sum::<f64>() / ratings.len() as f64)
}

/// Build the preference vector for a rating map against the catalog.
///
/// The average includes ratings for movies the catalog doesn't know, but
/// only catalog movies contribute features. When nothing matches, or every
/// rating equals the average, the result is the zero vector.
pub fn build_preferences(catalog: &Catalog, ratings: &RatingMap) -> EngineResult<FeatureVector> {
    let avg = average_rating(ratings)?;
    let mut prefs = vec![0.0; catalog.dimension().unwrap_or(0)];

    for (movie, features) in catalog.iter() {
        let Some(rating) = ratings.get(movie) else {
            continue;
        };
        let deviation = rating - avg;
        for (acc, feature) in prefs.iter_mut().zip(features) {
            *acc += feature * deviation;
        }
    }

    Ok(prefs)
}
