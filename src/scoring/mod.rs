// Recommendation algorithms: cosine similarity, preference vectors,
// content-based best fit and item-based collaborative filtering.
//
// Everything here is a pure function over a borrowed catalog and a borrowed
// rating map. The engine module owns the catalog and wires these together.

pub mod collaborative;
pub mod content;
pub mod preferences;
pub mod similarity;

use serde::Serialize;

use crate::catalog::MovieId;

/// A recommended movie and the score that selected it.
///
/// For content recommendations the score is the cosine similarity to the
/// preference vector; for collaborative filtering it is the predicted rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub movie: MovieId,
    pub score: f64,
}
