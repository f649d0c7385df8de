// Users: rating maps and the collaborator that ties one to an engine.

pub mod profile;
pub mod traits;

use std::collections::BTreeMap;

use crate::catalog::MovieId;

/// One user's ratings, keyed by the movies they have seen.
pub type RatingMap = BTreeMap<MovieId, f64>;

pub use profile::User;
pub use traits::RatingSource;
