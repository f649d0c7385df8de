// Rating source trait: the read-only view of a user the engine consumes.
//
// The engine never asks a user to change its ratings; it only borrows the
// map for the duration of one recommendation call. Anything that can hand
// out a RatingMap can be recommended for, including a bare map in tests.

use super::RatingMap;

pub trait RatingSource {
    /// The movies this source has rated, with their ratings.
    fn ratings(&self) -> &RatingMap;
}

impl RatingSource for RatingMap {
    fn ratings(&self) -> &RatingMap {
        self
    }
}
