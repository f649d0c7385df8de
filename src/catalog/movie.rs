// MovieId: the immutable (title, year) identity used as a map key by the
// catalog and by every user's rating map.
//
// Field order matters: the derived Ord compares year first, then title,
// which is the order the catalog iterates and renders in.

use serde::{Deserialize, Serialize};

/// Identity of a movie in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MovieId {
    year: i32,
    title: String,
}

impl MovieId {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            year,
            title: title.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.year)
    }
}
