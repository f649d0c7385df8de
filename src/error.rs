// Engine error taxonomy.
//
// Every failure a recommendation call can hit is local to that call and
// deterministic for the same inputs, so nothing here is retryable. Lookups
// that routinely miss (get_movie) return Option instead of an error.

/// Errors produced by the catalog and the recommendation algorithms.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("feature vector length mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("invalid feature vector for {movie}: {reason}")]
    InvalidFeatures { movie: String, reason: &'static str },

    #[error("cosine similarity is undefined for a zero-norm vector")]
    ZeroNorm,

    #[error("cosine similarity is not a finite number")]
    NonFiniteSimilarity,

    #[error("cannot average an empty rating map")]
    EmptyRatings,

    #[error("ratings carry no preference signal (preference vector is all zeros)")]
    NoPreferenceSignal,

    #[error("neighbor similarities sum to zero, predicted score is undefined")]
    ZeroTotalWeight,

    #[error("the catalog is empty")]
    EmptyCatalog,

    #[error("every catalog movie has already been rated")]
    NoUnseenMovies,

    #[error("movie not found: {title} ({year})")]
    UnknownMovie { title: String, year: i32 },
}

pub type EngineResult<T> = Result<T, EngineError>;
