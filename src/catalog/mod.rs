// Movie catalog: identities and their feature vectors.

pub mod movie;
pub mod store;

pub use movie::MovieId;
pub use store::{Catalog, FeatureVector};
