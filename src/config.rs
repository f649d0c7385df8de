use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Dataset used when CINEREC_DATASET is unset.
pub const DEFAULT_DATASET_PATH: &str = "./data/movies.json";

/// Neighbor count for collaborative filtering when CINEREC_NEIGHBORS is unset.
pub const DEFAULT_NEIGHBORS: usize = 3;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so either works.
/// Command-line flags override anything set here.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON dataset with the movie catalog and users
    pub dataset_path: PathBuf,
    /// Default k for collaborative filtering
    pub neighbors: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let dataset_path = env::var("CINEREC_DATASET")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_PATH));

        let neighbors = match env::var("CINEREC_NEIGHBORS") {
            Ok(raw) => parse_neighbors(&raw)?,
            Err(_) => DEFAULT_NEIGHBORS,
        };

        Ok(Self {
            dataset_path,
            neighbors,
        })
    }
}

/// Parse a neighbor count, which must be a positive integer.
pub fn parse_neighbors(raw: &str) -> Result<usize> {
    let k: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("CINEREC_NEIGHBORS must be a positive integer, got {raw:?}"))?;
    if k == 0 {
        anyhow::bail!("CINEREC_NEIGHBORS must be at least 1");
    }
    Ok(k)
}
