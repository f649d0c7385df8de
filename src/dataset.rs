// Dataset loader: builds an engine and its users from a JSON file.
//
// Expected shape:
//
//   {
//     "movies": [{ "title": "Alien", "year": 1979, "features": [0.9, 0.1] }],
//     "users":  [{ "name": "dana", "ratings": [{ "title": "Alien", "year": 1979, "rating": 4.5 }] }]
//   }
//
// Every movie is inserted before any user is built, and a rating that
// points at a movie missing from the catalog fails the load. That keeps
// each user's rating map a subset of the catalog.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::engine::{RecommendationEngine, SharedEngine};
use crate::user::{RatingMap, User};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub movies: Vec<MovieRecord>,
    #[serde(default)]
    pub users: Vec<UserRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: i32,
    pub features: Vec<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(default)]
    pub ratings: Vec<RatingRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingRecord {
    pub title: String,
    pub year: i32,
    pub rating: f64,
}

impl Dataset {
    /// Read and parse a dataset file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset at {}", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("Failed to parse dataset at {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the shared engine, then one `User` per user record.
    pub fn build(self) -> Result<(SharedEngine, Vec<User>)> {
        let mut engine = RecommendationEngine::new();
        for record in self.movies {
            engine
                .add_movie(&record.title, record.year, record.features)
                .with_context(|| format!("Invalid movie {} ({})", record.title, record.year))?;
        }

        let mut ratings_per_user = Vec::with_capacity(self.users.len());
        for record in self.users {
            let mut ratings = RatingMap::new();
            for rating in record.ratings {
                let Some(movie) = engine.get_movie(&rating.title, rating.year) else {
                    anyhow::bail!(
                        "User {} rated {} ({}), which is not in the catalog",
                        record.name,
                        rating.title,
                        rating.year
                    );
                };
                ratings.insert(movie, rating.rating);
            }
            ratings_per_user.push((record.name, ratings));
        }

        info!(
            movies = engine.catalog().len(),
            users = ratings_per_user.len(),
            "Dataset loaded"
        );

        let shared = engine.into_shared();
        let users = ratings_per_user
            .into_iter()
            .map(|(name, ratings)| User::new(name, ratings, shared.clone()))
            .collect();

        Ok((shared, users))
    }
}
