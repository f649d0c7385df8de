use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use cinerec::config::Config;
use cinerec::dataset::Dataset;
use cinerec::engine;
use cinerec::output::terminal;
use cinerec::user::User;

/// Cinerec: movie recommendations from a feature-tagged catalog.
///
/// Recommends unseen movies either by matching a user's taste profile
/// against movie features, or by predicting ratings from the most similar
/// movies the user already rated.
#[derive(Parser)]
#[command(name = "cinerec", version, about)]
struct Cli {
    /// Dataset file (overrides CINEREC_DATASET)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the catalog, sorted by year then title
    Catalog,

    /// List users and how many movies each has rated
    Users,

    /// Recommend by content: the unseen movie closest to the user's taste
    Content {
        /// User name from the dataset
        #[arg(long)]
        user: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend by item-based collaborative filtering
    Cf {
        /// User name from the dataset
        #[arg(long)]
        user: String,

        /// Number of most similar rated movies to use (overrides CINEREC_NEIGHBORS)
        #[arg(long, value_parser = neighbors_arg())]
        k: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Predict a user's rating for one catalog movie
    Predict {
        /// User name from the dataset
        #[arg(long)]
        user: String,

        /// Movie title
        #[arg(long)]
        title: String,

        /// Release year
        #[arg(long)]
        year: i32,

        /// Number of most similar rated movies to use (overrides CINEREC_NEIGHBORS)
        #[arg(long, value_parser = neighbors_arg())]
        k: Option<usize>,
    },

    /// Show a user's preference vector
    Profile {
        /// User name from the dataset
        #[arg(long)]
        user: String,
    },
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cinerec=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let dataset_path = cli.dataset.unwrap_or(config.dataset_path);

    info!(path = %dataset_path.display(), "Loading dataset");
    let (shared, users) = Dataset::load(&dataset_path)?.build()?;

    match cli.command {
        Commands::Catalog => {
            terminal::display_catalog(engine::read(&shared).catalog());
        }

        Commands::Users => {
            terminal::display_users(&users);
        }

        Commands::Content { user, json } => {
            let user = find_user(&users, &user)?;
            let rec = user
                .recommend_by_content()
                .with_context(|| format!("No content recommendation for {}", user.name()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                terminal::display_content_pick(user.name(), &rec);
            }
        }

        Commands::Cf { user, k, json } => {
            let user = find_user(&users, &user)?;
            let k = k.unwrap_or(config.neighbors);
            let rec = user.recommend_by_cf(k)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&rec)?);
            } else {
                terminal::display_cf_pick(user.name(), k, rec.as_ref());
            }
        }

        Commands::Predict {
            user,
            title,
            year,
            k,
        } => {
            let user = find_user(&users, &user)?;
            let k = k.unwrap_or(config.neighbors);
            let prediction = user
                .explain_prediction_for(&title, year, k)
                .with_context(|| format!("Cannot predict {title} ({year}) for {}", user.name()))?;
            terminal::display_prediction(&prediction, k);
        }

        Commands::Profile { user } => {
            let user = find_user(&users, &user)?;
            let prefs = user
                .preferences()
                .with_context(|| format!("Cannot build preferences for {}", user.name()))?;
            terminal::display_preferences(user.name(), &prefs);
        }
    }

    Ok(())
}

/// `--k` must be at least 1: zero neighbors carry no weight.
fn neighbors_arg() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

/// Find a dataset user by name, or bail with the names that do exist.
fn find_user<'a>(users: &'a [User], name: &str) -> Result<&'a User> {
    users.iter().find(|u| u.name() == name).ok_or_else(|| {
        let known: Vec<&str> = users.iter().map(User::name).collect();
        anyhow::anyhow!(
            "Unknown user {name:?}. Users in this dataset: {}",
            known.join(", ")
        )
    })
}
