// Colored terminal output for catalogs, users and recommendations.
//
// main.rs delegates all display here so the command handlers stay focused
// on loading data and calling the engine.

use colored::Colorize;

use crate::catalog::Catalog;
use crate::scoring::collaborative::Prediction;
use crate::scoring::Recommendation;
use crate::user::{RatingSource, User};

const TITLE_WIDTH: usize = 36;

/// Display the catalog in (year, title) order with its feature vectors.
pub fn display_catalog(catalog: &Catalog) {
    if catalog.is_empty() {
        println!("The catalog is empty. Add movies to your dataset file first.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Catalog ({} movies) ===", catalog.len()).bold()
    );
    println!();
    println!(
        "  {:<width$} {:>4}  {}",
        "Title".dimmed(),
        "Year".dimmed(),
        "Features".dimmed(),
        width = TITLE_WIDTH,
    );
    println!("  {}", "-".repeat(TITLE_WIDTH + 24).dimmed());

    for (movie, features) in catalog.iter() {
        println!(
            "  {:<width$} {:>4}  {}",
            super::truncate_chars(movie.title(), TITLE_WIDTH),
            movie.year(),
            format_vector(features).dimmed(),
            width = TITLE_WIDTH,
        );
    }
    println!();
}

/// Display every user with how many movies they have rated.
pub fn display_users(users: &[User]) {
    if users.is_empty() {
        println!("No users in this dataset.");
        return;
    }

    println!("\n{}", format!("=== Users ({}) ===", users.len()).bold());
    println!();
    for user in users {
        println!("  {:<24} {:>3} rated", user.name(), user.ratings().len());
    }
    println!();
}

/// Display a content-based pick.
pub fn display_content_pick(user: &str, rec: &Recommendation) {
    println!(
        "\n{} {}",
        format!("Recommended for {user} (content):").bold(),
        rec.movie.to_string().green().bold()
    );
    println!("  Similarity to preferences: {:.3}", rec.score);
}

/// Display a collaborative-filtering pick, or explain why there is none.
pub fn display_cf_pick(user: &str, k: usize, rec: Option<&Recommendation>) {
    match rec {
        Some(rec) => {
            println!(
                "\n{} {}",
                format!("Recommended for {user} (cf, k={k}):").bold(),
                rec.movie.to_string().green().bold()
            );
            println!("  Predicted rating: {:.2}", rec.score);
        }
        None => {
            println!(
                "\n{}",
                format!("No collaborative recommendation for {user} (k={k}).").yellow()
            );
            println!("  No unseen movie has a positive predicted rating.");
        }
    }
}

/// Display a predicted rating with the neighbors it was averaged from.
pub fn display_prediction(prediction: &Prediction, k: usize) {
    println!(
        "\n{} {:.2}",
        format!("Predicted rating for {} (k={k}):", prediction.movie).bold(),
        prediction.score
    );
    for n in &prediction.neighbors {
        println!(
            "  {:<width$} sim {:>6.3}  rated {:.1}",
            super::truncate_chars(&n.movie.to_string(), TITLE_WIDTH),
            n.similarity,
            n.rating,
            width = TITLE_WIDTH,
        );
    }
}

/// Display a preference vector, positive weights green and negative red.
pub fn display_preferences(user: &str, prefs: &[f64]) {
    println!("\n{}", format!("=== Preferences for {user} ===").bold());
    for (i, weight) in prefs.iter().enumerate() {
        let value = format!("{weight:+.3}");
        let value = if *weight > 0.0 {
            value.green()
        } else if *weight < 0.0 {
            value.red()
        } else {
            value.dimmed()
        };
        println!("  feature {i:>2}: {value}");
    }
}

fn format_vector(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:.2}")).collect();
    format!("[{}]", parts.join(", "))
}
