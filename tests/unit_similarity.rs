// Unit tests for cosine similarity and the preference builder.
//
// Tests isolated pure functions: cosine_similarity algebraic properties
// (symmetry, self-similarity, scale invariance) and its error cases, and
// build_preferences against hand-computed vectors.

use cinerec::catalog::{Catalog, MovieId};
use cinerec::error::EngineError;
use cinerec::scoring::preferences::{average_rating, build_preferences};
use cinerec::scoring::similarity::cosine_similarity;
use cinerec::user::RatingMap;

fn sample_vectors() -> Vec<Vec<f64>> {
    vec![
        vec![1.0, 0.0, 0.0],
        vec![0.3, -1.2, 4.0],
        vec![-2.0, 0.5, 0.5],
        vec![0.001, 1000.0, -3.0],
        vec![1.0, 1.0, 1.0],
    ]
}

// ============================================================
// cosine_similarity: properties
// ============================================================

#[test]
fn similarity_is_symmetric() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            let ab = cosine_similarity(a, b).unwrap();
            let ba = cosine_similarity(b, a).unwrap();
            assert!(
                (ab - ba).abs() < 1e-12,
                "similarity({a:?}, {b:?}) = {ab} but reversed = {ba}"
            );
        }
    }
}

#[test]
fn similarity_with_self_is_one() {
    for v in sample_vectors() {
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-9, "Self-similarity of {v:?} was {sim}");
    }
}

#[test]
fn similarity_stays_in_range() {
    let vectors = sample_vectors();
    for a in &vectors {
        for b in &vectors {
            let sim = cosine_similarity(a, b).unwrap();
            assert!(
                (-1.0 - 1e-9..=1.0 + 1e-9).contains(&sim),
                "Out of range: {sim}"
            );
        }
    }
}

#[test]
fn similarity_ignores_positive_scale() {
    let a = [0.3, -1.2, 4.0];
    let scaled = [3.0, -12.0, 40.0];
    let b = [1.0, 2.0, 3.0];
    let s1 = cosine_similarity(&a, &b).unwrap();
    let s2 = cosine_similarity(&scaled, &b).unwrap();
    assert!((s1 - s2).abs() < 1e-12);
}

#[test]
fn similarity_survives_extreme_magnitudes() {
    let huge = [1e200, 1e200];
    let tiny = [1e-170, 1e-170];
    for (a, b) in [(&huge, &huge), (&tiny, &tiny), (&huge, &tiny)] {
        let sim = cosine_similarity(a, b).unwrap();
        assert!((sim - 1.0).abs() < 1e-9, "similarity({a:?}, {b:?}) = {sim}");
    }
}

// ============================================================
// cosine_similarity: error cases
// ============================================================

#[test]
fn similarity_zero_vector() {
    assert_eq!(
        cosine_similarity(&[0.0, 0.0, 0.0], &[1.0, 2.0, 3.0]),
        Err(EngineError::ZeroNorm)
    );
}

#[test]
fn similarity_empty_vectors() {
    // Empty vectors have zero norm
    assert_eq!(cosine_similarity(&[], &[]), Err(EngineError::ZeroNorm));
}

#[test]
fn similarity_non_finite_input() {
    assert_eq!(
        cosine_similarity(&[f64::INFINITY, 0.0], &[1.0, 0.0]),
        Err(EngineError::NonFiniteSimilarity)
    );
}

#[test]
fn similarity_length_mismatch() {
    assert!(matches!(
        cosine_similarity(&[1.0], &[1.0, 1.0]),
        Err(EngineError::DimensionMismatch {
            expected: 1,
            found: 2
        })
    ));
}

// ============================================================
// build_preferences
// ============================================================

fn abc_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert(MovieId::new("A", 2000), vec![1.0, 0.0]).unwrap();
    catalog.insert(MovieId::new("B", 2001), vec![0.0, 1.0]).unwrap();
    catalog.insert(MovieId::new("C", 2002), vec![1.0, 1.0]).unwrap();
    catalog
}

#[test]
fn preferences_scenario() {
    let ratings = RatingMap::from([
        (MovieId::new("A", 2000), 5.0),
        (MovieId::new("B", 2001), 1.0),
    ]);
    assert!((average_rating(&ratings).unwrap() - 3.0).abs() < 1e-12);
    assert_eq!(
        build_preferences(&abc_catalog(), &ratings).unwrap(),
        vec![2.0, -2.0]
    );
}

#[test]
fn preferences_sum_over_shared_features() {
    // avg = 3; A: [1*(4-3), 0]; C: [1*(2-3), 1*(2-3)]; B: [0, 1*(3-3)]
    let ratings = RatingMap::from([
        (MovieId::new("A", 2000), 4.0),
        (MovieId::new("B", 2001), 3.0),
        (MovieId::new("C", 2002), 2.0),
    ]);
    assert_eq!(
        build_preferences(&abc_catalog(), &ratings).unwrap(),
        vec![0.0, -1.0]
    );
}

#[test]
fn preferences_empty_ratings() {
    assert_eq!(
        build_preferences(&abc_catalog(), &RatingMap::new()),
        Err(EngineError::EmptyRatings)
    );
}

#[test]
fn preferences_empty_catalog_is_zero_length() {
    let ratings = RatingMap::from([(MovieId::new("A", 2000), 5.0)]);
    assert_eq!(
        build_preferences(&Catalog::new(), &ratings).unwrap(),
        Vec::<f64>::new()
    );
}
