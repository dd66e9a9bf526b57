//! Synthetic training data for the score model.
//!
//! There is no per-title dataset behind the dashboard, so the model is fit
//! on random titles whose score follows a fixed heuristic: a noisy base
//! around 7, a bonus for each "popular" genre and a logarithmic bonus for
//! the member count.

use rand::Rng;
use rand_distr::{Distribution, Exp, Normal};

use super::error::EstimatorError;

pub const BASE_SCORE_MEAN: f64 = 7.0;
pub const BASE_SCORE_STD: f64 = 1.0;
pub const POPULAR_GENRE_BONUS: f64 = 0.3;
/// Mean of the exponential distribution members are drawn from.
pub const MEMBERS_SCALE: f64 = 500_000.0;
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct TrainingSet {
    /// One row per title: genre indicators followed by the member count.
    pub features: Vec<Vec<f64>>,
    pub labels: Vec<f64>,
}

impl TrainingSet {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Draws `n_samples` random titles over `n_genres` genre columns.
///
/// All randomness comes from `rng`, in a fixed order (genre flags row by
/// row, then members, then score noise), so a seeded generator always
/// produces the same set.
pub fn generate_training_set<R: Rng + ?Sized>(
    rng: &mut R,
    n_samples: usize,
    n_genres: usize,
    popular_genres: &[usize],
) -> Result<TrainingSet, EstimatorError> {
    if let Some(&out_of_range) = popular_genres.iter().find(|&&idx| idx >= n_genres) {
        return Err(EstimatorError::DimensionMismatch {
            expected: n_genres,
            actual: out_of_range + 1,
        });
    }

    let mut features: Vec<Vec<f64>> = (0..n_samples)
        .map(|_| {
            let mut row = Vec::with_capacity(n_genres + 1);
            row.extend((0..n_genres).map(|_| rng.random_range(0..2u8) as f64));
            row
        })
        .collect();

    let members = Exp::new(1.0 / MEMBERS_SCALE)
        .map_err(|e| EstimatorError::InvalidDistribution(e.to_string()))?;
    for row in features.iter_mut() {
        row.push(members.sample(rng));
    }

    let noise = Normal::new(BASE_SCORE_MEAN, BASE_SCORE_STD)
        .map_err(|e| EstimatorError::InvalidDistribution(e.to_string()))?;
    let labels = features
        .iter()
        .map(|row| noise.sample(rng) + heuristic_bonus(row, popular_genres))
        .map(|score| score.clamp(MIN_SCORE, MAX_SCORE))
        .collect();

    Ok(TrainingSet { features, labels })
}

/// Deterministic part of a synthetic score for one feature row.
fn heuristic_bonus(row: &[f64], popular_genres: &[usize]) -> f64 {
    let genre_bonus: f64 = popular_genres
        .iter()
        .map(|&idx| row[idx] * POPULAR_GENRE_BONUS)
        .sum();
    let members = row.last().copied().unwrap_or(0.0);
    genre_bonus + (members + 1.0).ln() / 20.0
}
