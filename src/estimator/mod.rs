mod error;
mod knn;
mod models;
mod scaler;
mod score_estimator;
pub mod synthetic;

pub use error::EstimatorError;
pub use knn::KnnRegressor;
pub use models::{ModelInfo, ModelStats, PredictionRequest, PredictionResult, DEFAULT_MEMBERS};
pub use scaler::StandardScaler;
pub use score_estimator::{
    KnnScoreEstimator, ScorePredictor, DEFAULT_SEED, NEIGHBORS, POPULAR_GENRES, TRAINING_SAMPLES,
};
