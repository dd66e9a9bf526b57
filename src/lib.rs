//! Anime Insights Server Library
//!
//! Serves precomputed anime dataset aggregates and a KNN score estimator
//! over HTTP. The modules are exposed for testing and potential reuse.

pub mod analytics;
pub mod config;
pub mod estimator;
pub mod server;

// Re-export commonly used types for convenience
pub use analytics::{AnalyticsStore, StaticAnalyticsStore};
pub use estimator::{KnnScoreEstimator, ScorePredictor};
pub use server::{run_server, RequestsLoggingLevel, ServerConfig};
