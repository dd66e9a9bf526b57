use axum::extract::FromRef;

use crate::analytics::AnalyticsStore;
use crate::estimator::ScorePredictor;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedAnalyticsStore = Arc<dyn AnalyticsStore>;
pub type GuardedScorePredictor = Arc<dyn ScorePredictor>;

/// Shared, read-only state handed to every request handler.
///
/// Both the store and the predictor are fully built before the state is
/// created, so cloning the `Arc`s is the only synchronization needed.
#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub analytics_store: GuardedAnalyticsStore,
    pub score_predictor: GuardedScorePredictor,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        analytics_store: GuardedAnalyticsStore,
        score_predictor: GuardedScorePredictor,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            analytics_store,
            score_predictor,
        }
    }
}

impl FromRef<ServerState> for GuardedAnalyticsStore {
    fn from_ref(input: &ServerState) -> Self {
        input.analytics_store.clone()
    }
}

impl FromRef<ServerState> for GuardedScorePredictor {
    fn from_ref(input: &ServerState) -> Self {
        input.score_predictor.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
