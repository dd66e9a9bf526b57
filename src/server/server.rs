use anyhow::{Context, Result};
use std::future::Future;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{error, info};

use super::metrics::{metrics_handler, record_prediction};
use super::{http_cache, log_requests, state::*, ApiError, ServerConfig};
use crate::estimator::{PredictionRequest, PredictionResult};

#[cfg(feature = "slowdown")]
use super::slowdown_request;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub version: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    Json(stats)
}

async fn get_genre_frequencies(State(store): State<GuardedAnalyticsStore>) -> impl IntoResponse {
    Json(store.get_genre_frequencies())
}

async fn get_genre_scores(State(store): State<GuardedAnalyticsStore>) -> impl IntoResponse {
    Json(store.get_genre_scores())
}

async fn get_studio_scores(State(store): State<GuardedAnalyticsStore>) -> impl IntoResponse {
    Json(store.get_studio_scores())
}

async fn get_year_distribution(State(store): State<GuardedAnalyticsStore>) -> impl IntoResponse {
    Json(store.get_year_distribution())
}

async fn get_popularity_vs_rating(
    State(store): State<GuardedAnalyticsStore>,
) -> impl IntoResponse {
    Json(store.get_popularity_vs_rating())
}

async fn get_available_genres(State(store): State<GuardedAnalyticsStore>) -> impl IntoResponse {
    Json(store.get_available_genres())
}

async fn get_model_stats(State(predictor): State<GuardedScorePredictor>) -> impl IntoResponse {
    Json(predictor.model_stats())
}

async fn predict_score(
    State(predictor): State<GuardedScorePredictor>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(request) = payload.inspect_err(|_| record_prediction("invalid_input", None))?;

    let result = predictor.predict(&request.genres, request.members)?;
    record_prediction("ok", Some(result.predicted_score));
    Ok(Json(result))
}

fn make_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn make_app(
    config: ServerConfig,
    analytics_store: GuardedAnalyticsStore,
    score_predictor: GuardedScorePredictor,
) -> Router {
    let state = ServerState::new(config.clone(), analytics_store, score_predictor);

    let table_routes: Router = Router::new()
        .route("/genres/frequency", get(get_genre_frequencies))
        .route("/genres/scores", get(get_genre_scores))
        .route("/genres/available", get(get_available_genres))
        .route("/studios/scores", get(get_studio_scores))
        .route("/years/distribution", get(get_year_distribution))
        .route("/popularity-rating", get(get_popularity_vs_rating))
        .route("/model/stats", get(get_model_stats))
        .layer(middleware::from_fn_with_state(
            config.content_cache_age_sec,
            http_cache,
        ))
        .with_state(state.clone());

    let prediction_routes: Router = Router::new()
        .route("/predict", post(predict_score))
        .with_state(state.clone());

    let home_router: Router = match config.frontend_dir_path {
        Some(frontend_path) => {
            let static_files_service =
                ServeDir::new(frontend_path).append_index_html_on_directories(true);
            Router::new().fallback_service(static_files_service)
        }
        None => Router::new().route("/", get(home)).with_state(state.clone()),
    };

    let mut app: Router =
        home_router.nest("/api", table_routes.merge(prediction_routes));

    #[cfg(feature = "slowdown")]
    {
        app = app.layer(middleware::from_fn(slowdown_request));
    }
    app = app
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .layer(make_cors_layer());

    app
}

async fn serve_metrics(host: String, port: u16) {
    let app = Router::new().route("/metrics", get(metrics_handler));
    let listener = match tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Failed to bind metrics listener on port {}: {}", port, err);
            return;
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        error!("Metrics server stopped: {}", err);
    }
}

/// Serves the API until `shutdown` resolves.
///
/// The analytics store and the score predictor must be fully built by the
/// caller, nothing is initialized lazily once the listener is bound.
pub async fn run_server(
    config: ServerConfig,
    analytics_store: GuardedAnalyticsStore,
    score_predictor: GuardedScorePredictor,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tokio::spawn(serve_metrics(config.host.clone(), config.metrics_port));

    let app = make_app(config, analytics_store, score_predictor);

    info!("Listening on {}", address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
