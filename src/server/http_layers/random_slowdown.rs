//! Random slowdown middleware for testing
#![allow(dead_code)] // Feature-gated middleware

use axum::body::Body;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::IntoResponse;
use rand_distr::{Distribution, Normal};
use std::time::Duration;

const MEAN_DELAY_MS: f64 = 1000.0;
const DELAY_STD_MS: f64 = 2000.0;

/// Middleware that delays each request by a gaussian random amount of time,
/// so the dashboard can be exercised against a slow backend.
pub async fn slowdown_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    tokio::time::sleep(random_delay()).await;
    next.run(request).await
}

fn random_delay() -> Duration {
    let delay_ms = match Normal::new(MEAN_DELAY_MS, DELAY_STD_MS) {
        Ok(normal) => 0.0f64.max(normal.sample(&mut rand::rng())),
        Err(_) => 0.0,
    };
    Duration::from_millis(delay_ms as u64)
}
