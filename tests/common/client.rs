//! HTTP client for end-to-end tests
//!
//! This module provides a high-level HTTP client that wraps reqwest
//! and provides methods for all server endpoints.
//!
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    async fn get(&self, path: &str) -> Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("GET request failed")
    }

    // ========================================================================
    // Analytics Tables
    // ========================================================================

    pub async fn get_genre_frequencies(&self) -> Response {
        self.get("/api/genres/frequency").await
    }

    pub async fn get_genre_scores(&self) -> Response {
        self.get("/api/genres/scores").await
    }

    pub async fn get_studio_scores(&self) -> Response {
        self.get("/api/studios/scores").await
    }

    pub async fn get_year_distribution(&self) -> Response {
        self.get("/api/years/distribution").await
    }

    pub async fn get_popularity_rating(&self) -> Response {
        self.get("/api/popularity-rating").await
    }

    pub async fn get_available_genres(&self) -> Response {
        self.get("/api/genres/available").await
    }

    // ========================================================================
    // Score Model
    // ========================================================================

    pub async fn predict(&self, genres: &[&str], members: i64) -> Response {
        self.predict_raw(json!({ "genres": genres, "members": members }))
            .await
    }

    /// Posts an arbitrary JSON body to the prediction endpoint.
    pub async fn predict_raw(&self, body: Value) -> Response {
        self.client
            .post(format!("{}/api/predict", self.base_url))
            .json(&body)
            .send()
            .await
            .expect("Predict request failed")
    }

    /// Posts a raw, possibly invalid, JSON text to the prediction endpoint.
    pub async fn predict_text(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/api/predict", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Predict request failed")
    }

    pub async fn get_model_stats(&self) -> Response {
        self.get("/api/model/stats").await
    }
}
