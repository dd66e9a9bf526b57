//! End-to-end tests for the dashboard table endpoints
//!
//! Tests the fixed aggregate tables served under `/api`.

mod common;

use common::*;
use reqwest::StatusCode;
use serde_json::Value;

async fn get_rows(response: reqwest::Response, expected_len: usize) -> Vec<Value> {
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    let rows = body.as_array().expect("table should be a JSON array").clone();
    assert_eq!(rows.len(), expected_len);
    rows
}

#[tokio::test]
async fn test_genre_frequencies_are_sorted_descending() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rows = get_rows(client.get_genre_frequencies().await, GENRE_FREQUENCY_ROWS).await;

    assert_eq!(rows[0]["genre"], "Comedy");
    assert_eq!(rows[0]["frequency"], 2847);
    assert_eq!(rows[9]["genre"], "Thriller");

    let frequencies: Vec<u64> = rows
        .iter()
        .map(|row| row["frequency"].as_u64().unwrap())
        .collect();
    assert!(frequencies.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn test_genre_scores_table() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rows = get_rows(client.get_genre_scores().await, GENRE_SCORE_ROWS).await;

    assert_eq!(rows[0]["genre"], "Music");
    assert_eq!(rows[0]["average_score"], 7.89);
}

#[tokio::test]
async fn test_studio_scores_table() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rows = get_rows(client.get_studio_scores().await, STUDIO_SCORE_ROWS).await;

    assert_eq!(rows[0]["studio"], "Studio Ghibli");
    assert_eq!(rows[0]["average_score"], 8.45);
    assert_eq!(rows[0]["count"], 12);
}

#[tokio::test]
async fn test_year_distribution_table() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rows = get_rows(client.get_year_distribution().await, YEAR_DISTRIBUTION_ROWS).await;

    let years: Vec<i64> = rows.iter().map(|row| row["year"].as_i64().unwrap()).collect();
    assert_eq!(years, vec![2000, 2005, 2010, 2015, 2020, 2023]);
    assert_eq!(rows[3]["count"], 234);
}

#[tokio::test]
async fn test_popularity_rating_table() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let rows = get_rows(client.get_popularity_rating().await, POPULARITY_ROWS).await;

    assert_eq!(rows[0]["name"], "Attack on Titan");
    assert_eq!(rows[0]["members"], 2_500_000);
    assert_eq!(rows[0]["score"], 9.0);
}

#[tokio::test]
async fn test_available_genres_are_stable() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let first = get_rows(client.get_available_genres().await, AVAILABLE_GENRES).await;
    let second = get_rows(client.get_available_genres().await, AVAILABLE_GENRES).await;

    assert_eq!(first, second);
    assert_eq!(first[0], "Action");
    assert_eq!(first[19], "Adult Content");
}

#[tokio::test]
async fn test_home_reports_version() {
    let server = TestServer::spawn().await;
    let client = TestClient::new(server.base_url.clone());

    let response = client
        .client
        .get(format!("{}/", client.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["uptime"].is_string());
}
