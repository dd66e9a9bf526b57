//! Shared constants for end-to-end tests
#![allow(dead_code)]

// ============================================================================
// Dataset Tables
// ============================================================================

pub const GENRE_FREQUENCY_ROWS: usize = 10;
pub const GENRE_SCORE_ROWS: usize = 10;
pub const STUDIO_SCORE_ROWS: usize = 8;
pub const YEAR_DISTRIBUTION_ROWS: usize = 6;
pub const POPULARITY_ROWS: usize = 8;
pub const AVAILABLE_GENRES: usize = 20;

// ============================================================================
// Score Model
// ============================================================================

/// Seed the test server trains its model with
pub const TEST_MODEL_SEED: u64 = 42;

/// Member count assumed when a prediction request omits it
pub const DEFAULT_MEMBERS: i64 = 100_000;

pub const EXPECTED_NEIGHBORS: u64 = 5;

/// Genre columns plus the member count column
pub const EXPECTED_FEATURES: u64 = 21;

pub const EXPECTED_CONFIDENCE: f64 = 0.85;

// ============================================================================
// Test Timeouts and Configuration
// ============================================================================

/// Maximum time to wait for server to become ready (milliseconds)
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Timeout for individual HTTP requests (seconds)
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Polling interval when waiting for server ready (milliseconds)
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 50;
