use axum::{http::StatusCode, response::IntoResponse};
use lazy_static::lazy_static;
use prometheus::{
    CounterVec, Encoder, Gauge, Histogram, HistogramOpts, HistogramVec, Opts, Registry,
    TextEncoder,
};
use std::time::Duration;

/// Metric name prefix for all server metrics
const PREFIX: &str = "anime_insights";

lazy_static! {
    pub static ref REGISTRY: Registry = Registry::new();

    // HTTP Request Metrics
    pub static ref HTTP_REQUESTS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_http_requests_total"), "Total number of HTTP requests"),
        &["method", "path", "status"]
    ).expect("Failed to create http_requests_total metric");

    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            format!("{PREFIX}_http_request_duration_seconds"),
            "HTTP request duration in seconds"
        )
        .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0]),
        &["method", "path"]
    ).expect("Failed to create http_request_duration_seconds metric");

    // Prediction Metrics
    pub static ref PREDICTIONS_TOTAL: CounterVec = CounterVec::new(
        Opts::new(format!("{PREFIX}_predictions_total"), "Score predictions by outcome"),
        &["outcome"]
    ).expect("Failed to create predictions_total metric");

    pub static ref PREDICTED_SCORE: Histogram = Histogram::with_opts(
        HistogramOpts::new(
            format!("{PREFIX}_predicted_score"),
            "Distribution of predicted scores"
        )
        .buckets(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0])
    ).expect("Failed to create predicted_score metric");

    // Model Metrics
    pub static ref MODEL_TRAINING_SECONDS: Gauge = Gauge::new(
        format!("{PREFIX}_model_training_seconds"),
        "Time spent fitting the score model at startup"
    ).expect("Failed to create model_training_seconds metric");

    pub static ref MODEL_TRAINING_SAMPLES: Gauge = Gauge::new(
        format!("{PREFIX}_model_training_samples"),
        "Number of samples the score model was fit on"
    ).expect("Failed to create model_training_samples metric");

    pub static ref PROCESS_MEMORY_BYTES: Gauge = Gauge::new(
        format!("{PREFIX}_process_memory_bytes"),
        "Process memory usage in bytes"
    ).expect("Failed to create process_memory_bytes metric");
}

/// Initialize all metrics and register them with the Prometheus registry
pub fn init_metrics() {
    // Register all metrics - ignore errors if already registered (for tests)
    let _ = REGISTRY.register(Box::new(HTTP_REQUESTS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(HTTP_REQUEST_DURATION_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(PREDICTIONS_TOTAL.clone()));
    let _ = REGISTRY.register(Box::new(PREDICTED_SCORE.clone()));
    let _ = REGISTRY.register(Box::new(MODEL_TRAINING_SECONDS.clone()));
    let _ = REGISTRY.register(Box::new(MODEL_TRAINING_SAMPLES.clone()));
    let _ = REGISTRY.register(Box::new(PROCESS_MEMORY_BYTES.clone()));

    tracing::info!("Metrics system initialized successfully");
}

/// Groups request paths so the `path` label stays low-cardinality.
pub fn categorize_endpoint(path: &str) -> &'static str {
    if path.starts_with("/api/predict") {
        "/api/predict"
    } else if path.starts_with("/api/model") {
        "/api/model"
    } else if path.starts_with("/api/") {
        "/api/tables"
    } else {
        "other"
    }
}

/// Record an HTTP request
pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let category = categorize_endpoint(path);
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method, category, &status.to_string()])
        .inc();

    HTTP_REQUEST_DURATION_SECONDS
        .with_label_values(&[method, category])
        .observe(duration.as_secs_f64());
}

/// Record the outcome of a prediction request, with its score on success.
pub fn record_prediction(outcome: &str, score: Option<f64>) {
    PREDICTIONS_TOTAL.with_label_values(&[outcome]).inc();
    if let Some(score) = score {
        PREDICTED_SCORE.observe(score);
    }
}

pub fn record_model_training(duration: Duration, samples: usize) {
    MODEL_TRAINING_SECONDS.set(duration.as_secs_f64());
    MODEL_TRAINING_SAMPLES.set(samples as f64);
}

/// Update process memory usage
pub fn update_memory_usage() {
    #[cfg(target_os = "linux")]
    {
        if let Ok(status) = std::fs::read_to_string("/proc/self/status") {
            for line in status.lines() {
                if line.starts_with("VmRSS:") {
                    // VmRSS is reported in kB
                    if let Some(kb_str) = line.split_whitespace().nth(1) {
                        if let Ok(kb) = kb_str.parse::<f64>() {
                            PROCESS_MEMORY_BYTES.set(kb * 1024.0);
                            return;
                        }
                    }
                }
            }
        }
    }
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler() -> impl IntoResponse {
    update_memory_usage();

    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();

    let mut buffer = vec![];
    match encoder.encode(&metric_families, &mut buffer) {
        Ok(()) => {
            let response = String::from_utf8(buffer).unwrap_or_else(|_| String::from(""));
            (StatusCode::OK, response)
        }
        Err(e) => {
            tracing::error!("Failed to encode metrics: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to encode metrics: {}", e),
            )
        }
    }
}
