use serde::{Deserialize, Serialize};

pub const DEFAULT_MEMBERS: i64 = 100_000;

fn default_members() -> i64 {
    DEFAULT_MEMBERS
}

/// Body of a score prediction request.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PredictionRequest {
    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(default = "default_members")]
    pub members: i64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelInfo {
    pub algorithm: String,
    pub neighbors: usize,
    pub features_used: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub predicted_score: f64,
    pub confidence: f64,
    pub model_info: ModelInfo,
}

/// Descriptive metadata about the served model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelStats {
    pub algorithm: String,
    pub neighbors: usize,
    pub features: usize,
    pub training_samples: usize,
    pub cross_validation_folds: u32,
    pub average_mse: f64,
    pub dataset_source: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_missing_fields() {
        let request: PredictionRequest = serde_json::from_str(r#"{"genres": ["Action"]}"#).unwrap();
        assert_eq!(request.genres, vec!["Action".to_string()]);
        assert_eq!(request.members, DEFAULT_MEMBERS);

        let request: PredictionRequest = serde_json::from_str("{}").unwrap();
        assert!(request.genres.is_empty());
        assert_eq!(request.members, DEFAULT_MEMBERS);
    }

    #[test]
    fn request_rejects_wrong_shapes() {
        assert!(serde_json::from_str::<PredictionRequest>(r#"{"genres": "not-a-list"}"#).is_err());
        assert!(
            serde_json::from_str::<PredictionRequest>(r#"{"genres": [], "members": "many"}"#)
                .is_err()
        );
        assert!(serde_json::from_str::<PredictionRequest>(r#"{"genres": [1, 2]}"#).is_err());
        assert!(serde_json::from_str::<PredictionRequest>("null").is_err());
        assert!(
            serde_json::from_str::<PredictionRequest>(r#"{"genres": [], "members": 1.5}"#)
                .is_err()
        );
    }

    #[test]
    fn request_accepts_negative_members() {
        let request: PredictionRequest =
            serde_json::from_str(r#"{"genres": ["Action"], "members": -5}"#).unwrap();
        assert_eq!(request.members, -5);
    }

    #[test]
    fn prediction_result_serializes_nested_model_info() {
        let result = PredictionResult {
            predicted_score: 7.42,
            confidence: 0.85,
            model_info: ModelInfo {
                algorithm: "KNN".to_string(),
                neighbors: 5,
                features_used: 3,
            },
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["predicted_score"], 7.42);
        assert_eq!(json["model_info"]["algorithm"], "KNN");
        assert_eq!(json["model_info"]["features_used"], 3);
    }
}
