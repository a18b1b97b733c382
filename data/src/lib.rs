use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Match {
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub score: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FindResponse {
    #[serde(default)]
    pub matches: Vec<Match>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_response_maps_camel_case_fields() {
        let body = r#"{"matches":[{"imageUrl":"event/42.jpg","score":0.92}]}"#;
        let response: FindResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.matches.len(), 1);
        assert_eq!(response.matches[0].image_url, "event/42.jpg");
        assert_eq!(response.matches[0].score, 0.92);
    }

    #[test]
    fn missing_matches_field_defaults_to_empty() {
        let response: FindResponse = serde_json::from_str("{}").unwrap();
        assert!(response.matches.is_empty());
    }

    #[test]
    fn error_response_carries_detail() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"detail":"No face detected."}"#).unwrap();
        assert_eq!(error.detail, "No face detected.");
    }
}
