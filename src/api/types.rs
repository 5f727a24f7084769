use crate::core::PalindromeMatch;
use serde::{Deserialize, Serialize};

/// JSON body for `POST /api/calculate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub price_per_volume: f64,
    pub max_volume: u32,
}

/// Query string for `GET /api/calculate`. Kept as raw strings so bad
/// numbers can be reported in the response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalculateQuery {
    pub price: Option<String>,
    pub max: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub results: Vec<PalindromeMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalculateResponse {
    pub fn ok(results: Vec<PalindromeMatch>) -> Self {
        Self {
            results,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            results: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Fields posted by the HTML form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormInput {
    pub price: Option<String>,
    pub max: Option<String>,
}

/// One result card on the HTML page.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayResult {
    pub formatted_volume: String,
    pub cost_major_units: String,
    pub volume_is_palindromic: bool,
    pub kind: String,
}

impl From<&PalindromeMatch> for DisplayResult {
    fn from(found: &PalindromeMatch) -> Self {
        Self {
            formatted_volume: found.formatted_volume(),
            cost_major_units: found.cost_major_units.clone(),
            volume_is_palindromic: found.volume_is_palindromic,
            kind: found.kind.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}
