use crate::api::templates::{render_index, IndexView, PageLabels};
use crate::api::types::*;
use crate::api::ApiState;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Form, Json};

/// GET /api/calculate?price=..&max=..
pub async fn calculate_get(
    State(state): State<ApiState>,
    Query(query): Query<CalculateQuery>,
) -> Json<CalculateResponse> {
    let (Some(raw_price), Some(raw_max)) = (query.price.as_deref(), query.max.as_deref()) else {
        return Json(CalculateResponse::error("Missing price or max parameters"));
    };
    if raw_price.is_empty() || raw_max.is_empty() {
        return Json(CalculateResponse::error("Missing price or max parameters"));
    }

    let Some(price) = parse_price(raw_price) else {
        return Json(CalculateResponse::error("Invalid price parameter"));
    };
    let Ok(max_volume) = raw_max.trim().parse::<u32>() else {
        return Json(CalculateResponse::error("Invalid max parameter"));
    };

    Json(calculate(&state, price, max_volume))
}

/// POST /api/calculate with a JSON body. Malformed bodies are reported in
/// the response rather than with a 4xx status.
pub async fn calculate_post(State(state): State<ApiState>, body: Bytes) -> Json<CalculateResponse> {
    let request: CalculateRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::debug!("rejecting calculate body: {}", e);
            return Json(CalculateResponse::error("Invalid JSON"));
        }
    };
    if !request.price_per_volume.is_finite() {
        return Json(CalculateResponse::error("Invalid price parameter"));
    }

    Json(calculate(&state, request.price_per_volume, request.max_volume))
}

/// GET /: the empty form.
pub async fn index(State(state): State<ApiState>) -> Result<Html<String>, (StatusCode, String)> {
    render_page(&state, &IndexView::default())
}

/// POST /: form submission, rendered with results or an error card.
pub async fn index_submit(
    State(state): State<ApiState>,
    Form(input): Form<FormInput>,
) -> Result<Html<String>, (StatusCode, String)> {
    let raw_price = input.price.unwrap_or_default();
    let raw_max = input.max.unwrap_or_default();
    let mut view = IndexView {
        price: raw_price.clone(),
        max: raw_max.clone(),
        ..IndexView::default()
    };

    if !raw_price.is_empty() && !raw_max.is_empty() {
        match (parse_price(&raw_price), raw_max.trim().parse::<u32>()) {
            (Some(price), Ok(max_volume)) => {
                let response = calculate(&state, price, max_volume);
                view.results = response.results.iter().map(DisplayResult::from).collect();
                view.error = response.error;
            }
            _ => view.error = Some("Invalid input values".to_string()),
        }
    }

    render_page(&state, &view)
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Runs a forward search unless the minor-unit window exceeds the server limit.
fn calculate(state: &ApiState, price: f64, max_volume: u32) -> CalculateResponse {
    let window = f64::from(max_volume) * price;
    if window > state.settings.max_window as f64 {
        tracing::warn!(price, max_volume, "search window too large");
        return CalculateResponse::error(format!(
            "Search too large: max volume × price must not exceed {}",
            state.settings.max_window
        ));
    }

    let results = state.search.forward_search(price, max_volume);
    tracing::info!(price, max_volume, found = results.len(), "calculated");
    CalculateResponse::ok(results)
}

fn render_page(state: &ApiState, view: &IndexView) -> Result<Html<String>, (StatusCode, String)> {
    let address = state.settings.bind_address();
    let labels = PageLabels {
        currency: &state.settings.currency_symbol,
        unit: &state.settings.volume_unit,
        address: &address,
    };
    render_index(&state.templates, &labels, view)
        .map(Html)
        .map_err(|e| {
            tracing::error!("{}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error".to_string())
        })
}
