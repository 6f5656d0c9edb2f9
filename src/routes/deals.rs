use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::{catalog::DealsQuery, error::AppError, routes::AppState};

/// GET /api/deals - Latest scraped deals
///
/// Query params: store, category, search, sortBy (price | price_per_unit |
/// name), sortOrder (asc | desc).
pub async fn list_deals(
    State(app): State<AppState>,
    Query(query): Query<DealsQuery>,
) -> impl IntoResponse {
    match app.catalog.query(&query).await {
        Ok(page) => (
            StatusCode::OK,
            Json(json!({ "success": true, "data": page })),
        ),
        Err(err) => {
            let err = AppError::from(err);

            tracing::warn!(
                store = query.store.as_deref(),
                err = %err,
                "failed to list deals"
            );

            (
                err.status_code(),
                Json(json!({ "success": false, "error": err.public_message() })),
            )
        }
    }
}
