use axum::{
    extract::{Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use shared::{Endpoint, Month, ParseMonthError, TransactionQuery};
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::domain::TransactionService;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub transaction_service: TransactionService,
}

impl AppState {
    pub fn new(transaction_service: TransactionService) -> Self {
        Self { transaction_service }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    InvalidMonth(#[from] ParseMonthError),

    #[error("Missing required query parameter 'month'")]
    MissingMonth,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!("Rejecting request: {}", self);
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

/// Query parameters for the month-scoped endpoints
#[derive(Deserialize, Debug)]
pub struct MonthParams {
    pub month: Option<String>,
}

impl MonthParams {
    fn month(&self) -> Result<Month, ApiError> {
        let raw = self.month.as_deref().ok_or(ApiError::MissingMonth)?;
        Ok(raw.parse()?)
    }
}

/// Axum handler for GET /api/transactions
pub async fn list_transactions(
    State(state): State<AppState>,
    Query(query): Query<TransactionQuery>,
) -> impl IntoResponse {
    info!("GET {} - query: {:?}", Endpoint::Transactions, query);
    Json(state.transaction_service.list_transactions(&query))
}

/// Axum handler for GET /api/statistics
pub async fn get_statistics(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, ApiError> {
    let month = params.month()?;
    info!("GET {} - month: {}", Endpoint::Statistics, month);
    Ok(Json(state.transaction_service.statistics(month)))
}

/// Axum handler for GET /api/bar-chart
pub async fn get_bar_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, ApiError> {
    let month = params.month()?;
    info!("GET {} - month: {}", Endpoint::BarChart, month);
    Ok(Json(state.transaction_service.price_range_chart(month)))
}

/// Axum handler for GET /api/pie-chart
pub async fn get_pie_chart(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> Result<impl IntoResponse, ApiError> {
    let month = params.month()?;
    info!("GET {} - month: {}", Endpoint::PieChart, month);
    Ok(Json(state.transaction_service.category_chart(month)))
}

/// Build the API router. The dashboard is served from another origin, so any
/// origin may issue GET requests.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route(Endpoint::Transactions.path(), get(list_transactions))
        .route(Endpoint::Statistics.path(), get(get_statistics))
        .route(Endpoint::BarChart.path(), get(get_bar_chart))
        .route(Endpoint::PieChart.path(), get(get_pie_chart))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TransactionStore;
    use axum::body::Body;
    use axum::http::Request;
    use shared::{ChartData, Statistics, Transaction};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let store = TransactionStore::load(None).expect("bundled seed should load");
        router(AppState::new(TransactionService::new(store)))
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = test_router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_transactions_with_dashboard_query() {
        let (status, body) = get("/api/transactions?search=&page=1&perPage=10").await;
        assert_eq!(status, StatusCode::OK);

        let transactions: Vec<Transaction> = serde_json::from_slice(&body).unwrap();
        assert_eq!(transactions.len(), 10);
        assert_eq!(transactions[0].title, "Fjallraven Foldsack No. 1 Backpack");
    }

    #[tokio::test]
    async fn test_transactions_without_query_uses_defaults() {
        let (status, body) = get("/api/transactions").await;
        assert_eq!(status, StatusCode::OK);

        let transactions: Vec<Transaction> = serde_json::from_slice(&body).unwrap();
        assert_eq!(transactions.len(), 10);
    }

    #[tokio::test]
    async fn test_statistics_for_march() {
        let (status, body) = get("/api/statistics?month=March").await;
        assert_eq!(status, StatusCode::OK);

        let stats: Statistics = serde_json::from_slice(&body).unwrap();
        assert_eq!(stats.total_sold, 4);
        assert_eq!(stats.total_not_sold, 4);
        assert!((stats.total_sales - 7611.83).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_statistics_response_uses_camel_case() {
        let (_, body) = get("/api/statistics?month=July").await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("totalSales").is_some());
        assert_eq!(json["totalSold"], 2);
        assert_eq!(json["totalNotSold"], 2);
    }

    #[tokio::test]
    async fn test_bar_chart_has_every_price_range() {
        let (status, body) = get("/api/bar-chart?month=July").await;
        assert_eq!(status, StatusCode::OK);

        let chart: ChartData = serde_json::from_slice(&body).unwrap();
        assert_eq!(chart.labels.len(), 10);
        assert_eq!(chart.labels[9], "901-above");
        let counts: Vec<f64> = chart.points().into_iter().map(|(_, count)| count).collect();
        assert_eq!(counts, vec![2.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[tokio::test]
    async fn test_pie_chart_for_july() {
        let (status, body) = get("/api/pie-chart?month=July").await;
        assert_eq!(status, StatusCode::OK);

        let chart: ChartData = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            chart.points(),
            vec![("jewelery".to_string(), 3.0), ("electronics".to_string(), 1.0)]
        );
    }

    #[tokio::test]
    async fn test_invalid_month_is_a_bad_request() {
        let (status, body) = get("/api/statistics?month=Smarch").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(String::from_utf8(body).unwrap().contains("Smarch"));
    }

    #[tokio::test]
    async fn test_missing_month_is_a_bad_request() {
        let (status, _) = get("/api/pie-chart").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/bar-chart?month=March")
                    .header("Origin", "http://localhost:8080")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }
}
