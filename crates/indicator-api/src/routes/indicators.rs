//! 지표 조회 endpoint.
//!
//! # 엔드포인트
//!
//! - `GET /api/acao/{ticker}` - 주식 지표
//! - `GET /api/fii/{ticker}` - 부동산 펀드 지표
//!
//! 티커 없이 호출된 경로(`/api/acao/`)나 UTF-8이 아닌 티커도 같은 에러 형식으로 응답합니다.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use indicator_core::{ErrorResult, IndicatorError, IndicatorSet};
use indicator_data::InstrumentKind;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::error::{error_response, ApiResult};
use crate::metrics::record_scrape;
use crate::state::AppState;

/// 주식 지표 조회.
///
/// GET /api/acao/{ticker}
pub async fn get_equity(
    State(state): State<Arc<AppState>>,
    ticker: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<IndicatorSet>> {
    let Path(ticker) = ticker.map_err(|e| path_rejection(InstrumentKind::Equity, &e))?;
    fetch_indicators(&state, InstrumentKind::Equity, &ticker).await
}

/// 부동산 펀드 지표 조회.
///
/// GET /api/fii/{ticker}
pub async fn get_fund(
    State(state): State<Arc<AppState>>,
    ticker: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<IndicatorSet>> {
    let Path(ticker) = ticker.map_err(|e| path_rejection(InstrumentKind::Fund, &e))?;
    fetch_indicators(&state, InstrumentKind::Fund, &ticker).await
}

async fn get_equity_without_ticker(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IndicatorSet>> {
    fetch_indicators(&state, InstrumentKind::Equity, "").await
}

async fn get_fund_without_ticker(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<IndicatorSet>> {
    fetch_indicators(&state, InstrumentKind::Fund, "").await
}

/// 경로 추출 실패 → `InvalidInput`
fn path_rejection(kind: InstrumentKind, rejection: &PathRejection) -> (StatusCode, Json<ErrorResult>) {
    warn!(%kind, error = %rejection, "Ticker path segment rejected");
    error_response(&IndicatorError::InvalidInput(
        "ticker com codificação inválida".to_string(),
    ))
}

async fn fetch_indicators(
    state: &AppState,
    kind: InstrumentKind,
    ticker: &str,
) -> ApiResult<Json<IndicatorSet>> {
    let source = state.indicators.profile(kind).source;

    match state.indicators.get_indicators(kind, ticker).await {
        Ok(set) => {
            record_scrape(source, "ok");
            info!(%kind, ticker = %set.ticker(), "Indicators served");
            Ok(Json(set))
        }
        Err(e) => {
            record_scrape(source, e.kind());
            if e.is_client_error() {
                warn!(%kind, ticker, error = %e, "Indicator request rejected");
            } else {
                error!(%kind, ticker, error = %e, "Indicator request failed");
            }
            Err(error_response(&e))
        }
    }
}

/// 지표 라우터 생성.
pub fn indicators_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/acao/{ticker}", get(get_equity))
        .route("/acao/", get(get_equity_without_ticker))
        .route("/fii/{ticker}", get(get_fund))
        .route("/fii/", get(get_fund_without_ticker))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use crate::state::create_test_state;

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let app = indicators_router().with_state(Arc::new(create_test_state()));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_missing_ticker_is_not_found_with_erro() {
        for uri in ["/acao/", "/fii/"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["erro"], "Ticker inválido: ticker não fornecido");
        }
    }

    #[tokio::test]
    async fn test_malformed_ticker_is_rejected_before_fetch() {
        let (status, body) = get_json("/acao/..%2Fetc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["erro"].as_str().unwrap().starts_with("Ticker inválido"));
    }

    #[tokio::test]
    async fn test_non_utf8_ticker_is_not_found_with_erro() {
        for uri in ["/acao/%FF", "/fii/%C3"] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert_eq!(
                body["erro"],
                "Ticker inválido: ticker com codificação inválida"
            );
        }
    }
}
