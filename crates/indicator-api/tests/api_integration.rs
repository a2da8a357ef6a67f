//! API 통합 테스트.
//!
//! mockito로 외부 지표 사이트를 흉내 내고 라우터 전체를 통과하는 요청을 검증합니다.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mockito::{Server, ServerGuard};
use serde_json::Value;
use tower::ServiceExt;

use indicator_api::{create_api_router, AppState};
use indicator_core::AppConfig;
use indicator_data::IndicatorService;

const EQUITY_PAGE: &str =
    include_str!("../../indicator-data/tests/fixtures/investidor10_petr4.html");
const EQUITY_NO_QUOTE: &str =
    include_str!("../../indicator-data/tests/fixtures/investidor10_not_found.html");
const FUND_PAGE: &str = include_str!("../../indicator-data/tests/fixtures/fundsexplorer_alzr11.html");

/// 두 소스 모두 mock 서버를 바라보는 앱 생성
fn app_for(server: &ServerGuard) -> Router {
    let mut config = AppConfig::default();
    config.sources.equity_base_url = server.url();
    config.sources.fund_base_url = server.url();

    let service = IndicatorService::from_config(&config).unwrap();
    create_api_router().with_state(Arc::new(AppState::new(service)))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
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
async fn test_equity_indicators_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/acoes/bbas3/")
        .with_status(200)
        .with_header("content-type", "text/html; charset=utf-8")
        .with_body(EQUITY_PAGE)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/acao/bbas3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "BBAS3");
    assert_eq!(body["preco_atual"], 38.45);
    assert_eq!(body["pl"], 4.12);
    assert!(body["div_patrimonio"].is_null());
    assert!(body["cres_lucro_5a"].is_null());

    // 모든 지표는 숫자 또는 null
    let object = body.as_object().unwrap();
    assert_eq!(object.len(), 12);
    assert!(object
        .iter()
        .filter(|(key, _)| key.as_str() != "ticker")
        .all(|(_, value)| value.is_number() || value.is_null()));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_equity_response_starts_with_ticker() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/acoes/petr4/")
        .with_status(200)
        .with_body(EQUITY_PAGE)
        .create_async()
        .await;

    let response = app_for(&server)
        .oneshot(
            Request::builder()
                .uri("/api/acao/PETR4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    assert!(body.starts_with(br#"{"ticker":"PETR4","preco_atual":38.45"#));
}

#[tokio::test]
async fn test_upstream_server_error_is_500() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/acoes/bbas3/")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/acao/bbas3").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let erro = body["erro"].as_str().unwrap();
    assert!(erro.starts_with("Falha ao buscar dados para o ticker BBAS3"));
}

#[tokio::test]
async fn test_page_without_quote_is_404() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/acoes/xpto3/")
        .with_status(200)
        .with_body(EQUITY_NO_QUOTE)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/acao/xpto3").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["erro"],
        "Ticker XPTO3 não encontrado ou estrutura da página alterada."
    );
}

#[tokio::test]
async fn test_upstream_not_found_is_404() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/funds/zzzz11/")
        .with_status(404)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/fii/zzzz11").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["erro"].as_str().unwrap().contains("ZZZZ11"));
}

#[tokio::test]
async fn test_fund_indicators_ok() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/funds/alzr11/")
        .with_status(200)
        .with_body(FUND_PAGE)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/fii/alzr11").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticker"], "ALZR11");
    assert_eq!(body["preco_atual"], 112.5);
    assert_eq!(body["dividend_yield"], 0.85);
    assert_eq!(body["liquidez_media_diaria"], 3_200_000.0);
    assert!(body["rentabilidade_no_mes"].is_null());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_ticker_never_reaches_upstream() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let (status, body) = get_json(app_for(&server), "/api/acao/pe%20tr4!").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["erro"].as_str().unwrap().starts_with("Ticker inválido"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_health_ready_reports_mock_sources() {
    let server = Server::new_async().await;

    let (status, body) = get_json(app_for(&server), "/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sources"][0]["base_url"], server.url());
    assert_eq!(body["sources"][1]["kind"], "fii");
}
