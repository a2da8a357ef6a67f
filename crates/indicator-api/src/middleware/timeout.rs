//! 요청 타임아웃 응답 변환.
//!
//! `TimeoutLayer`가 돌려주는 빈 408 응답에 `{"erro": "..."}` 본문을 채웁니다.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use indicator_core::ErrorResult;

/// 타임아웃 응답 메시지
pub const TIMEOUT_MESSAGE: &str = "Tempo limite da requisição excedido.";

/// 408 응답을 에러 페이로드가 있는 응답으로 바꿉니다.
///
/// `TimeoutLayer` 바깥에 `middleware::map_response`로 적용해야 합니다.
pub async fn timeout_error_body(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT {
        return response;
    }

    (
        StatusCode::REQUEST_TIMEOUT,
        Json(ErrorResult::new(TIMEOUT_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, middleware, routing::get, Router};
    use std::time::Duration;
    use tower::ServiceExt;
    use tower_http::timeout::TimeoutLayer;

    async fn slow_handler() -> &'static str {
        tokio::time::sleep(Duration::from_secs(120)).await;
        "late"
    }

    fn app() -> Router {
        Router::new()
            .route("/slow", get(slow_handler))
            .route("/fast", get(|| async { "OK" }))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(60),
            ))
            .layer(middleware::map_response(timeout_error_body))
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_has_erro_body() {
        let response = app()
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let payload: ErrorResult = serde_json::from_slice(&body).unwrap();
        assert_eq!(payload.erro, TIMEOUT_MESSAGE);
    }

    #[tokio::test]
    async fn test_other_responses_untouched() {
        let response = app()
            .oneshot(Request::builder().uri("/fast").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"OK");
    }
}
