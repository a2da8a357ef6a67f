//! API 에러 응답 변환.
//!
//! 모든 지표 엔드포인트는 실패 시 `{"erro": "..."}` 형식으로 응답합니다.
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `InvalidInput` | 404 |
//! | `StructureMismatch` | 404 |
//! | `TransportFailure` | 500 |

use axum::{http::StatusCode, Json};
use indicator_core::{ErrorResult, IndicatorError};

/// API 결과 타입.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResult>)>;

/// 지표 에러를 HTTP 상태 코드와 에러 페이로드로 변환합니다.
pub fn error_response(err: &IndicatorError) -> (StatusCode, Json<ErrorResult>) {
    let status = if err.is_client_error() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResult::from(err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, Json(body)) = error_response(&IndicatorError::InvalidInput(
            "ticker não fornecido".to_string(),
        ));
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.erro, "Ticker inválido: ticker não fornecido");

        let (status, _) = error_response(&IndicatorError::StructureMismatch {
            ticker: "XXXX3".to_string(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, Json(body)) =
            error_response(&IndicatorError::transport("BBAS3", "HTTP 500"));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.erro.contains("BBAS3"));
    }
}
