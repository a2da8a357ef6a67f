//! 지표 조회 에러 타입.
//!
//! 추출/조립 함수는 모두 이 타입으로 실패를 전달합니다.
//! 개별 필드 누락은 에러가 아니라 `null` 값으로 표현됩니다.

use thiserror::Error;

/// 지표 조회 에러.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    /// 잘못된 입력 (빈 티커, 허용되지 않는 문자)
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),

    /// 외부 사이트 요청 실패 (네트워크 오류, 2xx 이외의 응답)
    #[error("전송 실패 ({ticker}): {cause}")]
    TransportFailure { ticker: String, cause: String },

    /// 페이지는 받았지만 시세 앵커가 없음 (존재하지 않는 티커 또는 레이아웃 변경)
    #[error("페이지 구조 불일치: {ticker}")]
    StructureMismatch { ticker: String },
}

/// 지표 조회 Result 타입.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

impl IndicatorError {
    /// 전송 실패 에러를 생성합니다.
    pub fn transport(ticker: impl Into<String>, cause: impl ToString) -> Self {
        Self::TransportFailure {
            ticker: ticker.into(),
            cause: cause.to_string(),
        }
    }

    /// 호출자가 입력을 고쳐서 해결할 수 있는 에러인지 확인합니다.
    ///
    /// HTTP 계층에서 404와 500을 구분하는 기준입니다.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IndicatorError::InvalidInput(_) | IndicatorError::StructureMismatch { .. }
        )
    }

    /// 메트릭 라벨용 짧은 분류명.
    pub fn kind(&self) -> &'static str {
        match self {
            IndicatorError::InvalidInput(_) => "invalid_input",
            IndicatorError::TransportFailure { .. } => "transport_failure",
            IndicatorError::StructureMismatch { .. } => "structure_mismatch",
        }
    }

    /// API 응답에 실리는 사용자용 메시지.
    pub fn user_message(&self) -> String {
        match self {
            IndicatorError::InvalidInput(detail) => format!("Ticker inválido: {}", detail),
            IndicatorError::TransportFailure { ticker, cause } => {
                format!("Falha ao buscar dados para o ticker {}: {}", ticker, cause)
            }
            IndicatorError::StructureMismatch { ticker } => format!(
                "Ticker {} não encontrado ou estrutura da página alterada.",
                ticker
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_classification() {
        assert!(IndicatorError::InvalidInput("empty".to_string()).is_client_error());
        assert!(IndicatorError::StructureMismatch {
            ticker: "XXXX3".to_string()
        }
        .is_client_error());
        assert!(!IndicatorError::transport("PETR4", "connection refused").is_client_error());
    }

    #[test]
    fn test_user_message_mentions_ticker() {
        let err = IndicatorError::StructureMismatch {
            ticker: "ABCD3".to_string(),
        };
        assert!(err.user_message().contains("ABCD3"));

        let err = IndicatorError::transport("PETR4", "HTTP 503");
        let msg = err.user_message();
        assert!(msg.contains("PETR4"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(IndicatorError::InvalidInput(String::new()).kind(), "invalid_input");
        assert_eq!(IndicatorError::transport("A", "b").kind(), "transport_failure");
    }
}
