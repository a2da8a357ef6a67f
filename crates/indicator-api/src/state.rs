//! 애플리케이션 상태 관리.
//!
//! 모든 API 핸들러에서 공유되는 상태를 정의합니다.

use std::sync::Arc;

use indicator_data::IndicatorService;

/// 애플리케이션 공유 상태.
///
/// 요청 간 가변 상태가 없으므로 `Arc<AppState>`로 핸들러에 전달됩니다.
#[derive(Clone)]
pub struct AppState {
    /// 지표 조회 서비스
    pub indicators: Arc<IndicatorService>,

    /// 서버 시작 시간
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// API 버전
    pub version: String,
}

impl AppState {
    /// 새로운 AppState 생성.
    pub fn new(indicators: IndicatorService) -> Self {
        Self {
            indicators: Arc::new(indicators),
            started_at: chrono::Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// 서버 업타임(초).
    pub fn uptime_secs(&self) -> i64 {
        chrono::Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds()
    }
}

/// 테스트용 AppState 생성.
///
/// 기본 소스 URL을 사용하므로 실제 요청을 보내는 테스트에는 쓰지 않습니다.
#[cfg(any(test, feature = "test-utils"))]
pub fn create_test_state() -> AppState {
    use indicator_core::AppConfig;

    let service = IndicatorService::from_config(&AppConfig::default())
        .expect("기본 설정으로 HTTP 클라이언트 생성 실패");
    AppState::new(service)
}
