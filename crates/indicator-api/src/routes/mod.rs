//! API 라우트.
//!
//! 모든 REST API 엔드포인트를 정의하고 라우터를 구성합니다.
//!
//! # 라우트 구조
//!
//! - `/health` - 헬스 체크 (liveness)
//! - `/health/ready` - 상세 헬스 체크 (readiness)
//! - `/api/acao/{ticker}` - 주식 지표 (Investidor10)
//! - `/api/fii/{ticker}` - 부동산 펀드 지표 (Funds Explorer)

pub mod health;
pub mod indicators;

use axum::Router;
use std::sync::Arc;

use crate::state::AppState;

pub use health::{health_router, HealthResponse, SourceInfo};
pub use indicators::{get_equity, get_fund, indicators_router};

/// API 라우터 생성.
pub fn create_api_router() -> Router<Arc<AppState>> {
    Router::new()
        .nest("/health", health_router())
        .nest("/api", indicators_router())
}
