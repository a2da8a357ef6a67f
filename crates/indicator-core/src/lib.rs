//! # Indicator Core
//!
//! 지표 API 전반에서 공유되는 핵심 타입을 제공합니다.
//!
//! - 티커 및 지표 집합 데이터 모델
//! - 에러 타입과 에러 응답 페이로드
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use types::*;
