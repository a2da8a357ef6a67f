//! 데이터 Provider 모듈.
//!
//! ## 페이지 요청
//! - `PageFetcher`: 외부 페이지 요청 추상화 (테스트에서는 고정 HTML로 대체)
//! - `HttpPageFetcher`: reqwest 기반 구현, 브라우저 User-Agent 사용
//!
//! ## 사이트 프로필
//! - `SiteProfile::investidor10`: 주식 지표 (카드 전략)
//! - `SiteProfile::funds_explorer`: 부동산 펀드 지표 (박스 전략)
//!
//! ## 응답 조립
//! - `IndicatorService`: 티커 → 요청 → 앵커 확인 → 지표 테이블 추출

pub mod fetcher;
pub mod service;
pub mod site;

pub use fetcher::{FetchError, HttpPageFetcher, PageFetcher};
pub use service::{assemble, IndicatorService};
pub use site::{InstrumentKind, SiteProfile, QUOTE_FIELD};
