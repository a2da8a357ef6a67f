//! 시장 지표 수집.
//!
//! 이 crate는 다음을 제공합니다:
//! - 외부 지표 페이지 요청 (`PageFetcher`)
//! - HTML 파싱과 라벨 기반 값 탐색 (`extract::locator`)
//! - 브라질 표기 숫자 정규화 (`extract::normalize`)
//! - 사이트별 선언적 지표 테이블과 응답 조립 (`provider`)

pub mod extract;
pub mod provider;

pub use extract::{extract, locate, normalize, parse_document, Indicator, LocatorStrategy};
pub use provider::{
    assemble, FetchError, HttpPageFetcher, IndicatorService, InstrumentKind, PageFetcher,
    SiteProfile,
};
