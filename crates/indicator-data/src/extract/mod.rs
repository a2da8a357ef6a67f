//! HTML 추출 모듈.
//!
//! - `normalize`: 원본 텍스트 → 숫자
//! - `locator`: (문서, 라벨, 전략) → 값 텍스트

pub mod locator;
pub mod normalize;

pub use locator::{extract, locate, parse_document, Indicator, LocatorStrategy};
pub use normalize::normalize;
