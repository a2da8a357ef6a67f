//! 티커 정의.
//!
//! 입력은 대소문자를 구분하지 않으며, 출력은 항상 대문자 형식입니다.
//! 외부 사이트 경로에는 소문자 형식을 사용합니다.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{IndicatorError, IndicatorResult};

/// 종목 또는 펀드를 식별하는 티커 (예: PETR4, ALZR11).
///
/// ASCII 영문자와 숫자만 허용합니다. 내부적으로 대문자로 정규화되어 저장됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    /// 원본 문자열에서 티커를 파싱합니다.
    ///
    /// # Errors
    /// 빈 문자열이거나 영숫자 이외의 문자가 있으면 `InvalidInput`을 반환합니다.
    pub fn parse(raw: &str) -> IndicatorResult<Self> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(IndicatorError::InvalidInput(
                "ticker não fornecido".to_string(),
            ));
        }

        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IndicatorError::InvalidInput(format!(
                "'{}' contém caracteres não permitidos",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// 대문자 표준 형식.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 페이지 경로에 사용하는 소문자 형식.
    pub fn path_segment(&self) -> String {
        self.0.to_ascii_lowercase()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Ticker {
    type Err = IndicatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Ticker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}
