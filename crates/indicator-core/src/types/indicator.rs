//! 지표 집합 및 에러 응답 타입.
//!
//! - `IndicatorValue` - 정규화된 지표 값 (숫자 또는 `null`)
//! - `IndicatorSet` - 티커 하나에 대한 지표 이름 → 값의 순서 있는 매핑
//! - `ErrorResult` - `{"erro": "..."}` 형태의 에러 응답

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::Ticker;
use crate::error::IndicatorError;

/// 정규화된 지표 값.
///
/// 값이 없거나 파싱할 수 없으면 `None`이며 JSON에서는 `null`로 직렬화됩니다.
/// 원본 문자열을 그대로 돌려주는 경우는 없습니다.
pub type IndicatorValue = Option<f64>;

/// 티커 하나의 지표 집합.
///
/// 필드 순서는 삽입 순서를 따르며, JSON 직렬화 시 `ticker` 필드가 항상 맨 앞에 옵니다.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSet {
    ticker: Ticker,
    values: Vec<(String, IndicatorValue)>,
}

impl IndicatorSet {
    /// 빈 지표 집합을 생성합니다.
    pub fn new(ticker: Ticker) -> Self {
        Self {
            ticker,
            values: Vec::new(),
        }
    }

    /// 지표 값을 추가합니다. 같은 이름이 이미 있으면 값을 교체합니다.
    pub fn insert(&mut self, field: impl Into<String>, value: IndicatorValue) {
        let field = field.into();
        // 비유한 값은 JSON 숫자로 표현할 수 없음
        let value = value.filter(|v| v.is_finite());

        match self.values.iter_mut().find(|(name, _)| *name == field) {
            Some(slot) => slot.1 = value,
            None => self.values.push((field, value)),
        }
    }

    /// 티커.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// 지표 값 조회.
    ///
    /// 선언되지 않은 필드는 `None`, 선언되었지만 값이 없는 필드는 `Some(None)`입니다.
    pub fn get(&self, field: &str) -> Option<IndicatorValue> {
        self.values
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| *value)
    }

    /// 선언된 필드 수.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 선언된 필드가 없는지 여부.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 값이 채워진 필드 수.
    pub fn populated(&self) -> usize {
        self.values.iter().filter(|(_, v)| v.is_some()).count()
    }

    /// 필드 이름 순서대로 순회.
    pub fn iter(&self) -> impl Iterator<Item = (&str, IndicatorValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

impl Serialize for IndicatorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        map.serialize_entry("ticker", &self.ticker)?;
        for (name, value) in &self.values {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// 에러 응답 페이로드.
///
/// ```json
/// { "erro": "Ticker XXXX3 não encontrado ou estrutura da página alterada." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// 사람이 읽을 수 있는 에러 메시지
    pub erro: String,
}

impl ErrorResult {
    /// 메시지로 에러 응답을 생성합니다.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            erro: message.into(),
        }
    }
}

impl From<&IndicatorError> for ErrorResult {
    fn from(err: &IndicatorError) -> Self {
        Self::new(err.user_message())
    }
}

impl From<IndicatorError> for ErrorResult {
    fn from(err: IndicatorError) -> Self {
        Self::from(&err)
    }
}
