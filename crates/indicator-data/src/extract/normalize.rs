//! 브라질 표기 숫자 정규화.
//!
//! 사이트에 표시된 값(`R$ 1.234,56`, `12,5%`, `1,5M` 등)을 `f64`로 변환합니다.
//!
//! 파싱할 수 없는 값은 항상 `None`입니다. 원본 문자열을 돌려주지 않습니다.
//!
//! `.`은 언제나 천 단위 구분자로 취급되므로 이미 정규화된 값(`"1234.56"`)을
//! 다시 넣으면 `123456`이 됩니다. 멱등성은 지원하지 않습니다.

use indicator_core::IndicatorValue;

/// 앞에 붙는 통화 표시. 긴 것부터 검사합니다.
const CURRENCY_MARKERS: [&str; 3] = ["R$", "US$", "$"];

/// 값이 없음을 뜻하는 표시.
const PLACEHOLDERS: [&str; 3] = ["-", "--", "N/A"];

/// 원본 텍스트를 숫자로 정규화합니다.
///
/// ```
/// use indicator_data::normalize;
///
/// assert_eq!(normalize("R$ 1.234,56"), Some(1234.56));
/// assert_eq!(normalize("1,5M"), Some(1_500_000.0));
/// assert_eq!(normalize("-"), None);
/// ```
pub fn normalize(raw: &str) -> IndicatorValue {
    let text = raw.trim();

    if text.is_empty() || PLACEHOLDERS.iter().any(|p| text.eq_ignore_ascii_case(p)) {
        return None;
    }

    // "-R$ 1,20" 처럼 부호가 통화 표시 앞에 오는 경우
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, text),
    };
    let text = strip_currency(text);

    // 천 단위 '.' 제거, 소수점 ',' → '.', '%'와 공백 제거
    let mut cleaned: String = text
        .chars()
        .filter(|c| *c != '.' && *c != '%' && !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    // 배수 접미사는 소수점 치환 이후, 최종 파싱 이전에 처리
    let multiplier = match cleaned.chars().last() {
        Some('M') => 1_000_000.0,
        Some('B') => 1_000_000_000.0,
        _ => 1.0,
    };
    if multiplier > 1.0 {
        cleaned.pop();
    }

    if cleaned.is_empty() {
        return None;
    }

    let parsed: f64 = cleaned.parse().ok()?;
    let signed = if negative { -parsed } else { parsed };
    let value = signed * multiplier;

    value.is_finite().then_some(value)
}

/// 앞쪽 통화 표시와 뒤따르는 공백 제거
fn strip_currency(text: &str) -> &str {
    CURRENCY_MARKERS
        .iter()
        .find_map(|marker| text.strip_prefix(marker))
        .map(str::trim_start)
        .unwrap_or(text)
}
