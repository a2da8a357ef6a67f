//! 라벨 기반 값 탐색.
//!
//! 사이트마다 라벨과 값을 짝짓는 HTML 구조가 다르므로, 구조 규칙을
//! `LocatorStrategy`로 표현하고 하나의 탐색 함수가 이를 해석합니다.
//!
//! ## 전략
//! - `Sibling`: 라벨 요소의 다음 형제 요소
//!   `<span>P/L</span><span>4,20</span>`
//! - `Card`: 라벨 헤더 → 가장 가까운 카드 컨테이너 → 값 영역
//!   `<div class="_card"><div class="_card-header"><span title="P/L">P/L</span></div>
//!    <div class="_card-body"><span>4,20</span></div></div>`
//! - `LabeledBox`: 라벨 텍스트를 포함하는 박스 → 강조된 값
//!   `<div class="indicators__box"><p>Dividend Yield</p><p><b>0,85</b>%</p></div>`
//!
//! 탐색 함수는 문서를 인자로 받는 순수 함수이므로 네트워크 없이 테스트할 수 있습니다.

use indicator_core::IndicatorValue;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use super::normalize::normalize;

/// 라벨 → 값 탐색 전략.
///
/// 각 변형은 해당 사이트의 CSS 셀렉터를 데이터로 가집니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocatorStrategy {
    /// 라벨 텍스트와 정확히 일치하는 요소의 다음 형제 요소
    Sibling {
        /// 라벨 후보 요소 셀렉터
        label_selector: &'static str,
    },
    /// 라벨 헤더를 감싸는 가장 가까운 카드 안의 값 요소
    Card {
        /// 헤더 후보 요소 셀렉터 (`title` 속성 또는 텍스트가 라벨)
        header_selector: &'static str,
        /// 카드 컨테이너 클래스
        container_class: &'static str,
        /// 카드 안에서 값을 담은 요소 셀렉터
        value_selector: &'static str,
    },
    /// 라벨 문자열을 포함하는 첫 박스 안의 강조 요소
    LabeledBox {
        /// 박스 컨테이너 셀렉터
        container_selector: &'static str,
        /// 박스 안에서 값을 담은 요소 셀렉터
        value_selector: &'static str,
    },
}

/// 선언적 지표 정의: (출력 필드명, 페이지 라벨, 탐색 전략).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// JSON 출력 필드명
    pub field: &'static str,
    /// 페이지에 표시되는 라벨
    pub label: &'static str,
    /// 탐색 전략
    pub strategy: LocatorStrategy,
}

impl Indicator {
    /// 지표 정의 생성
    pub const fn new(field: &'static str, label: &'static str, strategy: LocatorStrategy) -> Self {
        Self {
            field,
            label,
            strategy,
        }
    }
}

/// 원본 HTML을 탐색 가능한 문서로 파싱합니다.
pub fn parse_document(raw: &str) -> Html {
    Html::parse_document(raw)
}

/// 라벨에 해당하는 값 텍스트를 찾습니다.
///
/// 라벨이 없거나 값 텍스트가 비어 있으면 `None`입니다.
pub fn locate(document: &Html, label: &str, strategy: &LocatorStrategy) -> Option<String> {
    let text = match *strategy {
        LocatorStrategy::Sibling { label_selector } => locate_sibling(document, label, label_selector),
        LocatorStrategy::Card {
            header_selector,
            container_class,
            value_selector,
        } => locate_card(document, label, header_selector, container_class, value_selector),
        LocatorStrategy::LabeledBox {
            container_selector,
            value_selector,
        } => locate_box(document, label, container_selector, value_selector),
    }?;

    (!text.is_empty()).then_some(text)
}

/// 지표 하나를 찾아 정규화합니다.
pub fn extract(document: &Html, indicator: &Indicator) -> IndicatorValue {
    locate(document, indicator.label, &indicator.strategy)
        .as_deref()
        .and_then(normalize)
}

fn locate_sibling(document: &Html, label: &str, label_selector: &str) -> Option<String> {
    let selector = selector(label_selector)?;

    document
        .select(&selector)
        .find(|el| element_text(*el) == label)
        .and_then(|el| el.next_siblings().find_map(ElementRef::wrap))
        .map(element_text)
}

fn locate_card(
    document: &Html,
    label: &str,
    header_selector: &str,
    container_class: &str,
    value_selector: &str,
) -> Option<String> {
    let header_selector = selector(header_selector)?;
    let value_selector = selector(value_selector)?;

    // title 속성 우선, 없으면 헤더 텍스트
    let header = document
        .select(&header_selector)
        .find(|el| el.value().attr("title").map(str::trim) == Some(label))
        .or_else(|| {
            document
                .select(&header_selector)
                .find(|el| element_text(*el) == label)
        })?;

    let card = header
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().classes().any(|class| class == container_class))?;

    card.select(&value_selector).next().map(element_text)
}

fn locate_box(
    document: &Html,
    label: &str,
    container_selector: &str,
    value_selector: &str,
) -> Option<String> {
    let container_selector = selector(container_selector)?;
    let value_selector = selector(value_selector)?;

    document
        .select(&container_selector)
        .filter(|el| element_text(*el).contains(label))
        .find_map(|el| el.select(&value_selector).next())
        .map(element_text)
}

/// 셀렉터 파싱. 잘못된 셀렉터는 경고 후 `None`
fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            warn!(selector = css, error = ?e, "Invalid CSS selector");
            None
        }
    }
}

/// 요소의 텍스트 (연속 공백은 하나로)
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
