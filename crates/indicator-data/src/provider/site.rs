//! 사이트별 선언적 지표 테이블.
//!
//! 사이트 하나는 하나의 탐색 전략에 묶이며, 지표 목록은
//! `(필드명, 라벨, 전략)` 테이블로만 정의합니다.

use indicator_core::Ticker;

use crate::extract::{Indicator, LocatorStrategy};

/// 현재가 필드명. 모든 사이트에서 시세 앵커에서 추출됩니다.
pub const QUOTE_FIELD: &str = "preco_atual";

/// 상품 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    /// 주식 (ação)
    Equity,
    /// 부동산 펀드 (FII)
    Fund,
}

impl std::fmt::Display for InstrumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Equity => write!(f, "acao"),
            Self::Fund => write!(f, "fii"),
        }
    }
}

/// Investidor10 카드 구조
///
/// `._card > ._card-header span[title=라벨]` / `._card > ._card-body span`
const INVESTIDOR10_CARD: LocatorStrategy = LocatorStrategy::Card {
    header_selector: "._card-header span",
    container_class: "_card",
    value_selector: "._card-body span",
};

/// Funds Explorer 지표 박스 구조
///
/// `.indicators__box` 안의 `p b`
const FUNDS_EXPLORER_BOX: LocatorStrategy = LocatorStrategy::LabeledBox {
    container_selector: ".indicators__box",
    value_selector: "p b",
};

const INVESTIDOR10_INDICATORS: &[Indicator] = &[
    Indicator::new("pl", "P/L", INVESTIDOR10_CARD),
    Indicator::new("pvp", "P/VP", INVESTIDOR10_CARD),
    Indicator::new("dy", "DY", INVESTIDOR10_CARD),
    Indicator::new("roe", "ROE", INVESTIDOR10_CARD),
    Indicator::new("liquidez_corrente", "Liquidez Corrente", INVESTIDOR10_CARD),
    Indicator::new("div_liq_ebitda", "Dív. Líquida / EBITDA", INVESTIDOR10_CARD),
    Indicator::new("cagr_lucros", "CAGR Lucros 5 anos", INVESTIDOR10_CARD),
    Indicator::new("div_patrimonio", "Dív. Bruta / Patrimônio", INVESTIDOR10_CARD),
    Indicator::new("cres_rec_5a", "Cresc. Receita 5 anos", INVESTIDOR10_CARD),
    Indicator::new("cres_lucro_5a", "Cresc. Lucro 5 anos", INVESTIDOR10_CARD),
];

const FUNDS_EXPLORER_INDICATORS: &[Indicator] = &[
    Indicator::new("liquidez_media_diaria", "Liquidez Média Diária", FUNDS_EXPLORER_BOX),
    Indicator::new("ultimo_rendimento", "Último Rendimento", FUNDS_EXPLORER_BOX),
    Indicator::new("dividend_yield", "Dividend Yield", FUNDS_EXPLORER_BOX),
    Indicator::new("patrimonio_liquido", "Patrimônio Líquido", FUNDS_EXPLORER_BOX),
    Indicator::new("valor_patrimonial", "Valor Patrimonial", FUNDS_EXPLORER_BOX),
    Indicator::new("pvp", "P/VP", FUNDS_EXPLORER_BOX),
    Indicator::new("rentabilidade_no_mes", "Rentab. no mês", FUNDS_EXPLORER_BOX),
];

/// 지표 사이트 프로필.
#[derive(Debug, Clone)]
pub struct SiteProfile {
    /// 소스 이름 (로그/메트릭 라벨)
    pub source: &'static str,
    /// 상품 유형
    pub kind: InstrumentKind,
    /// 기본 URL (스킴 + 호스트)
    pub base_url: String,
    /// 페이지 경로 템플릿 (`{ticker}`는 소문자 티커로 치환)
    pub path_template: &'static str,
    /// 시세 앵커 셀렉터. 없으면 유효한 티커 페이지가 아닌 것으로 판단
    pub quote_selector: &'static str,
    /// 지표 테이블
    pub indicators: &'static [Indicator],
}

impl SiteProfile {
    /// Investidor10 주식 페이지
    pub fn investidor10(base_url: impl Into<String>) -> Self {
        Self {
            source: "investidor10",
            kind: InstrumentKind::Equity,
            base_url: base_url.into(),
            path_template: "/acoes/{ticker}/",
            quote_selector: "#cards-ticker ._card.cotacao .value",
            indicators: INVESTIDOR10_INDICATORS,
        }
    }

    /// Funds Explorer 부동산 펀드 페이지
    pub fn funds_explorer(base_url: impl Into<String>) -> Self {
        Self {
            source: "fundsexplorer",
            kind: InstrumentKind::Fund,
            base_url: base_url.into(),
            path_template: "/funds/{ticker}/",
            quote_selector: ".item--quotation .item-value .value",
            indicators: FUNDS_EXPLORER_INDICATORS,
        }
    }

    /// 티커 페이지 URL
    pub fn url_for(&self, ticker: &Ticker) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.path_template
                .replace("{ticker}", &ticker.path_segment())
        )
    }

    /// 출력 필드명 목록 (현재가 포함, 출력 순서)
    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(QUOTE_FIELD).chain(self.indicators.iter().map(|i| i.field))
    }
}
