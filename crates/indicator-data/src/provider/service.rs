//! 지표 응답 조립.
//!
//! 티커 검증 → URL 생성 → 페이지 요청 → 시세 앵커 확인 → 지표 테이블 추출 순서로
//! `IndicatorSet`을 만듭니다. 모든 실패는 `IndicatorError`로 반환되며,
//! 개별 지표 누락은 `null` 값이 될 뿐 에러가 아닙니다.

use std::sync::Arc;

use indicator_core::{
    AppConfig, IndicatorError, IndicatorResult, IndicatorSet, SourcesConfig, Ticker,
};
use scraper::Selector;
use tracing::{debug, info, warn};

use super::fetcher::{FetchError, HttpPageFetcher, PageFetcher};
use super::site::{InstrumentKind, SiteProfile, QUOTE_FIELD};
use crate::extract::{extract, normalize, parse_document};

/// 주식/펀드 지표 조회 서비스.
///
/// 요청 간 공유 상태가 없으므로 `Arc`로 감싸 여러 핸들러에서 동시에 사용할 수 있습니다.
pub struct IndicatorService {
    fetcher: Arc<dyn PageFetcher>,
    equity: SiteProfile,
    fund: SiteProfile,
}

impl IndicatorService {
    /// 전송 계층과 소스 URL로 생성
    pub fn new(fetcher: Arc<dyn PageFetcher>, sources: &SourcesConfig) -> Self {
        Self {
            fetcher,
            equity: SiteProfile::investidor10(sources.equity_base_url.clone()),
            fund: SiteProfile::funds_explorer(sources.fund_base_url.clone()),
        }
    }

    /// 설정으로 생성 (reqwest 전송 계층 사용)
    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        let fetcher = HttpPageFetcher::new(&config.fetch)?;
        Ok(Self::new(Arc::new(fetcher), &config.sources))
    }

    /// 사이트 프로필 목록
    pub fn profiles(&self) -> [&SiteProfile; 2] {
        [&self.equity, &self.fund]
    }

    /// 상품 유형별 사이트 프로필
    pub fn profile(&self, kind: InstrumentKind) -> &SiteProfile {
        match kind {
            InstrumentKind::Equity => &self.equity,
            InstrumentKind::Fund => &self.fund,
        }
    }

    /// 주식 지표 조회 (Investidor10)
    ///
    /// # Arguments
    /// * `ticker` - 종목 코드 (예: "PETR4", 대소문자 무관)
    pub async fn get_equity_indicators(&self, ticker: &str) -> IndicatorResult<IndicatorSet> {
        self.get_indicators(InstrumentKind::Equity, ticker).await
    }

    /// 부동산 펀드 지표 조회 (Funds Explorer)
    ///
    /// # Arguments
    /// * `ticker` - 펀드 코드 (예: "ALZR11", 대소문자 무관)
    pub async fn get_fund_indicators(&self, ticker: &str) -> IndicatorResult<IndicatorSet> {
        self.get_indicators(InstrumentKind::Fund, ticker).await
    }

    /// 상품 유형별 지표 조회
    pub async fn get_indicators(
        &self,
        kind: InstrumentKind,
        ticker: &str,
    ) -> IndicatorResult<IndicatorSet> {
        let ticker = Ticker::parse(ticker)?;
        let profile = self.profile(kind);
        let url = profile.url_for(&ticker);

        debug!(source = profile.source, %ticker, %url, "Fetching indicator page");

        let html = self.fetcher.fetch(&url).await.map_err(|e| {
            warn!(source = profile.source, %ticker, error = %e, "Indicator page fetch failed");
            fetch_error_to_indicator(&ticker, e)
        })?;

        let set = assemble(profile, ticker, &html)?;

        info!(
            source = profile.source,
            ticker = %set.ticker(),
            populated = set.populated(),
            declared = set.len(),
            "Indicators assembled"
        );

        Ok(set)
    }
}

/// 요청 에러 → 지표 에러
///
/// 외부 사이트의 404는 티커가 없다는 뜻이므로 구조 불일치로 취급합니다.
fn fetch_error_to_indicator(ticker: &Ticker, err: FetchError) -> IndicatorError {
    if err.is_not_found() {
        IndicatorError::StructureMismatch {
            ticker: ticker.to_string(),
        }
    } else {
        IndicatorError::transport(ticker.as_str(), err)
    }
}

/// 받아온 HTML에서 지표 집합을 조립합니다 (네트워크 없음).
///
/// # Errors
/// 시세 앵커가 없으면 `StructureMismatch`를 반환합니다.
pub fn assemble(profile: &SiteProfile, ticker: Ticker, html: &str) -> IndicatorResult<IndicatorSet> {
    let document = parse_document(html);

    let quote_selector = Selector::parse(profile.quote_selector).map_err(|e| {
        warn!(selector = profile.quote_selector, error = ?e, "Invalid quote selector");
        IndicatorError::StructureMismatch {
            ticker: ticker.to_string(),
        }
    })?;

    let Some(quote) = document.select(&quote_selector).next() else {
        warn!(source = profile.source, %ticker, "Quote anchor not found");
        return Err(IndicatorError::StructureMismatch {
            ticker: ticker.to_string(),
        });
    };

    let mut set = IndicatorSet::new(ticker);
    set.insert(QUOTE_FIELD, normalize(&quote.text().collect::<String>()));

    for indicator in profile.indicators {
        let value = extract(&document, indicator);
        if value.is_none() {
            debug!(field = indicator.field, label = indicator.label, "Indicator not found");
        }
        set.insert(indicator.field, value);
    }

    Ok(set)
}
