//! 외부 지표 페이지 요청.
//!
//! 요청당 한 번만 시도하며 재시도하지 않습니다.

use async_trait::async_trait;
use indicator_core::FetchConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

/// 페이지 요청 에러
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}")]
    Status { status: u16 },
}

impl FetchError {
    /// 외부 사이트가 404를 돌려줬는지 여부
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status } if *status == StatusCode::NOT_FOUND.as_u16())
    }
}

/// 원본 HTML을 가져오는 전송 계층.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// URL에 GET 요청을 보내고 본문을 반환합니다.
    ///
    /// 2xx 이외의 응답은 `FetchError::Status`입니다.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// reqwest 기반 페이지 요청기.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: Client,
}

impl HttpPageFetcher {
    /// 설정으로 생성
    ///
    /// # Errors
    /// TLS 백엔드 초기화 등 클라이언트 생성에 실패하면 에러를 반환합니다.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("pt-BR,pt;q=0.9,en;q=0.8"),
        );

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        debug!(url, status = status.as_u16(), "Page fetched");

        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher() -> HttpPageFetcher {
        HttpPageFetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_browser_user_agent() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/acoes/petr4/")
            .match_header("user-agent", mockito::Matcher::Regex("^Mozilla/5.0".to_string()))
            .with_status(200)
            .with_body("<html>ok</html>")
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/acoes/petr4/", server.url()))
            .await
            .unwrap();

        assert_eq!(body, "<html>ok</html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/funds/xxxx11/")
            .with_status(404)
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/funds/xxxx11/", server.url()))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "HTTP 404");
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_not_not_found() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/acoes/bbas3/")
            .with_status(503)
            .create_async()
            .await;

        let err = fetcher()
            .fetch(&format!("{}/acoes/bbas3/", server.url()))
            .await
            .unwrap_err();

        assert!(!err.is_not_found());
        assert!(matches!(err, FetchError::Status { status: 503 }));
    }
}
