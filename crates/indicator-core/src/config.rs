//! 설정 관리.
//!
//! 설정은 다음 순서로 겹쳐서 로드됩니다 (뒤가 우선):
//! 1. 구조체 기본값
//! 2. TOML 파일 (`config/default.toml` 또는 `INDICATOR_CONFIG` 경로, 없어도 됨)
//! 3. `INDICATOR__` 접두사 환경 변수 (예: `INDICATOR__SERVER__PORT=8080`)
//! 4. `HOST` / `PORT` 환경 변수

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 브라우저 흉내용 기본 User-Agent.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// 서버 설정
    pub server: ServerConfig,
    /// 로깅 설정
    pub logging: LoggingConfig,
    /// 외부 페이지 요청 설정
    pub fetch: FetchConfig,
    /// 데이터 소스 URL
    pub sources: SourcesConfig,
}

/// 서버 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 바인딩할 호스트
    pub host: String,
    /// 리스닝할 포트
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl ServerConfig {
    /// `host:port` 형식의 바인딩 주소.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

/// 외부 페이지 요청 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FetchConfig {
    /// 요청에 실을 User-Agent
    pub user_agent: String,
    /// 요청 타임아웃 (초)
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FetchConfig {
    /// 타임아웃을 Duration으로 반환
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 데이터 소스 기본 URL.
///
/// 테스트나 프록시 환경에서 다른 호스트를 가리키도록 바꿀 수 있습니다.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// 주식 지표 사이트 (Investidor10)
    pub equity_base_url: String,
    /// 부동산 펀드 지표 사이트 (Funds Explorer)
    pub fund_base_url: String,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            equity_base_url: "https://investidor10.com.br".to_string(),
            fund_base_url: "https://www.fundsexplorer.com.br".to_string(),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 없으면 건너뜁니다.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("INDICATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            // 기존 배포 환경의 HOST/PORT 변수 호환
            .set_override_option("server.host", std::env::var("HOST").ok())?
            .set_override_option(
                "server.port",
                std::env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok()),
            )?;

        builder.build()?.try_deserialize()
    }

    /// 기본 경로에서 설정을 로드합니다.
    ///
    /// `INDICATOR_CONFIG` 환경 변수가 있으면 해당 경로를 사용합니다.
    pub fn load_default() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var("INDICATOR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(path)
    }

    /// TOML 문자열에서 설정을 로드합니다 (환경 변수 미적용).
    pub fn from_toml(content: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(content, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
