//! 설정 로드 (JSON 파일 + 환경 변수)

use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// DeepL 인증 키 환경 변수
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";
/// DeepL 엔드포인트 재정의 환경 변수 (선택)
pub const API_URL_ENV: &str = "DEEPL_API_URL";
/// 게이트웨이 바인드 주소 환경 변수 (선택)
pub const ADDR_ENV: &str = "HIEROKO_ADDR";
/// 설정 파일 경로 재정의 환경 변수 (선택)
pub const CONFIG_PATH_ENV: &str = "HIEROKO_CONFIG";

/// 파이프라인 타이밍 설정
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PipelineConfig {
    /// 입력 멈춘 후 미리보기 번역까지 대기 시간 (ms)
    #[serde(default = "default_preview_debounce_ms")]
    pub preview_debounce_ms: u64,
    /// 명시적 변환의 최소 진행 표시 시간 (ms)
    #[serde(default = "default_min_translating_ms")]
    pub min_translating_ms: u64,
    /// 업스트림 요청 제한 시간 (ms)
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

fn default_preview_debounce_ms() -> u64 {
    500
}

fn default_min_translating_ms() -> u64 {
    1500
}

fn default_request_timeout_ms() -> u64 {
    10_000
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            preview_debounce_ms: default_preview_debounce_ms(),
            min_translating_ms: default_min_translating_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

impl PipelineConfig {
    pub fn preview_debounce(&self) -> Duration {
        Duration::from_millis(self.preview_debounce_ms)
    }

    pub fn min_translating(&self) -> Duration {
        Duration::from_millis(self.min_translating_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

/// 설정 파일 경로: $HIEROKO_CONFIG 또는 ./hieroko.json
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("hieroko.json"))
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> PipelineConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): 기본값 사용", e);
            PipelineConfig::default()
        }),
        Err(_) => PipelineConfig::default(),
    }
}

/// 번역 게이트웨이 배포 설정 (환경 변수)
#[derive(Clone, Debug)]
pub struct GatewayConfig {
    /// DeepL 인증 키 (없으면 모든 번역 요청이 설정 오류로 실패)
    pub api_key: Option<String>,
    /// DeepL 엔드포인트 재정의 (없으면 무료 플랜 기본 주소)
    pub api_url: Option<String>,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env_nonempty(API_KEY_ENV),
            api_url: env_nonempty(API_URL_ENV),
        }
    }
}

/// 환경 변수 값을 공백 제거 후 반환 (빈 값은 미설정으로 취급)
fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// 게이트웨이 바인드 주소: $HIEROKO_ADDR 또는 127.0.0.1:8888
pub fn server_addr() -> SocketAddr {
    match std::env::var(ADDR_ENV) {
        Ok(value) => value.parse().unwrap_or_else(|_| {
            log::warn!("잘못된 {} 값 '{}': 기본 주소 사용", ADDR_ENV, value);
            default_addr()
        }),
        Err(_) => default_addr(),
    }
}

fn default_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8888))
}
