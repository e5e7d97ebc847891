//! 번역 게이트웨이 HTTP 서비스
//!
//! # Endpoints
//!
//! - `GET /health` - 상태 확인
//! - `POST /api/translate` - 한국어 → 영어 번역
//!
//! 실패 응답은 `{ "error": string, "details"?: string }` 형식이며
//! 업스트림 거부 시 업스트림의 상태 코드를 그대로 전달한다.

mod deepl;
mod error;

pub use deepl::DeepLClient;
pub use error::TranslateError;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::config::GatewayConfig;

/// 게이트웨이 공유 상태
#[derive(Clone)]
pub struct AppState {
    /// 인증 키가 설정된 경우에만 존재. 없으면 모든 번역 요청이 설정 오류.
    client: Option<Arc<DeepLClient>>,
}

impl AppState {
    pub fn new(config: &GatewayConfig, timeout: Duration) -> Result<Self, TranslateError> {
        let client = match &config.api_key {
            Some(key) => Some(Arc::new(DeepLClient::new(
                key.clone(),
                config.api_url.clone(),
                timeout,
            )?)),
            None => None,
        };
        Ok(Self { client })
    }
}

/// 번역 요청 본문
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: String,
}

/// 번역 성공 응답
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// 상태 확인 응답
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// 에러 응답
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// 번역 에러를 HTTP 응답으로 변환
///
/// error 문자열은 프런트엔드가 그대로 노출하는 고정 문구이므로 변경하지 않는다.
fn error_response(err: &TranslateError) -> (StatusCode, Json<ApiError>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        TranslateError::EmptyInput => ApiError::new("No text provided"),
        TranslateError::ConfigurationMissing => ApiError::new("Missing DEEPL_API_KEY"),
        TranslateError::MalformedRequest(_) => ApiError::new("Invalid JSON"),
        TranslateError::UpstreamRejected { body, .. } => {
            ApiError::with_details("DeepL request failed", body.clone())
        }
        TranslateError::EmptyResult => ApiError::new("DeepL returned empty translation"),
        TranslateError::UpstreamTimeout => ApiError::new("Translation timed out"),
        TranslateError::RequestFailed(_) => ApiError::new("Translation failed"),
    };
    (status, Json(body))
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/translate
///
/// 검사 순서: 인증 키 → 본문 파싱 → 빈 텍스트 → 업스트림 호출.
/// 본문은 직접 파싱하여 잘못된 JSON에 고정 문구로 400을 반환한다.
async fn translate(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<TranslateResponse>, (StatusCode, Json<ApiError>)> {
    let client = state
        .client
        .as_ref()
        .ok_or_else(|| error_response(&TranslateError::ConfigurationMissing))?;

    let request: TranslateRequest = serde_json::from_str(&body)
        .map_err(|e| error_response(&TranslateError::MalformedRequest(e.to_string())))?;

    let trimmed = request.text.trim();
    if trimmed.is_empty() {
        return Err(error_response(&TranslateError::EmptyInput));
    }

    match client.translate(trimmed).await {
        Ok(translated) => Ok(Json(TranslateResponse {
            translated_text: translated,
        })),
        Err(err) => {
            log::warn!("번역 실패: {}", err);
            Err(error_response(&err))
        }
    }
}

/// /api/translate 의 POST 외 메서드 응답
async fn method_not_allowed() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new("Method not allowed")),
    )
}

/// 라우터 생성
pub fn create_router(state: AppState) -> Router {
    // 프런트엔드와 함께 로컬에서 구동되므로 전체 허용 CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/translate", post(translate).fallback(method_not_allowed))
        .layer(cors)
        .with_state(state)
}

/// 게이트웨이 서버 실행
pub async fn run_server(
    config: GatewayConfig,
    timeout: Duration,
    addr: SocketAddr,
) -> anyhow::Result<()> {
    let state = AppState::new(&config, timeout)?;
    let app = create_router(state);

    log::info!("번역 게이트웨이 시작: {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
