//! 파이프라인이 사용하는 번역기 추상화
//!
//! 오케스트레이터는 구체 클라이언트 대신 `Translator` 트레이트에만
//! 의존합니다. 운영에서는 DeepL 직접 호출 또는 게이트웨이 경유,
//! 테스트에서는 목 구현을 꽂습니다.

use std::time::Duration;

use async_trait::async_trait;

use crate::gateway::{DeepLClient, TranslateError, TranslateRequest, TranslateResponse};

/// 원본 텍스트를 영문으로 번역하는 비동기 인터페이스
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String, TranslateError>;
}

#[async_trait]
impl Translator for DeepLClient {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        DeepLClient::translate(self, text).await
    }
}

/// 게이트웨이(`POST /api/translate`)를 경유하는 번역기
///
/// 파이프라인과 게이트웨이를 분리 배포할 때 사용한다.
/// 게이트웨이가 돌려주는 상태 코드와 본문을 그대로 오류에 싣는다.
pub struct GatewayClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GatewayClient {
    pub fn new(endpoint: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl Translator for GatewayClient {
    async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let request = TranslateRequest {
            text: text.to_string(),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslateError::UpstreamRejected {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = response.json().await?;
        let translated = parsed.translated_text.trim();
        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }
        Ok(translated.to_string())
    }
}
