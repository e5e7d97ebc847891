//! DeepL 번역 API 클라이언트
//!
//! 한국어 → 영어 단방향 번역만 사용합니다.

use std::time::Duration;

use serde::Deserialize;

use super::error::TranslateError;

/// DeepL 무료 플랜 기본 엔드포인트
const DEFAULT_API_URL: &str = "https://api-free.deepl.com/v2/translate";

/// DeepL 응답 본문
#[derive(Debug, Deserialize)]
struct DeepLResponse {
    #[serde(default)]
    translations: Vec<DeepLTranslation>,
}

#[derive(Debug, Deserialize)]
struct DeepLTranslation {
    #[serde(default)]
    text: String,
}

/// DeepL API 클라이언트
///
/// 요청마다 새로운 인증을 만들지 않도록 생성 시점에 키와 제한 시간을 고정한다.
pub struct DeepLClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeepLClient {
    /// 클라이언트 생성
    /// - api_url이 None이면 무료 플랜 기본 주소 사용
    /// - timeout은 요청 전체에 적용되며 초과 시 UpstreamTimeout
    pub fn new(
        api_key: String,
        api_url: Option<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }

    /// 한국어 텍스트를 영어로 번역
    pub async fn translate(&self, text: &str) -> Result<String, TranslateError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        let params = [
            ("text", trimmed),
            ("target_lang", "EN"),
            ("source_lang", "KO"),
        ];
        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
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

        let parsed: DeepLResponse = response.json().await?;
        let translated = parsed
            .translations
            .first()
            .map(|t| t.text.trim())
            .unwrap_or("");
        if translated.is_empty() {
            return Err(TranslateError::EmptyResult);
        }
        Ok(translated.to_string())
    }
}
