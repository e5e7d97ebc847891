//! 번역 게이트웨이 에러 타입

/// 번역 요청 실패 종류
#[derive(Debug)]
pub enum TranslateError {
    /// 공백 제거 후 빈 입력
    EmptyInput,
    /// 인증 키 미설정
    ConfigurationMissing,
    /// 요청 본문이 올바른 JSON이 아님
    MalformedRequest(String),
    /// 업스트림이 실패 상태를 반환 (상태 코드와 응답 본문 보존)
    UpstreamRejected { status: u16, body: String },
    /// 업스트림 호출은 성공했으나 번역 결과가 없음
    EmptyResult,
    /// 업스트림 응답 제한 시간 초과
    UpstreamTimeout,
    /// 전송 계층 실패
    RequestFailed(String),
}

impl std::fmt::Display for TranslateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslateError::EmptyInput => write!(f, "빈 입력"),
            TranslateError::ConfigurationMissing => write!(f, "인증 키 미설정"),
            TranslateError::MalformedRequest(s) => write!(f, "잘못된 요청 본문: {}", s),
            TranslateError::UpstreamRejected { status, body } => {
                write!(f, "업스트림 오류 응답 ({}): {}", status, body)
            }
            TranslateError::EmptyResult => write!(f, "빈 번역 결과"),
            TranslateError::UpstreamTimeout => write!(f, "업스트림 응답 시간 초과"),
            TranslateError::RequestFailed(s) => write!(f, "요청 실패: {}", s),
        }
    }
}

impl std::error::Error for TranslateError {}

impl From<reqwest::Error> for TranslateError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslateError::UpstreamTimeout
        } else {
            TranslateError::RequestFailed(e.to_string())
        }
    }
}

impl TranslateError {
    /// 실패 종류에 대응하는 HTTP 상태 코드
    ///
    /// UpstreamRejected는 업스트림의 상태 코드를 그대로 전달한다.
    pub fn status_code(&self) -> u16 {
        match self {
            TranslateError::EmptyInput => 400,
            TranslateError::ConfigurationMissing => 500,
            TranslateError::MalformedRequest(_) => 400,
            TranslateError::UpstreamRejected { status, .. } => *status,
            TranslateError::EmptyResult => 500,
            TranslateError::UpstreamTimeout => 504,
            TranslateError::RequestFailed(_) => 500,
        }
    }
}
