//! 변환 파이프라인 구동부
//!
//! 순수 상태 머신(`session`)을 tokio 위에서 움직입니다. 미리보기
//! 디바운스, 최소 변환 시간 보장, 뒤늦은 응답 폐기가 여기서 일어나며
//! 잠금은 await 경계를 넘기지 않습니다.

mod session;
mod translator;

pub use session::{
    PreviewTicket, Session, Status, SubmitPlan, SubmitTicket, TRANSLATE_FAILED_NOTICE,
};
pub use translator::{GatewayClient, Translator};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::PipelineConfig;

/// 화면이 그리는 세션 스냅샷
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineView {
    pub romanized: String,
    pub displayed: Option<String>,
    pub glyphs: String,
    pub status: Status,
    pub notice: Option<String>,
}

/// 세션 상태 머신을 비동기로 구동하는 파이프라인
#[derive(Clone)]
pub struct Pipeline {
    session: Arc<Mutex<Session>>,
    translator: Arc<dyn Translator>,
    preview_debounce: Duration,
    min_translating: Duration,
}

impl Pipeline {
    pub fn new(translator: Arc<dyn Translator>, config: &PipelineConfig) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::new())),
            translator,
            preview_debounce: config.preview_debounce(),
            min_translating: config.min_translating(),
        }
    }

    /// 원본 입력 변경. 필요하면 디바운스된 미리보기 작업을 띄운다.
    pub fn update(&self, text: &str) {
        let ticket = self.session.lock().unwrap().source_changed(text);
        if let Some(ticket) = ticket {
            self.spawn_preview(ticket);
        }
    }

    fn spawn_preview(&self, ticket: PreviewTicket) {
        let pipeline = self.clone();
        tokio::spawn(async move {
            tokio::time::sleep(pipeline.preview_debounce).await;

            // 디바운스 중 새 입력이 들어왔으면 네트워크 호출 자체를 생략
            if pipeline.session.lock().unwrap().seq() != ticket.seq {
                return;
            }

            let outcome = pipeline.translator.translate(&ticket.text).await;
            if let Err(err) = &outcome {
                log::debug!("미리보기 번역 실패, 로컬 로마자로 대체: {}", err);
            }
            pipeline
                .session
                .lock()
                .unwrap()
                .apply_preview(ticket.seq, outcome);
        });
    }

    /// 명시적 변환. 완료(또는 무효화)까지 기다린다.
    ///
    /// 업스트림이 아무리 빨라도 최소 변환 시간만큼 Translating을 유지한다.
    /// 반환값은 변환이 시작되었는지 여부.
    pub async fn submit(&self) -> bool {
        let ticket = self.session.lock().unwrap().submit();
        let Some(ticket) = ticket else {
            return false;
        };

        let outcome = match &ticket.plan {
            SubmitPlan::Local(text) => {
                tokio::time::sleep(self.min_translating).await;
                Ok(text.clone())
            }
            SubmitPlan::Translate(text) => {
                let (outcome, _) = tokio::join!(
                    self.translator.translate(text),
                    tokio::time::sleep(self.min_translating),
                );
                outcome
            }
        };

        if let Err(err) = &outcome {
            log::warn!("변환 실패: {}", err);
        }
        self.session
            .lock()
            .unwrap()
            .apply_submit(ticket.seq, outcome);
        true
    }

    /// 단일 진입점: 입력 반영 후 필요 시 명시적 변환까지 수행
    ///
    /// 명시적 변환은 완료까지 기다린다. 미리보기는 백그라운드에서
    /// 진행되므로 반환 스냅샷에 아직 반영되지 않을 수 있다.
    pub async fn orchestrate(&self, input: &str, explicit_submit: bool) -> PipelineView {
        self.update(input);
        if explicit_submit {
            self.submit().await;
        }
        self.view()
    }

    /// 로마자 필드 직접 편집
    pub fn edit_romanized(&self, text: &str) {
        self.session.lock().unwrap().romanized_edited(text);
    }

    /// 현재 세션 스냅샷
    pub fn view(&self) -> PipelineView {
        let session = self.session.lock().unwrap();
        PipelineView {
            romanized: session.romanized().to_string(),
            displayed: session.displayed().map(str::to_string),
            glyphs: session.glyphs(),
            status: session.status(),
            notice: session.notice().map(str::to_string),
        }
    }

    /// 실패 알림 소비
    pub fn take_notice(&self) -> Option<String> {
        self.session.lock().unwrap().take_notice()
    }
}
