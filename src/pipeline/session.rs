//! 오케스트레이터 상태 머신 (순수 로직)
//!
//! 입력/편집/변환 이벤트가 상태를 어떻게 바꾸는지와
//! 늦게 도착한 응답을 순번으로 거르는 규칙을 I/O 없이 정의합니다.
//! 비동기 구동은 `pipeline::Pipeline`이 담당합니다.

use crate::core::glyph::to_glyphs;
use crate::core::romanizer::romanize;
use crate::detection::contains_hangul;
use crate::gateway::TranslateError;

/// 번역 실패 알림 문구
pub const TRANSLATE_FAILED_NOTICE: &str = "번역에 실패했습니다. 잠시 후 다시 시도해 주세요.";

/// 파이프라인 진행 상태
///
/// Failed는 실패 알림이 있는 Settled와 동등하게 동작한다 (재입력 규칙 동일).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// 원본 입력 없음
    Idle,
    /// 디바운스 미리보기 진행 중
    Previewing,
    /// 명시적 변환 진행 중
    Translating,
    /// 결과 확정
    Settled,
    /// 명시적 변환 실패 (결과는 이전 값 유지)
    Failed,
}

/// 디바운스 미리보기 요청 티켓
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewTicket {
    /// 발급 시점의 순번. 적용 시 현재 순번과 일치해야 한다.
    pub seq: u64,
    /// 번역할 원본 텍스트
    pub text: String,
}

/// 명시적 변환의 텍스트 출처
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    /// 게이트웨이 번역 필요
    Translate(String),
    /// 네트워크 없이 확정 가능한 값 (수동 편집 또는 로컬 romanize)
    Local(String),
}

/// 명시적 변환 요청 티켓
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitTicket {
    pub seq: u64,
    pub plan: SubmitPlan,
}

/// 한 입력 세션의 오케스트레이터 상태
///
/// 모든 변경은 이벤트 메서드를 통해서만 일어난다. 진행 중 요청은
/// 순번(seq)으로 식별하며, 사용자 동작마다 순번이 올라가므로
/// 이전 요청의 결과는 적용 시점에 자동으로 무시된다 (last-request-wins).
#[derive(Debug)]
pub struct Session {
    /// 원본 입력 (한국어 또는 영어)
    input: String,
    /// 편집 가능한 로마자/영문 필드
    romanized: String,
    /// 확정되어 글리프로 표시되는 텍스트
    displayed: Option<String>,
    /// 로마자 필드 수동 편집 플래그
    manual_override: bool,
    /// 진행 상태
    status: Status,
    /// 마지막으로 발급한 요청 순번
    seq: u64,
    /// 비차단 실패 알림 (소비될 때까지 유지)
    notice: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            romanized: String::new(),
            displayed: None,
            manual_override: false,
            status: Status::Idle,
            seq: 0,
            notice: None,
        }
    }

    /// 원본 입력 변경 (키 입력마다 호출)
    ///
    /// 한글이 포함된 비어있지 않은 입력이고 수동 편집 중이 아니면
    /// 미리보기 티켓을 반환한다. 호출자는 디바운스 후 번역을 실행하고
    /// `apply_preview`로 결과를 반영해야 한다.
    pub fn source_changed(&mut self, text: &str) -> Option<PreviewTicket> {
        self.input = text.to_string();
        // 어떤 입력 변경이든 진행 중이던 자동 갱신을 무효화한다
        self.seq += 1;

        if self.input.trim().is_empty() && self.romanized.trim().is_empty() {
            self.manual_override = false;
        }

        if self.input.trim().is_empty() {
            if !self.manual_override {
                self.romanized.clear();
            }
            self.status = Status::Idle;
            return None;
        }

        if self.manual_override {
            // 수동 값 보존. 진행 중이던 변환도 버려지므로 확정 상태로 돌린다.
            self.status = Status::Settled;
            return None;
        }

        if contains_hangul(&self.input) {
            self.status = Status::Previewing;
            return Some(PreviewTicket {
                seq: self.seq,
                text: self.input.clone(),
            });
        }

        // 한글이 없으면 네트워크 없이 즉시 로마자 반영
        self.romanized = romanize(&self.input);
        self.status = Status::Settled;
        None
    }

    /// 로마자 필드 직접 편집
    ///
    /// 편집 즉시 수동 플래그를 세운다. 원본과 로마자가 모두 비면
    /// 세션 전체 초기화로 보고 플래그를 해제한다.
    pub fn romanized_edited(&mut self, text: &str) {
        self.romanized = text.to_string();
        self.manual_override = true;
        self.seq += 1;

        if self.input.trim().is_empty() {
            if self.romanized.trim().is_empty() {
                self.manual_override = false;
            }
            self.status = Status::Idle;
        } else {
            self.status = Status::Settled;
        }
    }

    /// 명시적 변환 실행
    ///
    /// 텍스트 출처 우선순위: 수동 편집 값 → 한글 원본의 게이트웨이 번역 →
    /// 원본의 로컬 romanize. 둘 다 비어 있거나 이미 변환 중이면 None.
    pub fn submit(&mut self) -> Option<SubmitTicket> {
        if self.status == Status::Translating {
            return None;
        }

        let plan = if self.manual_override && !self.romanized.trim().is_empty() {
            SubmitPlan::Local(self.romanized.clone())
        } else if !self.input.trim().is_empty() {
            if contains_hangul(&self.input) {
                SubmitPlan::Translate(self.input.clone())
            } else {
                SubmitPlan::Local(romanize(&self.input))
            }
        } else {
            return None;
        };

        self.seq += 1;
        self.status = Status::Translating;
        self.notice = None;
        Some(SubmitTicket {
            seq: self.seq,
            plan,
        })
    }

    /// 미리보기 응답 반영
    ///
    /// 순번이 현재와 다르면 아무것도 바꾸지 않고 false를 반환한다.
    /// 미리보기 실패는 알림 없이 로컬 romanize로 대체한다.
    pub fn apply_preview(&mut self, seq: u64, outcome: Result<String, TranslateError>) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(text) => self.romanized = text,
            Err(_) => self.romanized = romanize(&self.input),
        }
        true
    }

    /// 명시적 변환 결과 반영
    ///
    /// 순번이 현재와 다르면 아무것도 바꾸지 않고 false를 반환한다.
    /// 실패 시 표시 중이던 결과는 그대로 두고 알림만 세운다.
    pub fn apply_submit(&mut self, seq: u64, outcome: Result<String, TranslateError>) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(text) => {
                self.romanized = text.clone();
                self.displayed = Some(text);
                self.status = Status::Settled;
            }
            Err(_) => {
                self.status = Status::Failed;
                self.notice = Some(TRANSLATE_FAILED_NOTICE.to_string());
            }
        }
        true
    }

    /// 확정 텍스트의 상형문자 시퀀스
    pub fn glyphs(&self) -> String {
        self.displayed.as_deref().map(to_glyphs).unwrap_or_default()
    }

    /// 실패 알림을 소비 (한 번 읽으면 사라짐)
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn romanized(&self) -> &str {
        &self.romanized
    }

    pub fn displayed(&self) -> Option<&str> {
        self.displayed.as_deref()
    }

    pub fn manual_override(&self) -> bool {
        self.manual_override
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure() -> Result<String, TranslateError> {
        Err(TranslateError::RequestFailed("연결 끊김".into()))
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.romanized(), "");
        assert_eq!(session.displayed(), None);
        assert!(!session.manual_override());
    }

    #[test]
    fn test_korean_input_issues_preview_ticket() {
        let mut session = Session::new();
        let ticket = session.source_changed("안녕").unwrap();
        assert_eq!(ticket.text, "안녕");
        assert_eq!(session.status(), Status::Previewing);
    }

    #[test]
    fn test_ascii_input_settles_without_ticket() {
        let mut session = Session::new();
        let ticket = session.source_changed("hello");
        assert!(ticket.is_none());
        assert_eq!(session.romanized(), "Hello");
        assert_eq!(session.status(), Status::Settled);
    }

    #[test]
    fn test_cleared_input_returns_to_idle() {
        let mut session = Session::new();
        session.source_changed("hello");
        session.source_changed("");
        assert_eq!(session.status(), Status::Idle);
        assert_eq!(session.romanized(), "");
    }

    #[test]
    fn test_each_keystroke_bumps_seq() {
        let mut session = Session::new();
        let first = session.source_changed("안").unwrap();
        let second = session.source_changed("안녕").unwrap();
        assert!(second.seq > first.seq);
    }

    #[test]
    fn test_stale_preview_discarded() {
        let mut session = Session::new();
        let first = session.source_changed("안").unwrap();
        let second = session.source_changed("안녕").unwrap();

        // 나중 요청이 먼저 도착
        assert!(session.apply_preview(second.seq, Ok("Hi".into())));
        assert_eq!(session.romanized(), "Hi");

        // 이전 요청이 뒤늦게 도착해도 무시됨
        assert!(!session.apply_preview(first.seq, Ok("Stale".into())));
        assert_eq!(session.romanized(), "Hi");
    }

    #[test]
    fn test_preview_failure_falls_back_to_local_romanize() {
        let mut session = Session::new();
        let ticket = session.source_changed("안녕").unwrap();
        assert!(session.apply_preview(ticket.seq, failure()));
        // 알림 없이 로컬 romanize로 대체
        assert_eq!(session.romanized(), "Annyeong");
        assert_eq!(session.notice(), None);
    }

    #[test]
    fn test_manual_edit_blocks_auto_preview() {
        let mut session = Session::new();
        session.source_changed("김민준");
        session.romanized_edited("Custom");

        // 원본을 계속 수정해도 수동 값은 유지되고 티켓도 발급되지 않음
        let ticket = session.source_changed("김민준님");
        assert!(ticket.is_none());
        assert_eq!(session.romanized(), "Custom");
        assert!(session.manual_override());
    }

    #[test]
    fn test_manual_edit_supersedes_inflight_preview() {
        let mut session = Session::new();
        let ticket = session.source_changed("안녕").unwrap();
        session.romanized_edited("Mine");

        assert!(!session.apply_preview(ticket.seq, Ok("Auto".into())));
        assert_eq!(session.romanized(), "Mine");
    }

    #[test]
    fn test_override_survives_source_clear() {
        let mut session = Session::new();
        session.source_changed("안녕");
        session.romanized_edited("Mine");

        // 원본만 비워도 수동 값은 남는다
        session.source_changed("");
        assert!(session.manual_override());
        assert_eq!(session.romanized(), "Mine");
    }

    #[test]
    fn test_override_resets_only_when_both_empty() {
        let mut session = Session::new();
        session.source_changed("안녕");
        session.romanized_edited("Mine");
        session.source_changed("");
        session.romanized_edited("");

        assert!(!session.manual_override());
        assert_eq!(session.status(), Status::Idle);

        // 초기화 후에는 자동 반영이 다시 동작
        session.source_changed("hello");
        assert_eq!(session.romanized(), "Hello");
    }

    #[test]
    fn test_submit_priority_manual_first() {
        let mut session = Session::new();
        session.source_changed("김민준");
        session.romanized_edited("Neo");

        let ticket = session.submit().unwrap();
        // 수동 값이 있으면 한글 원본이어도 게이트웨이를 거치지 않는다
        assert_eq!(ticket.plan, SubmitPlan::Local("Neo".into()));
    }

    #[test]
    fn test_submit_korean_goes_to_gateway() {
        let mut session = Session::new();
        session.source_changed("김민준");
        let ticket = session.submit().unwrap();
        assert_eq!(ticket.plan, SubmitPlan::Translate("김민준".into()));
        assert_eq!(session.status(), Status::Translating);
    }

    #[test]
    fn test_submit_ascii_is_local() {
        let mut session = Session::new();
        session.source_changed("hello");
        let ticket = session.submit().unwrap();
        assert_eq!(ticket.plan, SubmitPlan::Local("Hello".into()));
    }

    #[test]
    fn test_submit_empty_session_is_noop() {
        let mut session = Session::new();
        assert!(session.submit().is_none());
        assert_eq!(session.status(), Status::Idle);
    }

    #[test]
    fn test_double_submit_guard() {
        let mut session = Session::new();
        session.source_changed("안녕");
        assert!(session.submit().is_some());
        // 변환 중에는 재요청 불가
        assert!(session.submit().is_none());
    }

    #[test]
    fn test_submit_success_sets_displayed() {
        let mut session = Session::new();
        session.source_changed("안녕");
        let ticket = session.submit().unwrap();

        assert!(session.apply_submit(ticket.seq, Ok("Hello".into())));
        assert_eq!(session.status(), Status::Settled);
        assert_eq!(session.romanized(), "Hello");
        assert_eq!(session.displayed(), Some("Hello"));
        assert!(!session.glyphs().is_empty());
    }

    #[test]
    fn test_submit_failure_keeps_displayed_and_raises_notice() {
        let mut session = Session::new();
        session.source_changed("안녕");
        let ticket = session.submit().unwrap();
        session.apply_submit(ticket.seq, Ok("Hello".into()));

        // 두 번째 변환이 실패해도 기존 결과는 유지
        session.source_changed("안녕하세요");
        let ticket = session.submit().unwrap();
        assert!(session.apply_submit(ticket.seq, failure()));

        assert_eq!(session.status(), Status::Failed);
        assert_eq!(session.displayed(), Some("Hello"));
        assert_eq!(session.notice(), Some(TRANSLATE_FAILED_NOTICE));
    }

    #[test]
    fn test_notice_consumed_once() {
        let mut session = Session::new();
        session.source_changed("안녕");
        let ticket = session.submit().unwrap();
        session.apply_submit(ticket.seq, failure());

        assert_eq!(session.take_notice().as_deref(), Some(TRANSLATE_FAILED_NOTICE));
        assert_eq!(session.take_notice(), None);
    }

    #[test]
    fn test_resubmit_clears_notice() {
        let mut session = Session::new();
        session.source_changed("안녕");
        let ticket = session.submit().unwrap();
        session.apply_submit(ticket.seq, failure());
        assert!(session.notice().is_some());

        // 재시도 시작과 동시에 이전 알림은 사라진다
        let ticket = session.submit().unwrap();
        assert_eq!(session.notice(), None);
        session.apply_submit(ticket.seq, Ok("Hello".into()));
        assert_eq!(session.status(), Status::Settled);
    }

    #[test]
    fn test_keystroke_supersedes_inflight_submit() {
        let mut session = Session::new();
        session.source_changed("안녕");
        let ticket = session.submit().unwrap();

        // 변환 중 키 입력이 들어오면 해당 변환은 버려진다
        session.source_changed("안녕하");
        assert_eq!(session.status(), Status::Previewing);
        assert!(!session.apply_submit(ticket.seq, Ok("Old".into())));
        assert_eq!(session.displayed(), None);
    }

    #[test]
    fn test_typing_during_translate_with_override_not_stuck() {
        let mut session = Session::new();
        session.source_changed("안녕");
        session.romanized_edited("Mine");
        let ticket = session.submit().unwrap();
        assert_eq!(session.status(), Status::Translating);

        // 수동 편집 상태에서 원본을 수정해도 스피너에 갇히지 않는다
        session.source_changed("안녕하");
        assert_eq!(session.status(), Status::Settled);
        assert!(!session.apply_submit(ticket.seq, Ok("Mine".into())));
    }

    #[test]
    fn test_submit_with_only_manual_text() {
        let mut session = Session::new();
        session.romanized_edited("Cleo");
        let ticket = session.submit().unwrap();
        assert_eq!(ticket.plan, SubmitPlan::Local("Cleo".into()));
    }
}
