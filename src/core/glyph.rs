//! 라틴 문자 → 이집트 상형문자 매핑
//!
//! 발음이 비슷한 상형문자를 대응시킨 장식용 매핑이며
//! 이집트학의 전사 규칙을 따르지 않습니다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::romanizer::{jamo_roman, syllable_roman};

lazy_static! {
    /// 대문자 라틴 문자 기준 상형문자 테이블 (X, Y는 두 글리프)
    pub static ref GLYPH_MAP: HashMap<char, &'static str> = {
        let mut map = HashMap::new();
        map.insert('A', "𓄿");
        map.insert('B', "𓃀");
        map.insert('C', "𓎡");
        map.insert('D', "𓂧");
        map.insert('E', "𓇋");
        map.insert('F', "𓆑");
        map.insert('G', "𓎼");
        map.insert('H', "𓉔");
        map.insert('I', "𓇋");
        map.insert('J', "𓆓");
        map.insert('K', "𓎡");
        map.insert('L', "𓃭");
        map.insert('M', "𓅓");
        map.insert('N', "𓈖");
        map.insert('O', "𓍯");
        map.insert('P', "𓊪");
        map.insert('Q', "𓈎");
        map.insert('R', "𓂋");
        map.insert('S', "𓋴");
        map.insert('T', "𓏏");
        map.insert('U', "𓍯");
        map.insert('V', "𓆑");
        map.insert('W', "𓍯");
        map.insert('X', "𓎡𓋴");
        map.insert('Y', "𓇋𓇋");
        map.insert('Z', "𓊃");
        map.insert(' ', " ");
        map.insert('-', " ");
        map
    };
}

/// 매핑에 없는 문자를 대신하는 글리프
pub const UNKNOWN_GLYPH: &str = "𓏺";

/// 문자열을 상형문자 시퀀스로 변환
///
/// - 라틴 문자: 대문자 기준으로 테이블 조회 (입력 대소문자 무관)
/// - 공백/하이픈: 간격으로 유지
/// - 완성형 음절: 로마자 표기를 거쳐 글자별 매핑
/// - 단독 자모: 자모 발음의 로마자를 글자별 매핑
/// - 테이블에 없는 라틴 문자: 그대로 통과
/// - 그 외 문자: 대체 글리프
///
/// 순수 함수이며 어떤 입력에도 실패하지 않는다. 결과 양끝 공백은 제거한다.
pub fn to_glyphs(text: &str) -> String {
    let mut out = String::new();
    for c in text.chars() {
        if let Some(glyph) = GLYPH_MAP.get(&c.to_ascii_uppercase()) {
            out.push_str(glyph);
        } else if let Some(roman) = syllable_roman(c) {
            push_letters(&mut out, &roman);
        } else if let Some(roman) = jamo_roman(c) {
            push_letters(&mut out, roman);
        } else if c.is_ascii_alphabetic() {
            out.push(c);
        } else {
            out.push_str(UNKNOWN_GLYPH);
        }
    }
    out.trim().to_string()
}

/// 로마자 표기 결과의 각 글자를 테이블로 매핑
fn push_letters(out: &mut String, letters: &str) {
    for c in letters.chars() {
        match GLYPH_MAP.get(&c.to_ascii_uppercase()) {
            Some(glyph) => out.push_str(glyph),
            None => out.push(c),
        }
    }
}
