//! 한글 로마자 표기 (국어의 로마자 표기법 기반)
//!
//! 완성형 음절을 초성/중성/종성 발음 테이블로 변환하고
//! 단어 첫 글자를 대문자로 표기합니다.

use crate::core::unicode::decompose_syllable;

/// 초성 발음 (인덱스 0~18)
#[rustfmt::skip]
const CHOSEONG_ROMAN: [&str; 19] = [
    "g",  // ㄱ
    "kk", // ㄲ
    "n",  // ㄴ
    "d",  // ㄷ
    "tt", // ㄸ
    "r",  // ㄹ
    "m",  // ㅁ
    "b",  // ㅂ
    "pp", // ㅃ
    "s",  // ㅅ
    "ss", // ㅆ
    "",   // ㅇ (초성에서 무음)
    "j",  // ㅈ
    "jj", // ㅉ
    "ch", // ㅊ
    "k",  // ㅋ
    "t",  // ㅌ
    "p",  // ㅍ
    "h",  // ㅎ
];

/// 중성 발음 (인덱스 0~20)
#[rustfmt::skip]
const JUNGSEONG_ROMAN: [&str; 21] = [
    "a",   // ㅏ
    "ae",  // ㅐ
    "ya",  // ㅑ
    "yae", // ㅒ
    "eo",  // ㅓ
    "e",   // ㅔ
    "yeo", // ㅕ
    "ye",  // ㅖ
    "o",   // ㅗ
    "wa",  // ㅘ
    "wae", // ㅙ
    "oe",  // ㅚ
    "yo",  // ㅛ
    "u",   // ㅜ
    "wo",  // ㅝ
    "we",  // ㅞ
    "wi",  // ㅟ
    "yu",  // ㅠ
    "eu",  // ㅡ
    "ui",  // ㅢ
    "i",   // ㅣ
];

/// 종성 발음 (인덱스 0~27, 0 = 종성 없음, 받침 대표음 기준)
#[rustfmt::skip]
const JONGSEONG_ROMAN: [&str; 28] = [
    "",   // 없음
    "k",  // ㄱ
    "k",  // ㄲ
    "k",  // ㄳ
    "n",  // ㄴ
    "n",  // ㄵ
    "n",  // ㄶ
    "t",  // ㄷ
    "l",  // ㄹ
    "k",  // ㄺ
    "m",  // ㄻ
    "p",  // ㄼ
    "l",  // ㄽ
    "l",  // ㄾ
    "p",  // ㄿ
    "l",  // ㅀ
    "m",  // ㅁ
    "p",  // ㅂ
    "p",  // ㅄ
    "t",  // ㅅ
    "t",  // ㅆ
    "ng", // ㅇ
    "t",  // ㅈ
    "t",  // ㅊ
    "k",  // ㅋ
    "t",  // ㅌ
    "p",  // ㅍ
    "t",  // ㅎ
];

/// 단일 완성형 음절의 로마자 표기 (완성형이 아니면 None)
pub fn syllable_roman(c: char) -> Option<String> {
    let (cho, jung, jong) = decompose_syllable(c)?;
    let mut roman = String::new();
    roman.push_str(CHOSEONG_ROMAN[cho as usize]);
    roman.push_str(JUNGSEONG_ROMAN[jung as usize]);
    roman.push_str(JONGSEONG_ROMAN[jong as usize]);
    Some(roman)
}

/// 단독 호환용 자모의 로마자 표기 (자모가 아니면 None)
///
/// 자음은 초성 발음, 모음은 중성 발음을 사용한다.
/// 단독으로 초성이 될 수 없는 겹받침(ㄳ ㄵ ...)만 종성 발음을 사용한다.
pub fn jamo_roman(c: char) -> Option<&'static str> {
    match c {
        'ㄱ' => Some(CHOSEONG_ROMAN[0]),
        'ㄲ' => Some(CHOSEONG_ROMAN[1]),
        'ㄳ' => Some(JONGSEONG_ROMAN[3]),
        'ㄴ' => Some(CHOSEONG_ROMAN[2]),
        'ㄵ' => Some(JONGSEONG_ROMAN[5]),
        'ㄶ' => Some(JONGSEONG_ROMAN[6]),
        'ㄷ' => Some(CHOSEONG_ROMAN[3]),
        'ㄸ' => Some(CHOSEONG_ROMAN[4]),
        'ㄹ' => Some(CHOSEONG_ROMAN[5]),
        'ㄺ' => Some(JONGSEONG_ROMAN[9]),
        'ㄻ' => Some(JONGSEONG_ROMAN[10]),
        'ㄼ' => Some(JONGSEONG_ROMAN[11]),
        'ㄽ' => Some(JONGSEONG_ROMAN[12]),
        'ㄾ' => Some(JONGSEONG_ROMAN[13]),
        'ㄿ' => Some(JONGSEONG_ROMAN[14]),
        'ㅀ' => Some(JONGSEONG_ROMAN[15]),
        'ㅁ' => Some(CHOSEONG_ROMAN[6]),
        'ㅂ' => Some(CHOSEONG_ROMAN[7]),
        'ㅃ' => Some(CHOSEONG_ROMAN[8]),
        'ㅄ' => Some(JONGSEONG_ROMAN[18]),
        'ㅅ' => Some(CHOSEONG_ROMAN[9]),
        'ㅆ' => Some(CHOSEONG_ROMAN[10]),
        'ㅇ' => Some(CHOSEONG_ROMAN[11]),
        'ㅈ' => Some(CHOSEONG_ROMAN[12]),
        'ㅉ' => Some(CHOSEONG_ROMAN[13]),
        'ㅊ' => Some(CHOSEONG_ROMAN[14]),
        'ㅋ' => Some(CHOSEONG_ROMAN[15]),
        'ㅌ' => Some(CHOSEONG_ROMAN[16]),
        'ㅍ' => Some(CHOSEONG_ROMAN[17]),
        'ㅎ' => Some(CHOSEONG_ROMAN[18]),
        // 호환용 모음 ㅏ(0x314F)~ㅣ(0x3163)는 중성 인덱스 순서와 동일
        'ㅏ'..='ㅣ' => Some(JUNGSEONG_ROMAN[(c as u32 - 0x314F) as usize]),
        _ => None,
    }
}

/// 한글/영문 혼합 문자열의 로마자 표기
///
/// - 완성형 음절: 발음 테이블로 변환
/// - 공백: 단어 경계로 유지
/// - ASCII 영문자: 소문자로 통과
/// - 그 외 문자: 무시
///
/// 변환 후 각 단어의 첫 글자를 대문자로 표기한다.
/// 출력은 항상 ASCII 영문자와 단일 공백만 포함한다.
pub fn romanize(text: &str) -> String {
    let mut raw = String::new();
    for c in text.chars() {
        if let Some(roman) = syllable_roman(c) {
            raw.push_str(&roman);
        } else if c == ' ' {
            raw.push(' ');
        } else if c.is_ascii_alphabetic() {
            raw.push(c.to_ascii_lowercase());
        }
    }

    let words: Vec<String> = raw
        .split(' ')
        .filter(|word| !word.is_empty())
        .map(capitalize_first)
        .collect();
    words.join(" ")
}

/// 단어 첫 글자를 대문자로
fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
