//! 한글 포함 여부 감지
//!
//! 게이트웨이 번역이 필요한 입력인지 판단할 때 사용합니다.

/// 문자가 완성형 한글(가-힣)인지 확인
pub fn is_hangul_syllable(ch: char) -> bool {
    let cp = ch as u32;
    (0xAC00..=0xD7A3).contains(&cp)
}

/// 문자가 호환용 자모(ㄱ-ㅎ, ㅏ-ㅣ)인지 확인
///
/// 호환용 자모 영역: U+3131 ~ U+318E
pub fn is_hangul_jamo(ch: char) -> bool {
    let cp = ch as u32;
    (0x3131..=0x318E).contains(&cp)
}

/// 텍스트에 한글(완성형 또는 낱자모)이 하나라도 포함되어 있는지 검사
pub fn contains_hangul(text: &str) -> bool {
    text.chars()
        .any(|ch| is_hangul_syllable(ch) || is_hangul_jamo(ch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hangul_syllable() {
        assert!(is_hangul_syllable('가'));
        assert!(is_hangul_syllable('힣'));
        assert!(is_hangul_syllable('안'));

        assert!(!is_hangul_syllable('ㄱ'));
        assert!(!is_hangul_syllable('ㅏ'));
        assert!(!is_hangul_syllable('a'));
        assert!(!is_hangul_syllable('1'));
    }

    #[test]
    fn test_is_hangul_jamo() {
        assert!(is_hangul_jamo('ㄱ'));
        assert!(is_hangul_jamo('ㅎ'));
        assert!(is_hangul_jamo('ㅏ'));
        assert!(is_hangul_jamo('ㅣ'));

        assert!(!is_hangul_jamo('가'));
        assert!(!is_hangul_jamo('a'));
    }

    #[test]
    fn test_contains_hangul() {
        assert!(contains_hangul("안녕"));
        assert!(contains_hangul("hello 안녕"));
        assert!(contains_hangul("가"));
        assert!(contains_hangul("ㄱㅏ")); // 낱자모도 한글로 간주

        assert!(!contains_hangul("hello"));
        assert!(!contains_hangul("123"));
        assert!(!contains_hangul(""));
        assert!(!contains_hangul("!@# abc"));
    }
}
