//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_BASE + 11171).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 문자를 자모 시퀀스로 분해
///
/// 완성형 음절은 초성/중성 자모와, 종성이 있으면 종성 자모까지 1~3개로
/// 분해된다. 종성 인덱스 0(종성 없음)은 빈 자리이므로 출력하지 않는다.
/// 완성형이 아닌 문자는 그대로 한 글자 시퀀스로 반환 (전체 정의역에서 실패 없음).
pub fn decompose_char(c: char) -> Vec<char> {
    let Some((cho, jung, jong)) = decompose_syllable(c) else {
        return vec![c];
    };
    let mut jamo = Vec::with_capacity(3);
    if let Some(ch) = choseong_to_jamo_char(cho) {
        jamo.push(ch);
    }
    if let Some(ch) = jungseong_to_jamo_char(jung) {
        jamo.push(ch);
    }
    if jong != 0 {
        if let Some(ch) = jongseong_to_jamo_char(jong) {
            jamo.push(ch);
        }
    }
    jamo
}

/// 초성 인덱스의 호환용 자모 문자 반환
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    if cho < CHOSEONG_COUNT {
        // 호환용 자모: 초성 순서와 다르므로 직접 매핑
        #[rustfmt::skip]
        let jamo_codes: [u32; 19] = [
            0x3131, // ㄱ
            0x3132, // ㄲ
            0x3134, // ㄴ
            0x3137, // ㄷ
            0x3138, // ㄸ
            0x3139, // ㄹ
            0x3141, // ㅁ
            0x3142, // ㅂ
            0x3143, // ㅃ
            0x3145, // ㅅ
            0x3146, // ㅆ
            0x3147, // ㅇ
            0x3148, // ㅈ
            0x3149, // ㅉ
            0x314A, // ㅊ
            0x314B, // ㅋ
            0x314C, // ㅌ
            0x314D, // ㅍ
            0x314E, // ㅎ
        ];
        char::from_u32(jamo_codes[cho as usize])
    } else {
        None
    }
}

/// 중성 인덱스의 호환용 모음 자모 문자 반환
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    if jung < JUNGSEONG_COUNT {
        // 호환용 모음 자모: ㅏ(0x314F) ~ ㅣ(0x3163) 연속 배치
        let code = 0x314F + jung;
        char::from_u32(code)
    } else {
        None
    }
}

/// 종성 인덱스의 호환용 자모 문자 반환 (1~27, 0은 종성 없음)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if (1..JONGSEONG_COUNT).contains(&jong) {
        // 호환용 자모: 겹받침 포함, 종성 순서와 코드 순서가 다르므로 직접 매핑
        #[rustfmt::skip]
        let jamo_codes: [u32; 27] = [
            0x3131, // ㄱ
            0x3132, // ㄲ
            0x3133, // ㄳ
            0x3134, // ㄴ
            0x3135, // ㄵ
            0x3136, // ㄶ
            0x3137, // ㄷ
            0x3139, // ㄹ
            0x313A, // ㄺ
            0x313B, // ㄻ
            0x313C, // ㄼ
            0x313D, // ㄽ
            0x313E, // ㄾ
            0x313F, // ㄿ
            0x3140, // ㅀ
            0x3141, // ㅁ
            0x3142, // ㅂ
            0x3144, // ㅄ
            0x3145, // ㅅ
            0x3146, // ㅆ
            0x3147, // ㅇ
            0x3148, // ㅈ
            0x314A, // ㅊ
            0x314B, // ㅋ
            0x314C, // ㅌ
            0x314D, // ㅍ
            0x314E, // ㅎ
        ];
        char::from_u32(jamo_codes[(jong - 1) as usize])
    } else {
        None
    }
}
