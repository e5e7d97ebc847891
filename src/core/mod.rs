//! 핵심 변환 파이프라인 (분해 → 로마자 → 상형문자)

pub mod glyph;
pub mod romanizer;
pub mod unicode;

pub use glyph::to_glyphs;
pub use romanizer::romanize;
pub use unicode::{compose_syllable, decompose_char, decompose_syllable};
