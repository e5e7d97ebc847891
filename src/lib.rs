pub mod config;
pub mod core;
pub mod detection;
pub mod gateway;
pub mod pipeline;

pub use crate::core::{compose_syllable, decompose_char, decompose_syllable, romanize, to_glyphs};
pub use detection::{contains_hangul, is_hangul_jamo, is_hangul_syllable};
pub use gateway::{create_router, run_server, AppState, TranslateError};
pub use pipeline::{Pipeline, PipelineView, Session, Status, Translator};
