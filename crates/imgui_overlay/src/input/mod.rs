//! Input translation
//!
//! Architecture:
//! - key_map: static engine -> GUI key table
//! - translator: per-frame polling, text input filtering and capture feedback

pub mod key_map;
pub mod translator;

pub use key_map::KeyMap;
pub use translator::{CaptureState, InputTranslator};
