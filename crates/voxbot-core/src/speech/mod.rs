//! Speech synthesis provider abstractions.
//!
//! - `SpeechProvider`: trait for concrete synthesis backends
//! - `BoxSpeechProvider`: Object-safe wrapper for dynamic dispatch
//! - `audio`: bounded stream drain and data-URI encoding

pub mod audio;
pub mod box_provider;
pub mod provider;
