// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Sage answer engine.
//!
//! This crate provides the error type, the part-of-speech vocabulary, and the
//! two capability traits the engine consumes from the outside world: a
//! [`Tagger`] for linguistic analysis and a [`ChoiceSource`] for random picks.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::SageError;
pub use traits::{ChoiceSource, Tagger, ThreadRngChoice};
pub use types::{PartOfSpeech, TaggedToken};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sage_error_has_all_variants() {
        let _config = SageError::Config("test".into());
        let _prompt = SageError::Prompt {
            path: "prompt.json".into(),
            source: Box::new(std::io::Error::other("test")),
        };
        let _tagger = SageError::Tagger("test".into());
        let _gateway = SageError::Gateway {
            message: "test".into(),
            source: None,
        };
        let _internal = SageError::Internal("test".into());
    }

    #[test]
    fn error_messages_name_their_category() {
        let err = SageError::Prompt {
            path: "missing.json".into(),
            source: Box::new(std::io::Error::other("no such file")),
        };
        let text = err.to_string();
        assert!(text.contains("missing.json"), "got: {text}");
        assert!(text.contains("no such file"), "got: {text}");

        let err = SageError::Tagger("bad input".into());
        assert_eq!(err.to_string(), "tagger error: bad input");
    }

    #[test]
    fn capability_traits_are_object_safe() {
        fn _assert_tagger(_: &dyn Tagger) {}
        fn _assert_choice(_: &dyn ChoiceSource) {}
    }
}
