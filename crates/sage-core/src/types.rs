// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared between the tagger seam and the engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Coarse part-of-speech categories produced by a [`crate::Tagger`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartOfSpeech {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Determiner,
    Preposition,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PartOfSpeech {
    /// Nouns and proper nouns become keywords.
    pub fn is_keyword(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::ProperNoun)
    }

    /// Verbs become concepts.
    pub fn is_concept(&self) -> bool {
        matches!(self, PartOfSpeech::Verb)
    }
}

/// A single token with its assigned part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token text exactly as it appeared in the input.
    pub text: String,
    /// The assigned category.
    pub tag: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, tag: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn keyword_and_concept_classes() {
        assert!(PartOfSpeech::Noun.is_keyword());
        assert!(PartOfSpeech::ProperNoun.is_keyword());
        assert!(!PartOfSpeech::Verb.is_keyword());
        assert!(PartOfSpeech::Verb.is_concept());
        assert!(!PartOfSpeech::Adjective.is_concept());
    }

    #[test]
    fn part_of_speech_display_and_parse() {
        assert_eq!(PartOfSpeech::ProperNoun.to_string(), "PROPER_NOUN");
        assert_eq!(
            PartOfSpeech::from_str("VERB").expect("should parse"),
            PartOfSpeech::Verb
        );
        assert!(PartOfSpeech::from_str("verbish").is_err());
    }

    #[test]
    fn tagged_token_serialization() {
        let token = TaggedToken::new("goroutine", PartOfSpeech::Noun);
        let json = serde_json::to_string(&token).expect("should serialize");
        assert_eq!(json, r#"{"text":"goroutine","tag":"NOUN"}"#);
    }
}
