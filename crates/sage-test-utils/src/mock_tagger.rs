// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock tagger for deterministic testing.
//!
//! `MockTagger` splits on whitespace, trims surrounding punctuation and tags
//! each word from fixed lists: listed keywords become nouns, listed verbs
//! become verbs, everything else is `Other`. It can also be made to fail on
//! every call to exercise the error fallback.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use sage_core::{PartOfSpeech, SageError, TaggedToken, Tagger};

#[derive(Debug, Default)]
pub struct MockTagger {
    keywords: HashSet<String>,
    verbs: HashSet<String>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockTagger {
    /// A tagger that recognises nothing: every question has no keywords.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tagger that fails on every call.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Words (case-insensitive) tagged as nouns.
    pub fn with_keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Words (case-insensitive) tagged as verbs.
    pub fn with_verbs<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.verbs
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    /// Number of `tag` calls so far, failed ones included.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Tagger for MockTagger {
    fn name(&self) -> &str {
        "mock-tagger"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, SageError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SageError::Tagger("mock tagger failure".into()));
        }

        let tokens = text
            .split_whitespace()
            .map(|raw| raw.trim_matches(|c: char| c.is_ascii_punctuation()))
            .filter(|word| !word.is_empty())
            .map(|word| {
                let lower = word.to_lowercase();
                let tag = if self.keywords.contains(&lower) {
                    PartOfSpeech::Noun
                } else if self.verbs.contains(&lower) {
                    PartOfSpeech::Verb
                } else {
                    PartOfSpeech::Other
                };
                TaggedToken::new(word, tag)
            })
            .collect();
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_from_word_lists() {
        let tagger = MockTagger::new()
            .with_keywords(["goroutine"])
            .with_verbs(["spawn"]);
        let tokens = tagger.tag("How do I spawn a Goroutine?").unwrap();
        let tags: Vec<(&str, PartOfSpeech)> =
            tokens.iter().map(|t| (t.text.as_str(), t.tag)).collect();
        assert!(tags.contains(&("Goroutine", PartOfSpeech::Noun)));
        assert!(tags.contains(&("spawn", PartOfSpeech::Verb)));
        assert!(tags.contains(&("How", PartOfSpeech::Other)));
        assert_eq!(tagger.calls(), 1);
    }

    #[test]
    fn failing_mode_errors_and_counts() {
        let tagger = MockTagger::failing();
        assert!(matches!(tagger.tag("anything"), Err(SageError::Tagger(_))));
        assert!(tagger.tag("again").is_err());
        assert_eq!(tagger.calls(), 2);
    }
}
