// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-based part-of-speech tagging.
//!
//! Tags tokens with a closed-class lexicon, a small verb lexicon, a few
//! suffix rules and capitalisation. No model, no network. Anything the rules
//! do not claim is a noun, which suits keyword extraction from short
//! technical questions.

use std::sync::LazyLock;

use regex::Regex;

use sage_core::{PartOfSpeech, SageError, TaggedToken, Tagger};

/// Words, with inner joiners (`don't`, `go-kit`, `net.http`) and trailing
/// `+`/`#` (`C++`, `F#`), or single punctuation characters.
const TOKEN_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’_.\-][\p{L}\p{N}]+)*[+#]*|[^\s\p{L}\p{N}]";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any",
    "no", "all", "both", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "you", "your", "yours", "he", "him", "his", "she", "her",
    "hers", "it", "its", "we", "us", "our", "they", "them", "their", "what", "which",
    "who", "whom", "whose", "something", "anything", "everything", "nothing", "myself",
    "yourself", "itself",
];

const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "about", "from", "to", "of", "into", "over",
    "under", "between", "through", "during", "without", "within", "across", "after",
    "before", "like", "via", "per", "than",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although", "unless",
    "whether",
];

const ADVERBS: &[&str] = &[
    "how", "when", "where", "why", "not", "very", "also", "too", "just", "only", "really",
    "often", "always", "never", "here", "there", "now", "then", "again", "still", "more",
    "most", "less", "well",
];

/// Auxiliaries and modals. Tagged `Other` so they never become concepts.
const AUXILIARIES: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "do", "does", "did", "have",
    "has", "had", "can", "could", "will", "would", "shall", "should", "may", "might",
    "must", "'s", "isn't", "aren't", "don't", "doesn't", "can't", "won't",
];

const INTERJECTIONS: &[&str] = &[
    "hi", "hello", "hey", "thanks", "thank", "please", "yes", "ok", "okay", "bye",
];

const VERBS: &[&str] = &[
    "use", "uses", "used", "using", "make", "makes", "create", "creates", "work", "works",
    "run", "runs", "write", "writes", "explain", "learn", "handle", "handles", "declare",
    "define", "implement", "implements", "start", "stop", "close", "send", "sends",
    "receive", "read", "get", "set", "return", "returns", "call", "build", "compile",
    "test", "mean", "means", "need", "want", "know", "help", "find", "show", "tell",
    "avoid", "fix", "convert", "iterate", "initialize", "install", "import", "export",
    "share", "lock", "wait", "spawn", "cancel", "synchronize", "allocate", "free",
    "differ", "compare", "choose", "prefer", "understand",
];

const ADJECTIVES: &[&str] = &[
    "good", "best", "better", "bad", "new", "old", "different", "simple", "easy", "hard",
    "fast", "slow", "safe", "main", "common", "concurrent", "generic", "nil", "empty",
    "big", "small", "idiomatic",
];

const ADJECTIVE_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ish"];

/// Default production [`Tagger`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str, previous: Option<&str>, position: usize) -> PartOfSpeech {
        if word.chars().all(|c| !c.is_alphanumeric()) {
            return PartOfSpeech::Punctuation;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return PartOfSpeech::Number;
        }

        let lower = word.to_lowercase();
        let w = lower.as_str();

        if DETERMINERS.contains(&w) {
            return PartOfSpeech::Determiner;
        }
        if PRONOUNS.contains(&w) {
            return PartOfSpeech::Pronoun;
        }
        if PREPOSITIONS.contains(&w) {
            return PartOfSpeech::Preposition;
        }
        if CONJUNCTIONS.contains(&w) {
            return PartOfSpeech::Conjunction;
        }
        if ADVERBS.contains(&w) {
            return PartOfSpeech::Adverb;
        }
        if AUXILIARIES.contains(&w) || INTERJECTIONS.contains(&w) {
            return PartOfSpeech::Other;
        }
        if VERBS.contains(&w) {
            return PartOfSpeech::Verb;
        }
        if previous.is_some_and(|p| p.eq_ignore_ascii_case("to")) && !is_capitalized(word) {
            return PartOfSpeech::Verb;
        }
        if ADJECTIVES.contains(&w)
            || ADJECTIVE_SUFFIXES
                .iter()
                .any(|s| w.len() > s.len() + 2 && w.ends_with(s))
        {
            return PartOfSpeech::Adjective;
        }
        if w.len() > 4 && w.ends_with("ly") {
            return PartOfSpeech::Adverb;
        }
        if is_acronym(word) || (position > 0 && is_capitalized(word)) {
            return PartOfSpeech::ProperNoun;
        }
        PartOfSpeech::Noun
    }
}

impl Tagger for LexiconTagger {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, SageError> {
        let mut tokens = Vec::new();
        let mut previous: Option<&str> = None;
        let mut position = 0usize;

        for m in TOKEN_RE.find_iter(text) {
            let word = m.as_str();
            let tag = Self::classify(word, previous, position);
            tokens.push(TaggedToken::new(word, tag));

            if tag == PartOfSpeech::Punctuation {
                // Sentence-final punctuation resets the capitalisation rule.
                if matches!(word, "." | "!" | "?") {
                    position = 0;
                }
                previous = None;
            } else {
                position += 1;
                previous = Some(word);
            }
        }
        Ok(tokens)
    }
}

fn is_capitalized(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(text: &str) -> Vec<(String, PartOfSpeech)> {
        LexiconTagger::new()
            .tag(text)
            .unwrap()
            .into_iter()
            .map(|t| (t.text, t.tag))
            .collect()
    }

    fn keywords(text: &str) -> Vec<String> {
        tags(text)
            .into_iter()
            .filter(|(_, tag)| tag.is_keyword())
            .map(|(text, _)| text)
            .collect()
    }

    #[test]
    fn token_pattern_compiles() {
        assert!(Regex::new(TOKEN_PATTERN).is_ok());
    }

    #[test]
    fn simple_question_yields_noun_keyword() {
        assert_eq!(keywords("What is a goroutine?"), vec!["goroutine"]);
    }

    #[test]
    fn punctuation_is_split_off() {
        let t = tags("goroutine?");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1], ("?".to_string(), PartOfSpeech::Punctuation));
    }

    #[test]
    fn capitalised_mid_sentence_is_proper_noun() {
        let t = tags("How do I install Go?");
        assert!(t.contains(&("Go".to_string(), PartOfSpeech::ProperNoun)));
        assert!(t.contains(&("install".to_string(), PartOfSpeech::Verb)));
    }

    #[test]
    fn acronyms_are_proper_nouns() {
        let t = tags("JSON encoding");
        assert_eq!(t[0], ("JSON".to_string(), PartOfSpeech::ProperNoun));
        assert_eq!(t[1], ("encoding".to_string(), PartOfSpeech::Noun));
    }

    #[test]
    fn word_after_to_is_a_verb() {
        let t = tags("I want to marshal structs");
        assert!(t.contains(&("marshal".to_string(), PartOfSpeech::Verb)));
        assert!(t.contains(&("structs".to_string(), PartOfSpeech::Noun)));
    }

    #[test]
    fn joined_words_stay_whole() {
        assert_eq!(keywords("the go-kit library"), vec!["go-kit", "library"]);
        assert_eq!(keywords("C++ templates"), vec!["C++", "templates"]);
    }

    #[test]
    fn greetings_have_no_keywords() {
        assert!(keywords("hello there!").is_empty());
    }

    #[test]
    fn numbers_and_adverbs() {
        let t = tags("Go 1.22 runs quickly");
        assert_eq!(t[1], ("1.22".to_string(), PartOfSpeech::Number));
        assert_eq!(t[3], ("quickly".to_string(), PartOfSpeech::Adverb));
    }

    #[test]
    fn empty_text_yields_no_tokens() {
        assert!(tags("").is_empty());
    }
}
