// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Curated knowledge entries and runtime-learned answers.
//!
//! Curated entries are matched by cosine similarity of sentence vectors.
//! Learned entries are matched by exact, case-sensitive question text.
//! Both live behind one reader/writer lock so a similarity scan never
//! observes a half-appended entry list.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::embeddings::EmbeddingTable;
use crate::vector::{cosine_similarity, sentence_vector};

/// A curated question/answer pair with its precomputed sentence vector.
#[derive(Debug, Clone)]
pub struct KnowledgeEntry {
    pub question: String,
    pub answer: String,
    /// Computed once at insertion and never recomputed.
    pub vector: Vec<f32>,
}

/// Best curated match for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeMatch {
    /// Empty when nothing scored above zero.
    pub answer: String,
    pub score: f32,
}

impl KnowledgeMatch {
    fn none() -> Self {
        Self {
            answer: String::new(),
            score: 0.0,
        }
    }
}

#[derive(Debug, Default)]
struct KnowledgeState {
    entries: Vec<KnowledgeEntry>,
    learned: HashMap<String, String>,
}

/// Thread-safe store of curated and learned entries.
#[derive(Debug, Default)]
pub struct KnowledgeBase {
    state: RwLock<KnowledgeState>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode `question` and append a curated entry.
    ///
    /// Entries are not deduplicated: re-adding a question creates a second
    /// entry that competes in future searches.
    pub async fn add_entry(&self, question: &str, answer: &str, table: &EmbeddingTable) {
        let vector = sentence_vector(question, table);
        let mut state = self.state.write().await;
        state.entries.push(KnowledgeEntry {
            question: question.to_string(),
            answer: answer.to_string(),
            vector,
        });
        debug!(entries = state.entries.len(), "knowledge entry added");
    }

    /// Scan every curated entry and return the highest-similarity answer.
    ///
    /// Only scores strictly greater than the running best replace it, so the
    /// earliest entry wins a tie. Returns an empty answer with score 0 when
    /// the base is empty or nothing scores above zero.
    pub async fn find_best_match(&self, question: &str, table: &EmbeddingTable) -> KnowledgeMatch {
        let query = sentence_vector(question, table);
        let state = self.state.read().await;

        let mut best = KnowledgeMatch::none();
        let mut best_entry: Option<&KnowledgeEntry> = None;
        for entry in &state.entries {
            let score = cosine_similarity(&query, &entry.vector);
            if score > best.score {
                best.score = score;
                best_entry = Some(entry);
            }
        }
        if let Some(entry) = best_entry {
            best.answer = entry.answer.clone();
        }
        best
    }

    /// Insert or overwrite a learned answer keyed by the literal question text.
    pub async fn learn(&self, question: &str, answer: &str) {
        let mut state = self.state.write().await;
        let replaced = state
            .learned
            .insert(question.to_string(), answer.to_string())
            .is_some();
        info!(replaced, learned = state.learned.len(), "learned new answer");
    }

    /// Exact, byte-for-byte lookup of a learned answer.
    pub async fn learned_answer(&self, question: &str) -> Option<String> {
        self.state.read().await.learned.get(question).cloned()
    }

    /// Number of curated entries.
    pub async fn len(&self) -> usize {
        self.state.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.entries.is_empty()
    }

    /// Number of learned entries.
    pub async fn learned_len(&self) -> usize {
        self.state.read().await.learned.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> EmbeddingTable {
        EmbeddingTable::from_words([
            ("what".to_string(), vec![0.1, 0.1, 0.1]),
            ("is".to_string(), vec![0.1, 0.1, 0.1]),
            ("a".to_string(), vec![0.1, 0.1, 0.1]),
            ("goroutine?".to_string(), vec![1.0, 0.0, 0.0]),
            ("channel?".to_string(), vec![0.0, 1.0, 0.0]),
            ("interface?".to_string(), vec![0.0, 0.0, 1.0]),
        ])
    }

    #[tokio::test]
    async fn empty_base_scores_zero() {
        let kb = KnowledgeBase::new();
        let m = kb.find_best_match("What is a goroutine?", &table()).await;
        assert_eq!(m, KnowledgeMatch::none());
    }

    #[tokio::test]
    async fn identical_question_scores_one() {
        let kb = KnowledgeBase::new();
        let table = table();
        kb.add_entry("What is a goroutine?", "A lightweight thread.", &table).await;
        kb.add_entry("What is a channel?", "A typed conduit.", &table).await;

        let m = kb.find_best_match("What is a goroutine?", &table).await;
        assert_eq!(m.answer, "A lightweight thread.");
        assert!((m.score - 1.0).abs() < 1e-5, "score was {}", m.score);
    }

    #[tokio::test]
    async fn tie_keeps_first_entry() {
        let kb = KnowledgeBase::new();
        let table = table();
        kb.add_entry("What is a channel?", "first", &table).await;
        kb.add_entry("What is a channel?", "second", &table).await;
        assert_eq!(kb.len().await, 2);

        let m = kb.find_best_match("what is a channel?", &table).await;
        assert_eq!(m.answer, "first");
    }

    #[tokio::test]
    async fn unknown_words_never_match() {
        let kb = KnowledgeBase::new();
        let table = table();
        kb.add_entry("completely unrelated words", "nope", &table).await;
        let m = kb.find_best_match("What is a goroutine?", &table).await;
        assert_eq!(m.score, 0.0);
        assert!(m.answer.is_empty());
    }

    #[tokio::test]
    async fn learned_lookup_is_exact() {
        let kb = KnowledgeBase::new();
        kb.learn("What is Go?", "A language.").await;
        assert_eq!(kb.learned_answer("What is Go?").await.as_deref(), Some("A language."));
        assert_eq!(kb.learned_answer("what is go?").await, None);
        assert_eq!(kb.learned_answer("What is Go? ").await, None);
    }

    #[tokio::test]
    async fn learning_overwrites() {
        let kb = KnowledgeBase::new();
        kb.learn("q", "old").await;
        kb.learn("q", "new").await;
        assert_eq!(kb.learned_len().await, 1);
        assert_eq!(kb.learned_answer("q").await.as_deref(), Some("new"));
        // Learned entries never enter the curated list.
        assert!(kb.is_empty().await);
    }
}
