// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Immutable word embedding table.

use std::collections::HashMap;

use tracing::warn;

/// Lowercase word → vector table sharing a single dimension.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingTable {
    words: HashMap<String, Vec<f32>>,
    dimension: usize,
}

impl EmbeddingTable {
    /// An empty table. Every similarity computed against it is zero.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from raw `(word, vector)` pairs.
    ///
    /// Words are lowercased with [`fold_case_keys`]. The table dimension is
    /// the most common vector length (the shorter length on a tie); vectors
    /// of any other length, and empty vectors, are dropped.
    pub fn from_words(words: impl IntoIterator<Item = (String, Vec<f32>)>) -> Self {
        let mut raw: Vec<(String, Vec<f32>)> = words
            .into_iter()
            .filter(|(_, v)| !v.is_empty())
            .collect();

        let mut length_counts: HashMap<usize, usize> = HashMap::new();
        for (_, v) in &raw {
            *length_counts.entry(v.len()).or_insert(0) += 1;
        }
        let dimension = length_counts
            .into_iter()
            .max_by(|(len_a, count_a), (len_b, count_b)| {
                count_a.cmp(count_b).then(len_b.cmp(len_a))
            })
            .map(|(len, _)| len)
            .unwrap_or(0);

        let before = raw.len();
        raw.retain(|(_, v)| v.len() == dimension);
        let dropped = before - raw.len();
        let table = fold_case_keys(raw);

        if dropped > 0 {
            warn!(dropped, dimension, "dropped embeddings with mismatched dimension");
        }

        Self {
            words: table,
            dimension,
        }
    }

    /// Look up a word. Callers pass it already lowercased.
    pub fn get(&self, word: &str) -> Option<&[f32]> {
        self.words.get(word).map(Vec::as_slice)
    }

    /// Vector dimension shared by every entry (0 for an empty table).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Lowercase every key of `entries`.
///
/// A key that is already lowercase always wins a collision. Among keys that
/// only fold to a collision, the lexicographically first spelling wins.
pub(crate) fn fold_case_keys<V>(entries: impl IntoIterator<Item = (String, V)>) -> HashMap<String, V> {
    let mut sorted: Vec<(String, V)> = entries.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut folded = HashMap::with_capacity(sorted.len());
    for (key, value) in sorted {
        let lower = key.to_lowercase();
        if lower == key {
            folded.insert(lower, value);
        } else {
            folded.entry(lower).or_insert(value);
        }
    }
    folded
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn words_are_lowercased() {
        let table = EmbeddingTable::from_words([("Go".to_string(), vec![1.0, 2.0])]);
        assert_eq!(table.get("go"), Some(&[1.0, 2.0][..]));
        assert_eq!(table.get("Go"), None);
        assert_eq!(table.dimension(), 2);
    }

    #[test]
    fn lowercase_spelling_wins_collision() {
        let table = EmbeddingTable::from_words([
            ("Go".to_string(), vec![1.0, 0.0]),
            ("go".to_string(), vec![0.0, 1.0]),
        ]);
        assert_eq!(table.get("go"), Some(&[0.0, 1.0][..]));
        assert_eq!(table.len(), 1);

        let table = EmbeddingTable::from_words([
            ("go".to_string(), vec![0.0, 1.0]),
            ("GO".to_string(), vec![1.0, 1.0]),
            ("Go".to_string(), vec![1.0, 0.0]),
        ]);
        assert_eq!(table.get("go"), Some(&[0.0, 1.0][..]));
    }

    #[test]
    fn folded_collision_without_lowercase_key_is_stable() {
        for _ in 0..16 {
            let folded = fold_case_keys([("Hi".to_string(), 1), ("HI".to_string(), 2)]);
            assert_eq!(folded.get("hi"), Some(&2));
        }
    }

    #[test]
    #[traced_test]
    fn mismatched_dimensions_are_dropped() {
        let table = EmbeddingTable::from_words([
            ("a".to_string(), vec![1.0, 0.0]),
            ("b".to_string(), vec![0.0, 1.0]),
            ("c".to_string(), vec![1.0, 1.0, 1.0]),
        ]);
        assert_eq!(table.dimension(), 2);
        assert_eq!(table.len(), 2);
        assert!(table.get("c").is_none());
        assert!(logs_contain("mismatched dimension"));
    }

    #[test]
    fn tie_prefers_shorter_dimension() {
        let table = EmbeddingTable::from_words([
            ("a".to_string(), vec![1.0]),
            ("b".to_string(), vec![1.0, 1.0]),
        ]);
        assert_eq!(table.dimension(), 1);
    }

    #[test]
    fn empty_table() {
        let table = EmbeddingTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.dimension(), 0);
    }
}
