// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Vector math and sentence encoding.

use crate::embeddings::EmbeddingTable;

/// Cosine similarity over the common prefix of `a` and `b`.
///
/// Returns 0.0 when either vector is empty or has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let (mut dot, mut norm_a, mut norm_b) = (0.0f32, 0.0f32, 0.0f32);
    for (x, y) in a.iter().zip(b) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// Element-wise `acc += v`. An empty accumulator takes a copy of `v`.
pub fn add_vectors(acc: &mut Vec<f32>, v: &[f32]) {
    if acc.is_empty() {
        acc.extend_from_slice(v);
        return;
    }
    for (a, b) in acc.iter_mut().zip(v) {
        *a += b;
    }
}

/// Divide every component by `count`. A zero count leaves `v` unchanged.
pub fn average_vector(v: &mut [f32], count: usize) {
    if count == 0 {
        return;
    }
    let count = count as f32;
    for x in v.iter_mut() {
        *x /= count;
    }
}

/// Encode a sentence as the sum of its known word vectors divided by the
/// total number of words, known or not.
///
/// Words are whitespace-separated and looked up lowercased. A sentence with
/// no known words yields an empty vector.
pub fn sentence_vector(text: &str, table: &EmbeddingTable) -> Vec<f32> {
    let lowered = text.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    let mut vector = Vec::new();
    for word in &words {
        if let Some(v) = table.get(word) {
            add_vectors(&mut vector, v);
        }
    }
    average_vector(&mut vector, words.len());
    vector
}
