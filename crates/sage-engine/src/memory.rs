// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short-term interaction memory and keyword pattern weights.
//!
//! The interaction log is a ring buffer: once `capacity` is reached the
//! oldest interaction is evicted. Pattern weights only grow, and saturate at
//! `pattern_weight_cap`.
//!
//! `ContextMemory` is not synchronized itself; the engine owns it behind a
//! single mutex held for the duration of each resolution.

use std::collections::{HashMap, VecDeque};

use sage_config::model::MemoryConfig;

/// One recorded question/answer exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub question: String,
    pub answer: String,
    /// Keywords in extraction order, duplicates preserved.
    pub keywords: Vec<String>,
    pub score: f32,
}

/// Bounded interaction log plus accumulated keyword weights.
#[derive(Debug, Clone)]
pub struct ContextMemory {
    interactions: VecDeque<Interaction>,
    patterns: HashMap<String, f32>,
    config: MemoryConfig,
}

impl ContextMemory {
    pub fn new(config: MemoryConfig) -> Self {
        Self {
            interactions: VecDeque::with_capacity(config.capacity.min(1024)),
            patterns: HashMap::new(),
            config,
        }
    }

    /// Find the past interaction whose keywords best overlap `keywords`.
    ///
    /// Every (query keyword, past keyword) pair is compared case-insensitively
    /// and each equal pair counts once, so duplicates on either side inflate
    /// the count. The count is divided by the number of query keywords.
    /// Scanning runs oldest to newest and only a strictly higher score
    /// replaces the best, so the older interaction wins a tie.
    ///
    /// Returns `None` when `keywords` is empty or nothing overlaps.
    pub fn find_similar_interaction(&self, keywords: &[String]) -> Option<(&Interaction, f32)> {
        if keywords.is_empty() {
            return None;
        }
        let query: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        let mut best: Option<(&Interaction, f32)> = None;
        let mut best_score = 0.0f32;
        for interaction in &self.interactions {
            let past: Vec<String> = interaction.keywords.iter().map(|k| k.to_lowercase()).collect();
            let matches = query
                .iter()
                .map(|q| past.iter().filter(|p| *p == q).count())
                .sum::<usize>();
            let score = matches as f32 / query.len() as f32;
            if score > best_score {
                best_score = score;
                best = Some((interaction, score));
            }
        }
        best
    }

    /// Mean pattern weight of `keywords` (absent keywords weigh 0).
    ///
    /// An empty keyword list evaluates to 0.
    pub fn evaluate_context(&self, keywords: &[String]) -> f32 {
        if keywords.is_empty() {
            return 0.0;
        }
        let total: f32 = keywords.iter().map(|k| self.pattern_weight(k)).sum();
        total / keywords.len() as f32
    }

    /// Record an interaction and reinforce each of its keywords by
    /// `pattern_increment * score`, saturating at `pattern_weight_cap`.
    pub fn learn_from_interaction(
        &mut self,
        question: &str,
        answer: &str,
        keywords: Vec<String>,
        score: f32,
    ) {
        let delta = self.config.pattern_increment * score;
        let cap = self.config.pattern_weight_cap;
        for keyword in &keywords {
            let weight = self.patterns.entry(keyword.clone()).or_insert(0.0);
            *weight = (*weight + delta).min(cap);
        }

        if self.interactions.len() >= self.config.capacity {
            self.interactions.pop_front();
        }
        self.interactions.push_back(Interaction {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords,
            score,
        });
    }

    /// Current weight for `keyword` (exact key, 0 if never seen).
    pub fn pattern_weight(&self, keyword: &str) -> f32 {
        self.patterns.get(keyword).copied().unwrap_or(0.0)
    }

    /// Interactions from oldest to newest.
    pub fn interactions(&self) -> impl Iterator<Item = &Interaction> {
        self.interactions.iter()
    }

    pub fn len(&self) -> usize {
        self.interactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }

    /// Number of distinct keywords with a pattern weight.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}
