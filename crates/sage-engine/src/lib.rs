// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Matching and answer-resolution engine for Sage.
//!
//! ## Architecture
//!
//! - **vector**: cosine similarity and averaged sentence vectors
//! - **EmbeddingTable**: immutable word → vector table of one fixed dimension
//! - **KnowledgeBase**: curated entries (semantic search) plus learned entries (exact match)
//! - **ContextMemory**: bounded interaction log and saturating keyword pattern weights
//! - **LexiconTagger**: default rule-based part-of-speech tagger
//! - **Engine**: the layered resolver tying everything together

pub mod embeddings;
pub mod engine;
pub mod knowledge;
pub mod memory;
pub mod tagger;
pub mod vector;

pub use embeddings::EmbeddingTable;
pub use engine::{Engine, EngineBuilder, EngineStats, Resolution, ResolutionTier};
pub use knowledge::{KnowledgeBase, KnowledgeEntry, KnowledgeMatch};
pub use memory::{ContextMemory, Interaction};
pub use tagger::LexiconTagger;
