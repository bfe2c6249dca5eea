// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for engine-level integration testing.
//!
//! `TestHarness` assembles an [`Engine`] from inline prompt tables and an
//! inline embedding table. The choice source defaults to `FixedChoice(0)`
//! so generic fallbacks are deterministic.

use std::io::Write;
use std::sync::Arc;

use sage_config::model::{EngineConfig, MemoryConfig};
use sage_config::{KnowledgeSeed, PromptConfig};
use sage_core::{ChoiceSource, SageError, Tagger};
use sage_engine::{EmbeddingTable, Engine, Resolution};

use crate::mock_choice::FixedChoice;

/// Builder for creating test engines with configurable tables.
pub struct TestHarnessBuilder {
    prompts: PromptConfig,
    words: Vec<(String, Vec<f32>)>,
    tagger: Option<Arc<dyn Tagger>>,
    chooser: Arc<dyn ChoiceSource>,
    engine_config: EngineConfig,
    memory_config: MemoryConfig,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            prompts: PromptConfig::default(),
            words: Vec::new(),
            tagger: None,
            chooser: Arc::new(FixedChoice(0)),
            engine_config: EngineConfig::default(),
            memory_config: MemoryConfig::default(),
        }
    }

    pub fn with_greeting(mut self, greeting: &str, answer: &str) -> Self {
        self.prompts
            .greetings
            .insert(greeting.to_string(), answer.to_string());
        self
    }

    /// Common questions keep the order they are added in.
    pub fn with_common_question(mut self, key: &str, answer: &str) -> Self {
        self.prompts
            .common_questions
            .push((key.to_string(), answer.to_string()));
        self
    }

    pub fn with_knowledge(mut self, question: &str, answer: &str) -> Self {
        self.prompts.knowledge_base.push(KnowledgeSeed {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        self
    }

    /// Set a named fallback (`error`, `keywords`, `default`).
    pub fn with_default_response(mut self, name: &str, answer: &str) -> Self {
        self.prompts
            .default_responses
            .insert(name.to_string(), answer.to_string());
        self
    }

    pub fn with_embedding(mut self, word: &str, vector: Vec<f32>) -> Self {
        self.words.push((word.to_string(), vector));
        self
    }

    /// Replace the whole prompt table.
    pub fn with_prompts(mut self, prompts: PromptConfig) -> Self {
        self.prompts = prompts;
        self
    }

    /// Use a specific tagger instead of the engine's default lexicon tagger.
    pub fn with_tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = Some(tagger);
        self
    }

    pub fn with_choice(mut self, chooser: Arc<dyn ChoiceSource>) -> Self {
        self.chooser = chooser;
        self
    }

    pub fn with_engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn with_memory_config(mut self, config: MemoryConfig) -> Self {
        self.memory_config = config;
        self
    }

    /// Build the engine.
    pub async fn build(self) -> TestHarness {
        let embeddings = Arc::new(EmbeddingTable::from_words(self.words));
        let mut builder = Engine::builder(self.prompts)
            .embeddings(embeddings)
            .choice_source(self.chooser)
            .engine_config(self.engine_config)
            .memory_config(self.memory_config);
        if let Some(tagger) = self.tagger {
            builder = builder.tagger(tagger);
        }
        TestHarness {
            engine: Arc::new(builder.build().await),
        }
    }
}

/// A built engine plus convenience accessors.
pub struct TestHarness {
    engine: Arc<Engine>,
}

impl TestHarness {
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    pub fn engine(&self) -> Arc<Engine> {
        Arc::clone(&self.engine)
    }

    pub async fn ask(&self, question: &str) -> Resolution {
        self.engine.resolve_detailed(question).await
    }
}

/// Write `json` to a temporary file, for loaders that take a path.
pub fn json_file(json: &serde_json::Value) -> Result<tempfile::NamedTempFile, SageError> {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .map_err(|e| SageError::Internal(format!("failed to create temp file: {e}")))?;
    file.write_all(json.to_string().as_bytes())
        .map_err(|e| SageError::Internal(format!("failed to write temp file: {e}")))?;
    tracing::debug!(path = %file.path().display(), "test fixture written");
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sage_engine::ResolutionTier;

    #[tokio::test]
    async fn empty_harness_uses_first_generic_prompt() {
        let harness = TestHarness::builder().build().await;
        let resolution = harness.ask("???").await;
        assert_eq!(resolution.tier, ResolutionTier::GenericFallback);
        assert!(resolution.answer.contains("Go programming"));
    }

    #[test]
    fn json_file_round_trips_through_disk() {
        let file = json_file(&serde_json::json!({"greetings": {"hi": "Hello!"}})).unwrap();
        let data = std::fs::read_to_string(file.path()).unwrap();
        assert!(data.contains("Hello!"));
    }
}
