// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered answer resolution.
//!
//! For each question the engine tries, in order:
//! 1. recall of a similar past interaction (keyword overlap)
//! 2. an exact learned answer
//! 3. a greeting (case-insensitive exact match)
//! 4. a common question (first key contained in the question)
//! 5. the closest curated knowledge entry (cosine similarity)
//! 6. a generated fallback
//!
//! The first tier that produces an answer wins. Resolution never fails.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use strum::Display;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use sage_config::model::{EngineConfig, MemoryConfig};
use sage_config::PromptConfig;
use sage_core::{ChoiceSource, TaggedToken, Tagger, ThreadRngChoice};

use crate::embeddings::{fold_case_keys, EmbeddingTable};
use crate::knowledge::KnowledgeBase;
use crate::memory::ContextMemory;
use crate::tagger::LexiconTagger;

/// Used when no `keywords` template is configured.
const DEFAULT_KEYWORD_TEMPLATE: &str =
    "Let's explore %s in detail. What specific aspects interest you?";

/// Used when the tagger fails and no `error` response is configured.
const DEFAULT_ERROR_RESPONSE: &str =
    "I'm having trouble understanding that. Could you rephrase your question?";

const GENERIC_PROMPTS: &[&str] = &[
    "I'm here to help with Go programming. Could you specify what you'd like to learn about?",
    "I can assist you with various Go topics. What interests you most?",
    "Let me help you with Go! What would you like to explore?",
];

/// Which tier produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResolutionTier {
    Memory,
    Learned,
    Greeting,
    CommonQuestion,
    Knowledge,
    KeywordFallback,
    DefaultFallback,
    GenericFallback,
    TaggerError,
}

/// An answer and the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub answer: String,
    pub tier: ResolutionTier,
}

impl Resolution {
    fn new(answer: impl Into<String>, tier: ResolutionTier) -> Self {
        Self {
            answer: answer.into(),
            tier,
        }
    }
}

/// Point-in-time counters for health reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub entries: usize,
    pub learned: usize,
    pub interactions: usize,
    pub patterns: usize,
}

/// Nouns/proper nouns and verbs extracted from a question.
#[derive(Debug, Default)]
struct Analysis {
    keywords: Vec<String>,
    concepts: Vec<String>,
}

impl Analysis {
    fn from_tokens(tokens: Vec<TaggedToken>) -> Self {
        let mut analysis = Self::default();
        for token in tokens {
            if token.tag.is_keyword() {
                analysis.keywords.push(token.text);
            } else if token.tag.is_concept() {
                analysis.concepts.push(token.text);
            }
        }
        analysis
    }
}

/// The answer engine shared by every request.
///
/// Context memory sits behind one mutex that is held from the first memory
/// read until the last memory write of a resolution, so concurrent requests
/// are serialized with respect to memory and pattern weights. The knowledge
/// base has its own reader/writer lock, always taken after the memory lock.
pub struct Engine {
    knowledge: KnowledgeBase,
    embeddings: Arc<EmbeddingTable>,
    greetings: HashMap<String, String>,
    common_questions: Vec<(String, String)>,
    default_responses: HashMap<String, String>,
    tagger: Arc<dyn Tagger>,
    chooser: Arc<dyn ChoiceSource>,
    memory: Mutex<ContextMemory>,
    config: EngineConfig,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("embeddings", &self.embeddings.len())
            .field("greetings", &self.greetings.len())
            .field("common_questions", &self.common_questions.len())
            .field("tagger", &self.tagger.name())
            .field("config", &self.config)
            .finish()
    }
}

impl Engine {
    /// Start building an engine from loaded prompt tables.
    pub fn builder(prompts: PromptConfig) -> EngineBuilder {
        EngineBuilder::new(prompts)
    }

    /// Resolve a question to an answer string. Never fails.
    pub async fn resolve(&self, question: &str) -> String {
        self.resolve_detailed(question).await.answer
    }

    /// Resolve a question, reporting which tier answered.
    pub async fn resolve_detailed(&self, question: &str) -> Resolution {
        let resolution = self.resolve_inner(question).await;
        debug!(tier = %resolution.tier, "question resolved");
        resolution
    }

    /// Store a learned answer for the exact question text.
    pub async fn learn(&self, question: &str, answer: &str) {
        self.knowledge.learn(question, answer).await;
    }

    pub async fn stats(&self) -> EngineStats {
        let (interactions, patterns) = {
            let memory = self.memory.lock().await;
            (memory.len(), memory.pattern_count())
        };
        EngineStats {
            entries: self.knowledge.len().await,
            learned: self.knowledge.learned_len().await,
            interactions,
            patterns,
        }
    }

    /// Current pattern weight for a keyword.
    pub async fn pattern_weight(&self, keyword: &str) -> f32 {
        self.memory.lock().await.pattern_weight(keyword)
    }

    async fn resolve_inner(&self, question: &str) -> Resolution {
        let mut memory = self.memory.lock().await;

        let analysis = self.analyze(question);
        let keywords = analysis.keywords;
        debug!(?keywords, concepts = ?analysis.concepts, "question analyzed");
        let context_score = memory.evaluate_context(&keywords);

        if let Some((interaction, score)) = memory.find_similar_interaction(&keywords) {
            if score > self.config.memory_threshold {
                return Resolution::new(
                    adapt_response(&interaction.answer, &keywords),
                    ResolutionTier::Memory,
                );
            }
        }

        if let Some(answer) = self.knowledge.learned_answer(question).await {
            let adapted = adapt_response(&answer, &keywords);
            memory.learn_from_interaction(question, &adapted, keywords, context_score);
            return Resolution::new(adapted, ResolutionTier::Learned);
        }

        // Nothing below touches memory.
        drop(memory);

        let lowered = question.to_lowercase();

        if let Some(greeting) = self.greetings.get(&lowered) {
            return Resolution::new(greeting.clone(), ResolutionTier::Greeting);
        }

        if let Some((_, answer)) = self
            .common_questions
            .iter()
            .find(|(key, _)| lowered.contains(key.as_str()))
        {
            return Resolution::new(answer.clone(), ResolutionTier::CommonQuestion);
        }

        let best = self
            .knowledge
            .find_best_match(question, &self.embeddings)
            .await;
        if best.score > self.config.knowledge_threshold {
            return Resolution::new(best.answer, ResolutionTier::Knowledge);
        }

        self.fallback(question)
    }

    /// Tag the question, treating tagger failure as "no keywords".
    fn analyze(&self, question: &str) -> Analysis {
        match self.tagger.tag(question) {
            Ok(tokens) => Analysis::from_tokens(tokens),
            Err(e) => {
                warn!(tagger = self.tagger.name(), error = %e, "tagging failed, continuing without keywords");
                Analysis::default()
            }
        }
    }

    fn fallback(&self, question: &str) -> Resolution {
        let tokens = match self.tagger.tag(question) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(tagger = self.tagger.name(), error = %e, "tagging failed, answering with error response");
                let answer = self
                    .default_responses
                    .get("error")
                    .map(String::as_str)
                    .unwrap_or(DEFAULT_ERROR_RESPONSE);
                return Resolution::new(answer, ResolutionTier::TaggerError);
            }
        };

        let keywords = Analysis::from_tokens(tokens).keywords;
        if !keywords.is_empty() {
            let limit = self.config.fallback_keyword_limit.min(keywords.len());
            let terms = keywords[..limit].join(", ");
            let template = self
                .default_responses
                .get("keywords")
                .map(String::as_str)
                .unwrap_or(DEFAULT_KEYWORD_TEMPLATE);
            return Resolution::new(
                fill_template(template, &terms),
                ResolutionTier::KeywordFallback,
            );
        }

        if let Some(answer) = self.default_responses.get("default") {
            return Resolution::new(answer.clone(), ResolutionTier::DefaultFallback);
        }

        let index = self.chooser.choose(GENERIC_PROMPTS.len());
        let answer = GENERIC_PROMPTS
            .get(index)
            .copied()
            .unwrap_or(GENERIC_PROMPTS[0]);
        Resolution::new(answer, ResolutionTier::GenericFallback)
    }
}

/// Prefix a stored answer with the keywords that led to it.
pub fn adapt_response(base: &str, keywords: &[String]) -> String {
    if keywords.is_empty() {
        return base.to_string();
    }
    format!("Based on {}, I understand that {base}", keywords.join(", "))
}

/// Replace the first `%s` (or, failing that, `{}`) in `template` with `terms`.
///
/// A template without a placeholder is returned unchanged.
pub fn fill_template(template: &str, terms: &str) -> String {
    for placeholder in ["%s", "{}"] {
        if template.contains(placeholder) {
            return template.replacen(placeholder, terms, 1);
        }
    }
    template.to_string()
}

/// Builder for [`Engine`].
pub struct EngineBuilder {
    prompts: PromptConfig,
    embeddings: Arc<EmbeddingTable>,
    tagger: Arc<dyn Tagger>,
    chooser: Arc<dyn ChoiceSource>,
    engine_config: EngineConfig,
    memory_config: MemoryConfig,
}

impl EngineBuilder {
    fn new(prompts: PromptConfig) -> Self {
        Self {
            prompts,
            embeddings: Arc::new(EmbeddingTable::empty()),
            tagger: Arc::new(LexiconTagger::new()),
            chooser: Arc::new(ThreadRngChoice),
            engine_config: EngineConfig::default(),
            memory_config: MemoryConfig::default(),
        }
    }

    pub fn embeddings(mut self, embeddings: Arc<EmbeddingTable>) -> Self {
        self.embeddings = embeddings;
        self
    }

    pub fn tagger(mut self, tagger: Arc<dyn Tagger>) -> Self {
        self.tagger = tagger;
        self
    }

    pub fn choice_source(mut self, chooser: Arc<dyn ChoiceSource>) -> Self {
        self.chooser = chooser;
        self
    }

    pub fn engine_config(mut self, config: EngineConfig) -> Self {
        self.engine_config = config;
        self
    }

    pub fn memory_config(mut self, config: MemoryConfig) -> Self {
        self.memory_config = config;
        self
    }

    /// Embed every curated entry and assemble the engine.
    ///
    /// Greeting and common-question keys are lowercased here so that both
    /// lookups are case-insensitive whatever the configured casing. An
    /// already-lowercase greeting key wins over its differently cased twins.
    pub async fn build(self) -> Engine {
        let PromptConfig {
            greetings,
            common_questions,
            knowledge_base,
            default_responses,
        } = self.prompts;

        let knowledge = KnowledgeBase::new();
        for seed in &knowledge_base {
            knowledge
                .add_entry(&seed.question, &seed.answer, &self.embeddings)
                .await;
        }

        let greetings = fold_case_keys(greetings);
        let common_questions: Vec<(String, String)> = common_questions
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();

        info!(
            entries = knowledge_base.len(),
            greetings = greetings.len(),
            common_questions = common_questions.len(),
            embedding_words = self.embeddings.len(),
            dimension = self.embeddings.dimension(),
            tagger = self.tagger.name(),
            "engine ready"
        );

        Engine {
            knowledge,
            embeddings: self.embeddings,
            greetings,
            common_questions,
            default_responses,
            tagger: self.tagger,
            chooser: self.chooser,
            memory: Mutex::new(ContextMemory::new(self.memory_config)),
            config: self.engine_config,
        }
    }
}
