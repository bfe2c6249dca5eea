// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt configuration and embedding table loaders.
//!
//! Both inputs are JSON and are read once at startup. The prompt file is
//! mandatory; the embedding table is optional and degrades to empty.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{info, warn};

use sage_core::SageError;

/// A curated question/answer pair seeding the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KnowledgeSeed {
    pub question: String,
    pub answer: String,
}

/// Static answer tables loaded from the prompt file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptConfig {
    /// Exact-match greetings, keyed by the (case-insensitive) greeting text.
    #[serde(default)]
    pub greetings: HashMap<String, String>,

    /// Substring-match canned answers, in the order they appear in the file.
    /// The first key contained in a question wins.
    #[serde(default, deserialize_with = "ordered_pairs")]
    pub common_questions: Vec<(String, String)>,

    /// Curated entries embedded at startup for semantic search.
    #[serde(default)]
    pub knowledge_base: Vec<KnowledgeSeed>,

    /// Named fallback answers: `error`, `keywords`, `default`.
    #[serde(default)]
    pub default_responses: HashMap<String, String>,
}

/// Deserialize a JSON object into `(key, value)` pairs in document order.
fn ordered_pairs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PairsVisitor;

    impl<'de> Visitor<'de> for PairsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object mapping question keys to answers")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((key, value)) = access.next_entry::<String, String>()? {
                pairs.push((key, value));
            }
            Ok(pairs)
        }
    }

    deserializer.deserialize_map(PairsVisitor)
}

/// Load the prompt configuration. Any failure is fatal for startup.
pub fn load_prompts(path: &Path) -> Result<PromptConfig, SageError> {
    let prompt_err = |source: Box<dyn std::error::Error + Send + Sync>| SageError::Prompt {
        path: path.display().to_string(),
        source,
    };

    let data = std::fs::read_to_string(path).map_err(|e| prompt_err(Box::new(e)))?;
    let config = parse_prompts(&data).map_err(|e| prompt_err(Box::new(e)))?;

    info!(
        path = %path.display(),
        greetings = config.greetings.len(),
        common_questions = config.common_questions.len(),
        knowledge_entries = config.knowledge_base.len(),
        "prompt configuration loaded"
    );
    Ok(config)
}

/// Parse prompt configuration from a JSON string.
pub fn parse_prompts(json: &str) -> Result<PromptConfig, serde_json::Error> {
    serde_json::from_str(json)
}

/// Load the word embedding table.
///
/// A missing or malformed file yields an empty table, which degrades every
/// similarity score to zero without failing startup.
pub fn load_embeddings(path: &Path) -> HashMap<String, Vec<f32>> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "embedding table unavailable, semantic search disabled");
            return HashMap::new();
        }
    };

    match serde_json::from_str::<HashMap<String, Vec<f32>>>(&data) {
        Ok(words) => {
            info!(path = %path.display(), words = words.len(), "embedding table loaded");
            words
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "embedding table malformed, semantic search disabled");
            HashMap::new()
        }
    }
}
