// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Sage answer engine.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Sage configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SageConfig {
    /// Identity and logging settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP gateway bind settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Locations of the prompt configuration and embedding table.
    #[serde(default)]
    pub prompts: PromptsConfig,

    /// Answer resolution thresholds.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Context memory and pattern learning settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

/// Identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in logs and the shell prompt.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "sage".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Locations of the JSON inputs loaded once at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PromptsConfig {
    /// Prompt configuration (greetings, common questions, knowledge base,
    /// default responses). Required: a missing file halts startup.
    #[serde(default = "default_prompt_path")]
    pub prompt_path: String,

    /// Word embedding table. Optional: a missing file yields an empty table.
    #[serde(default = "default_embeddings_path")]
    pub embeddings_path: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            prompt_path: default_prompt_path(),
            embeddings_path: default_embeddings_path(),
        }
    }
}

fn default_prompt_path() -> String {
    "prompt.json".to_string()
}

fn default_embeddings_path() -> String {
    "embeddings.json".to_string()
}

/// Answer resolution thresholds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Interaction recall wins when its overlap score is strictly above this.
    #[serde(default = "default_memory_threshold")]
    pub memory_threshold: f32,

    /// A curated entry wins when its cosine similarity is strictly above this.
    #[serde(default = "default_knowledge_threshold")]
    pub knowledge_threshold: f32,

    /// Maximum number of keywords named in the keyword fallback answer.
    #[serde(default = "default_fallback_keyword_limit")]
    pub fallback_keyword_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            memory_threshold: default_memory_threshold(),
            knowledge_threshold: default_knowledge_threshold(),
            fallback_keyword_limit: default_fallback_keyword_limit(),
        }
    }
}

fn default_memory_threshold() -> f32 {
    0.8
}

fn default_knowledge_threshold() -> f32 {
    0.7
}

fn default_fallback_keyword_limit() -> usize {
    3
}

/// Context memory configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Maximum number of interactions retained; the oldest is evicted first.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Pattern weight gained per keyword is `pattern_increment * score`.
    #[serde(default = "default_pattern_increment")]
    pub pattern_increment: f32,

    /// Upper bound for any single pattern weight.
    #[serde(default = "default_pattern_weight_cap")]
    pub pattern_weight_cap: f32,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            pattern_increment: default_pattern_increment(),
            pattern_weight_cap: default_pattern_weight_cap(),
        }
    }
}

fn default_capacity() -> usize {
    1024
}

fn default_pattern_increment() -> f32 {
    0.1
}

fn default_pattern_weight_cap() -> f32 {
    10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = SageConfig::default();
        assert_eq!(config.agent.name, "sage");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.prompts.prompt_path, "prompt.json");
        assert!((config.engine.memory_threshold - 0.8).abs() < f32::EPSILON);
        assert!((config.engine.knowledge_threshold - 0.7).abs() < f32::EPSILON);
        assert_eq!(config.engine.fallback_keyword_limit, 3);
        assert_eq!(config.memory.capacity, 1024);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: SageConfig = toml::from_str("[engine]\nknowledge_threshold = 0.9\n").unwrap();
        assert!((config.engine.knowledge_threshold - 0.9).abs() < f32::EPSILON);
        assert!((config.engine.memory_threshold - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_memory_field_rejected() {
        let result = toml::from_str::<SageConfig>("[memory]\ncapasity = 4\n");
        assert!(result.is_err());
    }
}
