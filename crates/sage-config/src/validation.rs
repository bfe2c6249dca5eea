// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Collects every violation instead of failing on the first one.

use crate::diagnostic::ConfigError;
use crate::model::SageConfig;
use crate::prompts::PromptConfig;

/// Validate a deserialized application config.
pub fn validate_config(config: &SageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.server.host.trim().is_empty() {
        errors.push(validation("server.host must not be empty".to_string()));
    }

    if config.prompts.prompt_path.trim().is_empty() {
        errors.push(validation("prompts.prompt_path must not be empty".to_string()));
    }

    for (name, value) in [
        ("engine.memory_threshold", config.engine.memory_threshold),
        ("engine.knowledge_threshold", config.engine.knowledge_threshold),
    ] {
        if !(0.0..=1.0).contains(&value) {
            errors.push(validation(format!("{name} must be within [0, 1], got {value}")));
        }
    }

    if config.engine.fallback_keyword_limit == 0 {
        errors.push(validation(
            "engine.fallback_keyword_limit must be at least 1".to_string(),
        ));
    }

    if config.memory.capacity == 0 {
        errors.push(validation("memory.capacity must be at least 1".to_string()));
    }

    let increment = config.memory.pattern_increment;
    if increment.is_nan() || increment < 0.0 {
        errors.push(validation(format!(
            "memory.pattern_increment must be non-negative, got {increment}"
        )));
    }

    let cap = config.memory.pattern_weight_cap;
    if cap.is_nan() || cap <= 0.0 {
        errors.push(validation(format!(
            "memory.pattern_weight_cap must be positive, got {cap}"
        )));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate the prompt tables loaded from JSON.
pub fn validate_prompts(prompts: &PromptConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    for (i, seed) in prompts.knowledge_base.iter().enumerate() {
        if seed.question.trim().is_empty() {
            errors.push(validation(format!(
                "knowledge_base[{i}].question must not be empty"
            )));
        }
    }

    // An empty key is a substring of every question.
    for (key, _) in &prompts.common_questions {
        if key.is_empty() {
            errors.push(validation(
                "common_questions must not contain an empty key".to_string(),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validation(message: String) -> ConfigError {
    ConfigError::Validation { message }
}
