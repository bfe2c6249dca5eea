// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Sage configuration system.

use std::io::Write;

use sage_config::diagnostic::ConfigError;
use sage_config::validation::validate_prompts;
use sage_config::{load_and_validate_str, load_config_from_str, load_embeddings, load_prompts};
use sage_core::SageError;

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_sage_config() {
    let toml = r#"
[agent]
name = "gopher"
log_level = "debug"

[server]
host = "127.0.0.1"
port = 3000

[prompts]
prompt_path = "/srv/sage/prompt.json"
embeddings_path = "/srv/sage/embeddings.json"

[engine]
memory_threshold = 0.9
knowledge_threshold = 0.6
fallback_keyword_limit = 2

[memory]
capacity = 16
pattern_increment = 0.2
pattern_weight_cap = 4.0
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.agent.name, "gopher");
    assert_eq!(config.agent.log_level, "debug");
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.prompts.prompt_path, "/srv/sage/prompt.json");
    assert_eq!(config.engine.fallback_keyword_limit, 2);
    assert_eq!(config.memory.capacity, 16);
    assert!((config.memory.pattern_weight_cap - 4.0).abs() < f32::EPSILON);
}

/// Unknown key produces an UnknownKey diagnostic with a suggestion.
#[test]
fn unknown_key_suggests_correction() {
    let toml = r#"
[server]
prot = 3000
"#;

    let errors = load_and_validate_str(toml).expect_err("should reject unknown field");
    assert!(
        errors.iter().any(|e| matches!(
            e,
            ConfigError::UnknownKey { key, suggestion: Some(s), .. } if key == "prot" && s == "port"
        )),
        "expected UnknownKey(prot -> port), got: {errors:?}"
    );
}

/// Wrong value type is reported as InvalidType.
#[test]
fn wrong_type_reported() {
    let errors = load_and_validate_str("[server]\nport = \"eighty\"\n").unwrap_err();
    assert!(
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::InvalidType { key, .. } if key.contains("port"))),
        "got: {errors:?}"
    );
}

/// Semantic validation runs after successful parsing.
#[test]
fn semantic_validation_after_parse() {
    let errors = load_and_validate_str("[memory]\ncapacity = 0\n").unwrap_err();
    assert!(errors
        .iter()
        .any(|e| matches!(e, ConfigError::Validation { message } if message.contains("capacity"))));
}

#[test]
fn prompt_file_round_trip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
  "greetings": {{"hi": "Hello!"}},
  "common_questions": {{"channel": "Channels synchronize goroutines.", "map": "Maps are hash tables."}},
  "knowledge_base": [{{"question": "What is a goroutine?", "answer": "A lightweight thread."}}],
  "default_responses": {{"keywords": "Tell me more about %s.", "error": "Oops."}}
}}"#
    )
    .unwrap();

    let prompts = load_prompts(file.path()).expect("prompt file should load");
    assert_eq!(prompts.greetings.get("hi").map(String::as_str), Some("Hello!"));
    assert_eq!(prompts.common_questions[0].0, "channel");
    assert_eq!(prompts.common_questions[1].0, "map");
    assert_eq!(prompts.knowledge_base.len(), 1);
    assert_eq!(
        prompts.default_responses.get("error").map(String::as_str),
        Some("Oops.")
    );
    assert!(validate_prompts(&prompts).is_ok());
}

#[test]
fn missing_prompt_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompt.json");
    let err = load_prompts(&path).unwrap_err();
    match err {
        SageError::Prompt { path: p, .. } => assert!(p.ends_with("prompt.json")),
        other => panic!("expected Prompt error, got {other:?}"),
    }
}

#[test]
fn malformed_prompt_file_is_fatal() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{\"greetings\": [").unwrap();
    assert!(matches!(
        load_prompts(file.path()),
        Err(SageError::Prompt { .. })
    ));
}

#[test]
fn embeddings_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"go": [1.0, 0.0], "channel": [0.0, 1.0]}}"#).unwrap();
    let words = load_embeddings(file.path());
    assert_eq!(words.len(), 2);
    assert_eq!(words["channel"], vec![0.0, 1.0]);
}
