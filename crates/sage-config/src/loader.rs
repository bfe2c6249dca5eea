// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./sage.toml` > `~/.config/sage/sage.toml` > `/etc/sage/sage.toml`
//! with environment variable overrides via `SAGE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::SageConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/sage/sage.toml`
/// 3. `~/.config/sage/sage.toml`
/// 4. `./sage.toml`
/// 5. `SAGE_*` environment variables
pub fn load_config() -> Result<SageConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<SageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<SageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(SageConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(SageConfig::default()))
        .merge(Toml::file("/etc/sage/sage.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("sage/sage.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("sage.toml"))
        .merge(env_provider())
}

/// Environment provider with an explicit section map.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `SAGE_ENGINE_KNOWLEDGE_THRESHOLD` must become
/// `engine.knowledge_threshold`, not `engine.knowledge.threshold`.
fn env_provider() -> Env {
    Env::prefixed("SAGE_").map(|key| map_env_key(key.as_str()).into())
}

/// Top-level sections that environment keys may address.
const SECTIONS: &[&str] = &["agent", "server", "prompts", "engine", "memory"];

/// Map a lowercased, prefix-stripped env key to its dotted config path.
///
/// Only the leading section name is split off, so `engine_memory_threshold`
/// maps to `engine.memory_threshold`.
fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
