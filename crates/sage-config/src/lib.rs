// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Sage answer engine.
//!
//! Two kinds of input live here:
//!
//! - the application config (`sage.toml`), parsed with strict validation
//!   (`deny_unknown_fields`), XDG file hierarchy lookup, `SAGE_*` environment
//!   overrides, and miette diagnostics with typo suggestions;
//! - the prompt configuration and embedding table (JSON), loaded once at
//!   startup by [`prompts`].
//!
//! # Usage
//!
//! ```no_run
//! use sage_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("prompt file: {}", config.prompts.prompt_path);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod prompts;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::SageConfig;
pub use prompts::{load_embeddings, load_prompts, KnowledgeSeed, PromptConfig};

/// Load configuration from the XDG hierarchy and validate it.
///
/// On a Figment error the failure is converted into miette diagnostics with
/// source spans where the offending key can be located.
pub fn load_and_validate() -> Result<SageConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let toml_sources = collect_toml_sources();
            Err(diagnostic::figment_to_config_errors(err, &toml_sources))
        }
    }
}

/// Load configuration from an explicit file (plus env overrides) and validate it.
pub fn load_and_validate_path(path: &std::path::Path) -> Result<SageConfig, Vec<ConfigError>> {
    match loader::load_config_from_path(path) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = std::fs::read_to_string(path)
                .map(|content| vec![(path.display().to_string(), content)])
                .unwrap_or_default();
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<SageConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => {
            let sources = vec![("<inline>".to_string(), toml_content.to_string())];
            Err(diagnostic::figment_to_config_errors(err, &sources))
        }
    }
}

/// Collect TOML source file contents for error span resolution.
fn collect_toml_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();

    if let Ok(content) = std::fs::read_to_string("sage.toml") {
        let path = std::env::current_dir()
            .map(|d| d.join("sage.toml").display().to_string())
            .unwrap_or_else(|_| "sage.toml".to_string());
        sources.push((path, content));
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("sage/sage.toml");
        if let Ok(content) = std::fs::read_to_string(&path) {
            sources.push((path.display().to_string(), content));
        }
    }

    let system_path = std::path::Path::new("/etc/sage/sage.toml");
    if let Ok(content) = std::fs::read_to_string(system_path) {
        sources.push((system_path.display().to_string(), content));
    }

    sources
}
