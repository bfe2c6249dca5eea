// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Startup wiring and the `sage serve` / `sage ask` commands.
//!
//! Loads the prompt file (fatal on failure) and the embedding table
//! (degrades to empty), builds the one shared engine, and hands it to the
//! HTTP gateway.

use std::path::Path;
use std::sync::Arc;

use sage_config::SageConfig;
use sage_core::SageError;
use sage_engine::{EmbeddingTable, Engine};
use sage_gateway::{start_server, GatewayState};
use tracing::info;

/// Build the engine from the configured prompt and embedding files.
pub async fn build_engine(config: &SageConfig) -> Result<Arc<Engine>, SageError> {
    let prompts = sage_config::load_prompts(Path::new(&config.prompts.prompt_path))?;
    if let Err(errors) = sage_config::validation::validate_prompts(&prompts) {
        let count = errors.len();
        sage_config::render_errors(&errors);
        return Err(SageError::Config(format!(
            "{count} error(s) in prompt configuration {}",
            config.prompts.prompt_path
        )));
    }

    let words = sage_config::load_embeddings(Path::new(&config.prompts.embeddings_path));
    let embeddings = Arc::new(EmbeddingTable::from_words(words));

    let engine = Engine::builder(prompts)
        .embeddings(embeddings)
        .engine_config(config.engine.clone())
        .memory_config(config.memory.clone())
        .build()
        .await;
    Ok(Arc::new(engine))
}

/// Runs the `sage serve` command.
pub async fn run_serve(config: &SageConfig, engine: Arc<Engine>) -> Result<(), SageError> {
    info!(
        name = %config.agent.name,
        version = env!("CARGO_PKG_VERSION"),
        "starting sage"
    );
    start_server(&config.server, GatewayState::new(engine)).await
}

/// Runs the `sage ask` command: one answer on stdout.
pub async fn run_ask(engine: &Engine, question: &str) {
    let answer = engine.resolve(question).await;
    println!("{answer}");
}

/// Logs go to stderr so `sage ask` output stays clean on stdout.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("sage={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
