// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sage - a self-hosted Go programming question-answering service.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod serve;
mod shell;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sage - a self-hosted Go programming question-answering service.
#[derive(Parser, Debug)]
#[command(name = "sage", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the HTTP gateway (default).
    Serve,
    /// Answer a single question and exit.
    Ask {
        /// The question, as one or more words.
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Launch an interactive REPL session.
    Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => sage_config::load_and_validate_path(path),
        None => sage_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            sage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    serve::init_tracing(&config.agent.log_level);

    let engine = match serve::build_engine(&config).await {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Serve) | None => serve::run_serve(&config, engine).await,
        Some(Commands::Ask { question }) => {
            serve::run_ask(&engine, &question.join(" ")).await;
            Ok(())
        }
        Some(Commands::Shell) => shell::run_shell(engine).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
