// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `sage shell` command implementation.
//!
//! Interactive REPL with a colored prompt and readline history. Plain lines
//! are questions; lines starting with `:` are commands.

use std::sync::Arc;

use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use sage_core::SageError;
use sage_engine::Engine;

/// One parsed line of shell input.
#[derive(Debug, PartialEq, Eq)]
enum ShellCommand<'a> {
    Ask(&'a str),
    Learn { question: &'a str, answer: &'a str },
    Stats,
    Quit,
    Help,
    Invalid(String),
}

fn parse_line(line: &str) -> Option<ShellCommand<'_>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let Some(command) = trimmed.strip_prefix(':') else {
        return Some(ShellCommand::Ask(trimmed));
    };

    let (name, rest) = command
        .split_once(char::is_whitespace)
        .map(|(name, rest)| (name, rest.trim()))
        .unwrap_or((command, ""));
    let parsed = match name {
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "stats" => ShellCommand::Stats,
        "help" => ShellCommand::Help,
        "learn" => match rest.split_once("=>") {
            Some((question, answer)) if !question.trim().is_empty() && !answer.trim().is_empty() => {
                ShellCommand::Learn {
                    question: question.trim(),
                    answer: answer.trim(),
                }
            }
            _ => ShellCommand::Invalid("usage: :learn <question> => <answer>".to_string()),
        },
        other => ShellCommand::Invalid(format!("unknown command :{other}, try :help")),
    };
    Some(parsed)
}

/// Runs the `sage shell` interactive REPL.
pub async fn run_shell(engine: Arc<Engine>) -> Result<(), SageError> {
    let mut rl = DefaultEditor::new()
        .map_err(|e| SageError::Internal(format!("failed to initialize readline: {e}")))?;

    println!("{}", "sage shell".bold().green());
    println!("Type {} for commands, {} to exit.\n", ":help".yellow(), ":quit".yellow());

    let prompt = format!("{}> ", "sage".green());
    loop {
        match rl.readline(&prompt) {
            Ok(line) => {
                let Some(command) = parse_line(&line) else {
                    continue;
                };
                let _ = rl.add_history_entry(line.as_str());

                match command {
                    ShellCommand::Quit => break,
                    ShellCommand::Ask(question) => {
                        let resolution = engine.resolve_detailed(question).await;
                        println!("{}", resolution.answer);
                        println!("{}", format!("({})", resolution.tier).dimmed());
                    }
                    ShellCommand::Learn { question, answer } => {
                        engine.learn(question, answer).await;
                        println!("{}", "learned".green());
                    }
                    ShellCommand::Stats => {
                        let stats = engine.stats().await;
                        println!(
                            "entries: {}  learned: {}  interactions: {}  patterns: {}",
                            stats.entries, stats.learned, stats.interactions, stats.patterns
                        );
                    }
                    ShellCommand::Help => {
                        println!("  :learn <question> => <answer>  teach an exact answer");
                        println!("  :stats                         show engine counters");
                        println!("  :quit                          leave the shell");
                    }
                    ShellCommand::Invalid(message) => {
                        eprintln!("{}: {message}", "error".red());
                    }
                }
            }
            // Ctrl+C / Ctrl+D
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("{}: {e}", "error".red());
                break;
            }
        }
    }

    println!("{}", "goodbye".dimmed());
    Ok(())
}
