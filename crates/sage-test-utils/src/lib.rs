// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Sage integration tests.
//!
//! Provides mock seams and a harness for fast, deterministic tests that need
//! neither a trained tagger nor a real embedding file.
//!
//! # Components
//!
//! - [`MockTagger`] - Tagger driven by fixed word lists, with an optional failure mode
//! - [`FixedChoice`] - Choice source that always picks the same index
//! - [`TestHarness`] - Builder assembling an [`Engine`](sage_engine::Engine) from inline tables

pub mod harness;
pub mod mock_choice;
pub mod mock_tagger;

pub use harness::{json_file, TestHarness, TestHarnessBuilder};
pub use mock_choice::FixedChoice;
pub use mock_tagger::MockTagger;
