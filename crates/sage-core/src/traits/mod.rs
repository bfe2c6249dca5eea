// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits consumed by the engine.

pub mod choice;
pub mod tagger;

pub use choice::{ChoiceSource, ThreadRngChoice};
pub use tagger::Tagger;
