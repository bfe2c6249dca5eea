// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Part-of-speech tagger capability.

use crate::error::SageError;
use crate::types::TaggedToken;

/// Splits text into tokens and assigns each a part of speech.
///
/// The engine only cares about nouns, proper nouns and verbs. Tagging quality
/// is entirely the implementation's responsibility.
pub trait Tagger: Send + Sync {
    /// Human-readable name of this tagger, used in logs.
    fn name(&self) -> &str;

    /// Tags `text`, returning tokens in input order.
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>, SageError>;
}
