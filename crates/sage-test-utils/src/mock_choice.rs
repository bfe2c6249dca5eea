// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use sage_core::ChoiceSource;

/// Always chooses the wrapped index, clamped to the last valid one.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedChoice(pub usize);

impl ChoiceSource for FixedChoice {
    fn choose(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
