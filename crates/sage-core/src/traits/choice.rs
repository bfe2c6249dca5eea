// SPDX-FileCopyrightText: 2026 Sage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injected randomness for fallback selection.

use rand::Rng;

/// Picks an index in `0..len`.
///
/// Implementations must return `0` when `len == 0` and a value `< len`
/// otherwise.
pub trait ChoiceSource: Send + Sync {
    fn choose(&self, len: usize) -> usize;
}

/// Uniform choice backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngChoice;

impl ChoiceSource for ThreadRngChoice {
    fn choose(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn empty_range_yields_zero() {
        assert_eq!(ThreadRngChoice.choose(0), 0);
    }

    proptest! {
        #[test]
        fn choice_stays_in_range(len in 1usize..64) {
            prop_assert!(ThreadRngChoice.choose(len) < len);
        }
    }
}
