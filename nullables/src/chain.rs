//! Nullable chain: deterministic block heights for testing.

use std::cell::Cell;
use tally_types::BlockHeight;

/// A deterministic block-height source.
///
/// The height only moves when you tell it to.
pub struct NullChain {
    current: Cell<u64>,
}

impl NullChain {
    pub fn new(initial_height: u64) -> Self {
        Self {
            current: Cell::new(initial_height),
        }
    }

    /// Get the current height.
    pub fn height(&self) -> BlockHeight {
        BlockHeight::new(self.current.get())
    }

    /// Advance by a number of blocks.
    pub fn advance(&self, blocks: u64) {
        self.current.set(self.current.get().saturating_add(blocks));
    }

    /// Set the height to a specific value.
    pub fn set(&self, height: u64) {
        self.current.set(height);
    }
}

impl Default for NullChain {
    fn default() -> Self {
        Self::new(0)
    }
}
