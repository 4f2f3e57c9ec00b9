//! Process-local running total of borrowed funds.
//!
//! The authoritative debt figure lives on chain (see [`crate::debt`]);
//! this tracker is the optimistic submission-side total the position
//! operations maintain. Process lifetime only, no durability.

use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct DebtTracker {
    total: Mutex<u64>,
}

impl DebtTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful borrow. Returns the new total.
    pub fn add(&self, amount_mist: u64) -> u64 {
        let mut total = self.total.lock();
        *total = total.saturating_add(amount_mist);
        *total
    }

    /// Record a successful repay: the full position is closed.
    pub fn clear(&self) {
        *self.total.lock() = 0;
    }

    pub fn current(&self) -> u64 {
        *self.total.lock()
    }
}
