//! Cross-board chip budget for one decision cycle.

/// Tracks chips committed across boards against the stack at cycle start.
///
/// Every affordability check subtracts what earlier boards already committed,
/// so the total never exceeds `stack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackBudget {
    stack: u32,
    committed: u32,
}

impl StackBudget {
    /// Fresh budget over `stack` chips.
    pub fn new(stack: u32) -> Self {
        Self { stack, committed: 0 }
    }

    /// Stack at cycle start.
    pub fn stack(&self) -> u32 {
        self.stack
    }

    /// Chips committed so far this cycle.
    pub fn committed(&self) -> u32 {
        self.committed
    }

    /// Chips still available.
    pub fn remaining(&self) -> u32 {
        self.stack - self.committed
    }

    /// True if `cost` fits in what remains.
    #[inline]
    pub fn can_afford(&self, cost: u32) -> bool {
        cost <= self.remaining()
    }

    /// Record `cost` as spent. Returns false, leaving the budget untouched,
    /// if it does not fit.
    pub fn commit(&mut self, cost: u32) -> bool {
        if !self.can_afford(cost) {
            return false;
        }
        self.committed += cost;
        true
    }
}
