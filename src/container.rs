//! Finite-capacity reservoir of a consumable (water, milk, beans).

/// A tank with a fixed capacity. Tracks how much was consumed from it
/// since construction for the statistics report.
#[derive(Debug)]
pub struct Container {
    capacity: u64,
    level: u64,
    consumed: u64,
}

impl Container {
    /// Creates a container filled to capacity.
    pub fn full(capacity: u64) -> Container {
        Container {
            capacity,
            level: capacity,
            consumed: 0,
        }
    }

    /// Creates an empty container.
    pub fn empty(capacity: u64) -> Container {
        Container {
            capacity,
            level: 0,
            consumed: 0,
        }
    }

    /// Adds `amount` to the container.
    ///
    /// Amounts larger than the whole capacity are rejected without touching
    /// the level. A fill that would overflow is clamped at capacity and
    /// reported as not fully accepted.
    pub fn fill(&mut self, amount: u64) -> bool {
        if amount > self.capacity {
            return false;
        }
        if self.level + amount <= self.capacity {
            self.level += amount;
            return true;
        }
        self.level = self.capacity;
        false
    }

    /// Takes `amount` out of the container. Succeeds only if a strictly
    /// positive level remains afterwards; draining the container to exactly
    /// zero counts as failure.
    pub fn withdraw(&mut self, amount: u64) -> bool {
        if self.level > amount {
            self.level -= amount;
            self.consumed += amount;
            return true;
        }
        false
    }

    /// Restores the level to full capacity.
    pub fn refill(&mut self) {
        self.level = self.capacity;
    }

    pub fn level(&self) -> u64 {
        self.level
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}
