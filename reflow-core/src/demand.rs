// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

/// Outstanding, unfulfilled item requests of one subscription.
///
/// Requests are additive. Addition saturates at [`Demand::UNBOUNDED`], and a
/// saturated counter is never decremented again: the subscriber asked for
/// everything the source can produce.
///
/// ```
/// use reflow_core::Demand;
///
/// let mut demand = Demand::default();
/// demand.add(2);
/// demand.add(1);
/// assert_eq!(demand.outstanding(), 3);
///
/// assert!(demand.try_take());
/// assert_eq!(demand.outstanding(), 2);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Demand {
    outstanding: u64,
}

impl Demand {
    /// Demand value meaning "no limit".
    pub const UNBOUNDED: u64 = u64::MAX;

    /// Adds `n` requested items.
    pub fn add(&mut self, n: u64) {
        self.outstanding = self.outstanding.saturating_add(n);
    }

    /// Consumes one unit of demand for a delivered item.
    ///
    /// Returns `false` and leaves the counter untouched when nothing is outstanding.
    pub fn try_take(&mut self) -> bool {
        match self.outstanding {
            0 => false,
            Self::UNBOUNDED => true,
            _ => {
                self.outstanding -= 1;
                true
            }
        }
    }

    /// Items requested but not yet delivered.
    #[must_use]
    pub const fn outstanding(&self) -> u64 {
        self.outstanding
    }

    #[must_use]
    pub const fn has_outstanding(&self) -> bool {
        self.outstanding > 0
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        self.outstanding == Self::UNBOUNDED
    }
}
