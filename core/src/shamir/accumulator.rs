use std::collections::HashSet;

use math::prelude::*;

use super::share::Share;

/// Shares emitted so far by one split call, plus the set of x-coordinates
/// already handed out.
pub(super) struct ShareAccumulator {
    pub(super) taken: HashSet<BigUint>,
    pub(super) shares: Vec<Share>,
}

impl ShareAccumulator {
    pub(super) fn with_capacity(participants: usize) -> Self {
        Self {
            taken: HashSet::with_capacity(participants),
            shares: Vec::with_capacity(participants),
        }
    }

    pub(super) fn is_taken(&self, x: &BigUint) -> bool {
        self.taken.contains(x)
    }

    /// Record a share. Returns `false` and leaves the accumulator untouched
    /// when `x` was already used.
    pub(super) fn insert(&mut self, x: BigUint, y: BigUint) -> bool {
        if !self.taken.insert(x.clone()) {
            return false;
        }
        self.shares.push(Share { x, y });
        true
    }

    pub(super) fn len(&self) -> usize {
        self.shares.len()
    }

    pub(super) fn finalize(self) -> Vec<Share> {
        self.shares
    }
}
