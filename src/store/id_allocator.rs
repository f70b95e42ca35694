//! Monotonic identifier allocation.

use crate::domain::ContactId;
use std::collections::HashSet;

/// Issues contact ids that are never reused.
///
/// Every id the store has ever held is recorded, whether it came from a bulk
/// load or from this allocator, and `allocate` skips any recorded value. The
/// record outlives deletes and re-loads, so a stale id held by a caller can
/// never come to mean a different contact.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
    issued: HashSet<ContactId>,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self {
            next: 1,
            issued: HashSet::new(),
        }
    }

    /// Record an id that entered the collection from outside.
    ///
    /// Returns `false` if it was already known.
    pub fn observe(&mut self, id: &ContactId) -> bool {
        self.issued.insert(id.clone())
    }

    /// Issue a fresh id.
    pub fn allocate(&mut self) -> ContactId {
        loop {
            let candidate = ContactId::local(self.next);
            self.next += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    /// Whether `id` has ever been issued or observed.
    pub fn is_known(&self, id: &ContactId) -> bool {
        self.issued.contains(id)
    }
}
