//! Runtime guard for the planner's thread-affinity contract.
//!
//! Plan construction caches thread-local state between calls, so every
//! plan belonging to one [`Planner`](crate::Planner) must be created on
//! the same OS thread. The guard makes that contract checkable instead
//! of an undocumented assumption: the first planning thread claims the
//! cell, and every later call is compared against it.

use std::sync::OnceLock;
use std::thread::{self, ThreadId};

use spindle_core::PlanError;

/// First-caller-owns thread claim.
#[derive(Debug, Default)]
pub struct ThreadAffinity {
    owner: OnceLock<ThreadId>,
}

impl ThreadAffinity {
    /// An unclaimed affinity cell.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: OnceLock::new(),
        }
    }

    /// Verify the calling thread owns this cell, claiming it if no
    /// thread has planned yet.
    pub fn verify(&self) -> Result<(), PlanError> {
        let current = thread::current().id();
        let owner = *self.owner.get_or_init(|| current);
        if owner == current {
            Ok(())
        } else {
            Err(PlanError::NonAffineThread)
        }
    }

    /// The owning thread id, if any planning call has happened.
    #[must_use]
    pub fn owner(&self) -> Option<ThreadId> {
        self.owner.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn first_caller_claims_and_repeats() {
        let affinity = ThreadAffinity::new();
        assert!(affinity.owner().is_none());
        affinity.verify().unwrap();
        affinity.verify().unwrap();
        assert_eq!(affinity.owner(), Some(thread::current().id()));
    }

    #[test]
    fn other_threads_are_rejected() {
        let affinity = Arc::new(ThreadAffinity::new());
        affinity.verify().unwrap();

        let shared = Arc::clone(&affinity);
        let result = thread::spawn(move || shared.verify()).join().unwrap();
        assert_eq!(result, Err(PlanError::NonAffineThread));
    }

    #[test]
    fn claim_can_happen_off_the_spawning_thread() {
        let affinity = Arc::new(ThreadAffinity::new());
        let shared = Arc::clone(&affinity);
        thread::spawn(move || shared.verify())
            .join()
            .unwrap()
            .unwrap();

        // The spawning thread never planned, so it does not own the cell.
        assert_eq!(affinity.verify(), Err(PlanError::NonAffineThread));
    }
}
