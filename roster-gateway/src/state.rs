//! Shared, lock-guarded directory held in the router state.
//!
//! A single `RwLock` serializes every mutation, so each signup or removal
//! runs its check and its write under the same guard.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use roster_core::{
    Activity, ActivityName, CapacityPolicy, Directory, DirectoryError, Enrollment, Seed,
};

/// Thread-safe owner of the activity directory.
#[derive(Debug, Default)]
pub struct SharedDirectory {
    inner: RwLock<Directory>,
}

impl SharedDirectory {
    #[must_use]
    pub fn new(directory: Directory) -> Self {
        Self {
            inner: RwLock::new(directory),
        }
    }

    /// Build from a seed with the given capacity policy.
    #[must_use]
    pub fn from_seed(seed: Seed, policy: CapacityPolicy) -> Self {
        Self::new(Directory::from_seed(seed, policy))
    }

    /// Copy of every activity record, in directory order.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> IndexMap<ActivityName, Activity> {
        self.read().activities().clone()
    }

    /// Copy of one activity record.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn get(&self, activity: &str) -> Option<Activity> {
        self.read().get(activity).cloned()
    }

    /// See [`Directory::signup`].
    ///
    /// # Errors
    /// Propagates the [`DirectoryError`] from the directory.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn signup(&self, activity: &str, email: &str) -> Result<Enrollment, DirectoryError> {
        self.write().signup(activity, email)
    }

    /// See [`Directory::unregister`].
    ///
    /// # Errors
    /// Propagates the [`DirectoryError`] from the directory.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn unregister(&self, activity: &str, email: &str) -> Result<Enrollment, DirectoryError> {
        self.write().unregister(activity, email)
    }

    /// Replace all records with `seed`.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn reset(&self, seed: Seed) {
        self.write().reset(seed);
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn read(&self) -> RwLockReadGuard<'_, Directory> {
        self.inner.read().expect("directory read lock poisoned")
    }

    #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
    fn write(&self) -> RwLockWriteGuard<'_, Directory> {
        self.inner.write().expect("directory write lock poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use roster_core::default_seed;

    use super::*;

    fn shared() -> SharedDirectory {
        SharedDirectory::from_seed(default_seed(), CapacityPolicy::Advisory)
    }

    #[test]
    fn signup_and_unregister_lifecycle() {
        let dir = shared();
        assert!(dir.signup("Chess Club", "workflow@mergington.edu").is_ok());
        assert!(dir
            .get("Chess Club")
            .is_some_and(|a| a.is_enrolled("workflow@mergington.edu")));
        assert!(dir.unregister("Chess Club", "workflow@mergington.edu").is_ok());
        assert!(dir
            .get("Chess Club")
            .is_some_and(|a| !a.is_enrolled("workflow@mergington.edu")));
    }

    #[test]
    fn concurrent_duplicate_signups_admit_exactly_one() {
        let dir = Arc::new(shared());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let dir = Arc::clone(&dir);
                thread::spawn(move || dir.signup("Drama Club", "race@mergington.edu").is_ok())
            })
            .collect();
        let successes = handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(ok) => ok,
                Err(_) => panic!("signup thread panicked"),
            })
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1, "exactly one concurrent signup must win");
        let roster = dir.get("Drama Club").map(|a| a.participant_count());
        assert_eq!(roster, Some(2));
    }

    #[test]
    fn reset_restores_seed() {
        let dir = shared();
        assert!(dir.unregister("Art Club", "isabella@mergington.edu").is_ok());
        dir.reset(default_seed());
        assert_eq!(dir.get("Art Club").map(|a| a.participant_count()), Some(2));
    }
}
