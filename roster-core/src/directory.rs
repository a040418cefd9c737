//! The activity directory and its enrollment operations.

use indexmap::IndexMap;
use serde::Serialize;

use crate::activity::Activity;
use crate::error::DirectoryError;
use crate::id::{ActivityName, Email};
use crate::policy::CapacityPolicy;
use crate::seed::Seed;

/// The (activity, email) pair affected by a successful signup or removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct Enrollment {
    pub activity: ActivityName,
    pub email: Email,
}

/// All activities, keyed by name, in seed order.
///
/// Operations take `&mut self`; callers sharing a directory across threads
/// must hold one lock for the whole call so check-then-mutate stays atomic.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    activities: IndexMap<ActivityName, Activity>,
    policy: CapacityPolicy,
}

impl Directory {
    /// Build a directory from a validated seed.
    #[must_use]
    pub fn from_seed(seed: Seed, policy: CapacityPolicy) -> Self {
        Self {
            activities: seed.into_inner(),
            policy,
        }
    }

    /// Every activity with its full record, unmodified.
    #[must_use]
    pub fn activities(&self) -> &IndexMap<ActivityName, Activity> {
        &self.activities
    }

    #[must_use]
    pub fn get(&self, activity: &str) -> Option<&Activity> {
        self.activities.get(activity)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    #[must_use]
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: CapacityPolicy) {
        self.policy = policy;
    }

    /// Add `email` to the end of `activity`'s roster.
    ///
    /// # Errors
    /// - [`DirectoryError::ActivityNotFound`] if no such activity exists.
    /// - [`DirectoryError::DuplicateSignup`] if `email` is already enrolled.
    /// - [`DirectoryError::ActivityFull`] if the policy is
    ///   [`CapacityPolicy::Enforced`] and no spots are left.
    pub fn signup(
        &mut self,
        activity: &str,
        email: impl Into<Email>,
    ) -> Result<Enrollment, DirectoryError> {
        let email = email.into();
        let (_, name, record) = self.activities.get_full_mut(activity).ok_or_else(|| {
            DirectoryError::ActivityNotFound {
                activity: activity.to_owned(),
            }
        })?;

        if record.is_enrolled(email.as_str()) {
            return Err(DirectoryError::DuplicateSignup {
                activity: name.clone(),
                email,
            });
        }
        if self.policy == CapacityPolicy::Enforced && record.is_full() {
            return Err(DirectoryError::ActivityFull {
                activity: name.clone(),
                capacity: record.max_participants.get(),
            });
        }

        record.push_participant(email.clone());
        Ok(Enrollment {
            activity: name.clone(),
            email,
        })
    }

    /// Remove `email` from `activity`'s roster.
    ///
    /// # Errors
    /// - [`DirectoryError::ActivityNotFound`] if no such activity exists.
    /// - [`DirectoryError::UnknownParticipant`] if `email` is not enrolled.
    pub fn unregister(&mut self, activity: &str, email: &str) -> Result<Enrollment, DirectoryError> {
        let (_, name, record) = self.activities.get_full_mut(activity).ok_or_else(|| {
            DirectoryError::ActivityNotFound {
                activity: activity.to_owned(),
            }
        })?;

        let removed = record
            .remove_participant(email)
            .ok_or_else(|| DirectoryError::UnknownParticipant {
                activity: name.clone(),
                email: email.to_owned(),
            })?;

        Ok(Enrollment {
            activity: name.clone(),
            email: removed,
        })
    }

    /// Replace every record with the contents of `seed`. The policy is kept.
    pub fn reset(&mut self, seed: Seed) {
        self.activities = seed.into_inner();
    }
}
