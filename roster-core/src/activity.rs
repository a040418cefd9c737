use std::collections::HashSet;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::id::Email;

/// An extracurricular offering and its current roster.
///
/// The roster is only mutated through [`Directory`](crate::Directory), which
/// keeps every email unique within one activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Activity {
    /// What the activity is about.
    pub description: String,
    /// Human-readable meeting time, e.g. `"Fridays, 3:30 PM - 5:00 PM"`.
    pub schedule: String,
    /// Capacity of the activity. Only checked under
    /// [`CapacityPolicy::Enforced`](crate::CapacityPolicy::Enforced).
    pub max_participants: NonZeroU32,
    participants: Vec<Email>,
}

impl Activity {
    /// Create an activity with an empty roster.
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: NonZeroU32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Enrolled emails in signup order.
    #[must_use]
    pub fn participants(&self) -> &[Email] {
        &self.participants
    }

    /// Return `true` if `email` is on the roster.
    #[must_use]
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p.as_str() == email)
    }

    #[must_use]
    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Remaining places before `max_participants` is reached, saturating at 0.
    #[must_use]
    pub fn spots_left(&self) -> usize {
        let capacity = usize::try_from(self.max_participants.get()).unwrap_or(usize::MAX);
        capacity.saturating_sub(self.participants.len())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }

    /// First email that appears more than once on the roster, if any.
    pub(crate) fn first_duplicate(&self) -> Option<&Email> {
        let mut seen = HashSet::with_capacity(self.participants.len());
        self.participants.iter().find(|p| !seen.insert(p.as_str()))
    }

    pub(crate) fn push_participant(&mut self, email: Email) {
        self.participants.push(email);
    }

    /// Remove `email` from the roster, keeping the order of the others.
    pub(crate) fn remove_participant(&mut self, email: &str) -> Option<Email> {
        let index = self.participants.iter().position(|p| p.as_str() == email)?;
        Some(self.participants.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capacity(n: u32) -> NonZeroU32 {
        match NonZeroU32::new(n) {
            Some(c) => c,
            None => panic!("capacity must be non-zero"),
        }
    }

    #[test]
    fn spots_left_saturates_when_over_capacity() {
        let mut activity = Activity::new("Chess", "Fridays", capacity(1));
        activity.push_participant(Email::new("a@mergington.edu"));
        activity.push_participant(Email::new("b@mergington.edu"));
        assert_eq!(activity.spots_left(), 0);
        assert!(activity.is_full());
    }

    #[test]
    fn remove_participant_preserves_order_of_remaining() {
        let mut activity = Activity::new("Art", "Tuesdays", capacity(5));
        for email in ["a@x", "b@x", "c@x"] {
            activity.push_participant(Email::new(email));
        }
        let removed = activity.remove_participant("b@x");
        assert_eq!(removed, Some(Email::new("b@x")));
        assert_eq!(activity.participants(), &[Email::new("a@x"), Email::new("c@x")]);
        assert!(activity.remove_participant("b@x").is_none());
    }

    #[test]
    fn first_duplicate_finds_repeated_email() {
        let mut activity = Activity::new("Drama", "Thursdays", capacity(3));
        assert!(activity.first_duplicate().is_none());
        activity.push_participant(Email::new("x@y"));
        activity.push_participant(Email::new("z@y"));
        activity.push_participant(Email::new("x@y"));
        assert_eq!(activity.first_duplicate(), Some(&Email::new("x@y")));
    }

    #[test]
    fn zero_capacity_is_rejected_on_deserialize() {
        let json = r#"{"description":"d","schedule":"s","max_participants":0,"participants":[]}"#;
        assert!(serde_json::from_str::<Activity>(json).is_err());
    }
}
