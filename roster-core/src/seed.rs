//! Initial directory contents.
//!
//! The built-in seed is the fixed set of activities the service starts with.
//! A JSON file with the same shape as the `GET /activities` response can
//! replace it.

use std::num::NonZeroU32;
use std::path::Path;

use indexmap::IndexMap;
use serde::Serialize;

use crate::activity::Activity;
use crate::error::CoreError;
use crate::id::{ActivityName, Email};

/// A validated set of activities used to populate a [`Directory`](crate::Directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Seed(IndexMap<ActivityName, Activity>);

impl Seed {
    /// Validate and wrap a set of activities.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidSeed`] if an activity name is blank or a
    /// roster lists the same email twice.
    pub fn new(activities: IndexMap<ActivityName, Activity>) -> Result<Self, CoreError> {
        for (name, activity) in &activities {
            if name.as_str().trim().is_empty() {
                return Err(CoreError::InvalidSeed {
                    activity: name.to_string(),
                    reason: "activity name is empty".to_owned(),
                });
            }
            if let Some(email) = activity.first_duplicate() {
                return Err(CoreError::InvalidSeed {
                    activity: name.to_string(),
                    reason: format!("participant {email} is listed more than once"),
                });
            }
        }
        Ok(Self(activities))
    }

    /// Parse a JSON mapping of activity name to record.
    ///
    /// # Errors
    /// Returns [`CoreError::SeedParse`] for malformed JSON (including a zero
    /// `max_participants`) and [`CoreError::InvalidSeed`] for invariant
    /// violations.
    pub fn from_json(bytes: &[u8]) -> Result<Self, CoreError> {
        let activities: IndexMap<ActivityName, Activity> = serde_json::from_slice(bytes)?;
        Self::new(activities)
    }

    /// Read and parse a JSON seed file.
    ///
    /// # Errors
    /// Returns [`CoreError::SeedIo`] if the file cannot be read, otherwise
    /// the errors of [`Seed::from_json`].
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let bytes = std::fs::read(path).map_err(|source| CoreError::SeedIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&bytes)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_inner(self) -> IndexMap<ActivityName, Activity> {
        self.0
    }
}

impl Default for Seed {
    fn default() -> Self {
        default_seed()
    }
}

struct SeedEntry {
    name: &'static str,
    description: &'static str,
    schedule: &'static str,
    max_participants: NonZeroU32,
    participants: &'static [&'static str],
}

const fn capacity(n: u32) -> NonZeroU32 {
    match NonZeroU32::new(n) {
        Some(c) => c,
        None => panic!("capacity must be non-zero"),
    }
}

const DEFAULT_ACTIVITIES: [SeedEntry; 9] = [
    SeedEntry {
        name: "Basketball Club",
        description: "Team basketball practice and friendly matches",
        schedule: "Mondays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: capacity(15),
        participants: &["james@mergington.edu"],
    },
    SeedEntry {
        name: "Tennis Club",
        description: "Tennis lessons and tournament preparation",
        schedule: "Wednesdays, 3:30 PM - 5:00 PM",
        max_participants: capacity(10),
        participants: &["grace@mergington.edu"],
    },
    SeedEntry {
        name: "Art Club",
        description: "Painting, drawing, and creative expression",
        schedule: "Tuesdays, 3:30 PM - 4:45 PM",
        max_participants: capacity(18),
        participants: &["isabella@mergington.edu", "lucas@mergington.edu"],
    },
    SeedEntry {
        name: "Drama Club",
        description: "Theater productions and acting workshops",
        schedule: "Thursdays, 4:00 PM - 5:30 PM",
        max_participants: capacity(25),
        participants: &["sophie@mergington.edu"],
    },
    SeedEntry {
        name: "Robotics Club",
        description: "Build and program robots for competitions",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: capacity(16),
        participants: &["alex@mergington.edu", "sam@mergington.edu"],
    },
    SeedEntry {
        name: "Debate Team",
        description: "Prepare for and compete in debate tournaments",
        schedule: "Mondays, 3:30 PM - 4:30 PM",
        max_participants: capacity(14),
        participants: &["claire@mergington.edu"],
    },
    SeedEntry {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: capacity(12),
        participants: &["michael@mergington.edu", "daniel@mergington.edu"],
    },
    SeedEntry {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: capacity(20),
        participants: &["emma@mergington.edu", "sophia@mergington.edu"],
    },
    SeedEntry {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: capacity(30),
        participants: &["john@mergington.edu", "olivia@mergington.edu"],
    },
];

/// The nine activities the service ships with.
#[must_use]
pub fn default_seed() -> Seed {
    let activities = DEFAULT_ACTIVITIES
        .iter()
        .map(|entry| {
            let mut activity =
                Activity::new(entry.description, entry.schedule, entry.max_participants);
            for email in entry.participants {
                activity.push_participant(Email::new(*email));
            }
            (ActivityName::new(entry.name), activity)
        })
        .collect();
    Seed(activities)
}
