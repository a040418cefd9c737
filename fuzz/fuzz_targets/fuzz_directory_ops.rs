//! Fuzz target: random signup/removal sequences.
//!
//! Each input byte selects an operation, an activity (including one that
//! does not exist) and one of a small pool of emails. After every step no
//! roster may contain the same email twice, and under the enforced policy no
//! roster may grow past its capacity.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use roster_core::{default_seed, CapacityPolicy, Directory};

const ACTIVITIES: [&str; 4] = ["Basketball Club", "Tennis Club", "Art Club", "Unknown Club"];
const EMAILS: [&str; 4] = [
    "james@mergington.edu",
    "grace@mergington.edu",
    "new@mergington.edu",
    "other@mergington.edu",
];

fuzz_target!(|data: &[u8]| {
    let Some((&first, ops)) = data.split_first() else {
        return;
    };
    let policy = if first & 1 == 0 {
        CapacityPolicy::Advisory
    } else {
        CapacityPolicy::Enforced
    };
    let mut dir = Directory::from_seed(default_seed(), policy);

    for &byte in ops {
        let activity = ACTIVITIES[usize::from(byte >> 1) % ACTIVITIES.len()];
        let email = EMAILS[usize::from(byte >> 3) % EMAILS.len()];
        let _ = if byte & 1 == 0 {
            dir.signup(activity, email)
        } else {
            dir.unregister(activity, email)
        };

        for record in dir.activities().values() {
            let unique: HashSet<_> = record.participants().iter().collect();
            assert_eq!(unique.len(), record.participant_count());
            if policy == CapacityPolicy::Enforced {
                let capacity = usize::try_from(record.max_participants.get()).unwrap_or(usize::MAX);
                assert!(record.participant_count() <= capacity);
            }
        }
    }
});
