//! Fuzz target: seed document parsing.
//!
//! Arbitrary bytes fed to `Seed::from_json` must never panic, and any seed
//! it accepts must build a directory whose rosters hold no duplicates.

#![no_main]

use std::collections::HashSet;

use libfuzzer_sys::fuzz_target;
use roster_core::{CapacityPolicy, Directory, Seed};

fuzz_target!(|data: &[u8]| {
    let Ok(seed) = Seed::from_json(data) else {
        return;
    };
    let dir = Directory::from_seed(seed, CapacityPolicy::Advisory);
    for activity in dir.activities().values() {
        let unique: HashSet<_> = activity.participants().iter().collect();
        assert_eq!(unique.len(), activity.participant_count());
    }
});
