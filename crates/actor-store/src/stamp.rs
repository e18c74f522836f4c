//! Time-based identifiers.
//!
//! Every record created through an actor receives a [`Stamp`]: a millisecond timestamp that
//! doubles as its id. Ids are strictly increasing for the whole process, so two records
//! created within the same millisecond still get distinct ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

static LAST_ID: AtomicU64 = AtomicU64::new(0);

/// Creation id and instant of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
    pub id: u64,
    pub at: DateTime<Utc>,
}

impl Stamp {
    /// Returns the next process-unique stamp.
    pub fn next() -> Self {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let previous = LAST_ID
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or(now);
        Self {
            id: now.max(previous + 1),
            at: Utc::now(),
        }
    }

    /// Moves the id floor past ids restored from storage.
    pub fn observe(id: u64) {
        LAST_ID.fetch_max(id, Ordering::SeqCst);
    }
}
