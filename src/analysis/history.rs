//! Caller-owned collection of measurement records
//!
//! Measurement functions never write here; whoever runs a measurement decides
//! whether to record it. Appending takes `&self`, so batch workers can share
//! one history by reference.

use crate::analysis::pipeline::Measurement;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

/// One completed measurement
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    /// Name of the measured file
    pub filename: String,
    /// Metric values
    pub measurement: Measurement,
    /// When the record was created
    pub timestamp: SystemTime,
}

impl RunRecord {
    /// Record a measurement stamped with the current time
    pub fn new(filename: impl Into<String>, measurement: Measurement) -> Self {
        Self {
            filename: filename.into(),
            measurement,
            timestamp: SystemTime::now(),
        }
    }

    /// Seconds since the Unix epoch, zero for clocks set before it
    pub fn unix_seconds(&self) -> u64 {
        self.timestamp
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    }
}

/// Append-only run history, safe for concurrent appends
#[derive(Debug, Default)]
pub struct RunHistory {
    records: Mutex<Vec<RunRecord>>,
}

impl RunHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    // A panic in another appender cannot leave a half-written Vec behind
    fn guard(&self) -> MutexGuard<'_, Vec<RunRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a record
    pub fn push(&self, record: RunRecord) {
        self.guard().push(record);
    }

    /// Append a measurement stamped with the current time
    pub fn record(&self, filename: impl Into<String>, measurement: Measurement) {
        self.push(RunRecord::new(filename, measurement));
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.guard().len()
    }

    /// True when nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }

    /// Snapshot of all records in insertion order
    pub fn records(&self) -> Vec<RunRecord> {
        self.guard().clone()
    }

    /// Snapshot of all records, most recent first
    pub fn latest(&self) -> Vec<RunRecord> {
        let mut records = self.records();
        records.reverse();
        records
    }

    /// Remove every record
    pub fn clear(&self) {
        self.guard().clear();
    }

    /// Consume the history, returning its records in insertion order
    pub fn into_records(self) -> Vec<RunRecord> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
