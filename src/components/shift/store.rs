use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::models::ShiftRecord;
use crate::error::{AppResult, Error};

/// Per-day shift records keyed by their calendar day
///
/// At most one record per day; saving again overwrites. Serializes as a map
/// of ISO dates to records, the shape a persistence collaborator should
/// adopt. Derived values are methods on the record and are never part of
/// the serialized form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShiftStore {
    shifts: BTreeMap<NaiveDate, ShiftRecord>,
}

impl ShiftStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the shift stored for a day, if any
    pub fn get(&self, day: NaiveDate) -> Option<&ShiftRecord> {
        self.shifts.get(&day)
    }

    /// Store a shift for a day, overwriting any previous one
    pub fn save(&mut self, day: NaiveDate, record: ShiftRecord) {
        debug!("Saving shift for {}: {}", day, record.format());
        self.shifts.insert(day, record);
    }

    /// Whether a day has a stored shift
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.shifts.contains_key(&day)
    }

    /// Number of days with a stored shift
    pub fn len(&self) -> usize {
        self.shifts.len()
    }

    /// Whether the store has no shifts at all
    pub fn is_empty(&self) -> bool {
        self.shifts.is_empty()
    }

    /// Iterate the stored shifts in date order
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &ShiftRecord)> {
        self.shifts.iter()
    }

    /// Serialize the store in the persistence contract shape
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Load a store from the persistence contract shape
    pub fn from_json(content: &str) -> AppResult<Self> {
        serde_json::from_str(content).map_err(|e| Error::Serialization(e.to_string()))
    }
}
