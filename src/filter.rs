//! Read-only filtering of the employee listing.

use crate::models::{EmployeeRecord, Gender};

/// Search and filter criteria for the dashboard table.
///
/// Criteria combine with logical AND; `None` / empty means "any". Applying
/// the criteria never mutates records and preserves their order.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    pub search: String,
    pub gender: Option<Gender>,
    pub status: Option<bool>,
}

impl FilterCriteria {
    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.gender.is_none() && self.status.is_none()
    }

    /// Reset all criteria.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check a single record against the criteria.
    pub fn matches(&self, record: &EmployeeRecord) -> bool {
        self.matches_lowered(record, &self.search.to_lowercase())
    }

    /// Derive the visible subset of `records`, preserving order.
    pub fn apply<'a>(&self, records: &'a [EmployeeRecord]) -> Vec<&'a EmployeeRecord> {
        // Lower the search term once, not per record.
        let search = self.search.to_lowercase();
        records.iter().filter(|r| self.matches_lowered(r, &search)).collect()
    }

    fn matches_lowered(&self, record: &EmployeeRecord, search: &str) -> bool {
        let search_match = search.is_empty() || record.name.to_lowercase().contains(search);

        let gender_match = self.gender.is_none_or(|g| record.gender == g);

        let status_match = self.status.is_none_or(|active| record.active == active);

        search_match && gender_match && status_match
    }
}
