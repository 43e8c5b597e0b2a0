//! In-memory employee store with CRUD and ID allocation.
//!
//! The store is the single authority for committed records. Callers are
//! responsible for validating fields before they commit; the store only
//! enforces the typed schema and ID discipline.

use crate::models::{EmployeeFields, EmployeeId, EmployeeRecord};

/// The authoritative in-memory collection of employee records.
///
/// Records iterate most-recent-first: `add` prepends. IDs come from a
/// process-lifetime monotonic counter and are never reused, even after
/// deletes.
#[derive(Debug, Default)]
pub struct EmployeeStore {
    records: Vec<EmployeeRecord>,
    next_seq: u32,
}

impl EmployeeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with seed records.
    ///
    /// Seeds pass through the normal allocator, so the first seed gets
    /// `EMP00001` and later creations continue the sequence.
    pub fn with_seed(seed: impl IntoIterator<Item = EmployeeFields>) -> Self {
        let mut store = Self::new();
        for fields in seed {
            store.add(fields);
        }
        store
    }

    /// All records, most-recent-first.
    pub fn list(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Look up a record by ID.
    pub fn get(&self, id: &EmployeeId) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| &r.id == id)
    }

    /// Total number of records.
    pub fn total(&self) -> usize {
        self.records.len()
    }

    /// Number of active records.
    pub fn active_count(&self) -> usize {
        self.records.iter().filter(|r| r.active).count()
    }

    /// Commit a new record, allocating the next ID and prepending it.
    pub fn add(&mut self, fields: EmployeeFields) -> EmployeeId {
        self.next_seq += 1;
        let id = EmployeeId::from_seq(self.next_seq);
        tracing::info!("Adding employee {} ({})", id, fields.name);
        self.records.insert(0, EmployeeRecord::new(id.clone(), fields));
        id
    }

    /// Replace every mutable field of the record matching `id`.
    ///
    /// An unknown ID is a benign no-op, logged for diagnostics.
    pub fn update(&mut self, id: &EmployeeId, fields: EmployeeFields) -> bool {
        match self.records.iter_mut().find(|r| &r.id == id) {
            Some(record) => {
                tracing::info!("Updating employee {}", id);
                record.apply(fields);
                true
            }
            None => {
                tracing::warn!("Update ignored: no employee with ID {}", id);
                false
            }
        }
    }

    /// Remove the record matching `id`.
    ///
    /// An unknown ID is a benign no-op, logged for diagnostics.
    pub fn remove(&mut self, id: &EmployeeId) -> bool {
        let before = self.records.len();
        self.records.retain(|r| &r.id != id);
        let removed = self.records.len() < before;
        if removed {
            tracing::info!("Removed employee {}", id);
        } else {
            tracing::warn!("Remove ignored: no employee with ID {}", id);
        }
        removed
    }
}
