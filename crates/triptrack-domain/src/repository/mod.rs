//! Repository trait definitions for data persistence

use triptrack_types::StorageError;

use crate::model::Ledger;

/// Repository for the trip ledger.
///
/// `load` and `save` work on the whole ledger; a save overwrites the
/// persisted state in full, so other sessions must reload to observe it.
pub trait LedgerRepository {
    /// Load all trips, creating an empty store if none exists yet
    fn load(&self) -> Result<Ledger, StorageError>;

    /// Persist the full ledger, replacing the previous contents
    fn save(&self, ledger: &Ledger) -> Result<(), StorageError>;
}
