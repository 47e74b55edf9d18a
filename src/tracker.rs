use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    errors::BudgetError,
    ledger::{BudgetTotals, Entry, EntryKind, Ledger},
    storage::{KeyValueStore, EXPENSES_KEY, INCOMES_KEY},
};

/// Facade that coordinates ledger state with a persistence backend.
///
/// Every mutating operation writes both collections back to the store, so the
/// persisted snapshot always matches the in-memory state.
pub struct BudgetTracker {
    ledger: Ledger,
    store: Box<dyn KeyValueStore>,
}

impl BudgetTracker {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self {
            ledger: Ledger::new(),
            store,
        }
    }

    /// Hydrates the ledger from the store.
    ///
    /// A missing key reads as an empty collection. Any other failure (an
    /// unreadable store, malformed JSON, a shape mismatch on either key)
    /// resets both collections to empty and clears the stored keys.
    /// Corruption self-heals instead of surfacing.
    pub fn load(&mut self) {
        match self.read_snapshot() {
            Ok((incomes, expenses)) => {
                self.ledger.restore(incomes, expenses);
            }
            Err(err) => {
                warn!("discarding corrupt snapshot: {err}");
                self.ledger.reset();
                let _ = self.store.remove(INCOMES_KEY);
                let _ = self.store.remove(EXPENSES_KEY);
            }
        }
    }

    /// Validates and records an income entry, then persists the snapshot.
    pub fn add_income(&mut self, description: &str, amount: f64) -> Result<Entry, BudgetError> {
        let entry = self.ledger.add_income(description, amount)?;
        self.save()?;
        Ok(entry)
    }

    /// Validates and records an expense entry, then persists the snapshot.
    pub fn add_expense(&mut self, description: &str, amount: f64) -> Result<Entry, BudgetError> {
        let entry = self.ledger.add_expense(description, amount)?;
        self.save()?;
        Ok(entry)
    }

    /// Deletes the matching entry if present; persists either way.
    pub fn delete_entry(&mut self, id: Uuid, kind: EntryKind) -> Result<(), BudgetError> {
        self.ledger.delete_entry(id, kind);
        self.save()
    }

    /// Serializes both collections to their storage keys.
    pub fn save(&mut self) -> Result<(), BudgetError> {
        let incomes = serde_json::to_string(self.ledger.incomes())?;
        let expenses = serde_json::to_string(self.ledger.expenses())?;
        self.store.set(INCOMES_KEY, &incomes)?;
        self.store.set(EXPENSES_KEY, &expenses)?;
        debug!(
            incomes = self.ledger.incomes().len(),
            expenses = self.ledger.expenses().len(),
            "snapshot persisted"
        );
        Ok(())
    }

    pub fn totals(&self) -> BudgetTotals {
        self.ledger.totals()
    }

    pub fn incomes(&self) -> &[Entry] {
        self.ledger.incomes()
    }

    pub fn expenses(&self) -> &[Entry] {
        self.ledger.expenses()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    fn read_snapshot(&self) -> Result<(Vec<Entry>, Vec<Entry>), BudgetError> {
        let incomes = self.read_entries(INCOMES_KEY)?;
        let expenses = self.read_entries(EXPENSES_KEY)?;
        Ok((incomes, expenses))
    }

    fn read_entries(&self, key: &str) -> Result<Vec<Entry>, BudgetError> {
        match self.store.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn tracker() -> BudgetTracker {
        BudgetTracker::new(Box::new(MemoryStore::new()))
    }

    #[test]
    fn mutations_write_both_keys() {
        let mut tracker = tracker();
        tracker.add_income("Salary", 5000.0).expect("add income");

        let incomes = tracker.store().get(INCOMES_KEY).expect("get incomes");
        let expenses = tracker.store().get(EXPENSES_KEY).expect("get expenses");
        assert!(incomes.expect("incomes present").contains("Salary"));
        assert_eq!(expenses.as_deref(), Some("[]"));
    }

    #[test]
    fn validation_failure_mutates_nothing_and_saves_nothing() {
        let mut tracker = tracker();
        let result = tracker.add_income("", 100.0);
        assert!(matches!(result, Err(BudgetError::Validation(_))));
        assert!(tracker.incomes().is_empty());
        assert!(tracker.store().get(INCOMES_KEY).expect("get").is_none());
    }

    #[test]
    fn load_with_empty_store_yields_empty_collections() {
        let mut tracker = tracker();
        tracker.load();
        assert!(tracker.incomes().is_empty());
        assert!(tracker.expenses().is_empty());
    }

    #[test]
    fn corrupt_snapshot_resets_state_and_clears_keys() {
        let mut store = MemoryStore::new();
        store.set(INCOMES_KEY, "{not valid json").expect("seed store");
        store
            .set(EXPENSES_KEY, "[{\"id\":\"x\",\"description\":\"Rent\",\"amount\":10}]")
            .expect("seed store");

        let mut tracker = BudgetTracker::new(Box::new(store));
        tracker.load();

        assert!(tracker.incomes().is_empty());
        assert!(tracker.expenses().is_empty());
        assert!(tracker.store().get(INCOMES_KEY).expect("get").is_none());
        assert!(tracker.store().get(EXPENSES_KEY).expect("get").is_none());
    }

    #[test]
    fn wrong_shape_is_treated_as_corruption() {
        let mut store = MemoryStore::new();
        store
            .set(INCOMES_KEY, "{\"not\":\"an array\"}")
            .expect("seed store");

        let mut tracker = BudgetTracker::new(Box::new(store));
        tracker.load();

        assert!(tracker.incomes().is_empty());
        assert!(tracker.store().get(INCOMES_KEY).expect("get").is_none());
    }

    #[test]
    fn delete_of_unknown_id_still_persists() {
        let mut tracker = tracker();
        tracker
            .delete_entry(Uuid::new_v4(), EntryKind::Income)
            .expect("delete");
        assert_eq!(
            tracker.store().get(INCOMES_KEY).expect("get").as_deref(),
            Some("[]")
        );
    }

    #[test]
    fn save_then_load_roundtrips_entries() {
        let mut tracker = tracker();
        let income = tracker.add_income("Salary", 5000.0).expect("add income");
        let expense = tracker.add_expense("Rent", 1500.0).expect("add expense");

        tracker.load();

        assert_eq!(tracker.incomes(), &[income]);
        assert_eq!(tracker.expenses(), &[expense]);
    }
}
