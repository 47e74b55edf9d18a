use uuid::Uuid;

use super::entry::{Entry, EntryKind};
use crate::errors::ValidationError;

/// Owner of the income and expense collections.
///
/// Insertion order is preserved and doubles as display order. The ledger is
/// purely in-memory; coupling it to a store is [`crate::tracker::BudgetTracker`]'s job.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    incomes: Vec<Entry>,
    expenses: Vec<Entry>,
}

/// Derived totals, recomputed on every read and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetTotals {
    pub total_income: f64,
    pub total_expenses: f64,
    pub remaining: f64,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an income entry, returning the stored record.
    pub fn add_income(
        &mut self,
        description: &str,
        amount: f64,
    ) -> Result<Entry, ValidationError> {
        let entry = Entry::new(description, amount)?;
        self.incomes.push(entry.clone());
        Ok(entry)
    }

    /// Validates and appends an expense entry, returning the stored record.
    pub fn add_expense(
        &mut self,
        description: &str,
        amount: f64,
    ) -> Result<Entry, ValidationError> {
        let entry = Entry::new(description, amount)?;
        self.expenses.push(entry.clone());
        Ok(entry)
    }

    /// Removes the entry with the given id from the selected collection.
    ///
    /// Unknown ids are ignored; delete is idempotent.
    pub fn delete_entry(&mut self, id: Uuid, kind: EntryKind) {
        self.collection_mut(kind).retain(|entry| entry.id != id);
    }

    pub fn totals(&self) -> BudgetTotals {
        let total_income: f64 = self.incomes.iter().map(|entry| entry.amount).sum();
        let total_expenses: f64 = self.expenses.iter().map(|entry| entry.amount).sum();
        BudgetTotals {
            total_income,
            total_expenses,
            remaining: total_income - total_expenses,
        }
    }

    pub fn incomes(&self) -> &[Entry] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Entry] {
        &self.expenses
    }

    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Income => &self.incomes,
            EntryKind::Expense => &self.expenses,
        }
    }

    /// Drops every entry from both collections.
    pub fn reset(&mut self) {
        self.incomes.clear();
        self.expenses.clear();
    }

    /// Replaces both collections wholesale when hydrating from storage.
    pub(crate) fn restore(&mut self, incomes: Vec<Entry>, expenses: Vec<Entry>) {
        self.incomes = incomes;
        self.expenses = expenses;
    }

    fn collection_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Income => &mut self.incomes,
            EntryKind::Expense => &mut self.expenses,
        }
    }
}
