//! The address book: an owning store of contact records.
//!
//! Records are keyed by their lowercased name. The store exposes only the
//! operations the assistant needs (add, delete, find, birthday scan) rather
//! than a general mapping surface, which keeps the key-normalization
//! invariant enforceable in one place.

use crate::error::BookError;
use crate::models::Record;
use chrono::{Days, NaiveDate};
use tracing::debug;

/// In-memory store of records, keyed case-insensitively by contact name.
///
/// Iteration order is insertion order. Adding a record whose lowercased
/// name already exists overwrites the previous record in place, keeping its
/// position. The book lives for the duration of one process run; nothing is
/// persisted.
#[derive(Debug, Default)]
pub struct AddressBook {
    entries: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the entry whose lowercased name matches, if any.
    fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.entries
            .iter()
            .position(|record| record.name().to_lowercase() == key)
    }

    /// Insert a record, keyed by its lowercased name.
    ///
    /// A second insertion under the same key silently overwrites the prior
    /// entry without changing its position.
    pub fn add_record(&mut self, record: Record) {
        match self.position(record.name()) {
            Some(index) => {
                debug!(name = record.name(), "overwriting existing record");
                self.entries[index] = record;
            }
            None => {
                debug!(name = record.name(), "adding record");
                self.entries.push(record);
            }
        }
    }

    /// Remove and return the record stored under the given name
    /// (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> Result<Record, BookError> {
        match self.position(name) {
            Some(index) => Ok(self.entries.remove(index)),
            None => Err(BookError::RecordNotFound(name.to_string())),
        }
    }

    /// Look up a record by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `BookError::RecordNotFound` if no such record exists.
    pub fn find(&self, name: &str) -> Result<&Record, BookError> {
        self.position(name)
            .map(|index| &self.entries[index])
            .ok_or_else(|| BookError::RecordNotFound(name.to_string()))
    }

    /// Mutable variant of [`find`](Self::find).
    pub fn find_mut(&mut self, name: &str) -> Result<&mut Record, BookError> {
        match self.position(name) {
            Some(index) => Ok(&mut self.entries[index]),
            None => Err(BookError::RecordNotFound(name.to_string())),
        }
    }

    /// Rendered summaries of every record whose stored birthday falls on or
    /// before `today + 7 days`.
    ///
    /// The comparison uses the literal stored date, birth year included, and
    /// has no lower bound. That means a birthday in a past year always
    /// matches. This mirrors the behavior the assistant has always had; it
    /// is not an anniversary calculation.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<String> {
        let next_week = today + Days::new(7);
        self.entries
            .iter()
            .filter(|record| {
                record
                    .birthday()
                    .is_some_and(|birthday| birthday.date() <= next_week)
            })
            .map(|record| record.to_string())
            .collect()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
