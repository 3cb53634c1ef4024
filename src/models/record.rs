//! Record model representing one contact in the address book.

use crate::domain::{Birthday, PhoneNumber};
use crate::error::BookError;
use serde::Serialize;
use std::fmt;

/// A single contact: a display name, an ordered list of phone numbers, and
/// an optional birthday.
///
/// A record is created with a name only; phones and the birthday are added
/// afterward through the explicit operations below. The record is always
/// owned by the address book entry that holds it. Duplicate phone numbers
/// are permitted and insertion order is preserved.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Record {
    name: String,
    phones: Vec<PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with the given display name and no phones or birthday.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The display name. Case is preserved; the address book lowercases it
    /// for keying.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// The stored birthday, if any.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Append a phone number. Format validity is guaranteed by the
    /// `PhoneNumber` type; duplicates are allowed.
    pub fn add_phone(&mut self, phone: PhoneNumber) {
        self.phones.push(phone);
    }

    /// Remove the first occurrence of the given phone number.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the number is not stored.
    pub fn remove_phone(&mut self, phone: &PhoneNumber) -> Result<(), BookError> {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => {
                self.phones.remove(index);
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(phone.as_str().to_string())),
        }
    }

    /// Replace the first occurrence of `old` with `new`, in place at the
    /// same position.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if `old` is not stored.
    pub fn edit_phone(&mut self, old: &PhoneNumber, new: PhoneNumber) -> Result<(), BookError> {
        match self.phones.iter().position(|p| p == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.as_str().to_string())),
        }
    }

    /// Look up a stored phone number and return its textual form.
    ///
    /// # Errors
    ///
    /// Returns `BookError::PhoneNotFound` if the number is not stored.
    pub fn find_phone(&self, phone: &PhoneNumber) -> Result<&PhoneNumber, BookError> {
        self.phones
            .iter()
            .find(|p| *p == phone)
            .ok_or_else(|| BookError::PhoneNotFound(phone.as_str().to_string()))
    }

    /// Set the birthday, replacing any existing one. A record holds at most
    /// one birthday.
    pub fn add_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

impl fmt::Display for Record {
    /// Single-line summary:
    /// `Contact name: <name>, phones: <p1>; <p2>[, Birthday: <date>]`.
    /// The birthday suffix is omitted entirely when no birthday is set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phone_list = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phone_list)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        Ok(())
    }
}
