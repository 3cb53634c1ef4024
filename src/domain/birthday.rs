//! Birthday value object.

use super::errors::ValidationError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual shape of a birthday: two-digit day, two-digit month, four-digit
/// year, dot-separated. Leading zeros are required, so `1.1.1990` is rejected
/// before any calendar check runs.
static BIRTHDAY_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("birthday shape regex is valid"));

/// Date format used for parsing and display.
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for birthdays in `DD.MM.YYYY` form.
///
/// Validated at construction time: the text must match the `DD.MM.YYYY`
/// shape and denote a real calendar date (`31.04.2000` is rejected,
/// `29.02.2000` is a valid leap day). The original text is kept for display
/// and the parsed date is kept alongside so comparisons never re-parse.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("15.08.1990").unwrap();
/// assert_eq!(birthday.as_str(), "15.08.1990");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating shape and calendar existence.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// `DD.MM.YYYY` or does not denote an existing calendar date.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let value = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        match NaiveDate::parse_from_str(&value, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { value, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Get the birthday as the original `DD.MM.YYYY` string.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
