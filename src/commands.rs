//! Command handlers.
//!
//! Each handler takes the positional argument slice and the address book,
//! enforces its arity, validates values by constructing the domain types,
//! and returns either a success message or a [`CommandError`]. Translation
//! of errors into user-facing text happens in one place, in the REPL.

use crate::book::AddressBook;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use tracing::debug;

/// Check the positional argument count.
fn expect_args(args: &[String], expected: usize) -> Result<(), CommandError> {
    if args.len() != expected {
        return Err(CommandError::Arity {
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

/// `add <name> <phone>` — create a record with one phone and insert it.
///
/// Inserting under an existing name (case-insensitive) overwrites the prior
/// record.
pub fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    expect_args(args, 2)?;
    let (name, phone) = (&args[0], &args[1]);
    let mut record = Record::new(name.clone());
    record.add_phone(PhoneNumber::new(phone.clone())?);
    book.add_record(record);
    debug!(name = %name, "contact added");
    Ok("Contact added.".to_string())
}

/// `change <name> <old_phone> <new_phone>` — replace one stored phone.
pub fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    expect_args(args, 3)?;
    let (name, old, new) = (&args[0], &args[1], &args[2]);
    let old = PhoneNumber::new(old.clone())?;
    let new = PhoneNumber::new(new.clone())?;
    book.find_mut(name)?.edit_phone(&old, new)?;
    debug!(name = %name, "contact updated");
    Ok("Contact updated.".to_string())
}

/// `phone <name>` — the record's phone numbers, joined with `"; "`.
pub fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    expect_args(args, 1)?;
    let record = book.find(&args[0])?;
    Ok(record
        .phones()
        .iter()
        .map(PhoneNumber::as_str)
        .collect::<Vec<_>>()
        .join("; "))
}

/// `add-birthday <name> <date>` — set the record's birthday.
pub fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    expect_args(args, 2)?;
    let (name, date) = (&args[0], &args[1]);
    let birthday = Birthday::new(date.clone())?;
    book.find_mut(name)?.add_birthday(birthday);
    debug!(name = %name, "birthday added");
    Ok("Birthday added to the contact.".to_string())
}

/// `show-birthday <name>` — the stored birthday, or a fixed message when the
/// record has none.
pub fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    expect_args(args, 1)?;
    let record = book.find(&args[0])?;
    Ok(match record.birthday() {
        Some(birthday) => birthday.to_string(),
        None => "Birthday not found.".to_string(),
    })
}

/// `birthdays` — summaries of records with a birthday on or before
/// `today + 7 days`, newline-joined.
pub fn birthdays(book: &AddressBook) -> CommandResult {
    let today = chrono::Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No upcoming birthdays in the next week.".to_string());
    }
    Ok(upcoming.join("\n"))
}

/// `all` — every record's summary in insertion order, newline-joined.
pub fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    Ok(book
        .iter()
        .map(|record| record.to_string())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `hello` — greeting.
pub fn hello() -> CommandResult {
    Ok("How can I help you?".to_string())
}
