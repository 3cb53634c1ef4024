//! End-to-end tests for command handlers over a live address book.
//!
//! These walk the handler layer the way a session would: create contacts,
//! query them, mutate them, and check the exact reply strings.

use contact_assistant::commands;
use contact_assistant::domain::PhoneNumber;
use contact_assistant::{AddressBook, BookError, CommandError, Record};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// Full contact lifecycle: add, query, set birthday, change phone, delete.
#[test]
fn test_contact_lifecycle() {
    let mut book = AddressBook::new();

    // CREATE
    let reply = commands::add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
    assert_eq!(reply, "Contact added.");

    // READ
    let reply = commands::show_phone(&args(&["John"]), &book).unwrap();
    assert_eq!(reply, "1234567890");

    // BIRTHDAY
    let reply = commands::add_birthday(&args(&["John", "15.08.1990"]), &mut book).unwrap();
    assert_eq!(reply, "Birthday added to the contact.");
    let reply = commands::show_birthday(&args(&["John"]), &book).unwrap();
    assert_eq!(reply, "15.08.1990");

    // UPDATE
    let reply =
        commands::change_contact(&args(&["John", "1234567890", "0987654321"]), &mut book).unwrap();
    assert_eq!(reply, "Contact updated.");
    let reply = commands::show_phone(&args(&["John"]), &book).unwrap();
    assert_eq!(reply, "0987654321");

    // DELETE (book-level; not exposed as a command)
    let removed = book.delete("john").unwrap();
    assert_eq!(removed.name(), "John");
    assert_eq!(
        book.find("John").unwrap_err(),
        BookError::RecordNotFound("John".to_string())
    );
}

/// Names are case-insensitive keys: any case variant finds the same record,
/// and a same-name-different-case add collapses to one entry.
#[test]
fn test_case_insensitive_identity() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();

    assert_eq!(
        commands::show_phone(&args(&["JOHN"]), &book).unwrap(),
        "1111111111"
    );
    assert_eq!(
        commands::show_phone(&args(&["john"]), &book).unwrap(),
        "1111111111"
    );

    commands::add_contact(&args(&["JOHN", "2222222222"]), &mut book).unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(
        commands::show_phone(&args(&["John"]), &book).unwrap(),
        "2222222222"
    );
}

/// Re-adding an existing name overwrites the whole record, birthday included.
#[test]
fn test_add_overwrites_existing_record() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["John", "1111111111"]), &mut book).unwrap();
    commands::add_birthday(&args(&["John", "15.08.1990"]), &mut book).unwrap();

    commands::add_contact(&args(&["John", "2222222222"]), &mut book).unwrap();
    assert_eq!(
        commands::show_birthday(&args(&["John"]), &book).unwrap(),
        "Birthday not found."
    );
}

/// Failed operations leave the book unchanged.
#[test]
fn test_failed_operations_leave_state_unchanged() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();

    // Bad phone format on change: record keeps its phone.
    let err = commands::change_contact(&args(&["John", "1234567890", "bad"]), &mut book)
        .unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert_eq!(
        commands::show_phone(&args(&["John"]), &book).unwrap(),
        "1234567890"
    );

    // Bad date on add-birthday: no birthday stored.
    let err = commands::add_birthday(&args(&["John", "30.02.1999"]), &mut book).unwrap_err();
    assert!(matches!(err, CommandError::Validation(_)));
    assert_eq!(
        commands::show_birthday(&args(&["John"]), &book).unwrap(),
        "Birthday not found."
    );
}

/// Arity failures are distinct from validation failures.
#[test]
fn test_arity_errors_are_distinct() {
    let mut book = AddressBook::new();

    let err = commands::add_contact(&args(&["John"]), &mut book).unwrap_err();
    assert!(matches!(err, CommandError::Arity { expected: 2, got: 1 }));

    let err = commands::change_contact(&args(&["John", "1234567890"]), &mut book).unwrap_err();
    assert!(matches!(err, CommandError::Arity { expected: 3, got: 2 }));

    let err = commands::show_phone(&args(&[]), &book).unwrap_err();
    assert!(matches!(err, CommandError::Arity { expected: 1, got: 0 }));
}

/// `all` lists every record in insertion order.
#[test]
fn test_show_all_lists_in_insertion_order() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["Zoe", "1111111111"]), &mut book).unwrap();
    commands::add_contact(&args(&["Adam", "2222222222"]), &mut book).unwrap();

    let reply = commands::show_all(&book).unwrap();
    assert_eq!(
        reply,
        "Contact name: Zoe, phones: 1111111111\nContact name: Adam, phones: 2222222222"
    );
}

/// `birthdays` reports past-year literal dates as upcoming (the stored date,
/// birth year included, is compared against today + 7 days).
#[test]
fn test_birthdays_literal_date_semantics() {
    let mut book = AddressBook::new();
    assert_eq!(
        commands::birthdays(&book).unwrap(),
        "No upcoming birthdays in the next week."
    );

    commands::add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
    commands::add_birthday(&args(&["John", "15.08.1990"]), &mut book).unwrap();

    // 1990 is before any present-day window end, so the literal comparison
    // always includes it.
    let reply = commands::birthdays(&book).unwrap();
    assert_eq!(reply, "Contact name: John, phones: 1234567890, Birthday: 15.08.1990");

    // A far-future birthday never falls inside the window.
    commands::add_contact(&args(&["Jane", "0987654321"]), &mut book).unwrap();
    commands::add_birthday(&args(&["Jane", "15.08.2990"]), &mut book).unwrap();
    let reply = commands::birthdays(&book).unwrap();
    assert!(reply.contains("John"));
    assert!(!reply.contains("Jane"));
}

/// Phones can repeat within a record and keep insertion order.
#[test]
fn test_duplicate_phones_preserved() {
    let mut book = AddressBook::new();
    commands::add_contact(&args(&["John", "1234567890"]), &mut book).unwrap();
    book.find_mut("John")
        .unwrap()
        .add_phone(PhoneNumber::new("1234567890").unwrap());

    assert_eq!(
        commands::show_phone(&args(&["John"]), &book).unwrap(),
        "1234567890; 1234567890"
    );
}

/// Direct record construction mirrors what `add` does.
#[test]
fn test_manual_record_insertion() {
    let mut book = AddressBook::new();
    let mut record = Record::new("Ada");
    record.add_phone(PhoneNumber::new("5555555555").unwrap());
    book.add_record(record);

    assert_eq!(
        commands::show_phone(&args(&["ada"]), &book).unwrap(),
        "5555555555"
    );
}
