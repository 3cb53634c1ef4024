//! Contact Assistant - an interactive command-line address book.
//!
//! This library implements a small assistant bot that keeps contacts (name,
//! phone numbers, optional birthday) in memory for the life of one process
//! run and answers lookup, listing, and upcoming-birthday queries over a
//! line protocol on stdin/stdout.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone number, birthday)
//! - **models**: The contact record and its mutation operations
//! - **book**: The owning name-to-record store with case-insensitive keys
//! - **commands**: Fixed-arity command handlers returning result-or-error
//! - **repl**: Line tokenization, dispatch, and central error translation
//! - **error**: Error taxonomy (validation / not-found / arity)
//! - **config**: Environment-based configuration

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, CommandResult, ConfigError};
pub use models::Record;
