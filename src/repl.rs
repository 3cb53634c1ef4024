//! Interactive line protocol.
//!
//! One line per turn: the first whitespace-separated token is the command
//! (case-insensitive), the rest are positional arguments. The loop is
//! generic over reader and writer so scripted sessions can be tested
//! without a terminal. Logging goes to stderr elsewhere; the writer here
//! carries only protocol output.

use crate::book::AddressBook;
use crate::commands;
use crate::error::{CommandError, CommandResult};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Startup banner.
pub const BANNER: &str = "Welcome to the assistant bot!";

/// Farewell printed on `close`/`exit`.
pub const FAREWELL: &str = "Good bye!";

/// What the dispatcher decided to do with one input line.
enum Outcome {
    /// A handler ran and produced a result to print.
    Reply(CommandResult),
    /// The session should end.
    Exit,
}

/// Split a line into a lowercased command and its positional arguments.
///
/// Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}

/// Translate a command error into its fixed user-facing string.
///
/// Validation and not-found failures share one message; arity failures get
/// their own. No error ever ends the session.
pub fn render_error(err: &CommandError) -> String {
    match err {
        CommandError::Arity { .. } => "Enter valid input.".to_string(),
        CommandError::Validation(_) | CommandError::NotFound(_) => {
            "Invalid input or contact not found.".to_string()
        }
    }
}

/// Route one parsed line to its handler.
fn dispatch(command: &str, args: &[String], book: &mut AddressBook) -> Outcome {
    debug!(command, argc = args.len(), "dispatching");
    match command {
        "close" | "exit" => Outcome::Exit,
        "hello" => Outcome::Reply(commands::hello()),
        "add" => Outcome::Reply(commands::add_contact(args, book)),
        "change" => Outcome::Reply(commands::change_contact(args, book)),
        "phone" => Outcome::Reply(commands::show_phone(args, book)),
        "all" => Outcome::Reply(commands::show_all(book)),
        "add-birthday" => Outcome::Reply(commands::add_birthday(args, book)),
        "show-birthday" => Outcome::Reply(commands::show_birthday(args, book)),
        "birthdays" => Outcome::Reply(commands::birthdays(book)),
        _ => Outcome::Reply(Ok("Invalid command.".to_string())),
    }
}

/// Run one interactive session over the given reader and writer.
///
/// Reads until `close`/`exit` or end of input. Blank lines re-prompt.
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    prompt: &str,
) -> io::Result<()> {
    let mut book = AddressBook::new();
    info!("address book initialized");

    writeln!(output, "{}", BANNER)?;
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            // End of input: leave quietly, same as an explicit exit.
            writeln!(output, "{}", FAREWELL)?;
            break;
        }

        let Some((command, args)) = parse_input(&line) else {
            continue;
        };

        match dispatch(&command, &args, &mut book) {
            Outcome::Exit => {
                writeln!(output, "{}", FAREWELL)?;
                break;
            }
            Outcome::Reply(Ok(reply)) => writeln!(output, "{}", reply)?,
            Outcome::Reply(Err(err)) => writeln!(output, "{}", render_error(&err))?,
        }
    }

    info!("session ended");
    Ok(())
}
