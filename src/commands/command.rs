//! Parsing a line of user input into a [`Command`].

use crate::error::{CommandError, CommandResult};

pub const USAGE_NAME_AND_PHONE: &str = "Give me name and phone please.";
pub const USAGE_NAME_AND_BIRTHDAY: &str = "Give me name and birthday please.";
pub const USAGE_NAME: &str = "Please provide a name.";

/// One user request, with its arguments already checked for presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Menu,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
    Unknown(String),
}

/// Split `line` on whitespace and build a [`Command`].
///
/// The command word is case-insensitive; arguments are kept verbatim and
/// surplus arguments are ignored. Blank input yields `Ok(None)`.
///
/// # Errors
///
/// Returns `CommandError::Usage` when a known command lacks a required argument.
pub fn parse_input(line: &str) -> CommandResult<Option<Command>> {
    let mut tokens = line.split_whitespace();
    let Some(word) = tokens.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = tokens.collect();

    let command = match word.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "menu" => Command::Menu,
        "all" => Command::All,
        "birthdays" => Command::Birthdays,
        "close" | "exit" => Command::Exit,
        "add" => {
            let (name, phone) = two_args(&args, USAGE_NAME_AND_PHONE)?;
            Command::Add { name, phone }
        }
        "change" => {
            let (name, phone) = two_args(&args, USAGE_NAME_AND_PHONE)?;
            Command::Change { name, phone }
        }
        "add-birthday" => {
            let (name, birthday) = two_args(&args, USAGE_NAME_AND_BIRTHDAY)?;
            Command::AddBirthday { name, birthday }
        }
        "phone" => Command::Phone {
            name: one_arg(&args)?,
        },
        "show-birthday" => Command::ShowBirthday {
            name: one_arg(&args)?,
        },
        "delete" => Command::Delete {
            name: one_arg(&args)?,
        },
        _ => Command::Unknown(word.to_string()),
    };

    Ok(Some(command))
}

fn one_arg(args: &[&str]) -> CommandResult<String> {
    args.first()
        .map(|s| s.to_string())
        .ok_or(CommandError::Usage(USAGE_NAME))
}

fn two_args(args: &[&str], usage: &'static str) -> CommandResult<(String, String)> {
    match args {
        [first, second, ..] => Ok((first.to_string(), second.to_string())),
        _ => Err(CommandError::Usage(usage)),
    }
}
