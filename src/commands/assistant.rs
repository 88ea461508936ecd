//! Command dispatcher.
//!
//! The [`Assistant`] owns the session's contact store and turns each parsed
//! command into exactly one reply. Every error is mapped to a message here,
//! so nothing a user types can end the session except `close`/`exit`.

use super::command::{parse_input, Command};
use crate::config::Config;
use crate::domain::ContactName;
use crate::error::{CommandError, CommandResult, StoreError};
use crate::models::Record;
use crate::services::{BirthdayScheduler, Clock, FixedClock, SystemClock};
use crate::store::ContactStore;
use tracing::{debug, warn};

pub const WELCOME: &str = "Welcome to the assistant bot!\nType 'menu' to see commands.";
pub const GREETING: &str = "How can I help you?";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_COMMAND: &str = "Invalid command.";
pub const NO_BIRTHDAYS: &str = "No birthdays in the next week.";
pub const EMPTY_BOOK: &str = "The contact list is empty";

pub const MENU: &str = "\
Available Commands:
- hello: > Print a welcome message.
- add [name] [phone]: > Add a new contact with a name and phone number.
- change [name] [new_phone]: > Change phone number for an existing contact.
- phone [name]: > Show the phone number for a contact.
- all: Show all contacts.
- add-birthday [name] [birthday]: > Add a birthday (DD.MM.YYYY) for a contact.
- show-birthday [name]: > Show the birthday for a contact.
- birthdays: > Show birthdays in the next week.
- delete [name]: > Delete a contact.
- menu: > Show the available commands and their explanations.
- close or exit: > Exit the program.";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text (if any) and read the next line.
    Continue(String),
    /// Print the text and end the session.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Exit(text) => text,
        }
    }
}

/// Session state: the contact store plus what the birthday report needs.
pub struct Assistant {
    store: ContactStore,
    scheduler: BirthdayScheduler,
    clock: Box<dyn Clock>,
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(BirthdayScheduler::default(), Box::new(SystemClock))
    }
}

impl Assistant {
    /// Start a session with an empty store.
    pub fn new(scheduler: BirthdayScheduler, clock: Box<dyn Clock>) -> Self {
        Self {
            store: ContactStore::new(),
            scheduler,
            clock,
        }
    }

    /// Start a session using the configured window and date override.
    pub fn from_config(config: &Config) -> Self {
        let clock: Box<dyn Clock> = match config.today_override {
            Some(date) => Box::new(FixedClock(date)),
            None => Box::new(SystemClock),
        };
        Self::new(BirthdayScheduler::new(config.birthday_window_days), clock)
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    /// Parse and run one line of input.
    ///
    /// Blank lines produce an empty `Continue`.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_input(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Reply::Continue(String::new()),
            Err(err) => Reply::Continue(self.report(err)),
        }
    }

    /// Run an already parsed command.
    pub fn execute(&mut self, command: Command) -> Reply {
        debug!(?command, "Executing command");
        let result = match command {
            Command::Exit => return Reply::Exit(GOODBYE.to_string()),
            Command::Hello => Ok(GREETING.to_string()),
            Command::Menu => Ok(MENU.to_string()),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change { name, phone } => self.change_contact(&name, &phone),
            Command::Phone { name } => self.show_phone(&name),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday),
            Command::ShowBirthday { name } => self.show_birthday(&name),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Delete { name } => self.delete_contact(&name),
            Command::Unknown(_) => Ok(INVALID_COMMAND.to_string()),
        };

        match result {
            Ok(text) => Reply::Continue(text),
            Err(err) => Reply::Continue(self.report(err)),
        }
    }

    /// Map a command error to the single line shown to the user.
    fn report(&self, err: CommandError) -> String {
        match err {
            CommandError::Validation(e) => {
                warn!(input = e.input().unwrap_or_default(), "Validation failed: {}", e);
                e.to_string()
            }
            CommandError::Store(StoreError::NotFound(name)) => {
                debug!(contact = %name, "Contact not found");
                format!("Contact {} not found.", name)
            }
            CommandError::Usage(usage) => usage.to_string(),
        }
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.store
            .find_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.store
            .find(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()).into())
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if let Some(record) = self.store.find_mut(name) {
            record.add_phone(phone)?;
            return Ok(format!("Phone number added for contact {}.", name));
        }

        // Validate before inserting so a bad phone leaves no empty contact behind
        let mut record = Record::new(ContactName::new(name)?);
        record.add_phone(phone)?;
        self.store.add_record(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, new_phone: &str) -> CommandResult<String> {
        let record = self.record_mut(name)?;
        let Some(current) = record.first_phone().map(|p| p.as_str().to_string()) else {
            return Ok(format!("No phone number found for {}.", name));
        };
        record.edit_phone(&current, new_phone)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        Ok(match record.first_phone() {
            Some(phone) => phone.to_string(),
            None => format!("No phone number found for {}.", name),
        })
    }

    fn show_all(&self) -> String {
        if self.store.is_empty() {
            return EMPTY_BOOK.to_string();
        }
        self.store
            .list()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<String> {
        self.record_mut(name)?.add_birthday(birthday)?;
        Ok("Birthday added.".to_string())
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        Ok(match record.birthday() {
            Some(birthday) => format!("Birthday for {}: {}", name, birthday),
            None => format!("No birthday found for {}.", name),
        })
    }

    fn birthdays(&self) -> String {
        let report = self.scheduler.upcoming(&self.store, self.clock.today());
        if report.is_empty() {
            NO_BIRTHDAYS.to_string()
        } else {
            report.to_string()
        }
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.store.delete(name)?;
        Ok(format!("Contact {} deleted.", name))
    }
}
