//! Contact Assistant - an interactive command-line contact book.
//!
//! Keeps names, phone numbers, and birthdays in memory for the length of a
//! session and reports whose birthday comes up in the next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (names, phones, birthdays)
//! - **models**: The contact `Record`
//! - **store**: In-memory `ContactStore`
//! - **services**: Upcoming-birthday scheduling and the clock it reads
//! - **commands**: Input parsing and the command dispatcher
//! - **repl**: The interactive line loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod services;
pub mod store;

pub use commands::{Assistant, Command, Reply};
pub use config::Config;
pub use domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StoreError};
pub use models::Record;
pub use services::{upcoming_birthdays, BirthdayScheduler, UpcomingBirthdays};
pub use store::ContactStore;
