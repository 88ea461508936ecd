//! Text command interface.
//!
//! `command` turns a line into a [`Command`]; `assistant` executes it
//! against the session's contact store.

pub mod assistant;
pub mod command;

pub use assistant::{Assistant, Reply, GOODBYE, MENU, WELCOME};
pub use command::{parse_input, Command};
