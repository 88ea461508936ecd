//! Data models for the contact assistant.
//!
//! A `Record` is one contact: a name, its phones, and an optional birthday.

pub mod record;

pub use record::Record;
