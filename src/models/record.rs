//! Record model representing a single contact.

use crate::domain::{BirthdayDate, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact: an immutable name, an ordered list of phones, and an optional birthday.
///
/// Phones may repeat. Removal drops every matching entry, while editing
/// only touches the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: ContactName,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<BirthdayDate>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// The name this record is stored under.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// All phones in the order they were added.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }

    pub fn birthday(&self) -> Option<&BirthdayDate> {
        self.birthday.as_ref()
    }

    /// Validate `raw` and append it to the phone list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` and leaves the list untouched
    /// if `raw` is not a valid phone number.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        debug!(contact = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every phone equal to `raw`. Missing phones are ignored.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|phone| phone.as_str() != raw);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// When no phone equals `old` this does nothing and still returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` matches and `new` is
    /// invalid; the list is left unchanged in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let Some(slot) = self.phones.iter_mut().find(|phone| phone.as_str() == old) else {
            return Ok(());
        };
        *slot = PhoneNumber::new(new)?;
        debug!(contact = %self.name, old, new, "Edited phone");
        Ok(())
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|phone| phone.as_str() == raw)
    }

    /// Validate `raw` and set it as the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` and keeps the old birthday
    /// if `raw` is not a valid `DD.MM.YYYY` date.
    pub fn add_birthday(&mut self, raw: &str) -> Result<(), ValidationError> {
        let birthday = BirthdayDate::parse(raw)?;
        self.birthday = Some(birthday);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");

        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
