//! BirthdayDate value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Day and month may drop the leading zero; the year is always four digits.
static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})\.([0-9]{1,2})\.([0-9]{4})$")
        .expect("birthday pattern is a valid regex")
});

/// Display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date entered as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::BirthdayDate;
///
/// let birthday = BirthdayDate::parse("10.06.1990").unwrap();
/// assert_eq!(birthday.to_string(), "10.06.1990");
/// assert!(BirthdayDate::parse("31.02.1990").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthdayDate(NaiveDate);

impl BirthdayDate {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text does not match
    /// the pattern or names a date that does not exist.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let invalid = || ValidationError::InvalidBirthday(raw.to_string());

        let caps = BIRTHDAY_PATTERN.captures(raw).ok_or_else(invalid)?;
        let day: u32 = caps[1].parse().map_err(|_| invalid())?;
        let month: u32 = caps[2].parse().map_err(|_| invalid())?;
        let year: i32 = caps[3].parse().map_err(|_| invalid())?;

        if year < 1 {
            return Err(invalid());
        }

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// The stored date of birth.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The date this birthday falls on in `year`.
    ///
    /// A 29 February birthday is observed on 1 March in non-leap years.
    /// Returns `None` only when `year` is outside the supported date range.
    pub fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.0.month(), self.0.day());
        NaiveDate::from_ymd_opt(year, month, day).or_else(|| {
            if month == 2 && day == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }
}

impl Serialize for BirthdayDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BirthdayDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BirthdayDate::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for BirthdayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = BirthdayDate::parse("10.06.2024").unwrap();
        assert_eq!(birthday.date(), ymd(2024, 6, 10));
    }

    #[test]
    fn test_birthday_accepts_unpadded_day_and_month() {
        let birthday = BirthdayDate::parse("1.6.1990").unwrap();
        assert_eq!(birthday.date(), ymd(1990, 6, 1));
        assert_eq!(birthday.to_string(), "01.06.1990");
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(BirthdayDate::parse("").is_err());
        assert!(BirthdayDate::parse("2024-06-10").is_err());
        assert!(BirthdayDate::parse("10/06/2024").is_err());
        assert!(BirthdayDate::parse("10.06.24").is_err());
        assert!(BirthdayDate::parse("10.06.20245").is_err());
        assert!(BirthdayDate::parse("100.06.2024").is_err());
        assert!(BirthdayDate::parse(" 10.06.2024").is_err());
        assert!(BirthdayDate::parse("10.06.2024 ").is_err());
    }

    #[test]
    fn test_birthday_validates_calendar() {
        assert!(BirthdayDate::parse("31.02.2024").is_err());
        assert!(BirthdayDate::parse("00.01.2024").is_err());
        assert!(BirthdayDate::parse("01.13.2024").is_err());
        assert!(BirthdayDate::parse("29.02.2023").is_err());
        assert!(BirthdayDate::parse("29.02.2024").is_ok());
        assert!(BirthdayDate::parse("01.01.0000").is_err());
    }

    #[test]
    fn test_occurrence_in_other_year() {
        let birthday = BirthdayDate::parse("15.08.1985").unwrap();
        assert_eq!(birthday.occurrence_in(2025), Some(ymd(2025, 8, 15)));
    }

    #[test]
    fn test_leap_day_observed_on_march_first() {
        let birthday = BirthdayDate::parse("29.02.2000").unwrap();
        assert_eq!(birthday.occurrence_in(2023), Some(ymd(2023, 3, 1)));
        assert_eq!(birthday.occurrence_in(2024), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = BirthdayDate::parse("5.3.1999").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"05.03.1999\"");

        let back: BirthdayDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, birthday);
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<BirthdayDate, _> = serde_json::from_str("\"32.01.2000\"");
        assert!(result.is_err());
    }
}
