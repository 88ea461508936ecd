//! Test fixtures and sample data.
//!
//! Reusable records, stores, and dates so each test only states what it checks.

use chrono::NaiveDate;
use contact_assistant::services::FixedClock;
use contact_assistant::{Assistant, BirthdayScheduler, ContactName, ContactStore, Record};

/// Build a date, panicking on invalid input.
#[allow(dead_code)]
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// 2024-06-05, a Wednesday.
#[allow(dead_code)]
pub fn wednesday() -> NaiveDate {
    ymd(2024, 6, 5)
}

/// Create a record with the given phones and optional birthday.
pub fn sample_record(name: &str, phones: &[&str], birthday: Option<&str>) -> Record {
    let mut record = Record::new(ContactName::new(name).expect("valid fixture name"));
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    if let Some(birthday) = birthday {
        record.add_birthday(birthday).expect("valid fixture birthday");
    }
    record
}

/// Create a store holding contacts with only a birthday set.
#[allow(dead_code)]
pub fn store_with_birthdays(entries: &[(&str, &str)]) -> ContactStore {
    let mut store = ContactStore::new();
    for (name, birthday) in entries {
        store.add_record(sample_record(name, &[], Some(birthday)));
    }
    store
}

/// An assistant whose "today" is fixed.
#[allow(dead_code)]
pub fn assistant_on(today: NaiveDate) -> Assistant {
    Assistant::new(BirthdayScheduler::default(), Box::new(FixedClock(today)))
}
