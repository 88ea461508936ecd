//! Shared helpers for integration tests.

pub mod fixtures;

use contact_assistant::Record;

/// Assert that a record's phones are exactly `expected`, in order.
#[allow(dead_code)]
pub fn assert_phones(record: &Record, expected: &[&str]) {
    let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
    assert_eq!(phones, expected, "unexpected phones for {}", record.name());
}
