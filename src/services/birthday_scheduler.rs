//! Upcoming-birthday report.
//!
//! Collects contacts whose next birthday falls within a window starting
//! today and groups them by the weekday they should be congratulated on.
//! Birthdays on a weekend are moved to the following Monday.

use crate::store::ContactStore;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// Days after today that the default report looks ahead.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Contacts with an upcoming birthday, grouped by notification weekday.
///
/// Buckets appear in the order they first received a contact, and names
/// inside a bucket follow store order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingBirthdays {
    buckets: IndexMap<Weekday, Vec<String>>,
}

impl UpcomingBirthdays {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of weekday buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Names to congratulate on `weekday`.
    pub fn get(&self, weekday: Weekday) -> Option<&[String]> {
        self.buckets.get(&weekday).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[String])> {
        self.buckets.iter().map(|(day, names)| (*day, names.as_slice()))
    }

    fn push(&mut self, weekday: Weekday, name: &str) {
        self.buckets
            .entry(weekday)
            .or_default()
            .push(name.to_string());
    }
}

impl fmt::Display for UpcomingBirthdays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (day, names)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", weekday_name(day), names.join(", "))?;
        }
        Ok(())
    }
}

/// English full name of a weekday.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Weekday a birthday on `date` is reported under.
pub fn notification_weekday(date: NaiveDate) -> Weekday {
    match date.weekday() {
        Weekday::Sat | Weekday::Sun => Weekday::Mon,
        day => day,
    }
}

/// Builds upcoming-birthday reports for a fixed look-ahead window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthdayScheduler {
    window_days: u32,
}

impl Default for BirthdayScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}

impl BirthdayScheduler {
    /// Look ahead `window_days` days; today and the last day are both included.
    pub fn new(window_days: u32) -> Self {
        Self { window_days }
    }

    pub fn window_days(&self) -> u32 {
        self.window_days
    }

    /// Next occurrence of each stored birthday, bucketed by notification weekday.
    ///
    /// A birthday that already passed this year is taken from next year.
    pub fn upcoming(&self, store: &ContactStore, today: NaiveDate) -> UpcomingBirthdays {
        let window_end = today
            .checked_add_days(Days::new(u64::from(self.window_days)))
            .unwrap_or(NaiveDate::MAX);

        let mut report = UpcomingBirthdays::default();

        for record in store.list() {
            let Some(birthday) = record.birthday() else {
                continue;
            };

            let next = match birthday.occurrence_in(today.year()) {
                Some(date) if date >= today => Some(date),
                _ => birthday.occurrence_in(today.year() + 1),
            };
            let Some(next) = next else {
                continue;
            };

            if next >= today && next <= window_end {
                let weekday = notification_weekday(next);
                debug!(contact = record.name(), date = %next, ?weekday, "Upcoming birthday");
                report.push(weekday, record.name());
            }
        }

        report
    }
}

/// Birthdays in the seven days starting `today`.
pub fn upcoming_birthdays(store: &ContactStore, today: NaiveDate) -> UpcomingBirthdays {
    BirthdayScheduler::default().upcoming(store, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ContactName;
    use crate::models::Record;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn store_with(entries: &[(&str, &str)]) -> ContactStore {
        let mut store = ContactStore::new();
        for (name, birthday) in entries {
            let mut rec = Record::new(ContactName::new(*name).unwrap());
            rec.add_birthday(birthday).unwrap();
            store.add_record(rec);
        }
        store
    }

    #[test]
    fn test_notification_weekday_rolls_weekend() {
        // 2024-06-08 is a Saturday, 2024-06-09 a Sunday.
        assert_eq!(notification_weekday(ymd(2024, 6, 8)), Weekday::Mon);
        assert_eq!(notification_weekday(ymd(2024, 6, 9)), Weekday::Mon);
        assert_eq!(notification_weekday(ymd(2024, 6, 7)), Weekday::Fri);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Mon), "Monday");
        assert_eq!(weekday_name(Weekday::Sun), "Sunday");
    }

    #[test]
    fn test_monday_birthday() {
        let store = store_with(&[("Alice", "10.06.2024")]);
        let report = upcoming_birthdays(&store, ymd(2024, 6, 5));
        assert_eq!(report.get(Weekday::Mon), Some(&["Alice".to_string()][..]));
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_window_is_inclusive_on_both_ends() {
        // Today 2024-06-05 (Wed); window ends 2024-06-12 (Wed).
        let store = store_with(&[
            ("Today", "05.06.1990"),
            ("LastDay", "12.06.1990"),
            ("TooLate", "13.06.1990"),
            ("Yesterday", "04.06.1990"),
        ]);
        let report = upcoming_birthdays(&store, ymd(2024, 6, 5));

        assert_eq!(
            report.get(Weekday::Wed),
            Some(&["Today".to_string(), "LastDay".to_string()][..])
        );
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn test_passed_birthday_rolls_into_next_year() {
        // 2025-01-01 is a Wednesday.
        let store = store_with(&[("NewYear", "01.01.1980")]);
        let report = upcoming_birthdays(&store, ymd(2024, 12, 28));
        assert_eq!(report.get(Weekday::Wed), Some(&["NewYear".to_string()][..]));
    }

    #[test]
    fn test_weekend_birthdays_grouped_under_monday() {
        let store = store_with(&[
            ("Sat", "08.06.2000"),
            ("Mon", "10.06.2000"),
            ("Sun", "09.06.2000"),
        ]);
        let report = upcoming_birthdays(&store, ymd(2024, 6, 5));
        let names = report.get(Weekday::Mon).unwrap();
        assert_eq!(names, &["Sat", "Mon", "Sun"]);
    }

    #[test]
    fn test_empty_when_nothing_upcoming() {
        let mut store = store_with(&[("Far", "01.12.1990")]);
        store.add_record(Record::new(ContactName::new("NoBirthday").unwrap()));

        let report = upcoming_birthdays(&store, ymd(2024, 6, 5));
        assert!(report.is_empty());
        assert_eq!(report.to_string(), "");
    }

    #[test]
    fn test_leap_day_birthday_in_non_leap_year() {
        // 2023-03-01 is a Wednesday.
        let store = store_with(&[("Leap", "29.02.2000")]);
        let report = upcoming_birthdays(&store, ymd(2023, 2, 27));
        assert_eq!(report.get(Weekday::Wed), Some(&["Leap".to_string()][..]));
    }

    #[test]
    fn test_custom_window() {
        let store = store_with(&[("Soon", "06.06.1990"), ("Later", "20.06.1990")]);
        let scheduler = BirthdayScheduler::new(1);
        let report = scheduler.upcoming(&store, ymd(2024, 6, 5));
        assert_eq!(report.get(Weekday::Thu), Some(&["Soon".to_string()][..]));
        assert_eq!(report.len(), 1);

        let only_today = BirthdayScheduler::new(0).upcoming(&store, ymd(2024, 6, 6));
        assert_eq!(only_today.get(Weekday::Thu), Some(&["Soon".to_string()][..]));
    }

    #[test]
    fn test_display_renders_buckets_in_first_seen_order() {
        // Thu 2024-06-06, Mon 2024-06-10, Thu again.
        let store = store_with(&[
            ("Ann", "06.06.1991"),
            ("Ben", "10.06.1992"),
            ("Cat", "06.06.1993"),
        ]);
        let report = upcoming_birthdays(&store, ymd(2024, 6, 5));
        assert_eq!(report.to_string(), "Thursday: Ann, Cat\nMonday: Ben");
    }
}
