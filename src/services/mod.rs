//! Application service layer.
//!
//! Services hold the logic that works across the whole store, such as the
//! weekly birthday report, plus the clock they read "today" from.

mod birthday_scheduler;
mod clock;

pub use birthday_scheduler::{
    notification_weekday, upcoming_birthdays, weekday_name, BirthdayScheduler,
    UpcomingBirthdays, DEFAULT_WINDOW_DAYS,
};
pub use clock::{Clock, FixedClock, SystemClock};
