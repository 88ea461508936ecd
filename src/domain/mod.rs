//! Domain value objects and types.
//!
//! Type-safe wrappers for contact names, phone numbers, and birthdays.
//! Each one validates at construction time, so invalid data never reaches
//! a `Record`.

pub mod birthday;
pub mod contact_name;
pub mod errors;
pub mod phone;

pub use birthday::BirthdayDate;
pub use contact_name::ContactName;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
