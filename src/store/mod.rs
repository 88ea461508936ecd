//! Contact storage.
//!
//! The store lives for the whole session and is owned by the command
//! dispatcher; nothing is persisted between runs.

mod contact_store;

pub use contact_store::ContactStore;
