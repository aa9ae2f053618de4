//! Data structures for address book entries.

mod entry;

pub use entry::{Address, AddressEntry, AddressKind, CodeValue, Email, Phone};
