//! Addrbook Service - an async address book storage service with pluggable backends.
//!
//! This library stores and serves structured address book entries (a person's
//! name plus addresses, phone numbers, fax numbers, and emails) keyed by an
//! opaque nickname, through a uniform asynchronous CRUD contract over
//! interchangeable backends.
//!
//! # Architecture
//!
//! - **models**: Typed entry model and its document conversion layer
//! - **error**: Custom error types for precise error handling
//! - **repositories**: Storage backend contract, in-memory and filesystem
//!   implementations, and the backend factory
//! - **validation**: JSON Schema gate for incoming documents
//! - **services**: Service layer tying validator, model, and backend together
//! - **config**: Configuration management from environment variables
//! - **logging**: Tracing subscriber initialization

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod repositories;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{ConfigError, ConfigResult, StoreError, StoreResult};
pub use models::{Address, AddressEntry, AddressKind, CodeValue, Email, Phone};
pub use repositories::{
    create_repository, AddressBookRepository, BackendConfig, FilesystemRepository,
    InMemoryRepository,
};
pub use services::AddressBookService;
pub use validation::{DocumentValidator, SchemaValidator};
