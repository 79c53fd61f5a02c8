//! Contact Directory - a local, single-user contact book persisted to a JSON file.
//!
//! The library is the persistence and validation core. The interactive menu
//! in [`console`] is a thin front-end over it.
//!
//! # Architecture
//!
//! - **models**: The contact record, partial updates and listing sort keys
//! - **store**: In-memory collection with atomic snapshot persistence and corrupt-file recovery
//! - **validation**: Name, email and phone predicates
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Counters for saves, loads and recoveries
//! - **console**: Menu-driven text interface

pub mod config;
pub mod console;
pub mod error;
pub mod metrics;
pub mod models;
pub mod store;
pub mod validation;

pub use config::Config;
pub use console::Console;
pub use error::{ConfigError, StoreError, StoreResult, ValidationError};
pub use metrics::{Metrics, MetricsSummary, SaveTimer};
pub use models::{Contact, ContactUpdate, SortKey};
pub use store::{ContactStore, LoadRecovery};
pub use validation::{validate_email, validate_name, validate_phone, ContactInput};
