//! Core types for the dbnav table browser controller.
//!
//! This crate contains shared data structures that are used across all dbnav crates:
//! - Row identifiers and the checked-row selection
//! - Wire responses and execution outcomes
//! - Navigation intents (edit, delete, content)
//! - Configuration types
//! - Error types

mod config;
mod error;
mod navigation;
mod outcome;
mod row;
mod selection;

pub use config::{config_dir, config_path, ClientConfig};
pub use error::{ConfigError, NavigationError, TransportError};
pub use navigation::{DeleteRequest, Navigation, SortOrder};
pub use outcome::{display_value, ExecutionOutcome, FormResponse, QueryRequest, QueryResponse};
pub use row::RowId;
pub use selection::{ActionAvailability, RowSelection};
