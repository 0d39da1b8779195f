//! Component layer of the dbnav table browser.
//!
//! This crate provides the host-independent controllers of the browser pages:
//! - SelectionController for the row checkboxes and the action bar
//! - QueryExecutor for the SQL view
//! - RowForm for the insert and edit views
//! - TableNavigator for sorting and table-level actions
//! - Views that render results and feedback panels
//! - The `Page` and `Backend` seams to the host and the server

pub mod backend;
pub mod model;
pub mod page;
pub mod views;

// Re-export commonly used types
pub use backend::{Backend, HttpBackend};
pub use model::{
    Completion, DeleteDialog, ExecutorPhase, FormCompletion, PendingQuery, QueryExecutor,
    ResultsArea, RowForm, SelectionController, TableNavigator,
};
pub use page::{ElementId, MemoryPage, Page};
pub use views::{Panel, PanelKind, ResultRenderer, ResultTable};
