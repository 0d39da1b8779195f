//! Component model for the dbnav table browser.
//!
//! Each component owns the state of the page elements it drives (action
//! bar, delete dialog, query input, results area, form error). All types
//! are host-independent for testability.

mod form;
mod query;
mod selection;
mod table;

pub use form::{FormCompletion, RowForm};
pub use query::{Completion, ExecutorPhase, PendingQuery, QueryExecutor, ResultsArea};
pub use selection::{DeleteDialog, SelectionController};
pub use table::TableNavigator;
