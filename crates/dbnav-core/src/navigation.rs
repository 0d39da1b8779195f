//! Navigation intents emitted by the table view.
//!
//! Every target is a path relative to the current table page plus
//! form-urlencoded query pairs. Resolving against the page URL is left to
//! the host.

use crate::row::RowId;

/// Immutable snapshot of a delete confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    rows: Vec<RowId>,
    redirect: String,
}

impl DeleteRequest {
    /// Build a request. Returns `None` when there is nothing to delete.
    pub fn new(rows: Vec<RowId>, redirect: impl Into<String>) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            rows,
            redirect: redirect.into(),
        })
    }

    pub fn rows(&self) -> &[RowId] {
        &self.rows
    }

    /// Page to return to once the server has deleted the rows.
    pub fn redirect(&self) -> &str {
        &self.redirect
    }

    /// Row ids as the comma-joined list the delete endpoint expects.
    pub fn rows_param(&self) -> String {
        self.rows
            .iter()
            .map(RowId::as_ref)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Sort order of the content view, as carried by its `sort` parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOrder {
    Ascending(String),
    Descending(String),
}

impl SortOrder {
    /// Parse a `sort` parameter; a leading `-` means descending.
    pub fn parse(param: &str) -> Option<Self> {
        match param.strip_prefix('-') {
            Some("") => None,
            Some(column) => Some(Self::Descending(column.to_string())),
            None if param.is_empty() => None,
            None => Some(Self::Ascending(param.to_string())),
        }
    }

    pub fn column(&self) -> &str {
        match self {
            Self::Ascending(column) | Self::Descending(column) => column,
        }
    }

    pub fn to_param(&self) -> String {
        match self {
            Self::Ascending(column) => column.clone(),
            Self::Descending(column) => format!("-{column}"),
        }
    }

    /// Order to apply when the header of `column` is clicked.
    ///
    /// Clicking the ascending column flips it to descending; any other click
    /// sorts ascending by the clicked column.
    pub fn next_for(current: Option<&SortOrder>, column: &str) -> SortOrder {
        match current {
            Some(Self::Ascending(c)) if c == column => Self::Descending(column.to_string()),
            _ => Self::Ascending(column.to_string()),
        }
    }
}

/// A page the table view can navigate to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Edit view for a single row.
    Edit { row: RowId },

    /// Server-side delete followed by a redirect.
    Delete(DeleteRequest),

    /// Table content, optionally sorted.
    Content { sort: Option<SortOrder> },

    /// Remove every row of the table.
    ClearTable,

    /// Drop the table.
    DropTable,
}

impl Navigation {
    /// Path relative to the table page.
    pub fn path(&self) -> &'static str {
        match self {
            Navigation::Edit { .. } => "edit",
            Navigation::Delete(_) => "delete",
            Navigation::Content { .. } => "content",
            Navigation::ClearTable => "delete_table_data",
            Navigation::DropTable => "drop_table",
        }
    }

    /// Query parameters in the order they are serialized.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Navigation::Edit { row } => vec![("row", row.to_string())],
            Navigation::Delete(request) => vec![
                ("rows", request.rows_param()),
                ("redirect", request.redirect().to_string()),
            ],
            Navigation::Content { sort: Some(order) } => vec![("sort", order.to_param())],
            Navigation::Content { sort: None } | Navigation::ClearTable | Navigation::DropTable => {
                Vec::new()
            }
        }
    }

    /// Whether the target modifies the database.
    pub fn writes(&self) -> bool {
        !matches!(self, Navigation::Content { .. })
    }
}
