//! Wire shapes of the query and form endpoints, and the outcome they classify into.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a query submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Reply of the query endpoint.
///
/// The server sends one of three shapes:
/// - `{"successfully": true, "data": [[..]], "column_names": [..], "rowcount": n}`
/// - `{"successfully": true, "data": null, "total_changes": n}`
/// - `{"successfully": false, "error": ".."}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub successfully: bool,

    #[serde(default)]
    pub data: Option<Vec<Vec<Value>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column_names: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rowcount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_changes: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl QueryResponse {
    /// A successful reply carrying rows.
    pub fn table(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            successfully: true,
            rowcount: Some(rows.len() as u64),
            column_names: Some(columns),
            data: Some(rows),
            ..Default::default()
        }
    }

    /// A successful reply for a statement without a result set.
    pub fn changes(total_changes: u64) -> Self {
        Self {
            successfully: true,
            total_changes: Some(total_changes),
            ..Default::default()
        }
    }

    /// A failed reply.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            successfully: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }

    /// Classify the reply. Every reply maps to exactly one outcome.
    pub fn into_outcome(self) -> ExecutionOutcome {
        if !self.successfully {
            return ExecutionOutcome::Failure {
                message: self.error.unwrap_or_default(),
            };
        }

        match self.data {
            Some(rows) => ExecutionOutcome::Tabular {
                columns: self.column_names.unwrap_or_default(),
                row_count: self.rowcount.unwrap_or(rows.len() as u64),
                rows,
            },
            None => ExecutionOutcome::Mutation {
                rows_changed: self.total_changes.unwrap_or(0),
            },
        }
    }
}

/// Classified result of one query submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutcome {
    /// The statement produced a result set.
    Tabular {
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
        row_count: u64,
    },

    /// The statement changed rows and produced nothing to display.
    Mutation { rows_changed: u64 },

    /// The server rejected the statement.
    Failure { message: String },
}

impl ExecutionOutcome {
    /// Check if the outcome counts as a successful round-trip.
    pub fn is_success(&self) -> bool {
        !matches!(self, ExecutionOutcome::Failure { .. })
    }
}

/// Reply of the insert and edit form endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponse {
    pub successfully: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sql_error: Option<String>,
}

impl FormResponse {
    pub fn ok() -> Self {
        Self {
            successfully: true,
            sql_error: None,
        }
    }

    pub fn sql_error(message: impl Into<String>) -> Self {
        Self {
            successfully: false,
            sql_error: Some(message.into()),
        }
    }
}

/// Display form of a cell value.
///
/// Strings are shown verbatim, scalars in their literal form, arrays
/// comma-joined. SQL NULL leaves the cell blank.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
