//! Row identifier type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque key identifying a table row.
///
/// The server may hand out integers (SQLite `rowid`) or strings; both are
/// kept in their string form since the client only ever echoes them back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowId(pub String);

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<i64> for RowId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for RowId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ids_use_decimal_form() {
        assert_eq!(RowId::from(42).as_ref(), "42");
        assert_eq!(RowId::from(-1).to_string(), "-1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&RowId::from("a7")).unwrap();
        assert_eq!(json, r#""a7""#);
    }
}
