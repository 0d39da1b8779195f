//! Checked-row selection and the action availability derived from it.

use crate::row::RowId;
use std::collections::HashSet;

/// Set of rows whose checkbox is currently checked.
///
/// The page's checkboxes are registered up front in document order. The
/// checked set is the only source of truth for the selection size; there is
/// no separate counter to drift from it.
#[derive(Debug, Clone, Default)]
pub struct RowSelection {
    /// Row ids in page order, one per checkbox.
    rows: Vec<RowId>,

    /// Same ids as `rows`, for lookups.
    registered: HashSet<RowId>,

    /// Currently checked row ids.
    checked: HashSet<RowId>,
}

impl RowSelection {
    /// Create a selection over the given rows, all unchecked.
    pub fn new(rows: impl IntoIterator<Item = RowId>) -> Self {
        let mut registered = HashSet::new();
        let rows = rows
            .into_iter()
            .filter(|id| registered.insert(id.clone()))
            .collect();

        Self {
            rows,
            registered,
            checked: HashSet::new(),
        }
    }

    /// Check whether the page has a checkbox for `id`.
    pub fn knows(&self, id: &RowId) -> bool {
        self.registered.contains(id)
    }

    /// Set the checked state of one row.
    ///
    /// Returns `None` for rows without a checkbox, otherwise whether the
    /// membership actually changed.
    pub fn set(&mut self, id: &RowId, checked: bool) -> Option<bool> {
        if !self.knows(id) {
            return None;
        }

        let changed = if checked {
            self.checked.insert(id.clone())
        } else {
            self.checked.remove(id)
        };
        Some(changed)
    }

    /// Uncheck every row.
    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Number of checked rows.
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Check if no row is checked.
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Check if a row is checked.
    pub fn contains(&self, id: &RowId) -> bool {
        self.checked.contains(id)
    }

    /// Checked rows in page order.
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.rows.iter().filter(|id| self.checked.contains(*id))
    }

    /// Number of rows with a checkbox.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The checked row when exactly one is checked.
    pub fn single(&self) -> Option<&RowId> {
        if self.len() == 1 {
            self.iter().next()
        } else {
            None
        }
    }

    /// Snapshot of the checked rows in page order.
    pub fn snapshot(&self) -> Vec<RowId> {
        self.iter().cloned().collect()
    }

    /// Action availability for the current selection.
    pub fn availability(&self) -> ActionAvailability {
        ActionAvailability::for_count(self.len())
    }
}

/// Which batch actions the action bar offers.
///
/// Derived from the selection size, never stored on its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActionAvailability {
    /// Whether the action bar is shown at all.
    pub visible: bool,
    /// Edit works on exactly one row.
    pub edit_enabled: bool,
    /// Delete works on any non-empty selection.
    pub delete_enabled: bool,
}

impl ActionAvailability {
    /// Availability for `count` checked rows.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::default(),
            1 => Self {
                visible: true,
                edit_enabled: true,
                delete_enabled: true,
            },
            _ => Self {
                visible: true,
                edit_enabled: false,
                delete_enabled: true,
            },
        }
    }
}
