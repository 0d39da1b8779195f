//! Row selection controller.
//!
//! Tracks the checked rows of the table view and drives the action bar and
//! the delete confirmation dialog.

use dbnav_core::{
    ActionAvailability, DeleteRequest, Navigation, NavigationError, RowId, RowSelection,
};

use crate::page::{resolve, Page};

/// State of the delete confirmation dialog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteDialog {
    /// Selection size shown when the dialog was opened.
    pub amount: Option<usize>,
}

/// Controller behind the row checkboxes and the action bar.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: RowSelection,

    /// What the action bar currently shows. Reapplied after every toggle.
    action_bar: ActionAvailability,

    delete_dialog: DeleteDialog,
}

impl SelectionController {
    /// Create a controller for the rows of the page, in page order.
    pub fn new(rows: impl IntoIterator<Item = RowId>) -> Self {
        Self {
            selection: RowSelection::new(rows),
            action_bar: ActionAvailability::default(),
            delete_dialog: DeleteDialog::default(),
        }
    }

    pub fn selection(&self) -> &RowSelection {
        &self.selection
    }

    pub fn action_bar(&self) -> ActionAvailability {
        self.action_bar
    }

    pub fn delete_dialog(&self) -> DeleteDialog {
        self.delete_dialog
    }

    /// Apply a checkbox change event.
    ///
    /// `checked` is the checkbox's state after the change, so replaying an
    /// event leaves the selection as it is.
    pub fn toggle(&mut self, row: &RowId, checked: bool) -> ActionAvailability {
        match self.selection.set(row, checked) {
            None => tracing::warn!("toggle: no checkbox for row {}", row),
            Some(changed) => tracing::debug!(
                "toggle: row {} checked={} changed={} selected={}",
                row,
                checked,
                changed,
                self.selection.len()
            ),
        }
        self.apply_availability()
    }

    /// Uncheck every row.
    pub fn clear(&mut self) -> ActionAvailability {
        self.selection.clear();
        self.apply_availability()
    }

    fn apply_availability(&mut self) -> ActionAvailability {
        self.action_bar = self.selection.availability();
        self.action_bar
    }

    /// Navigate to the edit view of the single selected row.
    ///
    /// Does nothing unless exactly one row is selected. Returns whether a
    /// navigation happened.
    pub fn request_edit(&self, page: &mut dyn Page) -> Result<bool, NavigationError> {
        let Some(row) = self.selection.single() else {
            tracing::debug!(
                "request_edit: ignored with {} rows selected",
                self.selection.len()
            );
            return Ok(false);
        };

        let url = resolve(page.location(), &Navigation::Edit { row: row.clone() })?;
        page.navigate(url);
        Ok(true)
    }

    /// Open the delete confirmation dialog with the current selection size.
    pub fn prepare_delete(&mut self) -> usize {
        let amount = self.selection.len();
        self.delete_dialog.amount = Some(amount);
        amount
    }

    /// Confirm the delete dialog.
    ///
    /// The selection is read again here rather than taken from
    /// `prepare_delete`, so changes made while the dialog was open count.
    /// The page URL becomes the redirect target.
    pub fn confirm_delete(
        &mut self,
        page: &mut dyn Page,
    ) -> Result<Option<DeleteRequest>, NavigationError> {
        self.delete_dialog.amount = None;

        let redirect = page.location().to_string();
        let Some(request) = DeleteRequest::new(self.selection.snapshot(), redirect) else {
            tracing::debug!("confirm_delete: nothing selected");
            return Ok(None);
        };

        let url = resolve(page.location(), &Navigation::Delete(request.clone()))?;
        tracing::debug!("confirm_delete: {} rows", request.rows().len());
        page.navigate(url);
        Ok(Some(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{query_param, MemoryPage};
    use dbnav_http::Url;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    const TABLE_URL: &str = "http://localhost:5000/admin/table/users/content";

    fn controller(ids: &[i64]) -> SelectionController {
        SelectionController::new(ids.iter().map(|id| RowId::from(*id)))
    }

    fn page() -> MemoryPage {
        MemoryPage::new(Url::parse(TABLE_URL).unwrap())
    }

    fn row(id: i64) -> RowId {
        RowId::from(id)
    }

    #[test]
    fn test_action_bar_follows_selection() {
        let mut c = controller(&[1, 2, 3]);
        assert!(!c.action_bar().visible);

        let bar = c.toggle(&row(1), true);
        assert!(bar.visible && bar.edit_enabled && bar.delete_enabled);

        let bar = c.toggle(&row(2), true);
        assert!(bar.visible && !bar.edit_enabled && bar.delete_enabled);

        c.toggle(&row(2), false);
        assert!(c.action_bar().edit_enabled);

        let bar = c.toggle(&row(1), false);
        assert_eq!(bar, ActionAvailability::default());
        assert!(c.selection().is_empty());
    }

    // Rows 1..=4 have checkboxes; 0 and 5 do not.
    fn toggle_events() -> impl Strategy<Value = Vec<(i64, bool)>> {
        prop::collection::vec((0i64..=5, any::<bool>()), 0..40)
    }

    proptest! {
        #[test]
        fn test_selection_matches_checkbox_states(events in toggle_events()) {
            let mut c = controller(&[1, 2, 3, 4]);
            let mut checkboxes = BTreeMap::new();

            for (id, checked) in events {
                c.toggle(&row(id), checked);
                if (1..=4).contains(&id) {
                    checkboxes.insert(id, checked);
                }

                let expected: Vec<RowId> = checkboxes
                    .iter()
                    .filter(|(_, checked)| **checked)
                    .map(|(id, _)| row(*id))
                    .collect();
                prop_assert_eq!(c.selection().snapshot(), expected.clone());
                prop_assert_eq!(c.action_bar().visible, !expected.is_empty());
                prop_assert_eq!(c.action_bar().edit_enabled, expected.len() == 1);
                prop_assert_eq!(c.action_bar().delete_enabled, !expected.is_empty());
            }
        }
    }

    #[test]
    fn test_clear_hides_action_bar() {
        let mut c = controller(&[1, 2]);
        c.toggle(&row(1), true);
        c.toggle(&row(2), true);

        let bar = c.clear();
        assert!(!bar.visible);
        assert!(!bar.edit_enabled);
    }

    #[test]
    fn test_request_edit_single_row() {
        let mut c = controller(&[1, 2]);
        let mut page = page();
        c.toggle(&row(2), true);

        assert!(c.request_edit(&mut page).unwrap());
        assert_eq!(
            page.navigations[0].as_str(),
            "http://localhost:5000/admin/table/users/edit?row=2"
        );
    }

    #[test]
    fn test_request_edit_is_noop_unless_exactly_one() {
        let mut c = controller(&[1, 2]);
        let mut page = page();

        assert!(!c.request_edit(&mut page).unwrap());

        c.toggle(&row(1), true);
        c.toggle(&row(2), true);
        assert!(!c.request_edit(&mut page).unwrap());
        assert!(page.navigations.is_empty());
    }

    #[test]
    fn test_prepare_delete_shows_amount() {
        let mut c = controller(&[1, 2, 3]);
        c.toggle(&row(1), true);
        c.toggle(&row(3), true);

        assert_eq!(c.prepare_delete(), 2);
        assert_eq!(c.delete_dialog().amount, Some(2));
        // Nothing else changes.
        assert_eq!(c.selection().len(), 2);
    }

    #[test]
    fn test_confirm_delete_reads_selection_at_call_time() {
        let mut c = controller(&[1, 2, 3]);
        let mut page = page();
        c.toggle(&row(1), true);
        c.toggle(&row(2), true);
        c.prepare_delete();

        // Selection changes while the dialog is open.
        c.toggle(&row(1), false);
        c.toggle(&row(3), true);

        let request = c.confirm_delete(&mut page).unwrap().unwrap();
        assert_eq!(request.rows(), &[row(2), row(3)]);
        assert_eq!(request.redirect(), TABLE_URL);

        let target = &page.navigations[0];
        assert_eq!(target.path(), "/admin/table/users/delete");
        assert_eq!(query_param(target, "rows").as_deref(), Some("2,3"));
        assert_eq!(query_param(target, "redirect").as_deref(), Some(TABLE_URL));
        assert_eq!(c.delete_dialog().amount, None);
    }

    #[test]
    fn test_confirm_delete_with_empty_selection() {
        let mut c = controller(&[1]);
        let mut page = page();
        c.toggle(&row(1), true);
        c.prepare_delete();
        c.toggle(&row(1), false);

        assert!(c.confirm_delete(&mut page).unwrap().is_none());
        assert!(page.navigations.is_empty());
    }
}
