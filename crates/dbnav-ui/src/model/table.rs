//! Table-level navigation: content sorting, clearing and dropping the table.

use dbnav_core::{Navigation, NavigationError, SortOrder};

use crate::page::{query_param, resolve, Page};

/// Links of the table view that are not tied to a row selection.
#[derive(Debug, Clone, Default)]
pub struct TableNavigator {
    readonly: bool,
    sort: Option<SortOrder>,
}

impl TableNavigator {
    /// Create a navigator for the page, picking up its current sort order.
    pub fn new(page: &dyn Page, readonly: bool) -> Self {
        let sort = query_param(page.location(), "sort").and_then(|p| SortOrder::parse(&p));
        Self { readonly, sort }
    }

    pub fn sort(&self) -> Option<&SortOrder> {
        self.sort.as_ref()
    }

    /// Open the content view sorted by `column`, flipping the direction when
    /// the column is already the ascending sort key.
    pub fn sort_by(&mut self, column: &str, page: &mut dyn Page) -> Result<(), NavigationError> {
        let order = SortOrder::next_for(self.sort.as_ref(), column);
        self.sort = Some(order.clone());
        self.open(&Navigation::Content { sort: Some(order) }, page)
    }

    /// Delete every row of the table.
    pub fn clear_table(&self, page: &mut dyn Page) -> Result<(), NavigationError> {
        self.open(&Navigation::ClearTable, page)
    }

    /// Drop the table.
    pub fn drop_table(&self, page: &mut dyn Page) -> Result<(), NavigationError> {
        self.open(&Navigation::DropTable, page)
    }

    fn open(&self, navigation: &Navigation, page: &mut dyn Page) -> Result<(), NavigationError> {
        if self.readonly && navigation.writes() {
            tracing::warn!("Refusing {} in a read-only session", navigation.path());
            return Err(NavigationError::ReadOnly);
        }

        let url = resolve(page.location(), navigation)?;
        page.navigate(url);
        Ok(())
    }
}
