//! The hosting page.
//!
//! Components never touch a DOM directly. Everything they need from the
//! page (its URL, navigation, history, alerts, scrolling) goes through the
//! `Page` trait, so they can be driven by browser glue, a terminal driver,
//! or a test.

use dbnav_core::{Navigation, NavigationError};
use dbnav_http::Url;

/// Elements the components may ask the page to scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementId {
    /// The inline SQL error of the insert/edit form.
    SqlError,
    /// The query results area.
    Results,
}

/// Operations the hosting page provides.
#[cfg_attr(test, mockall::automock)]
pub trait Page {
    /// Current page URL.
    fn location(&self) -> &Url;

    /// Leave the page for `url`.
    fn navigate(&mut self, url: Url);

    /// Push `url` onto the session history without reloading.
    fn push_state(&mut self, url: Url);

    /// Show a blocking alert.
    fn alert(&mut self, message: &str);

    /// Scroll an element into view.
    fn scroll_into_view(&mut self, element: ElementId);
}

/// Resolve a navigation against the page URL.
///
/// Targets are relative to the table page, like the `edit?row=..` links of
/// the page itself. Query pairs are form-urlencoded.
pub fn resolve(base: &Url, navigation: &Navigation) -> Result<Url, NavigationError> {
    let mut url = base
        .join(navigation.path())
        .map_err(|e| NavigationError::InvalidUrl(e.to_string()))?;
    url.set_query(None);

    let pairs = navigation.query_pairs();
    if !pairs.is_empty() {
        let mut query = url.query_pairs_mut();
        for (name, value) in &pairs {
            query.append_pair(name, value);
        }
    }
    Ok(url)
}

/// Value of a query parameter of `url`, if present.
pub fn query_param(url: &Url, name: &str) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Copy of `url` with parameter `name` set to `value`.
///
/// The first existing occurrence is replaced in place and any others are
/// dropped; a missing parameter is appended.
pub fn with_query_param(url: &Url, name: &str, value: &str) -> Url {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut replaced = false;
    pairs.retain_mut(|(key, current)| {
        if key != name {
            return true;
        }
        if replaced {
            return false;
        }
        *current = value.to_string();
        replaced = true;
        true
    });
    if !replaced {
        pairs.push((name.to_string(), value.to_string()));
    }

    let mut updated = url.clone();
    updated.query_pairs_mut().clear().extend_pairs(&pairs);
    updated
}

/// In-memory page that records every effect.
///
/// Used by the headless binary and by tests.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    location: Url,
    /// URLs pushed onto the history, oldest first.
    pub history: Vec<Url>,
    /// URLs navigated to, oldest first.
    pub navigations: Vec<Url>,
    /// Alert texts, oldest first.
    pub alerts: Vec<String>,
    /// Elements scrolled into view, oldest first.
    pub scrolled: Vec<ElementId>,
}

impl MemoryPage {
    /// Create a page showing `location`.
    pub fn new(location: Url) -> Self {
        Self {
            location,
            history: Vec::new(),
            navigations: Vec::new(),
            alerts: Vec::new(),
            scrolled: Vec::new(),
        }
    }
}

impl Page for MemoryPage {
    fn location(&self) -> &Url {
        &self.location
    }

    fn navigate(&mut self, url: Url) {
        tracing::debug!("navigate: {}", url);
        self.navigations.push(url.clone());
        self.location = url;
    }

    fn push_state(&mut self, url: Url) {
        tracing::debug!("push_state: {}", url);
        self.history.push(url.clone());
        self.location = url;
    }

    fn alert(&mut self, message: &str) {
        tracing::warn!("alert: {}", message);
        self.alerts.push(message.to_string());
    }

    fn scroll_into_view(&mut self, element: ElementId) {
        self.scrolled.push(element);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbnav_core::{DeleteRequest, RowId, SortOrder};

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_resolve_edit_relative_to_table_page() {
        let base = url("http://localhost:5000/admin/table/users/content?sort=-age");
        let target = resolve(
            &base,
            &Navigation::Edit {
                row: RowId::from(4),
            },
        )
        .unwrap();
        assert_eq!(
            target.as_str(),
            "http://localhost:5000/admin/table/users/edit?row=4"
        );
    }

    #[test]
    fn test_resolve_delete_encodes_list_and_redirect() {
        let base = url("http://localhost:5000/admin/table/users/content");
        let request = DeleteRequest::new(
            vec![RowId::from(1), RowId::from(2)],
            base.as_str(),
        )
        .unwrap();
        let target = resolve(&base, &Navigation::Delete(request)).unwrap();

        assert_eq!(
            target.as_str(),
            "http://localhost:5000/admin/table/users/delete?rows=1%2C2&redirect=http%3A%2F%2Flocalhost%3A5000%2Fadmin%2Ftable%2Fusers%2Fcontent"
        );
        assert_eq!(query_param(&target, "rows").as_deref(), Some("1,2"));
        assert_eq!(query_param(&target, "redirect").as_deref(), Some(base.as_str()));
    }

    #[test]
    fn test_resolve_without_pairs_has_no_query() {
        let base = url("http://localhost/admin/table/users/?x=1");
        let target = resolve(&base, &Navigation::Content { sort: None }).unwrap();
        assert_eq!(target.as_str(), "http://localhost/admin/table/users/content");

        let sorted = resolve(
            &base,
            &Navigation::Content {
                sort: Some(SortOrder::Descending("name".into())),
            },
        )
        .unwrap();
        assert_eq!(
            sorted.as_str(),
            "http://localhost/admin/table/users/content?sort=-name"
        );
    }

    #[test]
    fn test_with_query_param() {
        let base = url("http://localhost/admin/sql");
        let set = with_query_param(&base, "query", "SELECT 1");
        assert_eq!(set.as_str(), "http://localhost/admin/sql?query=SELECT+1");
        assert_eq!(query_param(&set, "query").as_deref(), Some("SELECT 1"));

        let base = url("http://localhost/admin/sql?a=1&query=old&b=2&query=older");
        let set = with_query_param(&base, "query", "new");
        assert_eq!(set.as_str(), "http://localhost/admin/sql?a=1&query=new&b=2");
    }

    #[test]
    fn test_memory_page_records_effects() {
        let mut page = MemoryPage::new(url("http://localhost/admin/sql"));
        page.push_state(url("http://localhost/admin/sql?query=x"));
        page.alert("[500] oops");
        page.scroll_into_view(ElementId::SqlError);

        assert_eq!(page.location().as_str(), "http://localhost/admin/sql?query=x");
        assert_eq!(page.history.len(), 1);
        assert_eq!(page.alerts, vec!["[500] oops".to_string()]);
        assert_eq!(page.scrolled, vec![ElementId::SqlError]);
        assert!(page.navigations.is_empty());
    }
}
