//! Insert and edit form submission.

use dbnav_core::{FormResponse, Navigation, NavigationError, TransportError};

use crate::backend::Backend;
use crate::page::{resolve, ElementId, Page};

/// What a form submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCompletion {
    /// Transport failure, shown as a blocking alert.
    Alerted(TransportError),
    /// The row was written; the page moved on to the content view.
    Saved,
    /// The server rejected the row; the error is shown inline.
    Rejected,
}

/// Controller behind the insert and edit forms.
#[derive(Debug, Clone, Default)]
pub struct RowForm {
    /// Text of the inline SQL error element.
    sql_error: Option<String>,
}

impl RowForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sql_error(&self) -> Option<&str> {
        self.sql_error.as_deref()
    }

    /// Submit the form fields to the page URL.
    pub async fn submit(
        &mut self,
        fields: Vec<(String, String)>,
        backend: &dyn Backend,
        page: &mut dyn Page,
    ) -> Result<FormCompletion, NavigationError> {
        let reply = backend
            .submit_form(page.location().clone(), fields)
            .await;
        self.apply(reply, page)
    }

    /// Apply the reply of a submission.
    pub fn apply(
        &mut self,
        reply: Result<FormResponse, TransportError>,
        page: &mut dyn Page,
    ) -> Result<FormCompletion, NavigationError> {
        let response = match reply {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("Form submission failed: {}", err);
                page.alert(&err.alert_text());
                return Ok(FormCompletion::Alerted(err));
            }
        };

        if response.successfully {
            let url = resolve(page.location(), &Navigation::Content { sort: None })?;
            page.navigate(url);
            return Ok(FormCompletion::Saved);
        }

        let message = response.sql_error.unwrap_or_default();
        tracing::debug!("Form rejected: {}", message);
        self.sql_error = Some(message);
        page.scroll_into_view(ElementId::SqlError);
        Ok(FormCompletion::Rejected)
    }
}
