//! HTTP transport for the dbnav endpoints.
//!
//! Both endpoints live at the current page URL:
//! - queries are POSTed as `{"query": ..}` JSON
//! - insert and edit forms are POSTed as multipart form data
//!
//! A reply with a non-success status never reaches the JSON decoder; it is
//! returned as `TransportError::Status` so the caller can alert it verbatim.

use dbnav_core::{FormResponse, QueryRequest, QueryResponse, TransportError};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

pub use reqwest::Url;

/// Client for the page endpoints.
///
/// Requests carry no timeout and are never retried: every failure is final
/// for that request.
#[derive(Debug, Clone, Default)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with a fresh connection pool.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wrap an existing reqwest client (shared pool, cookies, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// POST a query to the page URL.
    pub async fn execute_query(
        &self,
        page_url: &Url,
        request: &QueryRequest,
    ) -> Result<QueryResponse, TransportError> {
        debug!(url = %page_url, query = %request.query, "Sending query");
        self.send(self.client.post(page_url.clone()).json(request))
            .await
    }

    /// POST an insert or edit form to the page URL.
    ///
    /// Fields are sent in the order given, as the browser would send them.
    pub async fn submit_form(
        &self,
        page_url: &Url,
        fields: &[(String, String)],
    ) -> Result<FormResponse, TransportError> {
        let form = fields
            .iter()
            .fold(Form::new(), |form, (name, value)| {
                form.text(name.clone(), value.clone())
            });

        debug!(url = %page_url, fields = fields.len(), "Submitting form");
        self.send(self.client.post(page_url.clone()).multipart(form))
            .await
    }

    async fn send<R: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<R, TransportError> {
        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            TransportError::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, "Server returned an error status");
            return Err(TransportError::Status {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read response body");
            TransportError::Network(e.to_string())
        })?;

        serde_json::from_str(&body).map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            TransportError::Decode(e.to_string())
        })
    }
}
