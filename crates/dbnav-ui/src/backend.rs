//! Backend integration for dbnav.
//!
//! This module provides the bridge between the components and the server.
//! The `Backend` trait is host-independent and mockable for testing.

use dbnav_core::{FormResponse, QueryRequest, QueryResponse, TransportError};
use dbnav_http::{HttpClient, Url};
use futures::future::BoxFuture;

// =============================================================================
// Backend Trait
// =============================================================================

/// Trait for server round-trips.
///
/// Methods return futures so the host decides how to drive them. Each call
/// is exactly one request: no retries, no timeout, no cancellation.
pub trait Backend: Send + Sync {
    /// POST a query to the page URL.
    fn execute_query(
        &self,
        page_url: Url,
        request: QueryRequest,
    ) -> BoxFuture<'static, Result<QueryResponse, TransportError>>;

    /// POST an insert or edit form to the page URL.
    fn submit_form(
        &self,
        page_url: Url,
        fields: Vec<(String, String)>,
    ) -> BoxFuture<'static, Result<FormResponse, TransportError>>;
}

// =============================================================================
// HTTP Backend
// =============================================================================

/// Real backend talking to the server over HTTP.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    client: HttpClient,
}

impl HttpBackend {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl Backend for HttpBackend {
    fn execute_query(
        &self,
        page_url: Url,
        request: QueryRequest,
    ) -> BoxFuture<'static, Result<QueryResponse, TransportError>> {
        let client = self.client.clone();
        Box::pin(async move { client.execute_query(&page_url, &request).await })
    }

    fn submit_form(
        &self,
        page_url: Url,
        fields: Vec<(String, String)>,
    ) -> BoxFuture<'static, Result<FormResponse, TransportError>> {
        let client = self.client.clone();
        Box::pin(async move { client.submit_form(&page_url, &fields).await })
    }
}

// =============================================================================
// Mock Backend for Testing
// =============================================================================


// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::mock::*;
    use super::*;

    fn page_url() -> Url {
        Url::parse("http://localhost:5000/admin/sql").unwrap()
    }

    #[tokio::test]
    async fn test_mock_backend_replies_in_order() {
        let backend = MockBackend::new()
            .with_query_reply(Ok(QueryResponse::changes(1)))
            .with_query_reply(Ok(QueryResponse::failure("locked")));

        let first = backend
            .execute_query(page_url(), QueryRequest::new("DELETE FROM t"))
            .await
            .unwrap();
        assert_eq!(first.total_changes, Some(1));

        let second = backend
            .execute_query(page_url(), QueryRequest::new("DELETE FROM t"))
            .await
            .unwrap();
        assert!(!second.successfully);

        assert_eq!(backend.query_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_backend_exhausted() {
        let backend = MockBackend::new();
        let err = backend
            .submit_form(page_url(), vec![])
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
        assert_eq!(backend.forms.lock().len(), 1);
    }
}
