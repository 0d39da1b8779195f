//! Query executor.
//!
//! Owns the query input and the results area of the SQL view. An execution
//! is split in two synchronous halves around the request:
//!
//! - `begin` validates the input, clears stale results and hands out a
//!   `PendingQuery`
//! - `complete` classifies the reply and applies it to the results area,
//!   the page URL, or an alert
//!
//! The host drives the request in between (see `execute`), so other events
//! can be handled while it is in flight.

use dbnav_core::{ExecutionOutcome, QueryRequest, QueryResponse, TransportError};
use dbnav_http::Url;

use crate::backend::Backend;
use crate::page::{query_param, with_query_param, Page};
use crate::views::{Panel, ResultRenderer, ResultTable};

/// URL parameter carrying the shareable query text.
const QUERY_PARAM: &str = "query";

/// Content of the results area.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsArea {
    #[default]
    Empty,
    Table(ResultTable),
    Panel(Panel),
}

impl ResultsArea {
    pub fn is_empty(&self) -> bool {
        matches!(self, ResultsArea::Empty)
    }

    pub fn to_html(&self) -> String {
        match self {
            ResultsArea::Empty => String::new(),
            ResultsArea::Table(table) => table.to_html(),
            ResultsArea::Panel(panel) => panel.to_html(),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            ResultsArea::Empty => String::new(),
            ResultsArea::Table(table) => table.to_text(),
            ResultsArea::Panel(panel) => panel.message.clone(),
        }
    }
}

/// Executor state machine. Every reply returns it to `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutorPhase {
    #[default]
    Idle,
    /// Waiting for the reply of execution `generation`.
    AwaitingResponse { generation: u64 },
}

/// A query that has been started but not completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub generation: u64,
    /// Trimmed query text, as sent.
    pub query: String,
    /// Page URL the request goes to.
    pub url: Url,
}

impl PendingQuery {
    pub fn request(&self) -> QueryRequest {
        QueryRequest::new(self.query.clone())
    }
}

/// What `complete` (or `execute`) did.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// The query was empty; nothing was sent.
    Skipped,
    /// A newer execution started meanwhile; the server reply was dropped.
    Discarded,
    /// Transport failure, shown as a blocking alert. Results, URL and
    /// phase are left alone.
    Alerted(TransportError),
    /// The reply was classified and applied.
    Applied(ExecutionOutcome),
}

/// Controller behind the query input and the results area.
#[derive(Debug, Clone, Default)]
pub struct QueryExecutor {
    readonly: bool,

    /// Current text of the query input.
    input: String,

    results: ResultsArea,

    phase: ExecutorPhase,

    /// Generation of the latest execution.
    generation: u64,

    /// Query text last written into the page URL.
    shared_query: Option<String>,
}

impl QueryExecutor {
    /// Create an executor. `readonly` only picks the zero-rows message.
    pub fn new(readonly: bool) -> Self {
        Self {
            readonly,
            ..Default::default()
        }
    }

    /// Pre-populate the input from the page URL's `query` parameter.
    ///
    /// Never executes anything.
    pub fn initialize(&mut self, page: &dyn Page) {
        if let Some(query) = query_param(page.location(), QUERY_PARAM) {
            tracing::debug!("initialize: query from URL: {}", query);
            self.input = query.clone();
            self.shared_query = Some(query);
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Mirror an edit of the query input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn results(&self) -> &ResultsArea {
        &self.results
    }

    pub fn phase(&self) -> ExecutorPhase {
        self.phase
    }

    pub fn shared_query(&self) -> Option<&str> {
        self.shared_query.as_deref()
    }

    /// Start an execution.
    ///
    /// Returns `None` for an empty or whitespace-only input, leaving
    /// everything untouched. Otherwise clears the results area right away.
    pub fn begin(&mut self, page: &dyn Page) -> Option<PendingQuery> {
        let query = self.input.trim();
        if query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.results = ResultsArea::Empty;
        self.phase = ExecutorPhase::AwaitingResponse {
            generation: self.generation,
        };

        tracing::debug!("begin: generation {} query {}", self.generation, query);
        Some(PendingQuery {
            generation: self.generation,
            query: query.to_string(),
            url: page.location().clone(),
        })
    }

    /// Apply the reply of `pending`.
    pub fn complete(
        &mut self,
        pending: PendingQuery,
        reply: Result<QueryResponse, TransportError>,
        page: &mut dyn Page,
    ) -> Completion {
        let stale = pending.generation != self.generation;
        if !stale {
            self.phase = ExecutorPhase::Idle;
        }

        let response = match reply {
            Ok(response) => response,
            // Transport failures always alert, even for an outdated request.
            Err(err) => {
                tracing::error!("Query request failed: {}", err);
                page.alert(&err.alert_text());
                return Completion::Alerted(err);
            }
        };

        if stale {
            tracing::debug!(
                "complete: dropping reply of generation {} (latest {})",
                pending.generation,
                self.generation
            );
            return Completion::Discarded;
        }
        let outcome = response.into_outcome();

        self.results = match &outcome {
            ExecutionOutcome::Failure { message } => {
                ResultsArea::Panel(Panel::danger(message.clone()))
            }
            ExecutionOutcome::Tabular {
                columns,
                rows,
                row_count,
            } => ResultsArea::Table(ResultRenderer::render(columns, rows, *row_count)),
            ExecutionOutcome::Mutation { rows_changed } => {
                ResultsArea::Panel(self.mutation_panel(*rows_changed))
            }
        };

        // Only successful round-trips touch the history.
        if outcome.is_success() {
            self.share(&pending.query, page);
        }
        Completion::Applied(outcome)
    }

    /// Run one execution end to end against `backend`.
    pub async fn execute(&mut self, backend: &dyn Backend, page: &mut dyn Page) -> Completion {
        let Some(pending) = self.begin(page) else {
            return Completion::Skipped;
        };

        let reply = backend
            .execute_query(pending.url.clone(), pending.request())
            .await;
        self.complete(pending, reply, page)
    }

    fn mutation_panel(&self, rows_changed: u64) -> Panel {
        if rows_changed == 0 && self.readonly {
            Panel::warning("The database is readonly!")
        } else {
            Panel::success(format!("Successfully changed {} rows", rows_changed))
        }
    }

    /// Reflect the executed query into the page URL.
    fn share(&mut self, query: &str, page: &mut dyn Page) {
        let url = with_query_param(page.location(), QUERY_PARAM, query);
        page.push_state(url);
        self.shared_query = Some(query.to_string());
    }
}
