use std::sync::Arc;

use codepulse_core::editorial::{Editorial, editorial_prompt};
use codepulse_core::model::{FallbackReason, ProblemId, ProblemInfo};

use crate::completions::Completions;
use crate::error::EditorialError;

/// What the editorial screen shows once a request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditorialState {
    Loaded(Editorial),
    Failed { info: ProblemInfo, message: String },
}

impl EditorialState {
    #[must_use]
    pub fn info(&self) -> &ProblemInfo {
        match self {
            Self::Loaded(editorial) => &editorial.info,
            Self::Failed { info, .. } => info,
        }
    }
}

/// Fetches and parses editorials from a completions backend.
#[derive(Clone)]
pub struct EditorialService {
    completions: Arc<dyn Completions>,
}

impl EditorialService {
    #[must_use]
    pub fn new(completions: Arc<dyn Completions>) -> Self {
        Self { completions }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.completions.enabled()
    }

    /// Request and parse the editorial for `problem_id`.
    ///
    /// # Errors
    ///
    /// Returns `EditorialError` when generation is disabled or the
    /// completions request fails.
    pub async fn generate(&self, problem_id: &ProblemId) -> Result<Editorial, EditorialError> {
        if !self.completions.enabled() {
            return Err(EditorialError::Disabled);
        }
        let prompt = editorial_prompt(problem_id);
        let reply = self.completions.complete(&prompt).await?;
        Ok(Editorial::parse(problem_id, &reply))
    }

    /// Like [`generate`](Self::generate), folding failures into the error
    /// state with placeholder problem info.
    pub async fn load(&self, problem_id: &ProblemId) -> EditorialState {
        match self.generate(problem_id).await {
            Ok(editorial) => EditorialState::Loaded(editorial),
            Err(err) => {
                tracing::warn!(%problem_id, error = %err, "editorial request failed");
                EditorialState::Failed {
                    info: ProblemInfo::fallback(problem_id, FallbackReason::Unavailable),
                    message: failure_message(&err),
                }
            }
        }
    }
}

fn failure_message(err: &EditorialError) -> String {
    match err {
        EditorialError::Disabled => {
            "Editorial generation is not configured. Set CODEPULSE_AI_API_KEY and restart."
                .to_string()
        }
        EditorialError::HttpStatus(status) => {
            format!("Failed to generate editorial: API request failed with status {status}")
        }
        other => format!("Failed to generate editorial: {other}"),
    }
}

/// Ticket identifying one editorial request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestTicket {
    #[must_use]
    pub fn seq(self) -> u64 {
        self.0
    }
}

/// Tracks the single outstanding editorial request.
///
/// Each request gets a fresh sequence number; only the newest one may
/// publish its result.
#[derive(Clone, Debug, Default)]
pub struct EditorialRequests {
    next_seq: u64,
    in_flight: Option<u64>,
}

impl EditorialRequests {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request unless one is already running.
    pub fn begin(&mut self) -> Option<RequestTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        Some(self.supersede())
    }

    /// Start a request unconditionally; any running one becomes stale.
    pub fn supersede(&mut self) -> RequestTicket {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        RequestTicket(self.next_seq)
    }

    /// Settle `ticket`. Returns `false` when a newer request has replaced it
    /// and its result must be discarded.
    pub fn finish(&mut self, ticket: RequestTicket) -> bool {
        if self.in_flight == Some(ticket.0) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}
