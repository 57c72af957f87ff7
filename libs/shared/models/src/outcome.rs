use serde::{Deserialize, Serialize};

/// How a single page flow ended. Every flow is one request/response with a
/// terminal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlowOutcome {
    Completed,
    /// Stopped before any request went out.
    Aborted { reason: String },
    /// The request was made and failed; `message` is what the user saw.
    Failed { message: String },
}

impl FlowOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, FlowOutcome::Completed)
    }
}
