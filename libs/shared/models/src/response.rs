use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Body returned by the hospital server's mutating endpoints.
///
/// Rejections often arrive as `{"error": "..."}` with no `success` key at all,
/// so a missing flag reads as a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ActionResponse {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self { success: false, error: Some(error.into()) }
    }

    pub fn into_result(self) -> Result<(), PortalError> {
        if self.success {
            Ok(())
        } else {
            Err(PortalError::Rejected(self.error))
        }
    }
}
