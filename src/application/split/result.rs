//! Split result types

use serde::Serialize;

use crate::error::SplinterError;
use crate::models::OutputManifest;

/// Result of a split operation
///
/// Exactly one of `files` (on success) or `error`/`code` (on failure) is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<OutputManifest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl SplitOutcome {
    /// Successful split
    pub fn success(files: OutputManifest) -> Self {
        Self {
            success: true,
            files: Some(files),
            error: None,
            code: None,
        }
    }

    /// Failed split
    pub fn failure(error: &SplinterError) -> Self {
        Self {
            success: false,
            files: None,
            error: Some(error.to_string()),
            code: Some(error.code()),
        }
    }

    /// Check if operation was successful
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl From<Result<OutputManifest, SplinterError>> for SplitOutcome {
    fn from(result: Result<OutputManifest, SplinterError>) -> Self {
        match result {
            Ok(files) => SplitOutcome::success(files),
            Err(e) => SplitOutcome::failure(&e),
        }
    }
}
