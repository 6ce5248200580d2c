//! Uniform result envelope returned by every tool operation.
//!
//! `{ "success": bool, "data"?: ..., "message"?: ..., "errorMessage"?: ... }`
//!
//! A failure always carries `errorMessage`; a success carries `data`,
//! `message`, or both. Callers branch on `success` alone.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl OperationResult {
    pub fn success(data: Value, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error_message: None,
        }
    }

    pub fn success_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error_message: None,
        }
    }

    pub fn failure(error_message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error_message: Some(error_message.into()),
        }
    }

    /// Wrap a serializable report as the `data` of a successful result.
    pub fn from_report<T: Serialize>(
        report: &T,
        message: impl Into<String>,
    ) -> Result<Self, CoreError> {
        Ok(Self::success(serde_json::to_value(report)?, message))
    }
}

impl From<CoreError> for OperationResult {
    fn from(err: CoreError) -> Self {
        Self::failure(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
