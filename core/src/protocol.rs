//! Line-delimited JSON protocol spoken by the `ctslice` binary
//!
//! Input is one object `{"dicomBuffers": [...], "targetCount": n}`. Output is
//! a success envelope with the selected indices or a failure envelope with a
//! message; there is no partial output.

use crate::api::SliceSelector;
use crate::decode::decode_series;
use crate::error::{CtSliceError, Result};
use crate::types::{SelectionResult, DEFAULT_TARGET_COUNT};
use log::info;
use serde::{Deserialize, Serialize};

/// Incoming selection request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    /// Base64-encoded DICOM files in acquisition order
    #[serde(default)]
    pub dicom_buffers: Vec<String>,

    /// Number of slices to select
    #[serde(default)]
    pub target_count: Option<usize>,
}

impl SelectionRequest {
    /// Parses a request from JSON text
    pub fn parse(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Requested target, or the default of 200
    pub fn target(&self) -> usize {
        self.target_count.unwrap_or(DEFAULT_TARGET_COUNT)
    }
}

/// Body of a successful response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub success: bool,
    pub selected_indices: Vec<usize>,
    pub total_slices: usize,
    pub selected_count: usize,
}

/// Body of a failed response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureResponse {
    pub success: bool,
    pub error: String,
}

/// Outgoing response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SelectionResponse {
    Success(SuccessResponse),
    Failure(FailureResponse),
}

impl SelectionResponse {
    /// Success envelope for a completed selection
    pub fn success(result: &SelectionResult) -> Self {
        SelectionResponse::Success(SuccessResponse {
            success: true,
            selected_indices: result.selected_indices.clone(),
            total_slices: result.total_slices,
            selected_count: result.selected_count(),
        })
    }

    /// Failure envelope carrying an error message
    pub fn failure(error: impl Into<String>) -> Self {
        SelectionResponse::Failure(FailureResponse {
            success: false,
            error: error.into(),
        })
    }

    /// Returns whether this is a success envelope
    pub fn is_success(&self) -> bool {
        matches!(self, SelectionResponse::Success(_))
    }

    /// Serializes the envelope as a single JSON line
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Decodes the request buffers and runs selection
///
/// `target_override` takes precedence over the request's `targetCount`.
///
/// # Errors
///
/// Returns an error if the request carries no buffers. Individual buffers
/// that fail to decode are skipped, not reported as errors.
pub fn handle_request(
    request: &SelectionRequest,
    selector: &SliceSelector,
    target_override: Option<usize>,
) -> Result<SelectionResult> {
    if request.dicom_buffers.is_empty() {
        return Err(CtSliceError::RequestError(
            "No DICOM buffers provided".to_string(),
        ));
    }

    let target = target_override.unwrap_or_else(|| request.target());
    info!(
        "Received {} buffers, target count {}",
        request.dicom_buffers.len(),
        target
    );

    let series = decode_series(&request.dicom_buffers);
    Ok(selector.select(&series, target))
}

/// Runs one request end to end, mapping every error to a failure envelope
///
/// The selection result is returned alongside the envelope on success so
/// callers can report coverage.
pub fn respond(
    input: &str,
    selector: &SliceSelector,
    target_override: Option<usize>,
) -> (SelectionResponse, Option<SelectionResult>) {
    let outcome = SelectionRequest::parse(input)
        .and_then(|request| handle_request(&request, selector, target_override));

    match outcome {
        Ok(result) => (SelectionResponse::success(&result), Some(result)),
        Err(e) => (SelectionResponse::failure(e.to_string()), None),
    }
}
