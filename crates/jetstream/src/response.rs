use serde::{Deserialize, Serialize};

use crate::api::ApiError;
use crate::error::{JetStreamError, Result};

/// Envelope shared by every JetStream API reply.
///
/// Typed replies embed it with `#[serde(flatten)]` next to their payload
/// fields and call [`ApiResponse::into_result`] (or [`ApiResponse::check`])
/// before trusting the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub response_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl ApiResponse {
    /// Like [`ApiResponse::into_result`], without consuming the envelope.
    pub fn check(&self) -> Result<()> {
        match &self.error {
            None => Ok(()),
            Some(err) => Err(reject(&self.response_type, err.clone())),
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self.error {
            None => Ok(()),
            Some(err) => Err(reject(&self.response_type, err)),
        }
    }
}

fn reject(response_type: &str, err: ApiError) -> JetStreamError {
    if !err.err_code().is_known() {
        tracing::debug!(
            response_type,
            code = err.code(),
            err_code = err.err_code().get(),
            "jetstream api returned unregistered error code"
        );
    }
    JetStreamError::Api(err)
}
