use std::borrow::Cow;
use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::NAMESPACE;
use crate::code::ErrorCode;
use crate::matching::find_api_error;

/// Error reported by the JetStream API in the `error` field of a reply.
///
/// Two values are the same kind of failure when their [`ErrorCode`]s are equal.
/// The status code and the description are informational only, so an error
/// decoded from a live reply matches the registered sentinel even when a
/// broker version words the description differently.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: API error {}: {}", NAMESPACE, .err_code, .description)]
pub struct ApiError {
    code: u16,
    err_code: ErrorCode,
    #[serde(default, skip_serializing_if = "is_empty")]
    description: Cow<'static, str>,
}

fn is_empty(description: &Cow<'static, str>) -> bool {
    description.is_empty()
}

impl ApiError {
    pub fn new(
        code: u16,
        err_code: ErrorCode,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            code,
            err_code,
            description: description.into(),
        }
    }

    /// Builds an error without allocating, for use in `static` items.
    pub const fn from_static(code: u16, err_code: ErrorCode, description: &'static str) -> Self {
        Self {
            code,
            err_code,
            description: Cow::Borrowed(description),
        }
    }

    /// HTTP-like status of the reply (404, 400, 503, ...).
    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn err_code(&self) -> ErrorCode {
        self.err_code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Reports whether `err`, or anything in its `source()` chain, carries an
    /// API error with the same sub-code as `self`.
    pub fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        find_api_error(err).is_some_and(|found| found.err_code == self.err_code)
    }
}
