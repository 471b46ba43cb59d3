use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::NAMESPACE;
use crate::api::ApiError;
use crate::matching::find_client_error;

/// Exposes the broker-reported error carried by a failure, if any.
///
/// `None` means the failure was detected locally. It is never a stand-in for
/// a zero-valued [`ApiError`].
pub trait AsApiError {
    fn as_api_error(&self) -> Option<&ApiError>;
}

/// Failure detected by the client without a broker round-trip.
///
/// May embed the [`ApiError`] that caused it, in which case matching uses the
/// embedded error's sub-code and the embedded error becomes its `source()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientError {
    message: Cow<'static, str>,
    api_error: Option<ApiError>,
}

impl ClientError {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
            api_error: None,
        }
    }

    pub const fn from_static(message: &'static str) -> Self {
        Self {
            message: Cow::Borrowed(message),
            api_error: None,
        }
    }

    /// Adds local context on top of a broker error while keeping its identity.
    pub fn with_api_error(message: impl Into<Cow<'static, str>>, api_error: ApiError) -> Self {
        Self {
            message: message.into(),
            api_error: Some(api_error),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl AsApiError for ClientError {
    fn as_api_error(&self) -> Option<&ApiError> {
        self.api_error.as_ref()
    }
}

impl AsApiError for ApiError {
    fn as_api_error(&self) -> Option<&ApiError> {
        Some(self)
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.api_error {
            Some(api) if !api.description().is_empty() => write!(f, "{api}"),
            _ => write!(f, "{NAMESPACE}: {}", self.message),
        }
    }
}

impl StdError for ClientError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.api_error
            .as_ref()
            .map(|api| api as &(dyn StdError + 'static))
    }
}

/// Every failure the JetStream client reports.
///
/// Each variant renders as its inner error and exposes it as `source()`, so
/// the inner error stays reachable when another layer wraps this one with
/// `#[error(transparent)]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JetStreamError {
    #[error("{0}")]
    Api(#[from] ApiError),
    #[error("{0}")]
    Client(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, JetStreamError>;

impl JetStreamError {
    pub fn is_api(&self) -> bool {
        matches!(self, JetStreamError::Api(_))
    }

    pub fn is_client(&self) -> bool {
        matches!(self, JetStreamError::Client(_))
    }

    /// Reports whether `err` is the same kind of failure as `self`.
    ///
    /// Errors backed by an [`ApiError`] compare by sub-code anywhere in the
    /// `source()` chain of `err`. Purely local errors compare equal to a client
    /// error with the same message found in that chain.
    pub fn matches(&self, err: &(dyn StdError + 'static)) -> bool {
        match self {
            JetStreamError::Api(api) => api.matches(err),
            JetStreamError::Client(client) => match &client.api_error {
                Some(api) => api.matches(err),
                None => find_client_error(err).is_some_and(|found| found == client),
            },
        }
    }
}

impl AsApiError for JetStreamError {
    fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            JetStreamError::Api(api) => Some(api),
            JetStreamError::Client(client) => client.as_api_error(),
        }
    }
}

/// Free-function form of [`JetStreamError::matches`], for call sites holding a
/// boxed or borrowed `dyn Error`.
pub fn is(err: &(dyn StdError + 'static), target: &JetStreamError) -> bool {
    target.matches(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ErrorCode;

    #[test]
    fn client_error_is_prefixed_with_namespace() {
        let err = ClientError::new("stream name is required");
        assert_eq!(err.to_string(), "nats: stream name is required");
        assert!(err.as_api_error().is_none());
        assert!(err.source().is_none());
    }

    #[test]
    fn composite_delegates_display_to_described_api_error() {
        let api = ApiError::new(503, ErrorCode(10023), "insufficient resources");
        let err = ClientError::with_api_error("no response from stream", api.clone());
        assert_eq!(err.to_string(), "nats: API error 10023: insufficient resources");
        assert_eq!(err.as_api_error(), Some(&api));
    }

    #[test]
    fn composite_keeps_own_message_when_api_error_has_no_description() {
        let api = ApiError::new(503, ErrorCode(10023), "");
        let err = ClientError::with_api_error("no response from stream", api);
        assert_eq!(err.to_string(), "nats: no response from stream");
    }

    #[test]
    fn composite_unwraps_to_embedded_api_error() {
        let api = ApiError::new(404, ErrorCode::STREAM_NOT_FOUND, "stream not found");
        let err = ClientError::with_api_error("lookup failed", api.clone());
        let source = err.source().expect("embedded api error");
        assert_eq!(source.downcast_ref::<ApiError>(), Some(&api));
    }

    #[test]
    fn enum_renders_and_sources_its_inner_shape() {
        let api: JetStreamError = ApiError::new(400, ErrorCode::BAD_REQUEST, "bad request").into();
        assert!(api.is_api());
        assert_eq!(api.to_string(), "nats: API error 10003: bad request");
        let source = api.source().expect("inner api error");
        assert_eq!(
            source.downcast_ref::<ApiError>().map(ApiError::err_code),
            Some(ErrorCode::BAD_REQUEST)
        );

        let client: JetStreamError = ClientError::new("no messages").into();
        assert!(client.is_client());
        assert_eq!(client.to_string(), "nats: no messages");
        assert!(client.as_api_error().is_none());
        let source = client.source().expect("inner client error");
        assert_eq!(
            source.downcast_ref::<ClientError>().map(ClientError::message),
            Some("no messages")
        );
    }

    #[test]
    fn client_errors_match_by_message() {
        let a = JetStreamError::Client(ClientError::new("no messages"));
        let b = JetStreamError::Client(ClientError::from_static("no messages"));
        let c = JetStreamError::Client(ClientError::new("no heartbeat"));
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
        assert!(is(&b, &a));
    }
}
