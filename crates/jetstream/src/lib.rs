//! Error taxonomy for the NATS JetStream client.
//!
//! Failures come in two shapes. [`ApiError`] mirrors the `error` object of a
//! JetStream API reply (`code`, `err_code`, `description`). [`ClientError`] is
//! raised locally and may wrap an [`ApiError`] to add context. Both travel as
//! [`JetStreamError`].
//!
//! Callers recognise a failure by matching it against one of the sentinels in
//! [`sentinels`]. Broker errors are identified by their [`ErrorCode`] alone, so
//! an error decoded from a live reply matches the sentinel whatever its
//! description, and so does any error that keeps it in its `source()` chain.
//!
//! ```
//! use jetstream::{ApiError, ErrorCode, JetStreamError, sentinels};
//!
//! let live: JetStreamError = ApiError::new(404, ErrorCode(10059), "stream not found: ORDERS").into();
//! assert!(sentinels::STREAM_NOT_FOUND.matches(&live));
//! assert!(!sentinels::CONSUMER_NOT_FOUND.matches(&live));
//! ```

pub mod api;
pub mod code;
pub mod error;
pub mod matching;
pub mod response;
pub mod sentinels;

#[cfg(test)]
mod test_util;

pub use crate::api::ApiError;
pub use crate::code::ErrorCode;
pub use crate::error::{AsApiError, ClientError, JetStreamError, Result, is};
pub use crate::matching::{find_api_error, matches_api_error};
pub use crate::response::ApiResponse;

/// Prefix of every rendered error message.
pub const NAMESPACE: &str = "nats";
