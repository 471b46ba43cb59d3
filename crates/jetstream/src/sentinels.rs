//! Well-known JetStream failures.
//!
//! Every sentinel is an immutable `static`; share it by reference and compare
//! with [`JetStreamError::matches`].

use crate::api::ApiError;
use crate::code::ErrorCode;
use crate::error::{AsApiError, ClientError, JetStreamError};

const fn api(code: u16, err_code: ErrorCode, description: &'static str) -> JetStreamError {
    JetStreamError::Api(ApiError::from_static(code, err_code, description))
}

const fn client(message: &'static str) -> JetStreamError {
    JetStreamError::Client(ClientError::from_static(message))
}

// Reported by the broker.

pub static JETSTREAM_NOT_ENABLED: JetStreamError =
    api(503, ErrorCode::JETSTREAM_NOT_ENABLED, "jetstream not enabled");

pub static JETSTREAM_NOT_ENABLED_FOR_ACCOUNT: JetStreamError = api(
    503,
    ErrorCode::JETSTREAM_NOT_ENABLED_FOR_ACCOUNT,
    "jetstream not enabled for account",
);

pub static STREAM_NOT_FOUND: JetStreamError =
    api(404, ErrorCode::STREAM_NOT_FOUND, "stream not found");

/// A stream with this name exists with a different configuration.
pub static STREAM_NAME_ALREADY_IN_USE: JetStreamError = api(
    400,
    ErrorCode::STREAM_NAME_IN_USE,
    "stream name already in use",
);

pub static CONSUMER_NOT_FOUND: JetStreamError =
    api(404, ErrorCode::CONSUMER_NOT_FOUND, "consumer not found");

pub static CONSUMER_NAME_EXISTS: JetStreamError = api(
    400,
    ErrorCode::CONSUMER_NAME_EXISTS,
    "consumer name already exists",
);

pub static CONSUMER_ALREADY_EXISTS: JetStreamError = api(
    400,
    ErrorCode::CONSUMER_ALREADY_EXISTS,
    "consumer already exists",
);

/// No message at the requested sequence.
pub static MSG_NOT_FOUND: JetStreamError =
    api(404, ErrorCode::MESSAGE_NOT_FOUND, "message not found");

pub static BAD_REQUEST: JetStreamError = api(400, ErrorCode::BAD_REQUEST, "bad request");

// Detected by the client.

pub static CONSUMER_NAME_ALREADY_IN_USE: JetStreamError = client("consumer name already in use");

/// The publish acknowledgement could not be understood.
pub static INVALID_JS_ACK: JetStreamError = client("invalid jetstream publish response");

pub static STREAM_NAME_REQUIRED: JetStreamError = client("stream name is required");

pub static CONSUMER_NAME_REQUIRED: JetStreamError = client("consumer name is required");

pub static MSG_ALREADY_ACKD: JetStreamError = client("message was already acknowledged");

/// The request reached no responder, e.g. the stream is offline.
pub static NO_STREAM_RESPONSE: JetStreamError = client("no response from stream");

pub static NOT_JS_MESSAGE: JetStreamError = client("not a jetstream message");

/// Stream names may not contain `.`, `*`, `>` or whitespace.
pub static INVALID_STREAM_NAME: JetStreamError = client("invalid stream name");

pub static INVALID_CONSUMER_NAME: JetStreamError = client("invalid consumer name");

pub static NO_MESSAGES: JetStreamError = client("no messages");

pub static HANDLER_REQUIRED: JetStreamError = client("handler cannot be empty");

/// A paged listing has no further pages.
pub static END_OF_DATA: JetStreamError = client("end of data reached");

pub static NO_HEARTBEAT: JetStreamError =
    client("no heartbeat received, canceling subscription");

pub static CONSUMER_HAS_ACTIVE_SUBSCRIPTION: JetStreamError =
    client("consumer has active subscription");

pub static MSG_NOT_BOUND: JetStreamError =
    client("message is not bound to subscription/connection");

pub static MSG_NO_REPLY: JetStreamError = client("message does not have a reply");

pub static MSG_DELETE_UNSUCCESSFUL: JetStreamError = client("message deletion unsuccessful");

pub static ASYNC_PUBLISH_REPLY_SUBJECT_SET: JetStreamError = client("reply subject should be empty");

pub static TOO_MANY_STALLED_MSGS: JetStreamError =
    client("stalled with too many outstanding async published messages");

/// Broker-reported sentinels, one per registered [`ErrorCode`].
pub static API_ERRORS: [&JetStreamError; 9] = [
    &JETSTREAM_NOT_ENABLED,
    &JETSTREAM_NOT_ENABLED_FOR_ACCOUNT,
    &STREAM_NOT_FOUND,
    &STREAM_NAME_ALREADY_IN_USE,
    &CONSUMER_NOT_FOUND,
    &CONSUMER_NAME_EXISTS,
    &CONSUMER_ALREADY_EXISTS,
    &MSG_NOT_FOUND,
    &BAD_REQUEST,
];

pub static CLIENT_ERRORS: [&JetStreamError; 19] = [
    &CONSUMER_NAME_ALREADY_IN_USE,
    &INVALID_JS_ACK,
    &STREAM_NAME_REQUIRED,
    &CONSUMER_NAME_REQUIRED,
    &MSG_ALREADY_ACKD,
    &NO_STREAM_RESPONSE,
    &NOT_JS_MESSAGE,
    &INVALID_STREAM_NAME,
    &INVALID_CONSUMER_NAME,
    &NO_MESSAGES,
    &HANDLER_REQUIRED,
    &END_OF_DATA,
    &NO_HEARTBEAT,
    &CONSUMER_HAS_ACTIVE_SUBSCRIPTION,
    &MSG_NOT_BOUND,
    &MSG_NO_REPLY,
    &MSG_DELETE_UNSUCCESSFUL,
    &ASYNC_PUBLISH_REPLY_SUBJECT_SET,
    &TOO_MANY_STALLED_MSGS,
];

/// Returns the broker-reported sentinel registered for `code`.
pub fn lookup(code: ErrorCode) -> Option<&'static JetStreamError> {
    API_ERRORS.iter().copied().find(|sentinel| {
        sentinel
            .as_api_error()
            .is_some_and(|api| api.err_code() == code)
    })
}
