use std::fmt;

use serde::{Deserialize, Serialize};

/// Sub-code the JetStream API reports in the `err_code` field of an error reply.
///
/// The broker owns these values. The client compares them and never assigns
/// new meaning to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorCode(pub u16);

impl ErrorCode {
    pub const BAD_REQUEST: ErrorCode = ErrorCode(10003);
    pub const CONSUMER_NAME_EXISTS: ErrorCode = ErrorCode(10013);
    pub const CONSUMER_NOT_FOUND: ErrorCode = ErrorCode(10014);
    pub const MESSAGE_NOT_FOUND: ErrorCode = ErrorCode(10037);
    pub const JETSTREAM_NOT_ENABLED_FOR_ACCOUNT: ErrorCode = ErrorCode(10039);
    pub const STREAM_NAME_IN_USE: ErrorCode = ErrorCode(10058);
    pub const STREAM_NOT_FOUND: ErrorCode = ErrorCode(10059);
    pub const JETSTREAM_NOT_ENABLED: ErrorCode = ErrorCode(10076);
    pub const CONSUMER_ALREADY_EXISTS: ErrorCode = ErrorCode(10105);

    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether a registered sentinel carries this code.
    pub fn is_known(self) -> bool {
        crate::sentinels::lookup(self).is_some()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for ErrorCode {
    fn from(code: u16) -> Self {
        ErrorCode(code)
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}
