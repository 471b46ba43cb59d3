//! Chain walking used to recognise JetStream failures behind other errors.
//!
//! Transport and decoding layers are expected to keep the JetStream error in
//! their `source()` chain, either as an explicit `#[source]` or behind an
//! `#[error(transparent)]` variant. The walk follows that chain and looks at
//! every link.

use std::error::Error as StdError;

use crate::api::ApiError;
use crate::error::{AsApiError, ClientError, JetStreamError};

/// Iterates over `err` and each of its transitive sources.
pub fn walk<'a>(
    err: &'a (dyn StdError + 'static),
) -> impl Iterator<Item = &'a (dyn StdError + 'static)> {
    std::iter::successors(Some(err), |link| (*link).source())
}

/// Returns the first broker-reported error found in the chain of `err`.
pub fn find_api_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a ApiError> {
    walk(err).find_map(|link| {
        if let Some(api) = link.downcast_ref::<ApiError>() {
            return Some(api);
        }
        if let Some(js) = link.downcast_ref::<JetStreamError>() {
            return js.as_api_error();
        }
        link.downcast_ref::<ClientError>()
            .and_then(|client| client.as_api_error())
    })
}

pub(crate) fn find_client_error<'a>(
    err: &'a (dyn StdError + 'static),
) -> Option<&'a ClientError> {
    walk(err).find_map(|link| match link.downcast_ref::<JetStreamError>() {
        Some(JetStreamError::Client(client)) => Some(client),
        Some(JetStreamError::Api(_)) => None,
        None => link.downcast_ref::<ClientError>(),
    })
}

/// Matches `err` against an optional target.
///
/// An absent target never matches, which lets callers pass
/// `sentinel.as_api_error()` for any sentinel without first checking whether
/// it is broker-backed.
pub fn matches_api_error(target: Option<&ApiError>, err: &(dyn StdError + 'static)) -> bool {
    target.is_some_and(|target| target.matches(err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ErrorCode;

    #[derive(Debug, thiserror::Error)]
    #[error("request failed")]
    struct RequestError {
        #[source]
        inner: JetStreamError,
    }

    #[test]
    fn walk_visits_every_link() {
        let api = ApiError::new(404, ErrorCode::STREAM_NOT_FOUND, "stream not found");
        let client = ClientError::with_api_error("lookup failed", api);
        let links: Vec<String> = walk(&client).map(|link| link.to_string()).collect();
        assert_eq!(links.len(), 2);
        assert_eq!(links[1], "nats: API error 10059: stream not found");
    }

    #[test]
    fn finds_api_error_behind_enum_variant() {
        let err = RequestError {
            inner: ApiError::new(404, ErrorCode::CONSUMER_NOT_FOUND, "consumer not found").into(),
        };
        let found = find_api_error(&err).expect("api error in chain");
        assert_eq!(found.err_code(), ErrorCode::CONSUMER_NOT_FOUND);
    }

    #[test]
    fn pure_client_chain_has_no_api_error() {
        let err = RequestError {
            inner: ClientError::new("no messages").into(),
        };
        assert!(find_api_error(&err).is_none());
        assert_eq!(
            find_client_error(&err).map(ClientError::message),
            Some("no messages")
        );
    }

    #[test]
    fn absent_target_never_matches() {
        let err = ApiError::new(400, ErrorCode::BAD_REQUEST, "bad request");
        assert!(!matches_api_error(None, &err));
        assert!(matches_api_error(Some(&err), &err));
    }
}
