//! Errors returned by [`ArxivClient`](crate::ArxivClient).

use crate::feed::MalformedDocument;
use crate::transport::TransportError;

/// Failure of a `search` or `get` call.
///
/// Both variants carry the underlying error unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request failed or the endpoint returned an error status
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body was not well-formed XML
    #[error(transparent)]
    MalformedDocument(#[from] MalformedDocument),
}
