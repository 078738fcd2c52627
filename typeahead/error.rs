use thiserror::Error;

use crate::transport::TransportError;

/// Everything that can go wrong between dispatching a request and producing
/// a result set. None of these is fatal to the completer: with
/// `report_errors` on, the message is surfaced to the user; off, it is
/// logged and absorbed and the prior panel state stands.
#[derive(Debug, Error)]
pub enum CompleteError {
  #[error("request failed with status {status}: {message}")]
  Status { status: u16, message: String },

  #[error(transparent)]
  Transport(#[from] TransportError),

  #[error("server reported failure: {0}")]
  Payload(String),

  #[error("malformed response: {0}")]
  MalformedResponse(String),
}
