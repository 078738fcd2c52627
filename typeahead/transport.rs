//! The abstract network transport the completer fetches candidates through.

use async_trait::async_trait;
use thiserror::Error;

/// Raw outcome of one successful exchange with the endpoint. "Successful"
/// here means the transport delivered a response at all; whether the status
/// code is an error outcome is the completer's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status:       u16,
  /// The declared content type, used to pick the payload shape.
  pub content_type: String,
  pub body:         String,
}

impl Response {
  /// Any status at or above 300 is treated as an error outcome.
  pub fn is_error(&self) -> bool {
    self.status >= 300
  }
}

/// Failure to complete the exchange at all (connection refused, timeout,
/// dropped socket). Status-code errors are not transport errors; they come
/// back as a [`Response`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("network failure: {0}")]
pub struct TransportError(String);

impl TransportError {
  pub fn new(message: impl Into<String>) -> Self {
    Self(message.into())
  }
}

/// A cancelable GET-style fetch capability. Implementations are driven from
/// a background task, so they must be shareable across threads; cancelation
/// is handled outside the trait by dropping the future mid-flight.
#[async_trait]
pub trait Transport: Send + Sync {
  async fn fetch(&self, url: &str) -> Result<Response, TransportError>;
}
