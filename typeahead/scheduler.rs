//! Debounced request scheduling with at-most-one in-flight fetch.
//!
//! The hook runs as a background task (see `typeahead-event`). Scheduling
//! replaces the pending debounce deadline and cancels the in-flight fetch
//! before anything else happens, so the last scheduled request always wins
//! and a superseded response can never reach the outcome channel.

use std::{
  sync::Arc,
  time::Duration,
};

use encoding_rs::Encoding;
use tokio::{
  sync::mpsc::Sender,
  time::Instant,
};
use typeahead_event::{
  AsyncHook,
  TaskController,
  cancelable_future,
};
use url::form_urlencoded;

use crate::{
  config::CompleterConfig,
  transport::{
    Response,
    Transport,
    TransportError,
  },
};

/// Events consumed by the request hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEvent {
  /// Debounce, then fetch candidates for `text`.
  Schedule { text: String },
  /// Drop the pending request and cancel any in-flight fetch. Idempotent;
  /// safe to send redundantly.
  Cancel,
}

/// Raw outcome of one fetch, delivered to the completer's outcome channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
  Response(Response),
  Failed(TransportError),
}

/// Async hook debouncing candidate requests.
pub struct RequestHook {
  transport:    Arc<dyn Transport>,
  request_url:  String,
  search_param: String,
  encoding:     &'static Encoding,
  delay:        Duration,
  /// The field text waiting for the debounce deadline (if any).
  pending:      Option<String>,
  /// Controller for canceling the in-flight fetch.
  controller:   TaskController,
  outcome_tx:   Sender<FetchOutcome>,
}

impl RequestHook {
  pub fn new(
    transport: Arc<dyn Transport>,
    config: &CompleterConfig,
    outcome_tx: Sender<FetchOutcome>,
  ) -> Self {
    Self {
      transport,
      request_url: config.request_url.clone(),
      search_param: config.request_search_param_name.clone(),
      encoding: config.request_encoding,
      delay: config.request_delay,
      pending: None,
      controller: TaskController::new(),
      outcome_tx,
    }
  }

  /// Spawn the async hook and return its sender
  pub fn spawn(self) -> Sender<QueryEvent> {
    AsyncHook::spawn(self)
  }
}

impl AsyncHook for RequestHook {
  type Event = QueryEvent;

  fn handle_event(&mut self, event: Self::Event, _timeout: Option<Instant>) -> Option<Instant> {
    match event {
      QueryEvent::Schedule { text } => {
        // Last scheduled wins: the in-flight fetch dies before the
        // replacement deadline is armed.
        self.controller.cancel();
        self.pending = Some(text);
        Some(Instant::now() + self.delay)
      },
      QueryEvent::Cancel => {
        self.pending = None;
        self.controller.cancel();
        None
      },
    }
  }

  fn finish_debounce(&mut self) {
    let Some(text) = self.pending.take() else {
      return;
    };

    let url = query_url(&self.request_url, &self.search_param, &text, self.encoding);
    let handle = self.controller.restart();
    let transport = Arc::clone(&self.transport);
    let outcome_tx = self.outcome_tx.clone();
    log::debug!("dispatching candidate request: {url}");

    tokio::spawn(cancelable_future(
      async move {
        let outcome = match transport.fetch(&url).await {
          Ok(response) => FetchOutcome::Response(response),
          Err(err) => FetchOutcome::Failed(err),
        };
        // Still inside the cancelable region: a canceled request can never
        // deliver an outcome.
        let _ = outcome_tx.send(outcome).await;
      },
      handle,
    ));
  }
}

/// Append the search parameter to the endpoint, picking `&` vs `?` by
/// whether the endpoint already carries a query string. The term is encoded
/// with `encoding` before percent-encoding.
pub fn query_url(request_url: &str, param: &str, text: &str, encoding: &'static Encoding) -> String {
  let separator = if request_url.contains('?') { '&' } else { '?' };
  let (encoded, _, _) = encoding.encode(text);
  let escaped: String = form_urlencoded::byte_serialize(&encoded).collect();
  format!("{request_url}{separator}{param}={escaped}")
}
