//! Utilities for declaring an async (usually debounced) hook

use std::time::Duration;

use futures_executor::block_on;
use tokio::{
  sync::mpsc::{
    self,
    Sender,
    error::TrySendError,
  },
  time::Instant,
};

/// Maximum time to block when sending to a full channel. Keep this very
/// short: dropping a keystroke event is better than freezing the input.
const SEND_TIMEOUT_MS: u64 = 2;

/// Async hooks provide a framework for implementing (debounced) async event
/// handlers. The hook runs as a background tokio task that waits for events
/// (usually an enum) sent through a channel, tracking at most one debounce
/// deadline at a time.
pub trait AsyncHook: Sync + Send + 'static + Sized {
  type Event: Sync + Send + 'static;

  /// Called immediately whenever an event is received. This function can
  /// consume the event immediately or debounce it, either arming a new
  /// debounce deadline or keeping the current one.
  fn handle_event(&mut self, event: Self::Event, timeout: Option<Instant>) -> Option<Instant>;

  /// Called whenever the debounce deadline is reached
  fn finish_debounce(&mut self);

  fn spawn(self) -> mpsc::Sender<Self::Event> {
    // Rapid typing produces bursts of events; headroom keeps the sync side
    // from ever blocking in practice.
    let (tx, rx) = mpsc::channel(64);
    // only spawn the worker inside a runtime so unrelated unit tests don't
    // need to stand one up
    if tokio::runtime::Handle::try_current().is_ok() {
      tokio::spawn(run(self, rx));
    }
    tx
  }
}

async fn run<Hook: AsyncHook>(mut hook: Hook, mut rx: mpsc::Receiver<Hook::Event>) {
  let mut deadline = None;
  loop {
    let event = match deadline {
      Some(instant) => match tokio::time::timeout_at(instant, rx.recv()).await {
        Ok(event) => event,
        Err(_) => {
          hook.finish_debounce();
          deadline = None;
          continue;
        },
      },
      None => rx.recv().await,
    };
    let Some(event) = event else {
      break;
    };
    deadline = hook.handle_event(event, deadline);
  }
}

/// Send an event to a channel, blocking only briefly if the channel is full.
///
/// Designed to be called from synchronous code (the input-event dispatcher)
/// that needs to reach the async hook. Responsiveness wins over reliability:
/// a non-blocking send is tried first, then a bounded `SEND_TIMEOUT_MS`
/// blocking send, and past that the event is dropped.
pub fn send_blocking<T>(tx: &Sender<T>, data: T) {
  match tx.try_send(data) {
    Ok(()) => {},
    Err(TrySendError::Full(data)) => {
      let _ = block_on(tx.send_timeout(data, Duration::from_millis(SEND_TIMEOUT_MS)));
    },
    Err(TrySendError::Closed(_)) => {
      log::warn!("Attempted to send to closed channel");
    },
  }
}
