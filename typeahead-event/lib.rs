//! Async event-loop primitives for the autocomplete core.
//!
//! Two building blocks live here: [`AsyncHook`], a framework for debounced
//! async event handlers running as a background tokio task, and the
//! [`TaskController`]/[`TaskHandle`] pair, a single owned cancelable-operation
//! handle with idempotent cancel. Together they bound the component to at
//! most one pending debounce deadline and at most one in-flight task.

mod cancel;
mod debounce;

pub use cancel::{
  TaskController,
  TaskHandle,
  cancelable_future,
};
pub use debounce::{
  AsyncHook,
  send_blocking,
};
