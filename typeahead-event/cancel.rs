//! Cancelation primitives for at-most-one in-flight task.
//!
//! A [`TaskController`] owns the lifecycle of one cancelable operation:
//! [`restart`](TaskController::restart) cancels whatever was running and
//! hands out a fresh [`TaskHandle`] for the replacement. Wrapping the task
//! in [`cancelable_future`] makes cancelation take effect at the next await
//! point, before any output is produced.

use std::{
  future::Future,
  sync::{
    Arc,
    atomic::{
      AtomicBool,
      Ordering,
    },
  },
};

use tokio::sync::Notify;

#[derive(Debug)]
struct Flag {
  canceled: AtomicBool,
  notify:   Notify,
}

/// Shared view of one cancelable operation. Clones observe the same
/// cancelation flag; the controller that issued the handle flips it.
#[derive(Clone, Debug)]
pub struct TaskHandle {
  flag: Arc<Flag>,
}

impl TaskHandle {
  fn new() -> Self {
    Self {
      flag: Arc::new(Flag {
        canceled: AtomicBool::new(false),
        notify:   Notify::new(),
      }),
    }
  }

  pub fn is_canceled(&self) -> bool {
    self.flag.canceled.load(Ordering::Acquire)
  }

  /// Resolves once the handle is canceled. Immediately ready if cancelation
  /// already happened.
  pub async fn canceled(&self) {
    loop {
      // Register interest before checking the flag so a cancel landing in
      // between cannot be missed.
      let notified = self.flag.notify.notified();
      tokio::pin!(notified);
      notified.as_mut().enable();
      if self.is_canceled() {
        return;
      }
      notified.await;
    }
  }

  fn cancel(&self) {
    self.flag.canceled.store(true, Ordering::Release);
    self.flag.notify.notify_waiters();
  }
}

/// Owner of at most one running task. Canceling is idempotent; restarting
/// cancels the predecessor before issuing the replacement handle, which is
/// the sole ordering guarantee the scheduler relies on.
#[derive(Debug, Default)]
pub struct TaskController {
  active: Option<TaskHandle>,
}

impl TaskController {
  pub fn new() -> Self {
    Self { active: None }
  }

  /// Cancel the current task (if any) and issue a handle for its
  /// replacement.
  pub fn restart(&mut self) -> TaskHandle {
    self.cancel();
    let handle = TaskHandle::new();
    self.active = Some(handle.clone());
    handle
  }

  /// Cancel the current task. Safe to call redundantly.
  pub fn cancel(&mut self) {
    if let Some(handle) = self.active.take() {
      handle.cancel();
    }
  }

  /// Whether a task issued by [`restart`](Self::restart) is still alive:
  /// not canceled, and some clone of its handle is still held.
  pub fn is_running(&self) -> bool {
    self
      .active
      .as_ref()
      .is_some_and(|handle| !handle.is_canceled() && Arc::strong_count(&handle.flag) > 1)
  }
}

impl Drop for TaskController {
  fn drop(&mut self) {
    self.cancel();
  }
}

/// Run `future` until completion or until `handle` is canceled, whichever
/// comes first. Returns `None` on cancelation; a handle canceled up front
/// resolves to `None` without polling the future at all.
pub async fn cancelable_future<T>(future: impl Future<Output = T>, handle: TaskHandle) -> Option<T> {
  tokio::select! {
    biased;
    _ = handle.canceled() => None,
    result = future => Some(result),
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  #[tokio::test]
  async fn future_completes_when_not_canceled() {
    let mut controller = TaskController::new();
    let handle = controller.restart();

    let result = cancelable_future(async { 7 }, handle).await;
    assert_eq!(result, Some(7));
  }

  #[tokio::test]
  async fn canceled_handle_short_circuits() {
    let mut controller = TaskController::new();
    let handle = controller.restart();
    controller.cancel();

    let result = cancelable_future(async { 7 }, handle).await;
    assert_eq!(result, None);
  }

  #[tokio::test(start_paused = true)]
  async fn restart_cancels_predecessor() {
    let mut controller = TaskController::new();
    let first = controller.restart();

    let pending = tokio::spawn(cancelable_future(
      async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        1
      },
      first,
    ));

    let _second = controller.restart();
    let result = pending.await.unwrap();
    assert_eq!(result, None);
  }

  #[tokio::test]
  async fn is_running_tracks_handle_lifetime() {
    let mut controller = TaskController::new();
    assert!(!controller.is_running());

    let handle = controller.restart();
    assert!(controller.is_running());

    drop(handle);
    assert!(!controller.is_running());

    let handle = controller.restart();
    controller.cancel();
    assert!(!controller.is_running());
    drop(handle);
  }
}
