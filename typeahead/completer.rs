//! The completer: event dispatch, visibility control and the glue between
//! the request hook, the normalizer and the adapters.

use std::sync::Arc;

use tokio::sync::mpsc::{
  self,
  Receiver,
  Sender,
};
use typeahead_event::send_blocking;

use crate::{
  commit::{
    self,
    CommitSource,
  },
  config::{
    Callbacks,
    CompleterConfig,
    ConfigError,
  },
  error::CompleteError,
  event::{
    InputEvent,
    NavKey,
  },
  field::{
    InputField,
    ValueStore,
  },
  geometry::{
    self,
    Geometry,
  },
  item::ResultSet,
  menu,
  panel::Surface,
  response,
  scheduler::{
    FetchOutcome,
    QueryEvent,
    RequestHook,
  },
  transport::Transport,
};

/// Capacity of the fetch-outcome channel. One request is in flight at a
/// time; the headroom only covers outcomes the host has not pumped yet.
const OUTCOME_CHANNEL_CAPACITY: usize = 8;

/// Attachable autocomplete behavior for a single text input.
///
/// The host translates its native events into [`InputEvent`]s and feeds
/// them to [`dispatch`](Self::dispatch); fetch outcomes produced by the
/// background hook are folded in by calling
/// [`poll_responses`](Self::poll_responses) from the host's event loop.
/// All state mutation happens on the caller's thread.
pub struct Completer {
  config:     CompleterConfig,
  callbacks:  Callbacks,
  field:      Box<dyn InputField>,
  store:      Box<dyn ValueStore>,
  geometry:   Box<dyn Geometry>,
  surface:    Box<dyn Surface>,
  /// Highlighted candidate, `None` while nothing is highlighted. Reset on
  /// every new result set.
  selected:   Option<usize>,
  /// The result set currently rendered, if any.
  results:    Option<ResultSet>,
  query_tx:   Sender<QueryEvent>,
  outcome_rx: Receiver<FetchOutcome>,
}

impl Completer {
  /// Validate the configuration, spawn the request hook and attach.
  ///
  /// Must be called from within a tokio runtime so the hook task can be
  /// spawned alongside.
  pub fn attach(
    config: CompleterConfig,
    callbacks: Callbacks,
    transport: Arc<dyn Transport>,
    field: Box<dyn InputField>,
    store: Box<dyn ValueStore>,
    geometry: Box<dyn Geometry>,
    surface: Box<dyn Surface>,
  ) -> Result<Self, ConfigError> {
    config.validate()?;
    let (outcome_tx, outcome_rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
    let query_tx = RequestHook::new(transport, &config, outcome_tx).spawn();

    Ok(Self {
      config,
      callbacks,
      field,
      store,
      geometry,
      surface,
      selected: None,
      results: None,
      query_tx,
      outcome_rx,
    })
  }

  /// Route one host event through the dispatch table.
  pub fn dispatch(&mut self, event: InputEvent) {
    match event {
      InputEvent::Focus => {
        if self.config.should_complete_on_focus {
          self.schedule_request();
        }
      },
      InputEvent::Blur => self.end_editing(),
      InputEvent::Edited => self.schedule_request(),
      InputEvent::Navigate(key) => self.navigate(key),
      InputEvent::PointerCommit(index) => self.pointer_commit(index),
      InputEvent::ViewportChanged => {
        if self.surface.panel_open() {
          self
            .surface
            .place_panel(geometry::compute_placement(self.geometry.as_ref()));
        }
      },
    }
  }

  /// Drain fetch outcomes delivered since the last pump and fold them into
  /// panel state. Call from the host's event loop.
  pub fn poll_responses(&mut self) {
    while let Ok(outcome) = self.outcome_rx.try_recv() {
      self.apply_outcome(outcome);
    }
  }

  /// The highlighted candidate index, if any.
  pub fn selection(&self) -> Option<usize> {
    self.selected
  }

  /// The result set currently rendered, if any.
  pub fn results(&self) -> Option<&ResultSet> {
    self.results.as_ref()
  }

  fn schedule_request(&mut self) {
    // The empty-field check lives here, before the hook ever sees the
    // event: no timer, no request.
    let text = self.field.text();
    if !self.config.allow_empty_requests && text.is_empty() {
      return;
    }
    send_blocking(&self.query_tx, QueryEvent::Schedule { text });
  }

  fn apply_outcome(&mut self, outcome: FetchOutcome) {
    let normalized = match outcome {
      FetchOutcome::Failed(err) => Err(CompleteError::Transport(err)),
      FetchOutcome::Response(response) if response.is_error() => {
        Err(CompleteError::Status {
          status:  response.status,
          message: response.body,
        })
      },
      FetchOutcome::Response(response) => {
        response::normalize(&response.content_type, &response.body)
      },
    };

    match normalized {
      Ok(results) => self.show(results),
      Err(err) => self.report(err),
    }
  }

  fn report(&mut self, err: CompleteError) {
    if self.config.report_errors {
      self.surface.report_error(&err.to_string());
    } else {
      // Prior panel state stands until the next successful response.
      log::debug!("candidate request failed: {err}");
    }
  }

  /// Visibility controller: render `results`, or defer to [`Self::hide`]
  /// when the set is empty.
  fn show(&mut self, results: ResultSet) {
    if results.is_empty() {
      self.hide();
      return;
    }

    // A fresh result set always clears the highlight.
    self.selected = None;
    self
      .surface
      .place_panel(geometry::compute_placement(self.geometry.as_ref()));
    if self.surface.panel_open() {
      self.surface.update_panel(&results);
    } else {
      self
        .surface
        .open_panel(&results, self.config.appear_duration);
    }
    self.surface.mark_selected(None);
    self.results = Some(results);
  }

  /// Close the panel and tear down all pending work — the debounce timer
  /// and the in-flight request — unconditionally. Safe to call redundantly.
  fn hide(&mut self) {
    send_blocking(&self.query_tx, QueryEvent::Cancel);
    self.results = None;
    self.selected = None;
    self
      .surface
      .close_panel(self.config.fade_delay, self.config.fade_duration);
  }

  fn navigate(&mut self, key: NavKey) {
    // Navigation only exists while a panel does.
    if !self.surface.panel_open() {
      return;
    }

    match key {
      NavKey::Down => {
        let next = menu::next_index(self.selected, self.surface.rendered_count());
        if let Some(index) = next {
          let correction = menu::scroll_after_down(
            self.surface.item_offset(index),
            self.surface.item_height(index),
            self.surface.panel_height(),
          );
          if let Some(scroll_top) = correction {
            self.surface.set_scroll_top(scroll_top);
          }
        }
        self.select(next);
      },
      NavKey::Up => {
        let prev = menu::prev_index(self.selected, self.surface.rendered_count());
        if let Some(index) = prev {
          let correction =
            menu::scroll_after_up(self.surface.item_offset(index), self.surface.scroll_top());
          if let Some(scroll_top) = correction {
            self.surface.set_scroll_top(scroll_top);
          }
        }
        self.select(prev);
      },
      NavKey::Enter | NavKey::Tab => self.commit_selection(),
    }
  }

  fn select(&mut self, index: Option<usize>) {
    self.selected = index;
    self.surface.mark_selected(index);
  }

  /// Enter/Tab: a highlighted candidate commits as a structured item (the
  /// panel stays open); with nothing highlighted the raw field text
  /// commits and the panel closes.
  fn commit_selection(&mut self) {
    let resolved = self
      .selected
      .and_then(|index| self.surface.candidate_at(index));

    match resolved {
      Some(item) => {
        commit::commit(
          CommitSource::Item(item),
          &self.config,
          &mut self.callbacks,
          self.field.as_mut(),
          self.store.as_mut(),
        );
      },
      None => {
        commit::commit(
          CommitSource::Text(self.field.text()),
          &self.config,
          &mut self.callbacks,
          self.field.as_mut(),
          self.store.as_mut(),
        );
        self.hide();
      },
    }
  }

  fn pointer_commit(&mut self, index: usize) {
    if !self.surface.panel_open() {
      return;
    }
    if let Some(item) = self.surface.candidate_at(index) {
      commit::commit(
        CommitSource::Item(item),
        &self.config,
        &mut self.callbacks,
        self.field.as_mut(),
        self.store.as_mut(),
      );
    }
  }

  /// Blur: run the abandoned-empty callback against the store's prior
  /// content, then tear the panel down.
  fn end_editing(&mut self) {
    if self.store.value().trim().is_empty() {
      let text = self.field.text();
      if let Some(on_end) = self.callbacks.on_end_without_value.as_mut() {
        on_end(&text);
      }
    }
    self.hide();
  }
}
