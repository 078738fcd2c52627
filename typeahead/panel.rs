//! The rendering surface the panel lives on.

use std::time::Duration;

use crate::{
  geometry::PanelPlacement,
  item::{
    Candidate,
    ResultSet,
  },
};

/// The concrete panel representation — a floating list in some UI toolkit.
/// The completer drives it; it never inspects the toolkit.
///
/// Surfaces own the rendered elements, so they are also the authority on
/// per-item metrics and on resolving an element index back to candidate
/// data (for pre-rendered result sets the rendered markup is the only place
/// that data exists).
pub trait Surface {
  fn panel_open(&self) -> bool;

  /// Create the panel, insert it into the document, render `results` and
  /// run the appearance transition over `appear`. The surface must wire a
  /// pointer-down handler on every rendered candidate that feeds
  /// [`InputEvent::PointerCommit`](crate::event::InputEvent::PointerCommit)
  /// back into the completer.
  fn open_panel(&mut self, results: &ResultSet, appear: Duration);

  /// Replace the existing panel's rendered content in place.
  fn update_panel(&mut self, results: &ResultSet);

  /// After `delay`, run the disappearance transition over `fade` and remove
  /// the panel on completion. A panel already gone when the transition
  /// lands is a no-op, not an error. Safe to call redundantly.
  fn close_panel(&mut self, delay: Duration, fade: Duration);

  fn place_panel(&mut self, placement: PanelPlacement);

  /// Apply the selected marking to `index` and clear it everywhere else;
  /// `None` clears it everywhere.
  fn mark_selected(&mut self, index: Option<usize>);

  /// Number of rendered candidate elements.
  fn rendered_count(&self) -> usize;

  /// Vertical offset of a rendered item relative to the scroll container's
  /// content origin — unaffected by the current scroll position.
  fn item_offset(&self, index: usize) -> f32;

  fn item_height(&self, index: usize) -> f32;

  /// Visible height of the panel's scroll container.
  fn panel_height(&self) -> f32;

  fn scroll_top(&self) -> f32;

  fn set_scroll_top(&mut self, offset: f32);

  /// Resolve rendered element `index` back to its candidate data.
  fn candidate_at(&self, index: usize) -> Option<Candidate>;

  /// Surface an error message to the user. Only called when the completer
  /// was configured to report errors.
  fn report_error(&mut self, message: &str);
}
