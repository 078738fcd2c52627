//! Host-facing input events, decoupled from any concrete UI toolkit.

/// One user-interaction event, translated by the host from its native event
/// system and fed to [`Completer::dispatch`](crate::Completer::dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
  /// The field gained focus.
  Focus,
  /// The field lost focus.
  Blur,
  /// The field text changed. Hosts must not emit this for navigation keys
  /// (arrows, Enter, Tab) — those arrive as [`InputEvent::Navigate`].
  Edited,
  /// A navigation key went down.
  Navigate(NavKey),
  /// Pointer-down on rendered candidate `index`.
  PointerCommit(usize),
  /// An ancestor container scrolled or the window resized.
  ViewportChanged,
}

/// The keys that drive the panel instead of editing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
  Up,
  Down,
  Enter,
  Tab,
}
