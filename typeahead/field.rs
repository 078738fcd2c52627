//! The companion elements the completer reads and writes: the text input
//! it is attached to, and the value store receiving committed values.

/// The text input being completed. The completer reads the current text to
/// build requests and writes a candidate's display name back on commit.
pub trait InputField {
  fn text(&self) -> String;
  fn set_text(&mut self, text: &str);
}

/// External sink holding the structured value behind the user's selection
/// (typically a second, hidden field).
pub trait ValueStore {
  fn value(&self) -> String;
  fn set_value(&mut self, value: &str);

  /// Fire the store's change notification so other listeners observe the
  /// update. The commit protocol calls this after every successful write.
  fn notify_changed(&mut self);
}
