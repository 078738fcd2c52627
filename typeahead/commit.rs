//! The commit protocol: resolving a navigation or pointer action into a
//! value written to the store, or rejecting it back to free text.

use crate::{
  config::{
    Callbacks,
    CompleterConfig,
  },
  field::{
    InputField,
    ValueStore,
  },
  item::Candidate,
};

/// What a commit resolves from: the raw field text, or a candidate resolved
/// from a rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitSource {
  Text(String),
  Item(Candidate),
}

/// Resolve `source` into the value store. Returns whether a value was
/// written; every write is followed by the store's change notification.
///
/// Free text only lands when `allow_free_input` permits it — otherwise the
/// commit is silently dropped and the store is untouched. A structured item
/// is first offered to the `on_set_value` override; when the override
/// reports the assignment handled, the default write (display name into the
/// field, value into the store) is skipped but the write still counts.
pub fn commit(
  source: CommitSource,
  config: &CompleterConfig,
  callbacks: &mut Callbacks,
  field: &mut dyn InputField,
  store: &mut dyn ValueStore,
) -> bool {
  let wrote = match source {
    CommitSource::Text(text) => {
      if config.allow_free_input {
        store.set_value(&text);
        true
      } else {
        log::debug!("free-text commit dropped: allow_free_input is off");
        false
      }
    },
    CommitSource::Item(item) => {
      let handled = callbacks
        .on_set_value
        .as_mut()
        .is_some_and(|on_set_value| on_set_value(&item, field));
      if !handled {
        field.set_text(&item.name);
        store.set_value(&item.value);
      }
      true
    },
  };

  if wrote {
    store.notify_changed();
  }
  wrote
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct TestField {
    text: String,
  }

  impl InputField for TestField {
    fn text(&self) -> String {
      self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
      self.text = text.to_string();
    }
  }

  #[derive(Default)]
  struct TestStore {
    value:         String,
    change_events: usize,
  }

  impl ValueStore for TestStore {
    fn value(&self) -> String {
      self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
      self.value = value.to_string();
    }

    fn notify_changed(&mut self) {
      self.change_events += 1;
    }
  }

  fn item() -> Candidate {
    Candidate::from_parts(Some("B".into()), Some("b2".into()), None, None)
  }

  #[test]
  fn free_text_lands_when_allowed() {
    let config = CompleterConfig::default();
    let mut callbacks = Callbacks::default();
    let mut field = TestField::default();
    let mut store = TestStore::default();

    let wrote = commit(
      CommitSource::Text("anything".into()),
      &config,
      &mut callbacks,
      &mut field,
      &mut store,
    );
    assert!(wrote);
    assert_eq!(store.value, "anything");
    assert_eq!(store.change_events, 1);
  }

  #[test]
  fn free_text_is_dropped_when_disallowed() {
    let config = CompleterConfig {
      allow_free_input: false,
      ..Default::default()
    };
    let mut callbacks = Callbacks::default();
    let mut field = TestField::default();
    let mut store = TestStore::default();

    let wrote = commit(
      CommitSource::Text("anything".into()),
      &config,
      &mut callbacks,
      &mut field,
      &mut store,
    );
    assert!(!wrote);
    assert_eq!(store.value, "");
    assert_eq!(store.change_events, 0);
  }

  #[test]
  fn item_commit_writes_name_and_value() {
    let config = CompleterConfig::default();
    let mut callbacks = Callbacks::default();
    let mut field = TestField::default();
    let mut store = TestStore::default();

    commit(
      CommitSource::Item(item()),
      &config,
      &mut callbacks,
      &mut field,
      &mut store,
    );
    assert_eq!(field.text, "B");
    assert_eq!(store.value, "b2");
    assert_eq!(store.change_events, 1);
  }

  #[test]
  fn handled_override_skips_default_write_but_still_notifies() {
    let config = CompleterConfig::default();
    let mut callbacks = Callbacks {
      on_set_value: Some(Box::new(|candidate, field| {
        field.set_text(&format!("custom:{}", candidate.name));
        true
      })),
      ..Default::default()
    };
    let mut field = TestField::default();
    let mut store = TestStore::default();

    commit(
      CommitSource::Item(item()),
      &config,
      &mut callbacks,
      &mut field,
      &mut store,
    );
    assert_eq!(field.text, "custom:B");
    assert_eq!(store.value, "");
    assert_eq!(store.change_events, 1);
  }

  #[test]
  fn unhandled_override_falls_back_to_default_write() {
    let config = CompleterConfig::default();
    let mut callbacks = Callbacks {
      on_set_value: Some(Box::new(|_, _| false)),
      ..Default::default()
    };
    let mut field = TestField::default();
    let mut store = TestStore::default();

    commit(
      CommitSource::Item(item()),
      &config,
      &mut callbacks,
      &mut field,
      &mut store,
    );
    assert_eq!(field.text, "B");
    assert_eq!(store.value, "b2");
  }
}
