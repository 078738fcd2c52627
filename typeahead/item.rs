//! Candidate item model and the per-response result set.

/// One selectable search result.
///
/// `caption` is what the panel renders, `title` the hover text, `name` the
/// text written back into the input on commit and `value` the structured
/// value handed to the value store. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
  pub name:    String,
  pub value:   String,
  pub caption: String,
  pub title:   String,
}

impl Candidate {
  /// Build a candidate from an incomplete source record: `name` and `value`
  /// fall back to empty, `caption` and `title` fall back to `name`.
  pub fn from_parts(
    name: Option<String>,
    value: Option<String>,
    caption: Option<String>,
    title: Option<String>,
  ) -> Self {
    let name = name.unwrap_or_default();
    Self {
      value: value.unwrap_or_default(),
      caption: caption.unwrap_or_else(|| name.clone()),
      title: title.unwrap_or_else(|| name.clone()),
      name,
    }
  }
}

/// The ordered candidates produced by one response, replaced wholesale on
/// every new response and never mutated incrementally.
///
/// The two payload shapes share a single `item_count` contract; only
/// candidate lookup differs. For `PreRendered` sets the individual fields
/// were never extracted, so commits resolve against the rendered elements
/// through the surface adapter instead of this set.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
  /// Decoded records, in source order.
  Structured(Vec<Candidate>),
  /// Opaque markup carrying one list-entry marker per candidate.
  PreRendered { markup: String, count: usize },
}

impl ResultSet {
  pub fn item_count(&self) -> usize {
    match self {
      ResultSet::Structured(candidates) => candidates.len(),
      ResultSet::PreRendered { count, .. } => *count,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.item_count() == 0
  }

  /// Candidate at `index`, when this set carries decoded records.
  pub fn candidate(&self, index: usize) -> Option<&Candidate> {
    match self {
      ResultSet::Structured(candidates) => candidates.get(index),
      ResultSet::PreRendered { .. } => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn from_parts_defaults_caption_and_title_to_name() {
    let candidate = Candidate::from_parts(Some("A".into()), None, None, None);
    assert_eq!(candidate.name, "A");
    assert_eq!(candidate.value, "");
    assert_eq!(candidate.caption, "A");
    assert_eq!(candidate.title, "A");
  }

  #[test]
  fn from_parts_keeps_explicit_fields() {
    let candidate = Candidate::from_parts(
      Some("B".into()),
      Some("b2".into()),
      Some("Bee".into()),
      Some("The letter B".into()),
    );
    assert_eq!(candidate.value, "b2");
    assert_eq!(candidate.caption, "Bee");
    assert_eq!(candidate.title, "The letter B");
  }

  #[test]
  fn from_parts_with_nothing_is_all_empty() {
    let candidate = Candidate::from_parts(None, None, None, None);
    assert_eq!(candidate.name, "");
    assert_eq!(candidate.caption, "");
    assert_eq!(candidate.title, "");
  }

  #[test]
  fn pre_rendered_sets_have_no_candidates() {
    let set = ResultSet::PreRendered {
      markup: "<li>x</li>".into(),
      count:  1,
    };
    assert_eq!(set.item_count(), 1);
    assert!(set.candidate(0).is_none());
  }
}
