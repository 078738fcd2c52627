//! Response normalization: two payload shapes in, one [`ResultSet`] out.
//!
//! The transport's declared content type picks the shape. Anything naming
//! `json` decodes as the structured list payload; everything else is
//! treated as pre-rendered markup with one `<li` marker per candidate.

use serde::Deserialize;

use crate::{
  error::CompleteError,
  item::{
    Candidate,
    ResultSet,
  },
};

/// The marker counted once per candidate in pre-rendered markup.
const LIST_ENTRY_MARKER: &str = "<li";

#[derive(Debug, Deserialize)]
struct StructuredResponse {
  success: Option<bool>,
  error:   Option<String>,
  #[serde(default)]
  list:    Vec<CandidateRecord>,
}

#[derive(Debug, Deserialize)]
struct CandidateRecord {
  name:    Option<String>,
  value:   Option<String>,
  caption: Option<String>,
  title:   Option<String>,
}

/// Normalize one raw response body into a result set.
///
/// A structured body that does not decode is fatal to the request
/// ([`CompleteError::MalformedResponse`]); a structured body carrying an
/// explicit failure flag is a [`CompleteError::Payload`]. Pre-rendered
/// markup cannot fail — zero markers just yields an empty set, which closes
/// the panel downstream.
pub fn normalize(content_type: &str, body: &str) -> Result<ResultSet, CompleteError> {
  if is_structured(content_type) {
    normalize_structured(body)
  } else {
    Ok(normalize_markup(body))
  }
}

fn is_structured(content_type: &str) -> bool {
  content_type.to_ascii_lowercase().contains("json")
}

fn normalize_structured(body: &str) -> Result<ResultSet, CompleteError> {
  let response: StructuredResponse =
    serde_json::from_str(body).map_err(|err| CompleteError::MalformedResponse(err.to_string()))?;

  if response.success == Some(false) {
    let message = response
      .error
      .unwrap_or_else(|| "unspecified server error".to_string());
    return Err(CompleteError::Payload(message));
  }

  let candidates = response
    .list
    .into_iter()
    .map(|record| Candidate::from_parts(record.name, record.value, record.caption, record.title))
    .collect();
  Ok(ResultSet::Structured(candidates))
}

fn normalize_markup(body: &str) -> ResultSet {
  ResultSet::PreRendered {
    count:  body.matches(LIST_ENTRY_MARKER).count(),
    markup: body.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn structured_records_default_missing_fields() {
    let set = normalize(
      "application/json",
      r#"{"list":[{"name":"A"},{"name":"B","value":"b2"}]}"#,
    )
    .unwrap();

    assert_eq!(set.item_count(), 2);
    let first = set.candidate(0).unwrap();
    assert_eq!(first.caption, "A");
    assert_eq!(first.title, "A");
    assert_eq!(first.value, "");
    let second = set.candidate(1).unwrap();
    assert_eq!(second.caption, "B");
    assert_eq!(second.value, "b2");
  }

  #[test]
  fn content_type_detection_ignores_case_and_parameters() {
    let set = normalize("Application/JSON; charset=utf-8", r#"{"list":[]}"#).unwrap();
    assert!(matches!(set, ResultSet::Structured(_)));
  }

  #[test]
  fn explicit_success_flag_passes_through() {
    let set = normalize("application/json", r#"{"success":true,"list":[{"name":"A"}]}"#).unwrap();
    assert_eq!(set.item_count(), 1);
  }

  #[test]
  fn failure_flag_becomes_payload_error() {
    let err = normalize("application/json", r#"{"success":false,"error":"boom"}"#).unwrap_err();
    assert!(matches!(err, CompleteError::Payload(message) if message == "boom"));
  }

  #[test]
  fn failure_flag_without_message_still_errors() {
    let err = normalize("application/json", r#"{"success":false}"#).unwrap_err();
    assert!(matches!(err, CompleteError::Payload(_)));
  }

  #[test]
  fn undecodable_structured_body_is_malformed() {
    let err = normalize("application/json", "{not json").unwrap_err();
    assert!(matches!(err, CompleteError::MalformedResponse(_)));
  }

  #[test]
  fn markup_counts_list_entry_markers() {
    let set = normalize(
      "text/html",
      "<ul><li>one</li><li>two</li><li>three</li></ul>",
    )
    .unwrap();
    assert_eq!(set.item_count(), 3);
    assert!(set.candidate(0).is_none());
  }

  #[test]
  fn markup_without_markers_is_empty() {
    let set = normalize("text/html", "<p>nothing here</p>").unwrap();
    assert!(set.is_empty());
  }

  #[test]
  fn missing_list_field_is_an_empty_set() {
    let set = normalize("application/json", r#"{"success":true}"#).unwrap();
    assert!(set.is_empty());
  }
}
