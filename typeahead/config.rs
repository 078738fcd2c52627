//! Completer configuration: behavior toggles and thresholds, immutable
//! after construction, plus the commit/blur callbacks.

use std::time::Duration;

use encoding_rs::Encoding;
use thiserror::Error;

use crate::{
  field::InputField,
  item::Candidate,
};

/// Override for committing a structured item. Returning `true` means the
/// callback handled the assignment and the default write is skipped.
pub type SetValueFn = Box<dyn FnMut(&Candidate, &mut dyn InputField) -> bool>;

/// Invoked when the field loses focus while the value store is empty,
/// receiving the field's current text.
pub type EndWithoutValueFn = Box<dyn FnMut(&str)>;

/// Behavior toggles and thresholds, supplied once at construction and
/// read-only thereafter. `Default` mirrors the stock behavior; only
/// `request_url` has no usable default and is validated at attach time.
#[derive(Debug, Clone)]
pub struct CompleterConfig {
  /// Send requests even while the field text is empty.
  pub allow_empty_requests:       bool,
  /// Let free text through to the value store on commit.
  pub allow_free_input:           bool,
  /// Panel appearance transition length.
  pub appear_duration:            Duration,
  /// Delay before the disappearance transition starts.
  pub fade_delay:                 Duration,
  /// Disappearance transition length.
  pub fade_duration:              Duration,
  /// Surface transport/payload errors to the user instead of absorbing
  /// them.
  pub report_errors:              bool,
  /// Debounce interval between the last input event and the request.
  pub request_delay:              Duration,
  /// Text encoding applied to the search term before percent-encoding.
  pub request_encoding:           &'static Encoding,
  /// Endpoint queried for candidates. Required.
  pub request_url:                String,
  /// Query parameter carrying the search term.
  pub request_search_param_name:  String,
  /// Whether focusing the field immediately schedules a request.
  pub should_complete_on_focus:   bool,
  /// Styling hook for the panel container. No behavioral effect.
  pub container_class:            String,
  /// Styling hook for each result item. No behavioral effect.
  pub result_item_class:          String,
  /// Styling hook for the highlighted result item. No behavioral effect.
  pub result_item_selected_class: String,
}

impl Default for CompleterConfig {
  fn default() -> Self {
    Self {
      allow_empty_requests:       true,
      allow_free_input:           true,
      appear_duration:            Duration::from_millis(200),
      fade_delay:                 Duration::from_millis(100),
      fade_duration:              Duration::from_millis(100),
      report_errors:              false,
      request_delay:              Duration::from_millis(200),
      // iso-8859-1 resolves to windows-1252 under the Encoding Standard.
      request_encoding:           encoding_rs::WINDOWS_1252,
      request_url:                String::new(),
      request_search_param_name:  "q".to_string(),
      should_complete_on_focus:   true,
      container_class:            "autocomplete-container".to_string(),
      result_item_class:          "autocomplete-result-item".to_string(),
      result_item_selected_class: "selected".to_string(),
    }
  }
}

impl CompleterConfig {
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.request_url.is_empty() {
      return Err(ConfigError::MissingRequestUrl);
    }
    Ok(())
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  #[error("request_url must be set before attaching the completer")]
  MissingRequestUrl,
}

/// The injectable commit/blur callbacks. These are mutable closures, so
/// they live outside the immutable [`CompleterConfig`]; both default to
/// doing nothing.
#[derive(Default)]
pub struct Callbacks {
  pub on_set_value:         Option<SetValueFn>,
  pub on_end_without_value: Option<EndWithoutValueFn>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_config_has_no_endpoint() {
    let config = CompleterConfig::default();
    assert_eq!(config.validate(), Err(ConfigError::MissingRequestUrl));
  }

  #[test]
  fn endpoint_is_the_only_required_option() {
    let config = CompleterConfig {
      request_url: "/search".to_string(),
      ..Default::default()
    };
    assert_eq!(config.validate(), Ok(()));
  }
}
