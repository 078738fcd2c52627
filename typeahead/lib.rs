//! # typeahead
//!
//! Attachable autocomplete behavior for a single text input: as the user
//! types or focuses the field, candidates are fetched from a remote
//! endpoint, rendered as a floating selectable panel under the input, and
//! picked via pointer or keyboard.
//!
//! The crate is the interaction/request lifecycle core:
//!
//! - **Request scheduling** — debounced, cancelable, at most one request in
//!   flight; superseding a request cancels its predecessor before the
//!   replacement is armed ([`scheduler`]).
//! - **Response normalization** — two payload shapes (a structured record
//!   list and pre-rendered markup) unified into one [`ResultSet`]
//!   ([`response`]).
//! - **Selection** — wraparound keyboard navigation with viewport-aware
//!   scrolling ([`menu`]).
//! - **Commit** — reconciling free-text input with selected structured
//!   values into an external value store ([`commit`]).
//! - **Visibility** — opening/closing the panel and tearing down pending
//!   work ([`completer`]).
//!
//! Everything toolkit- or network-shaped is an adapter trait the host
//! implements: [`Transport`], [`Geometry`], [`Surface`], [`InputField`]
//! and [`ValueStore`]. The host feeds [`InputEvent`]s into
//! [`Completer::dispatch`] and pumps fetch outcomes with
//! [`Completer::poll_responses`]; all state mutation happens on the host's
//! thread.

pub mod commit;
pub mod completer;
pub mod config;
pub mod error;
pub mod event;
pub mod field;
pub mod geometry;
pub mod item;
pub mod menu;
pub mod panel;
pub mod response;
pub mod scheduler;
pub mod transport;

pub use commit::CommitSource;
pub use completer::Completer;
pub use config::{
  Callbacks,
  CompleterConfig,
  ConfigError,
};
pub use error::CompleteError;
pub use event::{
  InputEvent,
  NavKey,
};
pub use field::{
  InputField,
  ValueStore,
};
pub use geometry::{
  Geometry,
  PanelPlacement,
};
pub use item::{
  Candidate,
  ResultSet,
};
pub use panel::Surface;
pub use transport::{
  Response,
  Transport,
  TransportError,
};
