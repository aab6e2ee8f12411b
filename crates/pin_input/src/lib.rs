//! # pin_input
//!
//! UI-agnostic state machine for segmented PIN/OTP input controls.
//!
//! A PIN input is a fixed number of single-character slots that together hold
//! one logical value. This crate owns that value, the focused slot and the
//! derived completion flag:
//! - [`PinInput`]: the controller; feed it [`PinEvent`]s through [`PinInput::send`]
//! - [`PinInputOptions`]: field count, initial value and form name
//! - [`FocusExecutor`]: capability the integration layer supplies to move real focus
//! - [`PinSnapshot`]: owned, read-only copy of the state for rendering
//!
//! ## Design Principles
//!
//! This crate is intentionally UI-agnostic and does not depend on:
//! - Any DOM, markup or rendering layer
//! - Clipboard or platform APIs
//!
//! Events are processed synchronously and to completion. Effects fire only
//! when a watched value actually changes: focus moves when the cursor moves,
//! and the completion callback runs on the edge from incomplete to complete.

mod error;
mod event;
mod id;
mod machine;
mod options;
mod state;
mod text;
mod traits;

pub use error::PinInputError;
pub use event::{PinEvent, PinEventKind};
pub use id::PinInputId;
pub use machine::PinInput;
pub use options::PinInputOptions;
pub use state::{Mode, PinSnapshot};
pub use traits::{FocusExecutor, FocusRequest};

// Re-export character helpers for integration layers that need to mirror the
// machine's slot semantics (e.g. simulating a host element's raw value).
pub use text::{paste_chars, resolve_next_char, slot_from_str, slot_to_string};

/// Maximum length of a slot element's raw value: the previous character plus
/// the newly typed one.
pub const SLOT_MAX_LENGTH: usize = 2;
