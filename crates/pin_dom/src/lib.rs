//! # pin_dom
//!
//! Integration layer between a [`pin_input::PinInput`] controller and a
//! DOM-like host.
//!
//! - [`connect`]: prop bundles for the label, the hidden form field and each
//!   slot input, with handlers that translate [`DomEvent`]s into controller events
//! - [`FrameFocusQueue`]: focus executor that defers focus moves to the next frame
//! - [`HeadlessDocument`]: a host without a browser, for tests and tools
//!
//! Rendering, styling and real DOM access stay with the embedding application.

mod anatomy;
mod dom_event;
mod focus_queue;
mod host;
mod props;

pub use anatomy::{DATA_PART, Part};
pub use dom_event::{Dispatch, DomEvent};
pub use focus_queue::FrameFocusQueue;
pub use host::{HeadlessDocument, Target};
pub use props::{HiddenInputProps, InputProps, LabelProps, PartProps, PinInputApi, connect};
