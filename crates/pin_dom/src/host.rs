//! Headless stand-in for a browser document hosting one PIN input.
//!
//! It keeps what a real host would own: which slot element has focus and the
//! raw value of each slot element. User actions are turned into the DOM events
//! a browser would fire, routed through the prop bundles, and submitted to the
//! controller. Focus requests from the controller are applied on
//! [`run_frame`](HeadlessDocument::run_frame), like a next-frame callback.

use crate::dom_event::{Dispatch, DomEvent};
use crate::focus_queue::FrameFocusQueue;
use crate::props::connect;
use log::{debug, trace};
use pin_input::{PinInput, PinSnapshot, SLOT_MAX_LENGTH};

const LOG_TARGET: &str = "pin_dom.host";

/// Element a DOM event is dispatched on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Label,
    Input(usize),
}

#[derive(Debug)]
pub struct HeadlessDocument {
    pin: PinInput,
    focus_queue: FrameFocusQueue,
    /// Slot element that holds DOM focus.
    active: Option<usize>,
    /// Raw value of each slot element.
    element_values: Vec<String>,
}

impl HeadlessDocument {
    /// Host `pin`. Installs the document's own focus queue as the controller's
    /// focus executor, replacing any executor set before.
    pub fn new(pin: PinInput) -> Self {
        let focus_queue = FrameFocusQueue::new();
        let pin = pin.with_focus_executor(focus_queue.clone());
        let element_values = pin.value();
        Self {
            pin,
            focus_queue,
            active: None,
            element_values,
        }
    }

    pub fn pin(&self) -> &PinInput {
        &self.pin
    }

    pub fn snapshot(&self) -> PinSnapshot {
        self.pin.snapshot()
    }

    pub fn active_element(&self) -> Option<usize> {
        self.active
    }

    pub fn element_value(&self, index: usize) -> Option<&str> {
        self.element_values.get(index).map(String::as_str)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Route one DOM event through the target's props and into the controller.
    ///
    /// Events on slots outside the control are dropped here; the controller
    /// never sees them.
    pub fn dispatch(&mut self, target: Target, event: DomEvent) -> Dispatch {
        let api = connect(&self.pin);
        let dispatch = match target {
            Target::Label => api.label_props().handle(&event),
            Target::Input(index) => match api.input_props(index) {
                Some(props) => props.handle(&event),
                None => {
                    debug!(target: LOG_TARGET, "dropping {event:?} on missing slot {index}");
                    return Dispatch::default();
                }
            },
        };

        trace!(target: LOG_TARGET, "{:?} {:?} -> {:?}", target, event, dispatch);
        if let Some(pin_event) = dispatch.event.clone() {
            self.pin.send(pin_event);
        }
        self.render();
        dispatch
    }

    /// Controlled elements: after each event the elements show slot values.
    fn render(&mut self) {
        self.element_values = self.pin.value();
    }

    // =========================================================================
    // User actions
    // =========================================================================

    pub fn click_label(&mut self) {
        self.dispatch(Target::Label, DomEvent::Click);
    }

    /// Give DOM focus to a slot, blurring whichever slot had it.
    pub fn focus(&mut self, index: usize) {
        if self.active == Some(index) || index >= self.element_values.len() {
            return;
        }
        self.blur();
        self.active = Some(index);
        self.dispatch(Target::Input(index), DomEvent::Focus);
    }

    /// Take DOM focus away from the control.
    pub fn blur(&mut self) {
        if let Some(prev) = self.active.take() {
            self.dispatch(Target::Input(prev), DomEvent::Blur);
        }
    }

    /// Type `ch` into a slot with the caret at the end of its current value.
    pub fn type_char(&mut self, index: usize, ch: char) {
        self.type_with_caret(index, ch, false);
    }

    /// Type `ch` into a slot with the caret before its current value.
    pub fn type_char_before(&mut self, index: usize, ch: char) {
        self.type_with_caret(index, ch, true);
    }

    /// Type each char of `text` into whichever slot has focus, starting at
    /// `index`, running a frame after each keystroke.
    pub fn type_text(&mut self, index: usize, text: &str) {
        self.focus(index);
        for ch in text.chars() {
            let Some(at) = self.active else {
                break;
            };
            self.type_char(at, ch);
            self.run_frame();
        }
    }

    fn type_with_caret(&mut self, index: usize, ch: char, before: bool) {
        self.focus(index);
        let Some(current) = self.element_values.get(index) else {
            return;
        };
        // maxlength blocks the keystroke outright.
        if current.chars().count() >= SLOT_MAX_LENGTH {
            return;
        }
        let raw = if before {
            format!("{ch}{current}")
        } else {
            format!("{current}{ch}")
        };
        self.dispatch(Target::Input(index), DomEvent::change(raw));
    }

    pub fn backspace(&mut self, index: usize) {
        self.focus(index);
        self.dispatch(Target::Input(index), DomEvent::key_down("Backspace"));
    }

    /// Paste clipboard text into a slot. Returns whether the default paste
    /// was suppressed.
    pub fn paste(&mut self, index: usize, text: &str) -> bool {
        self.focus(index);
        self.dispatch(Target::Input(index), DomEvent::paste(text))
            .prevent_default
    }

    /// Set a slot element's raw value directly and fire its change event.
    pub fn change(&mut self, index: usize, value: &str) {
        if let Some(slot) = self.element_values.get_mut(index) {
            *slot = value.to_string();
        }
        self.dispatch(Target::Input(index), DomEvent::change(value));
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Apply focus requests parked during event dispatch.
    ///
    /// Moving focus fires blur/focus events which may park further requests;
    /// those are applied in the same frame until the queue is empty.
    pub fn run_frame(&mut self) {
        // Each pass either settles or moves focus onto a new slot.
        for _ in 0..=self.element_values.len() {
            let Some(request) = self.focus_queue.take() else {
                return;
            };
            trace!(target: LOG_TARGET, "frame: {request:?}, active={:?}", self.active);
            // A cleared cursor means focus already left the control.
            if let Some(index) = request.slot()
                && self.active != Some(index)
            {
                self.focus(index);
            }
        }
        if self.focus_queue.has_pending() {
            debug!(target: LOG_TARGET, "focus requests did not settle within one frame");
        }
    }

    /// `(name, value)` the surrounding form would submit.
    pub fn submit(&self) -> Option<(String, String)> {
        connect(&self.pin)
            .hidden_input_props()
            .form_entry()
            .map(|(name, value)| (name.to_string(), value.to_string()))
    }
}
