//! Effect capabilities supplied by the integration layer.
//!
//! The machine never reaches into a rendering tree. When the focus cursor
//! moves it asks a [`FocusExecutor`] to move real input focus; the integration
//! layer decides when (typically on the next frame, so the move does not fight
//! the host's own focus handling for the event being processed).

/// A focus move requested by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusRequest {
    /// Move input focus to the slot at this index.
    Slot(usize),
    /// No slot should hold focus.
    Clear,
}

impl FocusRequest {
    pub(crate) fn from_index(index: Option<usize>) -> Self {
        index.map_or(FocusRequest::Clear, FocusRequest::Slot)
    }

    pub fn slot(self) -> Option<usize> {
        match self {
            FocusRequest::Slot(i) => Some(i),
            FocusRequest::Clear => None,
        }
    }
}

/// Capability that carries out focus moves for the machine.
///
/// Closures implement this trait, which is the common case in tests:
///
/// ```
/// use pin_input::{FocusRequest, PinEvent, PinInput, PinInputOptions};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let mut pin = PinInput::new(PinInputOptions::new(4))
///     .unwrap()
///     .with_focus_executor(move |req: FocusRequest| sink.borrow_mut().push(req));
///
/// pin.send(PinEvent::LabelClick);
/// assert_eq!(*seen.borrow(), vec![FocusRequest::Slot(0)]);
/// ```
pub trait FocusExecutor {
    fn execute_focus(&mut self, request: FocusRequest);
}

impl<F: FnMut(FocusRequest)> FocusExecutor for F {
    #[inline]
    fn execute_focus(&mut self, request: FocusRequest) {
        self(request)
    }
}
