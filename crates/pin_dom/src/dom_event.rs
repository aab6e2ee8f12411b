use pin_input::PinEvent;

/// Raw DOM occurrence on one of the control's elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DomEvent {
    Click,
    Focus,
    Blur,
    KeyDown { key: String },
    /// The element's value after the browser applied the edit.
    Change { value: String },
    /// Clipboard text as read from the paste event, if the clipboard had text.
    Paste { clipboard_text: Option<String> },
}

impl DomEvent {
    pub fn key_down(key: impl Into<String>) -> Self {
        DomEvent::KeyDown { key: key.into() }
    }

    pub fn change(value: impl Into<String>) -> Self {
        DomEvent::Change {
            value: value.into(),
        }
    }

    pub fn paste(text: impl Into<String>) -> Self {
        DomEvent::Paste {
            clipboard_text: Some(text.into()),
        }
    }
}

/// What a handler decided for one DOM event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Event to submit to the controller, if the DOM event maps to one.
    pub event: Option<PinEvent>,
    /// Whether the host must suppress the browser's default action.
    pub prevent_default: bool,
}

impl Dispatch {
    pub(crate) fn none() -> Self {
        Self::default()
    }

    pub(crate) fn send(event: PinEvent) -> Self {
        Self {
            event: Some(event),
            prevent_default: false,
        }
    }
}
