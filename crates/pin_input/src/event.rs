//! Typed events accepted by [`PinInput::send`](crate::PinInput::send).

use serde::Deserialize;

/// An event raised by the integration layer.
///
/// The serialized form uses the `type` tag (`"FOCUS"`, `"LABEL_CLICK"`, ...)
/// so event logs read the same as the DOM-side event names.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PinEvent {
    /// A slot input received focus.
    Focus { index: usize },
    /// The label was clicked.
    LabelClick,
    /// The focused slot lost focus.
    Blur,
    /// The raw value of a slot input changed. `value` may hold the previous
    /// character plus the newly typed one.
    Input { index: usize, value: String },
    /// Backspace was pressed in a slot.
    Backspace { index: usize },
    /// Clipboard text was pasted into a slot.
    Paste { index: usize, text: String },
}

impl PinEvent {
    pub fn kind(&self) -> PinEventKind {
        match self {
            PinEvent::Focus { .. } => PinEventKind::Focus,
            PinEvent::LabelClick => PinEventKind::LabelClick,
            PinEvent::Blur => PinEventKind::Blur,
            PinEvent::Input { .. } => PinEventKind::Input,
            PinEvent::Backspace { .. } => PinEventKind::Backspace,
            PinEvent::Paste { .. } => PinEventKind::Paste,
        }
    }
}

/// Payload-free discriminant of a [`PinEvent`], used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PinEventKind {
    Focus,
    LabelClick,
    Blur,
    Input,
    Backspace,
    Paste,
}

impl PinEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PinEventKind::Focus => "FOCUS",
            PinEventKind::LabelClick => "LABEL_CLICK",
            PinEventKind::Blur => "BLUR",
            PinEventKind::Input => "INPUT",
            PinEventKind::Backspace => "BACKSPACE",
            PinEventKind::Paste => "PASTE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Log {
        events: Vec<PinEvent>,
    }

    #[test]
    fn events_deserialize_from_tagged_tables() {
        let log: Log = toml::from_str(
            r#"
            [[events]]
            type = "FOCUS"
            index = 1

            [[events]]
            type = "LABEL_CLICK"

            [[events]]
            type = "PASTE"
            index = 0
            text = "1234"
            "#,
        )
        .unwrap();

        assert_eq!(
            log.events,
            vec![
                PinEvent::Focus { index: 1 },
                PinEvent::LabelClick,
                PinEvent::Paste {
                    index: 0,
                    text: "1234".to_string()
                },
            ]
        );
        assert_eq!(log.events[1].kind().as_str(), "LABEL_CLICK");
    }
}
