use crate::anatomy::{DATA_PART, Part};
use crate::dom_event::{DomEvent, Dispatch};
use pin_input::{PinEvent, SLOT_MAX_LENGTH};

/// Props for the `<label>` element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelProps {
    pub part: Part,
    /// Element id of the first slot, so the label is associated with it.
    pub html_for: String,
}

impl LabelProps {
    pub fn handle(&self, event: &DomEvent) -> Dispatch {
        match event {
            DomEvent::Click => Dispatch::send(PinEvent::LabelClick),
            _ => Dispatch::none(),
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            (DATA_PART, self.part.as_str().to_string()),
            ("for", self.html_for.clone()),
        ]
    }
}

/// Props for the hidden `<input>` carrying the joined value into a form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenInputProps {
    pub part: Part,
    pub id: String,
    pub input_type: &'static str,
    pub name: Option<String>,
    pub value: String,
}

impl HiddenInputProps {
    /// `(name, value)` pair a form submission would carry. Unnamed controls
    /// do not take part in submission.
    pub fn form_entry(&self) -> Option<(&str, &str)> {
        self.name.as_deref().map(|name| (name, self.value.as_str()))
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            (DATA_PART, self.part.as_str().to_string()),
            ("id", self.id.clone()),
            ("type", self.input_type.to_string()),
        ];
        if let Some(name) = &self.name {
            attrs.push(("name", name.clone()));
        }
        attrs.push(("value", self.value.clone()));
        attrs
    }
}

/// Props for one slot `<input>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputProps {
    pub part: Part,
    pub id: String,
    pub index: usize,
    pub value: String,
    /// Two, so the element can momentarily hold the old and the new character.
    pub max_length: usize,
}

impl InputProps {
    pub(crate) fn new(id: String, index: usize, value: String) -> Self {
        Self {
            part: Part::Input,
            id,
            index,
            value,
            max_length: SLOT_MAX_LENGTH,
        }
    }

    /// Translate a DOM occurrence on this slot into a controller event.
    pub fn handle(&self, event: &DomEvent) -> Dispatch {
        let index = self.index;
        match event {
            DomEvent::Focus => Dispatch::send(PinEvent::Focus { index }),
            DomEvent::Blur => Dispatch::send(PinEvent::Blur),
            DomEvent::KeyDown { key } if key == "Backspace" => {
                Dispatch::send(PinEvent::Backspace { index })
            }
            DomEvent::Change { value } => Dispatch::send(PinEvent::Input {
                index,
                value: value.clone(),
            }),
            // The browser must not insert the text itself; the controller
            // distributes it across all slots.
            DomEvent::Paste { clipboard_text } => Dispatch {
                event: Some(PinEvent::Paste {
                    index,
                    text: clipboard_text
                        .as_deref()
                        .unwrap_or_default()
                        .trim()
                        .to_string(),
                }),
                prevent_default: true,
            },
            DomEvent::KeyDown { .. } | DomEvent::Click => Dispatch::none(),
        }
    }

    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            (DATA_PART, self.part.as_str().to_string()),
            ("id", self.id.clone()),
            ("value", self.value.clone()),
            ("maxlength", self.max_length.to_string()),
        ]
    }
}

/// Props for a purely structural element (`container`, `input-group`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartProps {
    pub part: Part,
}

impl PartProps {
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![(DATA_PART, self.part.as_str().to_string())]
    }
}
