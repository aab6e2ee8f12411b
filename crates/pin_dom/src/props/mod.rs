mod bundles;

pub use bundles::{HiddenInputProps, InputProps, LabelProps, PartProps};

use crate::anatomy::Part;
use pin_input::PinInput;

/// Read-only view that produces prop bundles from a controller's current state.
///
/// Bundles are owned values; re-connect after every event to pick up the new
/// state.
#[derive(Clone, Copy, Debug)]
pub struct PinInputApi<'a> {
    pin: &'a PinInput,
}

pub fn connect(pin: &PinInput) -> PinInputApi<'_> {
    PinInputApi { pin }
}

impl PinInputApi<'_> {
    pub fn value(&self) -> Vec<String> {
        self.pin.value()
    }

    pub fn value_string(&self) -> String {
        self.pin.value_string()
    }

    pub fn is_complete(&self) -> bool {
        self.pin.is_complete()
    }

    pub fn container_props(&self) -> PartProps {
        PartProps {
            part: Part::Container,
        }
    }

    pub fn group_props(&self) -> PartProps {
        PartProps {
            part: Part::InputGroup,
        }
    }

    pub fn label_props(&self) -> LabelProps {
        LabelProps {
            part: Part::Label,
            html_for: self.pin.id().slot_element_id(0),
        }
    }

    pub fn hidden_input_props(&self) -> HiddenInputProps {
        HiddenInputProps {
            part: Part::HiddenInput,
            id: self.pin.id().hidden_element_id(),
            input_type: "hidden",
            name: self.pin.name().map(str::to_string),
            value: self.pin.value_string(),
        }
    }

    /// Props for the slot at `index`, or `None` when the index is outside the
    /// control. Callers rendering a slot list should iterate
    /// [`all_input_props`](Self::all_input_props) instead.
    pub fn input_props(&self, index: usize) -> Option<InputProps> {
        if index >= self.pin.num_of_fields() {
            return None;
        }
        Some(InputProps::new(
            self.pin.id().slot_element_id(index),
            index,
            self.pin.slot_value(index),
        ))
    }

    pub fn all_input_props(&self) -> Vec<InputProps> {
        (0..self.pin.num_of_fields())
            .filter_map(|i| self.input_props(i))
            .collect()
    }
}
