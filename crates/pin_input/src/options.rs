//! Construction options for a [`PinInput`](crate::PinInput).

use serde::Deserialize;

use crate::error::PinInputError;
use crate::text::slot_from_str;

/// Options a control is built from.
///
/// Deserializable so integration layers can read them from configuration:
///
/// ```
/// use pin_input::PinInputOptions;
///
/// let opts: PinInputOptions = PinInputOptions::new(4).with_name("pincode");
/// assert_eq!(opts.num_of_fields, 4);
/// assert!(opts.value.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PinInputOptions {
    /// Number of single-character slots. Must be positive.
    pub num_of_fields: usize,

    /// Initial slot values. Missing trailing slots start empty.
    #[serde(default)]
    pub value: Vec<String>,

    /// Form field name of the hidden aggregate input. Not used by the machine.
    #[serde(default)]
    pub name: Option<String>,
}

impl PinInputOptions {
    pub fn new(num_of_fields: usize) -> Self {
        Self {
            num_of_fields,
            ..Self::default()
        }
    }

    pub fn with_value<I, S>(mut self, value: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = value.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate and expand the initial value into exactly `num_of_fields` slots.
    pub(crate) fn initial_slots(&self) -> Result<Vec<Option<char>>, PinInputError> {
        if self.num_of_fields == 0 {
            return Err(PinInputError::NoFields);
        }
        if self.value.len() > self.num_of_fields {
            return Err(PinInputError::TooManyValues {
                given: self.value.len(),
                num_of_fields: self.num_of_fields,
            });
        }

        let mut slots = Vec::with_capacity(self.num_of_fields);
        for (index, v) in self.value.iter().enumerate() {
            let slot = slot_from_str(v).ok_or_else(|| PinInputError::InvalidSlotValue {
                index,
                value: v.clone(),
            })?;
            slots.push(slot);
        }
        slots.resize(self.num_of_fields, None);
        Ok(slots)
    }
}
