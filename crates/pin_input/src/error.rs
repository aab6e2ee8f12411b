//! Construction errors.
//!
//! Runtime events never fail: out-of-range focus is clamped and unmatched
//! events are ignored. Only building a control with bad options is rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinInputError {
    #[error("a pin input needs at least one field")]
    NoFields,

    #[error("{given} initial values supplied for {num_of_fields} fields")]
    TooManyValues { given: usize, num_of_fields: usize },

    #[error("initial value {value:?} at slot {index} is not a single character")]
    InvalidSlotValue { index: usize, value: String },
}
