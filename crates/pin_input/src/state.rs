//! Controller state representation.
//!
//! [`SlotState`] is internal to [`PinInput`](crate::PinInput); [`Mode`] and
//! [`PinSnapshot`] are the read-only views handed to integration layers.

use crate::text::slot_to_string;

/// Coarse interaction state of the control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No slot has focus. Initial state.
    #[default]
    Idle,
    /// Some slot has focus.
    Focused,
}

/// Internal state owned by the machine.
#[derive(Clone, Debug)]
pub(crate) struct SlotState {
    /// One entry per field; length never changes after construction.
    pub slots: Vec<Option<char>>,

    /// Focus cursor. `Some(i)` always satisfies `i < slots.len()`.
    pub focused_index: Option<usize>,

    pub mode: Mode,
}

impl SlotState {
    pub fn new(slots: Vec<Option<char>>) -> Self {
        Self {
            slots,
            focused_index: None,
            mode: Mode::Idle,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.slots.len().saturating_sub(1)
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Clamp an externally supplied index onto the slot range.
    #[inline]
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.last_index())
    }

    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn value(&self) -> Vec<String> {
        self.slots.iter().copied().map(slot_to_string).collect()
    }

    pub fn joined(&self) -> String {
        self.slots.iter().flatten().collect()
    }

    pub fn snapshot(&self) -> PinSnapshot {
        PinSnapshot {
            value: self.value(),
            focused_index: self.focused_index,
            mode: self.mode,
            is_complete: self.is_complete(),
        }
    }
}

/// Owned copy of the controller state at one point in time.
///
/// Holding a snapshot never aliases controller internals.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PinSnapshot {
    pub value: Vec<String>,
    pub focused_index: Option<usize>,
    pub mode: Mode,
    pub is_complete: bool,
}

impl PinSnapshot {
    /// Concatenation of all slot characters.
    pub fn value_string(&self) -> String {
        self.value.concat()
    }

    /// Focus cursor encoded as `-1` (none) or the slot index.
    pub fn focused_index_raw(&self) -> isize {
        self.focused_index.map_or(-1, |i| i as isize)
    }
}

