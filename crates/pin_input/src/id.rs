//! Generic, UI-agnostic identifier for a PIN input control.
//!
//! This type intentionally uses a plain `u64` to avoid coupling to any DOM
//! or framework-specific identifier type. Integration layers derive element
//! ids (label target, per-slot inputs) from it.

/// Opaque identifier for one [`PinInput`](crate::PinInput) control instance.
///
/// This is a lightweight, copyable handle. The value has no semantic meaning
/// within this crate; the DOM adapter uses it to build stable element ids so
/// that the label can point at the first slot.
///
/// # Integration
///
/// ```
/// use pin_input::PinInputId;
///
/// let id = PinInputId::from_raw(7);
/// assert_eq!(id.slot_element_id(2), "pin-input:7:input:2");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PinInputId(u64);

impl PinInputId {
    /// Create a `PinInputId` from a raw u64 value.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the underlying raw value.
    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    /// Element id of the slot input at `index`.
    pub fn slot_element_id(self, index: usize) -> String {
        format!("pin-input:{}:input:{index}", self.0)
    }

    /// Element id of the hidden aggregate input.
    pub fn hidden_element_id(self) -> String {
        format!("pin-input:{}:hidden", self.0)
    }
}

impl From<u64> for PinInputId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl From<PinInputId> for u64 {
    #[inline]
    fn from(id: PinInputId) -> Self {
        id.as_raw()
    }
}
