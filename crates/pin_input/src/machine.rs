//! The PIN input state machine.
//!
//! Two modes (`Idle`, `Focused`) and six event kinds. Every event goes through
//! [`PinInput::send`], which applies the matching transition and then compares
//! the watched values (focus cursor, completeness) before and after to decide
//! which effects to fire.

use log::{debug, info, trace};

use crate::error::PinInputError;
use crate::event::PinEvent;
use crate::id::PinInputId;
use crate::options::PinInputOptions;
use crate::state::{Mode, PinSnapshot, SlotState};
use crate::text::{paste_chars, resolve_next_char, slot_to_string};
use crate::traits::{FocusExecutor, FocusRequest};

const LOG_TARGET: &str = "pin_input.machine";

type CompleteCallback = Box<dyn FnMut(Vec<String>)>;

/// Controller for one segmented PIN/OTP input.
///
/// # Example
///
/// ```
/// use pin_input::{PinEvent, PinInput, PinInputOptions};
///
/// let mut pin = PinInput::new(PinInputOptions::new(4)).unwrap();
///
/// pin.send(PinEvent::Focus { index: 0 });
/// pin.send(PinEvent::Paste { index: 0, text: "12".to_string() });
///
/// assert_eq!(pin.value(), vec!["1", "2", "", ""]);
/// assert_eq!(pin.focused_index(), Some(2));
/// assert!(!pin.is_complete());
/// ```
pub struct PinInput {
    id: PinInputId,
    name: Option<String>,
    state: SlotState,
    on_complete: Option<CompleteCallback>,
    focus_executor: Option<Box<dyn FocusExecutor>>,
}

impl PinInput {
    /// Build a control in `Idle` mode with no slot focused.
    pub fn new(options: PinInputOptions) -> Result<Self, PinInputError> {
        let slots = options.initial_slots()?;
        debug!(
            target: LOG_TARGET,
            "new pin input: {} fields, name={:?}",
            slots.len(),
            options.name
        );
        Ok(Self {
            id: PinInputId::default(),
            name: options.name,
            state: SlotState::new(slots),
            on_complete: None,
            focus_executor: None,
        })
    }

    pub fn with_id(mut self, id: PinInputId) -> Self {
        self.id = id;
        self
    }

    /// Callback invoked with a copy of the value each time the control
    /// becomes complete.
    pub fn with_on_complete(mut self, on_complete: impl FnMut(Vec<String>) + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    /// Capability used to move real input focus when the cursor changes.
    pub fn with_focus_executor(mut self, executor: impl FocusExecutor + 'static) -> Self {
        self.focus_executor = Some(Box::new(executor));
        self
    }

    // =========================================================================
    // Event intake
    // =========================================================================

    /// Process one event to completion.
    ///
    /// Returns `false` when the event has no transition in the current mode;
    /// such events leave the state untouched and fire no effects.
    pub fn send(&mut self, event: PinEvent) -> bool {
        let prev_focus = self.state.focused_index;
        let was_complete = self.state.is_complete();

        if !self.transition(&event) {
            trace!(
                target: LOG_TARGET,
                "ignored {} in {:?}",
                event.kind().as_str(),
                self.state.mode
            );
            return false;
        }

        trace!(
            target: LOG_TARGET,
            "{} -> mode={:?} focus={:?} value={:?}",
            event.kind().as_str(),
            self.state.mode,
            self.state.focused_index,
            self.state.slots
        );

        self.watch_focus(prev_focus);
        self.watch_complete(was_complete);
        true
    }

    fn transition(&mut self, event: &PinEvent) -> bool {
        match (self.state.mode, event) {
            (Mode::Idle, PinEvent::Focus { index }) => {
                self.state.mode = Mode::Focused;
                self.set_focused_index(*index);
            }
            (Mode::Idle, PinEvent::LabelClick) => {
                self.state.focused_index = Some(0);
            }
            (Mode::Focused, PinEvent::Blur) => {
                self.state.mode = Mode::Idle;
                self.state.focused_index = None;
            }
            (Mode::Focused, PinEvent::Input { index, value }) => {
                let at = self.focused_slot(*index);
                self.state.slots[at] = resolve_next_char(self.state.slots[at], value);
                self.state.focused_index = Some((at + 1).min(self.state.last_index()));
            }
            (Mode::Focused, PinEvent::Backspace { index }) => {
                let at = self.focused_slot(*index);
                self.state.slots[at] = None;
                self.state.focused_index = Some(at.saturating_sub(1));
            }
            (Mode::Focused, PinEvent::Paste { text, .. }) => {
                let chars = paste_chars(text, self.state.len());
                for (slot, ch) in self.state.slots.iter_mut().zip(chars) {
                    *slot = Some(ch);
                }
                let next = self
                    .state
                    .first_empty()
                    .unwrap_or_else(|| self.state.last_index());
                self.state.focused_index = Some(next);
            }
            _ => return false,
        }
        true
    }

    fn set_focused_index(&mut self, index: usize) {
        let clamped = self.state.clamp_index(index);
        if clamped != index {
            debug!(
                target: LOG_TARGET,
                "focus index {index} out of range, clamped to {clamped}"
            );
        }
        self.state.focused_index = Some(clamped);
    }

    /// Slot an INPUT/BACKSPACE acts on. The focus cursor is authoritative; the
    /// event's own index is only a fallback when no cursor is set.
    fn focused_slot(&self, event_index: usize) -> usize {
        match self.state.focused_index {
            Some(at) => {
                if at != event_index {
                    debug!(
                        target: LOG_TARGET,
                        "event index {event_index} differs from focused slot {at}"
                    );
                }
                at
            }
            None => self.state.clamp_index(event_index),
        }
    }

    // =========================================================================
    // Watched values
    // =========================================================================

    fn watch_focus(&mut self, prev: Option<usize>) {
        let current = self.state.focused_index;
        if current == prev {
            return;
        }
        let request = FocusRequest::from_index(current);
        trace!(target: LOG_TARGET, "focus changed {prev:?} -> {current:?}");
        if let Some(executor) = self.focus_executor.as_mut() {
            executor.execute_focus(request);
        }
    }

    fn watch_complete(&mut self, was_complete: bool) {
        if was_complete || !self.state.is_complete() {
            return;
        }
        info!(
            target: LOG_TARGET,
            "pin input {} complete",
            self.id.as_raw()
        );
        let value = self.state.value();
        if let Some(on_complete) = self.on_complete.as_mut() {
            on_complete(value);
        }
    }

    // =========================================================================
    // Read-only getters
    // =========================================================================

    pub fn id(&self) -> PinInputId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn num_of_fields(&self) -> usize {
        self.state.len()
    }

    /// Copy of the slot values; empty slots are empty strings.
    pub fn value(&self) -> Vec<String> {
        self.state.value()
    }

    /// Character in the slot at `index`, or `None` when empty or out of range.
    pub fn slot(&self, index: usize) -> Option<char> {
        self.state.slots.get(index).copied().flatten()
    }

    /// Slot value as the string a slot input displays.
    pub fn slot_value(&self, index: usize) -> String {
        slot_to_string(self.slot(index))
    }

    /// Concatenation of all slot characters.
    pub fn value_string(&self) -> String {
        self.state.joined()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.state.focused_index
    }

    /// Focus cursor encoded as `-1` (none) or the slot index.
    pub fn focused_index_raw(&self) -> isize {
        self.state.focused_index.map_or(-1, |i| i as isize)
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn snapshot(&self) -> PinSnapshot {
        self.state.snapshot()
    }
}

impl std::fmt::Debug for PinInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("state", &self.state)
            .field("on_complete", &self.on_complete.is_some())
            .field("focus_executor", &self.focus_executor.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input(index: usize, value: &str) -> PinEvent {
        PinEvent::Input {
            index,
            value: value.to_string(),
        }
    }

    fn paste(index: usize, text: &str) -> PinEvent {
        PinEvent::Paste {
            index,
            text: text.to_string(),
        }
    }

    /// Control with recorders for completion callbacks and focus requests.
    fn recorded(
        options: PinInputOptions,
    ) -> (
        PinInput,
        Rc<RefCell<Vec<Vec<String>>>>,
        Rc<RefCell<Vec<FocusRequest>>>,
    ) {
        let completions = Rc::new(RefCell::new(Vec::new()));
        let focus = Rc::new(RefCell::new(Vec::new()));
        let c = Rc::clone(&completions);
        let f = Rc::clone(&focus);
        let pin = PinInput::new(options)
            .unwrap()
            .with_on_complete(move |v| c.borrow_mut().push(v))
            .with_focus_executor(move |r: FocusRequest| f.borrow_mut().push(r));
        (pin, completions, focus)
    }

    #[test]
    fn starts_idle_without_focus() {
        let pin = PinInput::new(PinInputOptions::new(4)).unwrap();
        assert_eq!(pin.mode(), Mode::Idle);
        assert_eq!(pin.focused_index(), None);
        assert_eq!(pin.focused_index_raw(), -1);
        assert_eq!(pin.value(), vec!["", "", "", ""]);
        assert!(!pin.is_complete());
    }

    #[test]
    fn typed_char_after_existing_char_replaces_it() {
        let mut pin = PinInput::new(PinInputOptions::new(4)).unwrap();
        pin.send(PinEvent::Focus { index: 0 });

        pin.send(input(0, "2"));
        assert_eq!(pin.slot(0), Some('2'));

        // Cursor came back to slot 0; the element still shows "2".
        pin.send(PinEvent::Blur);
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(input(0, "29"));
        assert_eq!(pin.slot(0), Some('9'));
        assert_eq!(pin.focused_index(), Some(1));
    }

    #[test]
    fn input_writes_to_focused_slot_not_event_index() {
        let mut pin = PinInput::new(PinInputOptions::new(4)).unwrap();
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(input(0, "2"));

        // Focus already advanced to slot 1, which is empty: "29" replaces it.
        pin.send(input(0, "29"));
        assert_eq!(pin.value(), vec!["2", "9", "", ""]);
        assert_eq!(pin.focused_index(), Some(2));
    }

    #[test]
    fn typed_char_before_existing_char_replaces_it() {
        let mut pin = PinInput::new(PinInputOptions::new(4).with_value(["2"])).unwrap();
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(input(0, "92"));
        assert_eq!(pin.slot(0), Some('9'));
    }

    #[test]
    fn paste_fills_from_first_slot_and_focuses_last_when_full() {
        let mut pin = PinInput::new(PinInputOptions::new(4)).unwrap();
        pin.send(PinEvent::Focus { index: 2 });
        pin.send(paste(2, " 1234extra"));

        assert_eq!(pin.value(), vec!["1", "2", "3", "4"]);
        assert_eq!(pin.focused_index(), Some(3));
    }

    #[test]
    fn partial_paste_preserves_trailing_slots() {
        let mut pin =
            PinInput::new(PinInputOptions::new(4).with_value(["", "", "", "9"])).unwrap();
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(paste(0, "12"));

        assert_eq!(pin.value(), vec!["1", "2", "", "9"]);
        assert_eq!(pin.focused_index(), Some(2));
    }

    #[test]
    fn empty_paste_distributes_nothing() {
        let mut pin = PinInput::new(PinInputOptions::new(3).with_value(["1"])).unwrap();
        pin.send(PinEvent::Focus { index: 0 });
        assert!(pin.send(paste(0, "   ")));

        assert_eq!(pin.value(), vec!["1", "", ""]);
        assert_eq!(pin.focused_index(), Some(1));
    }

    #[test]
    fn backspace_at_first_slot_clamps_focus() {
        let mut pin = PinInput::new(PinInputOptions::new(4).with_value(["5"])).unwrap();
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(PinEvent::Backspace { index: 0 });

        assert_eq!(pin.slot(0), None);
        assert_eq!(pin.focused_index(), Some(0));
    }

    #[test]
    fn backspace_moves_focus_back() {
        let mut pin =
            PinInput::new(PinInputOptions::new(4).with_value(["1", "2", "3"])).unwrap();
        pin.send(PinEvent::Focus { index: 2 });
        pin.send(PinEvent::Backspace { index: 2 });

        assert_eq!(pin.value(), vec!["1", "2", "", ""]);
        assert_eq!(pin.focused_index(), Some(1));
    }

    #[test]
    fn input_on_last_slot_keeps_focus_there() {
        let mut pin = PinInput::new(PinInputOptions::new(2)).unwrap();
        pin.send(PinEvent::Focus { index: 1 });
        pin.send(input(1, "7"));
        assert_eq!(pin.focused_index(), Some(1));
    }

    #[test]
    fn full_round_trip_completes_once() {
        let (mut pin, completions, _) = recorded(PinInputOptions::new(4));

        pin.send(PinEvent::Focus { index: 0 });
        pin.send(input(0, "1"));
        pin.send(input(1, "2"));
        pin.send(input(2, "3"));
        pin.send(input(3, "4"));

        assert_eq!(pin.value(), vec!["1", "2", "3", "4"]);
        assert!(pin.is_complete());
        assert_eq!(
            *completions.borrow(),
            vec![vec![
                "1".to_string(),
                "2".to_string(),
                "3".to_string(),
                "4".to_string()
            ]]
        );
    }

    #[test]
    fn completion_does_not_refire_while_complete() {
        let (mut pin, completions, _) = recorded(PinInputOptions::new(2));

        pin.send(PinEvent::Focus { index: 0 });
        pin.send(paste(0, "12"));
        assert_eq!(completions.borrow().len(), 1);

        // Still complete after each of these.
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(PinEvent::LabelClick);
        pin.send(paste(0, "34"));
        pin.send(input(1, "45"));
        pin.send(PinEvent::Blur);
        pin.send(PinEvent::LabelClick);

        assert!(pin.is_complete());
        assert_eq!(completions.borrow().len(), 1);
    }

    #[test]
    fn completion_refires_after_clear_and_refill() {
        let (mut pin, completions, _) = recorded(PinInputOptions::new(2));

        pin.send(PinEvent::Focus { index: 0 });
        pin.send(paste(0, "12"));
        pin.send(PinEvent::Backspace { index: 1 });
        assert!(!pin.is_complete());
        assert_eq!(pin.focused_index(), Some(0));

        pin.send(PinEvent::Blur);
        pin.send(PinEvent::Focus { index: 1 });
        pin.send(input(1, "8"));

        assert_eq!(
            *completions.borrow(),
            vec![
                vec!["1".to_string(), "2".to_string()],
                vec!["1".to_string(), "8".to_string()],
            ]
        );
    }

    #[test]
    fn initially_complete_value_does_not_fire_on_construction() {
        let (mut pin, completions, _) = recorded(PinInputOptions::new(2).with_value(["1", "2"]));
        assert!(pin.is_complete());
        pin.send(PinEvent::Focus { index: 0 });
        assert!(completions.borrow().is_empty());
    }

    #[test]
    fn completion_value_is_a_detached_copy() {
        let (mut pin, completions, _) = recorded(PinInputOptions::new(1));
        pin.send(PinEvent::Focus { index: 0 });
        pin.send(input(0, "3"));

        completions.borrow_mut()[0][0] = "x".to_string();
        assert_eq!(pin.value(), vec!["3"]);
    }

    #[test]
    fn focus_executor_fires_only_on_change() {
        let (mut pin, _, focus) = recorded(PinInputOptions::new(3));

        pin.send(PinEvent::LabelClick); // None -> 0
        pin.send(PinEvent::Focus { index: 0 }); // 0 -> 0, no request
        pin.send(input(0, "1")); // 0 -> 1
        pin.send(PinEvent::Blur); // 1 -> None

        assert_eq!(
            *focus.borrow(),
            vec![
                FocusRequest::Slot(0),
                FocusRequest::Slot(1),
                FocusRequest::Clear
            ]
        );
    }

    #[test]
    fn out_of_range_focus_is_clamped() {
        let mut pin = PinInput::new(PinInputOptions::new(4)).unwrap();
        pin.send(PinEvent::Focus { index: 99 });
        assert_eq!(pin.focused_index(), Some(3));
    }

    #[test]
    fn unmatched_events_are_identity_transitions() {
        let (mut pin, completions, focus) = recorded(PinInputOptions::new(2));

        assert!(!pin.send(input(0, "1")));
        assert!(!pin.send(PinEvent::Backspace { index: 0 }));
        assert!(!pin.send(paste(0, "12")));
        assert!(!pin.send(PinEvent::Blur));
        let untouched = PinInput::new(PinInputOptions::new(2)).unwrap();
        assert_eq!(pin.snapshot(), untouched.snapshot());

        pin.send(PinEvent::Focus { index: 1 });
        assert!(!pin.send(PinEvent::Focus { index: 0 }));
        assert!(!pin.send(PinEvent::LabelClick));
        assert_eq!(pin.focused_index(), Some(1));
        assert_eq!(pin.mode(), Mode::Focused);

        assert!(completions.borrow().is_empty());
        assert_eq!(*focus.borrow(), vec![FocusRequest::Slot(1)]);
    }

    #[test]
    fn label_click_keeps_idle_mode() {
        let mut pin = PinInput::new(PinInputOptions::new(3)).unwrap();
        assert!(pin.send(PinEvent::LabelClick));
        assert_eq!(pin.mode(), Mode::Idle);
        assert_eq!(pin.focused_index(), Some(0));
    }

    #[test]
    fn snapshot_reports_joined_value_and_raw_focus() {
        let mut pin = PinInput::new(PinInputOptions::new(3).with_value(["4", "", "2"])).unwrap();
        pin.send(PinEvent::Focus { index: 1 });

        let snap = pin.snapshot();
        assert_eq!(snap.value_string(), "42");
        assert_eq!(pin.value_string(), "42");
        assert_eq!(snap.focused_index_raw(), 1);
        assert_eq!(snap.mode, Mode::Focused);
        assert!(!snap.is_complete);
    }

    /// Small deterministic generator so the invariant sweep is reproducible.
    struct Lcg(u64);

    impl Lcg {
        fn next(&mut self, bound: usize) -> usize {
            self.0 = self
                .0
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((self.0 >> 33) as usize) % bound
        }
    }

    #[test]
    fn invariants_hold_for_arbitrary_event_sequences() {
        let texts = ["", "1", "12", "21", " 9 ", "123456789", "é€"];
        for n in 1..=6 {
            let (mut pin, completions, _) = recorded(PinInputOptions::new(n));
            let mut rng = Lcg(n as u64);
            let mut transitions_to_complete = 0;

            for _ in 0..500 {
                let index = rng.next(n + 2);
                let text = texts[rng.next(texts.len())];
                let event = match rng.next(6) {
                    0 => PinEvent::Focus { index },
                    1 => PinEvent::LabelClick,
                    2 => PinEvent::Blur,
                    3 => input(index, text),
                    4 => PinEvent::Backspace { index },
                    _ => paste(index, text),
                };

                let was_complete = pin.is_complete();
                pin.send(event);
                if !was_complete && pin.is_complete() {
                    transitions_to_complete += 1;
                }

                assert_eq!(pin.value().len(), n);
                assert!(pin.value().iter().all(|s| s.chars().count() <= 1));
                let raw = pin.focused_index_raw();
                assert!((-1..n as isize).contains(&raw));
                match pin.mode() {
                    // Only a label click leaves a cursor behind while idle.
                    Mode::Idle => assert!(raw == -1 || raw == 0),
                    Mode::Focused => assert!(raw >= 0),
                }
            }

            assert_eq!(completions.borrow().len(), transitions_to_complete);
        }
    }
}
