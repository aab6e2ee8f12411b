//! Deferred focus execution.
//!
//! The controller asks for focus moves while the host is still dispatching the
//! DOM event that caused them. Moving focus right away would fight the
//! browser's own focus handling, so requests are parked here and the host
//! applies them on its next frame.

use log::trace;
use pin_input::{FocusExecutor, FocusRequest};
use std::cell::RefCell;
use std::rc::Rc;

const LOG_TARGET: &str = "pin_dom.focus";

/// Single-slot queue shared between a controller and its host.
///
/// Clones share the same pending request. Only the latest request matters:
/// a newer one replaces anything not yet applied.
#[derive(Clone, Debug, Default)]
pub struct FrameFocusQueue {
    pending: Rc<RefCell<Option<FocusRequest>>>,
}

impl FrameFocusQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }

    /// Take the request to apply on this frame.
    pub fn take(&self) -> Option<FocusRequest> {
        self.pending.borrow_mut().take()
    }

    fn push(&self, request: FocusRequest) {
        let replaced = self.pending.borrow_mut().replace(request);
        if let Some(old) = replaced {
            trace!(target: LOG_TARGET, "focus request {old:?} superseded by {request:?}");
        }
    }
}

impl FocusExecutor for FrameFocusQueue {
    fn execute_focus(&mut self, request: FocusRequest) {
        self.push(request);
    }
}
