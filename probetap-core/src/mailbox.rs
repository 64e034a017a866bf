//! Single-slot command mailbox
//!
//! The input thread posts raw command lines here; the dispatcher drains the
//! slot from the reactor thread. The slot holds at most one line and a post
//! overwrites any unconsumed value: latest-wins is the documented delivery
//! policy, not an accident. If the operator types faster than the dispatcher
//! polls, intermediate commands are dropped.

use std::sync::Arc;

use parking_lot::Mutex;

/// Thread-safe single-slot handoff of the latest unconsumed command line.
///
/// Cloning the mailbox clones a handle to the same slot.
///
/// # Examples
///
/// ```
/// use probetap_core::mailbox::CommandMailbox;
///
/// let mailbox = CommandMailbox::default();
/// mailbox.post("R 5");
/// mailbox.post("W");
/// assert_eq!(mailbox.take().as_deref(), Some("W"));
/// assert_eq!(mailbox.take(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CommandMailbox {
    slot: Arc<Mutex<Option<String>>>,
}

impl CommandMailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a command line, overwriting any unconsumed prior value.
    ///
    /// Never blocks beyond the slot mutex.
    pub fn post(&self, line: impl Into<String>) {
        *self.slot.lock() = Some(line.into());
    }

    /// Atomically take and clear the pending line, if any.
    #[must_use]
    pub fn take(&self) -> Option<String> {
        self.slot.lock().take()
    }
}
