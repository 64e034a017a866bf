//! Pause/stop control cell
//!
//! One mutex-guarded state cell replaces the pair of ad-hoc shared booleans
//! the design started from. The input thread applies tagged transitions; the
//! reactor tasks read the current state. Stop is terminal: once applied, no
//! later transition revives the cell.

use std::sync::Arc;

use parking_lot::Mutex;

/// Tagged control transition from the input thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Suppress job-completion reporting until resumed.
    Pause,
    /// Resume job-completion reporting.
    Resume,
    /// Terminal shutdown signal. Idempotent and irreversible.
    Stop,
}

#[derive(Debug, Default)]
struct ControlState {
    paused: bool,
    stopped: bool,
}

/// Thread-safe control cell shared between the input thread (writer) and the
/// reactor tasks (readers). Cloning clones a handle to the same cell.
#[derive(Debug, Clone, Default)]
pub struct ControlCell {
    inner: Arc<Mutex<ControlState>>,
}

impl ControlCell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a control transition.
    ///
    /// `Stop` wins over everything applied after it; `Pause`/`Resume` only
    /// toggle the reporting flag.
    pub fn apply(&self, control: Control) {
        let mut state = self.inner.lock();
        match control {
            Control::Pause => state.paused = true,
            Control::Resume => state.paused = false,
            Control::Stop => state.stopped = true,
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.inner.lock().paused
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.inner.lock().stopped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let cell = ControlCell::new();
        assert!(!cell.is_paused());
        assert!(!cell.is_stopped());
    }

    #[test]
    fn pause_resume_toggle() {
        let cell = ControlCell::new();
        cell.apply(Control::Pause);
        assert!(cell.is_paused());
        cell.apply(Control::Resume);
        assert!(!cell.is_paused());
    }

    #[test]
    fn stop_is_terminal() {
        let cell = ControlCell::new();
        cell.apply(Control::Stop);
        assert!(cell.is_stopped());

        // No later transition clears the stop.
        cell.apply(Control::Resume);
        cell.apply(Control::Pause);
        cell.apply(Control::Stop);
        assert!(cell.is_stopped());
    }

    #[test]
    fn handles_share_one_cell() {
        let cell = ControlCell::new();
        let handle = cell.clone();
        handle.apply(Control::Pause);
        assert!(cell.is_paused());
    }
}
