//! Background job simulator
//!
//! A reactor-owned repeating timer "completes" a job on each firing unless
//! the operator has paused for input. Pausing suppresses the completion side
//! effect only; the timer keeps its cadence so resuming never has to catch
//! up on missed ticks. Stop is terminal: the timer is not rescheduled again.

use std::time::Duration;

use tracing::debug;

use crate::control::ControlCell;

/// Outcome of one timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// A job completed; carries the new total.
    Completed(u64),
    /// Paused for operator input; no job counted, timer keeps firing.
    Suppressed,
    /// Stop was signaled; ticking ends permanently.
    Stopped,
}

/// Simulates autonomous background work on the reactor thread.
#[derive(Debug)]
pub struct JobSimulator {
    control: ControlCell,
    period: Duration,
    completed: u64,
}

impl JobSimulator {
    #[must_use]
    pub fn new(control: ControlCell, period: Duration) -> Self {
        Self {
            control,
            period,
            completed: 0,
        }
    }

    /// Jobs completed so far. Monotonic; never moves after a stop.
    #[must_use]
    pub fn completed(&self) -> u64 {
        self.completed
    }

    /// Apply one timer firing to the counter.
    pub fn on_tick(&mut self) -> Tick {
        if self.control.is_stopped() {
            return Tick::Stopped;
        }
        if self.control.is_paused() {
            return Tick::Suppressed;
        }
        self.completed += 1;
        Tick::Completed(self.completed)
    }

    /// Run the repeating timer until stop is signaled.
    ///
    /// Returns the final job count.
    pub async fn run(mut self) -> u64 {
        loop {
            compio::time::sleep(self.period).await;
            match self.on_tick() {
                Tick::Completed(n) => println!("Completed Job {n}"),
                Tick::Suppressed => {}
                Tick::Stopped => {
                    println!("Stopping");
                    debug!(completed = self.completed, "job simulator stopped");
                    return self.completed;
                }
            }
        }
    }
}
