//! Harness configuration options
//!
//! Tuning knobs for the reactor-side timers and the read bound. Defaults
//! reproduce the reference cadence; slow values make the interleaving easy to
//! watch by eye.
//!
//! # Examples
//!
//! ```
//! use probetap_core::options::HarnessOptions;
//! use std::time::Duration;
//!
//! let opts = HarnessOptions::default()
//!     .with_work_interval(Duration::from_millis(500))
//!     .with_poll_interval(Duration::from_millis(100));
//! ```

use std::time::Duration;

use crate::frame::MAX_PACKET_SIZE;

/// Harness tuning knobs.
#[derive(Debug, Clone)]
pub struct HarnessOptions {
    /// Period of the job simulator's timer.
    ///
    /// - Default: 2 seconds, slow enough to watch interleaving while
    ///   debugging. Reduce for production-style cadence.
    pub work_interval: Duration,

    /// Period of the command dispatcher's mailbox poll.
    ///
    /// This is the upper bound on command-dispatch latency.
    /// - Default: 500 ms
    pub poll_interval: Duration,

    /// Grace period after spawning the input thread, so the usage banner
    /// prints before job status lines interleave. Display nicety only.
    /// - Default: 3 seconds
    pub startup_grace: Duration,

    /// Upper bound on a single read request, in bytes.
    /// - Default: [`MAX_PACKET_SIZE`]
    pub max_packet: usize,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        Self {
            work_interval: Duration::from_millis(2000),
            poll_interval: Duration::from_millis(500),
            startup_grace: Duration::from_secs(3),
            max_packet: MAX_PACKET_SIZE,
        }
    }
}

impl HarnessOptions {
    #[must_use]
    pub const fn with_work_interval(mut self, interval: Duration) -> Self {
        self.work_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[must_use]
    pub const fn with_startup_grace(mut self, grace: Duration) -> Self {
        self.startup_grace = grace;
        self
    }

    #[must_use]
    pub const fn with_max_packet(mut self, max: usize) -> Self {
        self.max_packet = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_cadence() {
        let opts = HarnessOptions::default();
        assert_eq!(opts.work_interval, Duration::from_millis(2000));
        assert_eq!(opts.poll_interval, Duration::from_millis(500));
        assert_eq!(opts.startup_grace, Duration::from_secs(3));
        assert_eq!(opts.max_packet, MAX_PACKET_SIZE);
    }

    #[test]
    fn builders_override_fields() {
        let opts = HarnessOptions::default()
            .with_work_interval(Duration::from_millis(100))
            .with_max_packet(64);
        assert_eq!(opts.work_interval, Duration::from_millis(100));
        assert_eq!(opts.max_packet, 64);
    }
}
