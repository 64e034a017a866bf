//! Probetap Core
//!
//! This crate contains the building blocks of the interactive TCP test
//! harness:
//! - Single-slot command mailbox bridging the input thread and the reactor
//!   thread (`mailbox`)
//! - Pause/stop control cell shared with the input thread (`control`)
//! - Console command grammar (`command`)
//! - Fixed probe frames and hex rendering (`frame`)
//! - Non-blocking TCP client + its command actor (`client`)
//! - Mailbox poller routing commands to the client (`dispatcher`)
//! - Background job simulator driven by a reactor timer (`job`)
//! - Blocking console reader for the input thread (`input`)
//! - Harness tuning knobs (`options`)
//! - Error types (`error`)

// The net module needs raw fd/socket access for socket configuration
#![cfg_attr(not(test), deny(unsafe_code))]
// Allow some pedantic lints that are intentional in this crate
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_pass_by_value)]

pub mod client;
pub mod command;
pub mod control;
pub mod dispatcher;
pub mod error;
pub mod frame;
pub mod input;
pub mod job;
pub mod mailbox;
pub mod net;
pub mod options;

// Optional: a small prelude to make downstream crates ergonomic.
// Keep it minimal to avoid API lock-in.
pub mod prelude {
    pub use crate::client::{ClientCmd, ConnectionState, ProbeClient};
    pub use crate::command::{Command, ParseError};
    pub use crate::control::{Control, ControlCell};
    pub use crate::dispatcher::{CommandDispatcher, PollOutcome};
    pub use crate::error::ClientError;
    pub use crate::frame::{CONNECT_HELLO, FRAME_LEN, MAX_PACKET_SIZE, WRITE_PROBE};
    pub use crate::input::InputMonitor;
    pub use crate::job::{JobSimulator, Tick};
    pub use crate::mailbox::CommandMailbox;
    pub use crate::options::HarnessOptions;
}
