//! Console input monitor
//!
//! Runs on its own thread and is the only component permitted to block on
//! user input. It never touches the reactor or the socket: command lines go
//! into the mailbox, pause/stop intent goes into the control cell.
//!
//! The `Q` affordance is handled right here rather than being dispatched, so
//! the job simulator quiets down immediately instead of half a poll interval
//! later.

use std::io::{self, BufRead};

use tracing::debug;

use crate::control::{Control, ControlCell};
use crate::mailbox::CommandMailbox;

/// What to do with one raw input line, decided by its first character
/// (case-insensitive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// `C`/`R`/`W`: post to the mailbox and resume job reporting.
    Forward,
    /// `Q`: pause job reporting while the operator types.
    PauseForInput,
    /// `X`: post to the mailbox, signal stop, end the input thread.
    Shutdown,
    /// Anything else, including an empty line.
    Ignore,
}

/// Classify a raw input line. An empty line is an explicit no-op.
#[must_use]
pub fn classify(line: &str) -> InputAction {
    match line.as_bytes().first().map(|b| b.to_ascii_lowercase()) {
        Some(b'x') => InputAction::Shutdown,
        Some(b'q') => InputAction::PauseForInput,
        Some(b'c' | b'r' | b'w') => InputAction::Forward,
        _ => InputAction::Ignore,
    }
}

/// Blocking console line reader for the input thread.
#[derive(Debug)]
pub struct InputMonitor {
    mailbox: CommandMailbox,
    control: ControlCell,
}

impl InputMonitor {
    #[must_use]
    pub fn new(mailbox: CommandMailbox, control: ControlCell) -> Self {
        Self { mailbox, control }
    }

    /// Read console lines until a stop command or end of input.
    ///
    /// End of input (stdin closed) is treated like an `X` so the reactor
    /// still drains and exits cleanly.
    pub fn run(self) {
        print_banner();

        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            println!("input was {line}");

            match classify(&line) {
                InputAction::Shutdown => {
                    self.mailbox.post(line);
                    self.control.apply(Control::Stop);
                    return;
                }
                InputAction::PauseForInput => {
                    println!("Waiting for user input: C or R or W");
                    self.control.apply(Control::Pause);
                }
                InputAction::Forward => {
                    self.mailbox.post(line);
                    self.control.apply(Control::Resume);
                }
                InputAction::Ignore => {}
            }
        }

        debug!("stdin closed, treating as stop");
        self.mailbox.post("x");
        self.control.apply(Control::Stop);
    }
}

fn print_banner() {
    println!(
        "\nKeyboard monitor running\n\n\
         \x20  To pause for user input type 'Q<ENTER>'\n\
         \x20  To connect to server type 'C <host> <port><ENTER>'\n\
         \x20  To read from server type 'R <byte count><ENTER>'\n\
         \x20  To send a pre-defined message to the server type 'W<ENTER>'\n\
         \x20  To stop type 'X<ENTER>' ( DO NOT USE ctrl-C )\n\n\
         \x20  Don't forget to hit <ENTER>!\n"
    );
}
