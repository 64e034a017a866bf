//! Command dispatcher
//!
//! Runs exclusively on the reactor thread. Every poll interval it drains the
//! mailbox, parses whatever the operator posted, and routes it to the client
//! actor. The poll interval is the upper bound on command-dispatch latency.
//! An `X` command shuts the dispatcher down without scheduling another poll;
//! dropping its sender is what lets the client actor drain and exit.

use std::time::Duration;

use flume::Sender;
use tracing::debug;

use crate::client::ClientCmd;
use crate::command::{Command, ParseError};
use crate::mailbox::CommandMailbox;

/// What one mailbox poll did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Nothing pending, or the line was malformed and reported.
    Idle,
    /// A command was forwarded to the client actor.
    Dispatched,
    /// Stop command seen; no further polls will be scheduled.
    Shutdown,
}

/// Periodic poll-and-route of pending operator commands.
#[derive(Debug)]
pub struct CommandDispatcher {
    mailbox: CommandMailbox,
    client: Sender<ClientCmd>,
    poll_interval: Duration,
}

impl CommandDispatcher {
    #[must_use]
    pub fn new(mailbox: CommandMailbox, client: Sender<ClientCmd>, poll_interval: Duration) -> Self {
        Self {
            mailbox,
            client,
            poll_interval,
        }
    }

    /// Drain and route the mailbox once.
    pub fn poll_once(&self) -> PollOutcome {
        let Some(line) = self.mailbox.take() else {
            return PollOutcome::Idle;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return PollOutcome::Idle,
            Err(err) => {
                println!("{err}");
                return PollOutcome::Idle;
            }
        };

        debug!(?command, "dispatching");
        let client_cmd = match command {
            Command::Stop => return PollOutcome::Shutdown,
            Command::Connect { host, port } => ClientCmd::Connect { host, port },
            Command::Read { count } => ClientCmd::Read { count },
            Command::Write => ClientCmd::Write,
        };

        if self.client.send(client_cmd).is_err() {
            debug!("client actor gone, shutting down dispatcher");
            return PollOutcome::Shutdown;
        }
        PollOutcome::Dispatched
    }

    /// Poll the mailbox until a stop command arrives.
    pub async fn run(self) {
        loop {
            if self.poll_once() == PollOutcome::Shutdown {
                break;
            }
            compio::time::sleep(self.poll_interval).await;
        }
        // self drops here, releasing the client sender
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::Receiver;

    fn dispatcher() -> (CommandMailbox, CommandDispatcher, Receiver<ClientCmd>) {
        let mailbox = CommandMailbox::new();
        let (tx, rx) = flume::unbounded();
        let dispatcher = CommandDispatcher::new(mailbox.clone(), tx, Duration::from_millis(1));
        (mailbox, dispatcher, rx)
    }

    #[test]
    fn empty_mailbox_is_idle() {
        let (_mailbox, dispatcher, rx) = dispatcher();
        assert_eq!(dispatcher.poll_once(), PollOutcome::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn read_command_reaches_the_client() {
        let (mailbox, dispatcher, rx) = dispatcher();
        mailbox.post("R 5");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Dispatched);
        assert_eq!(rx.try_recv().unwrap(), ClientCmd::Read { count: 5 });
    }

    #[test]
    fn latest_post_wins_across_one_poll() {
        let (mailbox, dispatcher, rx) = dispatcher();
        mailbox.post("R 5");
        mailbox.post("W");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Dispatched);
        assert_eq!(rx.try_recv().unwrap(), ClientCmd::Write);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn malformed_line_is_discarded_without_side_effects() {
        let (mailbox, dispatcher, rx) = dispatcher();
        mailbox.post("R");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Idle);
        assert!(rx.try_recv().is_err());

        mailbox.post("bogus");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stop_command_shuts_the_dispatcher_down() {
        let (mailbox, dispatcher, rx) = dispatcher();
        mailbox.post("x");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Shutdown);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn connect_command_is_routed_with_its_endpoint() {
        let (mailbox, dispatcher, rx) = dispatcher();
        mailbox.post("C 127.0.0.1 5555");
        assert_eq!(dispatcher.poll_once(), PollOutcome::Dispatched);
        assert_eq!(
            rx.try_recv().unwrap(),
            ClientCmd::Connect {
                host: "127.0.0.1".to_string(),
                port: 5555,
            }
        );
    }
}
