//! Non-blocking TCP client and its command actor
//!
//! One client == one logical server connection. The client owns the socket
//! and the connection state; both are touched only from the reactor thread.
//! The actor loop receives [`ClientCmd`]s from the dispatcher over a flume
//! channel, runs them sequentially, and reports every outcome as a status
//! line on the console. The client is a terminal sink for commands: nothing
//! downstream consumes its results programmatically.
//!
//! The resolve+connect step completes within the handling of one command.
//! That is a deliberate tradeoff: observed connect latency is negligible for
//! an interactive workflow, and it keeps the connection state machine to a
//! single transient `Connecting` label. Transfers never block the reactor's
//! other tasks beyond the cooperative await points.

use bytes::Bytes;
use compio::buf::BufResult;
use compio::io::{AsyncReadExt, AsyncWriteExt};
use compio::net::TcpStream;
use flume::Receiver;
use tracing::debug;

use crate::error::ClientError;
use crate::frame::{self, CONNECT_HELLO, FRAME_LEN, WRITE_PROBE};
use crate::net::enable_tcp_nodelay;

/// Commands from the dispatcher to the client actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCmd {
    /// Resolve + connect, then send the connect hello.
    Connect { host: String, port: u16 },
    /// Read exactly `count` bytes.
    Read { count: usize },
    /// Send the fixed write probe.
    Write,
}

/// Lifecycle of the one logical connection.
///
/// There is no automatic reconnect: any I/O error lands back in
/// `Disconnected` and stays there until the operator connects again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    /// Transient, for the duration of the resolve+connect call.
    Connecting,
    Connected,
}

/// TCP client for the single logical server connection.
pub struct ProbeClient {
    stream: Option<TcpStream>,
    state: ConnectionState,
    max_packet: usize,
}

impl ProbeClient {
    #[must_use]
    pub fn new(max_packet: usize) -> Self {
        Self {
            stream: None,
            state: ConnectionState::Disconnected,
            max_packet,
        }
    }

    #[must_use]
    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Resolve the address and connect.
    ///
    /// Any prior connection is dropped first. On success the socket gets
    /// TCP_NODELAY and the state moves to `Connected`; on any failure the
    /// state is `Disconnected`.
    ///
    /// # Errors
    ///
    /// Resolve or connect failures surface as [`ClientError::Io`].
    pub async fn connect(&mut self, host: &str, port: u16) -> Result<(), ClientError> {
        self.stream = None;
        self.state = ConnectionState::Connecting;

        match TcpStream::connect((host, port)).await {
            Ok(stream) => {
                if let Err(err) = enable_tcp_nodelay(&stream) {
                    debug!(%err, "could not enable TCP_NODELAY");
                }
                self.stream = Some(stream);
                self.state = ConnectionState::Connected;
                Ok(())
            }
            Err(err) => {
                self.state = ConnectionState::Disconnected;
                Err(err.into())
            }
        }
    }

    /// Check the preconditions of `read(count)` without issuing any I/O.
    ///
    /// # Errors
    ///
    /// The precondition variants of [`ClientError`].
    pub fn validate_read(&self, count: usize) -> Result<(), ClientError> {
        if self.state != ConnectionState::Connected {
            return Err(ClientError::NotConnected { op: "Read" });
        }
        if count < 1 {
            return Err(ClientError::InvalidByteCount);
        }
        if count > self.max_packet {
            return Err(ClientError::TooManyBytes {
                requested: count,
                max: self.max_packet,
            });
        }
        Ok(())
    }

    /// Read exactly `count` bytes from the server.
    ///
    /// # Errors
    ///
    /// Precondition failures are rejected before any I/O. A transfer error
    /// drops the connection and transitions to `Disconnected`.
    pub async fn read(&mut self, count: usize) -> Result<Bytes, ClientError> {
        self.validate_read(count)?;
        let stream = self
            .stream
            .as_mut()
            .ok_or(ClientError::NotConnected { op: "Read" })?;

        let BufResult(res, buf) = stream.read_exact(Vec::with_capacity(count)).await;
        match res {
            Ok(()) => Ok(Bytes::from(buf)),
            Err(err) => {
                self.disconnect();
                Err(err.into())
            }
        }
    }

    /// Send the connect hello frame.
    ///
    /// # Errors
    ///
    /// See [`Self::write_probe`].
    pub async fn send_hello(&mut self) -> Result<(), ClientError> {
        self.send_frame("Write", &CONNECT_HELLO).await
    }

    /// Send the fixed write probe frame.
    ///
    /// # Errors
    ///
    /// `NotConnected` before any I/O, or `Io` on a transfer failure (which
    /// also drops the connection).
    pub async fn write_probe(&mut self) -> Result<(), ClientError> {
        self.send_frame("Write", &WRITE_PROBE).await
    }

    async fn send_frame(
        &mut self,
        op: &'static str,
        payload: &[u8; FRAME_LEN],
    ) -> Result<(), ClientError> {
        if self.state != ConnectionState::Connected {
            return Err(ClientError::NotConnected { op });
        }
        let stream = self.stream.as_mut().ok_or(ClientError::NotConnected { op })?;

        let BufResult(res, _buf) = stream.write_all(payload.to_vec()).await;
        match res {
            Ok(()) => Ok(()),
            Err(err) => {
                self.disconnect();
                Err(err.into())
            }
        }
    }

    fn disconnect(&mut self) {
        self.stream = None;
        self.state = ConnectionState::Disconnected;
    }

    /// Run the client command actor.
    ///
    /// Commands are processed strictly in order; the loop ends once every
    /// sender has been dropped (dispatcher shutdown).
    pub async fn run(mut self, commands: Receiver<ClientCmd>) {
        while let Ok(cmd) = commands.recv_async().await {
            self.handle(cmd).await;
        }
        debug!("client actor finished");
    }

    async fn handle(&mut self, cmd: ClientCmd) {
        match cmd {
            ClientCmd::Connect { host, port } => match self.connect(&host, port).await {
                Ok(()) => {
                    println!("Client Connected OK");
                    match self.send_hello().await {
                        Ok(()) => println!("Connection message sent to server"),
                        Err(err) => {
                            debug!(%err, "hello send failed");
                            println!("Error sending connection message to server");
                        }
                    }
                }
                Err(err) => {
                    debug!(%err, %host, port, "connect failed");
                    println!("Client Connection failed");
                }
            },
            ClientCmd::Read { count } => {
                if let Err(err) = self.validate_read(count) {
                    println!("{err}");
                    return;
                }
                println!("waiting for server to reply");
                match self.read(count).await {
                    Ok(bytes) => {
                        println!("{} bytes read", bytes.len());
                        println!("{}", frame::hex_dump(&bytes));
                    }
                    Err(err) => {
                        debug!(%err, count, "read failed");
                        println!("Connection closed");
                    }
                }
            }
            ClientCmd::Write => match self.write_probe().await {
                Ok(()) => println!("Write message sent to server"),
                Err(err) if err.is_precondition() => println!("{err}"),
                Err(err) => {
                    debug!(%err, "probe send failed");
                    println!("Error sending write message to server");
                }
            },
        }
    }
}
