//! Console command grammar
//!
//! One command per line, whitespace-tokenized, routed by the first character
//! of the first token (case-insensitive):
//!
//! - `C <host> <port>` — connect to the server
//! - `R <byteCount>` — read that many bytes
//! - `W` — send the fixed write probe
//! - `X` — stop the harness
//!
//! `Q` (pause for input) is consumed by the input monitor and never reaches
//! the parser. A malformed line yields a [`ParseError`] and has no side
//! effects; an empty line is an explicit no-op rather than undefined
//! behavior.

use thiserror::Error;

/// A parsed operator command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `C <host> <port>`
    Connect { host: String, port: u16 },
    /// `R <byteCount>`
    Read { count: usize },
    /// `W`
    Write,
    /// `X`
    Stop,
}

/// Why a command line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Empty or all-whitespace line. Silently ignored by callers.
    #[error("Empty command line")]
    Empty,
    #[error("Read command missing byte count")]
    MissingByteCount,
    #[error("Invalid byte count: {0}")]
    InvalidByteCount(String),
    #[error("Connect command needs a host and a port")]
    BadConnect,
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Unrecognized command: {0}")]
    Unrecognized(String),
}

impl Command {
    /// Parse one input line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] describing the first problem found; the line
    /// is discarded without side effects.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut tokens = line.split_whitespace();
        let head = tokens.next().ok_or(ParseError::Empty)?;

        match head.as_bytes()[0].to_ascii_lowercase() {
            b'r' => {
                let token = tokens.next().ok_or(ParseError::MissingByteCount)?;
                let count = token
                    .parse::<usize>()
                    .map_err(|_| ParseError::InvalidByteCount(token.to_string()))?;
                Ok(Self::Read { count })
            }
            b'c' => {
                let host = tokens.next().ok_or(ParseError::BadConnect)?.to_string();
                let port_token = tokens.next().ok_or(ParseError::BadConnect)?;
                if tokens.next().is_some() {
                    return Err(ParseError::BadConnect);
                }
                let port = port_token
                    .parse::<u16>()
                    .map_err(|_| ParseError::InvalidPort(port_token.to_string()))?;
                Ok(Self::Connect { host, port })
            }
            b'w' => Ok(Self::Write),
            b'x' => Ok(Self::Stop),
            _ => Err(ParseError::Unrecognized(head.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_connect() {
        assert_eq!(
            Command::parse("C 127.0.0.1 5555"),
            Ok(Command::Connect {
                host: "127.0.0.1".to_string(),
                port: 5555,
            })
        );
    }

    #[test]
    fn parses_read_write_stop() {
        assert_eq!(Command::parse("R 4"), Ok(Command::Read { count: 4 }));
        assert_eq!(Command::parse("W"), Ok(Command::Write));
        assert_eq!(Command::parse("X"), Ok(Command::Stop));
    }

    #[test]
    fn first_character_routes_case_insensitively() {
        assert_eq!(Command::parse("r 4"), Ok(Command::Read { count: 4 }));
        assert_eq!(Command::parse("w"), Ok(Command::Write));
        assert_eq!(Command::parse("x"), Ok(Command::Stop));
        assert_eq!(
            Command::parse("c localhost 80"),
            Ok(Command::Connect {
                host: "localhost".to_string(),
                port: 80,
            })
        );
    }

    #[test]
    fn empty_line_is_explicit() {
        assert_eq!(Command::parse(""), Err(ParseError::Empty));
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
    }

    #[test]
    fn read_requires_a_numeric_byte_count() {
        assert_eq!(Command::parse("R"), Err(ParseError::MissingByteCount));
        assert_eq!(
            Command::parse("R abc"),
            Err(ParseError::InvalidByteCount("abc".to_string()))
        );
    }

    #[test]
    fn connect_requires_exactly_host_and_port() {
        assert_eq!(Command::parse("C"), Err(ParseError::BadConnect));
        assert_eq!(Command::parse("C 127.0.0.1"), Err(ParseError::BadConnect));
        assert_eq!(
            Command::parse("C 127.0.0.1 5555 extra"),
            Err(ParseError::BadConnect)
        );
        assert_eq!(
            Command::parse("C 127.0.0.1 notaport"),
            Err(ParseError::InvalidPort("notaport".to_string()))
        );
    }

    #[test]
    fn unknown_leading_token_is_rejected() {
        assert_eq!(
            Command::parse("hello"),
            Err(ParseError::Unrecognized("hello".to_string()))
        );
    }
}
