use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, ErrorKind, Read};

use crate::common::header::CONTENT_LENGTH;
use crate::common::status;
use crate::common::status::Status;

/// Max size in bytes for the start line and headers together.
const MAX_HEAD_SIZE: usize = 8192;

/// Max size in bytes for a body.
const MAX_BODY_SIZE: usize = 1024 * 1024;

/// An error that may result from trying to read a message off a connection.
#[derive(Debug)]
pub enum ReadMessageError {
    /// The client closed the connection without sending anything.
    Closed,
    /// The start line and headers are larger than allowed.
    HeadTooLarge,
    /// A line of the head ends in a bare LF instead of CRLF.
    BareLineFeed,
    /// The Content-Length header isn't a number.
    InvalidContentLength,
    /// The Content-Length is larger than allowed.
    BodyTooLarge,
    /// Data is not valid UTF8.
    InvalidUtf8,
    /// An unhandled IO error, including timeouts and bodies cut short.
    IoErr(std::io::Error),
}

impl ReadMessageError {
    /// The status to answer with, or None if nobody is left to answer.
    pub fn status(&self) -> Option<Status> {
        match self {
            ReadMessageError::Closed | ReadMessageError::IoErr(_) => None,
            ReadMessageError::HeadTooLarge => Some(status::REQUEST_HEADER_FIELDS_TOO_LARGE),
            ReadMessageError::BodyTooLarge => Some(status::PAYLOAD_TOO_LARGE),
            ReadMessageError::BareLineFeed
            | ReadMessageError::InvalidContentLength
            | ReadMessageError::InvalidUtf8 => Some(status::BAD_REQUEST),
        }
    }
}

impl Display for ReadMessageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReadMessageError::Closed => f.write_str("connection closed"),
            ReadMessageError::HeadTooLarge => write!(f, "headers larger than {} bytes", MAX_HEAD_SIZE),
            ReadMessageError::BareLineFeed => f.write_str("line ends without a carriage return"),
            ReadMessageError::InvalidContentLength => f.write_str("invalid content length"),
            ReadMessageError::BodyTooLarge => write!(f, "body larger than {} bytes", MAX_BODY_SIZE),
            ReadMessageError::InvalidUtf8 => f.write_str("message is not valid UTF-8"),
            ReadMessageError::IoErr(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ReadMessageError {}

impl From<std::io::Error> for ReadMessageError {
    fn from(err: std::io::Error) -> Self {
        ReadMessageError::IoErr(err)
    }
}

/// Reads one whole message: lines up to and including the empty line ending the headers,
/// then as many body bytes as the Content-Length header asks for.
/// If the client stops sending before the empty line, whatever arrived is returned as the message.
/// Head lines must end in CRLF.
pub fn read_message(reader: &mut impl BufRead) -> Result<String, ReadMessageError> {
    let mut head = Vec::new();

    loop {
        let line_start = head.len();
        let limit = (MAX_HEAD_SIZE - head.len()) as u64;
        let read = reader.by_ref().take(limit).read_until(b'\n', &mut head)?;

        if read == 0 {
            if head.len() >= MAX_HEAD_SIZE {
                return Err(ReadMessageError::HeadTooLarge);
            }
            if head.is_empty() {
                return Err(ReadMessageError::Closed);
            }
            return into_string(head);
        }

        let line = &head[line_start..];
        if line == b"\r\n" {
            break;
        }
        if line.ends_with(b"\n") && !line.ends_with(b"\r\n") {
            return Err(ReadMessageError::BareLineFeed);
        }
    }

    let mut message = into_string(head)?;

    let content_length = content_length(&message)?;
    if content_length > MAX_BODY_SIZE {
        return Err(ReadMessageError::BodyTooLarge);
    }

    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).map_err(|err| match err.kind() {
        ErrorKind::UnexpectedEof => std::io::Error::new(ErrorKind::UnexpectedEof, "body shorter than content length"),
        _ => err,
    })?;
    message.push_str(&into_string(body)?);

    Ok(message)
}

fn into_string(bytes: Vec<u8>) -> Result<String, ReadMessageError> {
    String::from_utf8(bytes).map_err(|_| ReadMessageError::InvalidUtf8)
}

/// Finds the first Content-Length header in the head of a message. No header means no body.
fn content_length(head: &str) -> Result<usize, ReadMessageError> {
    head.split("\r\n")
        .skip(1)
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(CONTENT_LENGTH))
        .map(|(_, value)| value.trim().parse().map_err(|_| ReadMessageError::InvalidContentLength))
        .unwrap_or(Ok(0))
}
