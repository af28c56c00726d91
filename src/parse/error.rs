use std::error::Error;
use std::fmt::{Display, Formatter};

/// Error for when an HTTP request can't be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    /// No usable start line, or the header block never ends.
    MalformedRequest,
    /// Method is not one of GET, POST, PUT or DELETE. Holds the method as it was sent.
    UnsupportedMethod(String),
    /// Header line without a name and value around a colon. Holds the offending line.
    MalformedHeader(String),
}

impl Display for ParsingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsingError::MalformedRequest => f.write_str("request is not valid"),
            ParsingError::UnsupportedMethod(method) => write!(f, "method '{}' is not supported", method),
            ParsingError::MalformedHeader(line) => write!(f, "header line '{}' is not valid", line),
        }
    }
}

impl Error for ParsingError {}
