use crate::common::header::HeaderCollection;
use crate::common::method::Method;
use crate::common::request::{Query, Request};
use crate::parse::error::ParsingError;

/// Line terminator between the start line, headers and body lines.
const NEW_LINE: &str = "\r\n";

/// The method and target from the first line of a request.
struct StartLine<'a> {
    method: Method,
    target: &'a str,
}

/// A request target split into its path and query parameters.
struct Target {
    path: String,
    query: Query,
}

/// Parses one complete request message.
///
/// The header block must end with an empty line unless the message is nothing but a start line.
/// Everything after that empty line is the body, kept exactly as sent.
pub fn parse_request(raw: &str) -> Result<Request, ParsingError> {
    let mut lines = raw.split(NEW_LINE);

    let start_line = parse_start_line(lines.next().unwrap_or_default())?;
    let Target { path, query } = parse_target(start_line.target);

    let mut headers = HeaderCollection::new();
    let mut terminated = false;
    for line in lines.by_ref() {
        if line.is_empty() {
            terminated = true;
            break;
        }
        let (name, value) = parse_header(line)?;
        headers.add(name, value);
    }

    if !terminated && !headers.is_empty() {
        return Err(ParsingError::MalformedRequest);
    }

    let body = lines.collect::<Vec<&str>>().join(NEW_LINE);

    Ok(Request::new(start_line.method, path, start_line.target.to_string(), query, headers, body))
}

/// Parses the first line of a request. Tokens after the target, like the HTTP version, are ignored.
fn parse_start_line(line: &str) -> Result<StartLine<'_>, ParsingError> {
    let mut split = line.split(' ');

    let method_raw = split.next().ok_or(ParsingError::MalformedRequest)?;
    let target = split.next().ok_or(ParsingError::MalformedRequest)?;

    Ok(StartLine { method: parse_method(method_raw)?, target })
}

/// Parses the given string into a method. If the method is not recognized, will return an error.
fn parse_method(raw: &str) -> Result<Method, ParsingError> {
    Method::try_from_str(raw).ok_or_else(|| ParsingError::UnsupportedMethod(raw.to_string()))
}

/// Splits the target at the first '?' into a path and a query string.
fn parse_target(target: &str) -> Target {
    match target.split_once('?') {
        Some((path, query)) => Target { path: path.to_string(), query: parse_query(query) },
        None => Target { path: target.to_string(), query: Query::new() },
    }
}

/// Parses "k1=v1&k2=v2" pairs. Segments that aren't exactly one key and one value are skipped,
/// and a repeated key keeps its last value.
fn parse_query(raw: &str) -> Query {
    raw.split('&')
        .map(|segment| segment.split('=').collect::<Vec<&str>>())
        .filter(|parts| parts.len() == 2)
        .map(|parts| (parts[0].to_string(), parts[1].to_string()))
        .collect()
}

/// Parses the given line as a header. Splits the line at the first colon and trims the value.
fn parse_header(line: &str) -> Result<(&str, &str), ParsingError> {
    line.split_once(':')
        .map(|(name, value)| (name, value.trim()))
        .ok_or_else(|| ParsingError::MalformedHeader(line.to_string()))
}
