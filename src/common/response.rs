use crate::common::header::{CONTENT_LENGTH, CONTENT_TYPE, HeaderCollection, LOCATION};
use crate::common::status;
use crate::common::status::Status;
use crate::header_collection;

/// The HTTP version written in every status line.
pub const HTTP_VERSION_1_1: &str = "HTTP/1.1";

/// An HTTP response.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Response {
    /// The status.
    pub status: Status,
    /// The headers.
    pub headers: HeaderCollection,
    /// The body.
    pub body: Vec<u8>,
}

impl Response {
    /// Creates an HTML response with the given markup as its body.
    pub fn html(body: String) -> Response {
        Response {
            status: status::OK,
            headers: header_collection![
                (CONTENT_TYPE, "text/html; charset=utf-8"),
                (CONTENT_LENGTH, body.len().to_string()),
            ],
            body: body.into_bytes(),
        }
    }

    /// Creates a redirect to the given location.
    pub fn redirect(location: &str) -> Response {
        Response {
            status: status::FOUND,
            headers: header_collection![(LOCATION, location), (CONTENT_LENGTH, "0")],
            body: vec![],
        }
    }

    /// Writes the status line, headers and body as bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = format!("{} {} {}\r\n", HTTP_VERSION_1_1, self.status.code, self.status.reason);
        for (name, value) in &self.headers {
            out.push_str(&format!("{}: {}\r\n", name, value));
        }
        out.push_str("\r\n");

        let mut out = out.into_bytes();
        out.extend_from_slice(&self.body);
        out
    }
}

impl From<Status> for Response {
    /// Creates a response with the given status and its reason as a plain text body.
    fn from(status: Status) -> Self {
        let body = format!("{} {}", status.code, status.reason);
        Response {
            status,
            headers: header_collection![
                (CONTENT_TYPE, "text/plain"),
                (CONTENT_LENGTH, body.len().to_string()),
            ],
            body: body.into_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::common::response::Response;
    use crate::common::status;

    #[test]
    fn serialize_body() {
        let response = Response::html(String::from("hello"));
        assert_eq!(
            String::from_utf8(response.to_bytes()).unwrap(),
            "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: 5\r\n\r\nhello");
    }

    #[test]
    fn serialize_status() {
        let response = Response::from(status::NOT_FOUND);
        assert_eq!(
            String::from_utf8(response.to_bytes()).unwrap(),
            "HTTP/1.1 404 Not Found\r\nContent-Type: text/plain\r\nContent-Length: 13\r\n\r\n404 Not Found");
    }

    #[test]
    fn redirect() {
        let response = Response::redirect("/Animals/Cats");
        assert_eq!(response.status, status::FOUND);
        assert_eq!(response.headers.get("location").unwrap(), "/Animals/Cats");
        assert!(response.body.is_empty());
    }

    #[test]
    fn html_sets_length() {
        let response = Response::html(String::from("<h1>hi</h1>"));
        assert_eq!(response.headers.get("content-length").unwrap(), "11");
        assert_eq!(response.headers.get("content-type").unwrap(), "text/html; charset=utf-8");
    }
}
