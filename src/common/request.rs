use std::collections::HashMap;

use crate::common::header::HeaderCollection;
use crate::common::method::Method;

/// Query parameters of a request target. Keys are unique and case sensitive.
pub type Query = HashMap<String, String>;

/// An HTTP request. Only the parser builds these, and nothing changes them afterwards.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Request {
    method: Method,
    path: String,
    raw_target: String,
    query: Query,
    headers: HeaderCollection,
    body: String,
}

impl Request {
    pub(crate) fn new(method: Method, path: String, raw_target: String, query: Query,
                      headers: HeaderCollection, body: String) -> Request {
        Request { method, path, raw_target, query, headers, body }
    }

    /// The method.
    pub fn method(&self) -> Method {
        self.method
    }

    /// The path, which is the target without its query string.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The target exactly as it appeared in the start line.
    pub fn raw_target(&self) -> &str {
        &self.raw_target
    }

    /// The query parameters.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Exact match lookup of a query parameter.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// The headers.
    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    /// The body.
    pub fn body(&self) -> &str {
        &self.body
    }
}
