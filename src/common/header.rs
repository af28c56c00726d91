use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// "Content-Length" header name.
pub const CONTENT_LENGTH: &str = "Content-Length";
/// "Content-Type" header name.
pub const CONTENT_TYPE: &str = "Content-Type";
/// "Connection" header name.
pub const CONNECTION: &str = "Connection";
/// "Location" header name.
pub const LOCATION: &str = "Location";
/// "Server" header name.
pub const SERVER: &str = "Server";

/// Error for a strict header lookup that found nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNotFound(pub String);

impl Display for HeaderNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "header '{}' not found", self.0)
    }
}

impl Error for HeaderNotFound {}

/// An ordered collection of headers. Names are compared without regard to case, and repeated
/// names are kept as separate entries in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderCollection {
    entries: Vec<(String, String)>,
    /// Lowercased name to positions in `entries`.
    index: HashMap<String, Vec<usize>>,
}

/// Creates a header collection.
/// ```
/// use mywebserver::common::header::CONTENT_LENGTH;
/// use mywebserver::header_collection;
///
/// let headers = header_collection![
///    (CONTENT_LENGTH, "5"),
///    ("custom-header", "hello"),
///    ("Custom-Header", "again"),
/// ];
///
/// assert_eq!(headers.get("content-length").unwrap(), "5");
/// assert_eq!(headers.get_all("CUSTOM-HEADER").collect::<Vec<_>>(), vec!["hello", "again"]);
/// ```
#[macro_export]
macro_rules! header_collection {
    () => { $crate::common::header::HeaderCollection::new() };
    ($(($name:expr, $value:expr)),+ $(,)?) => {
        $crate::common::header::HeaderCollection::from_pairs(vec![
            $(($name.into(), $value.into()),)+
        ])
    }
}

impl HeaderCollection {
    /// Creates an empty collection.
    pub fn new() -> HeaderCollection {
        HeaderCollection::default()
    }

    /// Gets a collection holding the given pairs in order.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> HeaderCollection {
        pairs.into_iter().fold(HeaderCollection::new(), |mut headers, (name, value)| {
            headers.add(name, value);
            headers
        })
    }

    /// Appends a header. Existing entries with the same name are left alone.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        self.index.entry(name.to_ascii_lowercase()).or_default().push(self.entries.len());
        self.entries.push((name, value.into()));
    }

    /// Checks if there is at least one header with the given name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&name.to_ascii_lowercase())
    }

    /// Gets the value of the first header with the given name.
    pub fn get(&self, name: &str) -> Result<&str, HeaderNotFound> {
        self.get_all(name).next().ok_or_else(|| HeaderNotFound(name.to_string()))
    }

    /// Gets every value for the given name in insertion order.
    pub fn get_all<'a>(&'a self, name: &str) -> impl Iterator<Item=&'a str> + 'a {
        self.index.get(&name.to_ascii_lowercase())
            .into_iter()
            .flatten()
            .map(move |&i| self.entries[i].1.as_str())
    }

    /// Iterates over all (name, value) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item=(&str, &str)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a HeaderCollection {
    type Item = (&'a str, &'a str);
    type IntoIter = Box<dyn Iterator<Item=(&'a str, &'a str)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
