pub use request::parse_request;

/// Parsing errors.
pub mod error;
/// Request parsing components.
pub mod request;
