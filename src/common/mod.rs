/// HTTP header collection and functions.
pub mod header;
/// HTTP method data type and functions.
pub mod method;
/// HTTP request data type and functions.
pub mod request;
/// HTTP response data type and functions
pub mod response;
/// HTTP status data type and functions.
pub mod status;
