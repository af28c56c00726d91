/// Command-line argument parser
pub mod args;
/// HTTP data types.
pub mod common;
/// Parsing raw messages into requests.
pub mod parse;
/// Dispatching requests to controller actions and rendering their views.
pub mod controller;
/// The application's controllers.
pub mod app;
/// Components for running an HTTP server and handling requests.
pub mod server;

/// Utility components.
pub mod util;
