use std::time::Duration;

use crate::controller::{ControllerRegistry, ViewEngine};

/// The config for an HTTP server.
pub struct Config {
    /// The address to bind the server listener to.
    pub addr: String,
    /// The number of threads to spawn for handling connections. Each thread is used for one
    /// connection at a time.
    pub connection_handler_threads: usize,
    /// How long to wait on a client that has not finished sending its request.
    pub read_timeout: Duration,
    /// The actions requests are dispatched to.
    pub registry: ControllerRegistry,
    /// Renders the views actions ask for.
    pub views: ViewEngine,
}
