pub use config::*;
pub use server::*;

/// Entry point for starting a server.
mod server;
/// Config for a server.
mod config;
/// Reading a single message off a connection.
mod connection;
