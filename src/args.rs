use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

use crate::controller::{ControllerRegistry, ViewEngine};
use crate::server::Config;

/// A small MVC web server. Serves the animals pages from handlebars views.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// (Optional) Host name or IP address to serve from.
    #[arg(long, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    /// (Optional) Port number to open on host.
    #[arg(short, long, default_value_t = 8000)]
    pub port: u16,
    /// (Optional) Directory holding the view templates.
    #[arg(long, default_value = "./Views")]
    pub views: PathBuf,
    /// (Optional) Number of threads handling connections.
    #[arg(short, long, default_value_t = 5)]
    pub threads: usize,
    /// (Optional) Seconds to wait for a client to finish sending its request.
    #[arg(long, default_value_t = 5)]
    pub read_timeout: u64,
    /// (Optional) Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Args {
    /// Builds the server config, serving the given registry.
    pub fn into_config(self, registry: ControllerRegistry) -> Config {
        Config {
            addr: format!("{}:{}", self.host, self.port),
            connection_handler_threads: self.threads,
            read_timeout: Duration::from_secs(self.read_timeout),
            registry,
            views: ViewEngine::new(self.views),
        }
    }
}
