use std::io::{Error, ErrorKind};

use clap::Parser;
use log::info;
use simplelog::{ColorChoice, ConfigBuilder, TerminalMode, TermLogger};

use mywebserver::app;
use mywebserver::args::Args;
use mywebserver::server;

fn main() -> Result<(), Error> {
    let args = Args::parse();

    TermLogger::init(args.log_level, ConfigBuilder::new().build(), TerminalMode::Mixed, ColorChoice::Auto)
        .map_err(|err| Error::new(ErrorKind::Other, err))?;

    let registry = app::registry();
    info!("Registered {} actions, views from {}", registry.len(), args.views.display());

    server::listen_http(args.into_config(registry))
}
