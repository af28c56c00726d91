use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;

use log::{debug, error, info, warn};

use crate::common::header::{CONNECTION, SERVER};
use crate::common::response::Response;
use crate::common::status;
use crate::parse::error::ParsingError;
use crate::parse::parse_request;
use crate::server::config::Config;
use crate::server::connection::{read_message, ReadMessageError};
use crate::util::thread_pool::ThreadPool;

/// Size of connection read buffers.
const READ_BUF_SIZE: usize = 4096;

/// Value of the Server header on every response.
const SERVER_NAME: &str = concat!("mywebserver/", env!("CARGO_PKG_VERSION"));

/// Starts an HTTP server on the configured address. This function blocks.
pub fn listen_http(config: Config) -> std::io::Result<()> {
    let listener = TcpListener::bind(&config.addr)?;
    serve(listener, config)
}

/// Accepts connections from the given listener and answers each on the thread pool. This function blocks.
pub fn serve(listener: TcpListener, config: Config) -> std::io::Result<()> {
    info!("Listening on {}", listener.local_addr()?);

    let thread_pool = ThreadPool::new(config.connection_handler_threads);
    let config = Arc::new(config);

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                let config = Arc::clone(&config);
                thread_pool.execute(move || handle_connection(&config, stream));
            }
            Err(err) => error!("Error accepting connection: {}", err),
        }
    }

    Ok(())
}

/// Reads one request off the connection, writes the response and lets the connection drop.
fn handle_connection(config: &Config, stream: TcpStream) {
    let peer = stream.peer_addr().map(|addr| addr.to_string()).unwrap_or_default();

    if let Err(err) = stream.set_read_timeout(Some(config.read_timeout)) {
        error!("Could not set read timeout for {}: {}", peer, err);
        return;
    }

    let reader = BufReader::with_capacity(READ_BUF_SIZE, &stream);
    if let Err(err) = respond_to_request(config, reader, &stream) {
        error!("Error writing response to {}: {}", peer, err);
    }
}

/// Reads a message from the reader and writes the response for it to the writer.
fn respond_to_request(config: &Config, mut reader: impl BufRead, mut writer: impl Write) -> std::io::Result<()> {
    let response = match read_message(&mut reader) {
        Ok(message) => respond(config, &message),
        Err(err) => match err.status() {
            Some(status) => {
                warn!("Bad message: {}", err);
                status.into()
            }
            None => {
                log_dropped(&err);
                return Ok(());
            }
        }
    };

    write_response(&mut writer, response)
}

/// Parses a raw message and produces the response to it.
pub fn respond(config: &Config, message: &str) -> Response {
    let request = match parse_request(message) {
        Ok(request) => request,
        Err(err) => {
            warn!("Could not parse request: {}", err);
            return match err {
                ParsingError::UnsupportedMethod(_) => status::METHOD_NOT_ALLOWED.into(),
                ParsingError::MalformedRequest | ParsingError::MalformedHeader(_) => status::BAD_REQUEST.into(),
            };
        }
    };

    let response = match config.registry.dispatch(&request) {
        Some(dispatched) => dispatched.result.into_response(&dispatched.route, &config.views),
        None => status::NOT_FOUND.into(),
    };

    info!("{} {} -> {}", request.method(), request.raw_target(), response.status.code);
    response
}

fn log_dropped(err: &ReadMessageError) {
    match err {
        ReadMessageError::Closed => debug!("Connection closed before a request was sent"),
        _ => error!("Error reading request: {}", err),
    }
}

/// Writes the response as bytes to the given writer, marking it as the last one on the connection.
pub fn write_response(writer: &mut impl Write, mut response: Response) -> std::io::Result<()> {
    response.headers.add(SERVER, SERVER_NAME);
    response.headers.add(CONNECTION, "close");

    writer.write_all(&response.to_bytes())?;
    writer.flush()
}
