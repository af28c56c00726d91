use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::spawn;
use std::time::Duration;

use mywebserver::app;
use mywebserver::controller::ViewEngine;
use mywebserver::server;
use mywebserver::server::Config;

/// Starts the application on a free local port and returns its address.
pub fn start_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let config = Config {
        addr: addr.to_string(),
        connection_handler_threads: 4,
        read_timeout: Duration::from_millis(500),
        registry: app::registry(),
        views: ViewEngine::new(concat!(env!("CARGO_MANIFEST_DIR"), "/Views")),
    };

    spawn(move || server::serve(listener, config).unwrap());
    addr
}

/// Sends the raw bytes as one request and reads until the server closes the connection.
pub fn send(addr: &SocketAddr, raw: &[u8]) -> String {
    let mut stream = TcpStream::connect(addr).unwrap();
    stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
    stream.write_all(raw).unwrap();

    let mut response = String::new();
    stream.read_to_string(&mut response).unwrap();
    response
}

/// Splits a response into its status line, header lines and body.
pub fn split_response(response: &str) -> (&str, Vec<&str>, &str) {
    let (head, body) = response.split_once("\r\n\r\n").unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    (status_line, lines.collect(), body)
}
