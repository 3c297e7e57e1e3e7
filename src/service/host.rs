//! TCP host for the simplification service.
//!
//! One listener, one connection at a time, one request at a time. The
//! engine never suspends, so the request loop is a plain blocking loop:
//! requests on a connection are answered in receipt order, and a
//! connection is serviced to completion before the next is accepted.

use crate::service::adapter::Service;
use crate::service::wire::Request;
use log::{debug, info, warn};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};

/// The process host: a bound listener plus the request handler.
#[derive(Debug)]
pub struct Host {
    listener: TcpListener,
    service: Service,
}

impl Host {
    /// Binds the listener.
    ///
    /// Fails if the address does not resolve or the port cannot be bound.
    pub fn bind<A: ToSocketAddrs>(address: A) -> io::Result<Self> {
        let listener = TcpListener::bind(address)?;
        Ok(Self {
            listener,
            service: Service::new(),
        })
    }

    /// Returns the bound address; useful when binding to port zero.
    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accepts and services connections until the listener fails.
    ///
    /// The listener closes when the process terminates; in-flight work on
    /// the current connection always runs to completion first.
    pub fn run(&mut self) -> io::Result<()> {
        info!("listening on {}", self.listener.local_addr()?);
        loop {
            let (stream, peer) = self.listener.accept()?;
            debug!("connection from {}", peer);
            if let Err(error) = self.serve_connection(stream) {
                warn!("connection from {} dropped: {}", peer, error);
            }
        }
    }

    /// Services one connection: one JSON request per line, one JSON
    /// response per line, in receipt order.
    ///
    /// Data that is not a well-formed request drops the connection; a
    /// well-formed request that cannot be honored is answered with an
    /// error status instead.
    fn serve_connection(&mut self, stream: TcpStream) -> io::Result<()> {
        let reader = BufReader::new(stream.try_clone()?);
        let mut writer = BufWriter::new(stream);
        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let request: Request = match serde_json::from_str(&line) {
                Ok(request) => request,
                Err(error) => {
                    warn!("malformed request: {}", error);
                    return Ok(());
                }
            };
            let response = self.service.handle(request);
            serde_json::to_writer(&mut writer, &response)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        debug!("connection closed by peer");
        Ok(())
    }
}
