use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use crate::error::Fault;
use crate::http::ascii;
use crate::http::handler::FileHandler;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::log::EventLog;

/// Bytes taken from the socket as the whole request. Anything beyond is ignored.
pub const REQUEST_BUFFER_SIZE: usize = 16383;

/// One client connection, from the single read to close.
pub struct Connection<'a> {
    stream: TcpStream,
    handler: &'a FileHandler,
    log: &'a dyn EventLog,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter),
    Closed,
}

impl<'a> Connection<'a> {
    pub fn new(stream: TcpStream, handler: &'a FileHandler, log: &'a dyn EventLog) -> Self {
        Self {
            stream,
            handler,
            log,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request. The stream is closed when `self` is dropped.
    pub async fn run(&mut self) -> Result<(), Fault> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let raw = self.read_request().await?;
                    self.state = ConnectionState::Processing(raw);
                }

                ConnectionState::Processing(raw) => {
                    let response = self.handler.handle(raw, self.log).await?;
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                    log_outcome(&response);
                }

                ConnectionState::Writing(writer) => {
                    writer
                        .write_to_stream(&mut self.stream)
                        .await
                        .map_err(Fault::Io)?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// A single bounded read. Whatever arrives, even nothing, is the request.
    pub async fn read_request(&mut self) -> Result<String, Fault> {
        let mut buf = vec![0u8; REQUEST_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await.map_err(Fault::Io)?;
        Ok(ascii::decode(&buf[..n]))
    }
}

fn log_outcome(response: &Response) {
    tracing::info!(
        status = response.status.as_u16(),
        length = response.content_length(),
        "Response ready"
    );
}
