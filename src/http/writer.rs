use bytes::{BufMut, Bytes, BytesMut};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::HTTP_VERSION;
use crate::http::ascii;
use crate::http::response::Response;

/// Renders `resp` exactly as it goes on the wire.
///
/// ```text
/// HTTP/1.1 <code> <reason>\r\n
/// <Name>: <value>\r\n        (once per header, in order)
/// \r\n
/// <body>
/// ```
pub fn serialize_response(resp: &Response) -> Bytes {
    let mut buf = BytesMut::with_capacity(128 + resp.body.len());

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.put_slice(&ascii::encode(&status_line));

    for (k, v) in &resp.headers {
        buf.put_slice(&ascii::encode(k));
        buf.put_slice(b": ");
        buf.put_slice(&ascii::encode(v));
        buf.put_slice(b"\r\n");
    }

    // Header/body separator
    buf.put_slice(b"\r\n");

    buf.put_slice(&resp.body);

    buf.freeze()
}

pub struct ResponseWriter {
    buffer: Bytes,
    written: usize,
}

impl ResponseWriter {
    pub fn new(response: &Response) -> Self {
        Self {
            buffer: serialize_response(response),
            written: 0,
        }
    }

    /// Writes every remaining byte, failing if the peer stops accepting them.
    pub async fn write_to_stream(&mut self, stream: &mut TcpStream) -> std::io::Result<()> {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::WriteZero,
                    "connection closed while writing",
                ));
            }

            self.written += n;
        }

        stream.flush().await
    }
}
