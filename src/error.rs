//! Faults that stop the server

use thiserror::Error;

/// A failure that ends the accept loop.
///
/// Mistakes in client requests are never faults; they are answered with an
/// error response instead.
#[derive(Debug, Error)]
pub enum Fault {
    /// Binding or accepting on the listening socket failed
    #[error("socket error: {0}")]
    Socket(#[source] std::io::Error),

    /// Reading from or writing to a client stream failed
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Anything else
    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Fault {
    /// Message recorded on the console and in the event log.
    pub fn message(&self) -> &'static str {
        match self {
            Fault::Socket(_) => "A socket error occurred.. please ensure IP & port are valid.",
            Fault::Io(_) => "An I/O error occurred.. please ensure request being sent is valid.",
            Fault::Other(_) => "An error occurred..",
        }
    }
}
