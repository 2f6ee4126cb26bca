//! HTTP protocol implementation.
//!
//! This module implements the narrow subset of HTTP/1.1 the server speaks:
//! one `GET` per connection, a fixed set of static file types, and five
//! possible outcomes.
//!
//! # Architecture
//!
//! - **`connection`**: Handles one client from the single bounded read to close
//! - **`handler`**: Classifies a raw request and builds the matching response
//! - **`parser`**: Structural check of the request text
//! - **`request`**: The method/target/version triple extracted from a request
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//! - **`mime`**: File extension to MIME type table
//! - **`ascii`**: Lossy ASCII text conversion used on both sides of the wire
//!
//! # Request Pipeline
//!
//! Checks run in a fixed order; the first one that fails decides the response:
//!
//! ```text
//!   raw text
//!      │
//!      ├─ malformed structure ──────────► 400 Bad Request
//!      ├─ method is not GET ────────────► 405 Method Not Allowed
//!      ├─ extension not in table ───────► 415 Unsupported Media Type
//!      ├─ root + target is not a file ──► 404 Not Found
//!      ▼
//!   200 Ok (file contents)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use myownwebserver::http::handler::FileHandler;
//! use myownwebserver::log::MemoryLog;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let log = MemoryLog::new();
//! let handler = FileHandler::new("/srv/www");
//! let response = handler
//!     .handle("GET /index.html HTTP/1.1\r\nHost: localhost\r\n\r\n", &log)
//!     .await?;
//! println!("{}", response.status.as_u16());
//! # Ok(())
//! # }
//! ```

pub mod ascii;
pub mod connection;
pub mod handler;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;

/// Value of the `Server` response header.
pub const SERVER_NAME: &str = "myOwnWebServer";

/// Protocol version on every status line.
pub const HTTP_VERSION: &str = "HTTP/1.1";
