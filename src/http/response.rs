use chrono::{DateTime, Local};

use crate::http::SERVER_NAME;
use crate::http::mime::TEXT_PLAIN;

/// Layout of the `Date` header, e.g. `11/24/2024 3:05:09 PM`.
pub const DATE_FORMAT: &str = "%-m/%-d/%Y %-I:%M:%S %p";

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): File found and returned
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): No such file under the web root
/// - `MethodNotAllowed` (405): Anything but GET
/// - `UnsupportedMediaType` (415): Extension not in the file type table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 Ok
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 404 Not Found
    NotFound,
    /// 405 Method Not Allowed
    MethodNotAllowed,
    /// 415 Unsupported Media Type
    UnsupportedMediaType,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use myownwebserver::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::UnsupportedMediaType.as_u16(), 415);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::UnsupportedMediaType => 415,
        }
    }

    /// Returns the reason phrase sent on the status line.
    ///
    /// Note the success phrase is `Ok`, not `OK`.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "Ok",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::UnsupportedMediaType => "Unsupported Media Type",
        }
    }

    /// Fixed body sent with an error status, `None` for `Ok`.
    pub fn error_body(&self) -> Option<&'static str> {
        match self {
            StatusCode::Ok => None,
            StatusCode::BadRequest => Some("Request is invalid, please try again."),
            StatusCode::NotFound => Some("Requested file was not found."),
            StatusCode::MethodNotAllowed => Some("Method used is not allowed, please use GET."),
            StatusCode::UnsupportedMediaType => Some("Requested file type is not supported."),
        }
    }
}

/// Code and reason together, e.g. `404 Not Found`.
impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason_phrase())
    }
}

/// Represents a complete HTTP response ready to be sent to a client.
///
/// Headers keep their insertion order, which is always
/// `Date`, `Server`, `Content-Type`, `Content-Length`.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// HTTP headers in wire order
    pub headers: Vec<(String, String)>,
    /// Response body, already reduced to ASCII
    pub body: Vec<u8>,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```
/// # use myownwebserver::http::response::{ResponseBuilder, StatusCode};
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_type("text/html")
///     .body(b"hi".to_vec())
///     .build();
/// assert_eq!(response.header("Content-Length"), Some("2"));
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    date: Option<String>,
    content_type: &'static str,
    body: Vec<u8>,
}

impl ResponseBuilder {
    /// Creates a new response builder with the specified status code.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            date: None,
            content_type: TEXT_PLAIN,
            body: Vec::new(),
        }
    }

    pub fn content_type(mut self, content_type: &'static str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Pins the `Date` header instead of stamping the build time.
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the response body.
    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the final Response.
    ///
    /// Content-Length always reflects the body actually carried.
    pub fn build(self) -> Response {
        let date = self.date.unwrap_or_else(|| http_date(&Local::now()));

        let headers = vec![
            ("Date".to_string(), date),
            ("Server".to_string(), SERVER_NAME.to_string()),
            ("Content-Type".to_string(), self.content_type.to_string()),
            ("Content-Length".to_string(), self.body.len().to_string()),
        ];

        Response {
            status: self.status,
            headers,
            body: self.body,
        }
    }
}

impl Response {
    /// Creates a 200 Ok response carrying a file's contents.
    pub fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_type(content_type)
            .body(body.into())
            .build()
    }

    /// Creates an error response with the fixed `text/plain` body for `status`.
    pub fn error(status: StatusCode) -> Self {
        let body = status.error_body().unwrap_or_default();
        ResponseBuilder::new(status)
            .content_type(TEXT_PLAIN)
            .body(body.as_bytes().to_vec())
            .build()
    }

    /// Retrieves a header value by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

/// Formats a timestamp for the `Date` header.
pub fn http_date(at: &DateTime<Local>) -> String {
    at.format(DATE_FORMAT).to_string()
}
