use std::fmt;

/// HTTP request methods.
///
/// Only `GET` is served. Every other token that survives the structural check
/// is kept verbatim so it can be logged before the request is refused with
/// 405 Method Not Allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other token, exactly as the client sent it (may be empty)
    Other(String),
}

impl Method {
    /// Classifies a method token.
    ///
    /// Matching is case-sensitive: `get` is not `GET`.
    ///
    /// # Example
    ///
    /// ```
    /// # use myownwebserver::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(token) => token,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request that passed the structural check.
///
/// Lives only for the duration of a single request; nothing about it is kept
/// once the response has been built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method
    pub method: Method,
    /// The request-target (e.g., "/index.html")
    pub target: String,
    /// HTTP version, always "HTTP/1.1" for an accepted request
    pub version: String,
}

impl Request {
    /// Whether the method can be served.
    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }
}
