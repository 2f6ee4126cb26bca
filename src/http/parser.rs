use crate::http::HTTP_VERSION;
use crate::http::request::{Method, Request};

/// Why a request failed the structural check. Every variant ends in 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// No CRLF-terminated request line
    MissingRequestLine,
    /// Request line does not end in ` HTTP/1.1`
    InvalidVersion,
    /// No ` /` separating the method from an absolute path
    InvalidTarget,
    /// The line after the request line is not a non-empty `Host:` header
    MissingHost,
    /// No further CRLF after the Host line
    Incomplete,
}

/// Checks the overall shape of a request and extracts its request line.
///
/// Accepted shape:
///
/// ```text
/// <method> /<path> HTTP/1.1\r\n
/// Host: <anything>\r\n          (name matched case-insensitively)
/// ...\r\n...                    (at least one more CRLF somewhere)
/// ```
///
/// The method and target are then taken from the first two space-delimited
/// tokens of the whole text, which is what clients sending a normal request
/// line expect. No header other than `Host` is inspected.
pub fn parse_http_request(raw: &str) -> Result<Request, ParseError> {
    let (request_line, rest) = split_crlf_line(raw).ok_or(ParseError::MissingRequestLine)?;

    let before_version = request_line
        .strip_suffix(HTTP_VERSION)
        .and_then(|s| s.strip_suffix(' '))
        .ok_or(ParseError::InvalidVersion)?;

    if !before_version.contains(" /") {
        return Err(ParseError::InvalidTarget);
    }

    let (host_line, rest) = split_crlf_line(rest).ok_or(ParseError::MissingHost)?;
    if !is_host_line(host_line) {
        return Err(ParseError::MissingHost);
    }

    if !rest.contains("\r\n") {
        return Err(ParseError::Incomplete);
    }

    let mut parts = raw.split(' ');
    let method = parts.next().unwrap_or_default();
    let target = parts.next().ok_or(ParseError::InvalidTarget)?;

    Ok(Request {
        method: Method::from_token(method),
        target: target.to_string(),
        version: HTTP_VERSION.to_string(),
    })
}

/// Best-effort verb/resource pair from text that failed the structural check.
///
/// Used for logging only. Line terminators caught in the resource are removed.
pub fn extract_verb_and_resource(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.split(' ');
    let verb = parts.next()?;
    let resource = parts.next()?;

    let resource = if resource.contains('\n') {
        resource.replace("\r\n", "")
    } else {
        resource.to_string()
    };

    Some((verb.to_string(), resource))
}

/// Splits off the first line, which must end in CRLF.
///
/// Returns the line without its terminator and everything after it.
fn split_crlf_line(text: &str) -> Option<(&str, &str)> {
    let newline = text.find('\n')?;
    let line = text[..newline].strip_suffix('\r')?;
    Some((line, &text[newline + 1..]))
}

/// `Host:` followed by at least one character.
fn is_host_line(line: &str) -> bool {
    const NAME: &str = "host:";
    line.len() > NAME.len()
        && line.is_char_boundary(NAME.len())
        && line[..NAME.len()].eq_ignore_ascii_case(NAME)
}
