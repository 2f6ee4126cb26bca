//! Request classification and file serving
//!
//! Turns the raw text of one request into exactly one response. Client
//! mistakes never escape as errors: each is answered with its own status and
//! fixed body. Only a file that exists but cannot be read is reported as an
//! `Err`, since that is a fault on the server's side.

use anyhow::{Context, Result};

use crate::http::parser::{extract_verb_and_resource, parse_http_request};
use crate::http::response::{Response, StatusCode};
use crate::http::{SERVER_NAME, ascii, mime};
use crate::log::EventLog;

/// Serves files from one web root.
#[derive(Debug, Clone)]
pub struct FileHandler {
    root: String,
}

impl FileHandler {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// Filesystem path a request-target resolves to.
    ///
    /// Plain concatenation of root and target. `..` segments are not resolved
    /// or rejected, so a target can reach outside the web root.
    pub fn resolve(&self, target: &str) -> String {
        format!("{}{}", self.root, target)
    }

    /// Builds the response for `raw`, logging the request and the outcome.
    pub async fn handle(&self, raw: &str, log: &dyn EventLog) -> Result<Response> {
        let request = match parse_http_request(raw) {
            Ok(request) => request,
            Err(e) => {
                tracing::debug!(reason = ?e, "Malformed request");
                log_bad_request(raw, log);
                return Ok(respond_with_error(StatusCode::BadRequest, log));
            }
        };

        log.write(&format!(
            "[REQUEST]  - verb={} resource={}",
            request.method, request.target
        ));

        if !request.is_get() {
            return Ok(respond_with_error(StatusCode::MethodNotAllowed, log));
        }

        let Some(content_type) = mime::content_type(&request.target) else {
            return Ok(respond_with_error(StatusCode::UnsupportedMediaType, log));
        };

        let path = self.resolve(&request.target);
        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !is_file {
            return Ok(respond_with_error(StatusCode::NotFound, log));
        }

        let contents = tokio::fs::read(&path)
            .await
            .with_context(|| format!("failed to read {}", path))?;

        // Binary formats are pushed through the same ASCII reduction as text.
        let body = ascii::decode(&contents);
        let response = Response::ok(content_type, body.into_bytes());

        log.write(&format!(
            "[RESPONSE] - Content-Type={} Content-Length={} Server={}",
            content_type,
            response.content_length(),
            SERVER_NAME
        ));
        tracing::debug!(path = %path, length = response.content_length(), "Served file");

        Ok(response)
    }
}

fn respond_with_error(status: StatusCode, log: &dyn EventLog) -> Response {
    log.write(&format!("[RESPONSE] - Status Code={}", status));
    Response::error(status)
}

/// A malformed request may not split into tokens at all, so logging it is
/// best-effort.
fn log_bad_request(raw: &str, log: &dyn EventLog) {
    match extract_verb_and_resource(raw) {
        Some((verb, resource)) => {
            log.write(&format!("[REQUEST]  - verb={} resource={}", verb, resource));
        }
        None => log.write("[REQUEST]  - Unable to parse verb and resource"),
    }
}
