//! myOwnWebServer - Static File Server
//!
//! Core library for serving text and image files over a narrow subset of
//! HTTP/1.1, one connection at a time.

pub mod config;
pub mod error;
pub mod http;
pub mod log;
pub mod server;
