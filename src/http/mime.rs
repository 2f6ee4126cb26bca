//! MIME type detection based on file extensions.

/// Supported extensions and their MIME types, in lookup order.
pub const FILE_TYPES: [(&str, &str); 6] = [
    (".txt", "text/plain"),
    (".html", "text/html"),
    (".htm", "text/html"),
    (".jpeg", "image/jpeg"),
    (".jpg", "image/jpeg"),
    (".gif", "image/gif"),
];

/// Content type of every error response.
pub const TEXT_PLAIN: &str = "text/plain";

/// MIME type for the extension `path` ends with, if it is in [`FILE_TYPES`].
///
/// The extension runs from the last `.` to the end of the path and is
/// compared case-sensitively, so `/photo.JPG` is not supported.
///
/// # Example
///
/// ```
/// # use myownwebserver::http::mime::content_type;
/// assert_eq!(content_type("/docs/a.b.htm"), Some("text/html"));
/// assert_eq!(content_type("/img.bmp"), None);
/// ```
pub fn content_type(path: &str) -> Option<&'static str> {
    let extension = &path[path.rfind('.')?..];
    FILE_TYPES
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, mime)| *mime)
}
