//! Request log line format
//!
//! One line per request: `<timestamp>: <METHOD> <path>`.

use chrono::{DateTime, Local};

/// Timestamp layout, e.g. `Fri Aug 07 2026 14:03:21 +0000`
const TIMESTAMP_FORMAT: &str = "%a %b %d %Y %H:%M:%S %z";

/// Format a single request log line
pub fn format_request_line(time: &DateTime<Local>, method: &str, path: &str) -> String {
    format!("{}: {method} {path}", time.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_contains_method_and_path() {
        let line = format_request_line(&Local::now(), "GET", "/about");
        assert!(line.contains("GET /about"));
    }

    #[test]
    fn test_timestamp_separator() {
        let line = format_request_line(&Local::now(), "GET", "/");
        let (timestamp, rest) = line.split_once(": ").unwrap();
        assert!(!timestamp.is_empty());
        assert_eq!(rest, "GET /");
    }

    #[test]
    fn test_query_string_is_preserved() {
        let line = format_request_line(&Local::now(), "GET", "/projects?sort=new");
        assert!(line.ends_with("GET /projects?sort=new"));
    }
}
