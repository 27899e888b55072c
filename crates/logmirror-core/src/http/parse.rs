//! Parse HTTP response header lines into a ResponseHead.

/// The response headers the mirror cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    /// Status code from the `HTTP/x y` line, if present.
    pub status: Option<u32>,
    /// Total size in bytes, if `Content-Length` is present and numeric.
    pub content_length: Option<u64>,
    /// `Content-Type` value if present.
    pub content_type: Option<String>,
}

/// Parse collected header lines into a ResponseHead.
pub fn parse_headers(lines: &[String]) -> ResponseHead {
    let mut head = ResponseHead::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            head.status = line
                .split_whitespace()
                .nth(1)
                .and_then(|code| code.parse().ok());
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            let name = name.trim();
            let value = value.trim();
            if name.eq_ignore_ascii_case("content-length") {
                head.content_length = value.parse::<u64>().ok();
            }
            if name.eq_ignore_ascii_case("content-type") {
                head.content_type = Some(value.to_string());
            }
        }
    }

    head
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_status_and_content_length() {
        let head = parse_headers(&lines(&[
            "HTTP/1.1 200 OK",
            "Content-Length: 2048",
            "Content-Type: application/x-gzip",
        ]));
        assert_eq!(head.status, Some(200));
        assert_eq!(head.content_length, Some(2048));
        assert_eq!(head.content_type.as_deref(), Some("application/x-gzip"));
    }

    #[test]
    fn parse_case_insensitive_names() {
        let head = parse_headers(&lines(&["HTTP/2 200", "content-length: 5"]));
        assert_eq!(head.status, Some(200));
        assert_eq!(head.content_length, Some(5));
    }

    #[test]
    fn missing_content_length() {
        let head = parse_headers(&lines(&["HTTP/1.1 200 OK", "Transfer-Encoding: chunked"]));
        assert_eq!(head.content_length, None);
    }

    #[test]
    fn non_numeric_content_length() {
        let head = parse_headers(&lines(&["HTTP/1.1 200 OK", "Content-Length: lots"]));
        assert_eq!(head.content_length, None);
    }
}
