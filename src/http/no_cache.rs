//! No-cache response policy
//!
//! Every response leaving this server must tell clients and intermediaries
//! never to store or reuse a cached copy, so edits to the served files show
//! up on the next browser reload. Applied as a post-processing step composed
//! with the request handler, regardless of status code.

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

/// The fixed header set appended to every outgoing response.
pub const NO_CACHE_HEADERS: [(&str, &str); 3] = [
    ("cache-control", "no-cache, no-store, must-revalidate"),
    ("pragma", "no-cache"),
    ("expires", "0"),
];

/// Insert the no-cache headers, replacing any value a builder already set.
pub fn apply_no_cache<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    for (name, value) in NO_CACHE_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::Full;
    use hyper::body::Bytes;

    #[test]
    fn test_headers_applied() {
        let mut resp = Response::new(Full::new(Bytes::from("body")));
        apply_no_cache(&mut resp);

        assert_eq!(
            resp.headers().get("cache-control").unwrap(),
            "no-cache, no-store, must-revalidate"
        );
        assert_eq!(resp.headers().get("pragma").unwrap(), "no-cache");
        assert_eq!(resp.headers().get("expires").unwrap(), "0");
    }

    #[test]
    fn test_existing_cache_control_replaced() {
        let mut resp = Response::builder()
            .header("Cache-Control", "public, max-age=3600")
            .body(Full::new(Bytes::new()))
            .unwrap();
        apply_no_cache(&mut resp);

        let values: Vec<_> = resp.headers().get_all("cache-control").iter().collect();
        assert_eq!(values.len(), 1);
        assert_eq!(values[0], "no-cache, no-store, must-revalidate");
    }

    #[test]
    fn test_applied_on_error_status() {
        let mut resp = Response::builder()
            .status(404)
            .body(Full::new(Bytes::new()))
            .unwrap();
        apply_no_cache(&mut resp);
        assert!(resp.headers().contains_key("expires"));
    }
}
