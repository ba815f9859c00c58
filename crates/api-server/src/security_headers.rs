use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

const HSTS_VALUE: &str = "max-age=63072000; includeSubDomains; preload";

fn hsts_enabled() -> bool {
    std::env::var("ENABLE_HSTS")
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

fn apply_security_headers(headers: &mut HeaderMap, hsts: bool) {
    headers.insert("x-content-type-options", HeaderValue::from_static("nosniff"));
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));
    headers.insert("x-xss-protection", HeaderValue::from_static("0"));
    // JSON only; nothing should be loaded from responses
    headers.insert(
        "content-security-policy",
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'"),
    );
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    // Screen results depend on the request body and the fixture in use
    headers.insert("cache-control", HeaderValue::from_static("no-store"));

    if hsts {
        headers.insert("strict-transport-security", HeaderValue::from_static(HSTS_VALUE));
    }
}

/// Adds the standard hardening headers to every response. HSTS is opt-in via
/// `ENABLE_HSTS` since it only makes sense behind TLS termination.
pub async fn security_headers_middleware(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut(), hsts_enabled());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_without_hsts() {
        let mut headers = HeaderMap::new();
        apply_security_headers(&mut headers, false);
        assert_eq!(headers["x-content-type-options"], "nosniff");
        assert_eq!(headers["cache-control"], "no-store");
        assert!(headers.get("strict-transport-security").is_none());
    }

    #[test]
    fn test_headers_with_hsts() {
        let mut headers = HeaderMap::new();
        apply_security_headers(&mut headers, true);
        assert_eq!(headers["strict-transport-security"], HSTS_VALUE);
    }
}
