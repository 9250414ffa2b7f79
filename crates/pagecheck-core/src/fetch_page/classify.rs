//! Classify HTTP status codes and curl errors into fetch outcomes.

/// Why a fetch produced no HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Connect or total timeout elapsed.
    Timeout,
    /// DNS failure, refused connection, or the peer dropped the connection.
    Connection,
    /// Anything else (TLS, malformed response, too many redirects, ...).
    Other,
}

impl TransportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransportKind::Timeout => "timeout",
            TransportKind::Connection => "connection",
            TransportKind::Other => "other",
        }
    }
}

/// True for statuses a strict HTTP client turns into an error (4xx and 5xx).
pub fn is_http_error(code: u32) -> bool {
    (400..=599).contains(&code)
}

/// Classify a curl error that ended the transfer without a usable response.
pub fn classify_curl_error(e: &curl::Error) -> TransportKind {
    if e.is_operation_timedout() {
        return TransportKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return TransportKind::Connection;
    }
    TransportKind::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_and_server_errors() {
        assert!(is_http_error(400));
        assert!(is_http_error(404));
        assert!(is_http_error(500));
        assert!(is_http_error(503));
        assert!(is_http_error(599));
    }

    #[test]
    fn non_error_statuses() {
        assert!(!is_http_error(200));
        assert!(!is_http_error(204));
        assert!(!is_http_error(301));
        assert!(!is_http_error(399));
        assert!(!is_http_error(600));
    }

    #[test]
    fn curl_timeout() {
        // CURLE_OPERATION_TIMEDOUT
        assert_eq!(classify_curl_error(&curl::Error::new(28)), TransportKind::Timeout);
    }

    #[test]
    fn curl_connection_failures() {
        // CURLE_COULDNT_RESOLVE_HOST, CURLE_COULDNT_CONNECT, CURLE_GOT_NOTHING
        for code in [6, 7, 52] {
            assert_eq!(
                classify_curl_error(&curl::Error::new(code)),
                TransportKind::Connection,
                "code {code}"
            );
        }
    }

    #[test]
    fn curl_other() {
        // CURLE_TOO_MANY_REDIRECTS
        assert_eq!(classify_curl_error(&curl::Error::new(47)), TransportKind::Other);
    }
}
