//! Page GET over libcurl.
//!
//! One blocking request per check. The result is an explicit outcome: a
//! response to parse, an HTTP error status, or a transport failure.

mod classify;

pub use classify::{classify_curl_error, is_http_error, TransportKind};

use crate::config::FetchConfig;

/// Result of a single page GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Server answered with a non-error status. `body` is decoded lossily as UTF-8.
    Response { status: u32, body: String },
    /// Server answered with 4xx/5xx.
    HttpError { status: u32 },
    /// No usable response (DNS, connect, timeout, malformed reply).
    Transport { kind: TransportKind, message: String },
}

/// Blocking page fetcher configured from `[fetch]`.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    cfg: FetchConfig,
}

impl Fetcher {
    pub fn new(cfg: FetchConfig) -> Self {
        Self { cfg }
    }

    /// GETs `url`, following redirects up to the configured limit.
    ///
    /// Runs in the current thread; call from `spawn_blocking` if used from async code.
    pub fn get(&self, url: &str) -> FetchOutcome {
        let mut easy = curl::easy::Easy::new();
        if let Err(e) = self.configure(&mut easy, url) {
            return transport(&e);
        }

        let limit = self.cfg.max_body_bytes;
        let mut body: Vec<u8> = Vec::new();
        let mut truncated = false;

        let performed = {
            let mut transfer = easy.transfer();
            let registered = transfer.write_function(|data| {
                let room = limit.saturating_sub(body.len());
                if data.len() > room {
                    body.extend_from_slice(&data[..room]);
                    truncated = true;
                    // Short count aborts the transfer with a write error.
                    return Ok(room);
                }
                body.extend_from_slice(data);
                Ok(data.len())
            });
            match registered {
                Ok(()) => transfer.perform(),
                Err(e) => Err(e),
            }
        };

        if let Err(e) = performed {
            if !(truncated && e.is_write_error()) {
                return transport(&e);
            }
            tracing::debug!(url, limit, "response body truncated");
        }

        let status = match easy.response_code() {
            Ok(code) if code > 0 => code,
            Ok(_) => {
                return FetchOutcome::Transport {
                    kind: TransportKind::Other,
                    message: "no HTTP status in response".to_string(),
                }
            }
            Err(e) => return transport(&e),
        };

        if is_http_error(status) {
            return FetchOutcome::HttpError { status };
        }

        FetchOutcome::Response {
            status,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.cfg.max_redirects)?;
        easy.useragent(&self.cfg.user_agent)?;
        easy.connect_timeout(self.cfg.connect_timeout())?;
        easy.timeout(self.cfg.timeout())?;
        Ok(())
    }
}

fn transport(e: &curl::Error) -> FetchOutcome {
    FetchOutcome::Transport {
        kind: classify_curl_error(e),
        message: e.to_string(),
    }
}
