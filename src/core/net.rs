// src/core/net.rs
//
// Blocking HTTP GET. One attempt per call: no retry, no explicit timeout.

use ureq::Agent;
use url::Url;

use crate::config::consts::USER_AGENT;
use crate::core::endpoints::redacted;
use crate::error::FetchError;

/// Status and body of a completed exchange.
/// `body` is `None` only when a non-2xx body could not be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Option<String>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can perform a GET. Tests swap in a scripted fake.
pub trait Transport {
    fn get(&mut self, url: &Url) -> Result<RawResponse, FetchError>;
}

pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        // Non-2xx must come back as a response, not an error, so status and body stay observable.
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&mut self, url: &Url) -> Result<RawResponse, FetchError> {
        logd!("GET {}", redacted(url));

        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| FetchError::Transport { reason: e.to_string() })?;

        let status = response.status().as_u16();
        let mut body = response.into_body();
        let bytes = body.with_config().limit(u64::MAX).read_to_vec();

        logd!("GET {} -> {}", redacted(url), status);

        // Invalid UTF-8 is replaced, not rejected; only a failed read is an error.
        match bytes {
            Ok(bytes) => Ok(RawResponse { status, body: Some(String::from_utf8_lossy(&bytes).into_owned()) }),
            Err(e) if (200..300).contains(&status) => {
                Err(FetchError::Transport { reason: format!("failed reading response body: {e}") })
            }
            Err(e) => {
                logd!("GET {}: unreadable error body: {}", redacted(url), e);
                Ok(RawResponse { status, body: None })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve exactly one request with `status` and a raw byte body.
    fn serve_once(status: &'static str, body: &'static [u8]) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut req = Vec::new();
            let mut buf = [0u8; 1024];
            while !req.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 { break; }
                req.extend_from_slice(&buf[..n]);
            }
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(head.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
            stream.flush().unwrap();
        });
        Url::parse(&format!("http://{addr}/v2/logs/run1?token=tok")).unwrap()
    }

    #[test]
    fn success_body_with_invalid_utf8_is_decoded_lossily() {
        let url = serve_once("200 OK", b"Run started \xff\xfe caf\xe9");
        let resp = UreqTransport::new().get(&url).unwrap();
        assert_eq!(resp.status, 200);
        let body = resp.body.unwrap();
        assert!(body.starts_with("Run started "));
        assert!(body.contains('\u{FFFD}'));
    }

    #[test]
    fn error_status_keeps_body() {
        let url = serve_once("401 Unauthorized", br#"{"error":{"type":"token-not-valid"}}"#);
        let resp = UreqTransport::new().get(&url).unwrap();
        assert_eq!(resp.status, 401);
        assert!(!resp.is_success());
        assert!(resp.body.unwrap().contains("token-not-valid"));
    }
}
