// src/core/net.rs
// Blocking HTTPS GET. One client per run; the User-Agent is fixed at build time.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ HeaderMap, HeaderValue, USER_AGENT };

use crate::config::Config;
use crate::config::consts::SNIPPET_CHARS;
use crate::error::ScrapeError;

/// A fetched page, whatever its status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, headers: Vec::new(), body: body.into() }
    }

    pub fn with_status(status: u16, body: impl Into<String>) -> Self {
        Self { status, headers: Vec::new(), body: body.into() }
    }

    /// Body of a 200 response; anything else becomes `HttpStatus`.
    pub fn into_ok_body(self, url: &str) -> Result<String, ScrapeError> {
        if self.status == 200 {
            return Ok(self.body);
        }
        Err(ScrapeError::HttpStatus {
            url: s!(url),
            status: self.status,
            snippet: snippet(&self.body),
        })
    }
}

/// First `SNIPPET_CHARS` characters, cut on a char boundary.
pub fn snippet(body: &str) -> String {
    body.chars().take(SNIPPET_CHARS).collect()
}

/// Anything that can GET a URL. The pipeline only talks to this.
pub trait Fetch {
    fn get(&self, url: &str, timeout: Duration) -> Result<Page, ScrapeError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn get(&self, url: &str, timeout: Duration) -> Result<Page, ScrapeError> {
        (**self).get(url, timeout)
    }
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self, ScrapeError> {
        let ua = config.user_agent();
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&ua)
            .map_err(|e| ScrapeError::Client(format!("invalid User-Agent {ua:?}: {e}")))?;
        headers.insert(USER_AGENT, value);

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str, timeout: Duration) -> Result<Page, ScrapeError> {
        let resp = self.client
            .get(url)
            .timeout(timeout)
            .send()
            .map_err(|e| classify(e, url))?;

        let status = resp.status().as_u16();
        let headers = resp.headers()
            .iter()
            .map(|(k, v)| (s!(k.as_str()), String::from_utf8_lossy(v.as_bytes()).into_owned()))
            .collect();

        // Always UTF-8, whatever the server claims.
        let bytes = resp.bytes().map_err(|e| classify(e, url))?;
        let body = String::from_utf8_lossy(&bytes).into_owned();

        Ok(Page { status, headers, body })
    }
}

fn classify(e: reqwest::Error, url: &str) -> ScrapeError {
    if e.is_timeout() {
        ScrapeError::Timeout { url: s!(url) }
    } else {
        ScrapeError::Network { url: s!(url), message: e.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn ok_page_yields_body() {
        let body = Page::ok("<html/>").into_ok_body("http://x").unwrap();
        assert_eq!(body, "<html/>");
    }

    #[test]
    fn non_200_carries_status_and_snippet() {
        let long = "é".repeat(800);
        let err = Page::with_status(403, long).into_ok_body("http://x").unwrap_err();
        match err {
            ScrapeError::HttpStatus { status, snippet, url } => {
                assert_eq!(status, 403);
                assert_eq!(url, "http://x");
                assert_eq!(snippet.chars().count(), 500);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn client_builds_with_default_agent() {
        assert!(HttpFetcher::new(&Config::default()).is_ok());
    }

    #[test]
    fn invalid_user_agent_is_a_client_error() {
        let config = Config { user_agent: Some(s!("bad\nagent")), ..Config::default() };
        match HttpFetcher::new(&config) {
            Err(e @ ScrapeError::Client(_)) => {
                assert!(e.to_string().contains("invalid User-Agent"));
                assert!(!e.is_recoverable());
            }
            Err(other) => panic!("unexpected {other:?}"),
            Ok(_) => panic!("header with a newline was accepted"),
        }
    }

    #[test]
    fn silent_server_is_a_timeout() {
        // Connections land in the backlog and never get an answer.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/", listener.local_addr().unwrap());
        let fetcher = HttpFetcher::new(&Config::default()).unwrap();

        let err = fetcher.get(&url, Duration::from_millis(50)).unwrap_err();
        assert!(matches!(err, ScrapeError::Timeout { url: ref u } if *u == url), "{err:?}");
    }

    #[test]
    fn refused_connection_is_a_network_error() {
        let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}/");
        let fetcher = HttpFetcher::new(&Config::default()).unwrap();

        let err = fetcher.get(&url, Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ScrapeError::Network { .. }), "{err:?}");
    }
}
