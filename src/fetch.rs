//! Page retrieval.
//!
//! `http`/`https` targets go through a blocking `reqwest` client that sends
//! the configured User-Agent and follows redirects. `file://` targets are
//! read from disk. A target without a scheme is assumed to be `http://`.
//! Failures surface before any parsing happens.

use std::fs;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect::Policy;
use tracing::{debug, instrument};
use url::{ParseError, Url};

use crate::encoding::charset_from_content_type;
use crate::{Error, Options, Result};

/// Raw bytes of a retrieved page.
#[derive(Debug, Clone)]
pub struct Page {
    /// Final URL after redirects.
    pub url: Url,
    /// Response body.
    pub body: Vec<u8>,
    /// `Content-Type` reported by the server, if any.
    pub content_type: Option<String>,
}

impl Page {
    /// Charset label from the `Content-Type`, if declared.
    #[must_use]
    pub fn charset(&self) -> Option<String> {
        self.content_type.as_deref().and_then(charset_from_content_type)
    }
}

/// Something that turns a URL into page bytes.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<Page>;
}

/// Parse and validate a target URL.
///
/// Only `http`, `https` and `file` URLs are accepted. A host without a
/// scheme (`example.com/page`) is taken as `http://`; a bare path is not.
///
/// ```
/// use pagetext::fetch::parse_url;
///
/// assert!(parse_url("https://example.com/").is_ok());
/// assert_eq!(parse_url("example.com").unwrap().as_str(), "http://example.com/");
/// assert!(parse_url("/index.html").is_err());
/// assert!(parse_url("ftp://example.com/").is_err());
/// ```
pub fn parse_url(input: &str) -> Result<Url> {
    let invalid = |e: ParseError| Error::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    };

    let trimmed = input.trim();
    let url = match Url::parse(trimmed) {
        Err(ParseError::RelativeUrlWithoutBase) if !trimmed.starts_with('/') => {
            let guessed = Url::parse(&format!("http://{trimmed}")).map_err(invalid)?;
            debug!(url = %guessed, "no scheme given, assuming http");
            guessed
        }
        other => other.map_err(invalid)?,
    };

    match url.scheme() {
        "http" | "https" | "file" => Ok(url),
        other => Err(Error::InvalidUrl {
            url: input.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

/// Fetches over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client from `options`.
    pub fn new(options: &Options) -> Result<Self> {
        let client = Client::builder()
            .user_agent(options.effective_user_agent())
            .redirect(Policy::limited(options.max_redirects))
            .timeout(options.timeout)
            .build()
            .map_err(Error::Client)?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(skip_all, fields(url = %url))]
    fn fetch(&self, url: &Url) -> Result<Page> {
        let fetch_error = |source| Error::Fetch {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().map_err(fetch_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(fetch_error)?.to_vec();

        debug!(%status, final_url = %final_url, bytes = body.len(), "fetched page");
        Ok(Page {
            url: final_url,
            body,
            content_type,
        })
    }
}

/// Reads `file://` URLs from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileFetcher;

impl Fetcher for FileFetcher {
    fn fetch(&self, url: &Url) -> Result<Page> {
        let path = url.to_file_path().map_err(|()| Error::InvalidUrl {
            url: url.to_string(),
            reason: "not a local file path".to_string(),
        })?;
        let body = fs::read(&path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        debug!(path = %path.display(), bytes = body.len(), "read page");
        Ok(Page {
            url: url.clone(),
            body,
            content_type: None,
        })
    }
}

/// Dispatches on the URL scheme.
#[derive(Debug, Clone)]
pub struct UrlFetcher {
    http: HttpFetcher,
}

impl UrlFetcher {
    pub fn new(options: &Options) -> Result<Self> {
        Ok(Self {
            http: HttpFetcher::new(options)?,
        })
    }
}

impl Fetcher for UrlFetcher {
    fn fetch(&self, url: &Url) -> Result<Page> {
        if url.scheme() == "file" {
            FileFetcher.fetch(url)
        } else {
            self.http.fetch(url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_accepts_supported_schemes() {
        for input in ["http://example.com", "https://example.com/a?b=c", "file:///tmp/page.html"] {
            assert!(parse_url(input).is_ok(), "{input} should parse");
        }
    }

    #[test]
    fn test_parse_url_trims() {
        let url = parse_url("  https://example.com/ \n").unwrap();
        assert_eq!(url.as_str(), "https://example.com/");
    }

    #[test]
    fn test_parse_url_guesses_http_without_scheme() {
        let url = parse_url("example.com/docs?q=1").unwrap();
        assert_eq!(url.as_str(), "http://example.com/docs?q=1");

        let url = parse_url("127.0.0.1:8080/page").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_parse_url_guess_still_validates_host() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_url_rejects_relative() {
        let err = parse_url("/index.html").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn test_parse_url_rejects_other_schemes() {
        let err = parse_url("mailto:someone@example.com").unwrap_err();
        match err {
            Error::InvalidUrl { reason, .. } => assert!(reason.contains("mailto")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_page_charset() {
        let page = Page {
            url: parse_url("http://example.com").unwrap(),
            body: Vec::new(),
            content_type: Some("text/html; charset=Shift_JIS".to_string()),
        };
        assert_eq!(page.charset().as_deref(), Some("Shift_JIS"));
    }

    #[test]
    fn test_file_fetcher_missing_file() {
        let url = Url::parse("file:///definitely/not/here/page.html").unwrap();
        let err = FileFetcher.fetch(&url).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
