//! Configuration options for fetching.
//!
//! Extraction has no knobs: the block and skip tables are fixed. `Options`
//! only tunes how the page is retrieved.

use std::time::Duration;

/// User-Agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Redirect hops followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 50;

/// Configuration options for page retrieval.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use pagetext::Options;
/// use std::time::Duration;
///
/// let options = Options {
///     timeout: Some(Duration::from_secs(10)),
///     ..Options::default()
/// };
/// assert_eq!(options.user_agent, "Mozilla/5.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// User-Agent header value. An empty value falls back to
    /// [`DEFAULT_USER_AGENT`].
    ///
    /// Default: `"Mozilla/5.0"`
    pub user_agent: String,

    /// Whole-request timeout.
    ///
    /// Default: `None` (wait indefinitely)
    pub timeout: Option<Duration>,

    /// Maximum number of redirects to follow.
    ///
    /// Default: `50`
    pub max_redirects: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
        }
    }
}

impl Options {
    /// The User-Agent actually sent; never empty.
    #[must_use]
    pub fn effective_user_agent(&self) -> &str {
        let ua = self.user_agent.trim();
        if ua.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            ua
        }
    }
}
