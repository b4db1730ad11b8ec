//! Word-validity lookups
//!
//! The validity gate defers the final "is this English" decision to a
//! [`WordLookup`]. Lookups may suspend on I/O and may fail; callers treat any
//! failure as "not a word".

use rustc_hash::FxHashSet;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use thiserror::Error;

/// Default public dictionary endpoint (the word is appended as a path segment)
pub const DEFAULT_LOOKUP_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// Default per-request timeout
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Boxed future returned by [`WordLookup::lookup`]
pub type LookupFuture<'a> = Pin<Box<dyn Future<Output = Result<bool, LookupError>> + Send + 'a>>;

/// Errors from a dictionary lookup
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// A source of truth for whether a word is a recognized dictionary entry
pub trait WordLookup: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Returns `Ok(true)` if `word` is a recognized entry
    fn lookup<'a>(&'a self, word: &'a str) -> LookupFuture<'a>;
}

/// Online lookup against a dictionaryapi.dev-style endpoint
///
/// Sends `GET {base_url}/{word}` and expects a JSON array whose first element
/// has a `word` field equal (ignoring case) to the query.
pub struct DictionaryApiLookup {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl DictionaryApiLookup {
    /// Create a lookup against `base_url` with a per-request timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sequence_puzzle/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, timeout))
    }

    /// Create a lookup reusing an existing HTTP client
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Request URL for `word`
    #[must_use]
    pub fn url_for(&self, word: &str) -> String {
        format!("{}/{}", self.base_url, urlencoding::encode(word))
    }
}

impl WordLookup for DictionaryApiLookup {
    fn name(&self) -> &str {
        "dictionaryapi"
    }

    fn lookup<'a>(&'a self, word: &'a str) -> LookupFuture<'a> {
        Box::pin(async move {
            let url = self.url_for(word);

            let resp = self
                .client
                .get(&url)
                .timeout(self.timeout)
                .send()
                .await?;

            // The API answers unknown words with 404
            if resp.status() == reqwest::StatusCode::NOT_FOUND {
                return Ok(false);
            }
            if !resp.status().is_success() {
                return Err(LookupError::Status(resp.status().as_u16()));
            }

            let data: serde_json::Value = resp
                .json()
                .await
                .map_err(|e| LookupError::Malformed(e.to_string()))?;

            entry_matches(&data, word)
        })
    }
}

/// Check the first entry of a lookup response against the queried word
fn entry_matches(data: &serde_json::Value, word: &str) -> Result<bool, LookupError> {
    let entries = data
        .as_array()
        .ok_or_else(|| LookupError::Malformed("expected a JSON array".to_string()))?;

    Ok(entries
        .first()
        .and_then(|entry| entry["word"].as_str())
        .is_some_and(|found| found.eq_ignore_ascii_case(word)))
}

/// Offline lookup against an in-memory word set
///
/// Useful when no network is available: any word from the raw dictionary
/// source (inflections included) is accepted.
#[derive(Debug, Clone, Default)]
pub struct LocalLookup {
    words: FxHashSet<String>,
}

impl LocalLookup {
    /// Build from raw words; entries are uppercased
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordLookup for LocalLookup {
    fn name(&self) -> &str {
        "local"
    }

    fn lookup<'a>(&'a self, word: &'a str) -> LookupFuture<'a> {
        let found = self.words.contains(&word.to_ascii_uppercase());
        Box::pin(async move { Ok(found) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[test]
    fn entry_matches_first_word_ignoring_case() {
        let data = json!([{ "word": "plain", "meanings": [] }, { "word": "other" }]);
        assert!(entry_matches(&data, "PLAIN").unwrap());
        assert!(!entry_matches(&data, "other").unwrap());
    }

    #[test]
    fn entry_matches_missing_word_field() {
        assert!(!entry_matches(&json!([{ "title": "x" }]), "plain").unwrap());
        assert!(!entry_matches(&json!([]), "plain").unwrap());
    }

    #[test]
    fn entry_matches_rejects_non_array() {
        let data = json!({ "title": "No Definitions Found" });
        assert!(matches!(
            entry_matches(&data, "plain"),
            Err(LookupError::Malformed(_))
        ));
    }

    #[test]
    fn url_is_encoded_and_base_trimmed() {
        let lookup = DictionaryApiLookup::new("http://example.test/api/", DEFAULT_LOOKUP_TIMEOUT)
            .unwrap();
        assert_eq!(lookup.url_for("plain"), "http://example.test/api/plain");
        assert_eq!(lookup.url_for("a b/c"), "http://example.test/api/a%20b%2Fc");
    }

    #[tokio::test]
    async fn local_lookup_is_case_insensitive() {
        let lookup = LocalLookup::new(["plain", " Link ", ""]);
        assert_eq!(lookup.len(), 2);
        assert!(lookup.lookup("PLAIN").await.unwrap());
        assert!(lookup.lookup("link").await.unwrap());
        assert!(!lookup.lookup("nail").await.unwrap());
    }

    fn api_lookup_at(base: String, timeout: Duration) -> DictionaryApiLookup {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        DictionaryApiLookup::with_client(client, base, timeout)
    }

    /// Serve one canned HTTP response and return the base URL
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{addr}")
    }

    #[tokio::test]
    async fn api_lookup_accepts_matching_entry() {
        let base = serve_once("200 OK", r#"[{"word":"plain"}]"#).await;
        let lookup = api_lookup_at(base, DEFAULT_LOOKUP_TIMEOUT);
        assert!(lookup.lookup("Plain").await.unwrap());
    }

    #[tokio::test]
    async fn api_lookup_not_found_is_false() {
        let base = serve_once("404 Not Found", r#"{"title":"No Definitions Found"}"#).await;
        let lookup = api_lookup_at(base, DEFAULT_LOOKUP_TIMEOUT);
        assert!(!lookup.lookup("qzxv").await.unwrap());
    }

    #[tokio::test]
    async fn api_lookup_server_error_is_err() {
        let base = serve_once("500 Internal Server Error", "oops").await;
        let lookup = api_lookup_at(base, DEFAULT_LOOKUP_TIMEOUT);
        assert!(matches!(
            lookup.lookup("plain").await,
            Err(LookupError::Status(500))
        ));
    }

    #[tokio::test]
    async fn api_lookup_malformed_body_is_err() {
        let base = serve_once("200 OK", "not json").await;
        let lookup = api_lookup_at(base, DEFAULT_LOOKUP_TIMEOUT);
        assert!(matches!(
            lookup.lookup("plain").await,
            Err(LookupError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn api_lookup_connection_refused_is_err() {
        // Bind then drop to get a port with nothing listening
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let lookup = api_lookup_at(format!("http://{addr}"), Duration::from_secs(2));
        assert!(matches!(
            lookup.lookup("plain").await,
            Err(LookupError::Http(_))
        ));
    }
}
