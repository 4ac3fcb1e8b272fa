//! HTTP plumbing shared by the provider adapters.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

/// Per-request timeout for upstream provider calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connect timeout for upstream provider calls.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client shared by the museum API adapters.
///
/// Both upstream APIs speak plain JSON over GET; the wrapper pins the user
/// agent and timeouts in one place so the adapters stay pure query
/// translators. `reqwest::Client` is internally reference-counted, so each
/// adapter holds its own cheap clone.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a client with the service's user agent and timeouts
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// Start a GET request against the given URL
    pub fn get(&self, url: &str) -> RequestBuilder {
        self.client.get(url)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}
