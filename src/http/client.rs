//! Request execution with rate limit retry
//!
//! Every request is a GET carrying `Authorization: Bearer <token>` and
//! `Accept: application/json`. A response is classified as:
//! - 200: body decoded into the expected type
//! - 429: rate limit signal, waited out and retried
//! - anything else: body decoded as an [`ApiError`] and returned
//!
//! Only the 429 case is retried. There is no attempt ceiling; the wait is
//! exactly what the server's reset header says.

use super::clock::{Clock, SystemClock, WaitOutcome};
use super::rate_limit::RateLimitSignal;
use super::request::{ResourcePath, Scope};
use crate::config::ClientConfig;
use crate::error::{ApiError, Error, Result};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// HTTP client bound to one API host, region and access token
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: Url,
    region: String,
    access_token: Arc<str>,
    clock: Arc<dyn Clock>,
    cancellation_token: CancellationToken,
}

impl HttpClient {
    /// Create a client, building a reqwest client from the config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()?;
        Self::with_client(config, client)
    }

    /// Create a client on top of an existing reqwest client
    pub fn with_client(config: &ClientConfig, client: Client) -> Result<Self> {
        let base_url = config.validate()?;
        Ok(Self {
            client,
            base_url,
            region: config.region.clone(),
            access_token: Arc::from(config.access_token.as_str()),
            clock: Arc::new(SystemClock),
            cancellation_token: CancellationToken::new(),
        })
    }

    /// Replace the clock used for rate limit waits
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Bind this client to a caller's cancellation token
    ///
    /// Cancelling the token aborts in-flight requests and pending rate
    /// limit waits made through the returned client.
    #[must_use]
    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }

    /// Address a different region with the same host and token
    #[must_use]
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Cancel every request made through this client's token
    pub fn cancel_all_requests(&self) {
        self.cancellation_token.cancel();
    }

    /// Build the full URL of a resource
    pub fn url_for(&self, path: &ResourcePath) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| Error::config("base URL cannot carry a path"))?;
            segments.pop_if_empty();
            if path.scope() == Scope::Regional {
                segments.push(&self.region);
            }
            segments.extend(path.segments());
        }
        let mut query = path.query().peekable();
        if query.peek().is_some() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Fetch a resource, waiting out rate limits until it succeeds or fails
    /// for another reason
    pub async fn execute_with_retry<T: DeserializeOwned>(&self, path: &ResourcePath) -> Result<T> {
        let mut attempt: u32 = 1;
        loop {
            match self.execute_once(path).await {
                Err(Error::RateLimited(signal)) => {
                    let wait = signal.wait_duration(self.clock.now_millis());
                    warn!(
                        "Rate limited (429) on {}, limit {}, remaining {}, attempt {}, waiting {:?}",
                        path, signal.limit, signal.remaining, attempt, wait
                    );
                    match self.clock.sleep(wait, &self.cancellation_token).await {
                        WaitOutcome::Elapsed => attempt += 1,
                        WaitOutcome::Cancelled => return Err(Error::Cancelled),
                    }
                }
                result => return result,
            }
        }
    }

    /// Perform exactly one request/response/decode cycle
    ///
    /// A 429 comes back as [`Error::RateLimited`].
    pub async fn execute_once<T: DeserializeOwned>(&self, path: &ResourcePath) -> Result<T> {
        if self.cancellation_token.is_cancelled() {
            return Err(Error::Cancelled);
        }
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let request = self
            .client
            .get(url)
            .bearer_auth(&self.access_token)
            .header(ACCEPT, "application/json");

        let response = self.cancellable(request.send()).await??;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let signal = RateLimitSignal::from_headers(response.headers())?;
            return Err(Error::RateLimited(signal));
        }

        let body = self.cancellable(response.bytes()).await??;

        if status != StatusCode::OK {
            let api_error: ApiError = serde_json::from_slice(&body)
                .map_err(|e| Error::decode("error response body", e))?;
            return Err(Error::Api(api_error));
        }

        let value = serde_json::from_slice(&body).map_err(|e| Error::decode("response body", e))?;
        debug!("Request succeeded: {} ({} bytes)", path, body.len());
        Ok(value)
    }

    async fn cancellable<F: Future>(&self, fut: F) -> Result<F::Output> {
        tokio::select! {
            biased;
            () = self.cancellation_token.cancelled() => Err(Error::Cancelled),
            output = fut => Ok(output),
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("region", &self.region)
            .field("clock", &self.clock)
            .field("cancelled", &self.cancellation_token.is_cancelled())
            .finish_non_exhaustive()
    }
}
