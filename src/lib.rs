//! Async HTTP client for the pastebin.com web API.
//!
//! Two operations are supported: creating a paste and logging in to obtain a user session
//! key. Both are single form-encoded POST requests whose response body is plain text; the
//! service reports success (a paste URL, a session key) and failure ("Bad API request ...")
//! in the body alike, so this crate returns the body verbatim and leaves interpretation to
//! the caller.

use std::time::Duration;

mod error;
mod formats;
mod models;

pub use error::PastebinError;
pub use formats::format_for_extension;
pub use models::{DevKey, ExpireDate, LoginRequest, PasteRequest, Visibility};

use reqwest::{Client, ClientBuilder, Request, Url};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://pastebin.com/";
const PASTE_PATH: &str = "api/api_post.php";
const LOGIN_PATH: &str = "api/api_login.php";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin async HTTP client for the pastebin endpoints.
#[derive(Debug, Clone)]
pub struct PastebinClient {
    client: Client,
    base_url: Url,
}

impl PastebinClient {
    /// Build a client with a custom base URL.
    ///
    /// `base_url` is parsed as a [`Url`] and used as the base for the two API paths via
    /// [`Url::join`], so a trailing slash is recommended.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, PastebinError> {
        PastebinClientBuilder::new().base_url(base_url)?.build()
    }

    /// Start configuring a client with the crate's defaults.
    ///
    /// Defaults:
    /// - Base URL: `https://pastebin.com/`
    /// - Timeout: 30 seconds
    /// - User agent: `pastebin-client/<version>`
    pub fn builder() -> PastebinClientBuilder {
        PastebinClientBuilder::new()
    }

    /// Current base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create a paste and return the raw response body.
    ///
    /// On success the body is the URL of the new paste. Service-level failures arrive in a
    /// 200-status body and are returned as-is, not as an error.
    pub async fn paste(&self, request: &PasteRequest) -> Result<String, PastebinError> {
        let request = self.build_paste_request(request)?;
        self.execute(request).await
    }

    /// Log in and return the raw response body.
    ///
    /// On success the body is a user session key usable as the user key on later pastes.
    /// Treat captured output as a secret.
    pub async fn login(&self, request: &LoginRequest) -> Result<String, PastebinError> {
        let request = self.build_login_request(request)?;
        self.execute(request).await
    }

    fn build_paste_request(&self, request: &PasteRequest) -> Result<Request, PastebinError> {
        let url = self.join_path(PASTE_PATH)?;
        Ok(self.client.post(url).form(&request.form()).build()?)
    }

    fn build_login_request(&self, request: &LoginRequest) -> Result<Request, PastebinError> {
        let url = self.join_path(LOGIN_PATH)?;
        Ok(self.client.post(url).form(&request.form()).build()?)
    }

    async fn execute(&self, request: Request) -> Result<String, PastebinError> {
        debug!(url = %request.url(), "sending request");
        let response = self.client.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PastebinError::RequestFailed(status));
        }

        Ok(response.text().await?)
    }

    fn join_path(&self, path: &str) -> Result<Url, PastebinError> {
        Ok(self.base_url.join(path)?)
    }
}

/// Builder for [`PastebinClient`].
#[derive(Debug)]
pub struct PastebinClientBuilder {
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Duration,
    builder: ClientBuilder,
}

impl PastebinClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            user_agent: None,
            timeout: DEFAULT_TIMEOUT,
            builder: Client::builder(),
        }
    }

    /// Override the base URL used for requests.
    pub fn base_url(mut self, base_url: impl AsRef<str>) -> Result<Self, PastebinError> {
        self.base_url = Some(Url::parse(base_url.as_ref())?);
        Ok(self)
    }

    /// Set a custom user agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Configure the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PastebinClient, PastebinError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let builder = self
            .builder
            .timeout(self.timeout)
            .user_agent(self.user_agent.unwrap_or_else(default_user_agent));

        let client = builder.build()?;

        Ok(PastebinClient { client, base_url })
    }
}

impl Default for PastebinClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_user_agent() -> String {
    format!("pastebin-client/{}", env!("CARGO_PKG_VERSION"))
}
