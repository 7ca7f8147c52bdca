//! ConnectWise API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Resource-level operations live on [`crate::Endpoint`].

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use url::Url;

use crate::error::{ConnectWiseError, Result};

const DEFAULT_API_URL: &str = "https://api-na.myconnectwise.net/v4_6_release/apis/3.0";
const DEFAULT_TIMEOUT_SECS: u64 = 300;
const USER_AGENT: &str = concat!("cwapi/", env!("CARGO_PKG_VERSION"));
const CLIENT_ID_HEADER: &str = "clientId";

/// Credentials for one of the two ConnectWise products.
#[derive(Clone)]
pub enum Credentials {
    /// Manage API member keys. Sent as HTTP basic auth with the username
    /// `company_id+public_key`.
    Manage {
        company_id: String,
        public_key: String,
        private_key: String,
        client_id: String,
    },
    /// Automate API token obtained from the login endpoint.
    Automate { token: String, client_id: String },
}

impl Credentials {
    fn client_id(&self) -> &str {
        match self {
            Self::Manage { client_id, .. } | Self::Automate { client_id, .. } => client_id,
        }
    }

    fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(CLIENT_ID_HEADER, self.client_id());
        match self {
            Self::Manage {
                company_id,
                public_key,
                private_key,
                ..
            } => builder.basic_auth(format!("{company_id}+{public_key}"), Some(private_key)),
            Self::Automate { token, .. } => builder.bearer_auth(token),
        }
    }
}

/// Transport settings for [`ConnectWiseClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://na.myconnectwise.net/v4_6_release/apis/3.0`.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// A response whose status has already been checked, with its body read.
///
/// Kept on every fetched page so callers can inspect headers or the raw
/// payload after parsing.
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: String,
}

impl RawResponse {
    /// Build a response by hand (useful for fakes and seeded sequences).
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }
}

/// Low-level ConnectWise API client.
///
/// Handles authentication and HTTP requests. This struct is cheaply
/// cloneable; clones reference the same underlying connection pool.
///
/// # Example
///
/// ```no_run
/// use cwapi::{ConnectWiseClient, Credentials};
///
/// # fn example() -> cwapi::Result<()> {
/// // Create from environment variables
/// let client = ConnectWiseClient::from_env()?;
///
/// // Or configure manually
/// let client = ConnectWiseClient::new(
///     Credentials::Manage {
///         company_id: "acme".into(),
///         public_key: "pub".into(),
///         private_key: "priv".into(),
///         client_id: "00000000-0000-0000-0000-000000000000".into(),
///     },
///     "https://na.myconnectwise.net/v4_6_release/apis/3.0",
/// )?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConnectWiseClient {
    http: Client,
    base_url: Arc<Url>,
    credentials: Arc<Credentials>,
}

impl std::fmt::Debug for ConnectWiseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectWiseClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl ConnectWiseClient {
    /// Create a Manage client from environment variables.
    ///
    /// Reads `CONNECTWISE_COMPANY_ID`, `CONNECTWISE_PUBLIC_KEY`,
    /// `CONNECTWISE_PRIVATE_KEY` and `CONNECTWISE_CLIENT_ID`, plus the
    /// optional `CONNECTWISE_API_URL` and `CONNECTWISE_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is not set.
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::Manage {
            company_id: required_var("CONNECTWISE_COMPANY_ID")?,
            public_key: required_var("CONNECTWISE_PUBLIC_KEY")?,
            private_key: required_var("CONNECTWISE_PRIVATE_KEY")?,
            client_id: required_var("CONNECTWISE_CLIENT_ID")?,
        };

        let mut config = ClientConfig::default();
        if let Ok(url) = env::var("CONNECTWISE_API_URL") {
            config.base_url = url;
        }
        if let Ok(secs) = env::var("CONNECTWISE_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| {
                ConnectWiseError::ConfigMissing(format!(
                    "CONNECTWISE_TIMEOUT_SECS must be a whole number of seconds, got '{secs}'"
                ))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        Self::with_config(credentials, config)
    }

    /// Create a new client with the provided credentials and base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(credentials: Credentials, base_url: &str) -> Result<Self> {
        Self::with_config(
            credentials,
            ClientConfig {
                base_url: base_url.to_string(),
                ..Default::default()
            },
        )
    }

    /// Create a new client from explicit transport settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client
    /// cannot be built.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        // Ensure base URL ends with /
        let base_url_str = if config.base_url.ends_with('/') {
            config.base_url
        } else {
            format!("{}/", config.base_url)
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            credentials: Arc::new(credentials),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue one request and read its body.
    ///
    /// `params` go into the query string; `body`, when present, is sent as
    /// JSON. Non-success statuses become [`ConnectWiseError::RequestError`]
    /// with the raw body preserved.
    #[tracing::instrument(skip(self, params, body), fields(base_url = %self.base_url))]
    pub async fn request<Q, B>(
        &self,
        method: Method,
        path: &str,
        params: Option<&Q>,
        body: Option<&B>,
    ) -> Result<RawResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(path)?;

        let mut builder = self.credentials.apply(self.http.request(method, url));
        if let Some(params) = params {
            builder = builder.query(params);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        Self::read_response(response).await
    }

    /// Make a GET request with query parameters.
    pub async fn get<Q: Serialize + ?Sized>(&self, path: &str, params: &Q) -> Result<RawResponse> {
        self.request::<Q, ()>(Method::GET, path, Some(params), None)
            .await
    }

    /// Make a POST request with a JSON body.
    pub async fn post<Q, B>(&self, path: &str, params: &Q, body: &B) -> Result<RawResponse>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(params), Some(body))
            .await
    }

    /// Check response status and read the body.
    async fn read_response(response: reqwest::Response) -> Result<RawResponse> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "request rejected");
            return Err(ConnectWiseError::RequestError {
                status_code: status.as_u16(),
                body,
            });
        }

        Ok(RawResponse {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| ConnectWiseError::ConfigMissing(format!("{name} environment variable not set")))
}
