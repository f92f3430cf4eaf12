//! Ethos API client.
//!
//! Low-level HTTP client that handles the proxy token exchange and raw
//! requests. Entity operations live on the model types via the traits, and
//! the hold workflows are in [`crate::holds`].

use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::EthosConfig;
use crate::error::{EthosError, Result};

const USER_AGENT: &str = concat!("ethos-client/", env!("CARGO_PKG_VERSION"));

/// Ethos API client bound to one proxy session.
///
/// A client only exists once the proxy has issued a session token. The token
/// is never refreshed; when it expires, requests fail with
/// [`EthosError::Remote`] and a new client must be connected.
///
/// This struct is cheaply cloneable; clones share the connection pool and
/// the session token.
///
/// # Example
///
/// ```no_run
/// use ethos_client::{EthosClient, EthosConfig};
///
/// # async fn example() -> ethos_client::Result<()> {
/// // Create from environment variables
/// let client = EthosClient::from_env().await?;
///
/// // Or configure manually
/// let config = EthosConfig::new("https://ethos-proxy.example.edu/", "api-key");
/// let client = EthosClient::connect(&config).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct EthosClient {
    http: Client,
    api_url: Arc<Url>,
    token: Arc<str>,
    api_header: Arc<str>,
}

impl std::fmt::Debug for EthosClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EthosClient")
            .field("api_url", &self.api_url.as_str())
            .field("api_header", &self.api_header)
            .finish_non_exhaustive()
    }
}

impl EthosClient {
    /// Connect using configuration read from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::ConfigMissing`] if the configuration is
    /// incomplete, or [`EthosError::Authentication`] if no token is issued.
    pub async fn from_env() -> Result<Self> {
        let config = EthosConfig::from_env()?;
        Self::connect(&config).await
    }

    /// Exchange the API key for a session token and build a client.
    ///
    /// Sends `POST {proxy_url}auth` with the API key as a bearer token; the
    /// raw response text becomes the session token.
    ///
    /// # Errors
    ///
    /// Returns [`EthosError::UrlError`] if the proxy URL is invalid, and
    /// [`EthosError::Authentication`] on a transport failure, a non-2xx
    /// status, or an empty token.
    #[tracing::instrument(skip(config), fields(proxy_url = %config.proxy_url))]
    pub async fn connect(config: &EthosConfig) -> Result<Self> {
        // Ensure proxy URL ends with /
        let proxy_url_str = if config.proxy_url.ends_with('/') {
            config.proxy_url.clone()
        } else {
            format!("{}/", config.proxy_url)
        };

        let proxy_url = Url::parse(&proxy_url_str)?;
        let auth_url = proxy_url.join("auth")?;
        let api_url = proxy_url.join("api/")?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(config.timeout)
            .build()
            .map_err(EthosError::HttpError)?;

        let token = Self::fetch_token(&http, auth_url, &config.api_key).await?;
        tracing::debug!("session token issued");

        Ok(Self {
            http,
            api_url: Arc::new(api_url),
            token: token.into(),
            api_header: config.api_header.as_str().into(),
        })
    }

    async fn fetch_token(http: &Client, auth_url: Url, api_key: &str) -> Result<String> {
        let response = http
            .post(auth_url)
            .bearer_auth(api_key)
            .send()
            .await
            .map_err(|e| EthosError::Authentication {
                message: e.to_string(),
                status_code: None,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "proxy rejected API key");
            return Err(EthosError::Authentication {
                message: format!("HTTP {status}"),
                status_code: Some(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|e| EthosError::Authentication {
            message: e.to_string(),
            status_code: Some(status.as_u16()),
        })?;

        let token = body.trim();
        if token.is_empty() {
            return Err(EthosError::Authentication {
                message: "proxy returned an empty token".to_string(),
                status_code: Some(status.as_u16()),
            });
        }

        Ok(token.to_string())
    }

    /// Get the API root (`{proxy_url}api/`).
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Get the session token issued by the proxy.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the media type used for versioned requests.
    pub fn api_header(&self) -> &str {
        &self.api_header
    }

    /// Make a GET request.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = self.api_url.join(path)?;
        self.send(self.http.get(url)).await
    }

    /// Make a GET request with query parameters.
    #[tracing::instrument(skip(self, query))]
    pub async fn get_with_query<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<Response> {
        let url = self.api_url.join(path)?;
        self.send(self.http.get(url).query(query)).await
    }

    /// Make a GET request that asks for the configured media type.
    #[tracing::instrument(skip(self))]
    pub async fn get_versioned(&self, path: &str) -> Result<Response> {
        let url = self.api_url.join(path)?;
        let request = self
            .http
            .get(url)
            .header(ACCEPT, &*self.api_header)
            .header(CONTENT_TYPE, &*self.api_header);
        self.send(request).await
    }

    /// Make a PUT request with a JSON body in the configured media type.
    #[tracing::instrument(skip(self, body))]
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.api_url.join(path)?;
        let payload = serde_json::to_vec(body)?;
        let request = self
            .http
            .put(url)
            .header(ACCEPT, &*self.api_header)
            .header(CONTENT_TYPE, &*self.api_header)
            .body(payload);
        self.send(request).await
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(EthosError::HttpError)?;

        Self::check_response(response).await
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Ethos API request failed");
        Err(EthosError::Remote {
            status_code: status.as_u16(),
            body,
        })
    }
}

/// Decode a successful response body.
///
/// Reading the body can fail as [`EthosError::HttpError`]; a body of the
/// wrong shape fails as [`EthosError::ParseError`].
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}
