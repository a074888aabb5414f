use std::time::Duration;

use reqwest::{
    Client, ClientBuilder, Response, Url,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};

use crate::{config::ScrapingConfig, fetch_error::FetchError};

/// Anything that can turn a page URL into its body text.
#[allow(async_fn_in_trait)]
pub trait PageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError>;
}

pub struct RequestClient {
    client: Client,
    default_headers: HeaderMap,
    default_timeout: Duration,
}

impl RequestClient {
    pub fn new(config: &ScrapingConfig) -> anyhow::Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = ClientBuilder::new().build()?;
        Ok(Self {
            client,
            default_headers,
            default_timeout: config.timeout(),
        })
    }

    /// Sends a GET to `url`.
    ///
    /// `headers` replaces the default header set entirely when given, and
    /// `timeout` bounds the whole request (the configured timeout otherwise).
    pub async fn fetch_url_response(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        timeout: Option<Duration>,
    ) -> Result<Response, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        let response = self
            .client
            .get(parsed)
            .headers(headers.unwrap_or_else(|| self.default_headers.clone()))
            .timeout(timeout.unwrap_or(self.default_timeout))
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    pub async fn fetch_url_body(
        &self,
        url: &str,
        headers: Option<HeaderMap>,
        timeout: Option<Duration>,
    ) -> Result<String, FetchError> {
        let response = self.fetch_url_response(url, headers, timeout).await?;
        let body = response.text().await.map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;
        Ok(body)
    }
}

impl PageFetcher for RequestClient {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_url_body(url, None, None).await
    }
}
