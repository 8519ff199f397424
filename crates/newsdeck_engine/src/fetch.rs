use std::time::Duration;

use deck_logging::{deck_debug, deck_warn};

use crate::query::{build_url, QueryKind};
use crate::{Article, FailureKind, FetchError, NewsResponse, RequestId};

/// Default live endpoint. Overridable for tests.
pub const DEFAULT_BASE_URL: &str = "https://newsapi.org/v2";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub base_url: String,
    pub api_key: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl FetchSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait NewsFetcher: Send + Sync {
    async fn fetch(
        &self,
        request_id: RequestId,
        query: &QueryKind,
    ) -> Result<Vec<Article>, FetchError>;
}

pub struct ReqwestFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl NewsFetcher for ReqwestFetcher {
    async fn fetch(
        &self,
        request_id: RequestId,
        query: &QueryKind,
    ) -> Result<Vec<Article>, FetchError> {
        let url = build_url(&self.settings.base_url, query, &self.settings.api_key);
        let parsed = reqwest::Url::parse(&url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;

        // The full URL embeds the credential; log the endpoint path only.
        deck_debug!("fetch request_id={} endpoint={}", request_id, query.path());

        let response = self.client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let payload: NewsResponse = response.json().await.map_err(map_body_error)?;
        if payload.status != "ok" {
            let message = payload
                .message
                .unwrap_or_else(|| "unknown api error".to_string());
            deck_warn!(
                "fetch request_id={} rejected by api: {}",
                request_id,
                message
            );
            return Err(FetchError::new(
                FailureKind::Api {
                    message: message.clone(),
                },
                message,
            ));
        }

        deck_debug!(
            "fetch request_id={} ok articles={}",
            request_id,
            payload.articles.len()
        );
        Ok(payload.articles)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

fn map_body_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
