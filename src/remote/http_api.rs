use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::{NewsError, Result};
use crate::config::ApiConfig;
use crate::domain::Category;
use crate::remote::{ArticleListResponse, NewsApi};

pub struct HttpNewsApi {
    client: Client,
    base_url: Url,
    api_key: Option<String>,
    country: String,
}

impl HttpNewsApi {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("rapidreport/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::Other(format!("Failed to build HTTP client: {}", e)))?;

        // `Url::join` drops the last path segment unless it ends with a slash.
        let mut base = config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client,
            base_url: Url::parse(&base)?,
            api_key: config.api_key.clone().filter(|k| !k.trim().is_empty()),
            country: config.country.clone(),
        })
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in params {
                pairs.append_pair(key, value);
            }
            if let Some(api_key) = &self.api_key {
                pairs.append_pair("apiKey", api_key);
            }
        }
        Ok(url)
    }

    async fn get_articles(&self, url: Url) -> Result<ArticleListResponse> {
        tracing::debug!("GET {}", url.path());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ArticleListResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown status")
                        .to_string()
                });
            return Err(NewsError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let payload: ArticleListResponse = serde_json::from_slice(&body)?;
        if payload.status == "error" {
            return Err(NewsError::MalformedPayload(
                payload
                    .message
                    .unwrap_or_else(|| "API reported an error".to_string()),
            ));
        }

        Ok(payload)
    }
}

#[async_trait]
impl NewsApi for HttpNewsApi {
    async fn top_headlines(&self, category: Category) -> Result<ArticleListResponse> {
        let url = self.endpoint(
            "top-headlines",
            &[
                ("country", self.country.as_str()),
                ("category", category.as_query()),
            ],
        )?;
        self.get_articles(url).await
    }

    async fn search(&self, query: &str) -> Result<ArticleListResponse> {
        let url = self.endpoint("everything", &[("q", query)])?;
        self.get_articles(url).await
    }
}
