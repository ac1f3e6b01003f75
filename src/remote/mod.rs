pub mod http_api;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app::Result;
use crate::domain::article::null_as_default;
use crate::domain::{Article, Category};

pub use http_api::HttpNewsApi;

/// Body of both the headlines and the search endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleListResponse {
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    /// A missing or null list is read as empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
    /// Present when `status` is `"error"`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[async_trait]
pub trait NewsApi {
    /// `GET top-headlines?country=..&category=..`
    async fn top_headlines(&self, category: Category) -> Result<ArticleListResponse>;

    /// `GET everything?q=..`
    async fn search(&self, query: &str) -> Result<ArticleListResponse>;
}
