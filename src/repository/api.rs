use std::sync::Arc;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Article, Category, Resource};
use crate::remote::{ArticleListResponse, NewsApi};
use crate::repository::NewsRepository;

/// Repository backed directly by the remote API, with no caching.
pub struct ApiNewsRepository {
    api: Arc<dyn NewsApi + Send + Sync>,
}

impl ApiNewsRepository {
    pub fn new(api: Arc<dyn NewsApi + Send + Sync>) -> Self {
        Self { api }
    }
}

fn into_resource(operation: &str, result: Result<ArticleListResponse>) -> Resource<Vec<Article>> {
    match result {
        Ok(response) => {
            tracing::info!("{}: {} articles", operation, response.articles.len());
            Resource::Success(response.articles)
        }
        Err(e) => {
            tracing::warn!("{} failed: {}", operation, e);
            Resource::Error(format!("Failed to fetch news: {}", e))
        }
    }
}

#[async_trait]
impl NewsRepository for ApiNewsRepository {
    async fn get_top_headlines(&self, category: Category) -> Resource<Vec<Article>> {
        let result = self.api.top_headlines(category).await;
        into_resource(&format!("Top headlines ({})", category), result)
    }

    async fn search_for_news(&self, query: &str) -> Resource<Vec<Article>> {
        let result = self.api.search(query).await;
        into_resource(&format!("Search {:?}", query), result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NewsError;

    struct CannedApi {
        fail: bool,
    }

    #[async_trait]
    impl NewsApi for CannedApi {
        async fn top_headlines(&self, category: Category) -> Result<ArticleListResponse> {
            if self.fail {
                return Err(NewsError::Timeout);
            }
            Ok(ArticleListResponse {
                status: "ok".into(),
                articles: vec![Article {
                    title: format!("{} story", category),
                    ..Default::default()
                }],
                ..Default::default()
            })
        }

        async fn search(&self, _query: &str) -> Result<ArticleListResponse> {
            if self.fail {
                return Err(NewsError::HttpStatus {
                    status: 429,
                    message: "Too many requests".into(),
                });
            }
            Ok(ArticleListResponse {
                status: "ok".into(),
                ..Default::default()
            })
        }
    }

    fn repository(fail: bool) -> ApiNewsRepository {
        ApiNewsRepository::new(Arc::new(CannedApi { fail }))
    }

    #[tokio::test]
    async fn test_success_wraps_articles() {
        let result = repository(false).get_top_headlines(Category::Science).await;
        let articles = result.data().unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "Science story");
    }

    #[tokio::test]
    async fn test_empty_search_is_success() {
        let result = repository(false).search_for_news("nothing").await;
        assert_eq!(result, Resource::Success(vec![]));
    }

    #[tokio::test]
    async fn test_failures_collapse_to_error() {
        let repo = repository(true);

        let headlines = repo.get_top_headlines(Category::General).await;
        assert_eq!(
            headlines.message(),
            Some("Failed to fetch news: Request timed out")
        );

        let search = repo.search_for_news("markets").await;
        assert_eq!(
            search.message(),
            Some("Failed to fetch news: HTTP 429: Too many requests")
        );
    }
}
