pub mod api;

use async_trait::async_trait;

use crate::domain::{Article, Category, Resource};

pub use api::ApiNewsRepository;

/// Source of articles for the news screen.
///
/// Implementations never return errors; failures come back as
/// [`Resource::Error`].
#[async_trait]
pub trait NewsRepository {
    async fn get_top_headlines(&self, category: Category) -> Resource<Vec<Article>>;
    async fn search_for_news(&self, query: &str) -> Resource<Vec<Article>>;
}
