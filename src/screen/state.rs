use crate::domain::{Article, Category};

/// Everything the news screen renders.
///
/// Replaced wholesale by the reducer on every message; the view only ever
/// reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    pub category: Category,
    pub search_query: String,
    pub articles: Vec<Article>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_search_bar_visible: bool,
    pub selected_article: Option<Article>,
}

impl ScreenState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    /// Nothing loading, nothing failed, nothing to show.
    pub fn is_empty(&self) -> bool {
        !self.is_loading && self.error.is_none() && self.articles.is_empty()
    }
}
