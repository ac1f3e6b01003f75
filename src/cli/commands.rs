use futures::future::join_all;

use crate::app::{AppContext, NewsError, Result};
use crate::domain::{Article, Category, Resource};

pub async fn headlines(ctx: &AppContext, category: Category) -> Result<()> {
    let result = ctx.repository.get_top_headlines(category).await;
    print_articles(ctx, result)
}

/// Fetch all categories concurrently and print them in tab order.
pub async fn all_headlines(ctx: &AppContext) -> Result<()> {
    let requests = Category::ALL.into_iter().map(|category| {
        let repository = ctx.repository.clone();
        async move { (category, repository.get_top_headlines(category).await) }
    });
    let results = join_all(requests).await;

    let mut failed = 0;
    for (category, result) in results {
        println!("== {} ==", category);
        if let Err(e) = print_articles(ctx, result) {
            eprintln!("  {}", e);
            failed += 1;
        }
        println!();
    }

    if failed > 0 {
        return Err(NewsError::Other(format!(
            "{} of {} categories failed",
            failed,
            Category::ALL.len()
        )));
    }
    Ok(())
}

pub async fn search(ctx: &AppContext, query: &str) -> Result<()> {
    if query.trim().is_empty() {
        println!("Nothing to search for");
        return Ok(());
    }

    let result = ctx.repository.search_for_news(query).await;
    print_articles(ctx, result)
}

fn print_articles(ctx: &AppContext, result: Resource<Vec<Article>>) -> Result<()> {
    let articles = match result {
        Resource::Success(articles) => articles,
        Resource::Error(message) => return Err(NewsError::Other(message)),
    };

    if articles.is_empty() {
        println!("No articles");
        return Ok(());
    }

    for article in &articles {
        println!("{}", format_line(ctx, article));
        println!("  {}", article.url);
    }
    Ok(())
}

fn format_line(ctx: &AppContext, article: &Article) -> String {
    let date = ctx.dates.format(&article.published_at);
    match (article.source_name(), date.is_empty()) {
        ("", true) => article.display_title().to_string(),
        ("", false) => format!("{}  {}", date, article.display_title()),
        (source, true) => format!("[{}] {}", source, article.display_title()),
        (source, false) => format!("{}  [{}] {}", date, source, article.display_title()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::Config;
    use crate::domain::Source;
    use crate::repository::NewsRepository;

    struct FailingSports;

    #[async_trait]
    impl NewsRepository for FailingSports {
        async fn get_top_headlines(&self, category: Category) -> Resource<Vec<Article>> {
            if category == Category::Sports {
                Resource::Error("Failed to fetch news: Request timed out".into())
            } else {
                Resource::Success(Vec::new())
            }
        }

        async fn search_for_news(&self, _query: &str) -> Resource<Vec<Article>> {
            Resource::Error("Failed to fetch news: HTTP 426: Upgrade Required".into())
        }
    }

    fn context() -> AppContext {
        let mut config = Config::default();
        config.ui.locale = "en_US".into();
        AppContext::with_repository(config, Arc::new(FailingSports))
    }

    #[test]
    fn test_format_line() {
        let ctx = context();
        let mut article = Article {
            title: "Rust 2.0".into(),
            published_at: "2024-06-22T08:31:31Z".into(),
            ..Default::default()
        };
        assert_eq!(format_line(&ctx, &article), "June 22, 2024  Rust 2.0");

        article.source = Source {
            id: None,
            name: Some("The Register".into()),
        };
        article.published_at = "yesterday".into();
        assert_eq!(format_line(&ctx, &article), "[The Register] Rust 2.0");
    }

    #[tokio::test]
    async fn test_error_becomes_command_failure() {
        let ctx = context();
        assert!(headlines(&ctx, Category::General).await.is_ok());

        let err = headlines(&ctx, Category::Sports).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch news: Request timed out");

        assert!(search(&ctx, "rust").await.is_err());
    }

    #[tokio::test]
    async fn test_all_headlines_reports_partial_failure() {
        let err = all_headlines(&context()).await.unwrap_err();
        assert_eq!(err.to_string(), "1 of 4 categories failed");
    }

    #[tokio::test]
    async fn test_blank_search_is_skipped() {
        tokio_test::assert_ok!(search(&context(), "   ").await);
    }
}
