use serde::{Deserialize, Deserializer, Serialize};

/// Reads an explicit `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Publisher of an article as reported by the API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: Source,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    /// ISO-8601 offset date-time, kept as received.
    #[serde(default, deserialize_with = "null_as_default")]
    pub published_at: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn display_title(&self) -> &str {
        if self.title.trim().is_empty() {
            "(Untitled)"
        } else {
            &self.title
        }
    }

    pub fn source_name(&self) -> &str {
        self.source.name.as_deref().unwrap_or("")
    }

    /// Best available body text for the detail view.
    pub fn display_content(&self) -> &str {
        self.content
            .as_deref()
            .or(self.description.as_deref())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_JSON: &str = r#"{
        "source": {"id": null, "name": "Reuters"},
        "author": "Jane Doe",
        "title": "Markets rally",
        "description": "Stocks rose.",
        "url": "https://example.com/markets",
        "urlToImage": "https://example.com/markets.jpg",
        "publishedAt": "2024-06-22T08:31:31Z",
        "content": "Stocks rose sharply on Friday."
    }"#;

    #[test]
    fn test_deserialize_api_fields() {
        let article: Article = serde_json::from_str(ARTICLE_JSON).unwrap();
        assert_eq!(article.title, "Markets rally");
        assert_eq!(article.source_name(), "Reuters");
        assert_eq!(
            article.url_to_image.as_deref(),
            Some("https://example.com/markets.jpg")
        );
        assert_eq!(article.published_at, "2024-06-22T08:31:31Z");
        assert_eq!(article.url, "https://example.com/markets");
    }

    #[test]
    fn test_missing_optional_fields() {
        let article: Article = serde_json::from_str(
            r#"{"source": {}, "title": "Hi", "url": "u", "publishedAt": "x", "urlToImage": null}"#,
        )
        .unwrap();
        assert_eq!(article.source_name(), "");
        assert!(article.url_to_image.is_none());
        assert!(article.author.is_none());
    }

    #[test]
    fn test_explicit_nulls_read_as_defaults() {
        let article: Article = serde_json::from_str(
            r#"{"source": null, "title": null, "url": null, "publishedAt": null}"#,
        )
        .unwrap();
        assert_eq!(article.source, Source::default());
        assert_eq!(article.title, "");
        assert_eq!(article.url, "");
        assert_eq!(article.published_at, "");
    }

    #[test]
    fn test_display_title_without_title() {
        let article = Article::default();
        assert_eq!(article.display_title(), "(Untitled)");
    }

    #[test]
    fn test_display_content_prefers_content() {
        let mut article = Article {
            description: Some("Short".into()),
            ..Default::default()
        };
        assert_eq!(article.display_content(), "Short");
        article.content = Some("Full".into());
        assert_eq!(article.display_content(), "Full");
    }
}
