use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Headline categories, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Category {
    #[default]
    General,
    Business,
    Science,
    Sports,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::General,
        Category::Business,
        Category::Science,
        Category::Sports,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Business => "Business",
            Category::Science => "Science",
            Category::Sports => "Sports",
        }
    }

    /// Value sent as the `category` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Category::General => "general",
            Category::Business => "business",
            Category::Science => "science",
            Category::Sports => "sports",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Category::General => 0,
            Category::Business => 1,
            Category::Science => 2,
            Category::Sports => 3,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_query().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Accepts the same spellings as the command line.
impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
