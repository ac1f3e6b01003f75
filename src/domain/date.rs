//! Rendering of `publishedAt` timestamps.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Locale};

pub const DEFAULT_LOCALE: &str = "en_US";
pub const DEFAULT_PATTERN: &str = "%B %-d, %Y";

/// Environment variables consulted for the date locale, highest priority first.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Locale for dates taken from the environment, if it names one chrono knows.
pub fn system_locale() -> Option<String> {
    LOCALE_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.is_empty())
        .and_then(|value| normalize_locale(&value))
}

/// `de_DE.UTF-8@euro` becomes `de_DE`. `C` and `POSIX` name no language.
fn normalize_locale(raw: &str) -> Option<String> {
    let name = raw.split(['.', '@']).next()?.trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    Locale::try_from(name).ok().map(|_| name.to_string())
}

/// Formats ISO-8601 offset date-times as long localized dates.
#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    pattern: String,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DEFAULT_PATTERN)
    }
}

impl DateFormatter {
    /// Unknown locales fall back to POSIX and invalid patterns to
    /// [`DEFAULT_PATTERN`], both with a warning.
    pub fn new(locale: &str, pattern: &str) -> Self {
        let locale = Locale::try_from(locale).unwrap_or_else(|_| {
            tracing::warn!("Unknown locale {:?}, falling back to POSIX", locale);
            Locale::POSIX
        });

        let pattern = if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
            tracing::warn!("Invalid date format {:?}, using {:?}", pattern, DEFAULT_PATTERN);
            DEFAULT_PATTERN.to_string()
        } else {
            pattern.to_string()
        };

        Self { locale, pattern }
    }

    /// Render `input` as a long date, or an empty string when it does not parse.
    pub fn format(&self, input: &str) -> String {
        match DateTime::parse_from_rfc3339(input.trim()) {
            Ok(date_time) => date_time
                .format_localized(&self.pattern, self.locale)
                .to_string(),
            Err(e) => {
                tracing::debug!("Unparseable publishedAt {:?}: {}", input, e);
                String::new()
            }
        }
    }
}
