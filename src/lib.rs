//! # RapidReport
//!
//! A terminal news reader for a NewsAPI-compatible service: categorized top
//! headlines, debounced search and an article detail sheet.
//!
//! ## Architecture
//!
//! ```text
//! View → ScreenEvent → NewsScreen → Effect → ScreenController
//!                          ↑                       ↓
//!                       Message ← NewsRepository ← NewsApi
//! ```
//!
//! - [`remote`]: HTTP client for the two news endpoints
//! - [`repository`]: Turns API outcomes into [`Resource`](domain::Resource)s
//! - [`screen`]: Screen state, reducer and the tokio driver around it
//! - [`tui`]: Terminal user interface built with ratatui
//!
//! ## Quick Start
//!
//! ```bash
//! # Print today's business headlines
//! rapidreport --api-key $KEY headlines --category business
//!
//! # Search
//! rapidreport search "interest rates"
//!
//! # Launch TUI
//! rapidreport
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the
/// configuration, the repository and the date formatter.
pub mod app;

/// Command-line interface using clap.
///
/// - `headlines [--category C] [--all]` - Print top headlines
/// - `search <query>` - Print search results
/// - `tui` - Launch the TUI (default)
pub mod cli;

/// Configuration loaded from `~/.config/rapidreport/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): One news article as returned by the API
/// - [`Category`](domain::Category): The four headline tabs
/// - [`Resource`](domain::Resource): Success-or-message result wrapper
/// - [`DateFormatter`](domain::DateFormatter): Long localized dates
pub mod domain;

/// Remote news API.
///
/// - [`NewsApi`](remote::NewsApi): Async trait for the two endpoints
/// - [`HttpNewsApi`](remote::HttpNewsApi): reqwest-based implementation
pub mod remote;

/// - [`NewsRepository`](repository::NewsRepository): What the screen fetches from
/// - [`ApiNewsRepository`](repository::ApiNewsRepository): Backed by a [`NewsApi`](remote::NewsApi)
pub mod repository;

/// News screen state machine.
///
/// [`NewsScreen`](screen::NewsScreen) is a pure reducer: it takes a
/// [`Message`](screen::Message) and returns the [`Effect`](screen::Effect)s to
/// run. [`ScreenController`](screen::ScreenController) runs them.
pub mod screen;

/// Terminal user interface.
///
/// Category tabs (or the search bar), the article list and a detail sheet.
pub mod tui;
