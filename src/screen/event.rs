use crate::domain::{Article, Category, Resource};

/// User interactions with the news screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    CategoryChanged(Category),
    NewsCardClicked(Article),
    SearchQueryChanged(String),
    SearchIconClicked,
    CloseIconClicked,
}

/// Identifies one repository request. Only the latest issued ticket is
/// ever applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(pub u64);

/// Everything the reducer consumes: user events plus completions of the
/// work it asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Event(ScreenEvent),
    DebounceElapsed {
        generation: u64,
    },
    Loaded {
        ticket: RequestTicket,
        result: Resource<Vec<Article>>,
    },
}

impl From<ScreenEvent> for Message {
    fn from(event: ScreenEvent) -> Self {
        Message::Event(event)
    }
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchHeadlines {
        ticket: RequestTicket,
        category: Category,
    },
    Search {
        ticket: RequestTicket,
        query: String,
    },
    /// Replace any pending debounce timer with a new one.
    StartDebounce {
        generation: u64,
    },
    CancelDebounce,
}
