use crate::domain::{Article, Category, Resource};
use crate::screen::event::{Effect, Message, RequestTicket, ScreenEvent};
use crate::screen::state::ScreenState;

/// News screen reducer.
///
/// Owns the current [`ScreenState`] and the two counters that make ordering
/// explicit: the ticket of the one request whose result may still land, and
/// the generation of the one debounce timer whose expiry still counts.
#[derive(Debug, Default)]
pub struct NewsScreen {
    state: ScreenState,
    last_ticket: u64,
    in_flight: Option<RequestTicket>,
    debounce_generation: u64,
}

impl NewsScreen {
    pub fn new(category: Category) -> Self {
        Self {
            state: ScreenState::new(category),
            ..Default::default()
        }
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<RequestTicket> {
        self.in_flight
    }

    /// Apply one message and return the work it requires.
    pub fn handle(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Event(event) => self.on_event(event),
            Message::DebounceElapsed { generation } => self.on_debounce_elapsed(generation),
            Message::Loaded { ticket, result } => {
                self.on_loaded(ticket, result);
                Vec::new()
            }
        }
    }

    fn on_event(&mut self, event: ScreenEvent) -> Vec<Effect> {
        match event {
            ScreenEvent::CategoryChanged(category) => {
                let ticket = self.issue_ticket();
                self.replace(|s| ScreenState {
                    category,
                    is_loading: true,
                    ..s
                });
                vec![Effect::FetchHeadlines { ticket, category }]
            }
            ScreenEvent::NewsCardClicked(article) => {
                self.replace(|s| ScreenState {
                    selected_article: Some(article),
                    ..s
                });
                Vec::new()
            }
            ScreenEvent::SearchIconClicked => {
                // Headlines still on their way belong to the tab being left.
                self.in_flight = None;
                self.replace(|s| ScreenState {
                    is_search_bar_visible: true,
                    articles: Vec::new(),
                    is_loading: false,
                    ..s
                });
                Vec::new()
            }
            ScreenEvent::CloseIconClicked => {
                self.debounce_generation += 1;
                let ticket = self.issue_ticket();
                let category = self.state.category;
                self.replace(|s| ScreenState {
                    is_search_bar_visible: false,
                    is_loading: true,
                    ..s
                });
                vec![
                    Effect::CancelDebounce,
                    Effect::FetchHeadlines { ticket, category },
                ]
            }
            ScreenEvent::SearchQueryChanged(query) => {
                self.debounce_generation += 1;
                self.replace(|s| ScreenState {
                    search_query: query,
                    ..s
                });
                vec![Effect::StartDebounce {
                    generation: self.debounce_generation,
                }]
            }
        }
    }

    fn on_debounce_elapsed(&mut self, generation: u64) -> Vec<Effect> {
        if generation != self.debounce_generation {
            tracing::debug!("Ignoring superseded debounce timer {}", generation);
            return Vec::new();
        }

        // An empty query leaves whatever is on screen untouched.
        if self.state.search_query.is_empty() {
            tracing::debug!("Debounce elapsed with empty query, not searching");
            return Vec::new();
        }

        let ticket = self.issue_ticket();
        let query = self.state.search_query.clone();
        self.replace(|s| ScreenState {
            is_loading: true,
            ..s
        });
        vec![Effect::Search { ticket, query }]
    }

    fn on_loaded(&mut self, ticket: RequestTicket, result: Resource<Vec<Article>>) {
        if self.in_flight != Some(ticket) {
            tracing::debug!("Discarding stale result for request {}", ticket.0);
            return;
        }
        self.in_flight = None;

        match result {
            Resource::Success(articles) => self.replace(|s| ScreenState {
                articles,
                is_loading: false,
                error: None,
                ..s
            }),
            Resource::Error(message) => self.replace(|s| ScreenState {
                articles: Vec::new(),
                is_loading: false,
                error: Some(message),
                ..s
            }),
        }
    }

    fn issue_ticket(&mut self) -> RequestTicket {
        self.last_ticket += 1;
        let ticket = RequestTicket(self.last_ticket);
        self.in_flight = Some(ticket);
        ticket
    }

    fn replace(&mut self, next: impl FnOnce(ScreenState) -> ScreenState) {
        let current = std::mem::take(&mut self.state);
        self.state = next(current);
    }
}
