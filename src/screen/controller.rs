use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::domain::Category;
use crate::repository::NewsRepository;
use crate::screen::event::{Effect, Message, ScreenEvent};
use crate::screen::reducer::NewsScreen;
use crate::screen::state::ScreenState;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Drives a [`NewsScreen`] on the tokio runtime.
///
/// Repository calls and the search debounce timer run as spawned tasks; they
/// only report back through a channel, so every state change still happens
/// inside [`dispatch`](Self::dispatch), [`pump`](Self::pump) or
/// [`next`](Self::next). Must be used from within a tokio runtime.
pub struct ScreenController {
    screen: NewsScreen,
    repository: Arc<dyn NewsRepository + Send + Sync>,
    debounce_delay: Duration,
    debounce_task: Option<JoinHandle<()>>,
    sender: UnboundedSender<Message>,
    receiver: UnboundedReceiver<Message>,
}

impl ScreenController {
    pub fn new(repository: Arc<dyn NewsRepository + Send + Sync>) -> Self {
        Self::with_debounce(repository, DEFAULT_DEBOUNCE)
    }

    pub fn with_debounce(
        repository: Arc<dyn NewsRepository + Send + Sync>,
        debounce_delay: Duration,
    ) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            screen: NewsScreen::new(Category::default()),
            repository,
            debounce_delay,
            debounce_task: None,
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &ScreenState {
        self.screen.state()
    }

    /// Whether a request is still expected to land.
    pub fn is_busy(&self) -> bool {
        self.screen.in_flight().is_some()
    }

    pub fn dispatch(&mut self, event: ScreenEvent) {
        self.apply(Message::Event(event));
    }

    /// Apply every completion that has already arrived. Never waits.
    pub fn pump(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.apply(message);
            applied += 1;
        }
        applied
    }

    /// Wait for the next completion and apply it.
    pub async fn next(&mut self) {
        // The controller holds a sender, so the channel never closes.
        if let Some(message) = self.receiver.recv().await {
            self.apply(message);
        }
    }

    fn apply(&mut self, message: Message) {
        for effect in self.screen.handle(message) {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::FetchHeadlines { ticket, category } => {
                let repository = self.repository.clone();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = repository.get_top_headlines(category).await;
                    if sender.send(Message::Loaded { ticket, result }).is_err() {
                        tracing::debug!("Screen closed before headlines arrived");
                    }
                });
            }
            Effect::Search { ticket, query } => {
                let repository = self.repository.clone();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = repository.search_for_news(&query).await;
                    if sender.send(Message::Loaded { ticket, result }).is_err() {
                        tracing::debug!("Screen closed before search results arrived");
                    }
                });
            }
            Effect::StartDebounce { generation } => {
                self.cancel_debounce();
                let sender = self.sender.clone();
                // Measured from the keystroke, not from when the task first runs.
                let deadline = Instant::now() + self.debounce_delay;
                self.debounce_task = Some(tokio::spawn(async move {
                    tokio::time::sleep_until(deadline).await;
                    let _ = sender.send(Message::DebounceElapsed { generation });
                }));
            }
            Effect::CancelDebounce => self.cancel_debounce(),
        }
    }

    fn cancel_debounce(&mut self) {
        if let Some(task) = self.debounce_task.take() {
            task.abort();
        }
    }
}

impl Drop for ScreenController {
    fn drop(&mut self) {
        self.cancel_debounce();
    }
}
