use ratatui::widgets::ListState;

use crate::domain::Article;
use crate::screen::ScreenState;

pub const PAGE_SIZE: usize = 5;

/// View-local state: what the screen reducer does not need to know about.
pub struct TuiApp {
    pub article_index: usize,
    pub article_list_state: ListState,
    /// Keystrokes go into the search query instead of keybindings.
    pub is_editing_query: bool,
    /// Detail sheet for the selected article is shown.
    pub detail_open: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl TuiApp {
    pub fn new() -> Self {
        Self {
            article_index: 0,
            article_list_state: ListState::default(),
            is_editing_query: false,
            detail_open: false,
            should_quit: false,
            status_message: None,
        }
    }

    /// Keep the highlighted row inside the current article list.
    pub fn sync(&mut self, state: &ScreenState) {
        let len = state.articles.len();
        if len == 0 {
            self.article_index = 0;
            self.article_list_state.select(None);
        } else {
            self.article_index = self.article_index.min(len - 1);
            self.article_list_state.select(Some(self.article_index));
        }
    }

    pub fn highlighted<'a>(&self, state: &'a ScreenState) -> Option<&'a Article> {
        state.articles.get(self.article_index)
    }

    pub fn reset_selection(&mut self) {
        self.article_index = 0;
        *self.article_list_state.offset_mut() = 0;
    }

    pub fn move_up(&mut self) {
        self.article_index = self.article_index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.article_index + 1 < len {
            self.article_index += 1;
        }
    }

    pub fn next_page(&mut self, len: usize) {
        let max_index = len.saturating_sub(1);
        self.article_index = (self.article_index + PAGE_SIZE).min(max_index);
    }

    pub fn prev_page(&mut self) {
        self.article_index = self.article_index.saturating_sub(PAGE_SIZE);
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
