pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::config::KeybindingConfig;
use crate::screen::{ScreenController, ScreenEvent};

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let config = &ctx.config;
    let mut controller =
        ScreenController::with_debounce(ctx.repository.clone(), config.search.debounce());
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    // The first tab is shown on start, which counts as selecting it.
    controller.dispatch(ScreenEvent::CategoryChanged(config.ui.default_category));

    loop {
        controller.pump();
        tui_app.sync(controller.state());
        terminal.draw(|frame| {
            layout::render(
                frame,
                &mut tui_app,
                controller.state(),
                &config.colors,
                &config.keybindings,
                &ctx.dates,
            )
        })?;

        if let AppEvent::Key(key) = event_handler.next()? {
            tui_app.clear_status();
            handle_key(&mut tui_app, &mut controller, &config.keybindings, key);
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(
    app: &mut TuiApp,
    controller: &mut ScreenController,
    keybindings: &KeybindingConfig,
    key: KeyEvent,
) {
    if app.is_editing_query {
        edit_query(app, controller, key);
        return;
    }

    let action = keybindings.get_action(&key);

    if app.detail_open {
        match action {
            Action::Select | Action::OpenInBrowser => {
                if let Some(url) = controller.state().selected_article.as_ref().map(|a| a.url.clone()) {
                    open_full_story(app, &url);
                }
                app.detail_open = false;
            }
            Action::Back => app.detail_open = false,
            Action::Quit => app.should_quit = true,
            _ => {}
        }
        return;
    }

    let state = controller.state();
    let len = state.articles.len();
    let in_search = state.is_search_bar_visible;
    let category = state.category;

    match action {
        Action::Quit => app.should_quit = true,
        Action::MoveUp => app.move_up(),
        Action::MoveDown => app.move_down(len),
        Action::NextPage => app.next_page(len),
        Action::PrevPage => app.prev_page(),
        Action::NextCategory | Action::PrevCategory if !in_search => {
            let next = if action == Action::NextCategory {
                category.next()
            } else {
                category.prev()
            };
            app.reset_selection();
            controller.dispatch(ScreenEvent::CategoryChanged(next));
        }
        Action::Select => {
            if let Some(article) = app.highlighted(state).cloned() {
                controller.dispatch(ScreenEvent::NewsCardClicked(article));
                app.detail_open = true;
            }
        }
        Action::OpenInBrowser => {
            if let Some(url) = app.highlighted(state).map(|a| a.url.clone()) {
                open_full_story(app, &url);
            }
        }
        Action::Search => {
            if !in_search {
                app.reset_selection();
                controller.dispatch(ScreenEvent::SearchIconClicked);
            }
            app.is_editing_query = true;
        }
        Action::Retry => {
            let retry = if in_search {
                ScreenEvent::SearchQueryChanged(state.search_query.clone())
            } else {
                ScreenEvent::CategoryChanged(category)
            };
            controller.dispatch(retry);
        }
        Action::Back if in_search => close_search(app, controller),
        _ => {}
    }
}

fn edit_query(app: &mut TuiApp, controller: &mut ScreenController, key: KeyEvent) {
    let mut query = controller.state().search_query.clone();

    match key.code {
        KeyCode::Esc => close_search(app, controller),
        KeyCode::Enter => app.is_editing_query = false,
        KeyCode::Backspace => {
            if query.pop().is_some() {
                controller.dispatch(ScreenEvent::SearchQueryChanged(query));
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            query.push(c);
            app.reset_selection();
            controller.dispatch(ScreenEvent::SearchQueryChanged(query));
        }
        _ => {}
    }
}

fn close_search(app: &mut TuiApp, controller: &mut ScreenController) {
    app.is_editing_query = false;
    app.reset_selection();
    controller.dispatch(ScreenEvent::CloseIconClicked);
}

fn open_full_story(app: &mut TuiApp, url: &str) {
    match open::that(url) {
        Ok(()) => app.set_status(format!("Opened {}", url)),
        Err(e) => {
            tracing::warn!("Failed to open {}: {}", url, e);
            app.set_status(format!("Failed to open browser: {}", e));
        }
    }
}
