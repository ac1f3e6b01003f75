use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::config::{ColorConfig, KeybindingConfig};
use crate::domain::{Article, Category, DateFormatter};
use crate::screen::ScreenState;
use crate::tui::app::TuiApp;
use crate::tui::event::Action;

pub fn render(
    frame: &mut Frame,
    app: &mut TuiApp,
    state: &ScreenState,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
    dates: &DateFormatter,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category tabs or search bar
            Constraint::Min(5),    // Articles
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    if state.is_search_bar_visible {
        render_search_bar(frame, app, state, chunks[0], colors);
    } else {
        render_category_tabs(frame, state, chunks[0], colors);
    }
    render_articles(frame, app, state, chunks[1], colors, keys, dates);
    render_status_bar(frame, app, state, chunks[2], colors, keys);

    if app.detail_open {
        if let Some(article) = &state.selected_article {
            render_detail_sheet(frame, article, colors, keys, dates);
        }
    }
}

fn render_category_tabs(frame: &mut Frame, state: &ScreenState, area: Rect, colors: &ColorConfig) {
    let tabs = Tabs::new(Category::ALL.iter().map(|c| c.label()))
        .block(
            Block::default()
                .title(" RapidReport ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.inactive_border)),
        )
        .select(state.category.index())
        .style(Style::default().fg(colors.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(colors.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("|");

    frame.render_widget(tabs, area);
}

fn render_search_bar(
    frame: &mut Frame,
    app: &TuiApp,
    state: &ScreenState,
    area: Rect,
    colors: &ColorConfig,
) {
    let border_style = if app.is_editing_query {
        Style::default().fg(colors.active_border)
    } else {
        Style::default().fg(colors.inactive_border)
    };

    let cursor = if app.is_editing_query { "_" } else { "" };
    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let paragraph = Paragraph::new(format!("{}{}", state.search_query, cursor)).block(block);
    frame.render_widget(paragraph, area);
}

fn render_articles(
    frame: &mut Frame,
    app: &mut TuiApp,
    state: &ScreenState,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
    dates: &DateFormatter,
) {
    let title = if state.is_search_bar_visible {
        format!(" Results ({}) ", state.articles.len())
    } else {
        format!(" {} ({}) ", state.category, state.articles.len())
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let items: Vec<ListItem> = state
        .articles
        .iter()
        .map(|article| article_card(article, colors, dates))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(colors.selection_bg)
                .fg(colors.selection_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list, area, &mut app.article_list_state);

    if state.is_loading {
        render_notice(frame, area, Text::from("Loading..."), colors.loading);
    } else if let Some(error) = &state.error {
        let text = Text::from(vec![
            Line::from(error.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                format!("Press {} to retry", keys.hint(Action::Retry)),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ]);
        render_notice(frame, area, text, colors.error);
    } else if state.is_empty() {
        let hint = if state.is_search_bar_visible {
            "Type to search for news"
        } else {
            "No articles"
        };
        render_notice(frame, area, Text::from(hint), colors.inactive_border);
    }
}

fn article_card<'a>(article: &'a Article, colors: &ColorConfig, dates: &DateFormatter) -> ListItem<'a> {
    let title = Line::from(Span::styled(
        article.display_title(),
        Style::default()
            .fg(colors.article_title)
            .add_modifier(Modifier::BOLD),
    ));
    let meta = Line::from(vec![
        Span::styled(
            article.source_name(),
            Style::default().fg(colors.metadata_source),
        ),
        Span::raw("  "),
        Span::styled(
            dates.format(&article.published_at),
            Style::default().fg(colors.metadata_date),
        ),
    ]);

    ListItem::new(Text::from(vec![title, meta, Line::from("")]))
}

fn render_notice(frame: &mut Frame, area: Rect, text: Text, color: ratatui::style::Color) {
    let height = (text.lines.len() as u16 + 2).min(area.height);
    let popup = centered_rect(area, 60, height);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

fn render_detail_sheet(
    frame: &mut Frame,
    article: &Article,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
    dates: &DateFormatter,
) {
    let area = frame.area();
    let top = (u32::from(area.height) * 2 / 5) as u16;
    let sheet = Rect {
        x: area.x,
        y: area.y + top,
        width: area.width,
        height: area.height - top,
    };

    let mut lines = vec![
        Line::from(Span::styled(
            article.display_title(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut meta = vec![Span::styled(
        article.source_name(),
        Style::default().fg(colors.metadata_source),
    )];
    let date = dates.format(&article.published_at);
    if !date.is_empty() {
        meta.push(Span::raw("  "));
        meta.push(Span::styled(date, Style::default().fg(colors.metadata_date)));
    }
    lines.push(Line::from(meta));

    if let Some(author) = &article.author {
        lines.push(Line::from(Span::styled(
            format!("By: {}", author),
            Style::default().fg(colors.metadata_source),
        )));
    }
    lines.push(Line::from(""));

    // The description doubles as the body when there is no content.
    if let (Some(description), Some(_)) = (&article.description, &article.content) {
        lines.push(Line::from(plain_text(description)));
        lines.push(Line::from(""));
    }
    let body = article.display_content();
    if !body.is_empty() {
        lines.push(Line::from(plain_text(body)));
        lines.push(Line::from(""));
    }

    if let Some(image) = &article.url_to_image {
        lines.push(Line::from(Span::styled(
            format!("Image: {}", image),
            Style::default().fg(colors.metadata_link),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("Link: {}", article.url),
        Style::default().fg(colors.metadata_link),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "{}/{}: Read full story  {}: Close",
            keys.hint(Action::Select),
            keys.hint(Action::OpenInBrowser),
            keys.hint(Action::Back)
        ),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let block = Block::default()
        .title(" Article ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.active_border));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, sheet);
    frame.render_widget(paragraph, sheet);
}

fn render_status_bar(
    frame: &mut Frame,
    app: &TuiApp,
    state: &ScreenState,
    area: Rect,
    colors: &ColorConfig,
    keys: &KeybindingConfig,
) {
    let hint = move |action: Action| keys.hint(action);
    let status = if let Some(ref msg) = app.status_message {
        msg.clone()
    } else if app.is_editing_query {
        // Query editing keys are fixed, not configurable.
        "Type to search  Enter:Done  Esc:Close search".to_string()
    } else if app.detail_open {
        format!(
            "{}/{}:Read full story  {}:Close",
            hint(Action::Select),
            hint(Action::OpenInBrowser),
            hint(Action::Back)
        )
    } else if state.is_search_bar_visible {
        format!(
            "{}/{}:Nav  {}:Details  {}:Open  {}:Edit query  {}:Retry  {}:Close search  {}:Quit",
            hint(Action::MoveDown),
            hint(Action::MoveUp),
            hint(Action::Select),
            hint(Action::OpenInBrowser),
            hint(Action::Search),
            hint(Action::Retry),
            hint(Action::Back),
            hint(Action::Quit)
        )
    } else {
        format!(
            "{}/{}:Nav  {}/{}:Page  {}:Category  {}:Details  {}:Open  {}:Search  {}:Retry  {}:Quit",
            hint(Action::MoveDown),
            hint(Action::MoveUp),
            hint(Action::NextPage),
            hint(Action::PrevPage),
            hint(Action::NextCategory),
            hint(Action::Select),
            hint(Action::OpenInBrowser),
            hint(Action::Search),
            hint(Action::Retry),
            hint(Action::Quit)
        )
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}

fn centered_rect(area: Rect, percent_x: u16, height: u16) -> Rect {
    let width = (u32::from(area.width) * u32::from(percent_x.min(100)) / 100) as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Article bodies from the API may carry markup and entities.
fn plain_text(html: &str) -> String {
    html_escape::decode_html_entities(&strip_html(html)).to_string()
}

fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    let mut last_was_space = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => {
                if c.is_whitespace() {
                    if !last_was_space {
                        result.push(' ');
                        last_was_space = true;
                    }
                } else {
                    result.push(c);
                    last_was_space = false;
                }
            }
            _ => {}
        }
    }

    result.trim().to_string()
}
