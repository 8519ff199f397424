//! Pure presentation: draws an [`AppViewModel`] onto a ratatui frame.

use newsdeck_core::AppViewModel;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::input::InputMode;

const SIDEBAR_WIDTH: u16 = 18;

pub fn render(frame: &mut Frame, view: &AppViewModel, mode: InputMode) {
    let [sidebar, main] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .areas(frame.area());

    render_sidebar(frame, sidebar, view);

    let [search, heading, status, cards, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(main);

    render_search(frame, search, view, mode);
    render_heading(frame, heading, view);
    render_status(frame, status, view);
    render_cards(frame, cards, view);
    render_help(frame, help, mode);
}

fn render_sidebar(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let items: Vec<ListItem> = view
        .nav
        .iter()
        .map(|item| {
            let style = if item.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else if item.target.is_none() {
                // Placeholder entries are dimmed.
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            let marker = if item.active { "> " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(item.label, style),
            ]))
        })
        .collect();

    frame.render_widget(
        List::new(items).block(Block::bordered().title("Dashboard")),
        area,
    );
}

fn render_search(frame: &mut Frame, area: Rect, view: &AppViewModel, mode: InputMode) {
    let editing = mode == InputMode::Search;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let content = if view.search.is_empty() && !editing {
        Line::styled(
            format!("Search {}...", view.view.label().to_lowercase()),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Line::from(view.search.clone())
    };

    frame.render_widget(
        Paragraph::new(content).block(Block::bordered().title("Search").border_style(border_style)),
        area,
    );
    if editing {
        // Place the terminal cursor after the typed text.
        let max_visible = usize::from(area.width).saturating_sub(2);
        let x = area.x + 1 + view.search.len().min(max_visible) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn render_heading(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    frame.render_widget(
        Paragraph::new(Line::styled(
            view.heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = if view.loading {
        Line::styled("Loading articles...", Style::default().fg(Color::DarkGray))
    } else if !view.error.is_empty() {
        Line::styled(view.error.clone(), Style::default().fg(Color::Red))
    } else {
        Line::raw("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_cards(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    if let Some(message) = view.empty_message {
        frame.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true }),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = view
        .cards
        .iter()
        .map(|card| {
            let favorite = if card.is_favorite {
                Span::styled("♥ ", Style::default().fg(Color::Red))
            } else {
                Span::styled("· ", Style::default().fg(Color::DarkGray))
            };
            let title = Span::styled(
                card.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            let summary = Line::styled(
                format!("  {}", card.summary),
                Style::default().fg(Color::Gray),
            );
            let link = Line::styled(
                format!("  {}", card.url),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            );
            ListItem::new(Text::from(vec![
                Line::from(vec![favorite, title]),
                summary,
                link,
                Line::raw(""),
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(view.cursor));

    frame.render_stateful_widget(
        List::new(items).highlight_style(Style::default().bg(Color::Rgb(40, 44, 52))),
        area,
        &mut state,
    );
}

fn render_help(frame: &mut Frame, area: Rect, mode: InputMode) {
    let text = match mode {
        InputMode::Browse => {
            "q quit | / search | j/k move | enter favorite | 1 home  2 trending  3 favorites"
        }
        InputMode::Search => "esc done | type to filter by title",
    };
    frame.render_widget(
        Paragraph::new(Line::styled(text, Style::default().fg(Color::DarkGray))),
        area,
    );
}
