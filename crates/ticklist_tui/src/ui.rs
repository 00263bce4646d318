//! Frame rendering for the todo list screen.

use crate::app::{App, Mode};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use ticklist_core::KeyValueStore;

pub fn draw<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_input(frame, app, chunks[0]);
    draw_list(frame, app, chunks[1]);
    draw_status(frame, app, chunks[2]);
    draw_hints(frame, app, chunks[3]);
}

fn draw_input<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let draft = &app.manager.state().draft;
    let can_add = !draft.trim().is_empty();

    // The [+] marker stands in for the add button; it stays dimmed while
    // the draft is blank and submitting would be a no-op.
    let title = Span::styled(
        "New todo [+]",
        if can_add {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        },
    );

    let border_style = if app.mode == Mode::Input && !app.editing() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let content = if draft.is_empty() {
        Span::styled(
            "Add a new todo...",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(draft.as_str())
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);

    if app.mode == Mode::Input && !app.editing() {
        let cursor_x = area.x + 1 + draft.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            cursor_x.min(area.x + area.width.saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn draw_list<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let state = app.manager.state();

    let items: Vec<ListItem<'_>> = if state.items.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No todos yet — add one above.",
            Style::default().fg(Color::DarkGray),
        )))]
    } else {
        state
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let marker = if index == app.selected { "> " } else { "  " };
                let checkbox = if item.done { "[x] " } else { "[ ] " };

                let text_span = if state.is_editing(item.id) {
                    let edit = state.edit.as_ref();
                    let text = edit.map_or("", |edit| edit.text.as_str());
                    Span::styled(
                        format!("{text}▏"),
                        Style::default().fg(Color::Yellow),
                    )
                } else if item.done {
                    Span::styled(
                        item.text.clone(),
                        Style::default()
                            .fg(Color::DarkGray)
                            .add_modifier(Modifier::CROSSED_OUT),
                    )
                } else {
                    Span::styled(item.text.clone(), Style::default().fg(Color::White))
                };

                let mut line = Line::from(vec![
                    Span::raw(marker.to_string()),
                    Span::raw(checkbox.to_string()),
                    text_span,
                ]);
                if index == app.selected {
                    line = line.style(Style::default().add_modifier(Modifier::BOLD));
                }
                ListItem::new(line)
            })
            .collect()
    };

    let list = List::new(items).block(Block::default().title("Todos").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_status<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status = Paragraph::new(format!("{} remaining", app.manager.remaining()));
    frame.render_widget(status, area);
}

fn draw_hints<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let hints = if app.editing() {
        "Enter: save  Esc: cancel  Up/Down: leave field (saves)"
    } else {
        match app.mode {
            Mode::Input => "Enter: add  Esc: back to list",
            Mode::Browse => "a: new  e: edit  d: delete  Space: toggle  Up/Down: select  q: quit",
        }
    };
    let hints = Paragraph::new(Span::styled(
        hints,
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(hints, area);
}
