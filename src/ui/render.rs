//! Drawing: list table, form card, confirmation popup.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

use crate::ui::app::{App, Route};
use crate::ui::form::{FormField, FormScreenState};
use crate::ui::theme;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let header_height = 3.min(area.height);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };

    draw_header(frame, app, header);
    match app.route() {
        Route::List => draw_list(frame, app, body),
        Route::Form => draw_form(frame, app, body),
    }
    draw_footer(frame, app, footer);

    if app.list().is_prompting() {
        draw_delete_prompt(frame, app, area);
    }
}

fn draw_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match app.route() {
        Route::List => "People",
        Route::Form => match app.form() {
            FormScreenState::Create { .. } => "Create Person",
            _ => "Edit Person",
        },
    };
    let header = Paragraph::new(Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme::HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(header, area);
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let list = app.list();

    if list.snapshot.is_empty() {
        let empty = Paragraph::new("No people found. Press 'a' to add one.")
            .style(Style::default().fg(theme::HINT_TEXT))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
            );
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(["Name", "Age", "Gender", "Mobile"]).style(
        Style::default()
            .fg(theme::HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    );

    let rows = list.snapshot.iter().enumerate().map(|(index, person)| {
        let row = Row::new(vec![
            Cell::from(person.name.clone()),
            Cell::from(person.age.to_string()),
            Cell::from(Span::styled(
                person.gender.clone(),
                Style::default().fg(theme::gender_color(&person.gender)),
            )),
            Cell::from(person.mobile_number.clone()),
        ]);
        if index == list.selected {
            row.style(Style::default().bg(theme::ACTIVE_HIGHLIGHT))
        } else {
            row
        }
    });

    let widths = [
        Constraint::Percentage(40),
        Constraint::Length(5),
        Constraint::Length(10),
        Constraint::Min(12),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(table, area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::GLOBAL_BORDER));

    let lines: Vec<Line> = match app.form() {
        FormScreenState::Loading { id } => {
            vec![Line::from(Span::styled(
                format!("Loading person {}...", id),
                Style::default().fg(theme::HINT_TEXT),
            ))]
        }
        FormScreenState::LoadFailed { id, message } => vec![
            Line::from(Span::styled(
                format!("Could not load person {}", id),
                Style::default().fg(theme::STATUS_ERROR),
            )),
            Line::from(Span::raw(message.clone())),
            Line::from(Span::styled(
                "Press Esc to return to the list.",
                Style::default().fg(theme::HINT_TEXT),
            )),
        ],
        FormScreenState::Create { draft, focused, .. }
        | FormScreenState::Ready { draft, focused, .. } => FormField::ALL
            .iter()
            .map(|field| {
                let value = match field {
                    FormField::Name => draft.name.clone(),
                    FormField::Age => {
                        if draft.age == 0 {
                            String::new()
                        } else {
                            draft.age.to_string()
                        }
                    }
                    FormField::Gender => draft.gender.clone(),
                    FormField::Mobile => draft.mobile_number.clone(),
                };
                let style = if field == focused {
                    Style::default()
                        .fg(theme::FIELD_FOCUS)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{:>14}: ", field.label()), style),
                    Span::raw(value),
                    if field == focused {
                        Span::styled("_", style)
                    } else {
                        Span::raw("")
                    },
                ])
            })
            .collect(),
    };

    let card = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(card, centered_rect(60, 50, area));
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let hints = match app.route() {
        Route::List => "a add  e edit  d delete  r refresh  q quit",
        Route::Form => "Enter save  Esc cancel  Tab next field",
    };

    let error = app
        .last_send_error()
        .map(String::from)
        .or_else(|| app.list().status.clone())
        .or_else(|| match app.route() {
            Route::Form => app.form().error().map(String::from),
            Route::List => None,
        });

    let line = match error {
        Some(message) => Line::from(Span::styled(
            message,
            Style::default().fg(theme::STATUS_ERROR),
        )),
        None => Line::from(Span::styled(hints, Style::default().fg(theme::HINT_TEXT))),
    };

    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::GLOBAL_BORDER)),
    );
    frame.render_widget(footer, area);
}

fn draw_delete_prompt(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(prompt) = &app.list().prompt else {
        return;
    };
    let rect = centered_rect(50, 20, area);
    frame.render_widget(Clear, rect);
    let text = vec![
        Line::from(format!("Delete '{}'?", prompt.name)),
        Line::from(Span::styled(
            "y confirm  n cancel",
            Style::default().fg(theme::HINT_TEXT),
        )),
    ];
    let popup = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .title("Confirm")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::POPUP_BORDER)),
    );
    frame.render_widget(popup, rect);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
