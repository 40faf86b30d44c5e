use clipper_core::{AppViewModel, NoticeKind, Status};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use tui_input::Input;

use super::Focus;

const NOTICE_WIDTH: u16 = 40;

pub(crate) fn draw(
    frame: &mut ratatui::Frame<'_>,
    view: &AppViewModel,
    input: &Input,
    focus: Focus,
) {
    let area = frame.area();
    let [input_area, button_area, status_area, files_area, footer_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(area);

    draw_input(frame, input_area, view, input, focus);
    draw_submit_button(frame, button_area, view);
    draw_status(frame, status_area, view);
    draw_files(frame, files_area, view, focus);
    draw_footer(frame, footer_area, focus);
    draw_notices(frame, area, view);
    if view.purge_confirm_visible {
        draw_purge_confirm(frame, area);
    }
}

fn draw_input(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    view: &AppViewModel,
    input: &Input,
    focus: Focus,
) {
    let border_style = if !view.input_valid {
        Style::default().fg(Color::Red)
    } else if focus == Focus::Input {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(inner_width);
    let paragraph = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("URL")
                .border_style(border_style),
        );
    frame.render_widget(paragraph, area);

    if focus == Focus::Input {
        let cursor_x = (input.visual_cursor().saturating_sub(scroll)) as u16;
        frame.set_cursor_position((
            area.x + 1 + cursor_x.min(area.width.saturating_sub(2)),
            area.y + 1,
        ));
    }
}

fn draw_submit_button(frame: &mut ratatui::Frame<'_>, area: Rect, view: &AppViewModel) {
    let style = if view.submit_enabled {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let line = Line::from(Span::styled(format!("[ {} ]", view.submit_label), style));
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_status(frame: &mut ratatui::Frame<'_>, area: Rect, view: &AppViewModel) {
    let (message, style) = match &view.status {
        Status::None => return,
        Status::Loading(message) => (
            format!("... {message}"),
            Style::default().fg(Color::Yellow),
        ),
        Status::Success(message) => (message.clone(), Style::default().fg(Color::Green)),
        Status::Error(message) => (message.clone(), Style::default().fg(Color::Red)),
    };

    let paragraph = Paragraph::new(message).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Status")
            .border_style(style),
    );
    frame.render_widget(paragraph, area);
}

fn draw_files(frame: &mut ratatui::Frame<'_>, area: Rect, view: &AppViewModel, focus: Focus) {
    // The results section is hidden while there is nothing to list.
    if !view.results_visible {
        return;
    }

    let border_style = if focus == Focus::Files {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let items: Vec<ListItem<'_>> = view
        .files
        .iter()
        .map(|row| {
            ListItem::new(Line::from(vec![
                Span::raw(row.name.clone()),
                Span::raw("  "),
                Span::styled(
                    row.size_display.clone(),
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Extracted files ({})", view.files.len()))
                .border_style(border_style),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(view.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut ratatui::Frame<'_>, area: Rect, focus: Focus) {
    let hint = match focus {
        Focus::Input => "Enter: extract    Tab: files    Esc: quit",
        Focus::Files => {
            "j/k: move    d/Enter: download    Del: delete    r: refresh    x: purge    Tab: url    q: quit"
        }
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}

fn draw_notices(frame: &mut ratatui::Frame<'_>, area: Rect, view: &AppViewModel) {
    let width = NOTICE_WIDTH.min(area.width.saturating_sub(2));
    if width == 0 {
        return;
    }

    for (index, notice) in view.notices.iter().enumerate() {
        let y = area.y + 1 + (index as u16) * 3;
        if y + 3 > area.bottom() {
            break;
        }
        let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);

        let color = match notice.kind {
            NoticeKind::Success => Color::Green,
            NoticeKind::Error => Color::Red,
            NoticeKind::Warning => Color::Yellow,
            NoticeKind::Info => Color::Blue,
        };
        let mut style = Style::default().fg(color);
        if notice.leaving {
            style = style.add_modifier(Modifier::DIM);
        }

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(notice.text.as_str())
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style)),
            rect,
        );
    }
}

fn draw_purge_confirm(frame: &mut ratatui::Frame<'_>, area: Rect) {
    let rect = centered_rect(54, 5, area);
    frame.render_widget(Clear, rect);

    let text = vec![
        Line::from("Delete all files extracted in the last day?"),
        Line::from(Span::styled(
            "y: yes    n: no",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Confirm")
            .border_style(Style::default().fg(Color::Yellow)),
    );
    frame.render_widget(paragraph, rect);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
