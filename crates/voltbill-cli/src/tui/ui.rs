use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::app::{App, Focus, Modal};

const LABEL_WIDTH: usize = 16;

/// Render the full TUI frame.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // form
            Constraint::Min(5),    // receipt
            Constraint::Length(1), // key bar
        ])
        .split(f.area());

    render_form(f, app, chunks[0]);
    render_receipt(f, app, chunks[1]);
    render_key_bar(f, chunks[2]);

    if let Some(modal) = &app.modal {
        render_modal(f, modal, f.area());
    }
}

fn field_line(app: &App, field: Focus, value: &str) -> Line<'static> {
    let focused = app.focus == field && app.modal.is_none();
    let label = format!("{:<LABEL_WIDTH$}", format!("{}:", field.label()));
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut spans = vec![
        Span::styled(label, label_style),
        Span::raw(value.to_string()),
    ];
    if focused && field != Focus::Class {
        spans.push(Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }
    Line::from(spans)
}

fn render_form(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Enter Customer Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let input = &app.session.input;
    let class = format!("< {} >", input.class);
    let lines = vec![
        field_line(app, Focus::Name, &input.name),
        field_line(app, Focus::Id, &input.id),
        field_line(app, Focus::Units, &input.units),
        field_line(app, Focus::Class, &class),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_receipt(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Bill Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = app.session.receipt_text();
    let body = if text.is_empty() {
        Paragraph::new("Fill in the form and press Enter to generate a bill")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
    } else {
        Paragraph::new(text.to_string()).scroll((app.receipt_scroll, 0))
    };
    f.render_widget(body.block(block), area);
}

fn render_key_bar(f: &mut Frame, area: Rect) {
    let text = " Enter/F2:generate  ^S/F3:save  ^L/F4:clear  Esc/F10:exit  Tab:next field  \u{2190}/\u{2192}:type";
    let bar = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::White).bg(Color::DarkGray),
    )));
    f.render_widget(bar, area);
}

fn render_modal(f: &mut Frame, modal: &Modal, area: Rect) {
    let (title, body, color) = match modal {
        Modal::Info(msg) => (" Saved ", format!("{msg}\n\n(press any key)"), Color::Green),
        Modal::Error(msg) => (" Error ", format!("{msg}\n\n(press any key)"), Color::Red),
        Modal::ConfirmExit => (" Exit ", "Exit Application? (y/n)".to_string(), Color::Yellow),
    };
    let popup = centered(area, 50, 7);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let para = Paragraph::new(body)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, popup);
    f.render_widget(para, popup);
}

/// A `width` x `height` rect centered in `area`, clipped to it.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}
