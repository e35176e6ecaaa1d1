use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

const KEYS: &[(&str, &str)] = &[
    ("h / l, ← / →", "previous / next page"),
    ("1-9", "jump to page"),
    ("g / G", "first / last page"),
    ("s / S", "cycle animation style"),
    ("i", "toggle interactive scrubbing"),
    ("o", "flip orientation"),
    ("+ / -", "add / remove a page"),
    ("click", "jump to a dot's page"),
    ("drag", "scrub between pages"),
    ("?", "toggle this help"),
    ("q", "quit"),
];

/// Centered help overlay listing the keybindings.
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let width = 44u16.min(area.width.saturating_sub(4));
        let height = (KEYS.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup = centered_rect(width, height, area);

        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.accent))
            .style(Style::default().bg(app.theme.bg1));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let lines: Vec<Line> = KEYS
            .iter()
            .map(|(key, what)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", key),
                        Style::default()
                            .fg(app.theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*what, Style::default().fg(app.theme.fg0)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
