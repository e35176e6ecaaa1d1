use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Renders the current page of the demo deck.
pub struct PageWidget;

impl PageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(page) = app.pages.get(app.current_page) else {
            return;
        };

        let block = Block::default()
            .title(format!(
                " {} ({}/{}) ",
                page.title,
                app.current_page + 1,
                app.pages.len()
            ))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(app.theme.grey))
            .style(Style::default().bg(app.theme.bg0))
            .title_style(
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Center the copy vertically in the page body.
        let lines: Vec<Line> = page
            .lines
            .iter()
            .map(|l| Line::from(l.as_str()))
            .collect();
        let top_gap = inner.height.saturating_sub(lines.len() as u16) / 2;
        let body = Rect::new(
            inner.x,
            inner.y + top_gap,
            inner.width,
            inner.height.saturating_sub(top_gap),
        );

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.fg0));
        frame.render_widget(paragraph, body);
    }
}
