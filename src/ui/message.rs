use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::colors::current as current_colors;

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}

/// Message box with a single implied OK button (Enter/Esc).
pub fn render(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = current_colors();
    let rect = centered(area, 50, 7);
    f.render_widget(Clear, rect);
    let body = format!("{content}\n\n[ OK ]");
    let p = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .style(colors.message_style),
        );
    f.render_widget(p, rect);
}
