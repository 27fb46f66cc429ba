use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

use crate::app::App;
use crate::ui::colors::current as current_colors;

/// One-line title bar: screen title, head count, and either the summary of
/// the last update or a marker while one is still being computed.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let mut spans = vec![
        Span::styled(format!(" {} ", app.title()), colors.title_style),
        Span::raw(format!(" {} people", app.people.len())),
    ];
    let summary = app.last_summary();
    if app.is_pending() {
        spans.push(Span::raw("  (updating)"));
    } else if !summary.is_empty() {
        spans.push(Span::raw(format!("  {summary}")));
    }
    let p = Paragraph::new(Line::from(spans)).style(colors.footer_style);
    f.render_widget(p, area);
}
