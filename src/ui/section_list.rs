use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Row};
use crate::ui::colors::{current as current_colors, Colors};

/// Team marker drawn after each name.
pub const MARKER: &str = "●";

/// Render one row: headers as a full-width band, people as
/// `  name ●` with the marker in the team colour.
pub fn row_item(row: &Row, colors: &Colors) -> ListItem<'static> {
    match row {
        Row::Header(title) => ListItem::new(Line::from(Span::raw(format!(" {title}"))))
            .style(colors.section_header_style),
        Row::Person { person, fresh } => {
            let name = if *fresh {
                Span::styled(person.name.clone(), colors.fresh_style)
            } else {
                Span::raw(person.name.clone())
            };
            ListItem::new(Line::from(vec![
                Span::raw("  "),
                name,
                Span::raw(" "),
                Span::styled(MARKER, colors.team_style(person.team)),
            ]))
        }
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let colors = current_colors();
    let rows = app.rows();
    let items: Vec<ListItem> = rows.iter().map(|r| row_item(r, &colors)).collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.title()))
                .style(colors.list_block_style),
        )
        .highlight_style(colors.selected_style);
    let mut state = ListState::default()
        .with_offset(app.offset)
        .with_selected((!rows.is_empty()).then_some(app.selected));
    f.render_stateful_widget(list, area, &mut state);
}
