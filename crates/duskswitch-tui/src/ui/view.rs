use duskswitch_core::presentation::{Element, Presentation};
use ratatui::{
    prelude::{Alignment, Constraint, Direction, Frame, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Horizontal padding around the button label, border included
const BUTTON_PADDING: u16 = 4;
const BUTTON_HEIGHT: u16 = 3;

/// Draw the heading and toggle button centered on a themed surface.
///
/// Returns the area the button occupies so clicks can be hit-tested.
pub fn render_view(frame: &mut Frame, area: Rect, presentation: &Presentation) -> Rect {
    let surface = Block::new()
        .borders(Borders::NONE)
        .style(presentation.style(Element::Surface));
    frame.render_widget(surface, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(presentation.heading)
        .style(presentation.style(Element::Heading))
        .alignment(Alignment::Center);
    frame.render_widget(heading, rows[1]);

    let button_area = centered(rows[3], presentation.button_label.len() as u16 + BUTTON_PADDING);
    let button = Paragraph::new(presentation.button_label)
        .style(presentation.style(Element::Button))
        .alignment(Alignment::Center)
        .block(
            Block::new()
                .borders(Borders::ALL)
                .style(presentation.style(Element::Button)),
        );
    frame.render_widget(button, button_area);

    button_area
}

fn centered(row: Rect, width: u16) -> Rect {
    let width = width.min(row.width);
    Rect::new(
        row.x + (row.width - width) / 2,
        row.y,
        width,
        row.height,
    )
}

/// Whether the cell at (column, row) lies inside `area`
pub fn hit(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.right() && row >= area.y && row < area.bottom()
}
