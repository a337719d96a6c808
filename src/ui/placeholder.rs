//! "Coming soon" page for sections without content yet

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

use crate::pages::PageId;
use crate::theme::Palette;

pub fn render(frame: &mut Frame, area: Rect, page: PageId, palette: &Palette) {
    if area.height < 5 {
        return;
    }
    let line = Rect::new(area.x, area.y + 4, area.width, 1);
    frame.render_widget(
        Paragraph::new(page.placeholder_text())
            .style(Style::default().fg(palette.text))
            .alignment(Alignment::Center),
        line,
    );
}
