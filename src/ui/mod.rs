//! UI rendering module for the travel guide
//!
//! Lays out the topbar, the optional sidebar and the content area, and
//! records the clickable regions back into the app.

pub mod help_overlay;
pub mod overview;
pub mod placeholder;
pub mod sidebar;
pub mod top_attractions;
pub mod widgets;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;
use crate::pages::PageContent;
use crate::theme::Palette;

/// Topbar height in rows
pub const TOPBAR_HEIGHT: u16 = 3;

const MENU_LABEL: &str = "[ ☰ ]";

/// Renders the whole screen and updates the app's hit areas
pub fn render(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    let area = frame.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TOPBAR_HEIGHT), Constraint::Min(0)])
        .split(area);

    app.hit_areas.menu_button = render_topbar(frame, rows[0], &palette);

    let body = rows[1];
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.content)),
        body,
    );

    let content = if app.shell.sidebar().is_visible() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sidebar::SIDEBAR_WIDTH),
                Constraint::Min(0),
            ])
            .split(body);
        app.hit_areas.sidebar_buttons =
            sidebar::render(frame, columns[0], app.shell.sidebar(), app.layout, &palette);
        columns[1]
    } else {
        app.hit_areas.sidebar_buttons.clear();
        body
    };

    render_content(frame, content, app, &palette);

    if app.show_help {
        help_overlay::render(frame);
    }
}

/// Renders the topbar and returns the menu button's area
fn render_topbar(frame: &mut Frame, area: Rect, palette: &Palette) -> Rect {
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.topbar)),
        area,
    );
    if area.height < 2 {
        return Rect::default();
    }

    let menu_width = MENU_LABEL.chars().count() as u16;
    let row = area.y + area.height / 2;
    let menu = Rect::new(area.x + 1, row, menu_width.min(area.width.saturating_sub(1)), 1);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            MENU_LABEL,
            Style::default().fg(palette.text).bg(palette.accent),
        ),
        Span::raw("  "),
        Span::styled(
            "Travel Guide",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), Rect::new(area.x, row, area.width, 1));

    menu
}

fn render_content(frame: &mut Frame, area: Rect, app: &mut App, palette: &Palette) {
    let Some(page) = app.shell.current_page_mut() else {
        return;
    };
    let inner = Rect {
        y: area.y.saturating_add(1),
        height: area.height.saturating_sub(1),
        ..area
    };

    let id = page.id();
    match page.content_mut() {
        PageContent::Welcome => overview::render(frame, inner, palette),
        PageContent::Attractions(attractions) => {
            top_attractions::render(frame, inner, attractions, palette)
        }
        PageContent::Placeholder => placeholder::render(frame, inner, id, palette),
    }
}
