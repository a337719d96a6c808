//! Sidebar menu rendering
//!
//! Two layouts: a stacked list with a blank row between buttons, and a grid of
//! equal-height bordered cells.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::shell::Sidebar;
use crate::theme::{Palette, SidebarLayout};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 30;

/// Renders the sidebar and returns one hit rect per button
pub fn render(
    frame: &mut Frame,
    area: Rect,
    sidebar: &Sidebar,
    layout: SidebarLayout,
    palette: &Palette,
) -> Vec<Rect> {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().bg(palette.sidebar));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 || inner.width < 4 {
        return vec![Rect::default(); sidebar.buttons().len()];
    }

    let heading = Rect::new(inner.x + 1, inner.y + 1, inner.width - 1, 1);
    frame.render_widget(
        Paragraph::new("Menu").style(
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        heading,
    );

    let list_area = Rect {
        x: inner.x + 1,
        y: inner.y + 3,
        width: inner.width.saturating_sub(2),
        height: inner.height.saturating_sub(3),
    };

    let rects = match layout {
        SidebarLayout::Stack => stack_rects(list_area, sidebar.buttons().len()),
        SidebarLayout::Grid => grid_rects(list_area, sidebar.buttons().len()),
    };

    for (index, (button, rect)) in sidebar.buttons().iter().zip(&rects).enumerate() {
        if rect.area() == 0 {
            continue;
        }
        let selected = index == sidebar.cursor();
        let style = if selected {
            Style::default()
                .fg(palette.text)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        let widget = Paragraph::new(format!(" {}", button.label)).style(style);
        match layout {
            SidebarLayout::Grid if rect.height >= 3 => {
                let border = if selected { palette.accent } else { palette.muted };
                frame.render_widget(
                    widget.block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(border)),
                    ),
                    *rect,
                );
            }
            _ => frame.render_widget(widget, *rect),
        }
    }

    rects
}

/// One-row buttons separated by a blank row; buttons below the area are empty
fn stack_rects(area: Rect, count: usize) -> Vec<Rect> {
    (0..count)
        .map(|i| {
            let offset = (i as u16).saturating_mul(2);
            if offset < area.height {
                Rect::new(area.x, area.y + offset, area.width, 1)
            } else {
                Rect::default()
            }
        })
        .collect()
}

/// Equal-height cells filling the area
fn grid_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints = vec![Constraint::Ratio(1, count as u32); count];
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .iter()
        .copied()
        .collect()
}
