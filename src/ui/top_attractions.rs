//! Top Attractions page: heading and a scrollable column of cards

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::pages::AttractionsPage;
use crate::theme::Palette;
use crate::ui::widgets::CardView;

/// Rows per card
pub const CARD_HEIGHT: u16 = 7;
/// Columns of padding left and right of each card
pub const CARD_PADDING: u16 = 2;
/// Rows taken by the heading and the blank row under it
const HEADING_HEIGHT: u16 = 2;

/// Areas of the cards that fit on screen, starting at card `scroll`.
/// Only whole cards are placed.
pub fn card_areas(area: Rect, count: usize, scroll: usize) -> Vec<(usize, Rect)> {
    let width = area.width.saturating_sub(CARD_PADDING * 2);
    if width == 0 {
        return Vec::new();
    }

    let bottom = area.bottom();
    let mut y = area.y.saturating_add(HEADING_HEIGHT);
    let mut areas = Vec::new();
    for index in scroll..count {
        if y.saturating_add(CARD_HEIGHT) > bottom {
            break;
        }
        areas.push((index, Rect::new(area.x + CARD_PADDING, y, width, CARD_HEIGHT)));
        y = y.saturating_add(CARD_HEIGHT + 1);
    }
    areas
}

pub fn render(frame: &mut Frame, area: Rect, page: &mut AttractionsPage, palette: &Palette) {
    if area.height == 0 {
        return;
    }

    let count = page.cards().len();
    let placed = card_areas(area, count, page.scroll());

    let mut heading = vec![Span::styled(
        "Top Attractions",
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    )];
    if placed.len() < count {
        let first = placed.first().map_or(page.scroll(), |(i, _)| *i);
        heading.push(Span::styled(
            format!("  ({}-{} of {}, j/k to scroll)", first + 1, first + placed.len(), count),
            Style::default().fg(palette.muted),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(heading)).alignment(Alignment::Center),
        Rect::new(area.x, area.y, area.width, 1),
    );

    let cards = page.cards_mut();
    for (index, rect) in placed {
        frame.render_stateful_widget(CardView::new(palette), rect, &mut cards[index]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetLoadError;
    use crate::pages::{AttractionCard, ATTRACTIONS};
    use crate::theme::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn placeholder_page() -> AttractionsPage {
        AttractionsPage::from_cards(
            ATTRACTIONS
                .iter()
                .map(|record| {
                    AttractionCard::placeholder(
                        record,
                        AssetLoadError::Missing {
                            path: record.image.into(),
                        },
                    )
                })
                .collect(),
        )
    }

    #[test]
    fn test_card_areas_stack_with_gap() {
        let areas = card_areas(Rect::new(0, 3, 80, 40), 3, 0);
        assert_eq!(
            areas,
            vec![
                (0, Rect::new(2, 5, 76, 7)),
                (1, Rect::new(2, 13, 76, 7)),
                (2, Rect::new(2, 21, 76, 7)),
            ]
        );
    }

    #[test]
    fn test_card_areas_only_whole_cards() {
        // 2 heading rows + 7 + 1 + 7 = 17; the third card would need 25
        let areas = card_areas(Rect::new(0, 0, 40, 20), 3, 0);
        assert_eq!(areas.len(), 2);
    }

    #[test]
    fn test_card_areas_start_at_scroll() {
        let areas = card_areas(Rect::new(0, 0, 40, 40), 3, 2);
        assert_eq!(areas, vec![(2, Rect::new(2, 2, 36, 7))]);
    }

    #[test]
    fn test_card_areas_empty_when_too_narrow() {
        assert!(card_areas(Rect::new(0, 0, 4, 40), 3, 0).is_empty());
    }

    #[test]
    fn test_render_shows_cards_in_order() {
        let backend = TestBackend::new(60, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();
        let mut page = placeholder_page();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &mut page, &palette)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        let cox = content.find("Cox's Bazar Beach").expect("first card");
        let sundarbans = content.find("Sundarbans").expect("second card");
        let ahsan = content.find("Ahsan Manzil").expect("third card");
        assert!(cox < sundarbans && sundarbans < ahsan);
        assert!(content.contains("Top Attractions"));

        for card in page.cards() {
            assert_eq!(card.size(), (56, CARD_HEIGHT));
        }
    }

    #[test]
    fn test_render_shows_scroll_hint_when_cards_are_hidden() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let palette = Theme::Dark.palette();
        let mut page = placeholder_page();

        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, &mut page, &palette)
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let content: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        assert!(content.contains("(1-1 of 3"));
        // Cards off screen are never resized
        assert_eq!(page.cards()[1].size(), (0, 0));
    }
}
