//! Attraction card widget: title and description over a background image

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Paragraph, StatefulWidget, Widget, Wrap},
};

use crate::pages::AttractionCard;
use crate::theme::Palette;

const FALLBACK_NOTE: &str = "image unavailable";

/// Draws an [`AttractionCard`], resizing it to the area first
pub struct CardView<'a> {
    palette: &'a Palette,
}

impl<'a> CardView<'a> {
    pub fn new(palette: &'a Palette) -> Self {
        Self { palette }
    }
}

/// Offset of `percent` % into a span of `len` cells
fn rel(len: u16, percent: u32) -> u16 {
    (u32::from(len) * percent / 100) as u16
}

impl<'a> StatefulWidget for CardView<'a> {
    type State = AttractionCard;

    fn render(self, area: Rect, buf: &mut Buffer, card: &mut AttractionCard) {
        // Resample before painting so this frame already shows the new scale
        card.on_resize(area.width, area.height);

        if area.width == 0 || area.height == 0 {
            return;
        }

        let text_color = match card.backdrop() {
            Some(backdrop) => {
                for (x, y, px) in backdrop.enumerate_pixels() {
                    if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
                        cell.set_char(' ').set_bg(Color::Rgb(px[0], px[1], px[2]));
                    }
                }
                Color::White
            }
            None => {
                buf.set_style(area, Style::default().bg(self.palette.card_fallback));
                if card.is_placeholder() {
                    let note_width = FALLBACK_NOTE.len() as u16;
                    if area.width > note_width + 1 {
                        buf.set_string(
                            area.right() - note_width - 1,
                            area.bottom() - 1,
                            FALLBACK_NOTE,
                            Style::default().fg(self.palette.muted),
                        );
                    }
                }
                self.palette.text
            }
        };

        let record = card.record();
        let text_x = area.x + rel(area.width, 5);
        let available = area.right().saturating_sub(text_x);

        buf.set_stringn(
            text_x,
            area.y + rel(area.height, 5),
            record.name,
            available as usize,
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        );

        let desc_y = area.y + rel(area.height, 25);
        let desc_area = Rect {
            x: text_x,
            y: desc_y,
            width: card.wrap_width().min(available),
            height: area.bottom().saturating_sub(desc_y),
        };
        if desc_area.width > 0 && desc_area.height > 0 {
            Paragraph::new(record.description)
                .style(Style::default().fg(text_color))
                .wrap(Wrap { trim: true })
                .render(desc_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AssetLoadError;
    use crate::pages::ATTRACTIONS;
    use crate::theme::Theme;
    use image::{DynamicImage, Rgb, RgbImage};

    fn red_card() -> AttractionCard {
        AttractionCard::with_image(
            &ATTRACTIONS[0],
            DynamicImage::ImageRgb8(RgbImage::from_pixel(32, 16, Rgb([200, 10, 10]))),
        )
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.right())
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_resizes_card_to_area() {
        let palette = Theme::Dark.palette();
        let mut card = red_card();
        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);

        CardView::new(&palette).render(area, &mut buf, &mut card);

        assert_eq!(card.size(), (40, 7));
        assert_eq!(card.backdrop().unwrap().dimensions(), (40, 7));
        assert_eq!(card.wrap_width(), 36);
    }

    #[test]
    fn test_render_paints_backdrop_under_text() {
        let palette = Theme::Dark.palette();
        let mut card = red_card();
        let area = Rect::new(0, 0, 40, 7);
        let mut buf = Buffer::empty(area);

        CardView::new(&palette).render(area, &mut buf, &mut card);

        // Corner pixel and a title cell both keep the image colour as background
        assert!(matches!(buf[(39, 6)].bg, Color::Rgb(r, _, _) if r > 150));
        assert!(matches!(buf[(2, 0)].bg, Color::Rgb(r, _, _) if r > 150));
        assert!(row_text(&buf, 0).contains("Cox's Bazar Beach"));
        assert!(row_text(&buf, 1).contains("Longest natural sandy sea beach."));
    }

    #[test]
    fn test_description_wraps_at_ninety_percent() {
        let palette = Theme::Dark.palette();
        let mut card = red_card();
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);

        CardView::new(&palette).render(area, &mut buf, &mut card);

        // wrap width 18 starting at column 1: nothing is written past column 18
        assert_eq!(card.wrap_width(), 18);
        for y in 2..8 {
            assert_eq!(buf[(19, y)].symbol(), " ");
        }
        assert!(row_text(&buf, 2).contains("Longest natural"));
    }

    #[test]
    fn test_placeholder_card_renders_note_and_text() {
        let palette = Theme::Light.palette();
        let mut card = AttractionCard::placeholder(
            &ATTRACTIONS[1],
            AssetLoadError::Missing {
                path: "sundarban.jpg".into(),
            },
        );
        let area = Rect::new(0, 0, 50, 7);
        let mut buf = Buffer::empty(area);

        CardView::new(&palette).render(area, &mut buf, &mut card);

        assert_eq!(buf[(0, 0)].bg, palette.card_fallback);
        assert!(row_text(&buf, 0).contains("Sundarbans"));
        assert!(row_text(&buf, 6).contains("image unavailable"));
    }
}
