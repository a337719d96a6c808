//! Top Attractions page: static attraction records and their cards
//!
//! A card keeps the decoded source image and the backdrop currently on screen.
//! The backdrop is resampled to the card's exact size whenever that size
//! changes, and the card is the only owner of the image being displayed.

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};
use tracing::{debug, warn};

use crate::error::AssetLoadError;

/// Static (name, description, image) triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttractionRecord {
    pub name: &'static str,
    pub description: &'static str,
    /// Image path relative to the assets directory
    pub image: &'static str,
}

/// The attractions shown on the Top Attractions page, in display order
pub static ATTRACTIONS: [AttractionRecord; 3] = [
    AttractionRecord {
        name: "Cox's Bazar Beach",
        description: "Longest natural sandy sea beach.",
        image: "assets/images/coxsbazar.jpg",
    },
    AttractionRecord {
        name: "Sundarbans",
        description: "Largest mangrove forest in the world.",
        image: "assets/images/sundarban.jpg",
    },
    AttractionRecord {
        name: "Ahsan Manzil",
        description: "Historic palace in Dhaka.",
        image: "assets/images/ahsanmanjil.jpg",
    },
];

/// Description wrap width for a card `width` columns wide: floor(0.9 * width)
pub fn wrap_width_for(width: u16) -> u16 {
    (u32::from(width) * 9 / 10) as u16
}

fn load_image(path: &Path) -> Result<DynamicImage, AssetLoadError> {
    if !path.is_file() {
        return Err(AssetLoadError::Missing {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| AssetLoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// One attraction rendered over its background image
#[derive(Debug)]
pub struct AttractionCard {
    record: &'static AttractionRecord,
    /// Decoded image at full resolution; `None` for placeholder cards
    source: Option<DynamicImage>,
    /// Image currently on screen, exactly `size` pixels
    backdrop: Option<RgbImage>,
    /// Why the source image is missing, for placeholder cards
    asset_error: Option<AssetLoadError>,
    size: (u16, u16),
    wrap_width: u16,
}

impl AttractionCard {
    /// Builds a card with an already decoded image
    pub fn with_image(record: &'static AttractionRecord, image: DynamicImage) -> Self {
        Self {
            record,
            source: Some(image),
            backdrop: None,
            asset_error: None,
            size: (0, 0),
            wrap_width: 0,
        }
    }

    /// Builds a card whose image could not be loaded
    pub fn placeholder(record: &'static AttractionRecord, error: AssetLoadError) -> Self {
        Self {
            record,
            source: None,
            backdrop: None,
            asset_error: Some(error),
            size: (0, 0),
            wrap_width: 0,
        }
    }

    /// Loads the record's image from `assets_dir`, failing if it is unreadable
    pub fn try_load(
        record: &'static AttractionRecord,
        assets_dir: &Path,
    ) -> Result<Self, AssetLoadError> {
        let image = load_image(&assets_dir.join(record.image))?;
        Ok(Self::with_image(record, image))
    }

    /// Loads the record's image, degrading to a placeholder card on failure
    pub fn load(record: &'static AttractionRecord, assets_dir: &Path) -> Self {
        match Self::try_load(record, assets_dir) {
            Ok(card) => card,
            Err(err) => {
                warn!(attraction = record.name, error = %err, "using placeholder card");
                Self::placeholder(record, err)
            }
        }
    }

    pub fn record(&self) -> &'static AttractionRecord {
        self.record
    }

    pub fn is_placeholder(&self) -> bool {
        self.source.is_none()
    }

    pub fn asset_error(&self) -> Option<&AssetLoadError> {
        self.asset_error.as_ref()
    }

    /// The image currently displayed, if any
    pub fn backdrop(&self) -> Option<&RgbImage> {
        self.backdrop.as_ref()
    }

    /// Size of the card's bounding box as of the last resize
    pub fn size(&self) -> (u16, u16) {
        self.size
    }

    pub fn wrap_width(&self) -> u16 {
        self.wrap_width
    }

    /// Handles a new bounding box size. Returns `false` if the size is unchanged.
    ///
    /// The source is resampled to exactly `width x height` and the result
    /// replaces the previous backdrop. The description wrap width becomes
    /// floor(0.9 * width).
    pub fn on_resize(&mut self, width: u16, height: u16) -> bool {
        if self.size == (width, height) {
            return false;
        }
        self.size = (width, height);
        self.wrap_width = wrap_width_for(width);
        self.backdrop = match &self.source {
            Some(source) if width > 0 && height > 0 => Some(
                source
                    .resize_exact(u32::from(width), u32::from(height), FilterType::Lanczos3)
                    .to_rgb8(),
            ),
            _ => None,
        };
        debug!(
            attraction = self.record.name,
            width, height, "card resampled"
        );
        true
    }
}

/// Scrollable list of attraction cards
#[derive(Debug)]
pub struct AttractionsPage {
    cards: Vec<AttractionCard>,
    /// Index of the first card on screen
    scroll: usize,
}

impl AttractionsPage {
    /// Builds one card per record in [`ATTRACTIONS`]
    pub fn build(assets_dir: &Path) -> Self {
        Self::from_cards(
            ATTRACTIONS
                .iter()
                .map(|record| AttractionCard::load(record, assets_dir))
                .collect(),
        )
    }

    pub fn from_cards(cards: Vec<AttractionCard>) -> Self {
        Self { cards, scroll: 0 }
    }

    pub fn cards(&self) -> &[AttractionCard] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [AttractionCard] {
        &mut self.cards
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.cards.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.cards.len().saturating_sub(1);
    }
}
