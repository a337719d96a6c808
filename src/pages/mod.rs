//! Page identifiers and page instances
//!
//! Every page of the guide is named by a [`PageId`]. Each identifier maps to a
//! [`PageKind`], and each kind to a constructor in a fixed table, so the set of
//! page kinds is checked exhaustively by the compiler.

pub mod attractions;

use std::path::PathBuf;

pub use attractions::{AttractionCard, AttractionRecord, AttractionsPage, ATTRACTIONS};

/// The nine pages of the guide, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    Overview,
    TopAttractions,
    Itineraries,
    LocalTransportation,
    Accommodation,
    FoodAndDrink,
    PracticalInfo,
    MapsAndVisuals,
    DayTripsAndHiddenGems,
}

impl PageId {
    /// All pages in the order the sidebar lists them
    pub const ALL: [PageId; 9] = [
        PageId::Overview,
        PageId::TopAttractions,
        PageId::Itineraries,
        PageId::LocalTransportation,
        PageId::Accommodation,
        PageId::FoodAndDrink,
        PageId::PracticalInfo,
        PageId::MapsAndVisuals,
        PageId::DayTripsAndHiddenGems,
    ];

    /// Display title, also used as the sidebar button label
    pub fn title(self) -> &'static str {
        match self {
            PageId::Overview => "Overview",
            PageId::TopAttractions => "Top Attractions",
            PageId::Itineraries => "Itineraries",
            PageId::LocalTransportation => "Local Transportation",
            PageId::Accommodation => "Accommodation",
            PageId::FoodAndDrink => "Food & Drink",
            PageId::PracticalInfo => "Practical Info",
            PageId::MapsAndVisuals => "Maps & Visuals",
            PageId::DayTripsAndHiddenGems => "Day Trips & Hidden Gems",
        }
    }

    /// Looks up a page by title, ignoring case and surrounding whitespace
    pub fn from_title(s: &str) -> Option<PageId> {
        let wanted = s.trim();
        PageId::ALL
            .into_iter()
            .find(|id| id.title().eq_ignore_ascii_case(wanted))
    }

    /// Text shown while the page has no content yet
    pub fn placeholder_text(self) -> String {
        format!("{} page coming soon…", self.title())
    }

    pub fn kind(self) -> PageKind {
        match self {
            PageId::Overview => PageKind::Welcome,
            PageId::TopAttractions => PageKind::Attractions,
            _ => PageKind::Placeholder,
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// What a page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Welcome message and menu hint
    Welcome,
    /// Scrollable list of attraction cards
    Attractions,
    /// "Coming soon" notice
    Placeholder,
}

/// Inputs shared by page constructors
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Directory that attraction image paths are resolved against
    pub assets_dir: PathBuf,
}

/// Kind-specific state of a page
#[derive(Debug)]
pub enum PageContent {
    Welcome,
    Attractions(AttractionsPage),
    Placeholder,
}

type PageConstructor = fn(&PageContext) -> PageContent;

fn build_welcome(_ctx: &PageContext) -> PageContent {
    PageContent::Welcome
}

fn build_attractions(ctx: &PageContext) -> PageContent {
    PageContent::Attractions(AttractionsPage::build(&ctx.assets_dir))
}

fn build_placeholder(_ctx: &PageContext) -> PageContent {
    PageContent::Placeholder
}

fn constructor(kind: PageKind) -> PageConstructor {
    match kind {
        PageKind::Welcome => build_welcome,
        PageKind::Attractions => build_attractions,
        PageKind::Placeholder => build_placeholder,
    }
}

/// A constructed page, owned by the navigation shell's cache
#[derive(Debug)]
pub struct Page {
    id: PageId,
    content: PageContent,
    visible: bool,
}

impl Page {
    /// Builds the page for `id`. New pages start hidden.
    pub fn build(id: PageId, ctx: &PageContext) -> Self {
        Self {
            id,
            content: constructor(id.kind())(ctx),
            visible: false,
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }

    pub fn content(&self) -> &PageContent {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut PageContent {
        &mut self.content
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn scroll_up(&mut self) {
        if let PageContent::Attractions(page) = &mut self.content {
            page.scroll_up();
        }
    }

    pub fn scroll_down(&mut self) {
        if let PageContent::Attractions(page) = &mut self.content {
            page.scroll_down();
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let PageContent::Attractions(page) = &mut self.content {
            page.scroll_to_top();
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        if let PageContent::Attractions(page) = &mut self.content {
            page.scroll_to_bottom();
        }
    }
}
