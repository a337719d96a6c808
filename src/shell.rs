//! Navigation shell: the page cache and the sidebar menu
//!
//! Pages are built on first navigation and cached for the life of the
//! process. Exactly one cached page is visible at a time.

use std::collections::HashMap;

use tracing::info;

use crate::pages::{Page, PageContext, PageId};

/// Whether the sidebar is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SidebarVisibility {
    #[default]
    Hidden,
    Visible,
}

/// A sidebar button bound to the page it opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton {
    pub label: &'static str,
    pub target: PageId,
}

impl NavButton {
    pub fn new(target: PageId) -> Self {
        Self {
            label: target.title(),
            target,
        }
    }
}

/// Sidebar state. Buttons are built on first reveal.
#[derive(Debug, Default)]
pub struct Sidebar {
    visibility: SidebarVisibility,
    buttons: Option<Vec<NavButton>>,
    /// Keyboard cursor over the buttons
    cursor: usize,
}

impl Sidebar {
    pub fn visibility(&self) -> SidebarVisibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == SidebarVisibility::Visible
    }

    /// Buttons in menu order; empty until the sidebar is first shown
    pub fn buttons(&self) -> &[NavButton] {
        self.buttons.as_deref().unwrap_or(&[])
    }

    pub fn is_built(&self) -> bool {
        self.buttons.is_some()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor up, wrapping to the last button
    pub fn cursor_up(&mut self) {
        let count = self.buttons().len();
        if count == 0 {
            return;
        }
        if self.cursor == 0 {
            self.cursor = count - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor down, wrapping to the first button
    pub fn cursor_down(&mut self) {
        let count = self.buttons().len();
        if count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1) % count;
    }

    fn build(&mut self) {
        if self.buttons.is_some() {
            return;
        }
        let buttons: Vec<NavButton> = PageId::ALL.into_iter().map(NavButton::new).collect();
        info!(count = buttons.len(), "sidebar buttons built");
        self.buttons = Some(buttons);
    }
}

/// Owns the page cache and the sidebar
#[derive(Debug)]
pub struct NavigationShell {
    context: PageContext,
    pages: HashMap<PageId, Box<Page>>,
    current: Option<PageId>,
    sidebar: Sidebar,
}

impl NavigationShell {
    /// Creates a shell with an empty cache, no current page and a hidden sidebar
    pub fn new(context: PageContext) -> Self {
        Self {
            context,
            pages: HashMap::new(),
            current: None,
            sidebar: Sidebar::default(),
        }
    }

    /// Makes `id` the only visible page, building it on first use.
    ///
    /// Repeated calls for the same id return the same cached instance.
    pub fn show_page(&mut self, id: PageId) -> &mut Page {
        for page in self.pages.values_mut() {
            page.set_visible(false);
        }

        let context = &self.context;
        let page = self.pages.entry(id).or_insert_with(|| {
            info!(page = id.title(), "page constructed");
            Box::new(Page::build(id, context))
        });
        page.set_visible(true);
        self.current = Some(id);
        page
    }

    /// Flips sidebar visibility, building its buttons on first reveal
    pub fn toggle_sidebar(&mut self) -> SidebarVisibility {
        self.sidebar.visibility = match self.sidebar.visibility {
            SidebarVisibility::Hidden => {
                self.sidebar.build();
                SidebarVisibility::Visible
            }
            SidebarVisibility::Visible => SidebarVisibility::Hidden,
        };
        info!(visibility = ?self.sidebar.visibility, "sidebar toggled");
        self.sidebar.visibility
    }

    /// Presses the sidebar button at `index`, opening the page bound to it
    pub fn press_button(&mut self, index: usize) -> Option<PageId> {
        let button = *self.sidebar.buttons().get(index)?;
        self.sidebar.cursor = index;
        self.show_page(button.target);
        Some(button.target)
    }

    /// Presses the button under the sidebar cursor
    pub fn press_selected(&mut self) -> Option<PageId> {
        self.press_button(self.sidebar.cursor)
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn current(&self) -> Option<PageId> {
        self.current
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.and_then(|id| self.page(id))
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        let id = self.current?;
        self.pages.get_mut(&id).map(|page| &mut **page)
    }

    /// Cached page for `id`, if it has been built
    pub fn page(&self, id: PageId) -> Option<&Page> {
        self.pages.get(&id).map(|page| &**page)
    }

    pub fn cached_count(&self) -> usize {
        self.pages.len()
    }

    /// Ids of every cached page currently marked visible
    pub fn visible_pages(&self) -> Vec<PageId> {
        let mut ids: Vec<PageId> = self
            .pages
            .values()
            .filter(|page| page.is_visible())
            .map(|page| page.id())
            .collect();
        ids.sort();
        ids
    }
}
