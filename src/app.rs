//! Application state for the travel guide
//!
//! This module owns the navigation shell and the appearance settings, and
//! turns keyboard and mouse events into navigation.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::debug;

use crate::config::Config;
use crate::pages::PageContext;
use crate::shell::NavigationShell;
use crate::theme::{SidebarLayout, Theme};

/// Screen regions that respond to clicks, recorded by the last draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub menu_button: Rect,
    /// One rect per sidebar button, in button order; empty rects are off screen
    pub sidebar_buttons: Vec<Rect>,
}

fn hit(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Main application struct
pub struct App {
    pub shell: NavigationShell,
    pub theme: Theme,
    pub layout: SidebarLayout,
    /// Flag to show help overlay
    pub show_help: bool,
    /// Flag indicating the application should quit
    pub should_quit: bool,
    pub hit_areas: HitAreas,
}

impl App {
    /// Creates the app and opens the configured start page
    pub fn new(config: &Config) -> Self {
        let mut shell = NavigationShell::new(PageContext {
            assets_dir: config.assets_dir.clone(),
        });
        shell.show_page(config.start_page);
        Self {
            shell,
            theme: config.theme,
            layout: config.layout,
            show_help: false,
            should_quit: false,
            hit_areas: HitAreas::default(),
        }
    }

    /// Dispatches a terminal event. Resizes need no handling here: cards pick
    /// up their new size on the next draw.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    /// Handles keyboard input
    ///
    /// # Key Bindings
    /// - `q` / `Ctrl-C`: Quit
    /// - `m`: Toggle the sidebar
    /// - `Up`/`k`, `Down`/`j`: Move the sidebar cursor, or scroll the page
    ///   while the sidebar is hidden
    /// - `Enter`: Open the page under the sidebar cursor
    /// - `g`/`G`: Scroll to top/bottom
    /// - `Esc`: Close help, else hide the sidebar
    /// - `?`: Toggle help
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        // Help overlay intercepts all keys when shown
        if self.show_help {
            if matches!(
                key_event.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        let sidebar_open = self.shell.sidebar().is_visible();
        match key_event.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('m') => {
                self.shell.toggle_sidebar();
            }
            KeyCode::Esc => {
                if sidebar_open {
                    self.shell.toggle_sidebar();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if sidebar_open {
                    self.shell.sidebar_mut().cursor_up();
                } else if let Some(page) = self.shell.current_page_mut() {
                    page.scroll_up();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if sidebar_open {
                    self.shell.sidebar_mut().cursor_down();
                } else if let Some(page) = self.shell.current_page_mut() {
                    page.scroll_down();
                }
            }
            KeyCode::Enter => {
                if sidebar_open {
                    self.shell.press_selected();
                }
            }
            KeyCode::Char('g') => {
                if let Some(page) = self.shell.current_page_mut() {
                    page.scroll_to_top();
                }
            }
            KeyCode::Char('G') => {
                if let Some(page) = self.shell.current_page_mut() {
                    page.scroll_to_bottom();
                }
            }
            _ => {}
        }
    }

    /// Handles left clicks on the menu button and sidebar buttons
    pub fn handle_mouse(&mut self, mouse_event: MouseEvent) {
        if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) || self.show_help {
            return;
        }
        let (column, row) = (mouse_event.column, mouse_event.row);

        if hit(self.hit_areas.menu_button, column, row) {
            self.shell.toggle_sidebar();
            return;
        }

        if !self.shell.sidebar().is_visible() {
            return;
        }
        let pressed = self
            .hit_areas
            .sidebar_buttons
            .iter()
            .position(|rect| hit(*rect, column, row));
        if let Some(index) = pressed {
            let opened = self.shell.press_button(index);
            debug!(index, page = ?opened, "sidebar button clicked");
        }
    }
}
