//! Quiz, game and story pickers

use super::widgets::{frame_layout, render_help, render_title, Menu, TextField};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{Action, View};
use crate::models::catalog::{filter_catalog, CatalogEntry, Listing, GAME_CATALOG, QUIZ_CATALOG};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{ListItem, Paragraph},
    Frame,
};
use tracing::debug;

const QUIZ_CATEGORIES: &[&str] = &["All", "Science", "Math", "Nature", "Reading", "Geography"];
const GAME_CATEGORIES: &[&str] = &["All", "Memory", "Math"];
pub(super) const STORY_CATEGORIES: &[&str] = &[
    "All",
    "Fantasy",
    "Adventure",
    "Sci-Fi",
    "Mystery",
    "Heartwarming",
    "Bedtime",
];

/// Category tabs, a search box and the filtered entries
#[derive(Debug)]
pub(super) struct Picker<T: 'static> {
    view: View,
    catalog: &'static [T],
    categories: &'static [&'static str],
    category: usize,
    search: TextField,
    menu: Menu,
}

impl<T: Listing + 'static> Picker<T> {
    pub(super) fn new(view: View, catalog: &'static [T], categories: &'static [&'static str]) -> Self {
        Self {
            view,
            catalog,
            categories,
            category: 0,
            search: TextField::new("Search"),
            menu: Menu::new(catalog.len()),
        }
    }

    pub(super) fn entries(&self) -> Vec<&'static T> {
        filter_catalog(self.catalog, self.categories[self.category], &self.search.value)
    }

    fn refilter(&mut self) {
        let len = self.entries().len();
        self.menu.resize(len);
    }

    pub(super) fn selected(&self) -> Option<&'static T> {
        self.entries().get(self.menu.selected()).copied()
    }

    pub(super) fn render(&mut self, f: &mut Frame) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, self.view.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Category tabs
                Constraint::Length(3), // Search
                Constraint::Min(3),    // Entries
            ])
            .split(body);

        let tabs: Vec<Span> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if i == self.category {
                    Span::styled(
                        format!(" {} ", name),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw(format!(" {} ", name))
                }
            })
            .collect();
        f.render_widget(Paragraph::new(Line::from(tabs)), rows[0]);
        self.search.render(f, rows[1], true);

        let entries = self.entries();
        let items: Vec<ListItem> = if entries.is_empty() {
            vec![ListItem::new("Nothing found. Try another search!")]
        } else {
            entries.iter().map(|e| ListItem::new(e.row())).collect()
        };
        self.menu.render(f, rows[2], "Pick one", items);

        render_help(
            f,
            help,
            &[("←→", "Category"), ("↑↓", "Navigate"), ("Enter", "Start"), ("Esc", "Back")],
        );
    }

    pub(super) fn handle_key(&mut self, key: KeyEvent) -> Option<Request> {
        match key.code {
            KeyCode::Left => {
                self.category = (self.category + self.categories.len() - 1) % self.categories.len();
                self.refilter();
            }
            KeyCode::Right => {
                self.category = (self.category + 1) % self.categories.len();
                self.refilter();
            }
            KeyCode::Up => self.menu.select_previous(),
            KeyCode::Down => self.menu.select_next(),
            KeyCode::Enter => {
                let entry = self.selected()?;
                debug!(entry = %entry.row(), "picked");
                return Some(Request::Go(Action::Submit));
            }
            KeyCode::Esc => return Some(Request::Go(Action::Back)),
            KeyCode::Backspace => {
                self.search.backspace();
                self.refilter();
            }
            KeyCode::Char(c) => {
                self.search.push(c);
                self.refilter();
            }
            _ => {}
        }
        None
    }
}

/// Quiz catalog with category filter
#[derive(Debug)]
pub struct QuizSelectionScreen {
    picker: Picker<CatalogEntry>,
}

impl QuizSelectionScreen {
    pub fn new() -> Self {
        Self {
            picker: Picker::new(View::QuizSelection, QUIZ_CATALOG, QUIZ_CATEGORIES),
        }
    }
}

impl Default for QuizSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for QuizSelectionScreen {
    fn view(&self) -> View {
        View::QuizSelection
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        self.picker.render(f);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        self.picker.handle_key(key)
    }
}

/// Mini game catalog with category filter
#[derive(Debug)]
pub struct GameSelectionScreen {
    picker: Picker<CatalogEntry>,
}

impl GameSelectionScreen {
    pub fn new() -> Self {
        Self {
            picker: Picker::new(View::GameSelection, GAME_CATALOG, GAME_CATEGORIES),
        }
    }
}

impl Default for GameSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameSelectionScreen {
    fn view(&self) -> View {
        View::GameSelection
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        self.picker.render(f);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        self.picker.handle_key(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{chars, key, render_text, session};

    #[test]
    fn test_category_filter() {
        let session = session();
        let mut screen = QuizSelectionScreen::new();
        assert_eq!(screen.picker.entries().len(), 5);

        screen.picker.handle_key(key(KeyCode::Right));
        screen.picker.handle_key(key(KeyCode::Right));
        let entries = screen.picker.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Number Ninjas");

        let text = render_text(&mut screen, &session);
        assert!(text.contains("Number Ninjas"));
        assert!(!text.contains("Space Explorer"));
    }

    #[test]
    fn test_search_with_no_match_blocks_start() {
        let session = session();
        let ctx = session.context();
        let mut screen = GameSelectionScreen::new();
        for k in chars("zzz") {
            screen.handle_key(k, &ctx);
        }
        assert!(screen.picker.entries().is_empty());
        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());

        for _ in 0..3 {
            screen.handle_key(key(KeyCode::Backspace), &ctx);
        }
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::Submit))
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &ctx),
            Some(Request::Go(Action::Back))
        );
    }

    #[test]
    fn test_left_wraps_to_last_category() {
        let mut screen = GameSelectionScreen::new();
        screen.picker.handle_key(key(KeyCode::Left));
        let entries = screen.picker.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Number Flip");
    }
}
