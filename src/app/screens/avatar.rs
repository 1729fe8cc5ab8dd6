//! Avatar creation wizard and editor

use super::widgets::{frame_layout, render_help, render_title, status_line, Menu, TextField};
use super::Screen;
use crate::app::session::{AvatarUpdate, Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::models::catalog::{
    body_emoji, AvatarOption, ACCESSORY_OPTIONS, BODY_OPTIONS, HAIR_OPTIONS, OUTFIT_OPTIONS,
};
use crate::models::Profile;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

/// Steps of the creation wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationStep {
    Name,
    Body,
    Hair,
    Outfit,
}

impl CreationStep {
    fn options(&self) -> &'static [AvatarOption] {
        match self {
            CreationStep::Name => &[],
            CreationStep::Body => BODY_OPTIONS,
            CreationStep::Hair => HAIR_OPTIONS,
            CreationStep::Outfit => OUTFIT_OPTIONS,
        }
    }

    fn prompt(&self) -> &'static str {
        match self {
            CreationStep::Name => "What's your name?",
            CreationStep::Body => "Pick your look!",
            CreationStep::Hair => "Choose your hairstyle!",
            CreationStep::Outfit => "Pick your outfit!",
        }
    }
}

/// First-time avatar setup: name, then body, hair and outfit
#[derive(Debug)]
pub struct AvatarCreationScreen {
    step: CreationStep,
    name: TextField,
    menu: Menu,
}

impl AvatarCreationScreen {
    pub fn new(profile: &Profile) -> Self {
        let mut name = TextField::new("Name");
        name.value = profile.name.clone();
        Self {
            step: CreationStep::Name,
            name,
            menu: Menu::new(0),
        }
    }

    pub fn step(&self) -> CreationStep {
        self.step
    }

    fn go_to(&mut self, step: CreationStep) {
        self.step = step;
        self.menu = Menu::new(step.options().len());
    }

    fn choose(&mut self) -> Option<Request> {
        let id = self.step.options().get(self.menu.selected())?.id.to_string();
        match self.step {
            CreationStep::Name => None,
            CreationStep::Body => {
                self.go_to(CreationStep::Hair);
                Some(Request::UpdateAvatar(AvatarUpdate {
                    body: Some(id),
                    ..AvatarUpdate::default()
                }))
            }
            CreationStep::Hair => {
                self.go_to(CreationStep::Outfit);
                Some(Request::UpdateAvatar(AvatarUpdate {
                    hair: Some(id),
                    ..AvatarUpdate::default()
                }))
            }
            CreationStep::Outfit => Some(Request::SaveAvatar(AvatarUpdate {
                outfit: Some(id),
                ..AvatarUpdate::default()
            })),
        }
    }
}

impl Screen for AvatarCreationScreen {
    fn view(&self) -> View {
        View::AvatarCreation
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::AvatarCreation.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(body);

        let preview = format!(
            "{}  {}",
            body_emoji(&ctx.profile.avatar.body),
            self.step.prompt()
        );
        f.render_widget(
            Paragraph::new(preview).style(Style::default().add_modifier(Modifier::BOLD)),
            rows[0],
        );

        if self.step == CreationStep::Name {
            let field_area = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(rows[1]);
            self.name.render(f, field_area[0], true);
            render_help(f, help, &[("Enter", "Next")]);
            return;
        }

        let items = self
            .step
            .options()
            .iter()
            .map(|o| ListItem::new(format!("{}  {}", o.emoji, o.label)))
            .collect();
        self.menu.render(f, rows[1], "Options", items);
        render_help(f, help, &[("↑↓", "Navigate"), ("Enter", "Choose")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if self.step == CreationStep::Name {
            match key.code {
                KeyCode::Enter => {
                    let name = self.name.value.trim().to_string();
                    if name.is_empty() {
                        return None;
                    }
                    self.go_to(CreationStep::Body);
                    return Some(Request::UpdateAvatar(AvatarUpdate {
                        name: Some(name),
                        ..AvatarUpdate::default()
                    }));
                }
                KeyCode::Backspace => self.name.backspace(),
                KeyCode::Char(c) => self.name.push(c),
                _ => {}
            }
            return None;
        }

        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select => return self.choose(),
            _ => {}
        }
        None
    }
}

const EDITOR_ROWS: [&str; 4] = ["Look", "Hair", "Outfit", "Accessories"];

/// Change an existing avatar from the dashboard
#[derive(Debug)]
pub struct AvatarEditorScreen {
    row: usize,
    choice: [usize; 3],
    accessory_cursor: usize,
    accessories: Vec<String>,
}

impl AvatarEditorScreen {
    pub fn new(profile: &Profile) -> Self {
        let index_of = |options: &[AvatarOption], id: &str| {
            options.iter().position(|o| o.id == id).unwrap_or(0)
        };
        Self {
            row: 0,
            choice: [
                index_of(BODY_OPTIONS, &profile.avatar.body),
                index_of(HAIR_OPTIONS, &profile.avatar.hair),
                index_of(OUTFIT_OPTIONS, &profile.avatar.outfit),
            ],
            accessory_cursor: 0,
            accessories: profile.avatar.accessories.clone(),
        }
    }

    fn row_options(row: usize) -> &'static [AvatarOption] {
        match row {
            0 => BODY_OPTIONS,
            1 => HAIR_OPTIONS,
            2 => OUTFIT_OPTIONS,
            _ => ACCESSORY_OPTIONS,
        }
    }

    fn cycle(&mut self, forward: bool) {
        let len = Self::row_options(self.row).len();
        let slot = if self.row < 3 {
            &mut self.choice[self.row]
        } else {
            &mut self.accessory_cursor
        };
        *slot = if forward {
            (*slot + 1) % len
        } else {
            (*slot + len - 1) % len
        };
    }

    fn toggle_accessory(&mut self) {
        let id = ACCESSORY_OPTIONS[self.accessory_cursor].id;
        if let Some(pos) = self.accessories.iter().position(|a| a == id) {
            self.accessories.remove(pos);
        } else {
            self.accessories.push(id.to_string());
        }
    }

    fn update(&self) -> AvatarUpdate {
        AvatarUpdate {
            name: None,
            body: Some(BODY_OPTIONS[self.choice[0]].id.to_string()),
            hair: Some(HAIR_OPTIONS[self.choice[1]].id.to_string()),
            outfit: Some(OUTFIT_OPTIONS[self.choice[2]].id.to_string()),
            accessories: Some(self.accessories.clone()),
        }
    }

    fn row_line(&self, row: usize) -> Line<'static> {
        let value = if row < 3 {
            let option = Self::row_options(row)[self.choice[row]];
            format!("◀ {} {} ▶", option.emoji, option.label)
        } else {
            let option = ACCESSORY_OPTIONS[self.accessory_cursor];
            let worn = self.accessories.iter().any(|a| a == option.id);
            format!(
                "◀ {} {} {} ▶",
                option.emoji,
                option.label,
                if worn { "(wearing)" } else { "" }
            )
        };
        let style = if row == self.row {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{:<12}", EDITOR_ROWS[row]), style),
            Span::raw(" "),
            Span::raw(value),
        ])
    }
}

impl Screen for AvatarEditorScreen {
    fn view(&self) -> View {
        View::AvatarEditor
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::AvatarEditor.title());

        let mut lines = vec![
            Line::from(format!(
                "{}  {}",
                BODY_OPTIONS[self.choice[0]].emoji,
                if ctx.profile.name.is_empty() { "Explorer" } else { ctx.profile.name.as_str() }
            )),
            Line::from(""),
        ];
        lines.extend((0..EDITOR_ROWS.len()).map(|row| self.row_line(row)));
        if !self.accessories.is_empty() {
            lines.push(Line::from(""));
            lines.push(status_line(&format!("Wearing: {}", self.accessories.join(", ")), false));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Customize")),
            body,
        );
        render_help(
            f,
            help,
            &[("↑↓", "Row"), ("←→", "Change"), ("Space", "Wear"), ("Enter", "Save"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if key.code == KeyCode::Char(' ') {
            if self.row == 3 {
                self.toggle_accessory();
            }
            return None;
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.row = (self.row + EDITOR_ROWS.len() - 1) % EDITOR_ROWS.len(),
            NavigationAction::Down => self.row = (self.row + 1) % EDITOR_ROWS.len(),
            NavigationAction::Left => self.cycle(false),
            NavigationAction::Right => self.cycle(true),
            NavigationAction::Select => return Some(Request::SaveAvatar(self.update())),
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{chars, key, session};

    #[test]
    fn test_creation_wizard() {
        let session = session();
        let ctx = session.context();
        let mut screen = AvatarCreationScreen::new(ctx.profile);

        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        for k in chars("  Zoe ") {
            screen.handle_key(k, &ctx);
        }
        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::UpdateAvatar(update)) => assert_eq!(update.name.as_deref(), Some("Zoe")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(screen.step(), CreationStep::Body);

        screen.handle_key(key(KeyCode::Down), &ctx);
        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::UpdateAvatar(update)) => assert_eq!(update.body.as_deref(), Some("happy")),
            other => panic!("unexpected {:?}", other),
        }

        screen.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(screen.step(), CreationStep::Outfit);

        screen.handle_key(key(KeyCode::Up), &ctx);
        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::SaveAvatar(update)) => {
                assert_eq!(update.outfit.as_deref(), Some("superhero"))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_editor_starts_from_profile() {
        let mut profile = Profile::new();
        profile.avatar.hair = "curly".to_string();
        let screen = AvatarEditorScreen::new(&profile);
        assert_eq!(screen.update().hair.as_deref(), Some("curly"));
        assert_eq!(screen.update().body.as_deref(), Some("default"));
    }

    #[test]
    fn test_editor_cycles_and_saves() {
        let session = session();
        let ctx = session.context();
        let mut screen = AvatarEditorScreen::new(ctx.profile);

        screen.handle_key(key(KeyCode::Left), &ctx);
        for _ in 0..3 {
            screen.handle_key(key(KeyCode::Down), &ctx);
        }
        screen.handle_key(key(KeyCode::Right), &ctx);
        screen.handle_key(key(KeyCode::Char(' ')), &ctx);

        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::SaveAvatar(update)) => {
                assert_eq!(update.body.as_deref(), Some("star"));
                assert_eq!(update.accessories, Some(vec!["crown".to_string()]));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &ctx),
            Some(Request::Go(Action::Back))
        );
    }
}
