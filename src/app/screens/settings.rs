//! Parent settings: screen time, content safety and the account
//!
//! Each screen edits its own copy of the parental controls and hands the
//! whole set back with [`Request::SaveControls`] when the parent saves.

use super::widgets::{frame_layout, render_help, render_title, status_line, toggle_item, Menu};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::models::ParentalControls;
use crate::util::format_minutes;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{ListItem, Paragraph},
    Frame,
};

const SAVED: &str = "Settings saved!";

/// Common editing state of the settings screens
#[derive(Debug)]
struct Draft {
    controls: ParentalControls,
    menu: Menu,
    notice: Option<&'static str>,
}

impl Draft {
    fn new(controls: &ParentalControls, rows: usize) -> Self {
        Self {
            controls: controls.clone(),
            menu: Menu::new(rows),
            notice: None,
        }
    }

    fn save(&mut self) -> Request {
        self.notice = Some(SAVED);
        Request::SaveControls(self.controls.clone())
    }

    fn touched(&mut self) {
        self.notice = None;
    }

    fn render_notice(&self, f: &mut Frame, area: Rect) {
        if let Some(notice) = self.notice {
            f.render_widget(Paragraph::new(status_line(notice, false)), area);
        }
    }
}

/// Split the body into the settings list and a one-line footer
fn body_rows(body: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(1)])
        .split(body);
    (rows[0], rows[1])
}

/// Daily limit, bedtime and schedule blocks
#[derive(Debug)]
pub struct ScreenTimeScreen {
    draft: Draft,
}

const SCREEN_TIME_FIXED_ROWS: usize = 4;

impl ScreenTimeScreen {
    pub fn new(controls: &ParentalControls) -> Self {
        let rows = SCREEN_TIME_FIXED_ROWS + controls.screen_time.schedule.len();
        Self {
            draft: Draft::new(controls, rows),
        }
    }

    pub fn draft(&self) -> &ParentalControls {
        &self.draft.controls
    }

    fn toggle(&mut self, row: usize) {
        let settings = &mut self.draft.controls.screen_time;
        match row {
            0 => settings.enabled = !settings.enabled,
            1 => {}
            2 => settings.bedtime_mode = !settings.bedtime_mode,
            3 => settings.weekend_extra = !settings.weekend_extra,
            n => {
                if let Some(block) = settings.schedule.get_mut(n - SCREEN_TIME_FIXED_ROWS) {
                    block.blocked = !block.blocked;
                }
            }
        }
        self.draft.touched();
    }

    fn adjust(&mut self, steps: i32) {
        if self.draft.menu.selected() == 1 {
            self.draft.controls.screen_time.adjust_limit(steps);
            self.draft.touched();
        }
    }
}

impl Screen for ScreenTimeScreen {
    fn view(&self) -> View {
        View::ScreenTime
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ScreenTime.title());
        let (list, footer) = body_rows(body);

        let settings = &self.draft.controls.screen_time;
        let mut items = vec![
            toggle_item("Screen time limits", settings.enabled),
            ListItem::new(format!(
                "    Daily limit: ◀ {} ▶",
                format_minutes(settings.daily_limit_minutes)
            )),
            toggle_item("Bedtime mode", settings.bedtime_mode),
            toggle_item("Extra time on weekends", settings.weekend_extra),
        ];
        items.extend(settings.schedule.iter().map(|block| {
            toggle_item(
                &format!("Block {} ({})", block.name, block.window_label()),
                block.blocked,
            )
        }));
        let blocked_now = settings.is_blocked_at(Local::now().time());
        self.draft.menu.render(f, list, "Screen Time", items);

        if self.draft.notice.is_some() {
            self.draft.render_notice(f, footer);
        } else {
            let status = if blocked_now {
                "🌙 Learning is paused right now"
            } else {
                "☀️ Learning is allowed right now"
            };
            f.render_widget(Paragraph::new(Line::from(status)), footer);
        }

        render_help(
            f,
            help,
            &[("↑↓", "Navigate"), ("Space", "Toggle"), ("←→", "Limit"), ("s", "Save"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if key.code == KeyCode::Char('s') {
            return Some(self.draft.save());
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.draft.menu.select_previous(),
            NavigationAction::Down => self.draft.menu.select_next(),
            NavigationAction::Left => self.adjust(-1),
            NavigationAction::Right => self.adjust(1),
            NavigationAction::Select => self.toggle(self.draft.menu.selected()),
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

/// Safe mode switches and allowed content categories
#[derive(Debug)]
pub struct SafeModeScreen {
    draft: Draft,
}

const SAFETY_FIXED_ROWS: usize = 4;

impl SafeModeScreen {
    pub fn new(controls: &ParentalControls) -> Self {
        let rows = SAFETY_FIXED_ROWS + controls.safety.categories.len();
        Self {
            draft: Draft::new(controls, rows),
        }
    }

    pub fn draft(&self) -> &ParentalControls {
        &self.draft.controls
    }

    fn toggle(&mut self, row: usize) {
        let safety = &mut self.draft.controls.safety;
        match row {
            0 => safety.safe_mode = !safety.safe_mode,
            1 => safety.block_external_links = !safety.block_external_links,
            2 => safety.age_filter = !safety.age_filter,
            3 => safety.content_moderation = !safety.content_moderation,
            n => {
                if let Some(id) = safety.categories.get(n - SAFETY_FIXED_ROWS).map(|c| c.id.clone()) {
                    safety.toggle(&id);
                }
            }
        }
        self.draft.touched();
    }
}

impl Screen for SafeModeScreen {
    fn view(&self) -> View {
        View::SafeMode
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::SafeMode.title());
        let (list, footer) = body_rows(body);

        let safety = &self.draft.controls.safety;
        let mut items = vec![
            toggle_item("Safe mode", safety.safe_mode),
            toggle_item("Block external links", safety.block_external_links),
            toggle_item("Age-appropriate filter", safety.age_filter),
            toggle_item("Content moderation", safety.content_moderation),
        ];
        items.extend(
            safety
                .categories
                .iter()
                .map(|c| toggle_item(&format!("Allow {}", c.name), c.allowed)),
        );
        let heading = format!(
            "Content ({} of {} categories allowed)",
            safety.allowed_count(),
            safety.categories.len()
        );
        self.draft.menu.render(f, list, &heading, items);
        self.draft.render_notice(f, footer);

        render_help(
            f,
            help,
            &[("↑↓", "Navigate"), ("Space", "Toggle"), ("s", "Save"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if key.code == KeyCode::Char('s') {
            return Some(self.draft.save());
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.draft.menu.select_previous(),
            NavigationAction::Down => self.draft.menu.select_next(),
            NavigationAction::Select => self.toggle(self.draft.menu.selected()),
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

/// Account details, notification preferences and logout
#[derive(Debug)]
pub struct AccountSettingsScreen {
    draft: Draft,
}

const NOTIFICATION_ROWS: usize = 4;

impl AccountSettingsScreen {
    pub fn new(controls: &ParentalControls) -> Self {
        Self {
            draft: Draft::new(controls, NOTIFICATION_ROWS),
        }
    }

    fn toggle(&mut self, row: usize) {
        let n = &mut self.draft.controls.notifications;
        let flag = match row {
            0 => &mut n.email_notifications,
            1 => &mut n.weekly_reports,
            2 => &mut n.achievement_alerts,
            _ => &mut n.daily_reminders,
        };
        *flag = !*flag;
        self.draft.touched();
    }
}

impl Screen for AccountSettingsScreen {
    fn view(&self) -> View {
        View::AccountSettings
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::AccountSettings.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6), Constraint::Length(1)])
            .split(body);

        let account = vec![
            Line::from(format!("👤 {}", if ctx.user_name.is_empty() { "-" } else { ctx.user_name })),
            Line::from(format!("✉️ {}", if ctx.user_email.is_empty() { "-" } else { ctx.user_email })),
        ];
        f.render_widget(Paragraph::new(account), rows[0]);

        let n = &self.draft.controls.notifications;
        let items = vec![
            toggle_item("Email notifications", n.email_notifications),
            toggle_item("Weekly progress reports", n.weekly_reports),
            toggle_item("Achievement alerts", n.achievement_alerts),
            toggle_item("Daily reminders", n.daily_reminders),
        ];
        self.draft.menu.render(f, rows[1], "Notifications", items);
        self.draft.render_notice(f, rows[2]);

        render_help(
            f,
            help,
            &[("↑↓", "Navigate"), ("Space", "Toggle"), ("s", "Save"), ("o", "Log out"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key.code {
            KeyCode::Char('s') => return Some(self.draft.save()),
            KeyCode::Char('o') => return Some(Request::Logout),
            _ => {}
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.draft.menu.select_previous(),
            NavigationAction::Down => self.draft.menu.select_next(),
            NavigationAction::Select => self.toggle(self.draft.menu.selected()),
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}
