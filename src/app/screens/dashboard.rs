//! Child dashboard and progress screens

use super::widgets::{centered_rect, frame_layout, render_help, render_title, status_line, Menu};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::auth::{PinPad, PIN_LENGTH};
use crate::models::catalog::{body_emoji, BADGE_GALLERY};
use crate::progression::progress_percent;
use crate::util::{format_experience, format_minutes, mask_pin};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, ListItem, Paragraph},
    Frame,
};

/// Dashboard menu: label, emoji and the view it opens
const DASHBOARD_ENTRIES: [(&str, &str, View); 7] = [
    ("Quizzes", "📝", View::QuizSelection),
    ("Mini Games", "🎮", View::GameSelection),
    ("Story Time", "📚", View::Story),
    ("Daily Missions", "🎯", View::Missions),
    ("My Progress", "🏆", View::ChildProgress),
    ("Edit Avatar", "🎨", View::AvatarEditor),
    ("Quick Quiz", "⚡", View::Quiz),
];

/// Parent PIN prompt shown over the dashboard
#[derive(Debug, Default)]
struct PinModal {
    pad: PinPad,
    error: Option<String>,
}

/// Home screen of the child
#[derive(Debug)]
pub struct ChildDashboardScreen {
    menu: Menu,
    modal: Option<PinModal>,
}

impl ChildDashboardScreen {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(DASHBOARD_ENTRIES.len()),
            modal: None,
        }
    }

    pub fn is_pin_open(&self) -> bool {
        self.modal.is_some()
    }

    fn handle_pin_key(&mut self, key: KeyEvent, ctx: &ScreenContext<'_>) -> Option<Request> {
        let modal = self.modal.as_mut()?;
        match key.code {
            KeyCode::Esc => self.modal = None,
            KeyCode::Backspace => modal.pad.backspace(),
            KeyCode::Char(c) => {
                if modal.pad.push(c) {
                    modal.error = None;
                }
            }
            KeyCode::Enter if modal.pad.is_complete() => {
                match ctx.gate.verify(modal.pad.as_str()) {
                    Ok(()) => {
                        self.modal = None;
                        return Some(Request::Go(Action::Open(View::ParentDashboard)));
                    }
                    Err(err) => {
                        modal.error = Some(err.to_string());
                        modal.pad.clear();
                    }
                }
            }
            _ => {}
        }
        None
    }

    fn render_pin_modal(&self, f: &mut Frame) {
        let Some(modal) = &self.modal else {
            return;
        };
        let area = centered_rect(50, 40, f.size());
        let mut lines = vec![
            Line::from("🔒 Enter the parent PIN"),
            Line::from(""),
            Line::from(Span::styled(
                mask_pin(modal.pad.len(), PIN_LENGTH),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(error) = &modal.error {
            lines.push(Line::from(""));
            lines.push(status_line(error, true));
        }

        f.render_widget(Clear, area);
        f.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Parent Access")
                    .border_style(Style::default().fg(Color::Yellow)),
            ),
            area,
        );
    }
}

impl Default for ChildDashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ChildDashboardScreen {
    fn view(&self) -> View {
        View::ChildDashboard
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ChildDashboard.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Avatar and level
                Constraint::Length(3), // XP gauge
                Constraint::Min(4),    // Menu
            ])
            .split(body);

        let profile = ctx.profile;
        let name = if profile.name.is_empty() { "Explorer" } else { profile.name.as_str() };
        let header = vec![
            Line::from(vec![
                Span::raw(format!("{}  ", body_emoji(&profile.avatar.body))),
                Span::styled(
                    format!("Hi, {}!", name),
                    Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Level {}  •  {} badges  •  🔥 {} day streak",
                profile.level,
                profile.badges.len(),
                profile.stats.streak_days
            )),
        ];
        f.render_widget(Paragraph::new(header), rows[0]);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Experience"))
            .gauge_style(Style::default().fg(Color::Yellow))
            .percent(progress_percent(profile))
            .label(format_experience(profile.experience, profile.threshold));
        f.render_widget(gauge, rows[1]);

        let items = DASHBOARD_ENTRIES
            .iter()
            .map(|(label, emoji, _)| ListItem::new(format!("{}  {}", emoji, label)))
            .collect();
        self.menu.render(f, rows[2], "What do you want to do?", items);

        render_help(
            f,
            help,
            &[("↑↓", "Navigate"), ("Enter", "Open"), ("p", "Parents"), ("Esc", "Back")],
        );
        self.render_pin_modal(f);
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext<'_>) -> Option<Request> {
        if self.modal.is_some() {
            return self.handle_pin_key(key, ctx);
        }
        if key.code == KeyCode::Char('p') {
            self.modal = Some(PinModal::default());
            return None;
        }

        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select => {
                let (_, _, target) = DASHBOARD_ENTRIES[self.menu.selected()];
                return Some(Request::Go(Action::Open(target)));
            }
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

/// Stats and badge gallery
#[derive(Debug, Default)]
pub struct ChildProgressScreen;

impl ChildProgressScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for ChildProgressScreen {
    fn view(&self) -> View {
        View::ChildProgress
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ChildProgress.title());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(body);

        let profile = ctx.profile;
        let stats = vec![
            Line::from(format!("⭐ Level {}", profile.level)),
            Line::from(format!(
                "✨ {}",
                format_experience(profile.experience, profile.threshold)
            )),
            Line::from(format!(
                "✅ Activities completed: {}",
                profile.stats.activities_completed
            )),
            Line::from(format!(
                "⏱️ Learning time: {}",
                format_minutes(profile.stats.total_time_minutes)
            )),
            Line::from(format!("🔥 Streak: {} days", profile.stats.streak_days)),
        ];
        f.render_widget(
            Paragraph::new(stats).block(Block::default().borders(Borders::ALL).title("Stats")),
            columns[0],
        );

        let badges: Vec<Line> = BADGE_GALLERY
            .iter()
            .map(|(emoji, name, badge)| {
                let unlocked = badge.map(|b| profile.has_badge(b)).unwrap_or(false);
                if unlocked {
                    Line::from(Span::styled(
                        format!("{}  {}", emoji, name),
                        Style::default().fg(Color::Yellow),
                    ))
                } else {
                    Line::from(Span::styled(
                        format!("🔒  {}", name),
                        Style::default().fg(Color::DarkGray),
                    ))
                }
            })
            .collect();
        f.render_widget(
            Paragraph::new(badges).block(Block::default().borders(Borders::ALL).title("Badges")),
            columns[1],
        );

        render_help(f, help, &[("Esc", "Back")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Back => Some(Request::Go(Action::Back)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{chars, key, render_text, session};

    #[test]
    fn test_menu_opens_targets() {
        let session = session();
        let ctx = session.context();
        let mut screen = ChildDashboardScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::Open(View::QuizSelection)))
        );
        screen.handle_key(key(KeyCode::Up), &ctx);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::Open(View::Quiz)))
        );
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &ctx),
            Some(Request::Go(Action::Back))
        );
    }

    #[test]
    fn test_pin_modal_accepts_configured_pin() {
        let session = session();
        let ctx = session.context();
        let mut screen = ChildDashboardScreen::new();

        screen.handle_key(key(KeyCode::Char('p')), &ctx);
        assert!(screen.is_pin_open());
        let mut last = None;
        for k in chars("1234") {
            last = screen.handle_key(k, &ctx);
        }
        assert!(last.is_none());
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::Open(View::ParentDashboard)))
        );
        assert!(!screen.is_pin_open());
    }

    #[test]
    fn test_pin_modal_rejects_wrong_pin() {
        let session = session();
        let ctx = session.context();
        let mut screen = ChildDashboardScreen::new();

        screen.handle_key(key(KeyCode::Char('p')), &ctx);
        for k in chars("9999") {
            screen.handle_key(k, &ctx);
        }
        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        assert!(screen.is_pin_open());
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Incorrect PIN"));

        // Esc closes the modal rather than leaving the dashboard
        assert!(screen.handle_key(key(KeyCode::Esc), &ctx).is_none());
        assert!(!screen.is_pin_open());
    }

    #[test]
    fn test_progress_shows_unlocked_badges() {
        let mut session = session();
        session.router_mut().set_view(View::Quiz);
        session.apply(Request::Complete(
            crate::activities::ActivityOutcome::new(crate::activities::ActivityKind::Quiz, 100)
                .with_badge("Perfect Quiz!"),
        ));

        let mut screen = ChildProgressScreen::new();
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Quiz Master"));
        assert!(text.contains("Activities completed: 1"));
    }
}
