//! Parent area: PIN gate, dashboard and progress reports

use super::widgets::{frame_layout, render_help, render_title, status_line, Menu};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::auth::{PinPad, PIN_LENGTH};
use crate::models::catalog::{TOPIC_SHARE, WEEKLY_MINUTES};
use crate::util::{format_minutes, mask_pin, on_off};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Gauge, ListItem, Paragraph},
    Frame,
};

/// Four-digit PIN entry in front of the parent dashboard
#[derive(Debug, Default)]
pub struct ParentLoginScreen {
    pad: PinPad,
    error: Option<String>,
}

impl ParentLoginScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Screen for ParentLoginScreen {
    fn view(&self) -> View {
        View::ParentLogin
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ParentLogin.title());

        let mut lines = vec![
            Line::from("🔒"),
            Line::from("Enter your 4-digit PIN"),
            Line::from(""),
            Line::from(Span::styled(
                mask_pin(self.pad.len(), PIN_LENGTH),
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(error) = &self.error {
            lines.push(Line::from(""));
            lines.push(status_line(error, true));
        }

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            body,
        );
        render_help(
            f,
            help,
            &[("0-9", "Digit"), ("Backspace", "Delete"), ("Enter", "Unlock"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext<'_>) -> Option<Request> {
        match key.code {
            KeyCode::Char(c) => {
                if self.pad.push(c) {
                    self.error = None;
                }
            }
            KeyCode::Backspace => self.pad.backspace(),
            KeyCode::Enter if self.pad.is_complete() => match ctx.gate.verify(self.pad.as_str()) {
                Ok(()) => return Some(Request::Go(Action::Submit)),
                Err(err) => {
                    self.error = Some(err.to_string());
                    self.pad.clear();
                }
            },
            KeyCode::Esc => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

const PARENT_ENTRIES: [(&str, &str, View); 4] = [
    ("Progress Reports", "📊", View::ProgressReports),
    ("Screen Time", "⏰", View::ScreenTime),
    ("Safe Mode & Content", "🛡️", View::SafeMode),
    ("Account Settings", "⚙️", View::AccountSettings),
];

/// Overview of the child and entry point to the parent tools
#[derive(Debug)]
pub struct ParentDashboardScreen {
    menu: Menu,
}

impl ParentDashboardScreen {
    pub fn new() -> Self {
        Self {
            menu: Menu::new(PARENT_ENTRIES.len()),
        }
    }
}

impl Default for ParentDashboardScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ParentDashboardScreen {
    fn view(&self) -> View {
        View::ParentDashboard
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ParentDashboard.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(6)])
            .split(body);

        let profile = ctx.profile;
        let controls = ctx.controls;
        let child = if profile.name.is_empty() { "Your child" } else { profile.name.as_str() };
        let overview = vec![
            Line::from(Span::styled(
                format!("👋 Hello {}", if ctx.user_name.is_empty() { "Parent" } else { ctx.user_name }),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!(
                "{} is level {} with {} badges",
                child,
                profile.level,
                profile.badges.len()
            )),
            Line::from(format!(
                "Activities: {}  •  Learning time: {}",
                profile.stats.activities_completed,
                format_minutes(profile.stats.total_time_minutes)
            )),
            Line::from(format!(
                "Daily limit: {}  •  Safe mode: {}",
                format_minutes(controls.screen_time.daily_limit_minutes),
                on_off(controls.safety.safe_mode)
            )),
        ];
        f.render_widget(
            Paragraph::new(overview).block(Block::default().borders(Borders::ALL).title("Overview")),
            rows[0],
        );

        let items = PARENT_ENTRIES
            .iter()
            .map(|(label, emoji, _)| ListItem::new(format!("{}  {}", emoji, label)))
            .collect();
        self.menu.render(f, rows[1], "Parent Tools", items);

        render_help(f, help, &[("↑↓", "Navigate"), ("Enter", "Open"), ("Esc", "Back")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select => {
                let (_, _, target) = PARENT_ENTRIES[self.menu.selected()];
                return Some(Request::Go(Action::Open(target)));
            }
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

/// Weekly chart, topic share and totals
#[derive(Debug, Default)]
pub struct ProgressReportsScreen;

impl ProgressReportsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for ProgressReportsScreen {
    fn view(&self) -> View {
        View::ProgressReports
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::ProgressReports.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(10)])
            .split(body);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let profile = ctx.profile;
        let week_total: u64 = WEEKLY_MINUTES.iter().map(|(_, m)| m).sum();
        let totals = vec![
            Line::from(format!(
                "This week: {}  •  Activities: {}  •  Badges: {}",
                format_minutes(u32::try_from(week_total).unwrap_or(u32::MAX)),
                profile.stats.activities_completed,
                profile.badges.len()
            )),
            Line::from(format!(
                "Level {}  •  Streak: {} days",
                profile.level, profile.stats.streak_days
            )),
        ];
        f.render_widget(
            Paragraph::new(totals).block(Block::default().borders(Borders::ALL).title("Summary")),
            rows[0],
        );

        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Minutes per day"))
            .data(WEEKLY_MINUTES)
            .bar_width(5)
            .bar_gap(1)
            .bar_style(Style::default().fg(Color::Cyan))
            .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
        f.render_widget(chart, columns[0]);

        let block = Block::default().borders(Borders::ALL).title("Topics");
        let inner = block.inner(columns[1]);
        f.render_widget(block, columns[1]);
        let topic_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(2); TOPIC_SHARE.len()])
            .split(inner);
        for ((topic, share), area) in TOPIC_SHARE.iter().zip(topic_rows.iter()) {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(Color::Magenta))
                .percent(*share)
                .label(format!("{} {}%", topic, share));
            f.render_widget(gauge, *area);
        }

        render_help(f, help, &[("Esc", "Back")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Back => Some(Request::Go(Action::Back)),
            _ => None,
        }
    }
}
