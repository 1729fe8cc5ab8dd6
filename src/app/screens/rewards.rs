//! Reward celebration after an activity

use super::widgets::{button_line, frame_layout, render_help, render_title};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, NavigationAction, View};
use crate::util::format_experience;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Default)]
pub struct RewardsScreen;

impl RewardsScreen {
    pub fn new() -> Self {
        Self
    }
}

impl Screen for RewardsScreen {
    fn view(&self) -> View {
        View::Rewards
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::Rewards.title());

        let highlight = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let mut lines = vec![Line::from("🎉 Amazing Job! 🎉"), Line::from("")];
        match ctx.reward {
            Some(reward) => {
                lines.push(Line::from(vec![
                    Span::raw("⭐ "),
                    Span::styled(format!("+{} XP", reward.experience), highlight),
                ]));
                for badge in &reward.badges {
                    lines.push(Line::from(format!("🏅 New badge: {}", badge)));
                }
                for item in &reward.items {
                    lines.push(Line::from(format!("🎁 New item: {}", item)));
                }
            }
            None => lines.push(Line::from("No new rewards this time.")),
        }

        let profile = ctx.profile;
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "Level {}  •  {}",
            profile.level,
            format_experience(profile.experience, profile.threshold)
        )));
        lines.push(Line::from(""));
        lines.push(button_line("Continue", true));

        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            body,
        );
        render_help(f, help, &[("Enter", "Continue")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Select => Some(Request::ClaimReward),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::{ActivityKind, ActivityOutcome};
    use crate::app::screens::test_support::{key, render_text, session};
    use crossterm::event::KeyCode;

    #[test]
    fn test_shows_payload() {
        let mut session = session();
        session.router_mut().set_view(View::Story);
        session.apply(Request::Complete(
            ActivityOutcome::new(ActivityKind::Story, 50)
                .with_badge("Story Master")
                .with_item("Magical Crystal"),
        ));

        let mut screen = RewardsScreen::new();
        let text = render_text(&mut screen, &session);
        assert!(text.contains("+50 XP"));
        assert!(text.contains("New badge: Story Master"));
        assert!(text.contains("New item: Magical Crystal"));
    }

    #[test]
    fn test_without_payload() {
        let session = session();
        let mut screen = RewardsScreen::new();
        let text = render_text(&mut screen, &session);
        assert!(text.contains("No new rewards"));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &session.context()),
            Some(Request::ClaimReward)
        );
        assert!(screen.handle_key(key(KeyCode::Esc), &session.context()).is_none());
    }
}
