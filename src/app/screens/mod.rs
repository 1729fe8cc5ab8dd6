//! TUI screen components
//!
//! One component per [`View`]. Every screen renders from the session
//! context and turns key presses into [`Request`]s; none of them mutates
//! the session directly.

pub mod activity;
pub mod auth;
pub mod avatar;
pub mod dashboard;
pub mod parent;
pub mod picker;
pub mod rewards;
pub mod settings;
pub mod widgets;

pub use activity::{MiniGameScreen, MissionsScreen, QuizScreen, StoryScreen};
pub use auth::{LoginScreen, RoleSelectionScreen, SignupScreen};
pub use avatar::{AvatarCreationScreen, AvatarEditorScreen};
pub use dashboard::{ChildDashboardScreen, ChildProgressScreen};
pub use parent::{ParentDashboardScreen, ParentLoginScreen, ProgressReportsScreen};
pub use picker::{GameSelectionScreen, QuizSelectionScreen};
pub use rewards::RewardsScreen;
pub use settings::{AccountSettingsScreen, SafeModeScreen, ScreenTimeScreen};

use crate::app::session::{Request, ScreenContext};
use crate::app::state::View;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// A renderable, interactive screen
pub trait Screen {
    /// The view this screen is registered for
    fn view(&self) -> View;

    /// Draw the whole frame
    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>);

    /// React to a key press, optionally asking the session for a change
    fn handle_key(&mut self, key: KeyEvent, ctx: &ScreenContext<'_>) -> Option<Request>;
}

/// Construct the screen registered for `view`
pub fn build(view: View, ctx: &ScreenContext<'_>) -> Box<dyn Screen> {
    match view {
        View::Login => Box::new(LoginScreen::new()),
        View::Signup => Box::new(SignupScreen::new()),
        View::RoleSelection => Box::new(RoleSelectionScreen::new()),
        View::AvatarCreation => Box::new(AvatarCreationScreen::new(ctx.profile)),
        View::AvatarEditor => Box::new(AvatarEditorScreen::new(ctx.profile)),
        View::ChildDashboard => Box::new(ChildDashboardScreen::new()),
        View::Quiz => Box::new(QuizScreen::new()),
        View::QuizSelection => Box::new(QuizSelectionScreen::new()),
        View::GameSelection => Box::new(GameSelectionScreen::new()),
        View::MiniGame => Box::new(MiniGameScreen::new()),
        View::Story => Box::new(StoryScreen::new()),
        View::Rewards => Box::new(RewardsScreen::new()),
        View::ChildProgress => Box::new(ChildProgressScreen::new()),
        View::Missions => Box::new(MissionsScreen::new(ctx.profile)),
        View::ParentLogin => Box::new(ParentLoginScreen::new()),
        View::ParentDashboard => Box::new(ParentDashboardScreen::new()),
        View::ProgressReports => Box::new(ProgressReportsScreen::new()),
        View::ScreenTime => Box::new(ScreenTimeScreen::new(ctx.controls)),
        View::SafeMode => Box::new(SafeModeScreen::new(ctx.controls)),
        View::AccountSettings => Box::new(AccountSettingsScreen::new(ctx.controls)),
    }
}

/// Construct a screen from a view id; unknown ids get the login screen
pub fn build_by_id(id: &str, ctx: &ScreenContext<'_>) -> Box<dyn Screen> {
    build(View::from_id(id), ctx)
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::session::Session;
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    use super::Screen;

    pub fn session() -> Session {
        Session::new(&AppConfig::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub fn chars(s: &str) -> Vec<KeyEvent> {
        s.chars().map(|c| key(KeyCode::Char(c))).collect()
    }

    /// Render a screen into an in-memory terminal and return its text
    pub fn render_text(screen: &mut dyn Screen, session: &Session) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        let ctx = session.context();
        terminal.draw(|f| screen.render(f, &ctx)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }
}
