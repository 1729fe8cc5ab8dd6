//! View routing
//!
//! Holds the single current view, the closed set of views and the
//! transition table that says where each screen action leads. There is no
//! history: "back" is an edge to a fixed view like any other.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

/// Every screen the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum View {
    #[default]
    Login,
    Signup,
    RoleSelection,
    AvatarCreation,
    AvatarEditor,
    ChildDashboard,
    Quiz,
    QuizSelection,
    GameSelection,
    MiniGame,
    Story,
    Rewards,
    ChildProgress,
    Missions,
    ParentLogin,
    ParentDashboard,
    ProgressReports,
    ScreenTime,
    SafeMode,
    AccountSettings,
}

impl View {
    pub const ALL: [View; 20] = [
        View::Login,
        View::Signup,
        View::RoleSelection,
        View::AvatarCreation,
        View::AvatarEditor,
        View::ChildDashboard,
        View::Quiz,
        View::QuizSelection,
        View::GameSelection,
        View::MiniGame,
        View::Story,
        View::Rewards,
        View::ChildProgress,
        View::Missions,
        View::ParentLogin,
        View::ParentDashboard,
        View::ProgressReports,
        View::ScreenTime,
        View::SafeMode,
        View::AccountSettings,
    ];

    /// Stable identifier of the view
    pub fn id(&self) -> &'static str {
        match self {
            View::Login => "login",
            View::Signup => "signup",
            View::RoleSelection => "role-selection",
            View::AvatarCreation => "avatar-creation",
            View::AvatarEditor => "avatar-editor",
            View::ChildDashboard => "child-dashboard",
            View::Quiz => "quiz",
            View::QuizSelection => "quiz-selection",
            View::GameSelection => "game-selection",
            View::MiniGame => "mini-game",
            View::Story => "story",
            View::Rewards => "rewards",
            View::ChildProgress => "child-progress",
            View::Missions => "missions",
            View::ParentLogin => "parent-login",
            View::ParentDashboard => "parent-dashboard",
            View::ProgressReports => "progress-reports",
            View::ScreenTime => "screen-time",
            View::SafeMode => "safe-mode",
            View::AccountSettings => "account-settings",
        }
    }

    /// Resolve an identifier. Unknown or stale ids land on the login view.
    pub fn from_id(id: &str) -> View {
        match View::ALL.iter().find(|v| v.id() == id) {
            Some(view) => *view,
            None => {
                debug!(id, "unknown view id, falling back to login");
                View::Login
            }
        }
    }

    /// Window title for the view
    pub fn title(&self) -> &'static str {
        match self {
            View::Login => "Welcome Back",
            View::Signup => "Create Account",
            View::RoleSelection => "Who's Playing?",
            View::AvatarCreation => "Create Your Avatar",
            View::AvatarEditor => "Edit Avatar",
            View::ChildDashboard => "My Adventure",
            View::Quiz => "Quiz Time",
            View::QuizSelection => "Choose a Quiz",
            View::GameSelection => "Choose a Game",
            View::MiniGame => "Memory Match",
            View::Story => "Story Time",
            View::Rewards => "Rewards",
            View::ChildProgress => "My Progress",
            View::Missions => "Daily Missions",
            View::ParentLogin => "Parent Access",
            View::ParentDashboard => "Parent Dashboard",
            View::ProgressReports => "Progress Reports",
            View::ScreenTime => "Screen Time Control",
            View::SafeMode => "Safe Mode & Content",
            View::AccountSettings => "Account Settings",
        }
    }
}

/// Edge labels of the navigation graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary confirm of the screen (login, pick, continue, save)
    Submit,
    Back,
    /// Toggle between login and signup
    SwitchAuth,
    ChooseChild,
    ChooseParent,
    /// Menu entry on a dashboard
    Open(View),
    /// Activity finished, show rewards
    Finish,
    Logout,
}

/// Where `action` leads from `from`, if that edge exists
pub fn transition(from: View, action: Action) -> Option<View> {
    use Action::*;
    use View::*;

    let to = match (from, action) {
        (Login, Submit) | (Signup, Submit) => RoleSelection,
        (Login, SwitchAuth) => Signup,
        (Signup, SwitchAuth) => Login,

        (RoleSelection, ChooseChild) => AvatarCreation,
        (RoleSelection, ChooseParent) => ParentLogin,

        (AvatarCreation, Submit) => ChildDashboard,
        (AvatarEditor, Submit) | (AvatarEditor, Back) => ChildDashboard,

        (ChildDashboard, Open(target))
            if matches!(
                target,
                QuizSelection
                    | GameSelection
                    | Story
                    | View::Missions
                    | ChildProgress
                    | AvatarEditor
                    | Quiz
                    | ParentDashboard
            ) =>
        {
            target
        }
        (ChildDashboard, Back) => RoleSelection,

        (QuizSelection, Submit) => Quiz,
        (GameSelection, Submit) => MiniGame,
        (QuizSelection, Back) | (GameSelection, Back) => ChildDashboard,

        (Quiz, Finish) | (MiniGame, Finish) | (Story, Finish) | (View::Missions, Finish) => {
            Rewards
        }
        (Quiz, Back) | (MiniGame, Back) | (Story, Back) | (View::Missions, Back) => {
            ChildDashboard
        }

        (Rewards, Submit) => ChildDashboard,
        (ChildProgress, Back) => ChildDashboard,

        (ParentLogin, Submit) => ParentDashboard,
        (ParentLogin, Back) => RoleSelection,

        (ParentDashboard, Open(target))
            if matches!(target, ProgressReports | ScreenTime | SafeMode | AccountSettings) =>
        {
            target
        }
        (ParentDashboard, Back) => ChildDashboard,

        (ProgressReports, Back) | (ScreenTime, Back) | (SafeMode, Back) => ParentDashboard,
        (AccountSettings, Back) => ParentDashboard,
        (AccountSettings, Logout) => Login,

        _ => return None,
    };
    Some(to)
}

/// Owner of the current view
#[derive(Debug)]
pub struct Router {
    current: View,
}

impl Router {
    /// Create a router on the login view
    pub fn new() -> Self {
        Self {
            current: View::Login,
        }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Jump straight to a view
    pub fn set_view(&mut self, view: View) {
        if view != self.current {
            debug!(from = self.current.id(), to = view.id(), "view change");
            self.current = view;
        }
    }

    /// Jump to a view by id; unknown ids go to login
    pub fn set_view_id(&mut self, id: &str) {
        self.set_view(View::from_id(id));
    }

    /// Follow an edge of the transition table. Actions without an edge
    /// from the current view are ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        match transition(self.current, action) {
            Some(to) => {
                self.set_view(to);
                true
            }
            None => {
                debug!(view = self.current.id(), ?action, "no transition for action");
                false
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Navigation intents that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// Move selection up (arrow up, k)
    Up,
    /// Move selection down (arrow down, j)
    Down,
    /// Move selection left (arrow left, h)
    Left,
    /// Move selection right (arrow right, l)
    Right,
    /// Confirm selection (Enter, Space)
    Select,
    /// Go back/cancel (Esc)
    Back,
    /// Next field (Tab)
    Next,
    /// Previous field (Shift+Tab)
    Previous,
    /// Quit application (Ctrl+C)
    Quit,
    /// No action
    None,
}

/// Convert a keyboard event to a navigation intent.
///
/// Letters are left alone so that form screens can use them as text; only
/// the vim-style movement keys are mapped.
pub fn key_to_navigation(key: KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            NavigationAction::Quit
        }

        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Left | KeyCode::Char('h') => NavigationAction::Left,
        KeyCode::Right | KeyCode::Char('l') => NavigationAction::Right,

        KeyCode::Enter | KeyCode::Char(' ') => NavigationAction::Select,
        KeyCode::Esc => NavigationAction::Back,

        KeyCode::BackTab => NavigationAction::Previous,
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                NavigationAction::Previous
            } else {
                NavigationAction::Next
            }
        }

        _ => NavigationAction::None,
    }
}
