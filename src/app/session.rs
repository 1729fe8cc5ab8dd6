//! Session state
//!
//! The one owner of everything mutable: the child profile, the pending
//! reward, who is signed in, parental controls and the router. Screens
//! read it through [`ScreenContext`] and change it only by returning
//! [`Request`]s.

use crate::{
    activities::ActivityOutcome,
    app::state::{Action, Router, View},
    auth::{self, LoginRequest, ParentGate, SignupRequest},
    config::AppConfig,
    models::{ParentalControls, Profile, RewardPayload},
    progression,
};
use tracing::{debug, info};

/// Partial avatar change; `None` fields are left alone
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarUpdate {
    pub name: Option<String>,
    pub body: Option<String>,
    pub hair: Option<String>,
    pub outfit: Option<String>,
    pub accessories: Option<Vec<String>>,
}

/// Something a screen asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Go(Action),
    Login(LoginRequest),
    Signup(SignupRequest),
    UpdateAvatar(AvatarUpdate),
    /// Apply the change and leave the avatar screen
    SaveAvatar(AvatarUpdate),
    Complete(ActivityOutcome),
    /// Leave the rewards screen, dropping the shown payload
    ClaimReward,
    SaveControls(ParentalControls),
    Logout,
    Quit,
}

/// Read-only view of the session handed to screens
#[derive(Debug, Clone, Copy)]
pub struct ScreenContext<'a> {
    pub profile: &'a Profile,
    pub reward: Option<&'a RewardPayload>,
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub controls: &'a ParentalControls,
    pub gate: &'a ParentGate,
}

/// Application state for one running session
#[derive(Debug)]
pub struct Session {
    profile: Profile,
    reward: Option<RewardPayload>,
    user_name: String,
    user_email: String,
    controls: ParentalControls,
    gate: ParentGate,
    router: Router,
    should_quit: bool,
}

impl Session {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            profile: Profile::new(),
            reward: None,
            user_name: String::new(),
            user_email: String::new(),
            controls: config.parental_controls(),
            gate: ParentGate::new(config.parent_pin.clone()),
            router: Router::new(),
            should_quit: false,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn reward(&self) -> Option<&RewardPayload> {
        self.reward.as_ref()
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn controls(&self) -> &ParentalControls {
        &self.controls
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    pub fn router_mut(&mut self) -> &mut Router {
        &mut self.router
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn context(&self) -> ScreenContext<'_> {
        ScreenContext {
            profile: &self.profile,
            reward: self.reward.as_ref(),
            user_name: &self.user_name,
            user_email: &self.user_email,
            controls: &self.controls,
            gate: &self.gate,
        }
    }

    /// Apply one screen request
    pub fn apply(&mut self, request: Request) {
        match request {
            Request::Go(action) => {
                self.router.apply(action);
            }
            Request::Login(login) => {
                self.user_name = auth::display_name(&login.email);
                self.user_email = login.email;
                info!(user = %self.user_name, "logged in");
                self.router.apply(Action::Submit);
            }
            Request::Signup(signup) => {
                self.user_name = signup.name;
                self.user_email = signup.email;
                info!(user = %self.user_name, "signed up");
                self.router.apply(Action::Submit);
            }
            Request::UpdateAvatar(update) => self.update_avatar(update),
            Request::SaveAvatar(update) => {
                self.update_avatar(update);
                self.router.apply(Action::Submit);
            }
            Request::Complete(outcome) => {
                self.complete_activity(outcome);
            }
            Request::ClaimReward => {
                self.take_reward();
                self.router.apply(Action::Submit);
            }
            Request::SaveControls(controls) => {
                debug!("parental controls saved");
                self.controls = controls;
            }
            Request::Logout => self.logout(),
            Request::Quit => self.should_quit = true,
        }
    }

    fn update_avatar(&mut self, update: AvatarUpdate) {
        if let Some(name) = update.name {
            self.profile.name = name;
        }
        let avatar = &mut self.profile.avatar;
        if let Some(body) = update.body {
            avatar.body = body;
        }
        if let Some(hair) = update.hair {
            avatar.hair = hair;
        }
        if let Some(outfit) = update.outfit {
            avatar.outfit = outfit;
        }
        if let Some(accessories) = update.accessories {
            avatar.accessories = accessories;
        }
    }

    /// Record a finished activity, keep its payload for the rewards screen
    /// and move there
    pub fn complete_activity(&mut self, outcome: ActivityOutcome) -> &RewardPayload {
        let payload = progression::complete_activity(
            &mut self.profile,
            outcome.kind.as_str(),
            outcome.experience,
            outcome.badges,
            outcome.items,
        );
        if !self.router.apply(Action::Finish) {
            self.router.set_view(View::Rewards);
        }
        self.reward.insert(payload)
    }

    /// Hand out the pending reward; it is gone afterwards
    pub fn take_reward(&mut self) -> Option<RewardPayload> {
        self.reward.take()
    }

    /// Forget the user and child, back to the login view
    pub fn logout(&mut self) {
        info!(user = %self.user_name, "logged out");
        self.profile = Profile::new();
        self.reward = None;
        self.user_name.clear();
        self.user_email.clear();
        if !self.router.apply(Action::Logout) {
            self.router.set_view(View::Login);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::ActivityKind;

    fn session() -> Session {
        Session::new(&AppConfig::default())
    }

    #[test]
    fn test_login_records_name_and_moves_on() {
        let mut session = session();
        let login = auth::validate_login("maya@example.com", "pw").unwrap();
        session.apply(Request::Login(login));
        assert_eq!(session.user_name(), "maya");
        assert_eq!(session.current_view(), View::RoleSelection);
    }

    #[test]
    fn test_complete_activity_routes_to_rewards() {
        let mut session = session();
        session.router_mut().set_view(View::Quiz);

        let outcome = ActivityOutcome::new(ActivityKind::Quiz, 80).with_badge("Perfect Quiz!");
        session.apply(Request::Complete(outcome));

        assert_eq!(session.current_view(), View::Rewards);
        assert_eq!(session.profile().stats.activities_completed, 1);
        let reward = session.reward().unwrap();
        assert_eq!(reward.experience, 80);
        assert_eq!(reward.badges, vec!["Perfect Quiz!".to_string()]);
    }

    #[test]
    fn test_complete_outside_activity_still_shows_rewards() {
        let mut session = session();
        session.router_mut().set_view(View::ChildDashboard);

        session.complete_activity(ActivityOutcome::new(ActivityKind::Quiz, 80));
        assert_eq!(session.current_view(), View::Rewards);
        assert_eq!(session.reward().map(|r| r.experience), Some(80));

        session.apply(Request::ClaimReward);
        assert_eq!(session.current_view(), View::ChildDashboard);
        assert!(session.reward().is_none());
    }

    #[test]
    fn test_reward_consumed_once() {
        let mut session = session();
        session.router_mut().set_view(View::Story);
        session.apply(Request::Complete(ActivityOutcome::new(ActivityKind::Story, 50)));

        session.apply(Request::ClaimReward);
        assert!(session.reward().is_none());
        assert_eq!(session.current_view(), View::ChildDashboard);
        assert!(session.take_reward().is_none());
    }

    #[test]
    fn test_update_avatar_partial() {
        let mut session = session();
        session.apply(Request::UpdateAvatar(AvatarUpdate {
            name: Some("Leo".to_string()),
            hair: Some("curly".to_string()),
            ..AvatarUpdate::default()
        }));
        assert_eq!(session.profile().name, "Leo");
        assert_eq!(session.profile().avatar.hair, "curly");
        assert_eq!(session.profile().avatar.body, "default");
    }

    #[test]
    fn test_save_avatar_leaves_editor() {
        let mut session = session();
        session.router_mut().set_view(View::AvatarEditor);
        session.apply(Request::SaveAvatar(AvatarUpdate {
            outfit: Some("wizard".to_string()),
            ..AvatarUpdate::default()
        }));
        assert_eq!(session.profile().avatar.outfit, "wizard");
        assert_eq!(session.current_view(), View::ChildDashboard);
    }

    #[test]
    fn test_logout_resets_everything() {
        let mut session = session();
        session.apply(Request::Login(auth::validate_login("a@b.c", "pw").unwrap()));
        session.router_mut().set_view(View::MiniGame);
        session.apply(Request::Complete(ActivityOutcome::new(ActivityKind::MiniGame, 500)));
        session.router_mut().set_view(View::AccountSettings);

        session.apply(Request::Logout);
        assert_eq!(session.current_view(), View::Login);
        assert_eq!(session.profile(), &Profile::new());
        assert!(session.reward().is_none());
        assert_eq!(session.user_name(), "");
    }

    #[test]
    fn test_quit_flag() {
        let mut session = session();
        assert!(!session.should_quit());
        session.apply(Request::Quit);
        assert!(session.should_quit());
    }
}
