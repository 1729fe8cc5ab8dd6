use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kidquest::app::{dispatch_key, screens, Screen, Session, View};
use kidquest::config::AppConfig;
use kidquest::models::catalog::QUIZ_QUESTIONS;

struct Harness {
    session: Session,
    screen: Box<dyn Screen>,
}

impl Harness {
    fn new() -> Self {
        let session = Session::new(&AppConfig::default());
        let screen = screens::build(session.current_view(), &session.context());
        Self { session, screen }
    }

    fn press(&mut self, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        dispatch_key(&mut self.session, &mut self.screen, key);
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    fn view(&self) -> View {
        assert_eq!(self.screen.view(), self.session.current_view());
        self.session.current_view()
    }

    fn login_as_child(&mut self, name: &str) {
        self.type_text("sam@example.com");
        self.press(KeyCode::Tab);
        self.type_text("secret");
        self.press(KeyCode::Enter);
        assert_eq!(self.view(), View::RoleSelection);

        self.press(KeyCode::Enter);
        assert_eq!(self.view(), View::AvatarCreation);

        self.type_text(name);
        for _ in 0..4 {
            self.press(KeyCode::Enter);
        }
        assert_eq!(self.view(), View::ChildDashboard);
    }
}

#[test]
fn test_child_quiz_round_trip() {
    let mut app = Harness::new();
    app.login_as_child("Sam");
    assert_eq!(app.session.user_name(), "sam");
    assert_eq!(app.session.profile().name, "Sam");

    // Quick Quiz is the last dashboard entry
    app.press(KeyCode::Up);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::Quiz);

    for question in QUIZ_QUESTIONS {
        let digit = char::from(b'1' + question.correct as u8);
        app.press(KeyCode::Char(digit));
        app.press(KeyCode::Enter);
    }
    assert_eq!(app.view(), View::Rewards);

    let profile = app.session.profile();
    assert_eq!(profile.level, 2);
    assert_eq!(profile.experience, 0);
    assert_eq!(profile.threshold, 150);
    assert_eq!(profile.badges, vec!["Perfect Quiz!".to_string()]);
    assert_eq!(app.session.reward().map(|r| r.experience), Some(100));

    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ChildDashboard);
    assert!(app.session.reward().is_none());
}

#[test]
fn test_missions_reflect_finished_activities() {
    let mut app = Harness::new();
    app.login_as_child("Ada");

    // Story Time, read to the end
    app.press(KeyCode::Down);
    app.press(KeyCode::Down);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::Story);
    for _ in 0..20 {
        if app.view() != View::Story {
            break;
        }
        app.press(KeyCode::Enter);
    }
    assert_eq!(app.view(), View::Rewards);
    app.press(KeyCode::Enter);

    // Daily Missions: only the story mission is done
    for _ in 0..3 {
        app.press(KeyCode::Down);
    }
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::Missions);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::Rewards);
    assert_eq!(app.session.reward().map(|r| r.experience), Some(50));
    assert_eq!(app.session.profile().stats.activities_completed, 2);
    assert_eq!(
        app.session.profile().completed_activities,
        vec!["story".to_string(), "missions".to_string()]
    );
}

#[test]
fn test_parent_gate_and_logout() {
    let mut app = Harness::new();
    app.login_as_child("Sam");

    app.press(KeyCode::Char('p'));
    app.type_text("4321");
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ChildDashboard);

    app.press(KeyCode::Esc);
    app.press(KeyCode::Char('p'));
    app.type_text("1234");
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ParentDashboard);

    // Account Settings is the last parent entry
    app.press(KeyCode::Up);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::AccountSettings);

    app.press(KeyCode::Char('o'));
    assert_eq!(app.view(), View::Login);
    assert_eq!(app.session.profile().name, "");
    assert_eq!(app.session.user_name(), "");
}

#[test]
fn test_parent_role_needs_pin() {
    let mut app = Harness::new();
    app.type_text("pat@example.com");
    app.press(KeyCode::Tab);
    app.type_text("pw");
    app.press(KeyCode::Enter);

    app.press(KeyCode::Down);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ParentLogin);

    app.type_text("0000");
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ParentLogin);

    app.type_text("1234");
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ParentDashboard);

    // Screen time edits only stick after saving
    app.press(KeyCode::Down);
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::ScreenTime);
    app.press(KeyCode::Down);
    app.press(KeyCode::Left);
    app.press(KeyCode::Esc);
    assert_eq!(app.view(), View::ParentDashboard);
    assert_eq!(app.session.controls().screen_time.daily_limit_minutes, 60);

    app.press(KeyCode::Down);
    app.press(KeyCode::Enter);
    app.press(KeyCode::Down);
    app.press(KeyCode::Left);
    app.press(KeyCode::Char('s'));
    assert_eq!(app.session.controls().screen_time.daily_limit_minutes, 45);
}

#[test]
fn test_empty_login_stays_put() {
    let mut app = Harness::new();
    app.press(KeyCode::Enter);
    assert_eq!(app.view(), View::Login);
}
