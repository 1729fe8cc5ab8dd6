//! Login, signup and role selection screens

use super::widgets::{button_line, frame_layout, render_help, render_title, status_line, Menu, TextField};
use super::Screen;
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::auth::{password_strength, validate_login, validate_signup, PasswordStrength};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};

const LOGIN_FIELDS: usize = 2;
const LOGIN_SUBMIT: usize = 2;
const LOGIN_SIGNUP_LINK: usize = 3;

/// Email/password form
#[derive(Debug)]
pub struct LoginScreen {
    fields: [TextField; LOGIN_FIELDS],
    focus: usize,
    error: Option<String>,
}

impl LoginScreen {
    pub fn new() -> Self {
        Self {
            fields: [TextField::new("Email Address"), TextField::secret("Password")],
            focus: 0,
            error: None,
        }
    }

    fn submit(&mut self) -> Option<Request> {
        match validate_login(&self.fields[0].value, &self.fields[1].value) {
            Ok(request) => Some(Request::Login(request)),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LoginScreen {
    fn view(&self) -> View {
        View::Login
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::Login.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(body);

        f.render_widget(
            Paragraph::new("Continue your learning adventure").style(Style::default().fg(Color::Gray)),
            rows[0],
        );
        for (i, field) in self.fields.iter().enumerate() {
            field.render(f, rows[i + 1], self.focus == i);
        }
        f.render_widget(
            Paragraph::new(vec![
                button_line("Log In", self.focus == LOGIN_SUBMIT),
                Line::from(""),
            ]),
            rows[3],
        );
        f.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::raw("Don't have an account? "),
                    Span::styled(
                        "Sign up here",
                        if self.focus == LOGIN_SIGNUP_LINK {
                            Style::default().fg(Color::Black).bg(Color::Magenta)
                        } else {
                            Style::default().fg(Color::Magenta)
                        },
                    ),
                ]),
            ]),
            rows[4],
        );
        if let Some(error) = &self.error {
            f.render_widget(Paragraph::new(status_line(error, true)), rows[5]);
        }

        render_help(f, help, &[("Tab", "Next field"), ("Enter", "Submit"), ("Esc", "Quit")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % 4;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + 3) % 4;
                None
            }
            KeyCode::Esc => Some(Request::Quit),
            KeyCode::Enter if self.focus == LOGIN_SIGNUP_LINK => Some(Request::Go(Action::SwitchAuth)),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace if self.focus < LOGIN_FIELDS => {
                self.fields[self.focus].backspace();
                None
            }
            KeyCode::Char(c) if self.focus < LOGIN_FIELDS => {
                self.fields[self.focus].push(c);
                self.error = None;
                None
            }
            _ => None,
        }
    }
}

const SIGNUP_FIELDS: usize = 4;
const SIGNUP_TERMS: usize = 4;
const SIGNUP_SUBMIT: usize = 5;
const SIGNUP_LOGIN_LINK: usize = 6;
const SIGNUP_STOPS: usize = 7;

/// Account creation form
#[derive(Debug)]
pub struct SignupScreen {
    fields: [TextField; SIGNUP_FIELDS],
    agreed_terms: bool,
    focus: usize,
    error: Option<String>,
}

impl SignupScreen {
    pub fn new() -> Self {
        Self {
            fields: [
                TextField::new("Your Name"),
                TextField::new("Email Address"),
                TextField::secret("Password"),
                TextField::secret("Confirm Password"),
            ],
            agreed_terms: false,
            focus: 0,
            error: None,
        }
    }

    fn submit(&mut self) -> Option<Request> {
        let [name, email, password, confirm] = &self.fields;
        match validate_signup(
            &name.value,
            &email.value,
            &password.value,
            &confirm.value,
            self.agreed_terms,
        ) {
            Ok(request) => Some(Request::Signup(request)),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }

    fn strength_line(&self) -> Line<'static> {
        let password = &self.fields[2].value;
        if password.is_empty() {
            return Line::from("");
        }
        let strength = password_strength(password);
        let color = match strength {
            PasswordStrength::Weak => Color::Red,
            PasswordStrength::Medium => Color::Yellow,
            PasswordStrength::Strong => Color::Green,
        };
        Line::from(Span::styled(strength.hint(), Style::default().fg(color)))
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let terms_mark = if self.agreed_terms { "[x]" } else { "[ ]" };
        let terms_style = if self.focus == SIGNUP_TERMS {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default()
        };
        let link_style = if self.focus == SIGNUP_LOGIN_LINK {
            Style::default().fg(Color::Black).bg(Color::Magenta)
        } else {
            Style::default().fg(Color::Magenta)
        };

        let mut lines = vec![
            self.strength_line(),
            Line::from(Span::styled(
                format!("{} I agree to the Terms and Privacy Policy", terms_mark),
                terms_style,
            )),
            button_line("Create Account", self.focus == SIGNUP_SUBMIT),
            Line::from(vec![
                Span::raw("Already have an account? "),
                Span::styled("Log in here", link_style),
            ]),
        ];
        if let Some(error) = &self.error {
            lines.push(status_line(error, true));
        }
        f.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SignupScreen {
    fn view(&self) -> View {
        View::Signup
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::Signup.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(5),
            ])
            .split(body);
        for (i, field) in self.fields.iter().enumerate() {
            field.render(f, rows[i], self.focus == i);
        }
        self.render_footer(f, rows[4]);

        render_help(
            f,
            help,
            &[("Tab", "Next field"), ("Space", "Toggle terms"), ("Enter", "Submit"), ("Esc", "Log in")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % SIGNUP_STOPS;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + SIGNUP_STOPS - 1) % SIGNUP_STOPS;
                None
            }
            KeyCode::Esc => Some(Request::Go(Action::SwitchAuth)),
            KeyCode::Enter if self.focus == SIGNUP_LOGIN_LINK => Some(Request::Go(Action::SwitchAuth)),
            KeyCode::Enter if self.focus == SIGNUP_TERMS => {
                self.agreed_terms = !self.agreed_terms;
                None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Char(' ') if self.focus == SIGNUP_TERMS => {
                self.agreed_terms = !self.agreed_terms;
                self.error = None;
                None
            }
            KeyCode::Backspace if self.focus < SIGNUP_FIELDS => {
                self.fields[self.focus].backspace();
                None
            }
            KeyCode::Char(c) if self.focus < SIGNUP_FIELDS => {
                self.fields[self.focus].push(c);
                self.error = None;
                None
            }
            _ => None,
        }
    }
}

/// Child or parent choice after signing in
#[derive(Debug)]
pub struct RoleSelectionScreen {
    menu: Menu,
}

impl RoleSelectionScreen {
    pub fn new() -> Self {
        Self { menu: Menu::new(2) }
    }
}

impl Default for RoleSelectionScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for RoleSelectionScreen {
    fn view(&self) -> View {
        View::RoleSelection
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::RoleSelection.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(4)])
            .split(body);

        let greeting = if ctx.user_name.is_empty() {
            "Welcome! 👋".to_string()
        } else {
            format!("Welcome, {}! 👋", ctx.user_name)
        };
        f.render_widget(
            Paragraph::new(vec![
                Line::from(greeting),
                Line::from("Choose how you'd like to continue"),
            ])
            .block(Block::default().borders(Borders::NONE)),
            rows[0],
        );

        let items = vec![
            ListItem::new("I'm a Kid - Start your learning adventure! ✨"),
            ListItem::new("I'm a Parent - Monitor progress and manage settings 🛡️"),
        ];
        self.menu.render(f, rows[1], "Choose your role", items);

        render_help(f, help, &[("↑↓", "Navigate"), ("Enter", "Select")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select => {
                let action = if self.menu.selected() == 0 {
                    Action::ChooseChild
                } else {
                    Action::ChooseParent
                };
                return Some(Request::Go(action));
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::screens::test_support::{chars, key, render_text, session};

    #[test]
    fn test_login_blocks_empty_submit() {
        let session = session();
        let ctx = session.context();
        let mut screen = LoginScreen::new();

        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        assert_eq!(screen.error.as_deref(), Some("Please fill in your email"));
    }

    #[test]
    fn test_login_submits_filled_form() {
        let session = session();
        let ctx = session.context();
        let mut screen = LoginScreen::new();

        for k in chars("kid@example.com") {
            screen.handle_key(k, &ctx);
        }
        screen.handle_key(key(KeyCode::Tab), &ctx);
        for k in chars("secret") {
            screen.handle_key(k, &ctx);
        }

        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::Login(login)) => {
                assert_eq!(login.email, "kid@example.com");
                assert_eq!(login.password, "secret");
            }
            other => panic!("expected login request, got {:?}", other),
        }
    }

    #[test]
    fn test_login_signup_link() {
        let session = session();
        let ctx = session.context();
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::BackTab), &ctx);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::SwitchAuth))
        );
    }

    #[test]
    fn test_password_is_masked() {
        let session = session();
        let ctx = session.context();
        let mut screen = LoginScreen::new();
        screen.handle_key(key(KeyCode::Tab), &ctx);
        for k in chars("hunter2") {
            screen.handle_key(k, &ctx);
        }
        let text = render_text(&mut screen, &session);
        assert!(!text.contains("hunter2"));
        assert!(text.contains("*******"));
    }

    #[test]
    fn test_signup_requires_terms() {
        let session = session();
        let ctx = session.context();
        let mut screen = SignupScreen::new();
        for (i, value) in ["Ana", "ana@example.com", "abcdef", "abcdef"].iter().enumerate() {
            screen.focus = i;
            for k in chars(value) {
                screen.handle_key(k, &ctx);
            }
        }

        screen.focus = SIGNUP_SUBMIT;
        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        assert_eq!(
            screen.error.as_deref(),
            Some("Please agree to the terms and conditions")
        );

        screen.focus = SIGNUP_TERMS;
        screen.handle_key(key(KeyCode::Char(' ')), &ctx);
        screen.focus = SIGNUP_SUBMIT;
        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::Signup(signup)) => assert_eq!(signup.name, "Ana"),
            other => panic!("expected signup request, got {:?}", other),
        }
    }

    #[test]
    fn test_role_selection() {
        let session = session();
        let ctx = session.context();
        let mut screen = RoleSelectionScreen::new();
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::ChooseChild))
        );
        screen.handle_key(key(KeyCode::Down), &ctx);
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter), &ctx),
            Some(Request::Go(Action::ChooseParent))
        );
    }
}
