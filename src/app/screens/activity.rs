//! Activity screens: quiz, memory game, story and daily missions
//!
//! Each screen drives one of the activity runs and hands its outcome to the
//! session with [`Request::Complete`] once the activity is finished.

use super::picker::{Picker, STORY_CATEGORIES};
use super::widgets::{frame_layout, render_help, render_title, status_line, Menu};
use super::Screen;
use crate::activities::memory::PAIRS;
use crate::activities::{FlipResult, MemoryGame, MissionBoard, QuizRun, StoryRun};
use crate::app::session::{Request, ScreenContext};
use crate::app::state::{key_to_navigation, Action, NavigationAction, View};
use crate::models::catalog::{StoryEntry, STORY_CATALOG};
use crate::models::Profile;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, ListItem, Paragraph, Wrap},
    Frame,
};
use tracing::debug;

/// Multiple-choice quiz
#[derive(Debug)]
pub struct QuizScreen {
    run: QuizRun,
    menu: Menu,
}

impl QuizScreen {
    pub fn new() -> Self {
        let run = QuizRun::new();
        let options = run.question().options.len();
        Self {
            run,
            menu: Menu::new(options),
        }
    }

    fn answer(&mut self, option: usize) {
        if let Some(correct) = self.run.answer(option) {
            debug!(question = self.run.position(), correct, "quiz answer");
        }
    }

    fn next(&mut self) -> Option<Request> {
        if let Some(outcome) = self.run.next() {
            return Some(Request::Complete(outcome));
        }
        if self.run.selected().is_none() {
            self.menu = Menu::new(self.run.question().options.len());
        }
        None
    }
}

impl Default for QuizScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for QuizScreen {
    fn view(&self) -> View {
        View::Quiz
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::Quiz.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Progress
                Constraint::Length(3), // Question
                Constraint::Min(6),    // Options
                Constraint::Length(1), // Feedback
            ])
            .split(body);

        let position = self.run.position() + 1;
        let total = self.run.len();
        let percent = (position * 100 / total.max(1)) as u16;
        f.render_widget(
            Gauge::default()
                .block(Block::default().borders(Borders::ALL))
                .gauge_style(Style::default().fg(Color::Cyan))
                .percent(percent)
                .label(format!("Question {} of {}", position, total)),
            rows[0],
        );

        let question = self.run.question();
        f.render_widget(
            Paragraph::new(format!("{}  {}", question.emoji, question.prompt))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            rows[1],
        );

        let selected = self.run.selected();
        let items = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                let mut style = Style::default();
                if selected.is_some() && i == question.correct {
                    style = style.fg(Color::Green);
                } else if selected == Some(i) {
                    style = style.fg(Color::Red);
                }
                ListItem::new(Span::styled(format!("{}. {}", i + 1, option), style))
            })
            .collect();
        self.menu.render(f, rows[2], "Answers", items);

        let feedback = match selected {
            Some(i) if i == question.correct => status_line("Correct! 🎉", false),
            Some(_) => status_line("Not quite! The right answer is highlighted.", true),
            None => Line::from(format!("Score: {}", self.run.correct_answers())),
        };
        f.render_widget(Paragraph::new(feedback), rows[3]);

        render_help(
            f,
            help,
            &[("1-4", "Answer"), ("↑↓", "Navigate"), ("Enter", "Select / Next"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if let KeyCode::Char(c @ '1'..='4') = key.code {
            self.answer(c as usize - '1' as usize);
            return None;
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select => {
                if self.run.selected().is_none() {
                    self.answer(self.menu.selected());
                } else {
                    return self.next();
                }
            }
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

const GRID_COLUMNS: usize = 4;

/// Memory match on a 3 x 4 grid
#[derive(Debug)]
pub struct MiniGameScreen {
    game: MemoryGame,
    cursor: usize,
    last: Option<FlipResult>,
}

impl MiniGameScreen {
    pub fn new() -> Self {
        Self::with_game(MemoryGame::new())
    }

    pub fn with_game(game: MemoryGame) -> Self {
        Self {
            game,
            cursor: 0,
            last: None,
        }
    }

    pub fn game(&self) -> &MemoryGame {
        &self.game
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) {
        let len = self.game.cards().len();
        let rows = (len + GRID_COLUMNS - 1) / GRID_COLUMNS;
        let col = (self.cursor % GRID_COLUMNS) as isize;
        let row = (self.cursor / GRID_COLUMNS) as isize;
        let col = (col + dx).rem_euclid(GRID_COLUMNS as isize) as usize;
        let row = (row + dy).rem_euclid(rows as isize) as usize;
        self.cursor = (row * GRID_COLUMNS + col).min(len.saturating_sub(1));
    }

    fn render_grid(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (row, cards) in self.game.cards().chunks(GRID_COLUMNS).enumerate() {
            let spans: Vec<Span> = cards
                .iter()
                .enumerate()
                .map(|(col, card)| {
                    let face = if card.flipped || card.matched { card.face } else { "❓" };
                    let mut style = Style::default();
                    if card.matched {
                        style = style.fg(Color::Green);
                    }
                    if row * GRID_COLUMNS + col == self.cursor {
                        style = style.bg(Color::Magenta);
                    }
                    Span::styled(format!("  {}  ", face), style)
                })
                .collect();
            lines.push(Line::from(spans));
            lines.push(Line::from(""));
        }
        f.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Find the pairs")),
            area,
        );
    }
}

impl Default for MiniGameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MiniGameScreen {
    fn view(&self) -> View {
        View::MiniGame
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::MiniGame.title());

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(8), Constraint::Length(1)])
            .split(body);

        f.render_widget(
            Paragraph::new(format!(
                "Moves: {}   Pairs: {} / {}",
                self.game.moves(),
                self.game.matches(),
                PAIRS
            )),
            rows[0],
        );
        self.render_grid(f, rows[1]);

        let status = if self.game.is_complete() {
            status_line(
                &format!(
                    "You found them all in {} moves! Enter to collect {} XP",
                    self.game.moves(),
                    self.game.experience()
                ),
                false,
            )
        } else {
            match self.last {
                Some(FlipResult::Match) => status_line("A match! ✨", false),
                Some(FlipResult::Mismatch) => status_line("Not a pair, try again", true),
                _ => Line::from(""),
            }
        };
        f.render_widget(Paragraph::new(status), rows[2]);

        render_help(
            f,
            help,
            &[("←→↑↓", "Move"), ("Enter", "Flip"), ("r", "Restart"), ("Esc", "Back")],
        );
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if key.code == KeyCode::Char('r') {
            *self = Self::new();
            return None;
        }
        match key_to_navigation(key) {
            NavigationAction::Left => self.move_cursor(-1, 0),
            NavigationAction::Right => self.move_cursor(1, 0),
            NavigationAction::Up => self.move_cursor(0, -1),
            NavigationAction::Down => self.move_cursor(0, 1),
            NavigationAction::Select => {
                if let Some(outcome) = self.game.outcome() {
                    return Some(Request::Complete(outcome));
                }
                self.last = Some(self.game.flip(self.cursor));
            }
            NavigationAction::Back => return Some(Request::Go(Action::Back)),
            _ => {}
        }
        None
    }
}

/// Story library, then the reader with choice pages
#[derive(Debug)]
pub struct StoryScreen {
    library: Picker<StoryEntry>,
    reading: Option<&'static StoryEntry>,
    run: StoryRun,
    menu: Menu,
}

impl StoryScreen {
    pub fn new() -> Self {
        Self {
            library: Picker::new(View::Story, STORY_CATALOG, STORY_CATEGORIES),
            reading: None,
            run: StoryRun::new(),
            menu: Menu::new(0),
        }
    }

    fn open(&mut self, story: &'static StoryEntry) {
        debug!(title = story.title, "story opened");
        self.reading = Some(story);
        self.run = StoryRun::new();
        self.menu = Menu::new(0);
        self.sync_menu();
    }

    /// Leave the reader; the next story starts from page one
    fn back_to_library(&mut self) {
        self.reading = None;
        self.run = StoryRun::new();
        self.menu = Menu::new(0);
    }

    fn sync_menu(&mut self) {
        let choices = self.run.page().choices.map(|(c, _)| c.len()).unwrap_or(0);
        if choices != self.menu.len() {
            self.menu = Menu::new(choices);
        }
    }

    fn step(&mut self, choice: Option<usize>) -> Option<Request> {
        let outcome = match (self.run.page().choices, choice) {
            (Some(_), Some(choice)) => self.run.choose(choice),
            (Some(_), None) => None,
            (None, _) => self.run.advance(),
        };
        self.sync_menu();
        outcome.map(Request::Complete)
    }
}

impl Default for StoryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for StoryScreen {
    fn view(&self) -> View {
        View::Story
    }

    fn render(&mut self, f: &mut Frame, ctx: &ScreenContext<'_>) {
        let Some(story) = self.reading else {
            self.library.render(f);
            return;
        };
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, &format!("{} {}", story.emoji, story.title));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Page counter
                Constraint::Length(3), // Picture
                Constraint::Min(3),    // Text
                Constraint::Length(5), // Choices
            ])
            .split(body);

        f.render_widget(
            Paragraph::new(format!("Page {} of {}", self.run.position() + 1, self.run.len()))
                .alignment(Alignment::Right),
            rows[0],
        );
        let page = self.run.page();
        f.render_widget(Paragraph::new(page.image).alignment(Alignment::Center), rows[1]);
        f.render_widget(
            Paragraph::new(self.run.text_for(&ctx.profile.name))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            rows[2],
        );

        if let Some((choices, _)) = page.choices {
            let items = choices
                .iter()
                .enumerate()
                .map(|(i, c)| ListItem::new(format!("{}. {}", i + 1, c)))
                .collect();
            self.menu.render(f, rows[3], "What happens next?", items);
            render_help(f, help, &[("1-2", "Choose"), ("↑↓", "Navigate"), ("Enter", "Pick"), ("Esc", "Stories")]);
        } else {
            render_help(f, help, &[("Enter", "Next page"), ("Esc", "Stories")]);
        }
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        if self.reading.is_none() {
            if key.code == KeyCode::Enter {
                if let Some(story) = self.library.selected() {
                    self.open(story);
                }
                return None;
            }
            return self.library.handle_key(key);
        }

        if let KeyCode::Char(c @ '1'..='2') = key.code {
            return self.step(Some(c as usize - '1' as usize));
        }
        match key_to_navigation(key) {
            NavigationAction::Up => self.menu.select_previous(),
            NavigationAction::Down => self.menu.select_next(),
            NavigationAction::Select | NavigationAction::Right => {
                let choice = (!self.menu.is_empty()).then(|| self.menu.selected());
                return self.step(choice);
            }
            NavigationAction::Back => self.back_to_library(),
            _ => {}
        }
        None
    }
}

/// Today's missions and the claim button
#[derive(Debug)]
pub struct MissionsScreen {
    board: MissionBoard,
    notice: Option<String>,
}

impl MissionsScreen {
    pub fn new(profile: &Profile) -> Self {
        Self {
            board: MissionBoard::for_profile(profile),
            notice: None,
        }
    }
}

impl Screen for MissionsScreen {
    fn view(&self) -> View {
        View::Missions
    }

    fn render(&mut self, f: &mut Frame, _ctx: &ScreenContext<'_>) {
        let (title, body, help) = frame_layout(f.size());
        render_title(f, title, View::Missions.title());

        let missions = self.board.missions();
        let mut lines: Vec<Line> = missions
            .iter()
            .map(|m| {
                let (mark, style) = if m.completed {
                    ("✅", Style::default().fg(Color::Green))
                } else {
                    ("⬜", Style::default())
                };
                Line::from(vec![
                    Span::raw(format!("{} {}  ", mark, m.emoji)),
                    Span::styled(format!("{:<18}", m.title), style.add_modifier(Modifier::BOLD)),
                    Span::raw(format!(" {:<34} +{} XP", m.description, m.experience)),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(format!(
            "{} of {} done  •  {} XP earned",
            self.board.completed_count(),
            missions.len(),
            self.board.earned_experience()
        )));
        if let Some(notice) = &self.notice {
            lines.push(status_line(notice, true));
        }

        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            body,
        );
        render_help(f, help, &[("Enter", "Claim rewards"), ("Esc", "Back")]);
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &ScreenContext<'_>) -> Option<Request> {
        match key_to_navigation(key) {
            NavigationAction::Select => match self.board.claim() {
                Some(outcome) => Some(Request::Complete(outcome)),
                None => {
                    self.notice = Some("Finish a mission first to earn rewards!".to_string());
                    None
                }
            },
            NavigationAction::Back => Some(Request::Go(Action::Back)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activities::{ActivityKind, ActivityOutcome};
    use crate::app::screens::test_support::{chars, key, render_text, session};
    use crate::models::catalog::QUIZ_QUESTIONS;

    #[test]
    fn test_quiz_with_number_keys() {
        let session = session();
        let ctx = session.context();
        let mut screen = QuizScreen::new();

        let mut result = None;
        for question in QUIZ_QUESTIONS {
            let digit = char::from(b'1' + question.correct as u8);
            assert!(screen.handle_key(key(KeyCode::Char(digit)), &ctx).is_none());
            result = screen.handle_key(key(KeyCode::Enter), &ctx);
        }
        match result {
            Some(Request::Complete(outcome)) => {
                assert_eq!(outcome.experience, 100);
                assert_eq!(outcome.badges, vec!["Perfect Quiz!".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_quiz_enter_answers_then_advances() {
        let session = session();
        let ctx = session.context();
        let mut screen = QuizScreen::new();

        // First Enter answers with the highlighted option ("6", wrong)
        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        assert_eq!(screen.run.selected(), Some(0));
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Not quite!"));

        // Answers after the first are ignored
        screen.handle_key(key(KeyCode::Char('3')), &ctx);
        assert_eq!(screen.run.correct_answers(), 0);

        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        assert_eq!(screen.run.position(), 1);
        assert_eq!(screen.run.selected(), None);
    }

    #[test]
    fn test_memory_game_completes() {
        let session = session();
        let ctx = session.context();
        let mut screen = MiniGameScreen::with_game(MemoryGame::seeded(3));

        let faces: Vec<&str> = screen.game().cards().iter().map(|c| c.face).collect();
        for i in 0..faces.len() {
            let Some(j) = (i + 1..faces.len()).find(|&j| faces[j] == faces[i]) else {
                continue;
            };
            screen.cursor = i;
            screen.handle_key(key(KeyCode::Enter), &ctx);
            screen.cursor = j;
            screen.handle_key(key(KeyCode::Enter), &ctx);
        }
        assert!(screen.game().is_complete());
        assert_eq!(screen.game().moves(), 6);

        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::Complete(outcome)) => {
                assert_eq!(outcome.kind, ActivityKind::MiniGame);
                assert_eq!(outcome.experience, 70);
                assert_eq!(outcome.badges, vec!["Memory Master!".to_string()]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_memory_cursor_wraps() {
        let mut screen = MiniGameScreen::with_game(MemoryGame::seeded(1));
        screen.move_cursor(-1, 0);
        assert_eq!(screen.cursor, 3);
        screen.move_cursor(0, -1);
        assert_eq!(screen.cursor, 11);
        screen.move_cursor(1, 1);
        assert_eq!(screen.cursor, 0);
    }

    #[test]
    fn test_story_uses_child_name() {
        let mut session = session();
        session.apply(Request::UpdateAvatar(crate::app::session::AvatarUpdate {
            name: Some("Nia".to_string()),
            ..Default::default()
        }));
        let mut screen = StoryScreen::new();
        screen.handle_key(key(KeyCode::Enter), &session.context());
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Space Adventure"));
        assert!(text.contains("Nia"));
    }

    #[test]
    fn test_story_library_filters() {
        let session = session();
        let ctx = session.context();
        let mut screen = StoryScreen::new();
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Starry Night"));
        assert!(text.contains("Sleepy Owl"));

        // Fantasy tab
        screen.handle_key(key(KeyCode::Right), &ctx);
        let titles: Vec<_> = screen.library.entries().iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Magical Forest", "Dragon Kingdom"]);

        for k in chars("master") {
            screen.handle_key(k, &ctx);
        }
        let entries = screen.library.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].author, "Dragon Master");

        screen.handle_key(key(KeyCode::Enter), &ctx);
        assert_eq!(screen.reading.map(|s| s.title), Some("Dragon Kingdom"));
    }

    #[test]
    fn test_back_to_library_resets_reading() {
        let session = session();
        let ctx = session.context();
        let mut screen = StoryScreen::new();
        screen.handle_key(key(KeyCode::Enter), &ctx);

        // Two plain pages, then the right answer on the first question
        screen.handle_key(key(KeyCode::Enter), &ctx);
        screen.handle_key(key(KeyCode::Enter), &ctx);
        screen.handle_key(key(KeyCode::Char('1')), &ctx);
        assert_eq!(screen.run.position(), 3);
        assert_eq!(screen.run.correct_choices(), 1);

        assert!(screen.handle_key(key(KeyCode::Esc), &ctx).is_none());
        assert!(screen.reading.is_none());
        assert_eq!(screen.run.position(), 0);
        assert_eq!(screen.run.correct_choices(), 0);

        // Esc in the library leaves the story view
        assert_eq!(
            screen.handle_key(key(KeyCode::Esc), &ctx),
            Some(Request::Go(Action::Back))
        );
    }

    #[test]
    fn test_story_to_the_end() {
        let session = session();
        let ctx = session.context();
        let mut screen = StoryScreen::new();

        let mut result = None;
        for _ in 0..20 {
            result = screen.handle_key(key(KeyCode::Enter), &ctx);
            if result.is_some() {
                break;
            }
        }
        assert_eq!(
            result,
            Some(Request::Complete(
                ActivityOutcome::new(ActivityKind::Story, 50)
                    .with_badge("Story Master")
                    .with_item("Magical Crystal")
            ))
        );
    }

    #[test]
    fn test_missions_need_progress() {
        let session = session();
        let ctx = session.context();
        let mut screen = MissionsScreen::new(ctx.profile);
        assert!(screen.handle_key(key(KeyCode::Enter), &ctx).is_none());
        let text = render_text(&mut screen, &session);
        assert!(text.contains("Finish a mission first"));

        let mut profile = Profile::new();
        profile.completed_activities.push("quiz".to_string());
        let mut screen = MissionsScreen::new(&profile);
        match screen.handle_key(key(KeyCode::Enter), &ctx) {
            Some(Request::Complete(outcome)) => {
                assert_eq!(outcome.kind, ActivityKind::Missions);
                assert_eq!(outcome.experience, 50);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
