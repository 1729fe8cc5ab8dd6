//! Main application controller
//!
//! Owns the terminal, the session and the screen for the current view, and
//! runs the draw / read key / apply request loop.

use crate::{
    app::{
        screens::{self, Screen},
        session::{Request, Session},
        state::{key_to_navigation, NavigationAction},
        tui::{size_is_adequate, Tui, MIN_HEIGHT, MIN_WIDTH},
    },
    config::AppConfig,
    KidQuestError, Result,
};
use crossterm::event::KeyEvent;
use ratatui::{layout::Alignment, widgets::Paragraph, Frame};
use tracing::{debug, info};

/// TUI application controller
pub struct App {
    tui: Tui,
    session: Session,
    screen: Box<dyn Screen>,
}

impl App {
    /// Create a new application instance from validated settings
    pub fn new(config: &AppConfig) -> Result<Self> {
        let session = Session::new(config);
        let screen = screens::build(session.current_view(), &session.context());
        Ok(Self {
            tui: Tui::new(config.tick_rate())?,
            session,
            screen,
        })
    }

    /// Run the main loop until the session asks to quit
    pub fn run(&mut self) -> Result<()> {
        self.tui
            .init()
            .map_err(|e| KidQuestError::Tui(format!("failed to enter raw mode: {}", e)))?;
        info!(tick_ms = self.tui.tick_rate().as_millis() as u64, "tui started");

        while !self.session.should_quit() {
            self.draw()?;
            if let Some(key) = self.tui.next_key()? {
                dispatch_key(&mut self.session, &mut self.screen, key);
            }
        }

        self.tui.restore()?;
        info!("tui stopped");
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let session = &self.session;
        let screen = &mut self.screen;
        self.tui.draw(|f| {
            if size_is_adequate(f.size()) {
                screen.render(f, &session.context());
            } else {
                render_too_small(f);
            }
        })?;
        Ok(())
    }
}

/// Route one key press: global quit first, then the screen, then the
/// session. A view change replaces the screen with a fresh one.
pub fn dispatch_key(session: &mut Session, screen: &mut Box<dyn Screen>, key: KeyEvent) {
    if key_to_navigation(key) == NavigationAction::Quit {
        session.apply(Request::Quit);
        return;
    }

    let Some(request) = screen.handle_key(key, &session.context()) else {
        return;
    };
    debug!(?request, view = screen.view().id(), "request");
    session.apply(request);

    let view = session.current_view();
    if view != screen.view() {
        *screen = screens::build(view, &session.context());
    }
}

fn render_too_small(f: &mut Frame) {
    let message = format!(
        "Please make the terminal at least {}x{} (now {}x{})",
        MIN_WIDTH,
        MIN_HEIGHT,
        f.size().width,
        f.size().height
    );
    f.render_widget(Paragraph::new(message).alignment(Alignment::Center), f.size());
}
