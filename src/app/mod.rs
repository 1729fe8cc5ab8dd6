//! TUI application module
//!
//! Contains the terminal user interface components, the screen registry,
//! the view router and the session they all share.

pub mod app;
pub mod screens;
pub mod session;
pub mod state;
pub mod tui;

pub use app::{dispatch_key, App};
pub use screens::Screen;
pub use session::{AvatarUpdate, Request, ScreenContext, Session};
pub use state::{key_to_navigation, transition, Action, NavigationAction, Router, View};
pub use tui::Tui;
