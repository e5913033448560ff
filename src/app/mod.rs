//! TUI application module
//!
//! Contains the terminal user interface components, the view controller
//! and its timers, and screen rendering.

pub mod app;
pub mod controller;
pub mod launcher;
pub mod scheduler;
pub mod screens;
pub mod state;
pub mod theme;
pub mod tui;

pub use app::{open_store, App, Screens};
pub use controller::{Notice, NoticeKind, ViewController, ViewState};
pub use launcher::{Launcher, SystemLauncher};
pub use screens::{ModeCard, ModeScreen, SkipChoice, SkipDialog, WalkthroughScreen};
pub use state::{key_to_navigation, NavigationAction, Screen};
pub use tui::{InputEvent, Tui};
