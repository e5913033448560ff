//! Main application controller
//!
//! Owns the terminal, the view controller and the screen components, and
//! runs the draw / input / timer loop.

use std::time::{Duration, Instant};

use crate::{
    app::{
        controller::ViewController,
        launcher::{Launcher, SystemLauncher},
        screens::{render_notice, ModeCard, ModeScreen, SkipChoice, SkipDialog, WalkthroughScreen},
        state::{key_to_navigation, NavigationAction, Screen},
        tui::{InputEvent, Tui},
    },
    config::{
        persistence::{FileStore, MemoryStore, PreferenceStore},
        AppConfig,
    },
    Result,
};

/// Open the preference store configured for this run
pub fn open_store(config: &AppConfig) -> Box<dyn PreferenceStore> {
    if let Some(path) = &config.storage_path {
        return Box::new(FileStore::at(path.clone()));
    }
    match FileStore::new() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "no data directory, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

/// Routes input to the view controller and screen components
pub struct Screens {
    walkthrough: WalkthroughScreen,
    modes: ModeScreen,
    skip_dialog: SkipDialog,
    should_quit: bool,
}

impl Screens {
    pub fn new() -> Self {
        Self {
            walkthrough: WalkthroughScreen::new(),
            modes: ModeScreen::new(),
            skip_dialog: SkipDialog::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn modes(&self) -> &ModeScreen {
        &self.modes
    }

    pub fn skip_dialog(&self) -> &SkipDialog {
        &self.skip_dialog
    }

    /// Render whatever the controller says is on screen
    pub fn draw(&mut self, f: &mut ratatui::Frame, controller: &ViewController) {
        let state = controller.state();
        match state.screen() {
            Screen::Walkthrough => {
                self.walkthrough.render(f, state);
                if state.show_skip_dialog() {
                    let area = f.size();
                    self.skip_dialog.render(f, area);
                }
            }
            Screen::Modes => self.modes.render(f, state),
        }
        if let Some(notice) = state.notice() {
            render_notice(f, notice);
        }
    }

    /// Apply one input event
    pub fn handle_input(&mut self, controller: &mut ViewController, input: InputEvent, now: Instant) {
        // The dismissing key or click is consumed
        if controller.state().notice().is_some() {
            controller.dismiss_notice();
            return;
        }

        match input {
            InputEvent::Key(key) => {
                let action = key_to_navigation(key);
                if action == NavigationAction::Quit {
                    self.should_quit = true;
                    return;
                }
                self.handle_action(controller, action, now);
            }
            InputEvent::Click { column, row } => {
                if controller.state().screen() == Screen::Modes {
                    if let Some(card) = self.modes.card_at(column, row) {
                        self.activate_card(controller, card, now);
                    }
                }
            }
        }
    }

    /// Apply one navigation action
    pub fn handle_action(
        &mut self,
        controller: &mut ViewController,
        action: NavigationAction,
        now: Instant,
    ) {
        let screen = controller.state().screen();
        let dialog_open = controller.state().show_skip_dialog();
        match screen {
            Screen::Walkthrough if dialog_open => self.handle_dialog(controller, action, now),
            Screen::Walkthrough => self.handle_walkthrough(controller, action, now),
            Screen::Modes => self.handle_modes(controller, action, now),
        }
    }

    fn handle_walkthrough(
        &mut self,
        controller: &mut ViewController,
        action: NavigationAction,
        now: Instant,
    ) {
        match action {
            NavigationAction::Select | NavigationAction::Right | NavigationAction::Next => {
                controller.advance(now)
            }
            NavigationAction::Skip | NavigationAction::Back => {
                self.skip_dialog.reset();
                controller.request_skip();
            }
            NavigationAction::Add => controller.open_portfolio_entry(0, now),
            _ => {}
        }
    }

    fn handle_dialog(
        &mut self,
        controller: &mut ViewController,
        action: NavigationAction,
        now: Instant,
    ) {
        match action {
            NavigationAction::Up | NavigationAction::Previous => self.skip_dialog.select_previous(),
            NavigationAction::Down | NavigationAction::Next => self.skip_dialog.select_next(),
            NavigationAction::Select => match self.skip_dialog.focused_choice() {
                SkipChoice::Permanently => controller.confirm_skip(true, now),
                SkipChoice::ThisTime => controller.confirm_skip(false, now),
                SkipChoice::Continue => controller.cancel_skip(),
            },
            NavigationAction::Back => controller.cancel_skip(),
            _ => {}
        }
    }

    fn handle_modes(
        &mut self,
        controller: &mut ViewController,
        action: NavigationAction,
        now: Instant,
    ) {
        match action {
            NavigationAction::Left | NavigationAction::Up | NavigationAction::Previous => {
                self.modes.select_previous()
            }
            NavigationAction::Right | NavigationAction::Down | NavigationAction::Next => {
                self.modes.select_next()
            }
            NavigationAction::Select => {
                let card = self.modes.focused_card();
                self.activate_card(controller, card, now);
            }
            NavigationAction::Add => controller.create_mode(now),
            NavigationAction::Back => controller.return_to_walkthrough(now),
            _ => {}
        }
    }

    fn activate_card(&mut self, controller: &mut ViewController, card: ModeCard, now: Instant) {
        match card {
            ModeCard::Mode(mode) => controller.select_mode(mode, now),
            ModeCard::Create => controller.create_mode(now),
        }
    }
}

impl Default for Screens {
    fn default() -> Self {
        Self::new()
    }
}

/// TUI application controller
pub struct App {
    /// Terminal UI handler
    tui: Tui,
    controller: ViewController,
    screens: Screens,
    tick_rate: Duration,
}

impl App {
    /// Create a new application instance
    pub fn new(config: AppConfig) -> Result<Self> {
        let store = open_store(&config);
        Self::with_parts(config, store, Box::new(SystemLauncher))
    }

    /// Create an application with explicit storage and launcher
    pub fn with_parts(
        config: AppConfig,
        store: Box<dyn PreferenceStore>,
        launcher: Box<dyn Launcher>,
    ) -> Result<Self> {
        config.validate()?;
        let tick_rate = config.tick_rate();
        Ok(Self {
            tui: Tui::new()?,
            controller: ViewController::new(config, store, launcher, Instant::now()),
            screens: Screens::new(),
            tick_rate,
        })
    }

    /// Initialize the terminal
    pub fn init(&mut self) -> Result<()> {
        self.tui.init()
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        while !self.screens.should_quit() {
            self.controller.tick(Instant::now());

            let screens = &mut self.screens;
            let controller = &self.controller;
            self.tui.draw(|f| screens.draw(f, controller))?;

            let timeout = self.poll_timeout();
            if let Some(input) = self.tui.next_event(timeout)? {
                self.screens
                    .handle_input(&mut self.controller, input, Instant::now());
            }
            tokio::task::yield_now().await;
        }
        tracing::info!("quit requested");
        self.tui.restore()
    }

    /// Time to wait for input: the tick rate, or less if a timer is due sooner
    fn poll_timeout(&self) -> Duration {
        match self.controller.next_deadline() {
            Some(deadline) => deadline
                .saturating_duration_since(Instant::now())
                .min(self.tick_rate),
            None => self.tick_rate,
        }
    }
}
