//! View controller
//!
//! Owns the single [`ViewState`] and is the only code allowed to change it.
//! Screens get a shared reference for rendering and call back into the
//! controller through its named transitions.
//!
//! Screen changes run as a two-phase animation: the current screen fades out
//! for `transition_delay`, the change is applied, and `entry_delay` later the
//! new content animates in. Every transition bumps a generation counter and
//! timer callbacks from an older generation are dropped, so a newer
//! transition always wins.

use std::time::Instant;

use crate::app::launcher::Launcher;
use crate::app::scheduler::TimerQueue;
use crate::app::state::Screen;
use crate::config::persistence::{self, PreferenceStore, FLAG_SET, WALKTHROUGH_DISABLED_KEY};
use crate::config::{AppConfig, ReturnPolicy};
use crate::error::user_friendly_message;
use crate::models::{find_mode, research_modes, walkthrough_steps, ResearchMode, WalkthroughStep};

pub const CREATE_MODE_NOTICE: &str = "Create new research mode - Coming soon!";
pub const ADD_WORK_NOTICE: &str = "Add your research work - Feature coming soon!";

/// Entry animation phase: content hidden
pub const PHASE_HIDDEN: u8 = 0;
/// Entry animation phase: content shown
pub const PHASE_SHOWN: u8 = 1;

/// Transient message shown over the current screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Everything the screens need to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    screen: Screen,
    walkthrough_step: usize,
    selected_mode_id: Option<&'static str>,
    is_transitioning: bool,
    animation_phase: u8,
    show_skip_dialog: bool,
    walkthrough_disabled: bool,
    notice: Option<Notice>,
}

impl ViewState {
    fn initial(walkthrough_disabled: bool) -> Self {
        Self {
            screen: if walkthrough_disabled {
                Screen::Modes
            } else {
                Screen::Walkthrough
            },
            walkthrough_step: 0,
            selected_mode_id: None,
            is_transitioning: false,
            animation_phase: PHASE_HIDDEN,
            show_skip_dialog: false,
            walkthrough_disabled,
            notice: None,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current step index; only meaningful on the walkthrough screen
    pub fn walkthrough_step(&self) -> usize {
        self.walkthrough_step
    }

    pub fn selected_mode_id(&self) -> Option<&'static str> {
        self.selected_mode_id
    }

    pub fn is_transitioning(&self) -> bool {
        self.is_transitioning
    }

    pub fn animation_phase(&self) -> u8 {
        self.animation_phase
    }

    pub fn is_entered(&self) -> bool {
        self.animation_phase >= PHASE_SHOWN
    }

    pub fn show_skip_dialog(&self) -> bool {
        self.show_skip_dialog
    }

    pub fn walkthrough_disabled(&self) -> bool {
        self.walkthrough_disabled
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TransitionTarget {
    /// Next step, or the mode screen after the last step
    Advance,
    Modes,
    Walkthrough,
}

#[derive(Debug)]
enum TimerEvent {
    ApplyTransition {
        generation: u64,
        target: TransitionTarget,
    },
    EnterAnimation {
        generation: u64,
    },
    OpenMode {
        mode_id: &'static str,
    },
    DismissNotice {
        id: u64,
    },
}

/// State machine driving the walkthrough and mode screens
pub struct ViewController {
    state: ViewState,
    config: AppConfig,
    store: Box<dyn PreferenceStore>,
    launcher: Box<dyn Launcher>,
    timers: TimerQueue<TimerEvent>,
    generation: u64,
    next_notice_id: u64,
}

impl ViewController {
    /// Create the controller. The persisted flag decides the first screen.
    pub fn new(
        config: AppConfig,
        store: Box<dyn PreferenceStore>,
        launcher: Box<dyn Launcher>,
        now: Instant,
    ) -> Self {
        let disabled = persistence::walkthrough_disabled(store.as_ref());
        let state = ViewState::initial(disabled);
        tracing::info!(screen = ?state.screen, walkthrough_disabled = disabled, "view controller started");

        let mut timers = TimerQueue::new();
        timers.schedule(
            now,
            config.initial_entry_delay(),
            TimerEvent::EnterAnimation { generation: 0 },
        );

        Self {
            state,
            config,
            store,
            launcher,
            timers,
            generation: 0,
            next_notice_id: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn steps(&self) -> &'static [WalkthroughStep] {
        walkthrough_steps()
    }

    pub fn modes(&self) -> &'static [ResearchMode] {
        research_modes()
    }

    pub fn current_step(&self) -> &'static WalkthroughStep {
        &walkthrough_steps()[self.state.walkthrough_step]
    }

    fn last_step_index(&self) -> usize {
        walkthrough_steps().len() - 1
    }

    /// Earliest pending timer, for sizing the event poll timeout
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Go to the next step, or to the mode screen after the last one
    pub fn advance(&mut self, now: Instant) {
        if self.state.screen != Screen::Walkthrough {
            tracing::debug!("advance ignored outside the walkthrough");
            return;
        }
        self.begin_transition(TransitionTarget::Advance, now);
    }

    /// Open the skip dialog without changing screen
    pub fn request_skip(&mut self) {
        if self.state.screen != Screen::Walkthrough {
            return;
        }
        self.state.show_skip_dialog = true;
        tracing::debug!(step = self.state.walkthrough_step, "skip dialog opened");
    }

    /// Leave the walkthrough, optionally for good
    pub fn confirm_skip(&mut self, permanent: bool, now: Instant) {
        if permanent {
            self.store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
            self.state.walkthrough_disabled = true;
        }
        tracing::info!(permanent, step = self.state.walkthrough_step, "walkthrough skipped");
        self.state.show_skip_dialog = false;
        self.begin_transition(TransitionTarget::Modes, now);
    }

    pub fn cancel_skip(&mut self) {
        self.state.show_skip_dialog = false;
        tracing::debug!("skip cancelled");
    }

    /// Go back from the mode screen; the step follows the configured policy
    pub fn return_to_walkthrough(&mut self, now: Instant) {
        if self.state.screen != Screen::Modes {
            return;
        }
        self.begin_transition(TransitionTarget::Walkthrough, now);
    }

    /// Highlight a mode and open its destination after the selection delay
    pub fn select_mode(&mut self, mode: &ResearchMode, now: Instant) {
        let Some(known) = find_mode(mode.id) else {
            tracing::warn!(mode_id = mode.id, "ignoring selection of unknown mode");
            return;
        };
        self.state.selected_mode_id = Some(known.id);
        tracing::info!(mode_id = known.id, "mode selected");
        self.timers.schedule(
            now,
            self.config.selection_delay(),
            TimerEvent::OpenMode { mode_id: known.id },
        );
    }

    /// Placeholder for the unimplemented mode editor
    pub fn create_mode(&mut self, now: Instant) {
        self.show_notice(CREATE_MODE_NOTICE.to_string(), NoticeKind::Info, now);
    }

    /// Act on a portfolio entry of the current step
    pub fn open_portfolio_entry(&mut self, index: usize, now: Instant) {
        let Some(entry) = self
            .current_step()
            .portfolio
            .and_then(|entries| entries.get(index))
        else {
            return;
        };

        if entry.is_placeholder {
            self.show_notice(ADD_WORK_NOTICE.to_string(), NoticeKind::Info, now);
        } else {
            self.launch(entry.link, now);
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
    }

    /// Fire every timer due at `now`
    pub fn tick(&mut self, now: Instant) {
        while let Some((due, event)) = self.timers.pop_due(now) {
            self.fire(event, due);
        }
    }

    fn begin_transition(&mut self, target: TransitionTarget, now: Instant) {
        self.generation += 1;
        self.state.is_transitioning = true;
        tracing::debug!(generation = self.generation, ?target, "transition started");
        self.timers.schedule(
            now,
            self.config.transition_delay(),
            TimerEvent::ApplyTransition {
                generation: self.generation,
                target,
            },
        );
    }

    fn fire(&mut self, event: TimerEvent, at: Instant) {
        match event {
            TimerEvent::ApplyTransition { generation, target } => {
                if generation != self.generation {
                    tracing::debug!(generation, current = self.generation, "stale transition dropped");
                    return;
                }
                self.apply(target);
                self.state.is_transitioning = false;
                self.state.animation_phase = PHASE_HIDDEN;
                self.timers.schedule(
                    at,
                    self.config.entry_delay(),
                    TimerEvent::EnterAnimation { generation },
                );
            }
            TimerEvent::EnterAnimation { generation } => {
                if generation == self.generation {
                    self.state.animation_phase = PHASE_SHOWN;
                }
            }
            TimerEvent::OpenMode { mode_id } => {
                if let Some(mode) = find_mode(mode_id) {
                    self.launch(mode.link, at);
                }
                if self.state.selected_mode_id == Some(mode_id) {
                    self.state.selected_mode_id = None;
                }
            }
            TimerEvent::DismissNotice { id } => {
                if self.state.notice.as_ref().map(|n| n.id) == Some(id) {
                    self.state.notice = None;
                }
            }
        }
    }

    fn apply(&mut self, target: TransitionTarget) {
        match target {
            TransitionTarget::Advance => {
                if self.state.walkthrough_step < self.last_step_index() {
                    self.state.walkthrough_step += 1;
                } else {
                    self.state.screen = Screen::Modes;
                    self.state.show_skip_dialog = false;
                }
            }
            TransitionTarget::Modes => {
                self.state.screen = Screen::Modes;
                self.state.show_skip_dialog = false;
            }
            TransitionTarget::Walkthrough => {
                if self.config.return_policy == ReturnPolicy::Reset {
                    self.state.walkthrough_step = 0;
                }
                self.state.screen = Screen::Walkthrough;
            }
        }
        tracing::info!(
            screen = ?self.state.screen,
            step = self.state.walkthrough_step,
            "transition applied"
        );
    }

    fn launch(&mut self, url: &str, now: Instant) {
        tracing::info!(url, "opening external destination");
        if let Err(e) = self.launcher.open(url) {
            self.show_notice(user_friendly_message(&e), NoticeKind::Error, now);
        }
    }

    fn show_notice(&mut self, message: String, kind: NoticeKind, now: Instant) {
        self.next_notice_id += 1;
        let id = self.next_notice_id;
        tracing::debug!(id, %message, "notice shown");
        self.state.notice = Some(Notice { id, message, kind });
        self.timers
            .schedule(now, self.config.notice_duration(), TimerEvent::DismissNotice { id });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::launcher::tests::RecordingLauncher;
    use crate::config::persistence::MemoryStore;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn controller(t0: Instant) -> ViewController {
        ViewController::new(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(RecordingLauncher::default()),
            t0,
        )
    }

    #[test]
    fn test_initial_entry_animation() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        assert_eq!(c.state().animation_phase(), PHASE_HIDDEN);

        c.tick(t0 + ms(99));
        assert_eq!(c.state().animation_phase(), PHASE_HIDDEN);
        c.tick(t0 + ms(100));
        assert!(c.state().is_entered());
    }

    #[test]
    fn test_advance_phases() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.tick(t0 + ms(100));

        c.advance(t0 + ms(100));
        assert!(c.state().is_transitioning());
        assert_eq!(c.state().walkthrough_step(), 0);

        c.tick(t0 + ms(300));
        assert!(!c.state().is_transitioning());
        assert_eq!(c.state().walkthrough_step(), 1);
        assert_eq!(c.state().animation_phase(), PHASE_HIDDEN);

        c.tick(t0 + ms(349));
        assert_eq!(c.state().animation_phase(), PHASE_HIDDEN);
        c.tick(t0 + ms(350));
        assert_eq!(c.state().animation_phase(), PHASE_SHOWN);
    }

    #[test]
    fn test_double_advance_moves_one_step() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.advance(t0);
        c.advance(t0 + ms(100));
        c.tick(t0 + ms(1000));

        assert_eq!(c.state().walkthrough_step(), 1);
        assert!(!c.state().is_transitioning());
        assert!(c.state().is_entered());
    }

    #[test]
    fn test_skip_supersedes_pending_advance() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.advance(t0);
        c.request_skip();
        c.confirm_skip(false, t0 + ms(50));
        c.tick(t0 + ms(1000));

        assert_eq!(c.state().screen(), Screen::Modes);
        assert_eq!(c.state().walkthrough_step(), 0);
    }

    #[test]
    fn test_skip_dialog_open_and_cancel() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.request_skip();
        assert!(c.state().show_skip_dialog());
        assert_eq!(c.state().screen(), Screen::Walkthrough);

        c.cancel_skip();
        assert!(!c.state().show_skip_dialog());
        assert_eq!(c.state().screen(), Screen::Walkthrough);
        assert!(!c.state().is_transitioning());
    }

    #[test]
    fn test_leaving_walkthrough_closes_late_dialog() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.advance(t0);
        c.tick(t0 + ms(500));
        c.advance(t0 + ms(500));
        c.tick(t0 + ms(1000));
        assert_eq!(c.state().walkthrough_step(), 2);

        // Skip requested while "Get Started" is still fading out
        c.advance(t0 + ms(1000));
        c.request_skip();
        c.tick(t0 + ms(1500));
        assert_eq!(c.state().screen(), Screen::Modes);
        assert!(!c.state().show_skip_dialog());

        c.return_to_walkthrough(t0 + ms(1500));
        c.tick(t0 + ms(2000));
        assert_eq!(c.state().screen(), Screen::Walkthrough);
        assert!(!c.state().show_skip_dialog());
    }

    #[test]
    fn test_return_policy_resume_and_reset() {
        for (policy, expected) in [(ReturnPolicy::Resume, 1), (ReturnPolicy::Reset, 0)] {
            let t0 = Instant::now();
            let mut c = ViewController::new(
                AppConfig::default().with_return_policy(policy),
                Box::new(MemoryStore::new()),
                Box::new(RecordingLauncher::default()),
                t0,
            );
            c.advance(t0);
            c.tick(t0 + ms(500));
            c.confirm_skip(false, t0 + ms(500));
            c.tick(t0 + ms(1000));
            assert_eq!(c.state().screen(), Screen::Modes);

            c.return_to_walkthrough(t0 + ms(1000));
            c.tick(t0 + ms(1500));
            assert_eq!(c.state().screen(), Screen::Walkthrough);
            assert_eq!(c.state().walkthrough_step(), expected, "{:?}", policy);
        }
    }

    #[test]
    fn test_advance_ignored_on_mode_screen() {
        let t0 = Instant::now();
        let mut store = MemoryStore::new();
        store.set(WALKTHROUGH_DISABLED_KEY, FLAG_SET);
        let mut c = ViewController::new(
            AppConfig::default(),
            Box::new(store),
            Box::new(RecordingLauncher::default()),
            t0,
        );

        c.advance(t0);
        assert!(!c.state().is_transitioning());
        assert_eq!(c.state().screen(), Screen::Modes);
    }

    #[test]
    fn test_select_mode_opens_after_delay() {
        let t0 = Instant::now();
        let launcher = RecordingLauncher::default();
        let opened = launcher.opened.clone();
        let mut c = ViewController::new(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(launcher),
            t0,
        );

        let mode = &research_modes()[1];
        c.select_mode(mode, t0);
        assert_eq!(c.state().selected_mode_id(), Some("research"));

        c.tick(t0 + ms(399));
        assert!(opened.borrow().is_empty());
        assert_eq!(c.state().selected_mode_id(), Some("research"));

        c.tick(t0 + ms(400));
        assert_eq!(*opened.borrow(), vec![mode.link.to_string()]);
        assert!(c.state().selected_mode_id().is_none());
    }

    #[test]
    fn test_failed_launch_clears_selection_and_notifies() {
        let t0 = Instant::now();
        let launcher = RecordingLauncher {
            fail: true,
            ..Default::default()
        };
        let mut c = ViewController::new(
            AppConfig::default(),
            Box::new(MemoryStore::new()),
            Box::new(launcher),
            t0,
        );

        c.select_mode(&research_modes()[0], t0);
        c.tick(t0 + ms(400));

        assert!(c.state().selected_mode_id().is_none());
        let notice = c.state().notice().expect("error notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.message.contains("biovit"));
    }

    #[test]
    fn test_unknown_mode_is_ignored() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        let stranger = ResearchMode {
            id: "unknown",
            ..research_modes()[0].clone()
        };

        let before = c.pending_timers();
        c.select_mode(&stranger, t0);
        assert!(c.state().selected_mode_id().is_none());
        assert_eq!(c.pending_timers(), before);
    }

    #[test]
    fn test_reselect_keeps_newer_selection() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.select_mode(&research_modes()[0], t0);
        c.select_mode(&research_modes()[2], t0 + ms(200));
        c.tick(t0 + ms(400));
        assert_eq!(c.state().selected_mode_id(), Some("advanced"));

        c.tick(t0 + ms(600));
        assert!(c.state().selected_mode_id().is_none());
    }

    #[test]
    fn test_placeholder_notices_expire() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.advance(t0);
        c.tick(t0 + ms(300));
        c.open_portfolio_entry(0, t0 + ms(300));
        assert_eq!(
            c.state().notice().map(|n| n.message.as_str()),
            Some(ADD_WORK_NOTICE)
        );

        c.tick(t0 + ms(2799));
        assert!(c.state().notice().is_some());
        c.tick(t0 + ms(2800));
        assert!(c.state().notice().is_none());
    }

    #[test]
    fn test_newer_notice_outlives_older_timer() {
        let t0 = Instant::now();
        let mut c = controller(t0);

        c.create_mode(t0);
        c.create_mode(t0 + ms(2000));
        c.tick(t0 + ms(2500));
        assert_eq!(
            c.state().notice().map(|n| n.message.as_str()),
            Some(CREATE_MODE_NOTICE)
        );

        c.dismiss_notice();
        assert!(c.state().notice().is_none());
    }

    #[test]
    fn test_portfolio_entry_outside_portfolio_step_is_noop() {
        let t0 = Instant::now();
        let mut c = controller(t0);
        c.open_portfolio_entry(0, t0);
        assert!(c.state().notice().is_none());
    }
}
