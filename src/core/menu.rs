//! # FAB Menu Controller
//!
//! State machine behind the floating action button, the dimming overlay and
//! the radial fan of quick-action buttons.
//!
//! ```text
//!            PressFab                 last pop-in done
//!  Closed ─────────────▶ Opening ───────────────────────▶ Open
//!    ▲                                                     │
//!    │  last retraction done          PressFab/PressOverlay│
//!    ├──────────────────────── Closing ◀───────────────────┤
//!    │                                                     │ PressAction(i)
//!    └──────────────────── ClosingViaAction ◀──────────────┘
//!                 (fade ▸ pause ▸ retract)
//! ```
//!
//! While a transition is running, input is gated by [`TapPolicy`].
//! Stage changes are driven by completions whose generation matches the one
//! recorded when the stage started, so a superseded animation can never
//! advance the machine.

use std::str::FromStr;
use std::time::Duration;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::animation::{AnimatedValue, Completion, Easing, Generation, Tween};
use crate::core::geometry::{ArcLayout, ButtonFrame};
use crate::core::quick_action::{ActionId, QuickAction};

pub const FAB_OPEN_DEGREES: f32 = 45.0;
pub const OVERLAY_MAX_OPACITY: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuPhase {
    Closed,
    Opening,
    Open,
    Closing,
    ClosingViaAction,
}

impl MenuPhase {
    pub fn is_transitioning(self) -> bool {
        matches!(
            self,
            MenuPhase::Opening | MenuPhase::Closing | MenuPhase::ClosingViaAction
        )
    }
}

/// What to do with a tap that arrives mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TapPolicy {
    /// Drop it.
    #[default]
    Ignore,
    /// Keep the latest one and replay it when the transition finishes.
    Queue,
}

impl FromStr for TapPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ignore" => Ok(TapPolicy::Ignore),
            "queue" => Ok(TapPolicy::Queue),
            other => Err(format!("unknown tap policy '{other}' (expected ignore or queue)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuTimings {
    /// FAB rotation and overlay fade-in.
    pub open: Duration,
    /// Per-button pop-in.
    pub pop: Duration,
    pub open_stagger: Duration,
    /// FAB rotation and overlay fade-out.
    pub close: Duration,
    /// Per-button retraction.
    pub retract: Duration,
    pub close_stagger: Duration,
    /// Gap between the fade-out and the retraction when closing via an action.
    pub action_pause: Duration,
}

impl Default for MenuTimings {
    fn default() -> Self {
        Self {
            open: Duration::from_millis(300),
            pop: Duration::from_millis(350),
            open_stagger: Duration::from_millis(100),
            close: Duration::from_millis(200),
            retract: Duration::from_millis(200),
            close_stagger: Duration::from_millis(60),
            action_pause: Duration::from_millis(100),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    PressFab,
    PressOverlay,
    PressAction(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Every button finished its pop-in.
    Opened,
    /// The close sequence finished and all values are back at rest.
    Closed,
    /// The action's callback has run.
    ActionInvoked(ActionId),
}

/// Which completion the machine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Idle,
    /// Waiting for the last button's pop-in.
    Entering { tail: Generation },
    /// Waiting for the overlay fade-out before retracting (action close).
    Fading { overlay: Generation },
    /// Waiting for the last button's retraction.
    Retracting { tail: Generation },
}

pub struct MenuController {
    phase: MenuPhase,
    stage: Stage,
    policy: TapPolicy,
    timings: MenuTimings,
    layout: ArcLayout,
    actions: Vec<QuickAction>,
    rotation: AnimatedValue,
    overlay: AnimatedValue,
    buttons: Vec<AnimatedValue>,
    buttons_settled: bool,
    queued: Option<MenuInput>,
}

impl MenuController {
    pub fn new(
        actions: Vec<QuickAction>,
        timings: MenuTimings,
        layout: ArcLayout,
        policy: TapPolicy,
    ) -> Self {
        let buttons = actions.iter().map(|_| AnimatedValue::new(0.0)).collect();
        Self {
            phase: MenuPhase::Closed,
            stage: Stage::Idle,
            policy,
            timings,
            layout,
            actions,
            rotation: AnimatedValue::new(0.0),
            overlay: AnimatedValue::new(0.0),
            buttons,
            buttons_settled: false,
            queued: None,
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    /// Menu state as the rest of the UI sees it: true from the FAB tap until
    /// the close sequence has fully finished.
    pub fn is_open(&self) -> bool {
        self.phase != MenuPhase::Closed
    }

    /// True once every button has completed its pop-in for the current open.
    pub fn buttons_settled(&self) -> bool {
        self.buttons_settled
    }

    pub fn is_animating(&self) -> bool {
        self.stage != Stage::Idle
            || self.rotation.is_running()
            || self.overlay.is_running()
            || self.buttons.iter().any(AnimatedValue::is_running)
    }

    pub fn actions(&self) -> &[QuickAction] {
        &self.actions
    }

    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.rotation.value() * FAB_OPEN_DEGREES
    }

    pub fn overlay_opacity(&self) -> f32 {
        self.overlay.value()
    }

    pub fn queued_input(&self) -> Option<MenuInput> {
        self.queued
    }

    /// Current frame of every action button, in fan order.
    pub fn button_frames(&self) -> Vec<ButtonFrame> {
        let count = self.buttons.len();
        self.buttons
            .iter()
            .enumerate()
            .map(|(i, progress)| self.layout.frame(i, count, progress.value()))
            .collect()
    }

    /// Apply a user tap at time `now`.
    pub fn handle(&mut self, input: MenuInput, now: Duration) -> Vec<MenuEvent> {
        if self.phase.is_transitioning() {
            match self.policy {
                TapPolicy::Ignore => {
                    debug!("Ignoring {:?} during {:?}", input, self.phase);
                }
                TapPolicy::Queue => {
                    debug!("Queueing {:?} during {:?}", input, self.phase);
                    self.queued = Some(input);
                }
            }
            return Vec::new();
        }

        let mut events = Vec::new();
        match (self.phase, input) {
            (MenuPhase::Closed, MenuInput::PressFab) => self.open(now),
            (MenuPhase::Open, MenuInput::PressFab | MenuInput::PressOverlay) => self.close(now),
            (MenuPhase::Open, MenuInput::PressAction(index)) => {
                let Some(action) = self.actions.get(index) else {
                    debug!("No quick action at index {}", index);
                    return events;
                };
                let id = action.id;
                info!("Invoking quick action {}", id);
                action.invoke();
                events.push(MenuEvent::ActionInvoked(id));
                self.close_via_action(now);
            }
            (phase, input) => debug!("{:?} has no effect while {:?}", input, phase),
        }
        events
    }

    /// Advance every animation to `now` and run any stage transitions that
    /// became due. Transitions are timed from the exact completion instant,
    /// so the outcome does not depend on how often this is called.
    pub fn tick(&mut self, now: Duration) -> Vec<MenuEvent> {
        let mut events = Vec::new();
        loop {
            // Rotation always runs alongside the overlay; only the overlay
            // completion is ever waited on.
            self.rotation.tick(now);
            let overlay_done = self.overlay.tick(now);
            let button_done: Vec<Option<Completion>> =
                self.buttons.iter_mut().map(|b| b.tick(now)).collect();

            if !self.advance_stage(overlay_done, &button_done, &mut events) {
                break;
            }
        }
        events
    }

    /// Returns true if the stage changed (and the values need another tick).
    fn advance_stage(
        &mut self,
        overlay_done: Option<Completion>,
        button_done: &[Option<Completion>],
        events: &mut Vec<MenuEvent>,
    ) -> bool {
        let last_button = button_done.last().copied().flatten();
        match self.stage {
            Stage::Idle => false,
            Stage::Entering { tail } => match last_button {
                Some(done) if done.generation == tail => {
                    self.stage = Stage::Idle;
                    self.phase = MenuPhase::Open;
                    self.buttons_settled = true;
                    debug!("Menu open at {:?}", done.finished_at);
                    events.push(MenuEvent::Opened);
                    self.replay_queued(done.finished_at, events);
                    true
                }
                _ => false,
            },
            Stage::Fading { overlay } => match overlay_done {
                Some(done) if done.generation == overlay => {
                    let tail = self.retract_buttons(done.finished_at + self.timings.action_pause);
                    self.stage = Stage::Retracting { tail };
                    true
                }
                _ => false,
            },
            Stage::Retracting { tail } => match last_button {
                Some(done) if done.generation == tail => {
                    self.reset();
                    debug!("Menu closed at {:?}", done.finished_at);
                    events.push(MenuEvent::Closed);
                    self.replay_queued(done.finished_at, events);
                    true
                }
                _ => false,
            },
        }
    }

    /// Replayed at the completion instant; the next pass of the tick loop
    /// catches the new animations up.
    fn replay_queued(&mut self, at: Duration, events: &mut Vec<MenuEvent>) {
        if let Some(input) = self.queued.take() {
            debug!("Replaying queued {:?}", input);
            events.extend(self.handle(input, at));
        }
    }

    fn open(&mut self, now: Duration) {
        info!("Opening quick-action menu");
        self.phase = MenuPhase::Opening;
        self.buttons_settled = false;

        let fade = Tween::new(self.timings.open, Easing::OutCubic);
        self.rotation.animate_to(1.0, now, fade);
        self.overlay.animate_to(OVERLAY_MAX_OPACITY, now, fade);

        let mut tail = None;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            let tween = Tween::new(self.timings.pop, Easing::OutBack)
                .delayed(self.timings.open_stagger * i as u32);
            tail = Some(button.animate_to(1.0, now, tween));
        }

        self.stage = match tail {
            Some(tail) => Stage::Entering { tail },
            // No buttons: nothing to wait for.
            None => {
                self.phase = MenuPhase::Open;
                self.buttons_settled = true;
                Stage::Idle
            }
        };
    }

    fn close(&mut self, now: Duration) {
        info!("Closing quick-action menu");
        self.phase = MenuPhase::Closing;
        self.fade_out(now);
        match self.retract_buttons(now) {
            0 => {
                self.reset();
            }
            tail => self.stage = Stage::Retracting { tail },
        }
    }

    fn close_via_action(&mut self, now: Duration) {
        self.phase = MenuPhase::ClosingViaAction;
        let overlay = self.fade_out(now);
        self.stage = Stage::Fading { overlay };
    }

    fn fade_out(&mut self, now: Duration) -> Generation {
        let tween = Tween::new(self.timings.close, Easing::InOutCubic);
        self.rotation.animate_to(0.0, now, tween);
        self.overlay.animate_to(0.0, now, tween)
    }

    /// Start the staggered retraction; returns the last button's generation
    /// (0 when there are no buttons).
    fn retract_buttons(&mut self, at: Duration) -> Generation {
        let mut tail = 0;
        for (i, button) in self.buttons.iter_mut().enumerate() {
            let tween = Tween::new(self.timings.retract, Easing::InOutCubic)
                .delayed(self.timings.close_stagger * i as u32);
            tail = button.animate_to(0.0, at, tween);
        }
        tail
    }

    fn reset(&mut self) {
        self.phase = MenuPhase::Closed;
        self.stage = Stage::Idle;
        self.buttons_settled = false;
        self.rotation.set(0.0);
        self.overlay.set(0.0);
        for button in &mut self.buttons {
            button.set(0.0);
        }
    }
}
