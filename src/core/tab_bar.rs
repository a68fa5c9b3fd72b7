//! # Tab Bar State
//!
//! Presses are forwarded, never applied: the tab bar reports which tab was
//! pressed and waits for the parent to hand back a new `active` prop. The
//! one-shot emphasis (scale up, settle back) plays when that prop changes.

use std::time::Duration;

use log::debug;

use crate::core::animation::{AnimatedValue, Easing, Generation, Tween};
use crate::core::tab::Tab;

pub const EMPHASIS_PEAK_SCALE: f32 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmphasisTimings {
    pub up: Duration,
    pub settle: Duration,
}

impl Default for EmphasisTimings {
    fn default() -> Self {
        Self {
            up: Duration::from_millis(150),
            settle: Duration::from_millis(150),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmphasisStage {
    Idle,
    Rising(Generation),
    Settling(Generation),
}

#[derive(Debug, Clone)]
struct Emphasis {
    scale: AnimatedValue,
    stage: EmphasisStage,
}

pub struct TabBarState {
    active: Tab,
    timings: EmphasisTimings,
    emphasis: Vec<Emphasis>,
}

impl TabBarState {
    /// The initial prop does not animate.
    pub fn new(active: Tab, timings: EmphasisTimings) -> Self {
        let emphasis = Tab::ALL
            .iter()
            .map(|_| Emphasis {
                scale: AnimatedValue::new(1.0),
                stage: EmphasisStage::Idle,
            })
            .collect();
        Self {
            active,
            timings,
            emphasis,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// A press is always reported, including a press on the active tab.
    pub fn press(&self, tab: Tab) -> Tab {
        debug!("Tab pressed: {} (active: {})", tab, self.active);
        tab
    }

    /// New `active` prop from the parent. Starts the emphasis if it changed.
    pub fn set_active(&mut self, tab: Tab, now: Duration) {
        if tab == self.active {
            return;
        }
        self.active = tab;

        let slot = &mut self.emphasis[tab.index()];
        let tween = Tween::new(self.timings.up, Easing::OutCubic);
        let generation = slot.scale.animate_to(EMPHASIS_PEAK_SCALE, now, tween);
        slot.stage = EmphasisStage::Rising(generation);
    }

    pub fn emphasis_scale(&self, tab: Tab) -> f32 {
        self.emphasis[tab.index()].scale.value()
    }

    pub fn is_animating(&self) -> bool {
        self.emphasis
            .iter()
            .any(|e| e.stage != EmphasisStage::Idle)
    }

    pub fn tick(&mut self, now: Duration) {
        let settle = Tween::new(self.timings.settle, Easing::InOutCubic);
        for slot in &mut self.emphasis {
            loop {
                let Some(done) = slot.scale.tick(now) else {
                    break;
                };
                match slot.stage {
                    EmphasisStage::Rising(generation) if generation == done.generation => {
                        let generation = slot.scale.animate_to(1.0, done.finished_at, settle);
                        slot.stage = EmphasisStage::Settling(generation);
                    }
                    EmphasisStage::Settling(generation) if generation == done.generation => {
                        slot.stage = EmphasisStage::Idle;
                        break;
                    }
                    _ => break,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ms;

    #[test]
    fn test_initial_active_tab_does_not_animate() {
        let bar = TabBarState::new(Tab::Plan, EmphasisTimings::default());
        assert_eq!(bar.active(), Tab::Plan);
        assert!(!bar.is_animating());
        for tab in Tab::ALL {
            assert_eq!(bar.emphasis_scale(tab), 1.0);
        }
    }

    #[test]
    fn test_press_reports_without_changing_active() {
        let bar = TabBarState::new(Tab::Home, EmphasisTimings::default());
        assert_eq!(bar.press(Tab::Stats), Tab::Stats);
        assert_eq!(bar.press(Tab::Home), Tab::Home);
        assert_eq!(bar.active(), Tab::Home);
    }

    #[test]
    fn test_emphasis_scales_up_then_settles() {
        let mut bar = TabBarState::new(Tab::Home, EmphasisTimings::default());
        bar.set_active(Tab::Stats, ms(0));

        bar.tick(ms(75));
        let rising = bar.emphasis_scale(Tab::Stats);
        assert!(rising > 1.0 && rising < EMPHASIS_PEAK_SCALE);

        bar.tick(ms(150));
        assert!((bar.emphasis_scale(Tab::Stats) - EMPHASIS_PEAK_SCALE).abs() < 1e-5);
        assert!(bar.is_animating());

        bar.tick(ms(300));
        assert_eq!(bar.emphasis_scale(Tab::Stats), 1.0);
        assert!(!bar.is_animating());
        assert_eq!(bar.emphasis_scale(Tab::Home), 1.0);
    }

    #[test]
    fn test_same_tab_prop_does_not_replay_emphasis() {
        let mut bar = TabBarState::new(Tab::Home, EmphasisTimings::default());
        bar.set_active(Tab::Home, ms(0));
        assert!(!bar.is_animating());
    }

    #[test]
    fn test_reactivating_mid_emphasis_supersedes() {
        let mut bar = TabBarState::new(Tab::Home, EmphasisTimings::default());
        bar.set_active(Tab::Stats, ms(0));
        bar.tick(ms(100));
        bar.set_active(Tab::Home, ms(100));
        bar.set_active(Tab::Stats, ms(120));

        bar.tick(ms(10_000));
        assert_eq!(bar.emphasis_scale(Tab::Stats), 1.0);
        assert_eq!(bar.emphasis_scale(Tab::Home), 1.0);
        assert!(!bar.is_animating());
    }
}
