//! # Animation Values
//!
//! Plain numeric tweens advanced by the host loop. Nothing here reads a clock:
//! every call takes `now` as a `Duration` since some fixed start, so the same
//! inputs always produce the same frames.
//!
//! ```text
//! animate_to(target, now, tween)  →  generation += 1
//! tick(now)                       →  value updated, Some(Completion) once
//! ```
//!
//! Starting a new animation on a value supersedes whatever was in flight.
//! The generation counter lets owners tell a fresh completion from a stale one:
//! a completion is only meaningful if its generation is the one the owner
//! recorded when it started the animation.

use std::time::Duration;

/// Easing curves, applied to normalized time `t` in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    Linear,
    OutCubic,
    InOutCubic,
    /// Overshoots past 1.0 before settling (pop-in feel).
    OutBack,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::OutCubic => 1.0 - (1.0 - t).powi(3),
            Easing::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::OutBack => {
                const C1: f32 = 1.70158;
                const C3: f32 = C1 + 1.0;
                1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
            }
        }
    }
}

/// Timing for a single animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub duration: Duration,
    pub delay: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: Duration, easing: Easing) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

pub type Generation = u64;

/// Reported by `AnimatedValue::tick` on the first tick at or after the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub generation: Generation,
    /// Exact time the animation reached its target, independent of tick rate.
    pub finished_at: Duration,
}

#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f32,
    from: f32,
    target: f32,
    start: Duration,
    tween: Tween,
    generation: Generation,
    running: bool,
}

impl AnimatedValue {
    pub fn new(value: f32) -> Self {
        Self {
            value,
            from: value,
            target: value,
            start: Duration::ZERO,
            tween: Tween::new(Duration::ZERO, Easing::Linear),
            generation: 0,
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start animating from the current value toward `target`.
    ///
    /// Returns the generation of the new animation. Any animation already in
    /// flight is superseded and will never report a completion.
    pub fn animate_to(&mut self, target: f32, now: Duration, tween: Tween) -> Generation {
        self.generation += 1;
        self.from = self.value;
        self.target = target;
        self.start = now + tween.delay;
        self.tween = tween;
        self.running = true;
        self.generation
    }

    /// Jump to `value` without animating. Supersedes anything in flight.
    pub fn set(&mut self, value: f32) {
        self.generation += 1;
        self.value = value;
        self.from = value;
        self.target = value;
        self.running = false;
    }

    /// Advance to `now`. Returns a completion exactly once per animation.
    pub fn tick(&mut self, now: Duration) -> Option<Completion> {
        if !self.running || now < self.start {
            return None;
        }

        let elapsed = now - self.start;
        if elapsed >= self.tween.duration {
            self.value = self.target;
            self.running = false;
            return Some(Completion {
                generation: self.generation,
                finished_at: self.start + self.tween.duration,
            });
        }

        let t = elapsed.as_secs_f32() / self.tween.duration.as_secs_f32();
        self.value = self.from + (self.target - self.from) * self.tween.easing.apply(t);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_easing_endpoints() {
        for easing in [
            Easing::Linear,
            Easing::OutCubic,
            Easing::InOutCubic,
            Easing::OutBack,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_out_back_overshoots() {
        let peak = (1..100)
            .map(|i| Easing::OutBack.apply(i as f32 / 100.0))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_linear_tween_interpolates() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, ms(0), Tween::new(ms(100), Easing::Linear));

        assert_eq!(value.tick(ms(50)), None);
        assert!((value.value() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_completion_fires_once_with_exact_finish_time() {
        let mut value = AnimatedValue::new(0.0);
        let generation = value.animate_to(2.0, ms(10), Tween::new(ms(100), Easing::OutCubic));

        let completion = value.tick(ms(500)).unwrap();
        assert_eq!(completion.generation, generation);
        assert_eq!(completion.finished_at, ms(110));
        assert_eq!(value.value(), 2.0);
        assert!(!value.is_running());
        assert_eq!(value.tick(ms(600)), None);
    }

    #[test]
    fn test_delay_holds_start_value() {
        let mut value = AnimatedValue::new(0.25);
        value.animate_to(
            1.0,
            ms(0),
            Tween::new(ms(100), Easing::Linear).delayed(ms(200)),
        );

        assert_eq!(value.tick(ms(150)), None);
        assert_eq!(value.value(), 0.25);
        assert!(value.tick(ms(300)).is_some());
    }

    #[test]
    fn test_superseded_animation_reports_new_generation_only() {
        let mut value = AnimatedValue::new(0.0);
        let first = value.animate_to(1.0, ms(0), Tween::new(ms(100), Easing::Linear));
        value.tick(ms(50));
        let second = value.animate_to(0.0, ms(50), Tween::new(ms(100), Easing::Linear));

        assert_ne!(first, second);
        let completion = value.tick(ms(1000)).unwrap();
        assert_eq!(completion.generation, second);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_superseded_animation_starts_from_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, ms(0), Tween::new(ms(100), Easing::Linear));
        value.tick(ms(50));
        value.animate_to(0.0, ms(50), Tween::new(ms(100), Easing::Linear));
        value.tick(ms(100));

        // halfway from 0.5 back to 0.0
        assert!((value.value() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_target_tracks_latest_request() {
        let mut value = AnimatedValue::new(0.0);
        assert_eq!(value.target(), 0.0);

        value.animate_to(1.0, ms(0), Tween::new(ms(100), Easing::Linear));
        value.tick(ms(50));
        assert_eq!(value.target(), 1.0);
        assert!(value.value() < value.target());

        value.animate_to(0.25, ms(50), Tween::new(ms(100), Easing::Linear));
        assert_eq!(value.target(), 0.25);

        value.set(0.75);
        assert_eq!(value.target(), 0.75);
        assert_eq!(value.value(), 0.75);
    }

    #[test]
    fn test_set_cancels_running_animation() {
        let mut value = AnimatedValue::new(0.0);
        let generation = value.animate_to(1.0, ms(0), Tween::new(ms(100), Easing::Linear));
        value.set(0.0);

        assert!(value.generation() > generation);
        assert_eq!(value.tick(ms(200)), None);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_tick() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(1.0, ms(5), Tween::new(Duration::ZERO, Easing::OutBack));

        let completion = value.tick(ms(5)).unwrap();
        assert_eq!(completion.finished_at, ms(5));
        assert_eq!(value.value(), 1.0);
    }
}
