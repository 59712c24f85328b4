//! Linear growth clock
//!
//! Advances progress by a fixed step per display frame from seed (0) to
//! fully grown (100).

use serde::Deserialize;

/// Progress of a fully grown plant; stage and visibility thresholds are
/// all expressed against this scale
pub const FULL_GROWTH: f32 = 100.0;

/// Parameters controlling how fast progress advances
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClockParams {
    /// Progress added per frame
    pub step: f32,
}

impl Default for ClockParams {
    fn default() -> Self {
        Self { step: 0.5 }
    }
}

impl ClockParams {
    pub fn validate(&self) -> Result<(), String> {
        if self.step.is_nan() || self.step <= 0.0 {
            return Err(format!("clock step must be positive, got {}", self.step));
        }
        if self.step > FULL_GROWTH {
            return Err(format!("clock step must not exceed {}, got {}", FULL_GROWTH, self.step));
        }
        Ok(())
    }
}

/// Growth progress state
#[derive(Debug, Clone)]
pub struct GrowthClock {
    params: ClockParams,
    progress: f32,
    running: bool,
}

impl Default for GrowthClock {
    fn default() -> Self {
        Self::new(ClockParams::default())
    }
}

impl GrowthClock {
    pub fn new(params: ClockParams) -> Self {
        Self {
            params,
            progress: 0.0,
            running: false,
        }
    }

    /// Restart from the seed and begin advancing
    pub fn start(&mut self) {
        self.progress = 0.0;
        self.running = true;
    }

    /// Stop advancing and return to the seed
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.running = false;
    }

    /// Advance one frame. Returns the new progress, or `None` when halted.
    ///
    /// The tick that reaches full growth still returns it and halts the clock.
    pub fn tick(&mut self) -> Option<f32> {
        if !self.running {
            return None;
        }

        self.progress = (self.progress + self.params.step).min(FULL_GROWTH);
        if self.progress >= FULL_GROWTH {
            self.running = false;
        }

        Some(self.progress)
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= FULL_GROWTH
    }

    /// Jump to a progress value without starting the clock
    pub fn set_progress(&mut self, progress: f32) {
        self.progress = progress.clamp(0.0, FULL_GROWTH);
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_idle_until_started() {
        let mut clock = GrowthClock::default();
        assert!(!clock.is_running());
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_clock_steps_by_half_to_exactly_100() {
        let mut clock = GrowthClock::default();
        clock.start();

        let mut prev = clock.progress();
        let mut ticks = 0;
        while let Some(p) = clock.tick() {
            assert_eq!(p - prev, 0.5);
            assert!(p <= 100.0);
            prev = p;
            ticks += 1;
        }

        assert_eq!(ticks, 200);
        assert_eq!(clock.progress(), 100.0);
        assert!(clock.is_complete());
        assert!(!clock.is_running());
        assert_eq!(clock.tick(), None);
        assert_eq!(clock.progress(), 100.0);
    }

    #[test]
    fn test_clock_clamps_uneven_step() {
        let mut clock = GrowthClock::new(ClockParams { step: 30.0 });
        clock.start();
        let seen: Vec<f32> = std::iter::from_fn(|| clock.tick()).collect();
        assert_eq!(seen, vec![30.0, 60.0, 90.0, 100.0]);
    }

    #[test]
    fn test_reset_from_any_state() {
        let mut clock = GrowthClock::default();
        clock.reset();
        assert_eq!(clock.progress(), 0.0);

        clock.start();
        for _ in 0..37 {
            clock.tick();
        }
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
        assert!(!clock.is_running());

        clock.set_progress(100.0);
        clock.reset();
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_start_restarts_from_seed() {
        let mut clock = GrowthClock::default();
        clock.set_progress(70.0);
        clock.start();
        assert_eq!(clock.progress(), 0.0);
        assert_eq!(clock.tick(), Some(0.5));
    }

    #[test]
    fn test_set_progress_clamps() {
        let mut clock = GrowthClock::default();
        clock.set_progress(140.0);
        assert_eq!(clock.progress(), 100.0);
        clock.set_progress(-3.0);
        assert_eq!(clock.progress(), 0.0);
    }

    #[test]
    fn test_params_validation() {
        assert!(ClockParams::default().validate().is_ok());
        assert!(ClockParams { step: 0.0 }.validate().is_err());
        assert!(ClockParams { step: f32::NAN }.validate().is_err());
        assert!(ClockParams { step: 150.0 }.validate().is_err());
        assert!(ClockParams { step: 100.0 }.validate().is_ok());
    }
}
