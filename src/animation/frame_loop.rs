//! Cooperative per-frame driver
//!
//! The host display loop calls [`FrameLoop::step`] once per frame and keeps
//! requesting frames for as long as it returns `true`. Cancelling disarms the
//! loop, so a frame that was already requested does nothing.

use super::clock::GrowthClock;

#[derive(Debug, Clone, Default)]
pub struct FrameLoop {
    armed: bool,
    /// Keep redrawing after growth completes (idle sway)
    keep_alive: bool,
    elapsed: f32,
    frames: u64,
}

impl FrameLoop {
    pub fn new(keep_alive: bool) -> Self {
        Self {
            keep_alive,
            ..Default::default()
        }
    }

    pub fn arm(&mut self) {
        self.armed = true;
    }

    pub fn cancel(&mut self) {
        self.armed = false;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Seconds accumulated over armed frames
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Frames drawn since creation
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame: tick the clock and hand `(progress, elapsed)` to `draw`.
    ///
    /// Returns whether another frame should be requested.
    pub fn step<F>(&mut self, dt: f32, clock: &mut GrowthClock, mut draw: F) -> bool
    where
        F: FnMut(f32, f32),
    {
        if !self.armed {
            return false;
        }

        self.elapsed += dt.max(0.0);

        let progress = match clock.tick() {
            Some(progress) => Some(progress),
            None if self.keep_alive => Some(clock.progress()),
            None => None,
        };

        if let Some(progress) = progress {
            draw(progress, self.elapsed);
            self.frames += 1;
        }

        if !clock.is_running() && !self.keep_alive {
            self.armed = false;
        }

        self.armed
    }

    /// Drive frames with a fixed `dt` until the clock halts or the loop is
    /// cancelled. Returns the number of frames drawn.
    pub fn run<F>(&mut self, dt: f32, clock: &mut GrowthClock, mut draw: F) -> u64
    where
        F: FnMut(f32, f32),
    {
        let start = self.frames;
        while clock.is_running() && self.step(dt, clock, &mut draw) {}
        self.frames - start
    }
}
