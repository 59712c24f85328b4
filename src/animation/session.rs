//! One growth run from seed to maturity, independent of any drawing surface
//!
//! Couples the clock with the frame loop and reports stage changes and
//! completion as they happen. The viewer only has to draw what a step
//! hands back.

use crate::growth::{GrowthStage, Variant, resolve_stage, stage_index};
use super::clock::{ClockParams, GrowthClock};
use super::frame_loop::FrameLoop;

/// What a single frame produced
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOutcome {
    /// `(progress, elapsed)` to draw, if the frame drew at all
    pub draw: Option<(f32, f32)>,
    /// Whether the host should request another frame
    pub again: bool,
    /// New stage index when this frame crossed into another stage
    pub stage_changed: Option<usize>,
    /// Set on the one frame where growth finished
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct GrowthSession {
    stages: &'static [GrowthStage],
    clock: GrowthClock,
    frames: FrameLoop,
    /// Last stage reported
    stage: usize,
    completed: bool,
}

impl GrowthSession {
    pub fn new(variant: Variant, params: ClockParams) -> Self {
        Self {
            stages: variant.stages(),
            clock: GrowthClock::new(params),
            frames: FrameLoop::new(variant.is_3d()),
            stage: 0,
            completed: false,
        }
    }

    /// Grow from the seed
    pub fn start(&mut self) {
        self.clock.start();
        self.frames.arm();
        self.stage = 0;
        self.completed = false;
        log::info!("Growth started");
    }

    /// Stop growing and return to the seed. A frame already requested by the
    /// host draws nothing.
    pub fn reset(&mut self) {
        self.frames.cancel();
        self.clock.reset();
        self.stage = 0;
        self.completed = false;
        log::info!("Growth reset");
    }

    pub fn step(&mut self, dt: f32) -> FrameOutcome {
        let mut draw = None;
        let again = self.frames.step(dt, &mut self.clock, |progress, elapsed| {
            draw = Some((progress, elapsed));
        });

        let mut outcome = FrameOutcome { draw, again, ..Default::default() };
        let Some((progress, _)) = draw else {
            return outcome;
        };

        let index = stage_index(self.stages, progress);
        if index != self.stage {
            self.stage = index;
            outcome.stage_changed = Some(index);
            log::info!("Stage {}: {} ({:.1}%)", index, self.stages[index].name, progress);
        }
        if self.clock.is_complete() && !self.completed {
            self.completed = true;
            outcome.completed = true;
            log::info!("Growth complete after {} frames", self.frames.frames());
        }
        outcome
    }

    pub fn progress(&self) -> f32 {
        self.clock.progress()
    }

    pub fn elapsed(&self) -> f32 {
        self.frames.elapsed()
    }

    pub fn stage(&self) -> &'static GrowthStage {
        resolve_stage(self.stages, self.clock.progress())
    }

    pub fn is_growing(&self) -> bool {
        self.clock.is_running()
    }
}
