//! Frame-driven growth animation
//!
//! A linear clock advances progress once per display frame; the frame loop
//! drives it and carries the cancellation flag. A session ties both to the
//! stage table of one variant.

mod clock;
mod frame_loop;
mod session;

pub use clock::{ClockParams, FULL_GROWTH, GrowthClock};
pub use frame_loop::FrameLoop;
pub use session::{FrameOutcome, GrowthSession};
