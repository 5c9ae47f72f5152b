//! Hidden activation triggers: click count, key sequence, typed words,
//! device shake, plus the hint nudges from corner dwelling and right-clicks.

mod detector;
mod hints;
mod motion;
mod sequence;

pub use detector::{Detection, TriggerDetector};
pub use hints::HintState;
pub use motion::{EdgeDwell, ShakeSampler};
pub use sequence::{KeyWindow, TypedBuffer};
