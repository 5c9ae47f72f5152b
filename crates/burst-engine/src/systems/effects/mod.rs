//! Celebration particle effects.
//!
//! [`Stage`] owns the particles and steps them each frame; [`Particle`]
//! holds the per-disc motion rule. Randomness is injected through
//! [`RandomSource`] so tests can replay exact sequences.

mod rng;
mod disc_color;
mod particle;
mod stage;

// Re-export public types
pub use rng::{RandomSource, Rng, SequenceSource};
pub use disc_color::{DiscColor, DEFAULT_PALETTE};
pub use particle::{Particle, Phase, Surroundings, flee_velocity};
pub use stage::Stage;
