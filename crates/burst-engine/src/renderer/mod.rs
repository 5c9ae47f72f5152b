pub mod disc_instance;
pub mod traits;

// Re-export key types for convenient access
pub use disc_instance::{DiscInstance, DiscBuffer};
pub use traits::Renderer;
