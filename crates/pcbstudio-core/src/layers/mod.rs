pub mod registry;
pub mod types;

// Re-export the main types for easy access
pub use registry::{LayerError, LayerRegistry};
pub use types::{default_layers, Layer};
