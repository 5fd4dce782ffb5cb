pub mod description;
pub mod geometry;

// Re-export the main types for easy access
pub use description::{
    MountType, PadDescription, PadError, PadLayerSet, PadShape, RawPadDescription, ThermalRelief,
};
pub use geometry::{compute_geometry, pad_figure, PadGeometry};
