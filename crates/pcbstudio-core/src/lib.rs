// PCB Studio Core Library
// Layer registry, pad geometry model and drawing controller for the editor

pub mod color;
pub mod commands;
pub mod drawing;
pub mod layers;
pub mod pad;
pub mod platform;
pub mod scene;
pub mod settings;
pub mod units;

pub use color::Color;
pub use commands::{dispatch, CommandError, EditorCommand};
pub use drawing::{DrawingController, DrawingMode};
pub use layers::{LayerError, LayerRegistry};
pub use pad::{PadDescription, PadError, RawPadDescription};
pub use scene::{Position, PrimitiveId, Scene};
pub use settings::{Settings, SettingsManager};
