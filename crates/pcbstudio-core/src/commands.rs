use log::info;

use crate::color::Color;
use crate::drawing::{DrawingController, DrawingMode};
use crate::layers::{LayerError, LayerRegistry};
use crate::pad::{pad_figure, PadError, RawPadDescription};
use crate::scene::{Position, PrimitiveId, Scene};

/// Editor messages dispatched from UI wiring (menus, toolbars, dialogs,
/// checkboxes) to the core. Keeping these as plain data decouples the host
/// shell from registry and controller internals.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorCommand {
    AddLayer {
        name: String,
        color: Color,
        z_order: i32,
    },
    RemoveLayer {
        name: String,
    },
    ShowLayer {
        name: String,
    },
    HideLayer {
        name: String,
    },
    ClearLayer {
        name: String,
    },
    SetLayerColor {
        name: String,
        color: Color,
    },
    SetActiveLayer {
        name: String,
    },
    SetDrawingMode(DrawingMode),
    SetDrawingColor(Color),
    /// Confirmed pad from the property dialog, placed at a scene position
    /// and filed under a layer.
    PlacePad {
        layer: String,
        description: RawPadDescription,
        position: Position,
    },
}

/// Command dispatch errors; all recoverable, meant to be shown to the user
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Layer(#[from] LayerError),

    #[error(transparent)]
    Pad(#[from] PadError),
}

/// Apply one editor command against the core state. Every command completes
/// fully (including scene cascades) before control returns, so command
/// streams are processed strictly one at a time.
///
/// Returns the placed primitive handle for commands that create one.
pub fn dispatch(
    command: EditorCommand,
    registry: &mut LayerRegistry,
    scene: &mut Scene,
    controller: &mut DrawingController,
) -> Result<Option<PrimitiveId>, CommandError> {
    match command {
        EditorCommand::AddLayer {
            name,
            color,
            z_order,
        } => {
            registry.add_layer(name.clone(), color, z_order)?;
            info!("layer '{}' added", name);
            Ok(None)
        }
        EditorCommand::RemoveLayer { name } => {
            registry.remove_layer(scene, &name)?;
            info!("layer '{}' removed", name);
            Ok(None)
        }
        EditorCommand::ShowLayer { name } => {
            registry.show_layer(scene, &name)?;
            Ok(None)
        }
        EditorCommand::HideLayer { name } => {
            registry.hide_layer(scene, &name)?;
            Ok(None)
        }
        EditorCommand::ClearLayer { name } => {
            registry.clear_layer(scene, &name)?;
            Ok(None)
        }
        EditorCommand::SetLayerColor { name, color } => {
            registry.set_layer_color(scene, &name, color)?;
            Ok(None)
        }
        EditorCommand::SetActiveLayer { name } => {
            registry.set_active_layer(&name)?;
            Ok(None)
        }
        EditorCommand::SetDrawingMode(mode) => {
            controller.set_mode(mode);
            Ok(None)
        }
        EditorCommand::SetDrawingColor(color) => {
            controller.set_stroke_color(color);
            Ok(None)
        }
        EditorCommand::PlacePad {
            layer,
            description,
            position,
        } => {
            let desc = description.resolve()?;
            let figure = pad_figure(&desc, position);
            let id = registry.add_item(scene, &layer, figure, Color::COPPER_STROKE, None)?;
            info!("pad placed on '{}' at ({}, {})", layer, position.x, position.y);
            Ok(Some(id))
        }
    }
}
