use log::warn;
use nalgebra::Vector2;

use crate::color::Color;
use crate::layers::LayerRegistry;
use crate::scene::{EllipseShape, Line, Position, Primitive, PrimitiveId, Rect, RectShape, Scene};

/// Drawing tools available on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawingMode {
    #[default]
    Select,
    Line,
    Rect,
    Ellipse,
}

/// Turns pointer events from the host view into scene primitives filed under
/// the active layer.
///
/// While the button is down, the primitive being drawn lives on the scene as
/// a rubber-band preview without a layer; releasing commits it through the
/// registry (or discards it when no layer is active, so nothing is ever left
/// on the canvas unregistered). Coordinates are scene coordinates; mapping
/// from device pixels is the host's job.
#[derive(Debug, Default)]
pub struct DrawingController {
    mode: DrawingMode,
    stroke_color: Color,
    start: Option<Vector2<f64>>,
    preview: Option<PrimitiveId>,
}

impl DrawingController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    /// True while a rubber-band preview is on the scene
    pub fn is_drawing(&self) -> bool {
        self.preview.is_some()
    }

    /// Begin a drawing gesture. In `Select` mode this does nothing.
    pub fn pointer_pressed(&mut self, scene: &mut Scene, pos: Vector2<f64>) {
        if self.preview.is_some() {
            // A stray second press mid-gesture; keep the original gesture.
            return;
        }
        let primitive = match self.mode {
            DrawingMode::Select => return,
            DrawingMode::Line => Primitive::Line(Line::new(pos.into(), pos.into())),
            DrawingMode::Rect => Primitive::Rect(RectShape::new(Rect::from_corners(pos, pos))),
            DrawingMode::Ellipse => {
                Primitive::Ellipse(EllipseShape::new(Rect::from_corners(pos, pos)))
            }
        };
        self.start = Some(pos);
        self.preview = Some(scene.add_primitive(primitive, self.stroke_color, None));
    }

    /// Stretch the rubber-band preview to the current pointer position
    pub fn pointer_moved(&mut self, scene: &mut Scene, pos: Vector2<f64>) {
        let (Some(start), Some(id)) = (self.start, self.preview) else {
            return;
        };
        scene.update_primitive(id, self.stretched(start, pos));
    }

    /// Finish the gesture: stretch to the release position and commit the
    /// primitive to the active layer. Returns the committed handle, or
    /// `None` when nothing was being drawn or no layer was active.
    pub fn pointer_released(
        &mut self,
        scene: &mut Scene,
        registry: &mut LayerRegistry,
        pos: Vector2<f64>,
    ) -> Option<PrimitiveId> {
        let start = self.start.take()?;
        let id = self.preview.take()?;
        scene.update_primitive(id, self.stretched(start, pos));

        let Some(active) = registry.active_layer().map(str::to_string) else {
            warn!("no active layer; discarding drawn primitive");
            scene.remove_primitive(id);
            return None;
        };
        // Active layer names always resolve; attach cannot fail here
        match registry.attach_item(scene, &active, id) {
            Ok(()) => Some(id),
            Err(err) => {
                warn!("failed to commit primitive to '{}': {}", active, err);
                scene.remove_primitive(id);
                None
            }
        }
    }

    /// Abort the current gesture and remove the preview from the scene
    pub fn cancel(&mut self, scene: &mut Scene) {
        self.start = None;
        if let Some(id) = self.preview.take() {
            scene.remove_primitive(id);
        }
    }

    fn stretched(&self, start: Vector2<f64>, pos: Vector2<f64>) -> Primitive {
        match self.mode {
            // Mode cannot change mid-gesture through the command surface,
            // and Select never starts one.
            DrawingMode::Select | DrawingMode::Line => {
                Primitive::Line(Line::new(start.into(), pos.into()))
            }
            DrawingMode::Rect => Primitive::Rect(RectShape::new(Rect::from_corners(start, pos))),
            DrawingMode::Ellipse => {
                Primitive::Ellipse(EllipseShape::new(Rect::from_corners(start, pos)))
            }
        }
    }
}

// Position is re-exported here because hosts hand it to the controller
// constantly; saves them a scene import.
pub use crate::scene::primitive::Position as ScenePosition;
