pub mod primitive;

pub use primitive::{
    EllipseShape, Line, PadFigure, Position, Primitive, Rect, RectShape, Shape, StyledShape,
};

use std::collections::HashMap;

use crate::color::Color;

/// Stable handle to a primitive owned by the scene. Handles are never
/// reused, so a stale id simply misses instead of aliasing a new primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimitiveId(u64);

/// Everything the scene tracks per primitive besides its geometry
#[derive(Debug, Clone)]
pub struct PrimitiveRecord {
    pub primitive: Primitive,
    pub stroke: Color,
    pub fill: Option<Color>,
    pub z_order: i32,
    pub visible: bool,
}

/// The shared drawing surface. Layers file primitives into it by handle;
/// a host canvas paints from it. The scene never renders pixels itself.
#[derive(Debug, Default)]
pub struct Scene {
    records: HashMap<PrimitiveId, PrimitiveRecord>,
    next_id: u64,
}

impl Scene {
    /// Create an empty scene
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            next_id: 0,
        }
    }

    /// Add a primitive with the given paint and return its handle
    pub fn add_primitive(
        &mut self,
        primitive: Primitive,
        stroke: Color,
        fill: Option<Color>,
    ) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.records.insert(
            id,
            PrimitiveRecord {
                primitive,
                stroke,
                fill,
                z_order: 0,
                visible: true,
            },
        );
        id
    }

    /// Remove a primitive, returning its record if it was present
    pub fn remove_primitive(&mut self, id: PrimitiveId) -> Option<PrimitiveRecord> {
        self.records.remove(&id)
    }

    /// Replace the geometry of an existing primitive, keeping its paint,
    /// z-order and visibility. Used for rubber-band updates while drawing.
    pub fn update_primitive(&mut self, id: PrimitiveId, primitive: Primitive) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.primitive = primitive;
                true
            }
            None => false,
        }
    }

    /// Set rendered visibility; returns false if the handle is stale
    pub fn set_visible(&mut self, id: PrimitiveId, visible: bool) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Set paint/stacking order; lower paints first
    pub fn set_z_order(&mut self, id: PrimitiveId, z_order: i32) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.z_order = z_order;
                true
            }
            None => false,
        }
    }

    /// Re-stroke a primitive's outline
    pub fn set_stroke_color(&mut self, id: PrimitiveId, stroke: Color) -> bool {
        match self.records.get_mut(&id) {
            Some(record) => {
                record.stroke = stroke;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&PrimitiveRecord> {
        self.records.get(&id)
    }

    pub fn contains(&self, id: PrimitiveId) -> bool {
        self.records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate all primitives in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &PrimitiveRecord)> {
        self.records.iter().map(|(id, record)| (*id, record))
    }

    /// Handles sorted by z-order (stable by creation order within a z level),
    /// ready for back-to-front painting by a host canvas.
    pub fn painting_order(&self) -> Vec<PrimitiveId> {
        let mut ids: Vec<PrimitiveId> = self.records.keys().copied().collect();
        ids.sort_by_key(|id| (self.records[id].z_order, *id));
        ids
    }
}
