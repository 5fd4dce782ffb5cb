use crate::color::Color;
use crate::scene::PrimitiveId;

/// A named, colored, ordered bucket of scene primitives with independent
/// visibility. The registry owns the membership list; the primitives
/// themselves live in the scene and are referenced by handle, so neither
/// side can dangle when the other mutates.
#[derive(Debug, Clone)]
pub struct Layer {
    pub name: String,
    pub color: Color,
    /// Paint/stacking order; lower paints first. Need not be unique or
    /// contiguous across layers.
    pub z_order: i32,
    pub visible: bool,
    pub items: Vec<PrimitiveId>,
}

impl Layer {
    pub fn new(name: impl Into<String>, color: Color, z_order: i32) -> Self {
        Self {
            name: name.into(),
            color,
            z_order,
            visible: true,
            items: Vec::new(),
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// The stock layer set created on startup, bottom of the stack first.
/// Names and palette follow the usual placement/silk/pattern stack for a
/// two-sided board.
pub fn default_layers() -> Vec<(&'static str, Color, i32)> {
    vec![
        ("BottomPlacement", Color::new(255, 200, 0, 180), -30),
        ("BottomSilk", Color::new(200, 200, 200, 220), -20),
        ("BottomPattern", Color::new(0, 100, 255, 180), -10),
        ("TopPattern", Color::new(0, 180, 0, 180), 10),
        ("TopSilk", Color::new(255, 255, 255, 200), 20),
        ("TopPlacement", Color::new(255, 200, 0, 180), 30),
    ]
}
