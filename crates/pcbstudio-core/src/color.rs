use serde::{Deserialize, Serialize};

/// RGBA color stored in plain bytes so the core stays toolkit-free.
/// Hosts convert this to whatever their painter wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Copper pad fill when the pad sits on the top copper layer
    pub const COPPER_FILL: Color = Color::new(0, 200, 0, 128);
    /// Dimmed copper fill for pads that are not on top copper
    pub const COPPER_FILL_DIM: Color = Color::new(0, 100, 0, 64);
    /// Copper outline stroke
    pub const COPPER_STROKE: Color = Color::rgb(0, 128, 0);

    /// Drill hole fill; matches the canvas background so the hole reads as bare board
    pub const HOLE_FILL: Color = Color::WHITE;
    pub const HOLE_STROKE: Color = Color::BLACK;

    /// Background color used for thermal gap cutouts (painted, not subtracted)
    pub const BACKGROUND: Color = Color::WHITE;

    /// Dashed selection highlight
    pub const SELECTION: Color = Color::rgb(255, 0, 0);
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_opaque_black() {
        let c = Color::default();
        assert_eq!(c, Color::new(0, 0, 0, 255));
    }
}
