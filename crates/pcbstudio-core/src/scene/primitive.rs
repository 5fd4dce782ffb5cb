use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Serializable point in scene coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Position> for Vector2<f64> {
    fn from(p: Position) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Position {
    fn from(v: Vector2<f64>) -> Self {
        Position { x: v.x, y: v.y }
    }
}

/// Axis-aligned rectangle in scene coordinates. `x`/`y` is the corner with
/// the smallest coordinates; width and height are non-negative after
/// normalization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on the origin
    pub fn centered(width: f64, height: f64) -> Self {
        Self {
            x: -width / 2.0,
            y: -height / 2.0,
            width,
            height,
        }
    }

    /// Normalized rectangle spanning two opposite corners, in any order
    pub fn from_corners(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self {
            x,
            y,
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn center(&self) -> Vector2<f64> {
        Vector2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..*self
        }
    }

    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Rotate about the origin by `quarter_turns` x 90 degrees counter-clockwise.
    /// Quarter turns keep axis-aligned rectangles axis-aligned, so the result
    /// is exact; this is how thermal spokes are laid out without touching a
    /// painter transform stack.
    pub fn rotated_quarter(&self, quarter_turns: u8) -> Self {
        let rotate = |v: Vector2<f64>| -> Vector2<f64> {
            match quarter_turns % 4 {
                0 => v,
                1 => Vector2::new(-v.y, v.x),
                2 => Vector2::new(-v.x, -v.y),
                _ => Vector2::new(v.y, -v.x),
            }
        };
        let a = rotate(Vector2::new(self.x, self.y));
        let b = rotate(Vector2::new(self.x + self.width, self.y + self.height));
        Rect::from_corners(a, b)
    }
}

/// Line segment between two scene points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Position,
    pub end: Position,
}

impl Line {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    pub fn bounding_box(&self) -> Rect {
        Rect::from_corners(self.start.into(), self.end.into())
    }
}

/// Rectangle shape with an optional corner radius. A radius of zero renders
/// as a plain rectangle; a positive radius rounds all four corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    pub rect: Rect,
    pub corner_radius: f64,
}

impl RectShape {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            corner_radius: 0.0,
        }
    }

    pub fn rounded(rect: Rect, corner_radius: f64) -> Self {
        Self {
            rect,
            corner_radius,
        }
    }
}

/// Ellipse inscribed in its bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EllipseShape {
    pub rect: Rect,
}

impl EllipseShape {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    /// Circle of the given diameter centered on the origin
    pub fn circle(diameter: f64) -> Self {
        Self {
            rect: Rect::centered(diameter, diameter),
        }
    }
}

/// Plain geometry without styling, used for the parts of composed figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Line(Line),
    Rect(RectShape),
    Ellipse(EllipseShape),
}

impl Shape {
    pub fn bounding_box(&self) -> Rect {
        match self {
            Shape::Line(line) => line.bounding_box(),
            Shape::Rect(rect) => rect.rect,
            Shape::Ellipse(ellipse) => ellipse.rect,
        }
    }
}

/// A shape carrying its own paint, for figures whose parts are styled
/// individually (pad outline vs. drill hole vs. thermal cutouts).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyledShape {
    pub shape: Shape,
    pub stroke: Color,
    pub fill: Option<Color>,
    pub dashed: bool,
}

impl StyledShape {
    pub fn new(shape: Shape, stroke: Color, fill: Option<Color>) -> Self {
        Self {
            shape,
            stroke,
            fill,
            dashed: false,
        }
    }
}

/// A pad rendered as one canvas primitive: the styled parts are in pad-local
/// coordinates and `origin` places the pad center in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadFigure {
    pub origin: Position,
    pub parts: Vec<StyledShape>,
    /// Outline extent in pad-local coordinates; hole and thermal parts do
    /// not participate.
    pub bounding_box: Rect,
}

/// Graphical primitive owned by the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Line(Line),
    Rect(RectShape),
    Ellipse(EllipseShape),
    Pad(PadFigure),
}

impl Primitive {
    /// Axis-aligned extent in scene coordinates
    pub fn bounding_box(&self) -> Rect {
        match self {
            Primitive::Line(line) => line.bounding_box(),
            Primitive::Rect(rect) => rect.rect,
            Primitive::Ellipse(ellipse) => ellipse.rect,
            Primitive::Pad(pad) => pad.bounding_box.translated(pad.origin.into()),
        }
    }
}
