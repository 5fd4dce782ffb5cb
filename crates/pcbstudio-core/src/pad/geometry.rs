use crate::color::Color;
use crate::pad::description::{MountType, PadDescription, PadShape};
use crate::scene::{EllipseShape, PadFigure, Position, Primitive, Rect, RectShape, Shape, StyledShape};
use crate::units::mm_to_scene;

/// The primitive set needed to render one pad, in pad-local scene
/// coordinates (pad center at the origin).
#[derive(Debug, Clone, PartialEq)]
pub struct PadGeometry {
    /// Copper outline
    pub outline: StyledShape,
    /// Drill hole; present only for THT pads with a positive hole diameter
    pub hole: Option<StyledShape>,
    /// Four thermal spokes at 0/90/180/270 degrees, empty unless the pad is
    /// THT with thermal relief enabled
    pub thermal_spokes: Vec<StyledShape>,
    /// Background-colored cutouts flanking each spoke. Painted, not
    /// boolean-subtracted from the copper.
    pub thermal_gaps: Vec<StyledShape>,
    /// Outline extent only; hole and thermal parts do not participate
    pub bounding_box: Rect,
}

impl PadGeometry {
    /// Transient dashed highlight drawn while the pad is selected. Reuses
    /// the bounding box and takes no part in hit testing.
    pub fn selection_outline(&self) -> StyledShape {
        StyledShape {
            shape: Shape::Rect(RectShape::new(self.bounding_box)),
            stroke: Color::SELECTION,
            fill: None,
            dashed: true,
        }
    }

    /// Flatten into a single scene primitive placed at `origin`, parts in
    /// back-to-front paint order.
    pub fn into_figure(self, origin: Position) -> Primitive {
        let mut parts = Vec::with_capacity(2 + self.thermal_spokes.len() + self.thermal_gaps.len());
        parts.push(self.outline);
        parts.extend(self.thermal_gaps);
        parts.extend(self.thermal_spokes);
        parts.extend(self.hole);
        Primitive::Pad(PadFigure {
            origin,
            parts,
            bounding_box: self.bounding_box,
        })
    }
}

/// Compute the render geometry for a pad description. Pure: identical
/// descriptions always produce identical geometry.
pub fn compute_geometry(desc: &PadDescription) -> PadGeometry {
    let width = mm_to_scene(desc.width);
    let height = mm_to_scene(desc.height);
    let hole_diameter = mm_to_scene(desc.hole_diameter);
    let corner_radius = mm_to_scene(desc.corner_radius);

    let copper_fill = if desc.layer_set.top_copper {
        Color::COPPER_FILL
    } else {
        Color::COPPER_FILL_DIM
    };

    let outline_shape = match desc.shape {
        PadShape::Circle => Shape::Ellipse(EllipseShape::circle(width.max(height))),
        PadShape::Rectangle if corner_radius > 0.0 => Shape::Rect(RectShape::rounded(
            Rect::centered(width, height),
            corner_radius,
        )),
        // Custom falls back to the plain rectangle path; the corner radius
        // only applies to Rectangle pads.
        PadShape::Rectangle | PadShape::Custom => {
            Shape::Rect(RectShape::new(Rect::centered(width, height)))
        }
        PadShape::Oval => Shape::Ellipse(EllipseShape::new(Rect::centered(width, height))),
    };
    let outline = StyledShape::new(outline_shape, Color::COPPER_STROKE, Some(copper_fill));
    let bounding_box = outline_shape.bounding_box();

    let mut hole = None;
    let mut thermal_spokes = Vec::new();
    let mut thermal_gaps = Vec::new();

    if desc.mount == MountType::Tht && hole_diameter > 0.0 {
        hole = Some(StyledShape::new(
            Shape::Ellipse(EllipseShape::circle(hole_diameter)),
            Color::HOLE_STROKE,
            Some(Color::HOLE_FILL),
        ));

        if desc.thermal.enabled {
            let spoke_width = mm_to_scene(desc.thermal.spoke_width);
            let gap_width = mm_to_scene(desc.thermal.gap_width);
            for quarter in 0..4u8 {
                // Each spoke runs from the hole edge to the outline edge.
                // The 0-degree template hugs the negative x axis; quarter
                // turns of axis-aligned rectangles stay axis-aligned, so no
                // painter transform stack is involved.
                let reach = if quarter % 2 == 0 {
                    bounding_box.width / 2.0
                } else {
                    bounding_box.height / 2.0
                };
                let length = (reach - hole_diameter / 2.0).max(0.0);
                let spoke = Rect::new(-reach, -spoke_width / 2.0, length, spoke_width);
                thermal_spokes.push(StyledShape::new(
                    Shape::Rect(RectShape::new(spoke.rotated_quarter(quarter))),
                    Color::COPPER_STROKE,
                    Some(copper_fill),
                ));
                // Two gap cutouts flank the spoke, separating it from the
                // surrounding copper.
                for flank in [
                    Rect::new(-reach, -spoke_width / 2.0 - gap_width, length, gap_width),
                    Rect::new(-reach, spoke_width / 2.0, length, gap_width),
                ] {
                    thermal_gaps.push(StyledShape::new(
                        Shape::Rect(RectShape::new(flank.rotated_quarter(quarter))),
                        Color::BACKGROUND,
                        Some(Color::BACKGROUND),
                    ));
                }
            }
        }
    }

    PadGeometry {
        outline,
        hole,
        thermal_spokes,
        thermal_gaps,
        bounding_box,
    }
}

/// Convenience: resolve a description straight into a placeable scene
/// primitive.
pub fn pad_figure(desc: &PadDescription, origin: Position) -> Primitive {
    compute_geometry(desc).into_figure(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::description::ThermalRelief;

    fn desc(shape: PadShape, width: f64, height: f64) -> PadDescription {
        PadDescription {
            shape,
            width,
            height,
            ..PadDescription::default()
        }
    }

    #[test]
    fn test_rectangle_bounding_box_is_scaled_mm() {
        let geometry = compute_geometry(&PadDescription {
            corner_radius: 0.0,
            ..desc(PadShape::Rectangle, 2.0, 1.0)
        });
        assert_eq!(geometry.bounding_box, Rect::centered(20.0, 10.0));
    }

    #[test]
    fn test_circle_uses_max_dimension() {
        let geometry = compute_geometry(&desc(PadShape::Circle, 2.0, 1.0));
        assert_eq!(geometry.bounding_box, Rect::centered(20.0, 20.0));
    }

    #[test]
    fn test_oval_keeps_independent_axes() {
        let geometry = compute_geometry(&desc(PadShape::Oval, 3.0, 1.0));
        assert_eq!(
            geometry.outline.shape,
            Shape::Ellipse(EllipseShape::new(Rect::centered(30.0, 10.0)))
        );
    }

    #[test]
    fn test_corner_radius_only_applies_to_rectangle() {
        let rounded = compute_geometry(&PadDescription {
            corner_radius: 0.25,
            ..desc(PadShape::Rectangle, 2.0, 2.0)
        });
        match rounded.outline.shape {
            Shape::Rect(r) => assert_eq!(r.corner_radius, 2.5),
            other => panic!("expected rect outline, got {:?}", other),
        }

        let custom = compute_geometry(&PadDescription {
            corner_radius: 0.25,
            ..desc(PadShape::Custom, 2.0, 2.0)
        });
        match custom.outline.shape {
            Shape::Rect(r) => assert_eq!(r.corner_radius, 0.0),
            other => panic!("expected rect fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_smd_pad_has_no_hole_or_thermal() {
        let geometry = compute_geometry(&PadDescription {
            mount: MountType::Smd,
            hole_diameter: 0.8,
            thermal: ThermalRelief {
                enabled: true,
                ..ThermalRelief::default()
            },
            ..desc(PadShape::Rectangle, 1.5, 1.5)
        });
        assert!(geometry.hole.is_none());
        assert!(geometry.thermal_spokes.is_empty());
        assert!(geometry.thermal_gaps.is_empty());
    }

    #[test]
    fn test_tht_without_thermal_has_hole_only() {
        let geometry = compute_geometry(&PadDescription {
            mount: MountType::Tht,
            hole_diameter: 0.8,
            thermal: ThermalRelief {
                enabled: false,
                ..ThermalRelief::default()
            },
            ..desc(PadShape::Rectangle, 1.5, 1.5)
        });
        assert!(geometry.hole.is_some());
        assert!(geometry.thermal_spokes.is_empty());
    }

    #[test]
    fn test_tht_with_thermal_has_four_spokes_and_eight_gaps() {
        let geometry = compute_geometry(&desc(PadShape::Rectangle, 1.5, 1.5));
        assert!(geometry.hole.is_some());
        assert_eq!(geometry.thermal_spokes.len(), 4);
        assert_eq!(geometry.thermal_gaps.len(), 8);
        // Spokes stop at the hole edge: none crosses the drill
        let hole_radius = mm_to_scene(0.8) / 2.0;
        for spoke in &geometry.thermal_spokes {
            let bbox = spoke.shape.bounding_box();
            let hugs_hole = (bbox.x + bbox.width + hole_radius).abs() < 1e-9
                || (bbox.x - hole_radius).abs() < 1e-9
                || (bbox.y + bbox.height + hole_radius).abs() < 1e-9
                || (bbox.y - hole_radius).abs() < 1e-9;
            assert!(hugs_hole, "spoke does not stop at hole edge: {:?}", bbox);
        }
    }

    #[test]
    fn test_zero_hole_diameter_suppresses_drill() {
        let geometry = compute_geometry(&PadDescription {
            hole_diameter: 0.0,
            ..desc(PadShape::Circle, 1.5, 1.5)
        });
        assert!(geometry.hole.is_none());
        assert!(geometry.thermal_spokes.is_empty());
    }

    #[test]
    fn test_geometry_is_pure() {
        let d = desc(PadShape::Oval, 2.5, 1.25);
        assert_eq!(compute_geometry(&d), compute_geometry(&d));
    }

    #[test]
    fn test_bounding_box_ignores_hole_and_thermal() {
        // Thermal gaps extend past the spoke flanks but must not widen the box
        let geometry = compute_geometry(&desc(PadShape::Rectangle, 2.0, 1.0));
        assert_eq!(geometry.bounding_box, Rect::centered(20.0, 10.0));
    }

    #[test]
    fn test_selection_outline_reuses_bounding_box() {
        let geometry = compute_geometry(&desc(PadShape::Rectangle, 2.0, 1.0));
        let highlight = geometry.selection_outline();
        assert!(highlight.dashed);
        assert_eq!(highlight.stroke, Color::SELECTION);
        assert_eq!(highlight.shape.bounding_box(), geometry.bounding_box);
    }

    #[test]
    fn test_dim_copper_fill_when_not_on_top_copper() {
        let mut d = desc(PadShape::Rectangle, 1.5, 1.5);
        d.layer_set.top_copper = false;
        let geometry = compute_geometry(&d);
        assert_eq!(geometry.outline.fill, Some(Color::COPPER_FILL_DIM));
    }
}
