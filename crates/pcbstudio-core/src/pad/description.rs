use log::warn;
use serde::{Deserialize, Serialize};

/// Pad model errors. Malformed numeric fields are never errors (they resolve
/// to documented defaults); only an out-of-vocabulary shape or mount type
/// rejects a description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PadError {
    #[error("invalid pad description: {0}")]
    InvalidDescription(String),
}

/// Pad outline shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PadShape {
    Circle,
    Rectangle,
    Oval,
    /// Custom outlines are not implemented; rendering falls back to the
    /// Rectangle path. Documented limitation, kept rather than silently
    /// "fixed".
    Custom,
}

impl PadShape {
    /// Parse the shape selector label from the property dialog
    pub fn from_label(label: &str) -> Result<Self, PadError> {
        match label.trim() {
            "Circle" => Ok(Self::Circle),
            "Rectangle" => Ok(Self::Rectangle),
            "Oval" => Ok(Self::Oval),
            "Custom" => Ok(Self::Custom),
            other => Err(PadError::InvalidDescription(format!(
                "unknown pad shape '{}'",
                other
            ))),
        }
    }
}

/// Mount type; decides whether a drill hole and thermal relief render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MountType {
    /// Through-hole technology: plated hole, optional thermal relief
    Tht,
    /// Surface mount: no hole
    Smd,
    /// Non-plated through hole
    Npth,
}

impl MountType {
    /// Parse the mount type selector label from the property dialog,
    /// e.g. "THT (Through Hole)".
    pub fn from_label(label: &str) -> Result<Self, PadError> {
        // NPTH before THT: both labels carry a "TH" fragment
        if label.contains("NPTH") {
            Ok(Self::Npth)
        } else if label.contains("THT") {
            Ok(Self::Tht)
        } else if label.contains("SMD") {
            Ok(Self::Smd)
        } else {
            Err(PadError::InvalidDescription(format!(
                "unknown mount type '{}'",
                label
            )))
        }
    }
}

/// Thermal relief parameters for THT pads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThermalRelief {
    pub enabled: bool,
    /// Spoke thickness in mm
    pub spoke_width: f64,
    /// Gap cutout width in mm
    pub gap_width: f64,
}

impl Default for ThermalRelief {
    fn default() -> Self {
        Self {
            enabled: true,
            spoke_width: defaults::SPOKE_WIDTH_MM,
            gap_width: defaults::GAP_WIDTH_MM,
        }
    }
}

/// Which of the fixed layer roles the pad participates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PadLayerSet {
    pub top_copper: bool,
    pub bottom_copper: bool,
    pub top_mask: bool,
    pub bottom_mask: bool,
    pub top_paste: bool,
    pub bottom_paste: bool,
}

impl Default for PadLayerSet {
    fn default() -> Self {
        Self {
            top_copper: true,
            bottom_copper: false,
            top_mask: true,
            bottom_mask: false,
            top_paste: true,
            bottom_paste: false,
        }
    }
}

/// Documented fallback values for pad dimensions
pub mod defaults {
    pub const WIDTH_MM: f64 = 1.5;
    pub const HEIGHT_MM: f64 = 1.5;
    pub const HOLE_DIAMETER_MM: f64 = 0.8;
    pub const CORNER_RADIUS_MM: f64 = 0.0;
    pub const SPOKE_WIDTH_MM: f64 = 0.3;
    pub const GAP_WIDTH_MM: f64 = 0.2;
}

/// Validated pad description. Constructed once at the dialog boundary via
/// [`RawPadDescription::resolve`], never mutated field-by-field afterwards;
/// edits replace the whole description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadDescription {
    pub shape: PadShape,
    pub mount: MountType,
    /// Dimensions in millimeters, non-negative
    pub width: f64,
    pub height: f64,
    pub hole_diameter: f64,
    /// Only affects rendering when `shape` is `Rectangle`
    pub corner_radius: f64,
    pub layer_set: PadLayerSet,
    pub thermal: ThermalRelief,
}

impl Default for PadDescription {
    fn default() -> Self {
        Self {
            shape: PadShape::Rectangle,
            mount: MountType::Tht,
            width: defaults::WIDTH_MM,
            height: defaults::HEIGHT_MM,
            hole_diameter: defaults::HOLE_DIAMETER_MM,
            corner_radius: defaults::CORNER_RADIUS_MM,
            layer_set: PadLayerSet::default(),
            thermal: ThermalRelief::default(),
        }
    }
}

/// Pad description as it arrives from the property dialog: selector labels
/// and free-text dimension fields. Resolving deep-copies everything into a
/// [`PadDescription`], so the dialog's buffers are never aliased.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPadDescription {
    pub mount: String,
    pub shape: String,
    pub width: String,
    pub height: String,
    pub hole_diameter: String,
    pub corner_radius: String,
    pub thermal_enabled: bool,
    pub spoke_width: String,
    pub gap_width: String,
    pub layer_set: PadLayerSet,
}

impl RawPadDescription {
    /// Resolve the raw fields into a validated description. Unparseable or
    /// negative dimensions fall back to the documented defaults with a
    /// warning; an unknown shape or mount label is the only failure.
    pub fn resolve(&self) -> Result<PadDescription, PadError> {
        let shape = PadShape::from_label(&self.shape)?;
        let mount = MountType::from_label(&self.mount)?;
        Ok(PadDescription {
            shape,
            mount,
            width: parse_dimension("width", &self.width, defaults::WIDTH_MM),
            height: parse_dimension("height", &self.height, defaults::HEIGHT_MM),
            hole_diameter: parse_dimension(
                "hole diameter",
                &self.hole_diameter,
                defaults::HOLE_DIAMETER_MM,
            ),
            corner_radius: parse_dimension(
                "corner radius",
                &self.corner_radius,
                defaults::CORNER_RADIUS_MM,
            ),
            layer_set: self.layer_set,
            thermal: ThermalRelief {
                enabled: self.thermal_enabled,
                spoke_width: parse_dimension(
                    "spoke width",
                    &self.spoke_width,
                    defaults::SPOKE_WIDTH_MM,
                ),
                gap_width: parse_dimension("gap width", &self.gap_width, defaults::GAP_WIDTH_MM),
            },
        })
    }
}

/// Parse a dimension field in mm. Dimensions are non-negative reals; anything
/// else resolves to the default and is logged for diagnostics only.
fn parse_dimension(field: &str, raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => {
            warn!(
                "pad {} '{}' is not a non-negative number, using default {}",
                field, raw, default
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tht() -> RawPadDescription {
        RawPadDescription {
            mount: "THT (Through Hole)".to_string(),
            shape: "Rectangle".to_string(),
            width: "1.5".to_string(),
            height: "1.5".to_string(),
            hole_diameter: "0.8".to_string(),
            corner_radius: "0".to_string(),
            thermal_enabled: true,
            spoke_width: "0.3".to_string(),
            gap_width: "0.2".to_string(),
            layer_set: PadLayerSet::default(),
        }
    }

    #[test]
    fn test_resolve_valid_description() {
        let desc = raw_tht().resolve().unwrap();
        assert_eq!(desc.shape, PadShape::Rectangle);
        assert_eq!(desc.mount, MountType::Tht);
        assert_eq!(desc.width, 1.5);
        assert_eq!(desc.hole_diameter, 0.8);
        assert!(desc.thermal.enabled);
    }

    #[test]
    fn test_malformed_width_falls_back_to_default() {
        let mut raw = raw_tht();
        raw.width = "abc".to_string();
        let desc = raw.resolve().unwrap();
        assert_eq!(desc.width, 1.5);
    }

    #[test]
    fn test_negative_and_nonfinite_dimensions_fall_back() {
        let mut raw = raw_tht();
        raw.height = "-2.0".to_string();
        raw.corner_radius = "NaN".to_string();
        let desc = raw.resolve().unwrap();
        assert_eq!(desc.height, defaults::HEIGHT_MM);
        assert_eq!(desc.corner_radius, defaults::CORNER_RADIUS_MM);
    }

    #[test]
    fn test_mount_type_labels() {
        assert_eq!(
            MountType::from_label("THT (Through Hole)").unwrap(),
            MountType::Tht
        );
        assert_eq!(
            MountType::from_label("SMD (Surface Mount)").unwrap(),
            MountType::Smd
        );
        assert_eq!(
            MountType::from_label("NPTH (Non-Plated)").unwrap(),
            MountType::Npth
        );
        assert!(MountType::from_label("BGA").is_err());
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let mut raw = raw_tht();
        raw.shape = "Trapezoid".to_string();
        let err = raw.resolve().unwrap_err();
        assert!(matches!(err, PadError::InvalidDescription(_)));
    }
}
