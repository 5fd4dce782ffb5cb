/// Pad and layer dimensions are entered in millimeters; the scene works in
/// scene units, where 1 mm = 10 units. Keeping the scene integerish at
/// typical pad sizes avoids sub-pixel artifacts in hosts that snap to a
/// device grid.
pub const SCENE_PER_MM: f64 = 10.0;

// Conversion constants
pub const MM_PER_MIL: f64 = 0.0254; // 1 mil = 0.0254 mm
pub const MM_PER_INCH: f64 = 25.4; // 1 inch = 25.4 mm

/// Convert from millimeters to scene units
pub fn mm_to_scene(mm: f64) -> f64 {
    mm * SCENE_PER_MM
}

/// Convert from scene units to millimeters
pub fn scene_to_mm(scene: f64) -> f64 {
    scene / SCENE_PER_MM
}

pub fn mils_to_mm(mils: f64) -> f64 {
    mils * MM_PER_MIL
}

pub fn mm_to_mils(mm: f64) -> f64 {
    mm / MM_PER_MIL
}

/// Format a millimeter value for display
pub fn format_mm(mm: f64) -> String {
    format!("{:.3} mm", mm)
}

/// Format a millimeter value as mils for display
pub fn format_mils(mm: f64) -> String {
    format!("{:.1} mils", mm_to_mils(mm))
}
