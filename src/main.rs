use nalgebra::Vector2;

use pcbstudio_core::commands::{dispatch, EditorCommand};
use pcbstudio_core::pad::RawPadDescription;
use pcbstudio_core::platform::banner::Banner;
use pcbstudio_core::scene::Position;
use pcbstudio_core::settings::SettingsManager;
use pcbstudio_core::{Color, DrawingController, DrawingMode, LayerRegistry, Scene};

/// Headless editing session exercising the core: bootstrap the stock layer
/// set, draw a few primitives, place a through-hole pad and toggle layer
/// visibility. A GUI shell drives the same surface with real pointer events.
fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut banner = Banner::new();
    banner.format();
    banner.print();

    match SettingsManager::new() {
        Ok(mut manager) => {
            if let Err(err) = manager.load() {
                log::warn!("could not load settings: {}", err);
            } else {
                log::info!("settings at {}", manager.path().display());
            }
        }
        Err(err) => log::warn!("settings unavailable: {}", err),
    }

    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    log::info!(
        "bootstrapped {} layers, active: {:?}",
        registry.layer_count(),
        registry.active_layer()
    );

    // Sketch a board outline on the active layer with the drawing tools
    dispatch(
        EditorCommand::SetDrawingMode(DrawingMode::Rect),
        &mut registry,
        &mut scene,
        &mut controller,
    )
    .expect("set mode");
    controller.pointer_pressed(&mut scene, Vector2::new(0.0, 0.0));
    controller.pointer_moved(&mut scene, Vector2::new(400.0, 200.0));
    controller.pointer_released(&mut scene, &mut registry, Vector2::new(600.0, 400.0));

    // Place a through-hole pad on the top copper layer, fields as the
    // property dialog would hand them over
    let description = RawPadDescription {
        mount: "THT (Through Hole)".to_string(),
        shape: "Circle".to_string(),
        width: "1.5".to_string(),
        height: "1.5".to_string(),
        hole_diameter: "0.8".to_string(),
        corner_radius: "0".to_string(),
        thermal_enabled: true,
        spoke_width: "0.3".to_string(),
        gap_width: "0.2".to_string(),
        ..RawPadDescription::default()
    };
    let result = dispatch(
        EditorCommand::PlacePad {
            layer: "TopPattern".to_string(),
            description,
            position: Position::new(100.0, 100.0),
        },
        &mut registry,
        &mut scene,
        &mut controller,
    );
    match result {
        Ok(Some(id)) => log::info!("pad primitive {:?} on TopPattern", id),
        Ok(None) => {}
        Err(err) => log::error!("pad placement failed: {}", err),
    }

    // Flip silkscreen off and back on; members follow the layer
    for command in [
        EditorCommand::HideLayer {
            name: "TopSilk".to_string(),
        },
        EditorCommand::ShowLayer {
            name: "TopSilk".to_string(),
        },
        EditorCommand::SetDrawingColor(Color::rgb(0, 0, 255)),
    ] {
        if let Err(err) = dispatch(command, &mut registry, &mut scene, &mut controller) {
            log::error!("command failed: {}", err);
        }
    }

    for layer in registry.iter() {
        log::info!(
            "layer {:<16} z={:<4} visible={} items={}",
            layer.name,
            layer.z_order,
            layer.visible,
            layer.item_count()
        );
    }
    log::info!("scene holds {} primitives", scene.len());
}
