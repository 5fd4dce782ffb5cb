//! End-to-end editing sessions across the layer registry, scene, drawing
//! controller and command surface.

use nalgebra::Vector2;

use pcbstudio_core::commands::{dispatch, EditorCommand};
use pcbstudio_core::pad::{PadLayerSet, RawPadDescription};
use pcbstudio_core::scene::Position;
use pcbstudio_core::{Color, DrawingController, DrawingMode, LayerRegistry, Scene};

fn raw_tht_pad() -> RawPadDescription {
    RawPadDescription {
        mount: "THT (Through Hole)".to_string(),
        shape: "Circle".to_string(),
        width: "2.0".to_string(),
        height: "2.0".to_string(),
        hole_diameter: "1.0".to_string(),
        corner_radius: "0".to_string(),
        thermal_enabled: true,
        spoke_width: "0.3".to_string(),
        gap_width: "0.2".to_string(),
        layer_set: PadLayerSet::default(),
    }
}

fn draw_rect(
    scene: &mut Scene,
    registry: &mut LayerRegistry,
    controller: &mut DrawingController,
    from: (f64, f64),
    to: (f64, f64),
) -> pcbstudio_core::PrimitiveId {
    controller.set_mode(DrawingMode::Rect);
    controller.pointer_pressed(scene, Vector2::new(from.0, from.1));
    controller
        .pointer_released(scene, registry, Vector2::new(to.0, to.1))
        .expect("active layer set")
}

#[test]
fn removing_a_layer_leaves_no_members_on_the_scene() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    registry.set_active_layer("TopSilk").unwrap();
    for i in 0..5 {
        let x = i as f64 * 10.0;
        draw_rect(
            &mut scene,
            &mut registry,
            &mut controller,
            (x, 0.0),
            (x + 5.0, 5.0),
        );
    }
    // One primitive on another layer survives the removal
    registry.set_active_layer("TopPattern").unwrap();
    let survivor = draw_rect(
        &mut scene,
        &mut registry,
        &mut controller,
        (100.0, 100.0),
        (110.0, 110.0),
    );
    assert_eq!(scene.len(), 6);

    dispatch(
        EditorCommand::RemoveLayer {
            name: "TopSilk".to_string(),
        },
        &mut registry,
        &mut scene,
        &mut controller,
    )
    .unwrap();

    assert!(!registry.contains("TopSilk"));
    assert_eq!(scene.len(), 1);
    assert!(scene.contains(survivor));
}

#[test]
fn hide_then_show_restores_every_member() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    registry.set_active_layer("BottomPattern").unwrap();
    let ids: Vec<_> = (0..4)
        .map(|i| {
            let x = i as f64 * 20.0;
            draw_rect(
                &mut scene,
                &mut registry,
                &mut controller,
                (x, 0.0),
                (x + 10.0, 10.0),
            )
        })
        .collect();

    registry.hide_layer(&mut scene, "BottomPattern").unwrap();
    assert!(ids.iter().all(|&id| !scene.get(id).unwrap().visible));
    assert!(!registry.layer("BottomPattern").unwrap().visible);

    registry.show_layer(&mut scene, "BottomPattern").unwrap();
    assert!(ids.iter().all(|&id| scene.get(id).unwrap().visible));
}

#[test]
fn clearing_a_layer_empties_it_but_keeps_it_registered() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    registry.set_active_layer("TopPattern").unwrap();
    draw_rect(
        &mut scene,
        &mut registry,
        &mut controller,
        (0.0, 0.0),
        (10.0, 10.0),
    );
    dispatch(
        EditorCommand::PlacePad {
            layer: "TopPattern".to_string(),
            description: raw_tht_pad(),
            position: Position::new(50.0, 50.0),
        },
        &mut registry,
        &mut scene,
        &mut controller,
    )
    .unwrap();
    assert_eq!(registry.layer("TopPattern").unwrap().item_count(), 2);

    registry.clear_layer(&mut scene, "TopPattern").unwrap();
    assert!(registry.contains("TopPattern"));
    assert_eq!(registry.layer("TopPattern").unwrap().item_count(), 0);
    assert!(scene.is_empty());
}

#[test]
fn drawn_primitives_inherit_layer_state_at_commit() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    registry.set_active_layer("TopSilk").unwrap();
    registry.hide_layer(&mut scene, "TopSilk").unwrap();
    let id = draw_rect(
        &mut scene,
        &mut registry,
        &mut controller,
        (0.0, 0.0),
        (8.0, 8.0),
    );

    let record = scene.get(id).unwrap();
    assert!(!record.visible);
    assert_eq!(record.z_order, registry.layer("TopSilk").unwrap().z_order);
}

#[test]
fn recoloring_a_layer_restrokes_existing_members() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    registry.set_active_layer("TopPattern").unwrap();
    let id = draw_rect(
        &mut scene,
        &mut registry,
        &mut controller,
        (0.0, 0.0),
        (10.0, 10.0),
    );
    let purple = Color::rgb(128, 0, 128);
    dispatch(
        EditorCommand::SetLayerColor {
            name: "TopPattern".to_string(),
            color: purple,
        },
        &mut registry,
        &mut scene,
        &mut controller,
    )
    .unwrap();

    assert_eq!(scene.get(id).unwrap().stroke, purple);
    assert_eq!(registry.layer("TopPattern").unwrap().color, purple);
}

#[test]
fn pad_placement_and_drawing_share_one_scene() {
    let mut scene = Scene::new();
    let mut registry = LayerRegistry::with_defaults();
    let mut controller = DrawingController::new();

    let pad_id = dispatch(
        EditorCommand::PlacePad {
            layer: "TopPattern".to_string(),
            description: raw_tht_pad(),
            position: Position::new(100.0, 100.0),
        },
        &mut registry,
        &mut scene,
        &mut controller,
    )
    .unwrap()
    .unwrap();

    registry.set_active_layer("TopSilk").unwrap();
    let outline_id = draw_rect(
        &mut scene,
        &mut registry,
        &mut controller,
        (80.0, 80.0),
        (120.0, 120.0),
    );

    // Painting order follows layer z-order: pattern under silk
    let order = scene.painting_order();
    let pad_pos = order.iter().position(|&id| id == pad_id).unwrap();
    let outline_pos = order.iter().position(|&id| id == outline_id).unwrap();
    assert!(pad_pos < outline_pos);

    assert_eq!(registry.owner_of(pad_id).unwrap().name, "TopPattern");
    assert_eq!(registry.owner_of(outline_id).unwrap().name, "TopSilk");
}
