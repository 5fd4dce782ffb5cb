use indexmap::IndexMap;
use log::{debug, warn};

use crate::color::Color;
use crate::layers::types::{default_layers, Layer};
use crate::scene::{Primitive, PrimitiveId, Scene};

/// Layer registry errors. All are local, synchronous and recoverable;
/// callers present them to the user and may re-issue after fixing the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayerError {
    #[error("layer '{0}' already exists")]
    DuplicateLayer(String),

    #[error("layer '{0}' does not exist")]
    UnknownLayer(String),
}

/// The single authority mapping logical layer identity to scene membership.
///
/// Every mutation that touches membership takes the scene as an explicit
/// `&mut` collaborator, so a visibility toggle or a layer deletion cannot
/// leave a primitive orphaned on the canvas or silently retained after its
/// layer is gone. The exclusive borrows also make mid-mutation reentrancy
/// unrepresentable.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: IndexMap<String, Layer>,
    active_layer: Option<String>,
}

impl LayerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            layers: IndexMap::new(),
            active_layer: None,
        }
    }

    /// Create a registry populated with the stock layer set, with the
    /// topmost layer active.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for (name, color, z_order) in default_layers() {
            // Stock names are distinct, so this cannot fail
            let _ = registry.add_layer(name, color, z_order);
        }
        registry.active_layer = registry.layers.keys().last().cloned();
        registry
    }

    /// Add an empty layer. Fails without touching the registry when the
    /// name is already taken.
    pub fn add_layer(
        &mut self,
        name: impl Into<String>,
        color: Color,
        z_order: i32,
    ) -> Result<&mut Layer, LayerError> {
        let name = name.into();
        if self.layers.contains_key(&name) {
            return Err(LayerError::DuplicateLayer(name));
        }
        debug!("adding layer '{}' (z={})", name, z_order);
        let layer = Layer::new(name.clone(), color, z_order);
        Ok(self.layers.entry(name).or_insert(layer))
    }

    /// Remove a layer, detaching every member primitive from the scene
    /// before the record is dropped.
    pub fn remove_layer(&mut self, scene: &mut Scene, name: &str) -> Result<Layer, LayerError> {
        let layer = self
            .layers
            .shift_remove(name)
            .ok_or_else(|| LayerError::UnknownLayer(name.to_string()))?;
        for &id in &layer.items {
            scene.remove_primitive(id);
        }
        if self.active_layer.as_deref() == Some(name) {
            self.active_layer = None;
        }
        debug!("removed layer '{}' and {} item(s)", name, layer.items.len());
        Ok(layer)
    }

    /// Show a layer, restoring every member's rendered visibility. Idempotent.
    pub fn show_layer(&mut self, scene: &mut Scene, name: &str) -> Result<(), LayerError> {
        self.set_layer_visibility(scene, name, true)
    }

    /// Hide a layer; members are hidden but retained. Idempotent.
    pub fn hide_layer(&mut self, scene: &mut Scene, name: &str) -> Result<(), LayerError> {
        self.set_layer_visibility(scene, name, false)
    }

    fn set_layer_visibility(
        &mut self,
        scene: &mut Scene,
        name: &str,
        visible: bool,
    ) -> Result<(), LayerError> {
        let layer = self
            .layers
            .get_mut(name)
            .ok_or_else(|| LayerError::UnknownLayer(name.to_string()))?;
        layer.visible = visible;
        for &id in &layer.items {
            scene.set_visible(id, visible);
        }
        Ok(())
    }

    /// Create a primitive on the scene and file it into a layer. The layer's
    /// z-order and visibility are stamped onto the new scene record.
    pub fn add_item(
        &mut self,
        scene: &mut Scene,
        name: &str,
        primitive: Primitive,
        stroke: Color,
        fill: Option<Color>,
    ) -> Result<PrimitiveId, LayerError> {
        if !self.layers.contains_key(name) {
            return Err(LayerError::UnknownLayer(name.to_string()));
        }
        let id = scene.add_primitive(primitive, stroke, fill);
        // Cannot fail: presence checked above and add_primitive does not
        // touch the registry.
        self.attach_item(scene, name, id)?;
        Ok(id)
    }

    /// File an already-registered scene primitive into a layer. Used when a
    /// primitive was created directly on the scene (rubber-band previews)
    /// and is committed afterwards.
    pub fn attach_item(
        &mut self,
        scene: &mut Scene,
        name: &str,
        id: PrimitiveId,
    ) -> Result<(), LayerError> {
        debug_assert!(
            self.owner_of(id).is_none(),
            "primitive already belongs to a layer"
        );
        let layer = self
            .layers
            .get_mut(name)
            .ok_or_else(|| LayerError::UnknownLayer(name.to_string()))?;
        if !scene.contains(id) {
            warn!("attaching stale primitive handle to layer '{}'", name);
        }
        scene.set_z_order(id, layer.z_order);
        scene.set_visible(id, layer.visible);
        layer.items.push(id);
        Ok(())
    }

    /// Remove every member primitive from the scene and empty the layer
    pub fn clear_layer(&mut self, scene: &mut Scene, name: &str) -> Result<(), LayerError> {
        let layer = self
            .layers
            .get_mut(name)
            .ok_or_else(|| LayerError::UnknownLayer(name.to_string()))?;
        for id in layer.items.drain(..) {
            scene.remove_primitive(id);
        }
        Ok(())
    }

    /// Re-stroke every member primitive and update the stored layer color
    pub fn set_layer_color(
        &mut self,
        scene: &mut Scene,
        name: &str,
        color: Color,
    ) -> Result<(), LayerError> {
        let layer = self
            .layers
            .get_mut(name)
            .ok_or_else(|| LayerError::UnknownLayer(name.to_string()))?;
        layer.color = color;
        for &id in &layer.items {
            scene.set_stroke_color(id, color);
        }
        Ok(())
    }

    /// Select the layer that receives newly drawn items
    pub fn set_active_layer(&mut self, name: &str) -> Result<(), LayerError> {
        if !self.layers.contains_key(name) {
            return Err(LayerError::UnknownLayer(name.to_string()));
        }
        self.active_layer = Some(name.to_string());
        Ok(())
    }

    /// Currently selected layer, if any
    pub fn active_layer(&self) -> Option<&str> {
        self.active_layer.as_deref()
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.layers.contains_key(name)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Layers in creation order
    pub fn iter(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }

    /// Which layer a primitive belongs to, if any. Membership is exclusive,
    /// so the first hit is the only one.
    pub fn owner_of(&self, id: PrimitiveId) -> Option<&Layer> {
        self.layers.values().find(|layer| layer.items.contains(&id))
    }
}
