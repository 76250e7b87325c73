use std::rc::Rc;

use log::{debug, warn};

use crate::bounds::Aabb;
use crate::error::ValidateError;
use crate::geometry::{build_vertex_data, VertexBuffer};
use crate::layer::Layer;
use crate::model::{Resource, SceneModel};
use crate::tileset::TileSet;

/// A tile grid: ordered layers of sparse cells over a shared tileset
/// reference, with a derived vertex buffer kept consistent across
/// reference and resource changes.
///
/// The vertex buffer and bounds are recomputed wholesale, never patched.
/// They exist only while a tileset resource is attached, its image is
/// loaded and both the grid and the resource validate clean.
pub struct TileGrid {
    tile_set: String,
    tile_set_resource: Option<TileSet>,
    layers: Vec<Layer>,
    vertex_data: Option<VertexBuffer>,
    bounds: Aabb,
    model: Option<Rc<dyn SceneModel>>,
    locked: bool,
}

impl TileGrid {
    /// New grid with no tileset reference, no layers and no model attached.
    pub fn new() -> Self {
        TileGrid {
            tile_set: String::new(),
            tile_set_resource: None,
            layers: Vec::new(),
            vertex_data: None,
            bounds: Aabb::new(),
            model: None,
            locked: false,
        }
    }

    /// Attach to (or detach from) an owning scene model.
    ///
    /// Attaching while no tileset resource is held triggers a reload so a
    /// grid deserialized before its model existed resolves its reference.
    pub fn set_model(&mut self, model: Option<Rc<dyn SceneModel>>) {
        self.model = model;
        if self.model.is_some() && self.tile_set_resource.is_none() {
            self.reload_tile_set();
        }
    }

    /// The tileset reference path. Empty means "no tileset".
    pub fn tile_set(&self) -> &str {
        &self.tile_set
    }

    /// Change the tileset reference path. A no-op when unchanged;
    /// otherwise the resource is re-resolved and geometry rebuilt.
    pub fn set_tile_set(&mut self, tile_set: impl Into<String>) {
        let tile_set = tile_set.into();
        if self.tile_set != tile_set {
            self.tile_set = tile_set;
            self.reload_tile_set();
        }
    }

    /// The resolved tileset resource, if any.
    pub fn tile_set_resource(&self) -> Option<&TileSet> {
        self.tile_set_resource.as_ref()
    }

    /// Re-resolve the tileset reference and rebuild geometry.
    ///
    /// Returns whether a reload attempt actually ran, which requires an
    /// attached model. Resolution failures and wrong-kind resources are
    /// swallowed here; they surface through [`TileGrid::validate`] as the
    /// resource staying unset.
    pub fn reload_tile_set(&mut self) -> bool {
        let Some(model) = self.model.clone() else {
            return false;
        };
        self.tile_set_resource = None;
        if !self.tile_set.is_empty() {
            match model.resolve(&self.tile_set) {
                Ok(Resource::TileSet(tile_set)) => {
                    debug!("loaded tile set '{}'", self.tile_set);
                    self.tile_set_resource = Some(tile_set);
                }
                Ok(_) => {
                    warn!("resource at '{}' is not a tile set", self.tile_set);
                }
                Err(err) => {
                    warn!("failed to load tile set '{}': {:#}", self.tile_set, err);
                }
            }
        }
        self.update_vertex_data();
        true
    }

    /// Validate the tileset reference.
    ///
    /// OK when no reference is set; `InvalidReference` when a resource is
    /// attached but fails its own validation; `InvalidType` when the path
    /// is set but no tileset resolved from it.
    pub fn validate(&self) -> Result<(), ValidateError> {
        if let Some(tile_set) = &self.tile_set_resource {
            if let Err(err) = tile_set.validate() {
                debug!("tile set '{}' invalid: {}", self.tile_set, err);
                return Err(ValidateError::InvalidReference);
            }
        } else if !self.tile_set.is_empty() {
            return Err(ValidateError::InvalidType);
        }
        Ok(())
    }

    /// Append a layer.
    ///
    /// Does not rebuild geometry; callers batch layer and cell edits and
    /// invoke [`TileGrid::rebuild`] when done.
    pub fn add_layer(&mut self, mut layer: Layer) {
        layer.set_locked(self.locked);
        self.layers.push(layer);
    }

    /// The layers, in paint order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Mutable access to one layer, for cell edits.
    pub fn layer_mut(&mut self, index: usize) -> Option<&mut Layer> {
        self.layers.get_mut(index)
    }

    /// Explicitly rebuild the vertex buffer and bounds from current state.
    pub fn rebuild(&mut self) {
        self.update_vertex_data();
    }

    /// React to an external resource change, reloading whatever depends on
    /// the changed resource. Returns whether anything reloaded.
    pub fn handle_reload(&mut self, changed: &str) -> bool {
        let mut reloaded = false;
        let matches_reference = match &self.model {
            Some(model) => {
                !self.tile_set.is_empty() && model.same_resource(&self.tile_set, changed)
            }
            None => false,
        };
        if matches_reference && self.reload_tile_set() {
            reloaded = true;
        }
        if let (Some(tile_set), Some(model)) = (&mut self.tile_set_resource, &self.model) {
            if tile_set.handle_reload(changed, model.as_ref()) {
                reloaded = true;
            }
        }
        reloaded
    }

    /// Set the locked flag, cascading it to all child layers.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
        for layer in &mut self.layers {
            layer.set_locked(locked);
        }
    }

    /// Whether the grid is locked against edits.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// The built vertex buffer, if current state admits one.
    pub fn vertex_data(&self) -> Option<&VertexBuffer> {
        self.vertex_data.as_ref()
    }

    /// Bounds of the built geometry. Empty whenever no vertex data exists.
    pub fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    fn update_vertex_data(&mut self) {
        let built = match &self.tile_set_resource {
            Some(tile_set)
                if tile_set.image_size().is_some()
                    && self.validate().is_ok()
                    && tile_set.validate().is_ok() =>
            {
                build_vertex_data(&self.layers, tile_set)
            }
            _ => None,
        };
        match built {
            Some((vertex_data, bounds)) => {
                self.vertex_data = Some(vertex_data);
                self.bounds = bounds;
            }
            None => {
                self.vertex_data = None;
                self.bounds = Aabb::new();
            }
        }
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        TileGrid::new()
    }
}
