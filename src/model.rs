use crate::tileset::TileSet;

/// Outcome of resolving a reference path through a [`SceneModel`].
///
/// A tagged union instead of a runtime type check: callers match on the
/// kind they expect and treat everything else as "no resource".
#[derive(Debug, Clone)]
pub enum Resource {
    /// The path resolved to a tileset definition.
    TileSet(TileSet),
    /// The path resolved to some other kind of resource.
    Other,
}

/// Capability provided by the owning scene framework: resolving reference
/// paths to resources and matching file-change identities.
pub trait SceneModel {
    /// Resolve `path` to a resource. Errors are the caller's to swallow;
    /// the reload contract never propagates them.
    fn resolve(&self, path: &str) -> anyhow::Result<Resource>;

    /// Whether a changed-resource identifier refers to the resource a
    /// reference path points at. Defaults to plain path equality.
    fn same_resource(&self, referenced: &str, changed: &str) -> bool {
        referenced == changed
    }
}
