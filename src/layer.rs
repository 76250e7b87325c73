use std::collections::BTreeMap;

/// Packed cell coordinate: y in the high 32 bits, x in the low 32 bits.
///
/// Signed coordinates survive the round trip through the packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey(u64);

impl CellKey {
    /// Pack a cell coordinate.
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        CellKey(((y as u32 as u64) << 32) | (x as u32 as u64))
    }

    /// Cell x coordinate.
    #[inline]
    pub fn x(self) -> i32 {
        self.0 as u32 as i32
    }

    /// Cell y coordinate.
    #[inline]
    pub fn y(self) -> i32 {
        (self.0 >> 32) as u32 as i32
    }
}

/// One drawing plane of a tile grid: a sparse cell -> tile-index mapping
/// plus the depth its quads are emitted at.
///
/// Cells are kept in a `BTreeMap` so a rebuild visits them in a fixed order
/// and two rebuilds of the same data produce identical buffers.
#[derive(Debug, Clone)]
pub struct Layer {
    id: String,
    z: f32,
    cells: BTreeMap<CellKey, u32>,
    locked: bool,
}

impl Layer {
    /// New empty layer at depth `z`.
    pub fn new(id: impl Into<String>, z: f32) -> Self {
        Layer {
            id: id.into(),
            z,
            cells: BTreeMap::new(),
            locked: false,
        }
    }

    /// Layer identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Depth used verbatim as the z coordinate of emitted vertices.
    pub fn z(&self) -> f32 {
        self.z
    }

    /// Change the layer depth.
    pub fn set_z(&mut self, z: f32) {
        self.z = z;
    }

    /// Place `tile` at cell `(x, y)`, replacing any previous tile there.
    pub fn set_cell(&mut self, x: i32, y: i32, tile: u32) {
        self.cells.insert(CellKey::new(x, y), tile);
    }

    /// Remove the tile at cell `(x, y)`, if any.
    pub fn clear_cell(&mut self, x: i32, y: i32) -> Option<u32> {
        self.cells.remove(&CellKey::new(x, y))
    }

    /// Tile at cell `(x, y)`, if any.
    pub fn cell(&self, x: i32, y: i32) -> Option<u32> {
        self.cells.get(&CellKey::new(x, y)).copied()
    }

    /// All occupied cells, in key order.
    pub fn cells(&self) -> &BTreeMap<CellKey, u32> {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether the layer is locked against edits.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Set the locked flag. Cascaded down from the owning grid.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
