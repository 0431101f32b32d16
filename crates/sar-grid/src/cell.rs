//! `CellId` — opaque token for one hexagonal cell.

use std::fmt;

/// Identifier of one hexagonal cell at a fixed resolution.
///
/// Stored as axial coordinates relative to the producing grid's origin plus
/// the resolution they were minted at.  Consumers should treat the contents
/// as opaque: equality, hashing, and round-tripping through the grid are the
/// only supported operations.  `Ord` is derived so cell sets can be iterated
/// in a deterministic order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    pub(crate) q:   i32,
    pub(crate) r:   i32,
    pub(crate) res: u8,
}

impl CellId {
    #[inline]
    pub(crate) fn new(q: i32, r: i32, res: u8) -> Self {
        Self { q, r, res }
    }

    /// The resolution this cell was minted at.
    #[inline]
    pub fn resolution(self) -> u8 {
        self.res
    }

    /// Hex-grid steps between two cells (cube-coordinate distance).
    ///
    /// Only meaningful for cells of the same resolution from the same grid.
    pub fn grid_distance(self, other: CellId) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = ((self.q + self.r) - (other.q + other.r)).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell(r{}:{},{})", self.res, self.q, self.r)
    }
}
