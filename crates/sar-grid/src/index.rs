//! The `SpatialIndex` trait and its default axial-grid implementation.
//!
//! # Pluggability
//!
//! The probability field and search simulator talk to the discretization only
//! through [`SpatialIndex`], so applications can swap in a different cell
//! scheme (e.g. bindings to a geodesic DGGS) without touching the core.  The
//! default [`HexGrid`] is a pointy-top axial hex lattice on a local
//! azimuthal-equidistant projection, which is flat-earth accurate at the
//! sub-kilometer search radii this framework targets.
//!
//! # Contract
//!
//! Implementations must be deterministic and bijective at a fixed resolution:
//! `to_cell(to_coordinate(c)) == c` for every cell `c` the index produced.

use sar_core::GeoPoint;
use sar_core::geo::EARTH_RADIUS_M;

use crate::cell::CellId;
use crate::error::{GridError, GridResult};

// ── SpatialIndex trait ────────────────────────────────────────────────────────

/// Conversion between geographic coordinates and discrete hexagonal cells,
/// plus ring-structured neighborhood enumeration.
pub trait SpatialIndex {
    /// The resolution this index operates at.
    fn resolution(&self) -> u8;

    /// Cell containing the given coordinate.
    fn to_cell(&self, p: GeoPoint) -> CellId;

    /// Center coordinate of the given cell.
    fn to_coordinate(&self, cell: CellId) -> GeoPoint;

    /// All cells exactly `distance` steps from `center`.
    ///
    /// `distance` 0 yields just `center`; otherwise the ring has exactly
    /// `6 * distance` cells.
    fn ring(&self, center: CellId, distance: u32) -> Vec<CellId>;

    /// All cells within `radius` steps of `center`, inclusive of `center`.
    fn k_ring(&self, center: CellId, radius: u32) -> Vec<CellId>;
}

// ── HexGrid ───────────────────────────────────────────────────────────────────

/// Neighbor spacing at resolution 0, in meters.  Spacing halves per
/// resolution step; resolution 13 gives the 7.5 m cells the original search
/// missions were sized around (16 rings ≈ 240 m cluster radius).
const BASE_SPACING_M: f64 = 61_440.0;

/// Finest supported resolution (spacing ≈ 5.9 cm).
const MAX_RESOLUTION: u8 = 20;

/// Meters per degree of latitude on the 6371 km sphere.
const M_PER_DEG: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

/// Axial direction vectors (q, r), counterclockwise from east.
const DIRECTIONS: [(i32, i32); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Pointy-top hexagonal lattice anchored at a geographic origin.
///
/// Coordinates are projected onto a local tangent plane about the origin
/// (azimuthal equidistant: meters east / meters north), then snapped to the
/// nearest hex center by cube rounding.  All six neighbors of a cell are
/// `spacing_m` away in the projected plane.
#[derive(Clone, Debug)]
pub struct HexGrid {
    origin:    GeoPoint,
    res:       u8,
    /// Hex circumradius ("size") in meters; neighbor spacing is √3 × size.
    size_m:    f64,
    /// cos(origin latitude), cached for the lon↔meters conversion.
    cos_lat0:  f64,
}

impl HexGrid {
    /// Create a grid anchored at `origin` with the given resolution.
    pub fn new(origin: GeoPoint, res: u8) -> GridResult<Self> {
        if res > MAX_RESOLUTION {
            return Err(GridError::ResolutionOutOfRange { res, max: MAX_RESOLUTION });
        }
        let spacing = BASE_SPACING_M / f64::powi(2.0, res as i32);
        Ok(Self {
            origin,
            res,
            size_m: spacing / 3.0_f64.sqrt(),
            cos_lat0: origin.lat.to_radians().cos(),
        })
    }

    /// Distance between adjacent cell centers at this resolution, in meters.
    #[inline]
    pub fn spacing_m(&self) -> f64 {
        self.size_m * 3.0_f64.sqrt()
    }

    /// Project a coordinate to local (east, north) meters about the origin.
    fn project(&self, p: GeoPoint) -> (f64, f64) {
        let x = (p.lon - self.origin.lon) * M_PER_DEG * self.cos_lat0;
        let y = (p.lat - self.origin.lat) * M_PER_DEG;
        (x, y)
    }

    /// Inverse of [`project`](Self::project).
    fn unproject(&self, x: f64, y: f64) -> GeoPoint {
        GeoPoint::new(
            self.origin.lat + y / M_PER_DEG,
            self.origin.lon + x / (M_PER_DEG * self.cos_lat0),
        )
    }

    /// Round fractional axial coordinates to the containing cell.
    ///
    /// Standard cube rounding: round all three cube components, then fix the
    /// one with the largest rounding error so q + r + s = 0 still holds.
    fn axial_round(qf: f64, rf: f64) -> (i32, i32) {
        let sf = -qf - rf;

        let mut q = qf.round();
        let mut r = rf.round();
        let s = sf.round();

        let dq = (q - qf).abs();
        let dr = (r - rf).abs();
        let ds = (s - sf).abs();

        if dq > dr && dq > ds {
            q = -r - s;
        } else if dr > ds {
            r = -q - s;
        }
        (q as i32, r as i32)
    }
}

impl SpatialIndex for HexGrid {
    #[inline]
    fn resolution(&self) -> u8 {
        self.res
    }

    fn to_cell(&self, p: GeoPoint) -> CellId {
        let (x, y) = self.project(p);
        // Pointy-top inverse: pixel → fractional axial.
        let qf = (3.0_f64.sqrt() / 3.0 * x - y / 3.0) / self.size_m;
        let rf = (2.0 / 3.0 * y) / self.size_m;
        let (q, r) = Self::axial_round(qf, rf);
        CellId::new(q, r, self.res)
    }

    fn to_coordinate(&self, cell: CellId) -> GeoPoint {
        debug_assert_eq!(cell.res, self.res, "cell from a different resolution");
        let x = self.size_m * 3.0_f64.sqrt() * (cell.q as f64 + cell.r as f64 / 2.0);
        let y = self.size_m * 1.5 * cell.r as f64;
        self.unproject(x, y)
    }

    fn ring(&self, center: CellId, distance: u32) -> Vec<CellId> {
        debug_assert_eq!(center.res, self.res, "cell from a different resolution");
        if distance == 0 {
            return vec![center];
        }

        let k = distance as i32;
        let mut cells = Vec::with_capacity(6 * distance as usize);

        // Start at the cell `distance` steps along direction 4, then walk the
        // perimeter: `distance` steps in each of the six directions.
        let (mut q, mut r) = (
            center.q + DIRECTIONS[4].0 * k,
            center.r + DIRECTIONS[4].1 * k,
        );
        for (dq, dr) in DIRECTIONS {
            for _ in 0..k {
                cells.push(CellId::new(q, r, self.res));
                q += dq;
                r += dr;
            }
        }
        cells
    }

    fn k_ring(&self, center: CellId, radius: u32) -> Vec<CellId> {
        debug_assert_eq!(center.res, self.res, "cell from a different resolution");
        let k = radius as i32;
        let mut cells = Vec::with_capacity((3 * radius * (radius + 1) + 1) as usize);
        for dq in -k..=k {
            for dr in (-k).max(-dq - k)..=k.min(-dq + k) {
                cells.push(CellId::new(center.q + dq, center.r + dr, self.res));
            }
        }
        cells
    }
}
