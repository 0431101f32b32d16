//! The `ProbabilityField` — a cell→probability mapping over a fixed hexagonal
//! domain.
//!
//! # Invariant
//!
//! After any completed mutation the entries sum to 1 within floating-point
//! tolerance, with two explicitly signalled exceptions:
//!
//! - the freshly initialized field is all-zero (the one allowed zero-sum
//!   state, before the first hotspot injection), and
//! - a collapsed field is empty ([`FieldError::Collapsed`] was returned and
//!   the domain cleared).
//!
//! The domain — the k-ring neighborhood of a center cell — is fixed at
//! construction and never grows.  All mutation happens through `&mut self`
//! methods returning `Result`, so there is exactly one owner and no aliased
//! map handles.

use rustc_hash::FxHashMap;
use sar_grid::{CellId, SpatialIndex};

use crate::error::{FieldError, FieldResult};

/// Probability-of-presence surface over a hexagonal neighborhood.
#[derive(Clone, Debug)]
pub struct ProbabilityField {
    cells:      FxHashMap<CellId, f64>,
    center:     CellId,
    ring_count: u32,
}

impl ProbabilityField {
    // ── Construction ──────────────────────────────────────────────────────

    /// Populate every cell within `ring_count` rings of `center` with
    /// probability 0.  This fixes the field's domain for its lifetime.
    pub fn initialize<I: SpatialIndex + ?Sized>(
        index:      &I,
        center:     CellId,
        ring_count: u32,
    ) -> Self {
        let cells = index
            .k_ring(center, ring_count)
            .into_iter()
            .map(|cell| (cell, 0.0))
            .collect();
        Self { cells, center, ring_count }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Diffuse a hotspot into the field with a Gaussian kernel.
    ///
    /// For each ring distance `0..max_ring_radius` from `hotspot`, the weight
    /// `exp(-d²/2σ²)` is computed from the great-circle distance `d` (in
    /// kilometers) between the hotspot cell's center and one representative
    /// cell of that ring, and assigned to every cell of the ring — ring cells
    /// are treated as equidistant from the hotspot, an approximation inherent
    /// to the hex discretization that the scoring depends on.  The delta
    /// layer is normalized to unit mass, added into the field (cells outside
    /// the domain are dropped), and the whole field is renormalized.
    pub fn inject_hotspot<I: SpatialIndex + ?Sized>(
        &mut self,
        index:          &I,
        hotspot:        CellId,
        sigma:          f64,
        max_ring_radius: u32,
    ) -> FieldResult<()> {
        let origin = index.to_coordinate(hotspot);

        let mut delta: FxHashMap<CellId, f64> = FxHashMap::default();
        for distance in 0..max_ring_radius {
            let ring = index.ring(hotspot, distance);
            let Some(&representative) = ring.first() else {
                continue;
            };
            let d_km = origin.distance_km(index.to_coordinate(representative));
            let weight = (-d_km * d_km / (2.0 * sigma * sigma)).exp();
            for cell in ring {
                delta.insert(cell, weight);
            }
        }

        let delta_mass: f64 = delta.values().sum();
        if delta_mass > 0.0 {
            for weight in delta.values_mut() {
                *weight /= delta_mass;
            }
        }

        for (cell, weight) in delta {
            if let Some(p) = self.cells.get_mut(&cell) {
                *p += weight;
            }
        }

        self.normalize()
    }

    /// Bayesian belief update after an unsuccessful look at `visited`.
    ///
    /// Treats the field as a prior and applies
    /// `posterior = prior·(1−f) / (1 − prior·f)` at the visited cell only,
    /// then renormalizes.  `f` is the per-visit detection probability and
    /// must lie in [0, 1); a visited cell outside the field's domain carries
    /// no information and leaves the field unchanged.
    pub fn bayesian_update(&mut self, visited: CellId, f: f64) -> FieldResult<()> {
        if !(0.0..1.0).contains(&f) {
            return Err(FieldError::InvalidDetectionProbability(f));
        }
        let Some(p) = self.cells.get_mut(&visited) else {
            return Ok(());
        };

        let prior = *p;
        *p = prior * (1.0 - f) / (1.0 - prior * f);

        self.normalize()
    }

    /// Divide every entry by the total mass so the field sums to 1.
    ///
    /// Zero total mass collapses the field: the domain is cleared and
    /// [`FieldError::Collapsed`] returned, never a silently unchanged field.
    pub fn normalize(&mut self) -> FieldResult<()> {
        let total: f64 = self.cells.values().sum();
        if total == 0.0 {
            self.cells.clear();
            return Err(FieldError::Collapsed);
        }
        for p in self.cells.values_mut() {
            *p /= total;
        }
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Probability at `cell`; 0 for cells outside the domain.
    #[inline]
    pub fn probability(&self, cell: CellId) -> f64 {
        self.cells.get(&cell).copied().unwrap_or(0.0)
    }

    /// `true` if `cell` belongs to the field's domain.
    #[inline]
    pub fn contains(&self, cell: CellId) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Number of cells in the domain (0 after a collapse).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if the field has collapsed (or was built over an empty k-ring).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(cell, probability)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, f64)> + '_ {
        self.cells.iter().map(|(&cell, &p)| (cell, p))
    }

    /// The domain's cell set, in arbitrary order.
    pub fn domain(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.keys().copied()
    }

    /// Sum of all entries.
    pub fn total_mass(&self) -> f64 {
        self.cells.values().sum()
    }

    /// The highest-probability cell, with a deterministic tie-break on the
    /// cell token.  `None` only for a collapsed field.
    pub fn peak(&self) -> Option<CellId> {
        self.cells
            .iter()
            .max_by(|(ca, pa), (cb, pb)| pa.total_cmp(pb).then_with(|| ca.cmp(cb)))
            .map(|(&cell, _)| cell)
    }

    /// The cell the field was initialized around.
    #[inline]
    pub fn center(&self) -> CellId {
        self.center
    }

    /// The ring count the domain was built with.
    #[inline]
    pub fn ring_count(&self) -> u32 {
        self.ring_count
    }
}
