//! The detection ledger — which casualty cells have been looked at, and with
//! what outcome.

use rustc_hash::FxHashMap;
use sar_grid::CellId;

/// Monotone record of detection attempts at visited casualty cells.
///
/// Grows only: entries are never removed, and a confirmed (`true`) entry is
/// never downgraded.  A `false` entry (false negative) may flip to `true`
/// when a later visit's fresh draw succeeds.
#[derive(Clone, Debug, Default)]
pub struct DetectionLedger {
    entries: FxHashMap<CellId, bool>,
}

impl DetectionLedger {
    /// Record the outcome of one detection draw at `cell`.
    ///
    /// An existing `true` entry wins over any later outcome.
    pub fn record(&mut self, cell: CellId, confirmed: bool) {
        let entry = self.entries.entry(cell).or_insert(confirmed);
        if confirmed {
            *entry = true;
        }
    }

    /// `true` if `cell` has a confirmed detection.
    pub fn is_confirmed(&self, cell: CellId) -> bool {
        self.entries.get(&cell).copied().unwrap_or(false)
    }

    /// `true` if `cell` has any entry, confirmed or not.
    pub fn contains(&self, cell: CellId) -> bool {
        self.entries.contains_key(&cell)
    }

    /// Number of casualty cells with at least one recorded attempt.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries still marked `false` — casualties seen but not confirmed.
    pub fn false_negatives(&self) -> usize {
        self.entries.values().filter(|&&confirmed| !confirmed).count()
    }

    /// Iterate over `(cell, confirmed)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, bool)> + '_ {
        self.entries.iter().map(|(&cell, &confirmed)| (cell, confirmed))
    }
}
