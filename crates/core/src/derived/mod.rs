//! Derived datasets computed lazily and memoized for one validation pass.
//!
//! Several independent checkers consult the same derived data (timing
//! anchors per scope, widening timelines), so each dataset is computed at
//! most once per pass through [`ChartCache`]. The cache borrows the tree
//! and lives exactly as long as one `validate` call; a new pass over
//! changed content starts from a fresh cache.

/// Widening-state timelines and point-in-time lookup.
pub mod enwiden;
/// Per-scope timing-anchor datasets.
pub mod timing;

pub use enwiden::{EnwidenEntry, EnwidenResult, enabled_at, entry_in_effect};
pub use timing::{TimingData, TimingResult};

use crate::chart::{Chart, Item};
use std::cell::OnceCell;

/// Per-pass memoization context.
///
/// Group results are keyed by the group's index in `chart.items` (a side
/// table parallel to the item sequence), so no reference identity or
/// content hashing is involved. Compute functions are pure; an absence of
/// relevant events yields an empty dataset, never an error.
pub struct ChartCache<'c> {
    chart: &'c Chart,
    root_timing: OnceCell<TimingResult>,
    group_timing: Vec<OnceCell<TimingResult>>,
    enwiden: OnceCell<EnwidenResult>,
}

impl<'c> ChartCache<'c> {
    /// Create an empty cache over the given tree.
    pub fn new(chart: &'c Chart) -> Self {
        Self {
            chart,
            root_timing: OnceCell::new(),
            group_timing: (0..chart.items.len()).map(|_| OnceCell::new()).collect(),
            enwiden: OnceCell::new(),
        }
    }

    /// The tree this cache is bound to.
    pub fn chart(&self) -> &'c Chart {
        self.chart
    }

    /// The timing dataset for the top-level scope.
    pub fn root_timing(&self) -> &TimingResult {
        self.root_timing
            .get_or_init(|| timing::derive_root(self.chart))
    }

    /// The timing dataset for the group at `item_idx` in the top-level
    /// sequence, or `None` if that item is not a timing group.
    pub fn group_timing(&self, item_idx: usize) -> Option<&TimingResult> {
        match self.chart.items.get(item_idx)? {
            Item::TimingGroup(group) => {
                Some(self.group_timing[item_idx].get_or_init(|| timing::derive_group(group)))
            }
            _ => None,
        }
    }

    /// Both widening timelines.
    pub fn enwiden(&self) -> &EnwidenResult {
        self.enwiden.get_or_init(|| enwiden::derive(self.chart))
    }

    /// The `enwidencamera` timeline, sorted by time.
    pub fn cameras(&self) -> &[EnwidenEntry] {
        &self.enwiden().cameras
    }

    /// The `enwidenlanes` timeline, sorted by time.
    pub fn lanes(&self) -> &[EnwidenEntry] {
        &self.enwiden().lanes
    }
}
