//! Placement Store
//!
//! Maps a region identity to the overlay image assigned to it. At most one
//! placement exists per region id; placing into an occupied region silently
//! overwrites the previous assignment (last-write-wins). Iteration order is
//! stable (sorted by region id), which only matters for rendering - regions
//! are assumed non-overlapping in the placement-affecting sense, so the
//! painter's algorithm is order-independent here.

use crate::types::{OverlayImage, Region, RegionId};
use std::collections::BTreeMap;

/// One region-to-overlay assignment.
///
/// Carries a copy of the region geometry so the compositor can draw the
/// overlay without resolving ids back through the region list. Placements
/// hold their own image handle: replacing the session's current uploaded
/// image leaves committed placements intact.
#[derive(Clone, Debug)]
pub struct Placement {
    pub region: Region,
    pub image: OverlayImage,
}

/// Stores placements keyed by region id.
#[derive(Clone, Debug, Default)]
pub struct PlacementStore {
    by_region: BTreeMap<RegionId, Placement>,
}

impl PlacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the placement for a region.
    pub fn place(&mut self, region: &Region, image: OverlayImage) {
        self.by_region.insert(
            region.id,
            Placement {
                region: region.clone(),
                image,
            },
        );
    }

    pub fn get(&self, region_id: RegionId) -> Option<&OverlayImage> {
        self.by_region.get(&region_id).map(|p| &p.image)
    }

    /// All placements in stable (region id) order.
    pub fn all(&self) -> impl Iterator<Item = &Placement> {
        self.by_region.values()
    }

    pub fn len(&self) -> usize {
        self.by_region.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_region.is_empty()
    }

    /// Session reset: drop every placement.
    pub fn clear(&mut self) {
        self.by_region.clear();
    }
}
