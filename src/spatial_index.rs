//! Spatial Index Module
//!
//! Provides R-tree based spatial indexing for hit testing pointer positions
//! against the region list. At the expected scale (tens of regions) a linear
//! scan would also be correct; the R-tree keeps point queries O(log n) while
//! preserving the required contract: inclusive bounds on all four edges, and
//! overlapping regions tie-break to the first-declared one.

use crate::types::Region;
use rstar::{AABB, RTree, RTreeObject};

/// A spatial entry for one region, keyed by its declaration index.
///
/// Coordinates are carried raw (not normalized), so the containment filter
/// naturally rejects inverted rectangles.
#[derive(Debug, Clone, Copy)]
struct RegionEntry {
    ord: usize,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl RegionEntry {
    fn new(ord: usize, region: &Region) -> Self {
        Self {
            ord,
            x1: region.x1 as f32,
            y1: region.y1 as f32,
            x2: region.x2 as f32,
            y2: region.y2 as f32,
        }
    }

    #[inline]
    fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }
}

impl RTreeObject for RegionEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.x1, self.y1], [self.x2, self.y2])
    }
}

/// Spatial index over the session's region list.
///
/// Degenerate regions (zero-area or inverted) are never indexed, so they can
/// never be returned by a hit test.
#[derive(Debug, Default)]
pub struct SpatialIndex {
    tree: RTree<RegionEntry>,
    len: usize,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from regions in declaration order.
    pub fn from_regions(regions: &[Region]) -> Self {
        let entries: Vec<RegionEntry> = regions
            .iter()
            .enumerate()
            .filter(|(_, region)| !region.is_degenerate())
            .map(|(ord, region)| RegionEntry::new(ord, region))
            .collect();

        let len = entries.len();
        Self {
            tree: RTree::bulk_load(entries),
            len,
        }
    }

    /// Replace the index contents wholesale (coordinate reload).
    pub fn rebuild(&mut self, regions: &[Region]) {
        *self = Self::from_regions(regions);
    }

    /// Resolve a point to the declaration index of the matching region.
    ///
    /// Containment is inclusive on all four edges. When several regions
    /// overlap the point, the first-declared one wins - stable and
    /// deterministic regardless of tree shape.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<usize> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.contains_point(x, y))
            .map(|entry| entry.ord)
            .min()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
