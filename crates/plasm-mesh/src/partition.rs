//! Spatial partitions: the assignment of box-shaped regions to ranks.

use crate::boxes::{IndexBox, IntVec};
use crate::error::MeshError;

/// One box-shaped region of a partition, tagged with its owning rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Patch {
    /// The valid (non-ghost) region of this patch.
    pub bounds: IndexBox,
    /// The process rank that owns this patch's data.
    pub rank: u32,
}

impl Patch {
    /// Create a patch.
    pub fn new(bounds: IndexBox, rank: u32) -> Self {
        Self { bounds, rank }
    }
}

/// The assignment of disjoint index boxes (and their owning ranks)
/// over which a distributed array's data is spread.
///
/// Patch order is part of the partition's identity: all processes in a
/// collective run must construct partitions with identical patch lists.
/// Construction validates that the partition is non-empty and that no
/// two patches overlap; overlapping valid regions would make ownership
/// of a cell ambiguous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    patches: Vec<Patch>,
}

impl Partition {
    /// Create a partition from a patch list.
    pub fn new(patches: Vec<Patch>) -> Result<Self, MeshError> {
        if patches.is_empty() {
            return Err(MeshError::EmptyPartition);
        }
        for (i, a) in patches.iter().enumerate() {
            for (j, b) in patches.iter().enumerate().skip(i + 1) {
                if a.bounds.intersection(&b.bounds).is_some() {
                    return Err(MeshError::OverlappingPatches { first: i, second: j });
                }
            }
        }
        Ok(Self { patches })
    }

    /// Convenience: a single-patch partition owned by one rank.
    pub fn single(bounds: IndexBox, rank: u32) -> Self {
        Self {
            patches: vec![Patch::new(bounds, rank)],
        }
    }

    /// The patches, in construction order.
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Number of patches.
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Whether the partition has no patches (never true post-construction).
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Total number of valid cells across all patches.
    pub fn num_cells(&self) -> usize {
        self.patches.iter().map(|p| p.bounds.num_cells()).sum()
    }

    /// Whether any patch's valid region contains the cell.
    pub fn covers(&self, p: IntVec) -> bool {
        self.patch_containing(p).is_some()
    }

    /// Index of the patch whose valid region contains the cell.
    pub fn patch_containing(&self, p: IntVec) -> Option<usize> {
        self.patches.iter().position(|patch| patch.bounds.contains(p))
    }
}
