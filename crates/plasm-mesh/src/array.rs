//! Distributed arrays allocated over a partition.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::boxes::{IndexBox, IntVec};
use crate::error::MeshError;
use crate::partition::Partition;

/// Counter for unique [`ArrayId`] allocation.
static ARRAY_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-allocation identifier for a [`DistArray`].
///
/// Allocated from a monotonic atomic counter. Two distinct allocations
/// always have different IDs, even over identical partitions, so "same
/// array" checks (e.g. that an alias resolves to its owner's array)
/// compare IDs rather than contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArrayId(u64);

impl ArrayId {
    fn next() -> Self {
        Self(ARRAY_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ArrayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One distributed multi-component array over a spatial partition.
///
/// Storage is per patch: each patch's valid box grown by the ghost
/// margin, times the component count. The local backend stores every
/// patch; a true distributed backend would hold only the invoking
/// rank's patches, with identical bookkeeping on every process.
///
/// Freshly allocated storage is zero-initialised, but callers must not
/// rely on that: the registry's contract leaves unfilled contents
/// undefined.
#[derive(Clone, Debug)]
pub struct DistArray {
    id: ArrayId,
    partition: Partition,
    ncomp: u32,
    ghost: IntVec,
    /// Per-patch storage, indexed like `partition.patches()`.
    patches: Vec<Vec<f64>>,
}

impl DistArray {
    /// Allocate storage for every patch of a partition.
    pub(crate) fn allocate(
        partition: &Partition,
        ncomp: u32,
        ghost: IntVec,
    ) -> Result<Self, MeshError> {
        if ncomp == 0 {
            return Err(MeshError::InvalidComponentCount);
        }
        if ghost.iter().any(|&g| g < 0) {
            return Err(MeshError::NegativeGhost { ghost });
        }
        let patches = partition
            .patches()
            .iter()
            .map(|p| vec![0.0; p.bounds.grow(ghost).num_cells() * ncomp as usize])
            .collect();
        Ok(Self {
            id: ArrayId::next(),
            partition: partition.clone(),
            ncomp,
            ghost,
            patches,
        })
    }

    /// This allocation's unique identity.
    pub fn id(&self) -> ArrayId {
        self.id
    }

    /// The partition this array is spread over.
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Number of components per cell.
    pub fn ncomp(&self) -> u32 {
        self.ncomp
    }

    /// Ghost margin around each patch's valid region.
    pub fn ghost(&self) -> IntVec {
        self.ghost
    }

    /// Assign a value to every cell, ghost cells included.
    pub fn fill(&mut self, value: f64) {
        for patch in &mut self.patches {
            patch.fill(value);
        }
    }

    /// Read one component at a cell in some patch's valid region.
    ///
    /// Returns `None` if no patch covers the cell or the component is
    /// out of range. Ghost cells are not addressable through this path.
    pub fn value_at(&self, p: IntVec, comp: u32) -> Option<f64> {
        let (patch, idx) = self.flat_index(p, comp)?;
        Some(self.patches[patch][idx])
    }

    /// Write one component at a cell in some patch's valid region.
    pub fn value_mut(&mut self, p: IntVec, comp: u32) -> Option<&mut f64> {
        let (patch, idx) = self.flat_index(p, comp)?;
        Some(&mut self.patches[patch][idx])
    }

    /// Map a valid-region cell and component to patch and flat offset.
    fn flat_index(&self, p: IntVec, comp: u32) -> Option<(usize, usize)> {
        if comp >= self.ncomp {
            return None;
        }
        let patch = self.partition.patch_containing(p)?;
        let grown: IndexBox = self.partition.patches()[patch].bounds.grow(self.ghost);
        let lo = grown.lo();
        let ext = grown.extent();
        let x = (p[0] - lo[0]) as usize;
        let y = (p[1] - lo[1]) as usize;
        let z = (p[2] - lo[2]) as usize;
        let cell = (z * ext[1] + y) * ext[0] + x;
        Some((patch, cell * self.ncomp as usize + comp as usize))
    }
}
