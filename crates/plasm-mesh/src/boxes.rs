//! Index boxes over the global cell lattice.

use crate::error::MeshError;

/// Per-dimension integer vector (cell coordinates, extents, margins).
pub type IntVec = [i32; 3];

/// A closed 3-D box of cell indices: every `p` with
/// `lo[d] <= p[d] <= hi[d]` for all dimensions.
///
/// Bounds are inclusive on both ends, matching the structured-mesh
/// convention of the underlying framework. Construction rejects boxes
/// that are empty in any dimension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IndexBox {
    lo: IntVec,
    hi: IntVec,
}

impl IndexBox {
    /// Create a box from inclusive corners.
    pub fn new(lo: IntVec, hi: IntVec) -> Result<Self, MeshError> {
        if (0..3).any(|d| hi[d] < lo[d]) {
            return Err(MeshError::EmptyBox { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Lower corner (inclusive).
    pub fn lo(&self) -> IntVec {
        self.lo
    }

    /// Upper corner (inclusive).
    pub fn hi(&self) -> IntVec {
        self.hi
    }

    /// Number of cells along each dimension.
    pub fn extent(&self) -> [usize; 3] {
        [
            (self.hi[0] - self.lo[0] + 1) as usize,
            (self.hi[1] - self.lo[1] + 1) as usize,
            (self.hi[2] - self.lo[2] + 1) as usize,
        ]
    }

    /// Total number of cells in the box.
    pub fn num_cells(&self) -> usize {
        let e = self.extent();
        e[0] * e[1] * e[2]
    }

    /// Whether the box contains a cell coordinate.
    pub fn contains(&self, p: IntVec) -> bool {
        (0..3).all(|d| self.lo[d] <= p[d] && p[d] <= self.hi[d])
    }

    /// The overlap of two boxes, or `None` if they are disjoint.
    pub fn intersection(&self, other: &IndexBox) -> Option<IndexBox> {
        let mut lo = [0; 3];
        let mut hi = [0; 3];
        for d in 0..3 {
            lo[d] = self.lo[d].max(other.lo[d]);
            hi[d] = self.hi[d].min(other.hi[d]);
            if hi[d] < lo[d] {
                return None;
            }
        }
        Some(IndexBox { lo, hi })
    }

    /// The box grown by a non-negative margin in every dimension.
    ///
    /// Used to size ghost-cell storage around a patch's valid region.
    pub fn grow(&self, margin: IntVec) -> IndexBox {
        let mut lo = self.lo;
        let mut hi = self.hi;
        for d in 0..3 {
            lo[d] -= margin[d];
            hi[d] += margin[d];
        }
        IndexBox { lo, hi }
    }

    /// Iterate over every cell coordinate in the box, x fastest.
    ///
    /// The order is deterministic; two calls on equal boxes yield the
    /// same sequence.
    pub fn points(&self) -> impl Iterator<Item = IntVec> + '_ {
        let (lo, hi) = (self.lo, self.hi);
        (lo[2]..=hi[2]).flat_map(move |z| {
            (lo[1]..=hi[1])
                .flat_map(move |y| (lo[0]..=hi[0]).map(move |x| [x, y, z]))
        })
    }
}
