//! The [`ArrayService`] seam and the in-process backend.

use smallvec::SmallVec;

use crate::array::DistArray;
use crate::boxes::{IndexBox, IntVec};
use crate::error::MeshError;
use crate::partition::Partition;

/// The distributed-array allocation and data-movement service.
///
/// This is the registry's only collaborator for actual array memory:
/// it allocates storage over a partition, fills values, and transports
/// contents between differing partitions during rebalance. The registry
/// treats it as opaque.
///
/// # Object safety and threading
///
/// The trait is object safe and the registry holds it as
/// `Arc<dyn ArrayService>`. `Send + Sync` is required because the
/// registry itself may be shared across threads for read-only lookups.
///
/// # Collective discipline
///
/// In a multi-process run, `allocate` and `transport` are collective:
/// every process must issue the same call with identical arguments, and
/// each performs only the data movement for the patches its rank owns.
/// A hung collective call hangs the run; there is no timeout.
pub trait ArrayService: Send + Sync {
    /// Allocate an array over a partition with `ncomp` components per
    /// cell and a `ghost`-cell margin around each patch.
    fn allocate(
        &self,
        partition: &Partition,
        ncomp: u32,
        ghost: IntVec,
    ) -> Result<DistArray, MeshError>;

    /// Assign a value to every cell of the array, ghost cells included.
    fn fill(&self, array: &mut DistArray, value: f64) {
        array.fill(value);
    }

    /// Copy values from `src` into `dst` wherever their partitions'
    /// valid regions overlap.
    ///
    /// Every component at every cell covered by both partitions holds
    /// the source value afterwards; cells of `dst` covered only by the
    /// new partition are left as allocated (undefined to callers, who
    /// refill them via boundary fill or interpolation).
    fn transport(&self, src: &DistArray, dst: &mut DistArray) -> Result<(), MeshError>;

    /// Release an array's storage.
    ///
    /// The local backend simply drops; a distributed backend would
    /// return the allocation to its pool collectively.
    fn release(&self, array: DistArray) {
        drop(array);
    }
}

/// In-process [`ArrayService`] backend.
///
/// Holds every patch locally regardless of rank tag and performs no
/// communication. Used for single-process runs and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalArrayService;

impl LocalArrayService {
    /// Create the local backend.
    pub fn new() -> Self {
        Self
    }
}

impl ArrayService for LocalArrayService {
    fn allocate(
        &self,
        partition: &Partition,
        ncomp: u32,
        ghost: IntVec,
    ) -> Result<DistArray, MeshError> {
        DistArray::allocate(partition, ncomp, ghost)
    }

    fn transport(&self, src: &DistArray, dst: &mut DistArray) -> Result<(), MeshError> {
        if src.ncomp() != dst.ncomp() {
            return Err(MeshError::IncompatibleArrays {
                src_ncomp: src.ncomp(),
                dst_ncomp: dst.ncomp(),
            });
        }
        let ncomp = src.ncomp();
        for dst_patch in dst.partition().patches().to_vec() {
            // Overlap fragments between this destination patch and the
            // source partition. Patch counts are small; the SmallVec
            // keeps the common few-patch case off the heap.
            let overlaps: SmallVec<[IndexBox; 8]> = src
                .partition()
                .patches()
                .iter()
                .filter_map(|sp| sp.bounds.intersection(&dst_patch.bounds))
                .collect();
            for overlap in overlaps {
                for cell in overlap.points() {
                    for comp in 0..ncomp {
                        if let (Some(v), Some(slot)) =
                            (src.value_at(cell, comp), dst.value_mut(cell, comp))
                        {
                            *slot = v;
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
