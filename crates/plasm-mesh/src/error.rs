//! Mesh and distributed-array error types.

use std::error::Error;
use std::fmt;

use crate::boxes::IntVec;

/// Errors from partition construction and distributed-array operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeshError {
    /// An index box with `hi < lo` in some dimension.
    EmptyBox {
        /// Lower corner of the offending box.
        lo: IntVec,
        /// Upper corner of the offending box.
        hi: IntVec,
    },
    /// A ghost margin with a negative component.
    NegativeGhost {
        /// The offending ghost margin.
        ghost: IntVec,
    },
    /// A partition with no patches.
    EmptyPartition,
    /// Two patches in a partition overlap.
    OverlappingPatches {
        /// Index of the first overlapping patch.
        first: usize,
        /// Index of the second overlapping patch.
        second: usize,
    },
    /// An array allocation with zero components.
    InvalidComponentCount,
    /// Transport between arrays with differing component counts.
    IncompatibleArrays {
        /// Component count of the source array.
        src_ncomp: u32,
        /// Component count of the destination array.
        dst_ncomp: u32,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBox { lo, hi } => {
                write!(f, "empty index box: lo {lo:?}, hi {hi:?}")
            }
            Self::NegativeGhost { ghost } => {
                write!(f, "negative ghost margin: {ghost:?}")
            }
            Self::EmptyPartition => write!(f, "partition has no patches"),
            Self::OverlappingPatches { first, second } => {
                write!(f, "patches {first} and {second} overlap")
            }
            Self::InvalidComponentCount => {
                write!(f, "array component count must be at least 1")
            }
            Self::IncompatibleArrays {
                src_ncomp,
                dst_ncomp,
            } => {
                write!(
                    f,
                    "transport between incompatible arrays: {src_ncomp} vs {dst_ncomp} components"
                )
            }
        }
    }
}

impl Error for MeshError {}
