//! Spatial partitions and the distributed-array service seam for Plasm.
//!
//! This crate models the spatial side of the field registry: index
//! boxes, partitions (the assignment of box-shaped regions to process
//! ranks), and distributed arrays allocated over a partition. The
//! [`ArrayService`] trait is the seam to the actual distributed-memory
//! backend; [`LocalArrayService`] is the in-process implementation used
//! for single-process runs and tests.
//!
//! # Collective discipline
//!
//! In a multi-process run, every allocation and transport is a
//! collective operation: all processes must issue the same call with
//! identical arguments, and each holds only the patches its rank owns.
//! The local backend holds every patch regardless of rank tag and
//! performs no communication.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod boxes;
pub mod error;
pub mod partition;
pub mod service;

pub use array::{ArrayId, DistArray};
pub use boxes::{IndexBox, IntVec};
pub use error::MeshError;
pub use partition::{Partition, Patch};
pub use service::{ArrayService, LocalArrayService};
