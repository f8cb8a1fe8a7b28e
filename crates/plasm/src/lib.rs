//! Plasm: a distributed field registry for particle-in-cell simulations.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Plasm sub-crates. For most users, adding `plasm` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use plasm::prelude::*;
//!
//! // One rank, one patch: a 16x16 level-0 domain.
//! let service = Arc::new(LocalArrayService::new());
//! let p = Partition::single(IndexBox::new([0, 0, 0], [15, 15, 0])?, 0);
//!
//! let mut fields = FieldRegister::new(service);
//! fields.alloc("rho", None, 0, &p, 1, [1, 1, 0], Some(0.0), true, true)?;
//! for dir in Direction::ALL {
//!     fields.alloc("E", Some(dir), 0, &p, 1, [1, 1, 0], Some(0.0), true, true)?;
//! }
//!
//! // Another module retrieves the vector field by name.
//! let [ex, _ey, _ez] = fields.get_alldirs("E", 0)?;
//! assert_eq!(ex.ncomp(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `plasm-core` | Keys, directions, the `FieldName` boundary trait |
//! | [`mesh`] | `plasm-mesh` | Boxes, partitions, arrays, the `ArrayService` seam |
//! | [`register`] | `plasm-register` | The field registry and rebalance pass |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Keys, directions, and the identifier-conversion trait (`plasm-core`).
pub mod types {
    pub use plasm_core::*;
}

/// Boxes, partitions, arrays, and the array-service seam (`plasm-mesh`).
pub mod mesh {
    pub use plasm_mesh::*;
}

/// The field registry and rebalance pass (`plasm-register`).
pub mod register {
    pub use plasm_register::*;
}

/// The types most callers need, for glob import.
pub mod prelude {
    pub use plasm_core::{Direction, FieldKey, FieldName};
    pub use plasm_mesh::{
        ArrayService, DistArray, IndexBox, IntVec, LocalArrayService, Partition, Patch,
    };
    pub use plasm_register::{FieldRegister, RegisterError};
}
