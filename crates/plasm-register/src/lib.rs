//! The distributed field registry for Plasm.
//!
//! [`FieldRegister`] owns, names, aliases, and rebalances the
//! distributed arrays ("fields") of a simulation, across mesh-refinement
//! levels, for arbitrarily many scalar and 3-component vector
//! quantities. Physics modules register fields here instead of
//! coordinating with one another; the registry guarantees collision-free
//! naming and keeps aliases valid across rebalance.
//!
//! Array memory itself is delegated to a
//! [`plasm_mesh::ArrayService`] backend.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod register;
mod remake;

pub use error::RegisterError;
pub use record::FieldRecord;
pub use register::FieldRegister;
