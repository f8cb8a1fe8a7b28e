//! Core types for the Plasm field registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the mesh and registry crates: vector
//! component directions, the composite registry key, record identity,
//! and the identifier-conversion trait used at the API boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod key;
pub mod name;

pub use direction::Direction;
pub use key::{FieldKey, RecordId};
pub use name::FieldName;
