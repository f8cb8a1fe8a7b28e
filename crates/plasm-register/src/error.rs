//! Registry error types.
//!
//! Every registry error is a programmer error arising from incorrect
//! registration order, not a runtime fault. In a collective
//! distributed-memory run the caller must treat any of these as fatal:
//! a locally-recovered error would desynchronise registry state across
//! processes (some continuing with a field, others without), which is
//! worse than a clean abort. The library reports and propagates; the
//! driver aborts.

use std::error::Error;
use std::fmt;

use plasm_mesh::MeshError;

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisterError {
    /// Lookup of a key with no entry, or resolution of a dangling alias.
    NotFound {
        /// Fully-qualified key string of the missing entry.
        key: String,
    },
    /// Allocate or alias on a key that already has an entry.
    Duplicate {
        /// Fully-qualified key string of the occupied entry.
        key: String,
    },
    /// Alias request naming a non-existent owner.
    InvalidAlias {
        /// The alias name that was being created.
        new_name: String,
        /// The owner name that does not exist at the direction/level.
        owner: String,
    },
    /// Alias request naming an entry that is itself an alias.
    AliasChain {
        /// The alias name that was being created.
        new_name: String,
        /// The named entry, which is an alias rather than an owner.
        owner: String,
    },
    /// The distributed-array service failed during allocate or rebalance.
    Service(MeshError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { key } => write!(f, "field '{key}' is not registered"),
            Self::Duplicate { key } => {
                write!(f, "field '{key}' is already registered")
            }
            Self::InvalidAlias { new_name, owner } => {
                write!(
                    f,
                    "cannot alias '{new_name}': owner '{owner}' is not registered"
                )
            }
            Self::AliasChain { new_name, owner } => {
                write!(
                    f,
                    "cannot alias '{new_name}': '{owner}' is itself an alias"
                )
            }
            Self::Service(err) => write!(f, "array service failed: {err}"),
        }
    }
}

impl Error for RegisterError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Service(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MeshError> for RegisterError {
    fn from(err: MeshError) -> Self {
        Self::Service(err)
    }
}
