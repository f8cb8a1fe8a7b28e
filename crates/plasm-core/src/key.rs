//! The composite registry key and owning-record identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::direction::Direction;

/// Composite key identifying one registry entry.
///
/// A key is the triple of a caller-chosen name, an optional vector
/// component direction, and a mesh-refinement level. Two keys compare
/// equal only when all three parts match; the same name at the same
/// level with different directions names distinct entries.
///
/// The registry keeps a single map over this value key rather than
/// nested maps per name/level, so level-wide iteration and listing stay
/// uniform.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldKey {
    /// Caller-chosen field name, unique within (direction, level).
    pub name: String,
    /// Component direction, present only for vector field components.
    pub dir: Option<Direction>,
    /// Mesh-refinement level this entry belongs to.
    pub level: u32,
}

impl FieldKey {
    /// Key for a scalar field.
    pub fn scalar(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            dir: None,
            level,
        }
    }

    /// Key for one component of a vector field.
    pub fn vector(name: impl Into<String>, dir: Direction, level: u32) -> Self {
        Self {
            name: name.into(),
            dir: Some(dir),
            level,
        }
    }

    /// Key for a name with an optional direction.
    pub fn new(name: impl Into<String>, dir: Option<Direction>, level: u32) -> Self {
        Self {
            name: name.into(),
            dir,
            level,
        }
    }

    /// The fully-qualified key string: `name@level` for scalars,
    /// `name.d@level` for vector components.
    ///
    /// This is the format reported by the registry's `list()` and the
    /// one persisted in checkpoint metadata, so readers can reconstruct
    /// which entries existed without extra bookkeeping.
    pub fn qualified(&self) -> String {
        match self.dir {
            Some(dir) => format!("{}.{}@{}", self.name, dir, self.level),
            None => format!("{}@{}", self.name, self.level),
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}

/// Counter for unique [`RecordId`] allocation.
static RECORD_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identity of one owning registry record.
///
/// Allocated from a monotonic atomic counter when a field is allocated.
/// An alias pins the owner's `RecordId` at alias time; resolution checks
/// it so that erasing an owner and re-allocating a new field under the
/// same name does not silently rebind existing aliases.
///
/// Rebalance mutates a record in place and keeps its id, so aliases
/// remain valid across rebalance points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(u64);

impl RecordId {
    /// Allocate a fresh, unique record id.
    pub fn next() -> Self {
        Self(RECORD_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
