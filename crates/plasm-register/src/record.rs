//! The registry's per-field record.

use plasm_core::{Direction, RecordId};
use plasm_mesh::DistArray;

/// What a record holds: its own array, or a name reference to the
/// owner it shares one with.
///
/// Aliases never cache a resolved array; they are re-resolved by name
/// on every lookup so that they stay valid when the owner's array is
/// replaced during rebalance. `owner_id` pins the owning record's
/// identity at alias time so an owner that is erased and later
/// re-allocated under the same name does not silently re-bind the
/// alias.
#[derive(Debug)]
pub(crate) enum Storage {
    /// The record owns its array.
    Owned(DistArray),
    /// The record shares the array of the named owner.
    Alias {
        /// Name of the owning record.
        owner: String,
        /// The owning record's identity when the alias was created.
        owner_id: RecordId,
    },
}

/// The registry's record for one field entry.
///
/// An owning record controls the lifetime of exactly one distributed
/// array; an alias record introduces a second name for an owner's
/// array without owning any memory. Flags control participation in the
/// level-wide rebalance pass.
#[derive(Debug)]
pub struct FieldRecord {
    pub(crate) id: RecordId,
    pub(crate) dir: Option<Direction>,
    pub(crate) level: u32,
    pub(crate) remake: bool,
    pub(crate) redistribute_on_remake: bool,
    pub(crate) storage: Storage,
}

impl FieldRecord {
    pub(crate) fn owned(
        dir: Option<Direction>,
        level: u32,
        remake: bool,
        redistribute_on_remake: bool,
        array: DistArray,
    ) -> Self {
        Self {
            id: RecordId::next(),
            dir,
            level,
            remake,
            redistribute_on_remake,
            storage: Storage::Owned(array),
        }
    }

    pub(crate) fn alias(
        dir: Option<Direction>,
        level: u32,
        owner: String,
        owner_id: RecordId,
    ) -> Self {
        Self {
            id: RecordId::next(),
            dir,
            level,
            // An alias never owns memory, so the rebalance pass skips
            // it; it follows its owner implicitly.
            remake: false,
            redistribute_on_remake: false,
            storage: Storage::Alias { owner, owner_id },
        }
    }

    /// Component direction, present iff the record is part of a vector field.
    pub fn dir(&self) -> Option<Direction> {
        self.dir
    }

    /// Mesh-refinement level of this record.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Whether the record participates in the default rebalance pass.
    pub fn remake(&self) -> bool {
        self.remake
    }

    /// Whether rebalance transports old values into the new layout.
    pub fn redistribute_on_remake(&self) -> bool {
        self.redistribute_on_remake
    }

    /// Whether this record is part of a vector field.
    pub fn is_vector(&self) -> bool {
        self.dir.is_some()
    }

    /// Whether this record is an alias (owns no memory).
    pub fn is_alias(&self) -> bool {
        matches!(self.storage, Storage::Alias { .. })
    }

    /// The owner's name, for alias records.
    pub fn owner_name(&self) -> Option<&str> {
        match &self.storage {
            Storage::Owned(_) => None,
            Storage::Alias { owner, .. } => Some(owner),
        }
    }

    /// The owned array, for owning records.
    pub(crate) fn array(&self) -> Option<&DistArray> {
        match &self.storage {
            Storage::Owned(array) => Some(array),
            Storage::Alias { .. } => None,
        }
    }

    /// The owned array, mutably, for owning records.
    pub(crate) fn array_mut(&mut self) -> Option<&mut DistArray> {
        match &mut self.storage {
            Storage::Owned(array) => Some(array),
            Storage::Alias { .. } => None,
        }
    }
}
