//! The registry core: naming, allocation, aliasing, lookup, teardown.

use std::sync::Arc;

use indexmap::IndexMap;

use plasm_core::{Direction, FieldKey, FieldName};
use plasm_mesh::{ArrayService, DistArray, IntVec, Partition};

use crate::error::RegisterError;
use crate::record::{FieldRecord, Storage};

/// The register of all fields owned by one simulation instance.
///
/// Maps composite keys (name, optional direction, level) to
/// [`FieldRecord`]s and delegates array memory to an
/// [`ArrayService`]. A vector field is three sibling entries sharing a
/// name and level, one per [`Direction`].
///
/// # Collective discipline
///
/// The registry's bookkeeping must stay identical across all processes
/// of a distributed run: every `alloc`/`alias`/`erase`/`remake_level`
/// call must be issued collectively with identical arguments. Any
/// [`RegisterError`] is a programmer error and must be treated as fatal
/// by the driver; recovering locally would desynchronise process state.
///
/// # Thread safety
///
/// Mutating calls on a given name/level must be serialised by the
/// caller. Read-only lookups may run concurrently with each other but
/// not with a mutating call on the same entry.
pub struct FieldRegister {
    pub(crate) service: Arc<dyn ArrayService>,
    pub(crate) records: IndexMap<FieldKey, FieldRecord>,
}

impl FieldRegister {
    /// Create an empty register backed by the given array service.
    pub fn new(service: Arc<dyn ArrayService>) -> Self {
        Self {
            service,
            records: IndexMap::new(),
        }
    }

    /// Allocate and register a field, optionally assigning an initial
    /// value.
    ///
    /// Pass `dir: None` for a scalar field; a vector field is built by
    /// three calls with the same name and level, one per direction.
    /// `remake` opts the field into the default rebalance pass for its
    /// level; `redistribute_on_remake` makes rebalance transport old
    /// values into the new layout (fields recomputed from scratch every
    /// step opt out of both). When no initial value is given the
    /// contents are undefined.
    ///
    /// Fails with [`RegisterError::Duplicate`] if the key is occupied.
    #[allow(clippy::too_many_arguments)]
    pub fn alloc(
        &mut self,
        name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
        partition: &Partition,
        ncomp: u32,
        ghost: IntVec,
        initial: Option<f64>,
        remake: bool,
        redistribute_on_remake: bool,
    ) -> Result<&mut DistArray, RegisterError> {
        let key = FieldKey::new(name.field_name(), dir, level);
        if self.records.contains_key(&key) {
            return Err(RegisterError::Duplicate {
                key: key.qualified(),
            });
        }
        let mut array = self.service.allocate(partition, ncomp, ghost)?;
        if let Some(value) = initial {
            self.service.fill(&mut array, value);
        }
        let record = FieldRecord::owned(dir, level, remake, redistribute_on_remake, array);
        let record = self.records.entry(key).or_insert(record);
        Ok(record
            .array_mut()
            .expect("freshly inserted record is owning"))
    }

    /// Register a new name for an existing field's array.
    ///
    /// The alias owns no memory: it resolves to the owner's array by
    /// name on every lookup, so it stays valid when the owner is
    /// rebalanced. If an initial value is given it is written to the
    /// shared array and is observable through the owner's name too.
    ///
    /// Fails with [`RegisterError::InvalidAlias`] if no entry exists
    /// for (`owner_name`, `dir`, `level`), [`RegisterError::AliasChain`]
    /// if that entry is itself an alias, and
    /// [`RegisterError::Duplicate`] if the new key is occupied.
    pub fn alias(
        &mut self,
        new_name: impl FieldName,
        owner_name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
        initial: Option<f64>,
    ) -> Result<&mut DistArray, RegisterError> {
        let new_key = FieldKey::new(new_name.field_name(), dir, level);
        let owner_key = FieldKey::new(owner_name.field_name(), dir, level);
        if self.records.contains_key(&new_key) {
            return Err(RegisterError::Duplicate {
                key: new_key.qualified(),
            });
        }
        let owner = match self.records.get(&owner_key) {
            Some(record) => record,
            None => {
                return Err(RegisterError::InvalidAlias {
                    new_name: new_key.qualified(),
                    owner: owner_key.qualified(),
                })
            }
        };
        if owner.is_alias() {
            return Err(RegisterError::AliasChain {
                new_name: new_key.qualified(),
                owner: owner_key.qualified(),
            });
        }
        let record = FieldRecord::alias(dir, level, owner_key.name.clone(), owner.id);
        self.records.insert(new_key, record);

        let array = self
            .records
            .get_mut(&owner_key)
            .and_then(FieldRecord::array_mut)
            .expect("owner verified above");
        if let Some(value) = initial {
            self.service.fill(array, value);
        }
        Ok(array)
    }

    /// Whether an entry (owner or alias) exists for the key.
    ///
    /// Never fails, and does not resolve aliases: a dangling alias
    /// still reports `true` here while [`FieldRegister::get`] fails.
    pub fn has(&self, name: impl FieldName, dir: Option<Direction>, level: u32) -> bool {
        self.records
            .contains_key(&FieldKey::new(name.field_name(), dir, level))
    }

    /// Whether all three direction components of a vector field exist
    /// at a level.
    pub fn has_vector(&self, name: impl FieldName, level: u32) -> bool {
        let name = name.field_name();
        Direction::ALL
            .iter()
            .all(|&dir| self.records.contains_key(&FieldKey::vector(name.clone(), dir, level)))
    }

    /// The array registered for a key.
    ///
    /// Resolves an alias through its owner (one hop; chains are never
    /// stored). Fails with [`RegisterError::NotFound`] for an absent
    /// key or a dangling alias.
    pub fn get(
        &self,
        name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
    ) -> Result<&DistArray, RegisterError> {
        self.get_key(&FieldKey::new(name.field_name(), dir, level))
    }

    /// The array registered for a key, mutably.
    pub fn get_mut(
        &mut self,
        name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
    ) -> Result<&mut DistArray, RegisterError> {
        let key = FieldKey::new(name.field_name(), dir, level);
        let owner_key = self.owning_key(key)?;
        Ok(self
            .records
            .get_mut(&owner_key)
            .and_then(FieldRecord::array_mut)
            .expect("owning_key resolves to an owning record"))
    }

    /// The record stored for a key, without alias resolution.
    pub fn record(
        &self,
        name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
    ) -> Option<&FieldRecord> {
        self.records
            .get(&FieldKey::new(name.field_name(), dir, level))
    }

    /// A scalar field's array on every level `0..=finest_level`.
    ///
    /// With `skip_level_0` the slot at index 0 is `None`, for schemes
    /// that have no coarse-level analog; every other slot is `Some`.
    /// Fails with [`RegisterError::NotFound`] if any requested level is
    /// missing.
    pub fn get_mr_levels(
        &self,
        name: impl FieldName,
        finest_level: u32,
        skip_level_0: bool,
    ) -> Result<Vec<Option<&DistArray>>, RegisterError> {
        let name = name.field_name();
        let mut levels = Vec::with_capacity(finest_level as usize + 1);
        for level in 0..=finest_level {
            if level == 0 && skip_level_0 {
                levels.push(None);
            } else {
                levels.push(Some(self.get_key(&FieldKey::scalar(name.clone(), level))?));
            }
        }
        Ok(levels)
    }

    /// All three direction components of a vector field at one level,
    /// in component-index order.
    ///
    /// Fails with [`RegisterError::NotFound`] unless all three are
    /// present.
    pub fn get_alldirs(
        &self,
        name: impl FieldName,
        level: u32,
    ) -> Result<[&DistArray; 3], RegisterError> {
        let name = name.field_name();
        Ok([
            self.get_key(&FieldKey::vector(name.clone(), Direction::X, level))?,
            self.get_key(&FieldKey::vector(name.clone(), Direction::Y, level))?,
            self.get_key(&FieldKey::vector(name, Direction::Z, level))?,
        ])
    }

    /// A vector field's components on every level `0..=finest_level`.
    ///
    /// Outer index: level (with the same `skip_level_0` placeholder as
    /// [`FieldRegister::get_mr_levels`]). Inner index: direction.
    pub fn get_mr_levels_alldirs(
        &self,
        name: impl FieldName,
        finest_level: u32,
        skip_level_0: bool,
    ) -> Result<Vec<Option<[&DistArray; 3]>>, RegisterError> {
        let name = name.field_name();
        let mut levels = Vec::with_capacity(finest_level as usize + 1);
        for level in 0..=finest_level {
            if level == 0 && skip_level_0 {
                levels.push(None);
            } else {
                levels.push(Some(self.get_alldirs(name.clone(), level)?));
            }
        }
        Ok(levels)
    }

    /// Deallocate and remove exactly the matching entry, owner or alias.
    ///
    /// Erasing an owner while aliases to it still exist leaves those
    /// aliases dangling: they keep reporting `true` from
    /// [`FieldRegister::has`] but fail resolution. This is a caller
    /// error and is not detected.
    pub fn erase(
        &mut self,
        name: impl FieldName,
        dir: Option<Direction>,
        level: u32,
    ) -> Result<(), RegisterError> {
        let key = FieldKey::new(name.field_name(), dir, level);
        match self.records.shift_remove(&key) {
            Some(record) => {
                if let Storage::Owned(array) = record.storage {
                    self.service.release(array);
                }
                Ok(())
            }
            None => Err(RegisterError::NotFound {
                key: key.qualified(),
            }),
        }
    }

    /// Erase every entry, owner or alias, at the given level.
    pub fn clear_level(&mut self, level: u32) {
        let keys: Vec<FieldKey> = self
            .records
            .keys()
            .filter(|key| key.level == level)
            .cloned()
            .collect();
        for key in keys {
            if let Some(record) = self.records.shift_remove(&key) {
                if let Storage::Owned(array) = record.storage {
                    self.service.release(array);
                }
            }
        }
    }

    /// The fully-qualified key strings of all entries, in registration
    /// order.
    pub fn list(&self) -> Vec<String> {
        self.records.keys().map(FieldKey::qualified).collect()
    }

    /// Number of entries (owners and aliases).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a key to the key of its owning record.
    ///
    /// Follows an alias's name reference once, checking the pinned
    /// owner identity: an alias whose owner was erased stays dangling
    /// even if a new owner has since been allocated under the same
    /// name.
    fn owning_key(&self, key: FieldKey) -> Result<FieldKey, RegisterError> {
        let record = match self.records.get(&key) {
            Some(record) => record,
            None => {
                return Err(RegisterError::NotFound {
                    key: key.qualified(),
                })
            }
        };
        match &record.storage {
            Storage::Owned(_) => Ok(key),
            Storage::Alias { owner, owner_id } => {
                let owner_key = FieldKey::new(owner.clone(), key.dir, key.level);
                match self.records.get(&owner_key) {
                    Some(rec) if !rec.is_alias() && rec.id == *owner_id => Ok(owner_key),
                    _ => Err(RegisterError::NotFound {
                        key: key.qualified(),
                    }),
                }
            }
        }
    }

    fn get_key(&self, key: &FieldKey) -> Result<&DistArray, RegisterError> {
        let owner_key = self.owning_key(key.clone())?;
        Ok(self
            .records
            .get(&owner_key)
            .and_then(FieldRecord::array)
            .expect("owning_key resolves to an owning record"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plasm_mesh::{IndexBox, LocalArrayService};

    fn register() -> FieldRegister {
        FieldRegister::new(Arc::new(LocalArrayService::new()))
    }

    fn partition() -> Partition {
        Partition::single(IndexBox::new([0, 0, 0], [7, 7, 0]).unwrap(), 0)
    }

    #[test]
    fn alloc_then_get_returns_same_array() {
        let mut reg = register();
        let id = reg
            .alloc("rho", None, 0, &partition(), 1, [1, 1, 0], Some(0.0), true, true)
            .unwrap()
            .id();
        assert_eq!(reg.get("rho", None, 0).unwrap().id(), id);
        assert!(reg.has("rho", None, 0));
    }

    #[test]
    fn duplicate_alloc_fails() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        let err = reg
            .alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap_err();
        assert_eq!(
            err,
            RegisterError::Duplicate {
                key: "rho@0".to_string()
            }
        );
    }

    #[test]
    fn same_name_different_direction_or_level_is_allowed() {
        let mut reg = register();
        reg.alloc("E", Some(Direction::X), 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alloc("E", Some(Direction::Y), 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alloc("E", Some(Direction::X), 1, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert_eq!(reg.len(), 3);
    }

    #[test]
    fn initial_value_fills_array() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 2, [0, 0, 0], Some(1.5), true, true)
            .unwrap();
        let rho = reg.get("rho", None, 0).unwrap();
        assert_eq!(rho.value_at([3, 3, 0], 0), Some(1.5));
        assert_eq!(rho.value_at([3, 3, 0], 1), Some(1.5));
    }

    #[test]
    fn alias_resolves_to_owner_array() {
        let mut reg = register();
        let id = reg
            .alloc("rho", None, 0, &partition(), 1, [0, 0, 0], Some(0.0), true, true)
            .unwrap()
            .id();
        let alias_id = reg.alias("rho_old", "rho", None, 0, None).unwrap().id();
        assert_eq!(alias_id, id);
        assert_eq!(reg.get("rho_old", None, 0).unwrap().id(), id);
    }

    #[test]
    fn alias_initial_value_is_visible_through_owner() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], Some(0.0), true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, Some(2.0)).unwrap();
        assert_eq!(
            reg.get("rho", None, 0).unwrap().value_at([0, 0, 0], 0),
            Some(2.0)
        );
    }

    #[test]
    fn write_through_one_name_observable_through_other() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], Some(0.0), true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        *reg.get_mut("rho_old", None, 0)
            .unwrap()
            .value_mut([2, 2, 0], 0)
            .unwrap() = 7.0;
        assert_eq!(
            reg.get("rho", None, 0).unwrap().value_at([2, 2, 0], 0),
            Some(7.0)
        );
    }

    #[test]
    fn alias_of_missing_owner_fails() {
        let mut reg = register();
        assert!(matches!(
            reg.alias("rho_old", "rho", None, 0, None),
            Err(RegisterError::InvalidAlias { .. })
        ));
    }

    #[test]
    fn alias_of_alias_fails() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        assert!(matches!(
            reg.alias("rho_older", "rho_old", None, 0, None),
            Err(RegisterError::AliasChain { .. })
        ));
    }

    #[test]
    fn alias_direction_must_match_owner_entry() {
        let mut reg = register();
        reg.alloc("E", Some(Direction::X), 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        // No scalar entry "E" exists, so a scalar alias has no owner.
        assert!(matches!(
            reg.alias("E_old", "E", None, 0, None),
            Err(RegisterError::InvalidAlias { .. })
        ));
        reg.alias("E_old", "E", Some(Direction::X), 0, None).unwrap();
    }

    #[test]
    fn duplicate_alias_name_fails() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alloc("rho_old", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert!(matches!(
            reg.alias("rho_old", "rho", None, 0, None),
            Err(RegisterError::Duplicate { .. })
        ));
    }

    #[test]
    fn get_missing_fails_not_found() {
        let reg = register();
        assert_eq!(
            reg.get("rho", None, 0).unwrap_err(),
            RegisterError::NotFound {
                key: "rho@0".to_string()
            }
        );
        assert!(!reg.has("rho", None, 0));
    }

    #[test]
    fn erase_removes_entry() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.erase("rho", None, 0).unwrap();
        assert!(!reg.has("rho", None, 0));
        assert!(reg.list().is_empty());
        assert!(matches!(
            reg.erase("rho", None, 0),
            Err(RegisterError::NotFound { .. })
        ));
    }

    #[test]
    fn erased_owner_leaves_alias_dangling() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        reg.erase("rho", None, 0).unwrap();
        assert!(reg.has("rho_old", None, 0));
        assert!(matches!(
            reg.get("rho_old", None, 0),
            Err(RegisterError::NotFound { .. })
        ));
    }

    #[test]
    fn dangling_alias_does_not_rebind_to_new_owner() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        reg.erase("rho", None, 0).unwrap();
        // A fresh owner under the same name must not revive the alias;
        // re-aliasing has to be explicit.
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert!(matches!(
            reg.get("rho_old", None, 0),
            Err(RegisterError::NotFound { .. })
        ));
        reg.erase("rho_old", None, 0).unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        assert!(reg.get("rho_old", None, 0).is_ok());
    }

    #[test]
    fn has_vector_and_get_alldirs() {
        let mut reg = register();
        for dir in [Direction::X, Direction::Y] {
            reg.alloc("E", Some(dir), 0, &partition(), 1, [0, 0, 0], None, true, true)
                .unwrap();
        }
        assert!(!reg.has_vector("E", 0));
        assert!(matches!(
            reg.get_alldirs("E", 0),
            Err(RegisterError::NotFound { .. })
        ));

        reg.alloc("E", Some(Direction::Z), 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert!(reg.has_vector("E", 0));
        let [ex, ey, ez] = reg.get_alldirs("E", 0).unwrap();
        assert_eq!(ex.id(), reg.get("E", Some(Direction::X), 0).unwrap().id());
        assert_eq!(ey.id(), reg.get("E", Some(Direction::Y), 0).unwrap().id());
        assert_eq!(ez.id(), reg.get("E", Some(Direction::Z), 0).unwrap().id());
    }

    #[test]
    fn get_mr_levels_with_and_without_skip() {
        let mut reg = register();
        for level in 0..3 {
            reg.alloc("phi", None, level, &partition(), 1, [0, 0, 0], None, true, true)
                .unwrap();
        }
        let all = reg.get_mr_levels("phi", 2, false).unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(Option::is_some));

        let skipped = reg.get_mr_levels("phi", 2, true).unwrap();
        assert_eq!(skipped.len(), 3);
        assert!(skipped[0].is_none());
        for level in 1..3u32 {
            assert_eq!(
                skipped[level as usize].map(|a| a.id()),
                Some(reg.get("phi", None, level).unwrap().id())
            );
        }
    }

    #[test]
    fn get_mr_levels_missing_level_fails() {
        let mut reg = register();
        reg.alloc("phi", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert!(matches!(
            reg.get_mr_levels("phi", 1, false),
            Err(RegisterError::NotFound { .. })
        ));
    }

    #[test]
    fn get_mr_levels_alldirs_composes_both() {
        let mut reg = register();
        for level in 0..2 {
            for dir in Direction::ALL {
                reg.alloc("B", Some(dir), level, &partition(), 1, [0, 0, 0], None, true, true)
                    .unwrap();
            }
        }
        let levels = reg.get_mr_levels_alldirs("B", 1, true).unwrap();
        assert_eq!(levels.len(), 2);
        assert!(levels[0].is_none());
        let dirs = levels[1].unwrap();
        assert_eq!(dirs[2].id(), reg.get("B", Some(Direction::Z), 1).unwrap().id());
    }

    #[test]
    fn clear_level_erases_only_that_level() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alloc("rho", None, 1, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 1, None).unwrap();
        reg.clear_level(1);
        assert!(reg.has("rho", None, 0));
        assert!(!reg.has("rho", None, 1));
        assert!(!reg.has("rho_old", None, 1));
        assert_eq!(reg.list(), vec!["rho@0".to_string()]);
    }

    #[test]
    fn list_is_in_registration_order() {
        let mut reg = register();
        reg.alloc("rho", None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alloc("E", Some(Direction::X), 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        reg.alias("rho_old", "rho", None, 0, None).unwrap();
        assert_eq!(
            reg.list(),
            vec![
                "rho@0".to_string(),
                "E.0@0".to_string(),
                "rho_old@0".to_string()
            ]
        );
    }

    #[test]
    fn record_exposes_flags_without_resolution() {
        let mut reg = register();
        reg.alloc("scratch", None, 2, &partition(), 1, [0, 0, 0], None, false, false)
            .unwrap();
        reg.alias("scratch_view", "scratch", None, 2, None).unwrap();

        let rec = reg.record("scratch", None, 2).unwrap();
        assert_eq!(rec.level(), 2);
        assert_eq!(rec.dir(), None);
        assert!(!rec.remake());
        assert!(!rec.redistribute_on_remake());
        assert!(!rec.is_alias());

        let view = reg.record("scratch_view", None, 2).unwrap();
        assert!(view.is_alias());
        assert_eq!(view.owner_name(), Some("scratch"));
        assert!(reg.record("missing", None, 2).is_none());
    }

    #[test]
    fn enum_identifiers_work_at_the_boundary() {
        enum Charge {
            Rho,
        }
        impl FieldName for Charge {
            fn field_name(&self) -> String {
                "rho".to_string()
            }
        }
        let mut reg = register();
        reg.alloc(Charge::Rho, None, 0, &partition(), 1, [0, 0, 0], None, true, true)
            .unwrap();
        assert!(reg.has("rho", None, 0));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn alloc_get_list_agree(
                name in "[a-zA-Z][a-zA-Z0-9_]{0,12}",
                dir_index in prop::option::of(0usize..3),
                level in 0u32..4,
                ncomp in 1u32..4,
            ) {
                let dir = dir_index.and_then(Direction::from_index);
                let key = FieldKey::new(name.clone(), dir, level);
                let mut reg = register();
                let id = reg
                    .alloc(&name, dir, level, &partition(), ncomp, [1, 1, 0], None, true, true)
                    .unwrap()
                    .id();
                prop_assert!(reg.has(&name, dir, level));
                prop_assert_eq!(reg.get(&name, dir, level).unwrap().id(), id);
                prop_assert!(reg.list().contains(&key.qualified()));
                prop_assert_eq!(
                    reg.alloc(&name, dir, level, &partition(), ncomp, [1, 1, 0], None, true, true)
                        .unwrap_err(),
                    RegisterError::Duplicate { key: key.qualified() }
                );
            }

            #[test]
            fn alias_shares_owner_identity(
                owner in "[a-z][a-z0-9_]{0,8}",
                suffix in "[a-z]{1,4}",
                level in 0u32..4,
            ) {
                let alias = format!("{owner}_{suffix}");
                let mut reg = register();
                let id = reg
                    .alloc(&owner, None, level, &partition(), 1, [0, 0, 0], Some(0.0), true, true)
                    .unwrap()
                    .id();
                let alias_id = reg.alias(&alias, &owner, None, level, None).unwrap().id();
                prop_assert_eq!(alias_id, id);
                prop_assert_eq!(reg.get(&alias, None, level).unwrap().id(), id);
            }
        }
    }
}
