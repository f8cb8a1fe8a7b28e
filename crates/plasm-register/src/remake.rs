//! The rebalance pass: re-partitioning every owned field at a level.

use std::mem;

use plasm_core::FieldKey;
use plasm_mesh::Partition;

use crate::error::RegisterError;
use crate::register::FieldRegister;

impl FieldRegister {
    /// Re-partition every owned field at a level onto a new partition.
    ///
    /// For each owning entry at `level` whose `remake` flag is set, a
    /// replacement array is allocated over `new_partition` with the
    /// entry's existing component count and ghost margin. If the
    /// entry's `redistribute_on_remake` flag is set, existing values
    /// are transported into the new layout (cells not covered by the
    /// old partition are left undefined, to be refilled by the physics
    /// module); otherwise the new contents are undefined. The old array
    /// is then released.
    ///
    /// Entries with `remake` unset keep their old partition — a
    /// deliberate opt-out for fields recomputed from scratch every
    /// step. Aliases are never touched; they resolve to the relocated
    /// owner on their next lookup.
    ///
    /// The swap is atomic per entry but not across the level: on error,
    /// entries already processed stay rebalanced and the error
    /// propagates. Per the collective contract, the driver must treat
    /// this as fatal rather than continue with a partially-rebalanced
    /// level.
    pub fn remake_level(
        &mut self,
        level: u32,
        new_partition: &Partition,
    ) -> Result<(), RegisterError> {
        let keys: Vec<FieldKey> = self
            .records
            .iter()
            .filter(|(key, record)| {
                key.level == level && record.remake() && !record.is_alias()
            })
            .map(|(key, _)| key.clone())
            .collect();

        for key in keys {
            let record = self
                .records
                .get_mut(&key)
                .expect("key collected from the map above");
            let redistribute = record.redistribute_on_remake();
            let old = record
                .array_mut()
                .expect("alias records were filtered out");
            let mut fresh = self
                .service
                .allocate(new_partition, old.ncomp(), old.ghost())?;
            if redistribute {
                self.service.transport(old, &mut fresh)?;
            }
            let old = mem::replace(old, fresh);
            self.service.release(old);
        }
        Ok(())
    }
}
