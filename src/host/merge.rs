//! Merging discovered entries into the caller's config.
//!
//! Pure functions: the caller's config is read, never mutated, and a fresh
//! table is returned.

use super::{ConfigPatch, EntryTable, PatchBuild, PatchRollupOptions, UserConfig};

/// Overlay `generated` on top of `existing`.
///
/// Keys only in `existing` are kept as they are. Keys in both take the
/// generated value: a discovered file is authoritative for the key it
/// claims. An absent table counts as empty.
pub fn merge_entries(existing: Option<&EntryTable>, generated: EntryTable) -> EntryTable {
    let mut merged = existing.cloned().unwrap_or_default();
    merged.extend(generated);
    merged
}

/// Build the patch for the host: the caller's rollup options with `input`
/// replaced by the merged table.
pub fn merge_config(user_config: &UserConfig, generated: EntryTable) -> ConfigPatch {
    let rest = user_config
        .rollup_options()
        .map(|options| options.rest.clone())
        .unwrap_or_default();

    ConfigPatch {
        build: PatchBuild {
            rollup_options: PatchRollupOptions {
                input: merge_entries(user_config.entries(), generated),
                rest,
            },
        },
    }
}
