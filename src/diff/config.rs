//! Top-level configuration diffing: named scalar settings plus the two
//! override mapping tables.

use std::collections::BTreeMap;

use crate::diff::result::{ConfigDiff, MappingChange, MappingDiff, MappingEntry, SettingDifference};
use crate::model::Snapshot;

/// Compare the non-group configuration of two snapshots.
///
/// Scalar settings come from the declared field set of
/// [`crate::model::ServerSettings::named_fields`] and are compared by strict
/// inequality. Each mapping table gets a three-way key diff with
/// case-sensitive keys. Group lists are not consulted here.
pub fn diff_config(source: &Snapshot, target: &Snapshot) -> ConfigDiff {
    let settings_differences = source
        .settings
        .named_fields()
        .into_iter()
        .zip(target.settings.named_fields())
        .filter(|((_, src), (_, tgt))| src != tgt)
        .map(|((field, src), (_, tgt))| SettingDifference {
            field: field.to_string(),
            source_value: src,
            target_value: tgt,
        })
        .collect();

    ConfigDiff {
        settings_differences,
        local_mapping: diff_mapping(
            source.local_mapping.as_ref(),
            target.local_mapping.as_ref(),
        ),
        network_mapping: diff_mapping(
            source.network_mapping.as_ref(),
            target.network_mapping.as_ref(),
        ),
    }
}

/// Three-way key diff of one mapping table. Absent tables diff as empty.
fn diff_mapping(
    source: Option<&BTreeMap<String, String>>,
    target: Option<&BTreeMap<String, String>>,
) -> MappingDiff {
    static EMPTY: BTreeMap<String, String> = BTreeMap::new();
    let source = source.unwrap_or(&EMPTY);
    let target = target.unwrap_or(&EMPTY);

    let mut diff = MappingDiff::default();
    for (key, src_value) in source {
        match target.get(key) {
            None => diff.added.push(MappingEntry {
                key: key.clone(),
                value: src_value.clone(),
            }),
            Some(tgt_value) if tgt_value != src_value => diff.changed.push(MappingChange {
                key: key.clone(),
                source_value: src_value.clone(),
                target_value: tgt_value.clone(),
            }),
            Some(_) => {}
        }
    }
    for (key, tgt_value) in target {
        if !source.contains_key(key) {
            diff.removed.push(MappingEntry {
                key: key.clone(),
                value: tgt_value.clone(),
            });
        }
    }
    diff
}
