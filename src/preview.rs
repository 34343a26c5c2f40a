//! Directional sync preview.
//!
//! The preview is advisory: it is computed before any apply step and handed
//! to an external caller who decides whether to proceed. The deletion list is
//! the safety-critical part — every group a sync would destroy must be
//! enumerable here, before anything destructive runs.

use serde::Serialize;

use crate::diff::result::{ConfigDiff, GroupDiff, GroupStatus};

/// Which side wins a sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncDirection {
    /// Push the source snapshot onto the target node.
    SourceToTarget,
    /// Push the target snapshot onto the source node.
    TargetToSource,
}

impl SyncDirection {
    pub fn reversed(self) -> Self {
        match self {
            SyncDirection::SourceToTarget => SyncDirection::TargetToSource,
            SyncDirection::TargetToSource => SyncDirection::SourceToTarget,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyncDirection::SourceToTarget => "source-to-target",
            SyncDirection::TargetToSource => "target-to-source",
        }
    }
}

/// Aggregate counts for mapping-table changes a sync would perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct MappingChangeCounts {
    pub added: usize,
    pub removed: usize,
    pub changed: usize,
}

/// What a sync in one direction would do, in aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncPreview {
    pub direction: SyncDirection,
    pub total_additions: usize,
    pub total_removals: usize,
    /// Names of every group the sync would touch, in report order.
    pub affected_group_names: Vec<String>,
    /// Groups that exist only on the losing side and would be destroyed.
    pub groups_to_be_deleted: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_changes: Option<MappingChangeCounts>,
}

/// Compute the sync preview for one direction.
///
/// For source-to-target, a group's detailed `added` entries are additions and
/// `removed` entries are removals; only-source groups contribute their full
/// entry count as additions; only-target groups contribute theirs as removals
/// and land on the deletion list. Reversing the direction swaps every one of
/// those roles, including added/removed in the mapping-change counts. In-sync
/// groups never contribute.
pub fn preview(
    group_diffs: &[GroupDiff],
    config_diff: Option<&ConfigDiff>,
    direction: SyncDirection,
) -> SyncPreview {
    let reversed = direction == SyncDirection::TargetToSource;

    let mut total_additions = 0;
    let mut total_removals = 0;
    let mut affected_group_names = Vec::new();
    let mut groups_to_be_deleted = Vec::new();

    for diff in group_diffs {
        match diff.status {
            GroupStatus::InSync => continue,
            GroupStatus::Different => {
                if reversed {
                    total_additions += diff.removed_count();
                    total_removals += diff.added_count();
                } else {
                    total_additions += diff.added_count();
                    total_removals += diff.removed_count();
                }
            }
            GroupStatus::OnlySource => {
                if reversed {
                    total_removals += diff.source_total();
                    groups_to_be_deleted.push(diff.name.clone());
                } else {
                    total_additions += diff.source_total();
                }
            }
            GroupStatus::OnlyTarget => {
                if reversed {
                    total_additions += diff.target_total();
                } else {
                    total_removals += diff.target_total();
                    groups_to_be_deleted.push(diff.name.clone());
                }
            }
        }
        affected_group_names.push(diff.name.clone());
    }

    let config_changes = config_diff.map(|cd| {
        let raw = MappingChangeCounts {
            added: cd.local_mapping.added.len() + cd.network_mapping.added.len(),
            removed: cd.local_mapping.removed.len() + cd.network_mapping.removed.len(),
            changed: cd.local_mapping.changed.len() + cd.network_mapping.changed.len(),
        };
        if reversed {
            MappingChangeCounts {
                added: raw.removed,
                removed: raw.added,
                changed: raw.changed,
            }
        } else {
            raw
        }
    });

    SyncPreview {
        direction,
        total_additions,
        total_removals,
        affected_group_names,
        groups_to_be_deleted,
        config_changes,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::diff::{diff_config, diff_groups};
    use crate::model::{Group, ServerSettings, Snapshot};

    use super::{preview, SyncDirection};

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn snapshot(node_id: &str, groups: Vec<Group>) -> Snapshot {
        Snapshot {
            node_id: node_id.to_string(),
            groups,
            settings: ServerSettings::default(),
            local_mapping: None,
            network_mapping: None,
        }
    }

    #[test]
    fn only_source_group_adds_forward_and_deletes_backward() {
        let mut only_here = Group::new("iot");
        only_here.blocked = Some(strings(&[
            "cam1.example.com",
            "cam2.example.com",
            "cam3.example.com",
            "cam4.example.com",
            "cam5.example.com",
        ]));

        let diffs = diff_groups(&[only_here], &[]);

        let forward = preview(&diffs, None, SyncDirection::SourceToTarget);
        assert_eq!(forward.total_additions, 5);
        assert_eq!(forward.total_removals, 0);
        assert!(forward.groups_to_be_deleted.is_empty());
        assert_eq!(forward.affected_group_names, strings(&["iot"]));

        let backward = preview(&diffs, None, SyncDirection::TargetToSource);
        assert_eq!(backward.total_additions, 0);
        assert_eq!(backward.total_removals, 5);
        assert_eq!(backward.groups_to_be_deleted, strings(&["iot"]));
    }

    #[test]
    fn deletion_list_inverts_with_direction() {
        let only_src = Group::new("src-only");
        let only_tgt = Group::new("tgt-only");
        let diffs = diff_groups(&[only_src], &[only_tgt]);

        let forward = preview(&diffs, None, SyncDirection::SourceToTarget);
        assert_eq!(forward.groups_to_be_deleted, strings(&["tgt-only"]));

        let backward = preview(&diffs, None, SyncDirection::TargetToSource);
        assert_eq!(backward.groups_to_be_deleted, strings(&["src-only"]));
    }

    #[test]
    fn different_group_counts_swap_under_reversal() {
        let mut src = Group::new("lan");
        src.blocked = Some(strings(&["a.invalid", "b.invalid"]));
        let mut tgt = Group::new("lan");
        tgt.blocked = Some(strings(&["zz-different.example.org"]));

        let diffs = diff_groups(&[src], &[tgt]);
        let forward = preview(&diffs, None, SyncDirection::SourceToTarget);
        let backward = preview(&diffs, None, SyncDirection::TargetToSource);

        assert_eq!(forward.total_additions, backward.total_removals);
        assert_eq!(forward.total_removals, backward.total_additions);
        assert_eq!(
            forward.affected_group_names,
            backward.affected_group_names
        );
    }

    #[test]
    fn in_sync_groups_never_contribute() {
        let a = Group::new("idle");
        let b = Group::new("idle");
        let diffs = diff_groups(&[a], &[b]);

        let result = preview(&diffs, None, SyncDirection::SourceToTarget);
        assert_eq!(result.total_additions, 0);
        assert_eq!(result.total_removals, 0);
        assert!(result.affected_group_names.is_empty());
        assert!(result.groups_to_be_deleted.is_empty());
    }

    #[test]
    fn mapping_counts_fold_in_and_swap_under_reversal() {
        let mut a = snapshot("node-a", Vec::new());
        a.local_mapping = Some(
            [
                ("a".to_string(), "1".to_string()),
                ("b".to_string(), "2".to_string()),
                ("d".to_string(), "4".to_string()),
            ]
            .into_iter()
            .collect(),
        );
        let mut b = snapshot("node-b", Vec::new());
        b.local_mapping = Some(
            [("b".to_string(), "9".to_string()), ("c".to_string(), "3".to_string())]
                .into_iter()
                .collect(),
        );

        let config = diff_config(&a, &b);
        let forward = preview(&[], Some(&config), SyncDirection::SourceToTarget);
        let counts = forward.config_changes.expect("counts");
        assert_eq!((counts.added, counts.removed, counts.changed), (2, 1, 1));

        let backward = preview(&[], Some(&config), SyncDirection::TargetToSource);
        let counts = backward.config_changes.expect("counts");
        assert_eq!((counts.added, counts.removed, counts.changed), (1, 2, 1));
    }

    #[test]
    fn preview_without_config_diff_has_no_mapping_counts() {
        let result = preview(&[], None, SyncDirection::SourceToTarget);
        assert!(result.config_changes.is_none());
    }
}
