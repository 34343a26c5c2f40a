use std::path::PathBuf;

use fleet_diff_core::{
    diff_config, diff_groups, format_preview_text, parse_snapshot_file, preview, GroupStatus,
    SyncDirection,
};
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn forward_preview_counts_additions_removals_and_deletions() {
    let source = parse_snapshot_file(&fixture("node_a.json")).expect("source parse");
    let target = parse_snapshot_file(&fixture("node_b.json")).expect("target parse");

    let diffs = diff_groups(&source.groups, &target.groups);
    let config = diff_config(&source, &target);
    let result = preview(&diffs, Some(&config), SyncDirection::SourceToTarget);

    // One canonical URL added in "default" plus three entries from the
    // source-only "iot" group; "legacy" exists only on the target.
    assert_eq!(result.total_additions, 4);
    assert_eq!(result.total_removals, 1);
    assert_eq!(result.groups_to_be_deleted, vec!["legacy".to_string()]);
    assert_eq!(
        result.affected_group_names,
        vec!["default".to_string(), "iot".to_string(), "legacy".to_string()]
    );

    let counts = result.config_changes.expect("config counts");
    assert_eq!((counts.added, counts.removed, counts.changed), (0, 1, 1));
}

#[test]
fn reversing_direction_inverts_every_role() {
    let source = parse_snapshot_file(&fixture("node_a.json")).expect("source parse");
    let target = parse_snapshot_file(&fixture("node_b.json")).expect("target parse");

    let diffs = diff_groups(&source.groups, &target.groups);
    let config = diff_config(&source, &target);

    let forward = preview(&diffs, Some(&config), SyncDirection::SourceToTarget);
    let backward = preview(&diffs, Some(&config), SyncDirection::TargetToSource);

    assert_eq!(backward.direction, forward.direction.reversed());
    assert_eq!(backward.total_additions, forward.total_removals);
    assert_eq!(backward.total_removals, forward.total_additions);
    assert_eq!(backward.groups_to_be_deleted, vec!["iot".to_string()]);
    assert_eq!(backward.affected_group_names, forward.affected_group_names);

    let fwd = forward.config_changes.expect("forward counts");
    let bwd = backward.config_changes.expect("backward counts");
    assert_eq!(bwd.added, fwd.removed);
    assert_eq!(bwd.removed, fwd.added);
    assert_eq!(bwd.changed, fwd.changed);
}

#[test]
fn deletion_lists_match_one_sided_statuses_exactly() {
    let source = parse_snapshot_file(&fixture("node_a.json")).expect("source parse");
    let target = parse_snapshot_file(&fixture("node_b.json")).expect("target parse");

    let diffs = diff_groups(&source.groups, &target.groups);

    let only_target: Vec<String> = diffs
        .iter()
        .filter(|d| d.status == GroupStatus::OnlyTarget)
        .map(|d| d.name.clone())
        .collect();
    let only_source: Vec<String> = diffs
        .iter()
        .filter(|d| d.status == GroupStatus::OnlySource)
        .map(|d| d.name.clone())
        .collect();

    let forward = preview(&diffs, None, SyncDirection::SourceToTarget);
    let backward = preview(&diffs, None, SyncDirection::TargetToSource);

    assert_eq!(forward.groups_to_be_deleted, only_target);
    assert_eq!(backward.groups_to_be_deleted, only_source);
}

#[test]
fn preview_text_enumerates_deletions_before_any_apply() {
    let source = parse_snapshot_file(&fixture("node_a.json")).expect("source parse");
    let target = parse_snapshot_file(&fixture("node_b.json")).expect("target parse");

    let diffs = diff_groups(&source.groups, &target.groups);
    let text = format_preview_text(&preview(&diffs, None, SyncDirection::SourceToTarget));

    assert!(text.contains("direction: source-to-target"));
    assert!(text.contains("WILL DELETE groups: legacy"));
}
