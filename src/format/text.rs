use crate::diff::result::{ConfigDiff, GroupDiff, GroupStatus};
use crate::preview::SyncPreview;

/// Format group diffs as plain text.
pub fn format_text(diffs: &[GroupDiff]) -> String {
    let mut lines = Vec::with_capacity(diffs.len());
    for diff in diffs {
        match diff.status {
            GroupStatus::InSync => lines.push(format!("= {}", diff.name)),
            GroupStatus::OnlySource => lines.push(format!("+ {} (only on source)", diff.name)),
            GroupStatus::OnlyTarget => lines.push(format!("- {} (only on target)", diff.name)),
            GroupStatus::Different => {
                lines.push(format!("~ {}", diff.name));
                if let Some(detail) = &diff.detailed_diff {
                    for (category, domain_diff) in detail {
                        if domain_diff.is_empty() {
                            continue;
                        }
                        lines.push(format!("  [{category}]"));
                        for value in &domain_diff.added {
                            lines.push(format!("    + {value}"));
                        }
                        for value in &domain_diff.removed {
                            lines.push(format!("    - {value}"));
                        }
                        for pair in &domain_diff.modified {
                            lines.push(format!("    ~ {} -> {}", pair.old, pair.new));
                        }
                    }
                }
                if let Some(settings) = &diff.settings_differences {
                    for setting in settings {
                        lines.push(format!(
                            "  [{}] source={} target={}",
                            setting.field, setting.source_value, setting.target_value
                        ));
                    }
                }
            }
        }
    }
    lines.join("\n")
}

/// Format a simple summary of group diff counts.
pub fn format_summary(diffs: &[GroupDiff]) -> String {
    let mut different = 0;
    let mut only_source = 0;
    let mut only_target = 0;
    let mut in_sync = 0;

    for diff in diffs {
        match diff.status {
            GroupStatus::Different => different += 1,
            GroupStatus::OnlySource => only_source += 1,
            GroupStatus::OnlyTarget => only_target += 1,
            GroupStatus::InSync => in_sync += 1,
        }
    }

    format!(
        "different={different} only_source={only_source} only_target={only_target} in_sync={in_sync}"
    )
}

/// Format a config diff as plain text.
pub fn format_config_text(diff: &ConfigDiff) -> String {
    let mut lines = Vec::new();
    for setting in &diff.settings_differences {
        lines.push(format!(
            "~ {} source={} target={}",
            setting.field, setting.source_value, setting.target_value
        ));
    }
    for (label, mapping) in [
        ("localMapping", &diff.local_mapping),
        ("networkMapping", &diff.network_mapping),
    ] {
        for entry in &mapping.added {
            lines.push(format!("+ {label}.{} = {}", entry.key, entry.value));
        }
        for entry in &mapping.removed {
            lines.push(format!("- {label}.{} = {}", entry.key, entry.value));
        }
        for change in &mapping.changed {
            lines.push(format!(
                "~ {label}.{} {} -> {}",
                change.key, change.target_value, change.source_value
            ));
        }
    }
    lines.join("\n")
}

/// Format a sync preview as plain text, deletions last and loudest.
pub fn format_preview_text(preview: &SyncPreview) -> String {
    let mut lines = vec![
        format!("direction: {}", preview.direction.as_str()),
        format!("additions: {}", preview.total_additions),
        format!("removals:  {}", preview.total_removals),
    ];
    if !preview.affected_group_names.is_empty() {
        lines.push(format!(
            "affected groups: {}",
            preview.affected_group_names.join(", ")
        ));
    }
    if let Some(counts) = &preview.config_changes {
        lines.push(format!(
            "config changes: added={} removed={} changed={}",
            counts.added, counts.removed, counts.changed
        ));
    }
    if !preview.groups_to_be_deleted.is_empty() {
        lines.push(format!(
            "WILL DELETE groups: {}",
            preview.groups_to_be_deleted.join(", ")
        ));
    }
    lines.join("\n")
}
