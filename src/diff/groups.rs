//! Group-level diff aggregation across all list categories and settings.

use std::collections::{BTreeMap, HashMap};

use serde_json::json;

use crate::diff::fields::diff_lists_with_threshold;
use crate::diff::result::{DomainDiff, GroupDiff, GroupStatus, SettingDifference};
use crate::distance::DEFAULT_SIMILARITY_THRESHOLD;
use crate::model::{Group, ListCategory};
use crate::sets::equal_as_sets;

/// Configures group diff behavior.
#[derive(Debug, Clone)]
pub struct DiffOptions {
    /// Similarity threshold handed to the fuzzy list matcher.
    pub similarity_threshold: f64,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
        }
    }
}

/// Diff two group collections with default options.
pub fn diff_groups(source: &[Group], target: &[Group]) -> Vec<GroupDiff> {
    diff_groups_with_options(source, target, &DiffOptions::default())
}

/// Diff two group collections, one [`GroupDiff`] per name on either side.
///
/// Groups are matched across snapshots by exact name. Output is sorted by
/// status (different, only-source, only-target, in-sync), stable within a
/// status by first-seen union order.
pub fn diff_groups_with_options(
    source: &[Group],
    target: &[Group],
    opts: &DiffOptions,
) -> Vec<GroupDiff> {
    let target_by_name: HashMap<&str, &Group> =
        target.iter().map(|g| (g.name.as_str(), g)).collect();
    let source_by_name: HashMap<&str, &Group> =
        source.iter().map(|g| (g.name.as_str(), g)).collect();

    let mut names: Vec<&str> = Vec::new();
    for group in source.iter().chain(target.iter()) {
        if !names.contains(&group.name.as_str()) {
            names.push(&group.name);
        }
    }

    let mut out: Vec<GroupDiff> = names
        .into_iter()
        .map(|name| {
            match (source_by_name.get(name), target_by_name.get(name)) {
                (Some(src), Some(tgt)) => diff_group_pair(src, tgt, opts),
                (Some(src), None) => one_sided(src, GroupStatus::OnlySource),
                (None, Some(tgt)) => one_sided(tgt, GroupStatus::OnlyTarget),
                // Unreachable: every collected name came from one of the sides.
                (None, None) => unreachable!("group name from neither side"),
            }
        })
        .collect();

    out.sort_by_key(|diff| diff.status.sort_rank());
    out
}

fn diff_group_pair(source: &Group, target: &Group, opts: &DiffOptions) -> GroupDiff {
    let mut detailed: BTreeMap<ListCategory, DomainDiff> = BTreeMap::new();
    let mut any_list_diff = false;

    for category in ListCategory::ALL {
        // Absent lists diff as empty; the absence-vs-empty distinction
        // belongs to set comparison, not to list diffing.
        let src_values = source.category_values(category).unwrap_or_default();
        let tgt_values = target.category_values(category).unwrap_or_default();
        let diff = diff_lists_with_threshold(&src_values, &tgt_values, opts.similarity_threshold);
        any_list_diff |= !diff.is_empty();
        detailed.insert(category, diff);
    }

    let settings = settings_differences(source, target);

    let status = if any_list_diff || !settings.is_empty() {
        GroupStatus::Different
    } else {
        GroupStatus::InSync
    };

    GroupDiff {
        name: source.name.clone(),
        status,
        detailed_diff: (status == GroupStatus::Different).then_some(detailed),
        settings_differences: (status == GroupStatus::Different).then_some(settings),
        source_sizes: Some(source.category_sizes()),
        target_sizes: Some(target.category_sizes()),
    }
}

fn one_sided(group: &Group, status: GroupStatus) -> GroupDiff {
    let sizes = Some(group.category_sizes());
    let (source_sizes, target_sizes) = match status {
        GroupStatus::OnlySource => (sizes, None),
        _ => (None, sizes),
    };
    GroupDiff {
        name: group.name.clone(),
        status,
        detailed_diff: None,
        settings_differences: None,
        source_sizes,
        target_sizes,
    }
}

/// Scalar group settings compared by exact equality; the address list ignores
/// order but keeps the absence-vs-empty distinction.
fn settings_differences(source: &Group, target: &Group) -> Vec<SettingDifference> {
    let mut out = Vec::new();

    if source.enable_blocking != target.enable_blocking {
        out.push(SettingDifference {
            field: "enableBlocking".to_string(),
            source_value: json!(source.enable_blocking),
            target_value: json!(target.enable_blocking),
        });
    }
    if source.block_as_nx_domain != target.block_as_nx_domain {
        out.push(SettingDifference {
            field: "blockAsNxDomain".to_string(),
            source_value: json!(source.block_as_nx_domain),
            target_value: json!(target.block_as_nx_domain),
        });
    }
    if source.allow_txt_blocking_report != target.allow_txt_blocking_report {
        out.push(SettingDifference {
            field: "allowTxtBlockingReport".to_string(),
            source_value: json!(source.allow_txt_blocking_report),
            target_value: json!(target.allow_txt_blocking_report),
        });
    }
    if !equal_as_sets(
        source.blocking_addresses.as_deref(),
        target.blocking_addresses.as_deref(),
    ) {
        out.push(SettingDifference {
            field: "blockingAddresses".to_string(),
            source_value: json!(source.blocking_addresses),
            target_value: json!(target.blocking_addresses),
        });
    }
    out
}
