use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::model::ListCategory;

/// Result of diffing one list category between two groups.
///
/// The partition is exact: every source value is either an exact match
/// (dropped), an `added` entry, or the `new` side of one `modified` pair;
/// every target value is an exact match, a `removed` entry, or the `old` side
/// of one `modified` pair. No value appears twice.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDiff {
    /// In source, absent from target, no near match found.
    pub added: Vec<String>,
    /// In target, absent from source, never consumed by a near match.
    pub removed: Vec<String>,
    /// Paired near matches, in source encounter order.
    pub modified: Vec<ModifiedEntry>,
}

impl DomainDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// One fuzzy-matched pair: the target-side value and its source-side edit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModifiedEntry {
    pub old: String,
    pub new: String,
}

/// Group-level comparison outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupStatus {
    Different,
    OnlySource,
    OnlyTarget,
    InSync,
}

impl GroupStatus {
    /// Report ordering: different first, in-sync last.
    pub(crate) fn sort_rank(self) -> u8 {
        match self {
            GroupStatus::Different => 0,
            GroupStatus::OnlySource => 1,
            GroupStatus::OnlyTarget => 2,
            GroupStatus::InSync => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupStatus::Different => "different",
            GroupStatus::OnlySource => "only-source",
            GroupStatus::OnlyTarget => "only-target",
            GroupStatus::InSync => "in-sync",
        }
    }
}

/// One scalar setting that differs between the two sides.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingDifference {
    pub field: String,
    pub source_value: Value,
    pub target_value: Value,
}

/// Full comparison result for one group name.
///
/// `detailed_diff` and `settings_differences` are present only when the
/// status is [`GroupStatus::Different`]; size summaries are filled from
/// whichever sides exist.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDiff {
    pub name: String,
    pub status: GroupStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_diff: Option<BTreeMap<ListCategory, DomainDiff>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_differences: Option<Vec<SettingDifference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_sizes: Option<BTreeMap<ListCategory, usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sizes: Option<BTreeMap<ListCategory, usize>>,
}

impl GroupDiff {
    /// Sum of `added` entries across all categories of the detailed diff.
    pub fn added_count(&self) -> usize {
        self.detailed_diff
            .as_ref()
            .map_or(0, |m| m.values().map(|d| d.added.len()).sum())
    }

    /// Sum of `removed` entries across all categories of the detailed diff.
    pub fn removed_count(&self) -> usize {
        self.detailed_diff
            .as_ref()
            .map_or(0, |m| m.values().map(|d| d.removed.len()).sum())
    }

    /// Total entry count on the source side, from the size summary.
    pub fn source_total(&self) -> usize {
        self.source_sizes.as_ref().map_or(0, |m| m.values().sum())
    }

    /// Total entry count on the target side, from the size summary.
    pub fn target_total(&self) -> usize {
        self.target_sizes.as_ref().map_or(0, |m| m.values().sum())
    }
}

/// A key present on one side only, with its value from that side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MappingEntry {
    pub key: String,
    pub value: String,
}

/// A key present on both sides with different values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingChange {
    pub key: String,
    pub source_value: String,
    pub target_value: String,
}

/// Three-way key diff of one string-to-string mapping table.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingDiff {
    /// Keys only in source.
    pub added: Vec<MappingEntry>,
    /// Keys only in target.
    pub removed: Vec<MappingEntry>,
    /// Keys on both sides with different values.
    pub changed: Vec<MappingChange>,
}

impl MappingDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Top-level (non-group) configuration differences between two snapshots.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDiff {
    pub settings_differences: Vec<SettingDifference>,
    pub local_mapping: MappingDiff,
    pub network_mapping: MappingDiff,
}

impl ConfigDiff {
    pub fn is_empty(&self) -> bool {
        self.settings_differences.is_empty()
            && self.local_mapping.is_empty()
            && self.network_mapping.is_empty()
    }
}
