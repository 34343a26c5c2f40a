//! Configuration reconciliation engine for a fleet of replicated DNS
//! filtering nodes.
//!
//! Given two [`Snapshot`]s, the engine computes group-level and config-level
//! diffs and a directional [`SyncPreview`] that enumerates every destructive
//! change before an external apply step runs. Everything here is a pure
//! computation over in-memory values: no I/O beyond the optional file loader,
//! no shared state, inputs never mutated, outputs freshly allocated. Calls
//! for different snapshot pairs are safe to run concurrently without locking.

pub mod diff;
pub mod distance;
pub mod format;
pub mod model;
pub mod parse;
pub mod preview;
pub mod sets;

pub use diff::{
    diff_config, diff_groups, diff_groups_with_options, diff_lists, diff_lists_with_threshold,
    ConfigDiff, DiffOptions, DomainDiff, GroupDiff, GroupStatus, MappingChange, MappingDiff,
    MappingEntry, ModifiedEntry, SettingDifference,
};
pub use distance::{are_similar, distance, similarity, DEFAULT_SIMILARITY_THRESHOLD};
pub use format::{format_config_text, format_json, format_preview_text, format_summary, format_text};
pub use model::{DetailedUrl, Group, ListCategory, ServerSettings, Snapshot, UrlEntry};
pub use parse::{parse_snapshot, parse_snapshot_file, ParseError};
pub use preview::{preview, MappingChangeCounts, SyncDirection, SyncPreview};
pub use sets::{equal_as_sets, equal_as_url_sets};
