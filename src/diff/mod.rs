//! Snapshot diffing: list-level, group-level, and top-level config.

pub mod config;
pub mod fields;
pub mod groups;
pub mod result;

pub use config::diff_config;
pub use fields::{diff_lists, diff_lists_with_threshold};
pub use groups::{diff_groups, diff_groups_with_options, DiffOptions};
pub use result::{
    ConfigDiff, DomainDiff, GroupDiff, GroupStatus, MappingChange, MappingDiff, MappingEntry,
    ModifiedEntry, SettingDifference,
};
