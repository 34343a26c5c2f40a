use serde::Serialize;

/// Serialize any diff output for transport to a UI layer.
///
/// Works for `&[GroupDiff]`, `&ConfigDiff`, and `&SyncPreview` alike; all
/// output types in this crate implement [`Serialize`].
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}
