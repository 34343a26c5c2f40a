//! Order-independent multiset equality over list fields.
//!
//! Absence and emptiness are deliberately distinct here: a node that never set
//! a list field is not the same as a node that set it to an empty list, and
//! that difference must survive comparison. List diffing
//! ([`crate::diff::diff_lists`]) does not share this rule and treats absent
//! lists as empty.

use crate::model::UrlEntry;

/// Multiset equality for plain string lists.
///
/// Duplicates are counted; order is ignored. `None` equals only `None` — a
/// present-but-empty list is not equal to an absent one.
pub fn equal_as_sets(a: Option<&[String]>, b: Option<&[String]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => equal_sorted(a.to_vec(), b.to_vec()),
        _ => false,
    }
}

/// Multiset equality for URL-entry lists, comparing canonical strings.
pub fn equal_as_url_sets(a: Option<&[UrlEntry]>, b: Option<&[UrlEntry]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => equal_sorted(
            a.iter().map(UrlEntry::canonical).collect(),
            b.iter().map(UrlEntry::canonical).collect(),
        ),
        _ => false,
    }
}

fn equal_sorted(mut a: Vec<String>, mut b: Vec<String>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.sort_unstable();
    b.sort_unstable();
    a == b
}
