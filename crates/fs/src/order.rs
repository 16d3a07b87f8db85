use std::cmp::Ordering;

use crate::entry::EntryAttributes;

/// Which comparator orders the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Case-insensitive lexicographic order on the entry name.
    #[default]
    Name,
    /// Newest modification time first, names break ties.
    Mtime,
}

/// Lowercase-folded lexicographic compare of the entry names.
pub fn by_name(a: &EntryAttributes, b: &EntryAttributes) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

/// Descending modification time, then `by_name`. A proper three-way
/// compare keeps the sort total even when many entries share a second.
pub fn by_mtime(a: &EntryAttributes, b: &EntryAttributes) -> Ordering {
    b.mtime_secs.cmp(&a.mtime_secs).then_with(|| by_name(a, b))
}

/// Sort in place by the selected key. Reversal is deliberately NOT an
/// input here: the caller flips the slice afterwards so `-r` always
/// complements whatever base order was chosen.
pub fn sort_entries(entries: &mut [EntryAttributes], key: SortKey) {
    match key {
        SortKey::Name => entries.sort_by(by_name),
        SortKey::Mtime => entries.sort_by(by_mtime),
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
