mod entry;
mod order;
mod scanner;

pub use entry::{EntryAttributes, collect_attributes};
pub use order::{SortKey, by_mtime, by_name, sort_entries};
pub use scanner::scan_dir;
