use std::{fs::read_dir, io::Result, path::Path};

use log::warn;

use crate::entry::{EntryAttributes, collect_attributes};

/// Enumerate one directory into attribute records, in OS order.
///
/// Names starting with `.` are skipped unless `show_hidden` is set.
/// Entries whose metadata cannot be read are dropped with a diagnostic;
/// they never abort the scan. An `Err` here means the path could not be
/// opened as a directory at all, and the caller decides how to present
/// the operand. The directory handle is released when the `ReadDir`
/// iterator drops, on every return path.
pub fn scan_dir(dir: &Path, show_hidden: bool) -> Result<Vec<EntryAttributes>> {
    let rd = read_dir(dir)?;

    let mut entries = Vec::new();
    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(e) => {
                warn!("[scan] error reading entry in {:?}: {e}", dir);
                continue;
            }
        };

        let name_os = entry.file_name();
        let name = match name_os.to_str() {
            Some(s) => s,
            None => {
                warn!("[scan] skipping non-UTF-8 name in {:?}", dir);
                continue;
            }
        };

        if !show_hidden && name.starts_with('.') {
            continue;
        }

        if let Some(rec) = collect_attributes(dir, name) {
            entries.push(rec);
        }
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
