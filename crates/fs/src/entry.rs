use std::{fs, os::unix::fs::MetadataExt, path::Path};

use chrono::{DateTime, Local};
use log::warn;
use users::{get_group_by_gid, get_user_by_uid};

/// Display-ready attributes for one directory entry.
///
/// Every field is owned by the record; nothing is shared with other
/// entries or with the directory scan that produced it.
#[derive(Debug, Clone)]
pub struct EntryAttributes {
    /// Fixed 10-character type-and-permission string, e.g. `drwxr-xr-x`.
    pub mode_display: String,
    /// Hard link count.
    pub links: u64,
    /// Owner name, or the decimal uid when the lookup fails.
    pub owner: String,
    /// Group name, or the decimal gid when the lookup fails.
    pub group: String,
    /// Size in bytes.
    pub size: u64,
    /// Fixed 12-character `Mon DD HH:MM` modification time.
    pub mtime_display: String,
    /// Raw modification time in epoch seconds. Sort key only, never shown.
    pub mtime_secs: i64,
    /// Entry file name (not the full path).
    pub name: String,
    /// `/` for directories, empty otherwise. Printed right after the name.
    pub suffix: &'static str,
    /// Inode number, shown only on request.
    pub inode: u64,
}

/// Stat one entry of `dir` and build its attribute record.
///
/// Uses lstat semantics (`symlink_metadata`) so symlinks report as `l`
/// rather than as whatever they point at. On any metadata failure the
/// entry is dropped from the listing: a diagnostic goes to the error
/// stream and `None` comes back.
pub fn collect_attributes(dir: &Path, name: &str) -> Option<EntryAttributes> {
    let full_path = dir.join(name);

    let metadata = match fs::symlink_metadata(&full_path) {
        Ok(m) => m,
        Err(e) => {
            warn!("[collect] stat({:?}) failed: {e}", full_path);
            return None;
        }
    };

    let mode = metadata.mode();
    let mode_display = mode_string(mode);
    let is_dir = mode_display.starts_with('d');

    Some(EntryAttributes {
        mode_display,
        links: metadata.nlink(),
        owner: owner_name(metadata.uid()),
        group: group_name(metadata.gid()),
        size: metadata.size(),
        mtime_display: mtime_string(metadata.mtime()),
        mtime_secs: metadata.mtime(),
        name: name.to_owned(),
        suffix: if is_dir { "/" } else { "" },
        inode: metadata.ino(),
    })
}

/// Render raw mode bits as the classic 10-character string: one type
/// glyph followed by three `rwx` triplets, `-` for every absent bit.
fn mode_string(mode: u32) -> String {
    let mut out = String::with_capacity(10);

    out.push(match mode & (libc::S_IFMT as u32) {
        m if m == libc::S_IFDIR as u32 => 'd',
        m if m == libc::S_IFCHR as u32 => 'c',
        m if m == libc::S_IFBLK as u32 => 'b',
        m if m == libc::S_IFLNK as u32 => 'l',
        _ => '-',
    });

    let perm_bits: [(u32, char); 9] = [
        (libc::S_IRUSR as u32, 'r'),
        (libc::S_IWUSR as u32, 'w'),
        (libc::S_IXUSR as u32, 'x'),
        (libc::S_IRGRP as u32, 'r'),
        (libc::S_IWGRP as u32, 'w'),
        (libc::S_IXGRP as u32, 'x'),
        (libc::S_IROTH as u32, 'r'),
        (libc::S_IWOTH as u32, 'w'),
        (libc::S_IXOTH as u32, 'x'),
    ];
    for (bit, glyph) in perm_bits {
        out.push(if mode & bit != 0 { glyph } else { '-' });
    }

    out
}

fn owner_name(uid: u32) -> String {
    get_user_by_uid(uid)
        .map(|u| u.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| uid.to_string())
}

fn group_name(gid: u32) -> String {
    get_group_by_gid(gid)
        .map(|g| g.name().to_string_lossy().into_owned())
        .unwrap_or_else(|| gid.to_string())
}

/// `Mon DD HH:MM` in local time, 12 characters, day-of-month space
/// padded. Matches characters 4..16 of the classic ctime string, which
/// is what the weekday- and year-less listing column wants.
fn mtime_string(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(&Local).format("%b %e %H:%M").to_string())
        .unwrap_or_else(|| " ".repeat(12))
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
