use super::*;

use std::fs::{create_dir, write};

#[test]
fn mode_string_renders_type_glyph_and_triplets() {
    let cases: &[(u32, &str)] = &[
        (libc::S_IFREG as u32 | 0o644, "-rw-r--r--"),
        (libc::S_IFREG as u32 | 0o000, "----------"),
        (libc::S_IFDIR as u32 | 0o755, "drwxr-xr-x"),
        (libc::S_IFLNK as u32 | 0o777, "lrwxrwxrwx"),
        (libc::S_IFCHR as u32 | 0o620, "crw--w----"),
        (libc::S_IFBLK as u32 | 0o660, "brw-rw----"),
        (libc::S_IFREG as u32 | 0o751, "-rwxr-x--x"),
    ];

    for (mode, expected) in cases {
        let got = mode_string(*mode);
        assert_eq!(got.len(), 10, "mode string must be 10 chars");
        assert_eq!(&got, expected, "mode {mode:o}");
    }
}

#[test]
fn mtime_string_is_twelve_chars() {
    // A mix of old, recent, and degenerate timestamps.
    for secs in [0i64, 1, 1_000_000_000, 1_700_000_000] {
        let s = mtime_string(secs);
        assert_eq!(s.len(), 12, "mtime display for {secs}: {s:?}");
    }
}

#[test]
fn collect_attributes_for_regular_file() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    write(root.join("file.txt"), b"hello world").expect("write file");

    let rec = collect_attributes(root, "file.txt").expect("record for file.txt");

    assert_eq!(rec.name, "file.txt");
    assert_eq!(rec.size, 11);
    assert_eq!(rec.suffix, "");
    assert_eq!(rec.mode_display.len(), 10);
    assert!(rec.mode_display.starts_with('-'));
    assert!(rec.links >= 1);
    assert!(rec.inode > 0);
    assert_eq!(rec.mtime_display.len(), 12);
    // Numeric fallback guarantees these are never empty.
    assert!(!rec.owner.is_empty());
    assert!(!rec.group.is_empty());
}

#[test]
fn collect_attributes_marks_directories_with_slash() {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir(root.join("sub")).expect("create subdir");

    let rec = collect_attributes(root, "sub").expect("record for sub");

    assert_eq!(rec.name, "sub");
    assert_eq!(rec.suffix, "/");
    assert!(rec.mode_display.starts_with('d'));
}

#[test]
fn collect_attributes_drops_missing_entries() {
    let tmp = tempfile::tempdir().expect("create temp dir");

    // Stat failure means no record, not a partial one.
    assert!(collect_attributes(tmp.path(), "no-such-entry").is_none());
}

#[cfg(unix)]
#[test]
fn collect_attributes_reports_symlinks_not_their_targets() {
    use std::os::unix::fs::symlink;

    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = tmp.path();

    create_dir(root.join("target-dir")).expect("create target dir");
    symlink(root.join("target-dir"), root.join("link")).expect("create symlink");

    let rec = collect_attributes(root, "link").expect("record for link");

    // lstat semantics: the link itself, not the directory behind it.
    assert!(rec.mode_display.starts_with('l'));
    assert_eq!(rec.suffix, "");
}
