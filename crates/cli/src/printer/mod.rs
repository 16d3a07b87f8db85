use std::io::{self, Write};

use lsq_fs::EntryAttributes;
use lsq_runtime::{DEFAULT_TERM_WIDTH, SHORT_FORMAT_PAD};

/// Maximum natural width of every field across one directory's listing.
///
/// Computed in a single pass before any line is printed; the layout is
/// global per listing, never streaming.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ColumnWidths {
    pub inode: usize,
    pub mode: usize,
    pub links: usize,
    pub owner: usize,
    pub group: usize,
    pub size: usize,
    pub mtime: usize,
    /// Short-format cell: longest name plus a fixed gap.
    pub short_cell: usize,
}

pub fn column_widths(entries: &[EntryAttributes]) -> ColumnWidths {
    let mut w = ColumnWidths::default();
    for e in entries {
        w.inode = w.inode.max(digits(e.inode));
        w.mode = w.mode.max(e.mode_display.len());
        w.links = w.links.max(digits(e.links));
        w.owner = w.owner.max(e.owner.len());
        w.group = w.group.max(e.group.len());
        w.size = w.size.max(digits(e.size));
        w.mtime = w.mtime.max(e.mtime_display.len());
        w.short_cell = w.short_cell.max(e.name.len() + SHORT_FORMAT_PAD);
    }
    w
}

fn digits(n: u64) -> usize {
    // Width of the decimal rendering, so 0 still occupies one column.
    let mut n = n;
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

/// Terminal column count, with a fixed fallback when stdout is not a
/// terminal (redirected to a file or pipe).
pub fn term_width() -> usize {
    term_size::dimensions()
        .map(|(w, _)| w)
        .unwrap_or(DEFAULT_TERM_WIDTH)
}

/// One detailed line per entry: optional left-aligned inode, then
/// right-aligned mode, links, owner, group, size and mtime, then the
/// name with its `/` marker attached. A blank line closes the listing.
pub fn render_long<W: Write>(
    out: &mut W,
    entries: &[EntryAttributes],
    show_inode: bool,
) -> io::Result<()> {
    let w = column_widths(entries);

    for e in entries {
        if show_inode {
            write!(out, "{inode:<inode_w$} ", inode = e.inode, inode_w = w.inode)?;
        }
        writeln!(
            out,
            "{mode:>mode_w$} {links:>links_w$} {owner:>owner_w$} {group:>group_w$} {size:>size_w$} {mtime:>mtime_w$} {name}{suffix}",
            mode = e.mode_display,
            mode_w = w.mode,
            links = e.links,
            links_w = w.links,
            owner = e.owner,
            owner_w = w.owner,
            group = e.group,
            group_w = w.group,
            size = e.size,
            size_w = w.size,
            mtime = e.mtime_display,
            mtime_w = w.mtime,
            name = e.name,
            suffix = e.suffix,
        )?;
    }

    writeln!(out)
}

/// Names only, left-aligned in uniform cells, packed greedily until the
/// next cell would overflow `max_width`, then broken onto a new line.
/// A blank line closes the listing.
pub fn render_short<W: Write>(
    out: &mut W,
    entries: &[EntryAttributes],
    show_inode: bool,
    max_width: usize,
) -> io::Result<()> {
    let w = column_widths(entries);
    let cell = w.short_cell + if show_inode { w.inode + 1 } else { 0 };

    let mut line_len = 0usize;
    for e in entries {
        if line_len > 0 && line_len + cell > max_width {
            writeln!(out)?;
            line_len = 0;
        }
        if show_inode {
            write!(out, "{inode:<inode_w$} ", inode = e.inode, inode_w = w.inode)?;
        }
        write!(out, "{name:<cell_w$}", name = e.name, cell_w = w.short_cell)?;
        line_len += cell;
    }
    if line_len > 0 {
        writeln!(out)?;
    }

    writeln!(out)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
