use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use log::warn;

mod options;
mod printer;

use lsq_fs::{SortKey, scan_dir, sort_entries};
use lsq_runtime::logging;
use options::{ListOptions, ParsedArgs, USAGE};

fn main() -> ExitCode {
    logging::init().ok();

    let parsed = options::parse(std::env::args().skip(1));

    if let Err(e) = run(&parsed) {
        warn!("[lsq] {e:#}");
    }

    // Per-operand and per-entry failures were already reported where
    // they happened; none of them change the exit status.
    ExitCode::SUCCESS
}

fn run(args: &ParsedArgs) -> anyhow::Result<()> {
    let mut out = io::stdout().lock();
    let width = printer::term_width();

    if args.show_help {
        writeln!(out, "{USAGE}").context("write usage")?;
    }

    if args.operands.is_empty() {
        // No operand: list the current directory, no header.
        list_operand(&mut out, Path::new("."), args.options, width, false)?;
    } else {
        for operand in &args.operands {
            list_operand(&mut out, Path::new(operand), args.options, width, true)?;
        }
    }

    Ok(())
}

/// List one operand: scan, sort, render. An operand that cannot be
/// opened as a directory is reinterpreted as a plain file reference and
/// printed verbatim instead.
fn list_operand<W: Write>(
    out: &mut W,
    path: &Path,
    opts: ListOptions,
    term_width: usize,
    with_header: bool,
) -> anyhow::Result<()> {
    if with_header {
        writeln!(out, "{}:", path.display())?;
    }

    let mut entries = match scan_dir(path, opts.contains(ListOptions::SHOW_ALL)) {
        Ok(entries) => entries,
        Err(_) => {
            writeln!(out, "{}", path.display())?;
            writeln!(out)?;
            return Ok(());
        }
    };

    let key = if opts.contains(ListOptions::SORT_BY_MTIME) {
        SortKey::Mtime
    } else {
        SortKey::Name
    };
    sort_entries(&mut entries, key);
    if opts.contains(ListOptions::REVERSE) {
        entries.reverse();
    }

    let show_inode = opts.contains(ListOptions::SHOW_INODE);
    if opts.contains(ListOptions::LONG_FORMAT) {
        printer::render_long(out, &entries, show_inode)?;
    } else {
        printer::render_short(out, &entries, show_inode, term_width)?;
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
