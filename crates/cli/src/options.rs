use bitflags::bitflags;
use log::debug;

bitflags! {
    /// Option bitmask accumulated while scanning the argument list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ListOptions: u8 {
        /// `-l`: one detailed line per entry.
        const LONG_FORMAT   = 1 << 0;
        /// `-t`: order by modification time, newest first.
        const SORT_BY_MTIME = 1 << 1;
        /// `-i` / `--inode`: prepend the inode column.
        const SHOW_INODE    = 1 << 2;
        /// `-a` / `--all`: include names starting with `.`.
        const SHOW_ALL      = 1 << 3;
        /// `-r` / `--reverse`: flip the final ordering.
        const REVERSE       = 1 << 4;
    }
}

pub const USAGE: &str = "usage: lsq [OPTION]... [FILE]...\n(no operand lists the current directory)";

/// Outcome of scanning the raw argument list.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedArgs {
    pub options: ListOptions,
    /// Everything from the first non-dash token onward.
    pub operands: Vec<String>,
    /// `-h` was seen; the caller prints the usage line and keeps going.
    pub show_help: bool,
}

/// Permissive scan of the argument list.
///
/// Tokens are treated as flags while they start with `-`; the first bare
/// token ends flag scanning and it plus everything after it become
/// operands, dashes and all. Unrecognized flags are ignored on purpose
/// and `-h` never terminates the run. No token ever produces an error.
pub fn parse<I>(args: I) -> ParsedArgs
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = ParsedArgs::default();
    let mut args = args.into_iter();

    let mut first_operand = None;
    for arg in args.by_ref() {
        if !arg.starts_with('-') {
            first_operand = Some(arg);
            break;
        }
        match arg.as_str() {
            "-l" => parsed.options |= ListOptions::LONG_FORMAT,
            "-t" => parsed.options |= ListOptions::SORT_BY_MTIME,
            "-i" | "--inode" => parsed.options |= ListOptions::SHOW_INODE,
            "-a" | "--all" => parsed.options |= ListOptions::SHOW_ALL,
            "-r" | "--reverse" => parsed.options |= ListOptions::REVERSE,
            "-h" | "--help" => parsed.show_help = true,
            other => debug!("[options] ignoring unrecognized flag {other:?}"),
        }
    }

    if let Some(first) = first_operand {
        parsed.operands.push(first);
        parsed.operands.extend(args);
    }

    parsed
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
