pub const PROGRAM_NAME: &str = "lsq";
pub const PROGRAM_LOG_LEVEL: &str = "LSQ_LOG_LEVEL";

/// Columns assumed when the terminal geometry query fails
/// (output redirected to a file or pipe).
pub const DEFAULT_TERM_WIDTH: usize = 82;

/// Gap added to the longest file name to form a short-format cell.
pub const SHORT_FORMAT_PAD: usize = 4;
