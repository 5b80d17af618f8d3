/// Standard date format used for report filenames: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Output directory used when `--base-dir` is not given
pub(crate) const DEFAULT_BASE_DIR: &str = "docs/notes";

/// Report file extension (without the dot)
pub(crate) const REPORT_EXTENSION: &str = "md";

/// Upper bound on slug length, applied before trailing hyphens are stripped
pub(crate) const MAX_SLUG_LEN: usize = 70;

/// Highest numeric suffix probed when the plain filename is taken
pub(crate) const MAX_SUFFIX: u32 = 999;

/// Prefix for slugs derived from the topic hash
pub(crate) const FALLBACK_PREFIX: &str = "topic";

/// Number of hex digits of the SHA-1 digest kept in a fallback slug
pub(crate) const FALLBACK_HASH_LEN: usize = 8;
