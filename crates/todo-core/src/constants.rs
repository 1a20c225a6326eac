/// Fence token that opens and closes a long note.
pub const FENCE: &str = "```";

/// Key on a fence line that turns the block into a long note.
pub const LONG_NOTE_KEY: &str = "remember-for=";

/// Line prefix of a single-line note.
pub const SHORT_NOTE_TAG: &str = "/remember=";

/// Placeholder for a memories block with no day sections.
pub const NOTHING_TO_SEE: &str = "...nothing to see here...";

/// Number of days in the lookback window, today included.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 7;

/// `chrono` format of day headers and document file stems.
pub const DAY_FORMAT: &str = "%Y-%m-%d";
