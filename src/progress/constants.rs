//! Progress display constants

/// Width of the horizontal rules around the banner and summary
pub const RULE_WIDTH: usize = 55;

/// Column width of the outcome tag in progress lines
pub const TAG_WIDTH: usize = 8;
