/// Minimum year accepted by validation (renders as `0000`)
pub const MIN_YEAR: i32 = 0;

/// Maximum valid year (inclusive), the largest four-digit year
pub const MAX_YEAR: i32 = 9999;

/// Lowest year `WeekDate::previous` may step into
pub const MIN_PREVIOUS_YEAR: i32 = 1;

/// First week of every ISO week-numbering year
pub const MIN_WEEK: i32 = 1;

/// Week count of a short ISO year
pub const WEEKS_IN_SHORT_YEAR: u8 = 52;
/// Week count of a long ISO year
pub const WEEKS_IN_LONG_YEAR: u8 = 53;

/// Month and day that always fall in the last ISO week of their week-year
pub(crate) const LAST_WEEK_MONTH: u32 = 12;
pub(crate) const LAST_WEEK_DAY: u32 = 28;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
/// Start of the 400-year window week counts are computed in
pub(crate) const GREGORIAN_CYCLE_BASE: i32 = 2000;

/// Separator between year and week (ISO 8601 extended format)
pub const DATE_SEPARATOR: char = '-';
/// Week designator preceding the week number
pub const WEEK_DESIGNATOR: char = 'W';
/// Digits in the zero-padded year of the canonical `YYYY-Www` form
pub const YEAR_DIGITS: usize = 4;
/// Digits in the zero-padded week of the canonical `YYYY-Www` form
pub const WEEK_DIGITS: usize = 2;
