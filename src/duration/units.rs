//! Time units, magnitude prefixes and the scale ladder used for formatting.
//!
//! Months and years are fixed-length (30 and 365 days) so that existing
//! tables keep their exact numeric meaning.

pub const SECOND: f64 = 1.0;
pub const MINUTE: f64 = 60.0;
pub const HOUR: f64 = 3_600.0;
pub const DAY: f64 = 86_400.0;
pub const WEEK: f64 = 604_800.0;
pub const MONTH: f64 = 2_592_000.0;
pub const YEAR: f64 = 31_536_000.0;

/// A calendar unit a duration string can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimeUnit {
    /// All units, smallest first
    pub const ALL: [TimeUnit; 7] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn seconds(self) -> f64 {
        match self {
            TimeUnit::Second => SECOND,
            TimeUnit::Minute => MINUTE,
            TimeUnit::Hour => HOUR,
            TimeUnit::Day => DAY,
            TimeUnit::Week => WEEK,
            TimeUnit::Month => MONTH,
            TimeUnit::Year => YEAR,
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Year => "year",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Year => "years",
        }
    }

    /// Match a lowercase unit word, singular or plural
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| token == unit.singular() || token == unit.plural())
    }
}

/// Magnitude prefixes, smallest first ("4.2k years", "1.4bn years")
///
/// `qn` is read as 1e15, the same as `qd`: existing tables write it for
/// that magnitude. It is never emitted.
pub const PREFIXES: [(&str, f64); 6] = [
    ("k", 1e3),
    ("m", 1e6),
    ("bn", 1e9),
    ("tn", 1e12),
    ("qd", 1e15),
    ("qn", 1e15),
];

/// Multiplier for a lowercase prefix; the empty prefix is 1
pub fn prefix_multiplier(prefix: &str) -> Option<f64> {
    if prefix.is_empty() {
        return Some(1.0);
    }
    PREFIXES
        .iter()
        .find(|(name, _)| *name == prefix)
        .map(|(_, mult)| *mult)
}

/// One rung of the formatting ladder: a unit with an optional prefix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub unit: TimeUnit,
    pub prefix: &'static str,
    pub seconds: f64,
}

const fn step(unit: TimeUnit, prefix: &'static str, seconds: f64) -> Step {
    Step {
        unit,
        prefix,
        seconds,
    }
}

/// Every unit in ascending size, then years with each prefix.
///
/// Prefixes only ever apply to years: every smaller unit rolls over into
/// the next one well before reaching a thousand.
pub const LADDER: [Step; 12] = [
    step(TimeUnit::Second, "", SECOND),
    step(TimeUnit::Minute, "", MINUTE),
    step(TimeUnit::Hour, "", HOUR),
    step(TimeUnit::Day, "", DAY),
    step(TimeUnit::Week, "", WEEK),
    step(TimeUnit::Month, "", MONTH),
    step(TimeUnit::Year, "", YEAR),
    step(TimeUnit::Year, "k", YEAR * 1e3),
    step(TimeUnit::Year, "m", YEAR * 1e6),
    step(TimeUnit::Year, "bn", YEAR * 1e9),
    step(TimeUnit::Year, "tn", YEAR * 1e12),
    step(TimeUnit::Year, "qd", YEAR * 1e15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_tokens() {
        assert_eq!(TimeUnit::from_token("week"), Some(TimeUnit::Week));
        assert_eq!(TimeUnit::from_token("weeks"), Some(TimeUnit::Week));
        assert_eq!(TimeUnit::from_token("fortnight"), None);
    }

    #[test]
    fn test_fixed_length_month_and_year() {
        assert_eq!(TimeUnit::Month.seconds(), 30.0 * DAY);
        assert_eq!(TimeUnit::Year.seconds(), 365.0 * DAY);
    }

    #[test]
    fn test_ladder_is_ascending() {
        for pair in LADDER.windows(2) {
            assert!(pair[0].seconds < pair[1].seconds);
        }
    }

    #[test]
    fn test_prefix_multiplier() {
        assert_eq!(prefix_multiplier(""), Some(1.0));
        assert_eq!(prefix_multiplier("bn"), Some(1e9));
        assert_eq!(prefix_multiplier("zz"), None);
    }

    #[test]
    fn test_qn_reads_as_quadrillion() {
        assert_eq!(prefix_multiplier("qn"), Some(1e15));
        assert_eq!(prefix_multiplier("qn"), prefix_multiplier("qd"));
        assert!(LADDER.iter().all(|step| step.prefix != "qn"));
        assert_eq!(LADDER[LADDER.len() - 1].prefix, "qd");
    }
}
