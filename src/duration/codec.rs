//! Conversion between duration strings and seconds.
//!
//! Accepted input:
//! - `Instantly` (any case) for zero
//! - `<number> [prefix] <unit>` such as `3 weeks`, `2.5 minutes`,
//!   `4.2k years` or `1.4 bn years`

use super::units::{prefix_multiplier, Step, TimeUnit, LADDER, PREFIXES};
use crate::utils::config::INSTANT_LITERAL;
use crate::utils::error::ParseError;
use serde::Deserialize;

/// Rounding and threshold rules for turning seconds back into text
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DurationFormat {
    /// Decimal places kept before trailing zeros are trimmed
    pub precision: usize,

    /// Anything shorter than this (in seconds) is reported as instant
    pub instant_threshold: f64,
}

impl Default for DurationFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            instant_threshold: 0.5,
        }
    }
}

impl DurationFormat {
    pub fn new(precision: usize, instant_threshold: f64) -> Self {
        Self {
            precision,
            instant_threshold,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.precision > 6 {
            return Err(format!("precision must be at most 6, got {}", self.precision));
        }
        if !(self.instant_threshold.is_finite() && self.instant_threshold >= 0.0) {
            return Err(format!(
                "instant_threshold must be a non-negative number, got {}",
                self.instant_threshold
            ));
        }
        Ok(())
    }

    /// Format seconds as a human-readable duration
    ///
    /// **Public** - inverse of [`parse_duration`] up to rounding
    ///
    /// Picks the largest unit whose magnitude is at least 1, rounds, then
    /// re-checks the next unit up so a value that rounds onto a boundary
    /// reads `1 hour` rather than `60 minutes`.
    pub fn format(&self, seconds: f64) -> String {
        if seconds.is_nan() || seconds <= 0.0 || seconds < self.instant_threshold {
            return INSTANT_LITERAL.to_string();
        }

        let mut idx = LADDER
            .iter()
            .rposition(|step| seconds >= step.seconds)
            .unwrap_or(0);
        let mut value = self.round(seconds / LADDER[idx].seconds);

        while idx + 1 < LADDER.len() && value * LADDER[idx].seconds >= LADDER[idx + 1].seconds {
            idx += 1;
            value = self.round(seconds / LADDER[idx].seconds);
        }

        self.render(value, LADDER[idx])
    }

    fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale
    }

    fn render(&self, value: f64, step: Step) -> String {
        let magnitude = trim_decimal(format!("{:.*}", self.precision, value));

        if step.prefix.is_empty() {
            let unit = if magnitude == "1" {
                step.unit.singular()
            } else {
                step.unit.plural()
            };
            format!("{} {}", magnitude, unit)
        } else {
            format!("{}{} {}", magnitude, step.prefix, step.unit.plural())
        }
    }
}

fn trim_decimal(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    }
}

/// Parse a duration string into seconds
///
/// **Public** - main entry point for reading table cells
///
/// # Errors
/// * `ParseError::Malformed` - not `<number> <unit>` shaped
/// * `ParseError::UnknownUnit` - unit word not recognised
/// * `ParseError::UnknownPrefix` - magnitude prefix not recognised
///
/// # Example
/// ```
/// use quantum_password_analyzer::duration::parse_duration;
///
/// assert_eq!(parse_duration("3 weeks").unwrap(), 1_814_400.0);
/// assert_eq!(parse_duration("Instantly").unwrap(), 0.0);
/// ```
pub fn parse_duration(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case(INSTANT_LITERAL) {
        return Ok(0.0);
    }

    let malformed = || ParseError::Malformed(text.to_string());

    let split = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (number, rest) = trimmed.split_at(split);

    let magnitude = parse_magnitude(number).ok_or_else(malformed)?;

    let rest = rest.trim().to_ascii_lowercase();
    if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        return Err(malformed());
    }

    let (prefix, unit) = split_prefix_and_unit(text, &rest)?;

    let multiplier = prefix_multiplier(prefix).ok_or_else(|| ParseError::UnknownPrefix {
        text: text.to_string(),
        prefix: prefix.to_string(),
    })?;

    Ok(magnitude * multiplier * unit.seconds())
}

/// Format seconds with the default rounding rules
pub fn format_duration(seconds: f64) -> String {
    DurationFormat::default().format(seconds)
}

/// Digits with at most one interior decimal point
fn parse_magnitude(number: &str) -> Option<f64> {
    if number.is_empty() || number.starts_with('.') || number.ends_with('.') {
        return None;
    }
    if number.matches('.').count() > 1 {
        return None;
    }
    number.parse().ok()
}

/// Split the text after the number into (prefix, unit).
///
/// The unit is the last word; anything before it is the prefix. A prefix
/// glued to the unit ("kyears") is also accepted.
fn split_prefix_and_unit<'a>(
    text: &str,
    rest: &'a str,
) -> Result<(&'a str, TimeUnit), ParseError> {
    let mut words = rest.split_whitespace();
    let last = words.next_back().ok_or_else(|| ParseError::Malformed(text.to_string()))?;
    let leading: Vec<&str> = words.collect();

    if leading.len() > 1 {
        return Err(ParseError::Malformed(text.to_string()));
    }

    if let Some(unit) = TimeUnit::from_token(last) {
        return Ok((leading.first().copied().unwrap_or(""), unit));
    }

    if leading.is_empty() {
        for (prefix, _) in PREFIXES.iter() {
            if let Some(unit) = last.strip_prefix(prefix).and_then(TimeUnit::from_token) {
                return Ok((&last[..prefix.len()], unit));
            }
        }
    }

    Err(ParseError::UnknownUnit {
        text: text.to_string(),
        unit: last.to_string(),
    })
}
