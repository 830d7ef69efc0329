//! Time span values parsed from compound unit notation.
//!
//! A span is a signed count of nanoseconds. The textual form is a sequence of
//! decimal numbers, each followed by a unit: `3h00m`, `0h50m`, `1.5h`, `-30m`.

use crate::{Error, Result};
use std::fmt;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SECOND: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// A signed duration with nanosecond resolution
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSpan {
    nanos: i64,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan { nanos: 0 };

    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            nanos: minutes * NANOS_PER_MINUTE as i64,
        }
    }

    pub const fn from_hours(hours: i64) -> Self {
        Self {
            nanos: hours * NANOS_PER_HOUR as i64,
        }
    }

    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Span length in fractional hours
    pub fn as_hours(self) -> f64 {
        let hours = self.nanos / NANOS_PER_HOUR as i64;
        let rest = self.nanos % NANOS_PER_HOUR as i64;
        hours as f64 + rest as f64 / NANOS_PER_HOUR as f64
    }

    pub fn is_positive(self) -> bool {
        self.nanos > 0
    }

    /// Parse a span such as `3h00m`, `45m`, `1.5h` or `-10m30s`
    ///
    /// The bare string `0` is accepted. Every other number needs a unit
    /// (`h`, `m`, `s`, `ms`, `us`/`µs`, `ns`).
    pub fn parse(input: &str) -> Result<Self> {
        let fail = |reason: &str| Error::parse("duration", input, reason);

        let (negative, mut rest) = match input.as_bytes().first() {
            Some(b'-') => (true, &input[1..]),
            Some(b'+') => (false, &input[1..]),
            _ => (false, input),
        };

        if rest == "0" {
            return Ok(Self::ZERO);
        }
        if rest.is_empty() {
            return Err(fail("empty duration"));
        }

        let mut total: u64 = 0;
        while !rest.is_empty() {
            let int_len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let int_digits = &rest[..int_len];
            rest = &rest[int_len..];

            let mut frac_digits = "";
            if let Some(after_dot) = rest.strip_prefix('.') {
                let frac_len = after_dot
                    .find(|c: char| !c.is_ascii_digit())
                    .unwrap_or(after_dot.len());
                frac_digits = &after_dot[..frac_len];
                rest = &after_dot[frac_len..];
            }

            if int_digits.is_empty() && frac_digits.is_empty() {
                return Err(fail("expected a number"));
            }

            let unit_len = rest
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(rest.len());
            let unit = &rest[..unit_len];
            rest = &rest[unit_len..];

            let scale = match unit {
                "ns" => 1,
                "us" | "µs" | "μs" => NANOS_PER_MICRO,
                "ms" => NANOS_PER_MILLI,
                "s" => NANOS_PER_SECOND,
                "m" => NANOS_PER_MINUTE,
                "h" => NANOS_PER_HOUR,
                "" => return Err(fail("missing unit")),
                other => return Err(fail(&format!("unknown unit {:?}", other))),
            };

            let whole = if int_digits.is_empty() {
                0
            } else {
                int_digits
                    .parse::<u64>()
                    .ok()
                    .and_then(|n| n.checked_mul(scale))
                    .ok_or_else(|| fail("duration out of range"))?
            };
            let fraction = fraction_nanos(frac_digits, scale);

            total = total
                .checked_add(whole)
                .and_then(|t| t.checked_add(fraction))
                .ok_or_else(|| fail("duration out of range"))?;
        }

        let nanos = if negative {
            0i64.checked_sub_unsigned(total)
        } else {
            i64::try_from(total).ok()
        };
        nanos
            .map(Self::from_nanos)
            .ok_or_else(|| fail("duration out of range"))
    }
}

/// Nanoseconds contributed by the fractional digits of one number
fn fraction_nanos(digits: &str, scale: u64) -> u64 {
    let mut value: u64 = 0;
    let mut divisor: u64 = 1;
    for d in digits.bytes() {
        // Digits beyond nanosecond precision cannot change the result
        if divisor > u64::MAX / 10 || value > u64::MAX / 10 {
            break;
        }
        value = value * 10 + u64::from(d - b'0');
        divisor *= 10;
    }
    (value as f64 * (scale as f64 / divisor as f64)) as u64
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nanos == 0 {
            return f.write_str("0s");
        }
        let sign = if self.nanos < 0 { "-" } else { "" };
        let abs = self.nanos.unsigned_abs();
        let hours = abs / NANOS_PER_HOUR;
        let minutes = abs % NANOS_PER_HOUR / NANOS_PER_MINUTE;
        let sub_minute = abs % NANOS_PER_MINUTE;
        let seconds = sub_minute / NANOS_PER_SECOND;
        let sub_second = sub_minute % NANOS_PER_SECOND;

        write!(f, "{}", sign)?;
        if hours > 0 {
            write!(f, "{}h{}m", hours, minutes)?;
        } else if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if sub_second == 0 {
            write!(f, "{}s", seconds)
        } else {
            let frac = format!("{:09}", sub_second);
            write!(f, "{}.{}s", seconds, frac.trim_end_matches('0'))
        }
    }
}

impl std::str::FromStr for TimeSpan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_hours_minutes() {
        assert_eq!(TimeSpan::parse("3h00m").unwrap(), TimeSpan::from_hours(3));
        assert_eq!(TimeSpan::parse("0h50m").unwrap(), TimeSpan::from_minutes(50));
        assert_eq!(TimeSpan::parse("1h30m").unwrap(), TimeSpan::from_minutes(90));
    }

    #[test]
    fn test_fractional_and_small_units() {
        assert_eq!(TimeSpan::parse("1.5h").unwrap(), TimeSpan::from_minutes(90));
        assert_eq!(TimeSpan::parse(".5m").unwrap().as_nanos(), 30 * NANOS_PER_SECOND as i64);
        assert_eq!(TimeSpan::parse("1m30s").unwrap().as_nanos(), 90 * NANOS_PER_SECOND as i64);
        assert_eq!(TimeSpan::parse("250ms").unwrap().as_nanos(), 250 * NANOS_PER_MILLI as i64);
        assert_eq!(TimeSpan::parse("3µs").unwrap().as_nanos(), 3_000);
        assert_eq!(TimeSpan::parse("7ns").unwrap().as_nanos(), 7);
    }

    #[test]
    fn test_zero_and_signs() {
        assert_eq!(TimeSpan::parse("0").unwrap(), TimeSpan::ZERO);
        assert_eq!(TimeSpan::parse("0h0m").unwrap(), TimeSpan::ZERO);
        assert_eq!(TimeSpan::parse("-30m").unwrap(), TimeSpan::from_minutes(-30));
        assert_eq!(TimeSpan::parse("+2h").unwrap(), TimeSpan::from_hours(2));
        assert!(!TimeSpan::parse("0h00m").unwrap().is_positive());
        assert!(!TimeSpan::parse("-1h").unwrap().is_positive());
    }

    #[test]
    fn test_malformed_durations() {
        for input in ["", "-", "3", "3x", "h", "1h30", "ч", "1 h", "1h 30m", "."] {
            match TimeSpan::parse(input) {
                Err(Error::Parse { field, .. }) => assert_eq!(field, "duration"),
                other => panic!("expected parse error for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_overflow_rejected() {
        assert!(TimeSpan::parse("9999999999999h").is_err());
        assert!(TimeSpan::parse("99999999999999999999ns").is_err());
    }

    #[test]
    fn test_as_hours() {
        assert_eq!(TimeSpan::from_hours(3).as_hours(), 3.0);
        assert!((TimeSpan::from_minutes(50).as_hours() - 50.0 / 60.0).abs() < 1e-12);
        assert_eq!(TimeSpan::from_minutes(-90).as_hours(), -1.5);
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeSpan::from_hours(3).to_string(), "3h0m0s");
        assert_eq!(TimeSpan::from_minutes(50).to_string(), "50m0s");
        assert_eq!(TimeSpan::from_minutes(-30).to_string(), "-30m0s");
        assert_eq!(TimeSpan::parse("1.5s").unwrap().to_string(), "1.5s");
        assert_eq!(TimeSpan::ZERO.to_string(), "0s");
    }
}
