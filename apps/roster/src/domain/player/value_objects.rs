use rust_decimal::Decimal;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use crate::domain::errors::{DomainError, DomainResult};

/// Player age value object
///
/// # Invariants
/// - Always greater than zero
/// - No upper bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Age(u64);

impl Age {
    /// Creates an Age, rejecting zero
    pub fn new(years: u64) -> DomainResult<Self> {
        if years == 0 {
            return Err(DomainError::InvalidAge);
        }
        Ok(Age(years))
    }

    /// Parses raw user input into an Age
    ///
    /// # Returns
    /// * `Err(InvalidAgeInput)` - input is not an integer
    /// * `Err(InvalidAge)` - integer is zero or negative
    /// * `Err(AgeOutOfRange)` - integer does not fit in 64 bits
    ///
    /// # Example
    /// ```
    /// use team_roster::domain::player::Age;
    ///
    /// assert_eq!(Age::parse(" 27 ").unwrap().years(), 27);
    /// assert_eq!(Age::parse("4294967296").unwrap().years(), 4_294_967_296);
    /// assert!(Age::parse("-3").is_err());
    /// assert!(Age::parse("twenty").is_err());
    /// ```
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        let years: i128 = trimmed.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow => DomainError::AgeOutOfRange(trimmed.to_string()),
                IntErrorKind::NegOverflow => DomainError::InvalidAge,
                _ => DomainError::InvalidAgeInput(trimmed.to_string()),
            }
        })?;

        if years <= 0 {
            return Err(DomainError::InvalidAge);
        }

        u64::try_from(years)
            .map(Age)
            .map_err(|_| DomainError::AgeOutOfRange(trimmed.to_string()))
    }

    pub fn years(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a stat increment from raw user input
///
/// Accepts plain decimals and scientific notation. Negative values are
/// rejected so accumulators never decrease. Numbers too large or too
/// precise to hold exactly are reported as out of range rather than as
/// non-numeric.
pub fn parse_stat_value(raw: &str) -> DomainResult<Decimal> {
    let trimmed = raw.trim();
    let value = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(value) => value,
        Err(_) => return Err(classify_unrepresentable(trimmed)),
    };

    if value < Decimal::ZERO {
        return Err(DomainError::NegativeStatValue(trimmed.to_string()));
    }

    Ok(value)
}

/// Explains why text that `Decimal` refused is not a usable stat value
fn classify_unrepresentable(trimmed: &str) -> DomainError {
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() && number < 0.0 => {
            DomainError::NegativeStatValue(trimmed.to_string())
        }
        Ok(number) if number.is_finite() => DomainError::StatValueOutOfRange(trimmed.to_string()),
        _ => DomainError::InvalidStatValue(trimmed.to_string()),
    }
}

/// Accumulated per-player statistics, kept in first-recorded order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatLine {
    entries: Vec<(String, Decimal)>,
}

impl StatLine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` to the named accumulator, starting missing stats at zero
    ///
    /// Returns the new total.
    pub fn add(&mut self, stat: &str, value: Decimal) -> DomainResult<Decimal> {
        let stat = stat.trim();
        if stat.is_empty() {
            return Err(DomainError::EmptyStatName);
        }
        if value < Decimal::ZERO {
            return Err(DomainError::NegativeStatValue(value.to_string()));
        }

        let index = match self.entries.iter().position(|(name, _)| name == stat) {
            Some(index) => index,
            None => {
                self.entries.push((stat.to_string(), Decimal::ZERO));
                self.entries.len() - 1
            }
        };

        let entry = &mut self.entries[index].1;
        let total = entry
            .checked_add(value)
            .ok_or_else(|| DomainError::StatValueOutOfRange(value.to_string()))?;
        *entry = total;

        Ok(total)
    }

    /// Returns the accumulator for a stat, if it has ever been recorded
    pub fn get(&self, stat: &str) -> Option<Decimal> {
        let stat = stat.trim();
        self.entries
            .iter()
            .find(|(name, _)| name == stat)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for StatLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "No stats yet");
        }

        let joined = self
            .entries
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value.normalize()))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}", joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_rejects_zero() {
        assert_eq!(Age::new(0), Err(DomainError::InvalidAge));
        assert_eq!(Age::new(18).unwrap().years(), 18);
    }

    #[test]
    fn age_parse_distinguishes_non_numeric_from_non_positive() {
        assert!(matches!(
            Age::parse("abc"),
            Err(DomainError::InvalidAgeInput(_))
        ));
        assert!(matches!(Age::parse("2.5"), Err(DomainError::InvalidAgeInput(_))));
        assert_eq!(Age::parse("0"), Err(DomainError::InvalidAge));
        assert_eq!(Age::parse("-12"), Err(DomainError::InvalidAge));
    }

    #[test]
    fn age_has_no_upper_bound_within_range() {
        assert_eq!(Age::parse("150").unwrap().years(), 150);
        assert_eq!(Age::parse("4294967296").unwrap().years(), 4_294_967_296);
        assert_eq!(Age::parse("18446744073709551615").unwrap().years(), u64::MAX);
    }

    #[test]
    fn age_beyond_storage_is_out_of_range_not_non_numeric() {
        assert!(matches!(
            Age::parse("18446744073709551616"),
            Err(DomainError::AgeOutOfRange(_))
        ));
        assert!(matches!(
            Age::parse("999999999999999999999999999999999999999999"),
            Err(DomainError::AgeOutOfRange(_))
        ));
        assert_eq!(
            Age::parse("-999999999999999999999999999999999999999999"),
            Err(DomainError::InvalidAge)
        );
    }

    #[test]
    fn stat_value_accepts_decimals_and_scientific() {
        assert_eq!(parse_stat_value("5").unwrap(), Decimal::from(5));
        assert_eq!(parse_stat_value(" 2.5 ").unwrap(), Decimal::new(25, 1));
        assert_eq!(parse_stat_value("1e2").unwrap(), Decimal::from(100));
    }

    #[test]
    fn stat_value_rejects_non_numeric() {
        assert!(matches!(
            parse_stat_value("lots"),
            Err(DomainError::InvalidStatValue(_))
        ));
        assert!(matches!(
            parse_stat_value(""),
            Err(DomainError::InvalidStatValue(_))
        ));
    }

    #[test]
    fn stat_value_beyond_decimal_range_is_out_of_range() {
        for raw in ["1e30", "1e-30", "99999999999999999999999999999999"] {
            assert_eq!(
                parse_stat_value(raw),
                Err(DomainError::StatValueOutOfRange(raw.to_string())),
                "{} is numeric",
                raw
            );
        }
    }

    #[test]
    fn stat_value_rejects_non_finite_as_non_numeric() {
        assert!(matches!(
            parse_stat_value("inf"),
            Err(DomainError::InvalidStatValue(_))
        ));
        assert!(matches!(
            parse_stat_value("NaN"),
            Err(DomainError::InvalidStatValue(_))
        ));
    }

    #[test]
    fn huge_negative_stat_value_is_negative() {
        assert!(matches!(
            parse_stat_value("-1e30"),
            Err(DomainError::NegativeStatValue(_))
        ));
    }

    #[test]
    fn stat_line_overflow_is_out_of_range_and_keeps_total() {
        let mut stats = StatLine::new();
        stats.add("G", Decimal::MAX).unwrap();

        let result = stats.add("G", Decimal::ONE);

        assert_eq!(result, Err(DomainError::StatValueOutOfRange("1".to_string())));
        assert_eq!(stats.get("G"), Some(Decimal::MAX));
    }

    #[test]
    fn stat_value_rejects_negative() {
        assert!(matches!(
            parse_stat_value("-1"),
            Err(DomainError::NegativeStatValue(_))
        ));
    }

    #[test]
    fn stat_line_accumulates() {
        let mut stats = StatLine::new();
        stats.add("Goals", Decimal::from(5)).unwrap();
        let total = stats.add("Goals", Decimal::from(3)).unwrap();

        assert_eq!(total, Decimal::from(8));
        assert_eq!(stats.get("Goals"), Some(Decimal::from(8)));
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn stat_line_rejects_negative_without_mutation() {
        let mut stats = StatLine::new();
        stats.add("Assists", Decimal::from(2)).unwrap();

        let result = stats.add("Assists", Decimal::from(-4));

        assert!(result.is_err());
        assert_eq!(stats.get("Assists"), Some(Decimal::from(2)));
    }

    #[test]
    fn stat_line_rejects_blank_stat_name() {
        let mut stats = StatLine::new();
        assert_eq!(
            stats.add("  ", Decimal::ONE),
            Err(DomainError::EmptyStatName)
        );
        assert!(stats.is_empty());
    }

    #[test]
    fn stat_line_display_keeps_insertion_order() {
        let mut stats = StatLine::new();
        stats.add("Goals", Decimal::from(2)).unwrap();
        stats.add("Assists", Decimal::new(15, 1)).unwrap();

        assert_eq!(stats.to_string(), "Goals: 2, Assists: 1.5");
    }

    #[test]
    fn empty_stat_line_display() {
        assert_eq!(StatLine::new().to_string(), "No stats yet");
    }
}
