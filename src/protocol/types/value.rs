//! Decoded temporal values.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use std::fmt;

/// Broken-down date and time fields as stored in the row image.
///
/// Unlike chrono's types this allows zero month and day (YEAR values, the
/// date part of TIME values) and hours beyond 23 (TIME durations), so it can
/// hold whatever the server wrote. All values are interpreted as UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DateTimeParts {
    pub year: u32,
    pub month: u8,
    pub day: u8,
    pub hour: u32,
    pub minute: u8,
    pub second: u8,
    /// Fractional seconds in microseconds. Signed because the fractional
    /// bytes are read as a signed big-endian integer.
    pub microsecond: i32,
    /// Set when a negative fraction outweighed the whole time fields; the
    /// time fields then hold the magnitude of a negative duration.
    pub negative: bool,
}

impl DateTimeParts {
    /// Date-only value.
    pub fn date(year: u32, month: u8, day: u8) -> Self {
        Self {
            year,
            month,
            day,
            ..Self::default()
        }
    }

    /// Time-of-day value with year, month and day left at zero.
    pub fn time(hour: u32, minute: u8, second: u8, microsecond: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
            ..Self::default()
        }
    }

    /// Set the time-of-day fields.
    pub fn with_time(self, hour: u32, minute: u8, second: u8, microsecond: i32) -> Self {
        Self {
            hour,
            minute,
            second,
            microsecond,
            ..self
        }
    }

    /// Convert to a chrono `NaiveDateTime`.
    ///
    /// Returns `None` when the fields do not form a valid calendar date and
    /// time of day (zero month or day, hour beyond 23, negative fraction).
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        if self.negative {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(
            i32::try_from(self.year).ok()?,
            u32::from(self.month),
            u32::from(self.day),
        )?;
        let time = NaiveTime::from_hms_micro_opt(
            self.hour,
            u32::from(self.minute),
            u32::from(self.second),
            u32::try_from(self.microsecond).ok()?,
        )?;
        Some(NaiveDateTime::new(date, time))
    }

    /// Fold a negative fraction into the whole seconds.
    ///
    /// `12:30:00` with `-10000` microseconds becomes `12:29:59.990000`. Valid
    /// calendar datetimes borrow through the date as well; everything else
    /// borrows within the time fields. If the fraction outweighs the time
    /// fields the result is a negative duration with `negative` set.
    pub fn carry_fraction(self) -> Self {
        if self.microsecond >= 0 {
            return self;
        }
        let whole = Self {
            microsecond: 0,
            ..self
        };
        let shifted = whole
            .to_naive()
            .and_then(|naive| {
                naive.checked_add_signed(Duration::microseconds(i64::from(self.microsecond)))
            })
            .and_then(Self::from_naive);
        if let Some(parts) = shifted {
            return parts;
        }

        let micros = (i64::from(self.hour) * 3600
            + i64::from(self.minute) * 60
            + i64::from(self.second))
            * 1_000_000
            + i64::from(self.microsecond);
        let magnitude = micros.unsigned_abs();
        let secs = magnitude / 1_000_000;
        Self {
            hour: (secs / 3600) as u32,
            minute: (secs / 60 % 60) as u8,
            second: (secs % 60) as u8,
            microsecond: (magnitude % 1_000_000) as i32,
            negative: micros < 0,
            ..self
        }
    }

    fn from_naive(naive: NaiveDateTime) -> Option<Self> {
        Some(Self {
            year: u32::try_from(naive.year()).ok()?,
            month: naive.month() as u8,
            day: naive.day() as u8,
            hour: naive.hour(),
            minute: naive.minute() as u8,
            second: naive.second() as u8,
            microsecond: (naive.nanosecond() / 1_000) as i32,
            negative: false,
        })
    }

    fn fmt_date(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    fn fmt_time(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond.unsigned_abs())?;
        }
        Ok(())
    }
}

/// A single decoded temporal column value.
///
/// The variant records how the value should be presented; the zero
/// sentinels stand for the all-zero placeholder the server writes for
/// missing DATE and TIME values and are never real calendar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalValue {
    /// YEAR value; only `year` is set.
    Year(DateTimeParts),
    /// DATE value.
    Date(DateTimeParts),
    /// TIME or TIME2 value; the date fields are zero.
    Time(DateTimeParts),
    /// DATETIME or DATETIME2 value.
    DateTime(DateTimeParts),
    /// TIMESTAMP or TIMESTAMP2 instant.
    Timestamp(chrono::DateTime<Utc>),
    /// The `0000-00-00` DATE placeholder.
    ZeroDate,
    /// The `00:00:00` TIME placeholder.
    ZeroTime,
}

impl TemporalValue {
    /// Check if the value is one of the zero placeholders.
    pub fn is_zero(&self) -> bool {
        matches!(self, TemporalValue::ZeroDate | TemporalValue::ZeroTime)
    }

    /// Try to get the broken-down fields.
    pub fn as_parts(&self) -> Option<&DateTimeParts> {
        match self {
            TemporalValue::Year(p)
            | TemporalValue::Date(p)
            | TemporalValue::Time(p)
            | TemporalValue::DateTime(p) => Some(p),
            _ => None,
        }
    }

    /// Try to get the value as a UTC instant.
    pub fn as_timestamp(&self) -> Option<chrono::DateTime<Utc>> {
        match self {
            TemporalValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Convert to a chrono `NaiveDateTime` where the value is a valid calendar datetime.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        match self {
            TemporalValue::Timestamp(ts) => Some(ts.naive_utc()),
            TemporalValue::ZeroDate | TemporalValue::ZeroTime => None,
            _ => self.as_parts()?.to_naive(),
        }
    }
}

impl fmt::Display for TemporalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemporalValue::Year(p) => write!(f, "{:04}", p.year),
            TemporalValue::Date(p) => p.fmt_date(f),
            TemporalValue::Time(p) => p.fmt_time(f),
            TemporalValue::DateTime(p) => {
                p.fmt_date(f)?;
                write!(f, " ")?;
                p.fmt_time(f)
            }
            TemporalValue::Timestamp(ts) => {
                if ts.timestamp_subsec_micros() > 0 {
                    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S%.6f"))
                } else {
                    write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S"))
                }
            }
            TemporalValue::ZeroDate => write!(f, "0000-00-00"),
            TemporalValue::ZeroTime => write!(f, "00:00:00"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_zero_sentinels() {
        assert!(TemporalValue::ZeroDate.is_zero());
        assert!(TemporalValue::ZeroTime.is_zero());
        assert_eq!(TemporalValue::ZeroDate.to_string(), "0000-00-00");
        assert_eq!(TemporalValue::ZeroTime.to_string(), "00:00:00");
        assert_eq!(TemporalValue::ZeroDate.as_parts(), None);
        assert_eq!(TemporalValue::ZeroTime.to_naive(), None);
    }

    #[test]
    fn test_display_date_and_time() {
        let date = TemporalValue::Date(DateTimeParts::date(1991, 2, 17));
        assert_eq!(date.to_string(), "1991-02-17");

        let time = TemporalValue::Time(DateTimeParts::time(838, 59, 59, 0));
        assert_eq!(time.to_string(), "838:59:59");

        let frac = TemporalValue::Time(DateTimeParts::time(23, 59, 59, 1));
        assert_eq!(frac.to_string(), "23:59:59.000001");

        let year = TemporalValue::Year(DateTimeParts::date(2155, 0, 0));
        assert_eq!(year.to_string(), "2155");
    }

    #[test]
    fn test_display_datetime() {
        let dt = TemporalValue::DateTime(
            DateTimeParts::date(1999, 12, 31).with_time(23, 59, 59, 0),
        );
        assert_eq!(dt.to_string(), "1999-12-31 23:59:59");
    }

    #[test]
    fn test_display_timestamp() {
        let ts = Utc.timestamp_opt(1_600_000_000, 50_000_000).unwrap();
        let val = TemporalValue::Timestamp(ts);
        assert_eq!(val.to_string(), "2020-09-13 12:26:40.050000");
        assert_eq!(val.as_timestamp(), Some(ts));

        let whole = TemporalValue::Timestamp(Utc.timestamp_opt(0, 0).unwrap());
        assert_eq!(whole.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_to_naive() {
        let dt = DateTimeParts::date(2020, 6, 15).with_time(12, 30, 0, 250);
        let naive = dt.to_naive().unwrap();
        assert_eq!(naive.year(), 2020);
        assert_eq!(naive.month(), 6);
        assert_eq!(naive.day(), 15);
        assert_eq!(naive.hour(), 12);
        assert_eq!(naive.minute(), 30);
        assert_eq!(naive.nanosecond(), 250_000);
    }

    #[test]
    fn test_carry_fraction_borrows_from_seconds() {
        let dt = DateTimeParts::date(2020, 6, 15)
            .with_time(12, 30, 0, -10_000)
            .carry_fraction();
        assert_eq!(dt, DateTimeParts::date(2020, 6, 15).with_time(12, 29, 59, 990_000));
        assert!(dt.to_naive().is_some());
    }

    #[test]
    fn test_carry_fraction_crosses_midnight() {
        let dt = DateTimeParts::date(2021, 1, 1)
            .with_time(0, 0, 0, -1)
            .carry_fraction();
        assert_eq!(
            dt,
            DateTimeParts::date(2020, 12, 31).with_time(23, 59, 59, 999_999)
        );
    }

    #[test]
    fn test_carry_fraction_time_only() {
        let t = DateTimeParts::time(1023, 0, 0, -500_000).carry_fraction();
        assert_eq!(t, DateTimeParts::time(1022, 59, 59, 500_000));
        assert_eq!(TemporalValue::Time(t).to_string(), "1022:59:59.500000");
    }

    #[test]
    fn test_carry_fraction_keeps_non_negative() {
        let t = DateTimeParts::time(1, 2, 3, 4);
        assert_eq!(t.carry_fraction(), t);
    }

    #[test]
    fn test_carry_fraction_past_zero_is_negative_duration() {
        let t = DateTimeParts::time(0, 0, 0, -10_000).carry_fraction();
        assert!(t.negative);
        assert_eq!(t.microsecond, 10_000);
        assert_eq!(TemporalValue::Time(t).to_string(), "-00:00:00.010000");

        // One byte at precision 2 can reach -1.28s.
        let t = DateTimeParts::time(0, 0, 1, -1_280_000).carry_fraction();
        assert!(t.negative);
        assert_eq!(TemporalValue::Time(t).to_string(), "-00:00:00.280000");
        assert_eq!(t.to_naive(), None);
    }

    #[test]
    fn test_to_naive_rejects_non_calendar_values() {
        assert_eq!(DateTimeParts::date(1900, 0, 0).to_naive(), None);
        assert_eq!(DateTimeParts::time(23, 0, 0, 0).to_naive(), None);
        assert_eq!(
            DateTimeParts::date(2020, 1, 1).with_time(24, 0, 0, 0).to_naive(),
            None
        );
        assert_eq!(
            DateTimeParts::date(2020, 1, 1).with_time(0, 0, 0, -1).to_naive(),
            None
        );
    }
}
