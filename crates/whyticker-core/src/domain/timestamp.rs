use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::ValidationError;

const SPACE_SEPARATED: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const T_SEPARATED: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

// en-US `{ year: numeric, month: short, day: numeric, hour: 2-digit, minute: 2-digit }`
const PUBLISHED_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[month repr:short] [day padding:none], [year], [hour repr:12]:[minute] [period]"
);
// en-US default time string
const TIME_LABEL_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:none]:[minute]:[second] [period]");

/// Wall-clock timestamp as sent by the analysis backend.
///
/// Accepts RFC3339 (news `publishedAt`) and `YYYY-MM-DD HH:MM:SS` (historical
/// series). Values are kept in the offset they were written in; nothing is
/// shifted into the local timezone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MarketTimestamp {
    raw: String,
    wall_clock: PrimitiveDateTime,
}

impl MarketTimestamp {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let wall_clock = OffsetDateTime::parse(trimmed, &Rfc3339)
            .map(|value| PrimitiveDateTime::new(value.date(), value.time()))
            .or_else(|_| PrimitiveDateTime::parse(trimmed, SPACE_SEPARATED))
            .or_else(|_| PrimitiveDateTime::parse(trimmed, T_SEPARATED))
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            })?;

        Ok(Self {
            raw: input.to_owned(),
            wall_clock,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub const fn wall_clock(&self) -> PrimitiveDateTime {
        self.wall_clock
    }

    /// `Jan 5, 2024, 02:30 PM`
    pub fn format_published(&self) -> String {
        self.wall_clock
            .format(PUBLISHED_FORMAT)
            .unwrap_or_else(|_| self.raw.clone())
    }

    /// `2:30:00 PM`
    pub fn format_time_label(&self) -> String {
        self.wall_clock
            .format(TIME_LABEL_FORMAT)
            .unwrap_or_else(|_| self.raw.clone())
    }
}

impl Display for MarketTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for MarketTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for MarketTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_series_format() {
        let ts = MarketTimestamp::parse("2024-03-08 14:30:00").expect("must parse");
        assert_eq!(ts.format_time_label(), "2:30:00 PM");
        assert_eq!(ts.as_str(), "2024-03-08 14:30:00");
    }

    #[test]
    fn parses_rfc3339_without_shifting_offset() {
        let ts = MarketTimestamp::parse("2024-01-05T09:05:00-05:00").expect("must parse");
        assert_eq!(ts.format_published(), "Jan 5, 2024, 09:05 AM");
    }

    #[test]
    fn formats_published_date_like_en_us() {
        let ts = MarketTimestamp::parse("2024-11-21T00:07:00Z").expect("must parse");
        assert_eq!(ts.format_published(), "Nov 21, 2024, 12:07 AM");
        assert_eq!(ts.format_time_label(), "12:07:00 AM");
    }

    #[test]
    fn rejects_garbage() {
        let err = MarketTimestamp::parse("yesterday").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }
}
