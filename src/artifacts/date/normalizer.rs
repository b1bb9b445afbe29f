use crate::artifacts::date::{CVS_DATE_FORMATS, CVS_ZONE_SUFFIX_REGEX};
use anyhow::Context;
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeDelta};
use regex::Regex;

/// What to do with the numeric zone suffix of a CVS date.
///
/// Early versions of the tool shifted the wall-clock time by the suffix and
/// then by a correction meant to cancel the process time zone. Later versions
/// dropped the suffix and kept the wall-clock time. Both are kept so a report
/// can be reproduced under either convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimezoneConvention {
    /// Drop the suffix; the remaining text is already local time
    #[default]
    StripOffset,
    /// Shift by the suffix (in seconds) plus `correction_seconds`
    ApplyOffset { correction_seconds: i64 },
}

#[cfg(test)]
impl TimezoneConvention {
    fn apply_with_default_correction() -> Self {
        TimezoneConvention::ApplyOffset {
            correction_seconds: crate::artifacts::date::DEFAULT_TZ_CORRECTION_SECONDS,
        }
    }
}

/// The zone Subversion instants are converted into before reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayZone {
    /// The process time zone (honours `TZ`)
    #[default]
    Local,
    Fixed(FixedOffset),
}

impl DisplayZone {
    /// Parse `local`, `utc` or a numeric offset such as `+0530`.
    pub fn try_parse(value: &str) -> anyhow::Result<Self> {
        if value.eq_ignore_ascii_case("local") {
            return Ok(DisplayZone::Local);
        }
        if value.eq_ignore_ascii_case("utc") || value == "Z" {
            return Ok(DisplayZone::Fixed(FixedOffset::east_opt(0).context(
                "zero offset is always representable",
            )?));
        }

        let seconds = parse_numeric_offset(value)?;
        let offset = FixedOffset::east_opt(seconds)
            .ok_or_else(|| anyhow::anyhow!("offset out of range: {}", value))?;

        Ok(DisplayZone::Fixed(offset))
    }

    fn localize(&self, instant: DateTime<FixedOffset>) -> NaiveDateTime {
        match self {
            DisplayZone::Local => instant.with_timezone(&chrono::Local).naive_local(),
            DisplayZone::Fixed(offset) => instant.with_timezone(offset).naive_local(),
        }
    }
}

/// Convert a signed four-digit offset into seconds east of UTC.
///
/// `-0500` becomes `-18000`.
pub fn parse_numeric_offset(value: &str) -> anyhow::Result<i32> {
    let (sign, digits) = match value.split_at_checked(1) {
        Some(("+", digits)) => (1, digits),
        Some(("-", digits)) => (-1, digits),
        _ => anyhow::bail!("numeric offset must start with '+' or '-': {}", value),
    };

    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        anyhow::bail!("numeric offset must have four digits: {}", value);
    }

    let hhmm: i32 = digits
        .parse()
        .with_context(|| format!("invalid numeric offset: {value}"))?;

    Ok(sign * ((hhmm / 100) * 60 + hhmm % 100) * 60)
}

/// Turns CVS and Subversion date text into comparable local timestamps.
#[derive(Debug, Clone)]
pub struct DateNormalizer {
    cvs_convention: TimezoneConvention,
    display_zone: DisplayZone,
    zone_suffix: Regex,
}

impl DateNormalizer {
    pub fn new(
        cvs_convention: TimezoneConvention,
        display_zone: DisplayZone,
    ) -> anyhow::Result<Self> {
        let zone_suffix = Regex::new(CVS_ZONE_SUFFIX_REGEX)
            .with_context(|| format!("invalid zone suffix regex: {CVS_ZONE_SUFFIX_REGEX}"))?;

        Ok(DateNormalizer {
            cvs_convention,
            display_zone,
            zone_suffix,
        })
    }

    /// Normalize a CVS date such as `2009-03-14 12:34:56 -0500`.
    pub fn normalize_cvs(&self, text: &str) -> anyhow::Result<NaiveDateTime> {
        let text = text.trim();

        let (wall_clock, offset_seconds) = match self.zone_suffix.captures(text) {
            Some(captures) => {
                let suffix_start = captures.get(0).map_or(text.len(), |m| m.start());
                let offset = parse_numeric_offset(&format!("{}{}", &captures[1], &captures[2]))?;
                (&text[..suffix_start], Some(offset))
            }
            None => (text, None),
        };

        let parsed = CVS_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(wall_clock, format).ok())
            .with_context(|| format!("unrecognized CVS date '{text}'"))?;

        match (self.cvs_convention, offset_seconds) {
            (TimezoneConvention::ApplyOffset { correction_seconds }, Some(offset)) => {
                let shift = TimeDelta::try_seconds(i64::from(offset) + correction_seconds)
                    .with_context(|| format!("zone shift out of range for '{text}'"))?;
                parsed
                    .checked_add_signed(shift)
                    .with_context(|| format!("shifted date out of range for '{text}'"))
            }
            _ => Ok(parsed),
        }
    }

    /// Normalize a Subversion ISO-8601 date such as
    /// `2009-03-19T02:47:39.123456Z` into the display zone.
    pub fn normalize_svn(&self, text: &str) -> anyhow::Result<NaiveDateTime> {
        let text = text.trim();

        let instant = DateTime::parse_from_rfc3339(text)
            .or_else(|_| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                    .map(|naive| naive.and_utc().fixed_offset())
            })
            .with_context(|| format!("unrecognized Subversion date '{text}'"))?;

        Ok(self.display_zone.localize(instant))
    }
}
