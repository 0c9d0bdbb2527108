//! Conversion from Unix timestamps to calendar date-times.

use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};

use crate::error::{SessionsError, SessionsResult};

/// A minute-precision UTC date-time, as written into DTSTART/DTEND.
///
/// Fields are kept as plain numbers so a tuple that doesn't name a real
/// instant (e.g. month 13) can exist and is rejected at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IcsDateTime {
    pub year: i32,
    /// 1-indexed
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl IcsDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        IcsDateTime {
            year,
            month,
            day,
            hour,
            minute,
        }
    }

    /// The instant this tuple names, or `None` if it isn't a valid date-time
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        Utc.with_ymd_and_hms(self.year, self.month, self.day, self.hour, self.minute, 0)
            .single()
    }
}

impl fmt::Display for IcsDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02} UTC",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl From<DateTime<Utc>> for IcsDateTime {
    fn from(dt: DateTime<Utc>) -> Self {
        IcsDateTime::new(dt.year(), dt.month(), dt.day(), dt.hour(), dt.minute())
    }
}

/// Convert a Unix timestamp (seconds, UTC) to a calendar date-time.
///
/// Seconds are dropped.
pub fn to_ics_datetime(unix_secs: i64) -> SessionsResult<IcsDateTime> {
    DateTime::from_timestamp(unix_secs, 0)
        .map(IcsDateTime::from)
        .ok_or(SessionsError::InvalidTimestamp(unix_secs))
}
