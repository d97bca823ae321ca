//! Timezone and business-date resolution
//!
//! A location's "now" comes from the external time API when it answers
//! and from the runtime tz database otherwise. Resolution never fails:
//! an unknown zone degrades to UTC with offset 0 so a report is still
//! produced.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Offset, Timelike, Utc};
use chrono_tz::Tz;
use serde::Deserialize;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Hour before which a new calendar day still belongs to the previous
/// business day. The POS-side variants disagreed (3-5 AM); 4 AM is the
/// canonical cutoff, applied uniformly.
pub const BUSINESS_DAY_CUTOFF_HOUR: u32 = 4;

/// How the business clock was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockSource {
    /// External time API answered
    TimeApi,
    /// Runtime tz database fallback
    TzDatabase,
    /// Unknown zone; degraded UTC mode
    UtcFallback,
}

/// Resolved "now" for a location
#[derive(Debug, Clone)]
pub struct BusinessClock {
    /// Operating-day label after the early-morning cutoff rule
    pub business_date: NaiveDate,
    /// Signed minutes east of UTC (America/Denver in January = -420)
    pub offset_minutes: i32,
    /// Local wall-clock time in the location's zone
    pub local_now: NaiveDateTime,
    pub source: ClockSource,
}

/// Subset of the worldtimeapi payload the resolver consumes
#[derive(Debug, Deserialize)]
struct TimeApiResponse {
    datetime: String,
    raw_offset: i64,
    dst_offset: i64,
    dst: bool,
}

/// Business-date rule: before the cutoff, the previous local calendar
/// date is still the operating day.
pub fn business_date_for(local: NaiveDateTime) -> NaiveDate {
    if local.hour() < BUSINESS_DAY_CUTOFF_HOUR {
        (local - Duration::days(1)).date()
    } else {
        local.date()
    }
}

/// Resolve the business clock from the runtime tz database.
///
/// Unknown zones degrade to UTC with offset 0 instead of erroring; the
/// caller sees the degradation through [`ClockSource::UtcFallback`].
pub fn resolve_local(timezone: &str, now: DateTime<Utc>) -> BusinessClock {
    match timezone.parse::<Tz>() {
        Ok(tz) => {
            let local = now.with_timezone(&tz);
            BusinessClock {
                business_date: business_date_for(local.naive_local()),
                offset_minutes: local.offset().fix().local_minus_utc() / 60,
                local_now: local.naive_local(),
                source: ClockSource::TzDatabase,
            }
        }
        Err(_) => {
            tracing::warn!(timezone, "Unknown IANA timezone, degrading to UTC");
            BusinessClock {
                business_date: now.date_naive(),
                offset_minutes: 0,
                local_now: now.naive_utc(),
                source: ClockSource::UtcFallback,
            }
        }
    }
}

/// Business-clock resolver backed by a worldtimeapi-compatible service
#[derive(Clone)]
pub struct TimeService {
    http: reqwest::Client,
    base_url: String,
}

impl TimeService {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Resolve the current business clock for an IANA zone.
    ///
    /// Never fails: the time API is the primary source, the tz
    /// database the fallback, UTC the last resort.
    pub async fn resolve(&self, timezone: &str) -> BusinessClock {
        match self.query(timezone).await {
            Ok(clock) => clock,
            Err(err) => {
                tracing::warn!(
                    timezone,
                    error = %err,
                    "Time API unavailable, using tz database"
                );
                resolve_local(timezone, Utc::now())
            }
        }
    }

    async fn query(&self, timezone: &str) -> Result<BusinessClock, BoxError> {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), timezone);
        let payload: TimeApiResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let local = DateTime::parse_from_rfc3339(&payload.datetime)?.naive_local();
        let offset_seconds = payload.raw_offset
            + if payload.dst {
                payload.dst_offset
            } else {
                0
            };

        Ok(BusinessClock {
            business_date: business_date_for(local),
            // The POS API wants whole minutes
            offset_minutes: (offset_seconds as f64 / 60.0).round() as i32,
            local_now: local,
            source: ClockSource::TimeApi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_cutoff_sweep_all_hours() {
        let day = date(2024, 1, 15);
        for hour in 0..24 {
            let local = day.and_hms_opt(hour, 30, 0).unwrap();
            let expected = if hour < BUSINESS_DAY_CUTOFF_HOUR {
                date(2024, 1, 14)
            } else {
                day
            };
            assert_eq!(business_date_for(local), expected, "hour {hour}");
        }
    }

    #[test]
    fn test_cutoff_across_month_boundary() {
        let local = date(2024, 3, 1).and_hms_opt(2, 0, 0).unwrap();
        assert_eq!(business_date_for(local), date(2024, 2, 29));
    }

    #[test]
    fn test_resolve_local_standard_time() {
        // Denver in January: UTC-7, noon UTC = 05:00 local
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = resolve_local("America/Denver", now);
        assert_eq!(clock.source, ClockSource::TzDatabase);
        assert_eq!(clock.offset_minutes, -420);
        assert_eq!(clock.local_now.hour(), 5);
        assert_eq!(clock.business_date, date(2024, 1, 15));
    }

    #[test]
    fn test_resolve_local_daylight_time() {
        // Denver in July: UTC-6
        let now = Utc.with_ymd_and_hms(2024, 7, 15, 12, 0, 0).unwrap();
        let clock = resolve_local("America/Denver", now);
        assert_eq!(clock.offset_minutes, -360);
    }

    #[test]
    fn test_resolve_local_before_cutoff() {
        // 09:00 UTC = 02:00 in Denver -> previous business date
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        let clock = resolve_local("America/Denver", now);
        assert_eq!(clock.business_date, date(2024, 1, 14));
    }

    #[test]
    fn test_resolve_local_unknown_zone_degrades() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let clock = resolve_local("Not/AZone", now);
        assert_eq!(clock.source, ClockSource::UtcFallback);
        assert_eq!(clock.offset_minutes, 0);
        assert_eq!(clock.business_date, date(2024, 1, 15));
    }
}
