//! Statistics announcement rules: release date precision, display dates,
//! release status, and the validations shared by create/update/cancel.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::FieldErrors;
use crate::types::{DbId, Timestamp};

/// Publication type id for National Statistics.
pub const PUBLICATION_TYPE_NATIONAL_STATISTICS: i16 = 5;

/// Publication type id for Official Statistics.
pub const PUBLICATION_TYPE_OFFICIAL_STATISTICS: i16 = 15;

/// Publication types an announcement may be made for.
pub const STATISTICAL_PUBLICATION_TYPES: &[i16] = &[
    PUBLICATION_TYPE_OFFICIAL_STATISTICS,
    PUBLICATION_TYPE_NATIONAL_STATISTICS,
];

/// Default page size for the admin index.
pub const DEFAULT_PER_PAGE: i64 = 15;

/// Upper bound on the admin index page size.
pub const MAX_PER_PAGE: i64 = 100;

const BLANK: &str = "can't be blank";

/// How precisely a release date is known.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseDatePrecision {
    Exact = 0,
    OneMonth = 1,
    TwoMonth = 2,
}

impl ReleaseDatePrecision {
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            0 => Some(ReleaseDatePrecision::Exact),
            1 => Some(ReleaseDatePrecision::OneMonth),
            2 => Some(ReleaseDatePrecision::TwoMonth),
            _ => None,
        }
    }

    pub fn id(self) -> i16 {
        self as i16
    }
}

/// Public status of an announcement's release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseStatus {
    Cancelled,
    Confirmed,
    Provisional,
}

/// Derive the release status from the cancellation and confirmation flags.
pub fn release_status(cancelled: bool, confirmed: bool) -> ReleaseStatus {
    if cancelled {
        ReleaseStatus::Cancelled
    } else if confirmed {
        ReleaseStatus::Confirmed
    } else {
        ReleaseStatus::Provisional
    }
}

/// Human-readable release date at the given precision.
///
/// - exact: `14 May 2026 9:30am`
/// - one month: `May 2026`
/// - two month: `May to June 2026`, or `December 2026 to January 2027`
///   across a year boundary
pub fn display_date(release_date: Timestamp, precision: ReleaseDatePrecision) -> String {
    match precision {
        ReleaseDatePrecision::Exact => release_date.format("%-d %B %Y %-I:%M%P").to_string(),
        ReleaseDatePrecision::OneMonth => release_date.format("%B %Y").to_string(),
        ReleaseDatePrecision::TwoMonth => {
            let (year, month) = (release_date.year(), release_date.month());
            let (next_year, next_month) = if month == 12 {
                (year + 1, 1)
            } else {
                (year, month + 1)
            };
            let first = month_name(year, month);
            let second = month_name(next_year, next_month);
            if year == next_year {
                format!("{first} to {second} {year}")
            } else {
                format!("{first} {year} to {second} {next_year}")
            }
        }
    }
}

fn month_name(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_default()
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Attributes checked when an announcement is saved.
///
/// `None` means "not supplied"; for updates, unsupplied attributes keep their
/// stored value and the caller passes the merged view.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnouncementAttributes<'a> {
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub organisation_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub publication_type_id: Option<i16>,
}

/// Validate the top-level announcement attributes.
pub fn validate_announcement(attrs: &AnnouncementAttributes<'_>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(attrs.title) {
        errors.add("title", BLANK);
    }
    if is_blank(attrs.summary) {
        errors.add("summary", BLANK);
    }
    if attrs.organisation_id.is_none() {
        errors.add("organisation_id", BLANK);
    }
    if attrs.topic_id.is_none() {
        errors.add("topic_id", BLANK);
    }
    match attrs.publication_type_id {
        None => errors.add("publication_type_id", BLANK),
        Some(id) if !STATISTICAL_PUBLICATION_TYPES.contains(&id) => {
            errors.add("publication_type_id", "must be a statistical publication type")
        }
        Some(_) => {}
    }
    errors
}

/// Validate a release date's precision and confirmation flag.
///
/// Errors are keyed under `current_release_date.*` to match the nested form.
pub fn validate_release_date(
    release_date: Option<Timestamp>,
    precision: Option<i16>,
    confirmed: bool,
) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if release_date.is_none() {
        errors.add("current_release_date.release_date", BLANK);
    }
    match precision.map(ReleaseDatePrecision::from_id) {
        None => errors.add("current_release_date.precision", BLANK),
        Some(None) => errors.add("current_release_date.precision", "is not a valid precision"),
        Some(Some(p)) => {
            if confirmed && p != ReleaseDatePrecision::Exact {
                errors.add(
                    "current_release_date.precision",
                    "must be exact for a confirmed release date",
                );
            }
        }
    }
    errors
}

/// Validate the reason given when cancelling an announcement.
pub fn validate_cancellation_reason(reason: Option<&str>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if is_blank(reason) {
        errors.add("cancellation_reason", BLANK);
    }
    errors
}
