//! Core employee record types for hrnet.
//!
//! This module defines the record persisted by the store and read by the
//! listing pipeline. The JSON layout uses camelCase field names and plain
//! calendar dates so stored collections stay readable by other clients of
//! the same slot.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The department an employee belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    /// Sales.
    Sales,
    /// Marketing.
    Marketing,
    /// Engineering.
    Engineering,
    /// Human Resources.
    #[serde(rename = "Human Resources")]
    HumanResources,
    /// Legal.
    Legal,
}

impl Department {
    /// Every department, in the order the creation form offers them.
    pub const ALL: [Department; 5] = [
        Self::Sales,
        Self::Marketing,
        Self::Engineering,
        Self::HumanResources,
        Self::Legal,
    ];

    /// The label shown to users and stored in the record.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::HumanResources => "Human Resources",
            Self::Legal => "Legal",
        }
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::unknown_option("department", s))
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    /// Street line.
    pub street: String,
    /// City name.
    pub city: String,
    /// Two-letter state abbreviation, if one was selected.
    pub state: Option<String>,
    /// Zip code, digits only when entered through the form.
    pub zip_code: String,
}

/// One created employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth.
    #[serde(with = "calendar_date")]
    pub date_of_birth: NaiveDate,
    /// First day of employment.
    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,
    /// Home address.
    #[serde(default)]
    pub address: Address,
    /// Department, if one was selected.
    pub department: Option<Department>,
}

impl EmployeeRecord {
    /// Names of required fields that are blank.
    ///
    /// Saving does not enforce these; callers may surface them as warnings.
    #[must_use]
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.first_name.trim().is_empty() {
            missing.push("first name");
        }
        if self.last_name.trim().is_empty() {
            missing.push("last name");
        }
        missing
    }

    /// The employee's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Serde adapter for calendar dates.
///
/// Writes `YYYY-MM-DD`. Reads either that form or an RFC 3339 timestamp.
/// A timestamp with a non-zero offset keeps the calendar date in that offset;
/// a UTC timestamp is read as the local calendar date, the way browser
/// date pickers serialize local midnight.
pub mod calendar_date {
    use chrono::{DateTime, Local, NaiveDate};
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    /// Serialize a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error if writing fails.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    /// Deserialize a date from `YYYY-MM-DD` or an RFC 3339 timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a string in either format.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {raw}")))
    }

    /// Parse a date in either accepted format.
    #[must_use]
    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw).ok().map(|dt| {
                if dt.offset().local_minus_utc() == 0 {
                    dt.with_timezone(&Local).date_naive()
                } else {
                    dt.date_naive()
                }
            })
        })
    }
}
