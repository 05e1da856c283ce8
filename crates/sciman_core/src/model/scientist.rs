//! Scientist domain record.
//!
//! # Responsibility
//! - Define the canonical roster record and its JSON wire shape.
//! - Keep decoding permissive field-by-field: datasets exported by the
//!   legacy app may omit fields or the identifier entirely.
//!
//! # Invariants
//! - `id` is stable and never reused for another record.
//! - `rankDate` serializes as `%Y-%m-%dT00:00:00` (midnight, no zone).
//! - Missing fields decode as empty string / `NaiveDate::default()`,
//!   never as a hard error; a malformed document still fails as a whole.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a roster record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ScientistId = Uuid;

/// One scientist's attribute set.
///
/// Wire field names follow the legacy dataset convention (`fullName`,
/// `rankDate`, ...). The `id` field is an addition over the legacy shape;
/// files that predate it load fine and get fresh identifiers assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scientist {
    /// Stable ID keying all store operations; generated when absent on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: ScientistId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub faculty: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub rank: String,
    /// Calendar date of the rank award; no time component in the model.
    #[serde(default, with = "rank_date_wire")]
    pub rank_date: NaiveDate,
}

impl Scientist {
    /// Creates a record with a generated stable ID.
    pub fn new(
        full_name: impl Into<String>,
        faculty: impl Into<String>,
        department: impl Into<String>,
        degree: impl Into<String>,
        rank: impl Into<String>,
        rank_date: NaiveDate,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4(),
            full_name,
            faculty,
            department,
            degree,
            rank,
            rank_date,
        )
    }

    /// Creates a record with a caller-provided stable ID.
    ///
    /// Used by edit sessions, which must write back under the identity of
    /// the record they started from.
    pub fn with_id(
        id: ScientistId,
        full_name: impl Into<String>,
        faculty: impl Into<String>,
        department: impl Into<String>,
        degree: impl Into<String>,
        rank: impl Into<String>,
        rank_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            faculty: faculty.into(),
            department: department.into(),
            degree: degree.into(),
            rank: rank.into(),
            rank_date,
        }
    }

    /// Grid display form of the rank date (`yyyy-MM-dd`).
    pub fn rank_date_display(&self) -> String {
        self.rank_date.format("%Y-%m-%d").to_string()
    }
}

mod rank_date_wire {
    //! `rankDate` wire codec: midnight ISO-8601 date-time, matching the
    //! legacy exporter. Bare `%Y-%m-%d` is accepted on input so hand-edited
    //! files keep loading; blank values fall back to the default date.

    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}T00:00:00", date.format("%Y-%m-%d")))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(NaiveDate::default());
        }
        // Take the calendar part only; any time-of-day suffix is ignored.
        let date_part = trimmed.split('T').next().unwrap_or(trimmed);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map_err(|err| de::Error::custom(format!("invalid rankDate `{raw}`: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use super::Scientist;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn new_generates_distinct_ids() {
        let a = Scientist::new("A", "F", "D", "PhD", "Docent", date(2020, 1, 1));
        let b = Scientist::new("B", "F", "D", "PhD", "Docent", date(2020, 1, 1));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rank_date_display_uses_dash_format() {
        let record = Scientist::new("A", "F", "D", "PhD", "Docent", date(2021, 3, 7));
        assert_eq!(record.rank_date_display(), "2021-03-07");
    }
}
