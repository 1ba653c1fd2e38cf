use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The four work events a clock entry can record. Stored as text under the
/// same names the wire uses; anything else is rejected at validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum EntryType {
    #[sqlx(rename = "INICIO_TRABALHO")]
    #[serde(rename = "INICIO_TRABALHO")]
    StartWork,
    #[sqlx(rename = "INICIO_ALMOCO")]
    #[serde(rename = "INICIO_ALMOCO")]
    StartLunch,
    #[sqlx(rename = "FIM_ALMOCO")]
    #[serde(rename = "FIM_ALMOCO")]
    EndLunch,
    #[sqlx(rename = "FIM_TRABALHO")]
    #[serde(rename = "FIM_TRABALHO")]
    EndWork,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::StartWork => "INICIO_TRABALHO",
            EntryType::StartLunch => "INICIO_ALMOCO",
            EntryType::EndLunch => "FIM_ALMOCO",
            EntryType::EndWork => "FIM_TRABALHO",
        }
    }

    /// Wire name to variant; `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "INICIO_TRABALHO" => Some(EntryType::StartWork),
            "INICIO_ALMOCO" => Some(EntryType::StartLunch),
            "FIM_ALMOCO" => Some(EntryType::EndLunch),
            "FIM_TRABALHO" => Some(EntryType::EndWork),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Entry {
    pub id: i64,
    /// Moment the event happened, second precision, no timezone.
    pub occurred_at: NaiveDateTime,
    pub entry_type: EntryType,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employee_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insert payload for an entry row.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub occurred_at: NaiveDateTime,
    pub entry_type: EntryType,
    pub description: Option<String>,
    pub location: Option<String>,
    pub employee_id: i64,
}
