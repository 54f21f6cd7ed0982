use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

/// Calling status of a contact within a campaign
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    Pending,
    Called,
    Success,
    Failed,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Pending => "pending",
            ContactStatus::Called => "called",
            ContactStatus::Success => "success",
            ContactStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(ContactStatus::Pending),
            "called" => Ok(ContactStatus::Called),
            "success" => Ok(ContactStatus::Success),
            "failed" => Ok(ContactStatus::Failed),
            other => Err(format!(
                "Unknown contact status '{}'. Must be one of: pending, called, success, failed",
                other
            )),
        }
    }
}

/// One outbound call attempt made to a contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CallRecord {
    pub called_at: i64,
    pub status: ContactStatus,
    pub duration_seconds: Option<u32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, String>,
    pub status: ContactStatus,
    #[serde(default)]
    pub call_history: Vec<CallRecord>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Contact {
    /// Creates a pending contact with a fresh identifier and no call history.
    ///
    /// `phone` is stored as given; callers are expected to have normalized it.
    pub fn new(
        name: String,
        phone: String,
        email: Option<String>,
        company: Option<String>,
        custom_fields: BTreeMap<String, String>,
    ) -> Self {
        let now = chrono::Utc::now().timestamp();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            phone,
            email,
            company,
            custom_fields,
            status: ContactStatus::Pending,
            call_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
