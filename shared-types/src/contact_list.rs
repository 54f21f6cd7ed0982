use crate::contact::Contact;
use crate::import::ImportReport;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A named, user-owned collection of imported contacts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    pub id: String,
    pub name: String,
    pub user_id: String,
    pub contacts: Vec<Contact>,
    pub total_contacts: usize,
    pub valid_contacts: usize,
    pub invalid_contacts: usize,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ContactList {
    pub fn new(name: String, user_id: String, contacts: Vec<Contact>, invalid_contacts: usize) -> Self {
        let now = chrono::Utc::now().timestamp();
        let count = contacts.len();

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            user_id,
            contacts,
            total_contacts: count,
            valid_contacts: count,
            invalid_contacts,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactListsResponse {
    pub contact_lists: Vec<ContactList>,
}

/// Outcome of one import: the report, plus the list when one was saved
#[derive(Debug, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ImportContactsResponse {
    pub report: ImportReport,
    pub contact_list: Option<ContactList>,
}
