use serde::{Deserialize, Serialize};

pub mod contact;
pub mod contact_list;
pub mod import;

pub use contact::{CallRecord, Contact, ContactStatus};
pub use contact_list::{ContactList, ContactListsResponse, ImportContactsResponse};
pub use import::{ImportError, ImportReport, MAX_REPORTED_ERRORS, PREVIEW_SIZE};

/// Error response for console clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
