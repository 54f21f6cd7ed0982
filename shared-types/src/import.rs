use crate::contact::Contact;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Maximum number of error messages kept in an [`ImportReport`]
pub const MAX_REPORTED_ERRORS: usize = 10;

/// Maximum number of contacts shown in an import preview
pub const PREVIEW_SIZE: usize = 5;

/// Problems found while importing a contact CSV.
///
/// These are never raised to the caller; their `Display` output is what ends up in
/// [`ImportReport::errors`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("CSV must have at least a header and one data row")]
    MissingData,

    #[error("Missing required columns: {}", .0.join(", "))]
    MissingRequiredColumn(Vec<String>),

    #[error("Row {row}: Column count mismatch")]
    ColumnCountMismatch { row: usize },

    #[error("Row {row}: Missing name or phone")]
    MissingRequiredField { row: usize },

    #[error("Row {row}: Invalid phone format")]
    InvalidPhoneFormat { row: usize },

    #[error("Row {row}: Invalid email format")]
    InvalidEmailFormat { row: usize },
}

impl ImportError {
    /// 1-based data row the error refers to, `None` for structural errors
    pub fn row(&self) -> Option<usize> {
        match self {
            ImportError::MissingData | ImportError::MissingRequiredColumn(_) => None,
            ImportError::ColumnCountMismatch { row }
            | ImportError::MissingRequiredField { row }
            | ImportError::InvalidPhoneFormat { row }
            | ImportError::InvalidEmailFormat { row } => Some(*row),
        }
    }
}

/// Summary of a single CSV import, suitable for previewing before the import is confirmed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportReport {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub errors: Vec<String>,
    pub preview: Vec<Contact>,
    /// Every valid contact in row order. Not sent to the UI.
    #[serde(skip)]
    #[ts(skip)]
    pub contacts: Vec<Contact>,
}

impl ImportReport {
    /// Report for input that failed before any row was looked at
    pub fn rejected(error: ImportError) -> Self {
        Self {
            errors: vec![error.to_string()],
            ..Default::default()
        }
    }

    pub fn has_valid_contacts(&self) -> bool {
        self.valid > 0
    }
}
