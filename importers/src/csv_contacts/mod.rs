mod csv_reader;
mod template;
mod validation;

pub use csv_reader::CsvReader;
pub use template::{render_template, CONTACTS_TEMPLATE, TEMPLATE_FILE_NAME};
pub use validation::{normalize_phone, ContactValidator};

use shared_types::{Contact, ImportError, ImportReport, MAX_REPORTED_ERRORS, PREVIEW_SIZE};
use std::collections::{BTreeMap, HashMap};

/// Columns that must be present in the header
pub const REQUIRED_COLUMNS: [&str; 2] = ["name", "phone"];

/// Columns mapped onto `Contact` fields instead of `custom_fields`
pub const RESERVED_COLUMNS: [&str; 4] = ["name", "phone", "email", "company"];

/// Turns contact CSV text into validated contacts and an import report.
///
/// The importer performs no I/O and keeps no state between calls; problems with the input
/// are reported in the returned [`ImportReport`] rather than as errors.
pub struct ContactCsvImporter {
    reader: CsvReader,
    validator: ContactValidator,
}

impl ContactCsvImporter {
    pub fn new() -> Self {
        Self {
            reader: CsvReader::new(),
            validator: ContactValidator::new(),
        }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self {
            reader: CsvReader::with_delimiter(delimiter),
            validator: ContactValidator::new(),
        }
    }

    /// Reference CSV written with this importer's delimiter, so it always imports cleanly.
    pub fn template(&self) -> String {
        render_template(self.reader.delimiter())
    }

    pub fn parse(&self, raw_text: &str) -> ImportReport {
        let rows = self.reader.read_rows(raw_text);

        if rows.len() < 2 {
            return ImportReport::rejected(ImportError::MissingData);
        }

        let headers: Vec<String> = rows[0].iter().map(|h| h.to_lowercase()).collect();

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .map(|column| column.to_string())
            .collect();

        if !missing.is_empty() {
            return ImportReport::rejected(ImportError::MissingRequiredColumn(missing));
        }

        let data_rows = &rows[1..];
        let mut contacts = Vec::new();
        let mut errors = Vec::new();
        let mut invalid = 0;

        for (index, row) in data_rows.iter().enumerate() {
            match self.parse_row(index + 1, &headers, row) {
                Ok(contact) => contacts.push(contact),
                Err(e) => {
                    tracing::debug!(row = ?e.row(), "Rejected contact row: {}", e);
                    errors.push(e.to_string());
                    invalid += 1;
                }
            }
        }

        tracing::info!(
            "Parsed contact CSV: {} rows, {} valid, {} invalid",
            data_rows.len(),
            contacts.len(),
            invalid
        );

        errors.truncate(MAX_REPORTED_ERRORS);

        ImportReport {
            total: data_rows.len(),
            valid: contacts.len(),
            invalid,
            errors,
            preview: contacts.iter().take(PREVIEW_SIZE).cloned().collect(),
            contacts,
        }
    }

    fn parse_row(
        &self,
        row_number: usize,
        headers: &[String],
        row: &[String],
    ) -> Result<Contact, ImportError> {
        if row.len() != headers.len() {
            return Err(ImportError::ColumnCountMismatch { row: row_number });
        }

        let fields: HashMap<&str, &str> = headers
            .iter()
            .map(String::as_str)
            .zip(row.iter().map(String::as_str))
            .collect();

        let field = |key: &str| fields.get(key).copied().unwrap_or_default();

        let name = field("name");
        let phone = field("phone");

        if name.is_empty() || phone.is_empty() {
            return Err(ImportError::MissingRequiredField { row: row_number });
        }

        let phone = normalize_phone(phone);
        if !self.validator.is_valid_phone(&phone) {
            return Err(ImportError::InvalidPhoneFormat { row: row_number });
        }

        let email = Some(field("email")).filter(|e| !e.is_empty());
        if let Some(email) = email {
            if !self.validator.is_valid_email(email) {
                return Err(ImportError::InvalidEmailFormat { row: row_number });
            }
        }

        let company = Some(field("company")).filter(|c| !c.is_empty());

        let custom_fields: BTreeMap<String, String> = fields
            .iter()
            .filter(|(header, _)| !RESERVED_COLUMNS.contains(*header))
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();

        Ok(Contact::new(
            name.to_string(),
            phone,
            email.map(str::to_string),
            company.map(str::to_string),
            custom_fields,
        ))
    }
}

impl Default for ContactCsvImporter {
    fn default() -> Self {
        Self::new()
    }
}
