/// File name offered when the template is downloaded
pub const TEMPLATE_FILE_NAME: &str = "contacts_template.csv";

/// Reference layout for contact uploads
pub const CONTACTS_TEMPLATE: &str = "name,phone,email,company,customField1,customField2
John Doe,+1-555-123-4567,john@example.com,Acme Corp,Sales,Hot Lead
Jane Smith,+1-555-987-6543,jane@company.com,Tech Inc,Marketing,Warm Lead
Bob Johnson,+1-555-456-7890,bob@startup.com,StartupXYZ,Support,Cold Lead";

/// The reference CSV with `,` replaced by `delimiter`
pub fn render_template(delimiter: u8) -> String {
    CONTACTS_TEMPLATE.replace(',', &char::from(delimiter).to_string())
}
