//! Importers Crate
//!
//! This crate turns user-supplied files into structured console entities. Importers never
//! touch storage; callers decide what to persist from the returned report.
//!
//! # Architecture
//!
//! - **Types**: Entity and report types are defined in the `shared-types` crate
//! - **Implementations**: Concrete importers are implemented in this crate
//!
//! # Available Importers
//!
//! - `ContactCsvImporter`: Parses and validates contact CSV uploads
//!
//! # Example
//!
//! ```rust
//! use importers::ContactCsvImporter;
//!
//! let report = ContactCsvImporter::new().parse("name,phone\nJohn Doe,+1-555-123-4567");
//! assert_eq!(report.valid, 1);
//! assert_eq!(report.preview[0].phone, "+15551234567");
//! ```

pub mod csv_contacts;

// Re-export commonly used types
pub use csv_contacts::{render_template, ContactCsvImporter, CONTACTS_TEMPLATE, TEMPLATE_FILE_NAME};

// Re-export the report types from shared-types for convenience
pub use shared_types::{ImportError, ImportReport};
