use shared_types::{Contact, ContactList, ContactStatus, ImportReport};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactListError {
    #[error("Please provide a list name")]
    EmptyName,

    #[error("No valid contacts found")]
    NoValidContacts,
}

/// Builds a contact list holding every valid contact from `report`.
pub fn build_contact_list(
    name: &str,
    user_id: &str,
    report: &ImportReport,
) -> Result<ContactList, ContactListError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContactListError::EmptyName);
    }

    if !report.has_valid_contacts() || report.contacts.is_empty() {
        return Err(ContactListError::NoValidContacts);
    }

    Ok(ContactList::new(
        name.to_string(),
        user_id.to_string(),
        report.contacts.clone(),
        report.invalid,
    ))
}

pub fn rename_contact_list(list: &mut ContactList, name: &str) -> Result<(), ContactListError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ContactListError::EmptyName);
    }

    list.name = name.to_string();
    list.updated_at = chrono::Utc::now().timestamp();
    Ok(())
}

/// Search and status filter applied when browsing a list
#[derive(Debug, Clone, Default)]
pub struct ContactFilter {
    pub query: Option<String>,
    pub status: Option<ContactStatus>,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        let matches_status = self.status.map_or(true, |status| contact.status == status);

        let matches_query = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let query_lower = query.to_lowercase();
                let contains = |value: &str| value.to_lowercase().contains(&query_lower);

                contains(&contact.name)
                    || contact.phone.contains(query)
                    || contact.email.as_deref().is_some_and(contains)
                    || contact.company.as_deref().is_some_and(contains)
            }
        };

        matches_status && matches_query
    }
}

pub fn filter_contacts<'a>(list: &'a ContactList, filter: &ContactFilter) -> Vec<&'a Contact> {
    list.contacts.iter().filter(|c| filter.matches(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use importers::ContactCsvImporter;

    const SAMPLE: &str = "name,phone,email,company
John Doe,+1-555-123-4567,john@example.com,Acme Corp
Jane Smith,+1-555-987-6543,jane@company.com,Tech Inc
Bad Row,12,,
Bob Johnson,+1-555-456-7890,,StartupXYZ";

    fn sample_list() -> ContactList {
        let report = ContactCsvImporter::new().parse(SAMPLE);
        build_contact_list("Leads", "user-1", &report).unwrap()
    }

    #[test]
    fn test_build_uses_all_valid_contacts() {
        let mut csv = String::from("name,phone\n");
        for i in 0..7 {
            csv.push_str(&format!("Contact {},55512345{:02}\n", i, i));
        }
        csv.push_str("Broken,abc\n");

        let report = ContactCsvImporter::new().parse(&csv);
        let list = build_contact_list("  Spring Campaign ", "user-1", &report).unwrap();

        assert_eq!(report.preview.len(), 5);
        assert_eq!(list.name, "Spring Campaign");
        assert_eq!(list.user_id, "user-1");
        assert_eq!(list.contacts.len(), 7);
        assert_eq!(list.total_contacts, 7);
        assert_eq!(list.valid_contacts, 7);
        assert_eq!(list.invalid_contacts, 1);
    }

    #[test]
    fn test_build_rejects_empty_name() {
        let report = ContactCsvImporter::new().parse(SAMPLE);
        assert_eq!(
            build_contact_list("   ", "user-1", &report),
            Err(ContactListError::EmptyName)
        );
    }

    #[test]
    fn test_build_rejects_report_without_valid_contacts() {
        let report = ContactCsvImporter::new().parse("name,phone\nJohn,abc");
        assert_eq!(
            build_contact_list("Leads", "user-1", &report),
            Err(ContactListError::NoValidContacts)
        );
    }

    #[test]
    fn test_rename() {
        let mut list = sample_list();
        rename_contact_list(&mut list, " Renamed ").unwrap();
        assert_eq!(list.name, "Renamed");
        assert_eq!(rename_contact_list(&mut list, ""), Err(ContactListError::EmptyName));
        assert_eq!(list.name, "Renamed");
    }

    #[test]
    fn test_filter_by_query() {
        let list = sample_list();

        let by_company = ContactFilter {
            query: Some("tech".to_string()),
            status: None,
        };
        let names: Vec<&str> = filter_contacts(&list, &by_company)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["Jane Smith"]);

        let by_phone = ContactFilter {
            query: Some("4567890".to_string()),
            status: None,
        };
        assert_eq!(filter_contacts(&list, &by_phone).len(), 1);

        let by_email = ContactFilter {
            query: Some("JOHN@".to_string()),
            status: None,
        };
        assert_eq!(filter_contacts(&list, &by_email)[0].name, "John Doe");
    }

    #[test]
    fn test_filter_by_status() {
        let mut list = sample_list();
        list.contacts[1].status = ContactStatus::Success;

        let all = ContactFilter::default();
        assert_eq!(filter_contacts(&list, &all).len(), 3);

        let succeeded = ContactFilter {
            query: None,
            status: Some(ContactStatus::Success),
        };
        let matched = filter_contacts(&list, &succeeded);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Jane Smith");

        let pending_john = ContactFilter {
            query: Some("john".to_string()),
            status: Some(ContactStatus::Pending),
        };
        let names: Vec<&str> = filter_contacts(&list, &pending_john)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
    }
}
