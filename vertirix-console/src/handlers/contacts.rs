use anyhow::{bail, Context, Result};
use importers::ContactCsvImporter;
use shared_types::{Contact, ContactList, ImportReport};
use std::path::Path;

use crate::contact_lists::{self, ContactFilter};
use crate::storage::ContactListStore;

/// Writes the contact CSV template to `output`, using the importer's delimiter.
pub fn write_template(importer: &ContactCsvImporter, output: &Path) -> Result<()> {
    std::fs::write(output, importer.template())
        .with_context(|| format!("Failed to write template to {:?}", output))?;

    tracing::info!("Wrote contact template to {:?}", output);
    Ok(())
}

/// Reads and validates a contact CSV without saving anything.
pub fn preview_import(importer: &ContactCsvImporter, path: &Path) -> Result<ImportReport> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    if !is_csv {
        bail!("Please upload a CSV file");
    }

    let raw_text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;

    Ok(importer.parse(&raw_text))
}

/// Saves the valid contacts of `report` as a new list owned by `user_id`.
pub fn confirm_import(
    store: &dyn ContactListStore,
    user_id: &str,
    name: &str,
    report: &ImportReport,
) -> Result<ContactList> {
    let list = contact_lists::build_contact_list(name, user_id, report)?;
    store.save(&list).context("Failed to save contact list")?;

    tracing::info!(
        "Created contact list \"{}\" ({}) with {} contacts",
        list.name,
        list.id,
        list.contacts.len()
    );

    Ok(list)
}

pub fn list_contact_lists(store: &dyn ContactListStore, user_id: &str) -> Result<Vec<ContactList>> {
    store.list(user_id)
}

pub fn get_contact_list(
    store: &dyn ContactListStore,
    user_id: &str,
    list_id: &str,
) -> Result<ContactList> {
    store
        .load(user_id, list_id)?
        .ok_or_else(|| anyhow::anyhow!("Contact list {} not found", list_id))
}

pub fn show_contacts(
    store: &dyn ContactListStore,
    user_id: &str,
    list_id: &str,
    filter: &ContactFilter,
) -> Result<(ContactList, Vec<Contact>)> {
    let list = get_contact_list(store, user_id, list_id)?;
    let contacts = contact_lists::filter_contacts(&list, filter)
        .into_iter()
        .cloned()
        .collect();

    Ok((list, contacts))
}

pub fn rename_contact_list(
    store: &dyn ContactListStore,
    user_id: &str,
    list_id: &str,
    name: &str,
) -> Result<ContactList> {
    let mut list = get_contact_list(store, user_id, list_id)?;
    contact_lists::rename_contact_list(&mut list, name)?;
    store.save(&list)?;

    tracing::info!("Renamed contact list {} to \"{}\"", list.id, list.name);
    Ok(list)
}

pub fn delete_contact_list(store: &dyn ContactListStore, user_id: &str, list_id: &str) -> Result<()> {
    if !store.delete(user_id, list_id)? {
        bail!("Contact list {} not found", list_id);
    }

    tracing::info!("Deleted contact list {}", list_id);
    Ok(())
}
