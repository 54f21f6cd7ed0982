use super::{migrations, ContactListStore};
use anyhow::Context;
use rusqlite::{Connection, OptionalExtension};
use shared_types::ContactList;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub struct SqliteContactListStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContactListStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> anyhow::Result<Self> {
        migrations::run_migrations(&conn.lock().unwrap())?;
        Ok(Self { conn })
    }

    /// Opens (creating if needed) the database file at `db_path`
    pub fn open(db_path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open db at {:?}", db_path))?;

        Self::new(Arc::new(Mutex::new(conn)))
    }

    pub fn open_in_memory() -> anyhow::Result<Self> {
        Self::new(Arc::new(Mutex::new(Connection::open_in_memory()?)))
    }
}

impl ContactListStore for SqliteContactListStore {
    fn save(&self, list: &ContactList) -> anyhow::Result<()> {
        let conn = self.conn.lock().unwrap();
        let payload = serde_json::to_string(list)?;

        conn.execute(
            "INSERT OR REPLACE INTO contact_lists
             (id, user_id, name, payload, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![
                list.id,
                list.user_id,
                list.name,
                payload,
                list.created_at,
                list.updated_at,
            ],
        )?;

        Ok(())
    }

    fn load(&self, user_id: &str, list_id: &str) -> anyhow::Result<Option<ContactList>> {
        let conn = self.conn.lock().unwrap();

        let payload: Option<String> = conn
            .query_row(
                "SELECT payload FROM contact_lists WHERE user_id = ?1 AND id = ?2",
                [user_id, list_id],
                |row| row.get(0),
            )
            .optional()?;

        payload
            .map(|p| serde_json::from_str(&p))
            .transpose()
            .with_context(|| format!("Corrupt contact list {}", list_id))
    }

    fn list(&self, user_id: &str) -> anyhow::Result<Vec<ContactList>> {
        let conn = self.conn.lock().unwrap();

        let mut stmt = conn.prepare(
            "SELECT payload FROM contact_lists
             WHERE user_id = ?1
             ORDER BY created_at ASC, rowid ASC",
        )?;

        let payloads = stmt
            .query_map([user_id], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        payloads
            .iter()
            .map(|p| serde_json::from_str(p).context("Corrupt contact list payload"))
            .collect()
    }

    fn delete(&self, user_id: &str, list_id: &str) -> anyhow::Result<bool> {
        let conn = self.conn.lock().unwrap();

        let removed = conn.execute(
            "DELETE FROM contact_lists WHERE user_id = ?1 AND id = ?2",
            [user_id, list_id],
        )?;

        Ok(removed > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use importers::ContactCsvImporter;

    fn sample_list(name: &str, user_id: &str) -> ContactList {
        let report = ContactCsvImporter::new()
            .parse("name,phone,segment\nJohn,+1-555-123-4567,hot\nJane,(555) 987-6543,warm");
        ContactList::new(name.to_string(), user_id.to_string(), report.contacts, report.invalid)
    }

    #[test]
    fn test_save_and_load() {
        let store = SqliteContactListStore::open_in_memory().unwrap();
        let list = sample_list("Leads", "user-1");

        store.save(&list).unwrap();

        let loaded = store.load("user-1", &list.id).unwrap();
        assert_eq!(loaded, Some(list));
    }

    #[test]
    fn test_load_is_scoped_by_user() {
        let store = SqliteContactListStore::open_in_memory().unwrap();
        let list = sample_list("Leads", "user-1");
        store.save(&list).unwrap();

        assert_eq!(store.load("user-2", &list.id).unwrap(), None);
        assert!(store.list("user-2").unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_existing_list() {
        let store = SqliteContactListStore::open_in_memory().unwrap();
        let mut list = sample_list("Leads", "user-1");
        store.save(&list).unwrap();

        list.name = "Hot Leads".to_string();
        store.save(&list).unwrap();

        let lists = store.list("user-1").unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "Hot Leads");
    }

    #[test]
    fn test_list_and_delete() {
        let store = SqliteContactListStore::open_in_memory().unwrap();
        let first = sample_list("First", "user-1");
        let second = sample_list("Second", "user-1");
        store.save(&first).unwrap();
        store.save(&second).unwrap();

        let names: Vec<String> = store
            .list("user-1")
            .unwrap()
            .into_iter()
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["First".to_string(), "Second".to_string()]);

        assert!(store.delete("user-1", &first.id).unwrap());
        assert!(!store.delete("user-1", &first.id).unwrap());
        assert_eq!(store.list("user-1").unwrap().len(), 1);
    }

    #[test]
    fn test_open_creates_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("console.db");

        let store = SqliteContactListStore::open(&path).unwrap();
        store.save(&sample_list("Leads", "user-1")).unwrap();

        assert!(path.exists());
        let reopened = SqliteContactListStore::open(&path).unwrap();
        assert_eq!(reopened.list("user-1").unwrap().len(), 1);
    }
}
