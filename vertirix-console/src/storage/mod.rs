pub mod memory_storage;
pub mod migrations;
pub mod sqlite_storage;

pub use memory_storage::MemoryContactListStore;
pub use sqlite_storage::SqliteContactListStore;

use anyhow::Result;
use shared_types::ContactList;

/// Persistence for contact lists, scoped by the owning user.
///
/// Saving a list whose id already exists replaces it.
pub trait ContactListStore: Send + Sync {
    fn save(&self, list: &ContactList) -> Result<()>;
    fn load(&self, user_id: &str, list_id: &str) -> Result<Option<ContactList>>;
    /// All lists owned by `user_id`, oldest first
    fn list(&self, user_id: &str) -> Result<Vec<ContactList>>;
    /// Returns whether a list was removed
    fn delete(&self, user_id: &str, list_id: &str) -> Result<bool>;
}
