use super::ContactListStore;
use shared_types::ContactList;
use std::collections::HashMap;
use std::sync::Mutex;

/// Keeps contact lists in process memory, keyed by owning user
#[derive(Default)]
pub struct MemoryContactListStore {
    lists: Mutex<HashMap<String, Vec<ContactList>>>,
}

impl MemoryContactListStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactListStore for MemoryContactListStore {
    fn save(&self, list: &ContactList) -> anyhow::Result<()> {
        let mut lists = self.lists.lock().unwrap();
        let owned = lists.entry(list.user_id.clone()).or_default();

        match owned.iter_mut().find(|existing| existing.id == list.id) {
            Some(existing) => *existing = list.clone(),
            None => owned.push(list.clone()),
        }

        Ok(())
    }

    fn load(&self, user_id: &str, list_id: &str) -> anyhow::Result<Option<ContactList>> {
        let lists = self.lists.lock().unwrap();

        Ok(lists
            .get(user_id)
            .and_then(|owned| owned.iter().find(|l| l.id == list_id))
            .cloned())
    }

    fn list(&self, user_id: &str) -> anyhow::Result<Vec<ContactList>> {
        let lists = self.lists.lock().unwrap();
        Ok(lists.get(user_id).cloned().unwrap_or_default())
    }

    fn delete(&self, user_id: &str, list_id: &str) -> anyhow::Result<bool> {
        let mut lists = self.lists.lock().unwrap();

        let Some(owned) = lists.get_mut(user_id) else {
            return Ok(false);
        };

        let before = owned.len();
        owned.retain(|l| l.id != list_id);
        Ok(owned.len() != before)
    }
}
