pub mod config;
pub mod contact_lists;
pub mod handlers;
pub mod helpers;
pub mod storage;

pub use storage::ContactListStore;
