use super::*;
use crate::session::MemoryStorage;

/// Storage that refuses to remove the admin email.
#[derive(Default)]
struct StickyEmailStorage {
    inner: MemoryStorage,
}

impl SessionStorage for StickyEmailStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if key == ADMIN_EMAIL_KEY {
            return Err(StorageError::Backend("locked".to_owned()));
        }
        self.inner.remove(key)
    }
}

fn sample() -> AdminSession {
    AdminSession { email: "admin@medconsult.test".to_owned(), token: "adm-tok".to_owned() }
}

#[test]
fn persist_then_load_returns_same_session() {
    let mut storage = MemoryStorage::new();
    sample().persist(&mut storage).expect("persist");
    assert_eq!(storage.get(ADMIN_EMAIL_KEY).expect("get").as_deref(), Some("admin@medconsult.test"));
    assert_eq!(AdminSession::load(&storage).expect("load"), Some(sample()));
}

#[test]
fn load_requires_both_keys() {
    let mut storage = MemoryStorage::new();
    storage.set(ADMIN_TOKEN_KEY, "adm-tok").expect("set");
    assert_eq!(AdminSession::load(&storage).expect("load"), None);
}

#[test]
fn clear_removes_admin_keys_only() {
    let mut storage = MemoryStorage::new();
    storage.set("auth_token", "user-tok").expect("set");
    sample().persist(&mut storage).expect("persist");
    AdminSession::clear(&mut storage).expect("clear");
    assert_eq!(AdminSession::load(&storage).expect("load"), None);
    assert_eq!(storage.get("auth_token").expect("get").as_deref(), Some("user-tok"));
}

#[test]
fn cookie_strings_target_site_root() {
    assert_eq!(sample().cookie(), "adminToken=adm-tok; path=/");
    assert_eq!(AdminSession::expired_cookie(), "adminToken=; path=/; max-age=0");
}

#[test]
fn clear_attempts_both_keys_before_reporting() {
    let mut storage = StickyEmailStorage::default();
    sample().persist(&mut storage).expect("persist");

    let err = AdminSession::clear(&mut storage).expect_err("email removal fails");
    assert!(matches!(err, StorageError::Backend(_)));
    assert_eq!(storage.get(ADMIN_TOKEN_KEY).expect("get"), None);
    assert_eq!(AdminSession::load(&storage).expect("load"), None);
}
