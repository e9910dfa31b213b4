use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user(role: Option<Role>) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Asha".to_owned(),
        email: "asha@example.org".to_owned(),
        role,
    }
}

/// Storage that refuses writes or removals of one key.
#[derive(Clone)]
struct RejectingStorage {
    inner: MemoryStorage,
    reject_set: Option<&'static str>,
    reject_remove: Option<&'static str>,
}

impl RejectingStorage {
    fn rejecting_set(inner: MemoryStorage, key: &'static str) -> Self {
        Self { inner, reject_set: Some(key), reject_remove: None }
    }

    fn rejecting_remove(inner: MemoryStorage, key: &'static str) -> Self {
        Self { inner, reject_set: None, reject_remove: Some(key) }
    }
}

fn refused(key: &str) -> StorageError {
    StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() }
}

impl SessionStorage for RejectingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.reject_set == Some(key) {
            return Err(refused(key));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.reject_remove == Some(key) {
            return Err(refused(key));
        }
        self.inner.remove(key)
    }
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_signed_out() {
    let session = Session::default();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.user(), None);
    assert_eq!(session.role(), None);
}

#[test]
fn signed_in_session_exposes_token_and_user_together() {
    let session = Session::signed_in("tok-1", make_user(Some(Role::Ngo)));
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok-1"));
    assert_eq!(session.user().map(|u| u.name.as_str()), Some("Asha"));
    assert_eq!(session.role(), Some(Role::Ngo));
}

// =============================================================
// SessionStore
// =============================================================

#[test]
fn load_from_empty_storage_is_signed_out() {
    let store = SessionStore::new(MemoryStorage::default());
    assert_eq!(store.load(), Session::default());
}

#[test]
fn session_survives_reload() {
    let storage = MemoryStorage::default();
    let session = Session::signed_in("tok-1", make_user(Some(Role::Volunteer)));
    SessionStore::new(storage.clone()).save(&session).unwrap();

    let reloaded = SessionStore::new(storage).load();
    assert_eq!(reloaded, session);
}

#[test]
fn save_writes_fixed_keys() {
    let storage = MemoryStorage::default();
    SessionStore::new(storage.clone())
        .save(&Session::signed_in("tok-1", make_user(Some(Role::Donor))))
        .unwrap();
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("tok-1"));
    let user: User = serde_json::from_str(&storage.get(USER_KEY).unwrap()).unwrap();
    assert_eq!(user.role, Some(Role::Donor));
}

#[test]
fn clear_removes_both_keys() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(storage.clone());
    store.save(&Session::signed_in("tok-1", make_user(Some(Role::Admin)))).unwrap();
    store.clear().unwrap();
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(store.load(), Session::default());
}

#[test]
fn saving_empty_session_clears_storage() {
    let storage = MemoryStorage::default();
    let store = SessionStore::new(storage.clone());
    store.save(&Session::signed_in("tok-1", make_user(Some(Role::Admin)))).unwrap();
    store.save(&Session::default()).unwrap();
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn token_without_user_loads_as_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1").unwrap();
    assert_eq!(SessionStore::new(storage).load(), Session::default());
}

#[test]
fn user_without_token_loads_as_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(USER_KEY, &serde_json::to_string(&make_user(Some(Role::Ngo))).unwrap()).unwrap();
    assert_eq!(SessionStore::new(storage).load(), Session::default());
}

#[test]
fn empty_token_loads_as_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "").unwrap();
    storage.set(USER_KEY, &serde_json::to_string(&make_user(Some(Role::Ngo))).unwrap()).unwrap();
    assert_eq!(SessionStore::new(storage).load(), Session::default());
}

#[test]
fn corrupt_user_loads_as_signed_out() {
    let storage = MemoryStorage::default();
    storage.set(TOKEN_KEY, "tok-1").unwrap();
    storage.set(USER_KEY, "{not json").unwrap();
    assert_eq!(SessionStore::new(storage).load(), Session::default());
}

#[test]
fn failed_token_write_rolls_back_user() {
    let storage = RejectingStorage::rejecting_set(MemoryStorage::default(), TOKEN_KEY);
    let store = SessionStore::new(storage.clone());
    let err = store.save(&Session::signed_in("tok-1", make_user(Some(Role::Ngo)))).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == TOKEN_KEY));
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(store.load(), Session::default());
}

#[test]
fn failed_user_write_leaves_token_untouched() {
    let storage = RejectingStorage::rejecting_set(MemoryStorage::default(), USER_KEY);
    let store = SessionStore::new(storage.clone());
    assert!(store.save(&Session::signed_in("tok-1", make_user(Some(Role::Ngo)))).is_err());
    assert_eq!(storage.get(TOKEN_KEY), None);
}

#[test]
fn failed_save_does_not_restore_the_previous_user() {
    let memory = MemoryStorage::default();
    SessionStore::new(memory.clone())
        .save(&Session::signed_in("tok-A", make_user(Some(Role::Admin))))
        .unwrap();

    let failing = SessionStore::new(RejectingStorage::rejecting_set(memory.clone(), USER_KEY));
    assert!(failing.save(&Session::signed_in("tok-B", make_user(Some(Role::Donor)))).is_err());

    let reloaded = SessionStore::new(memory.clone()).load();
    assert_eq!(reloaded, Session::default());
    assert_eq!(memory.get(TOKEN_KEY), None);
    assert_eq!(memory.get(USER_KEY), None);
}

#[test]
fn failed_clear_never_mixes_old_token_with_new_user() {
    let memory = MemoryStorage::default();
    SessionStore::new(memory.clone())
        .save(&Session::signed_in("tok-A", make_user(Some(Role::Admin))))
        .unwrap();

    let failing = SessionStore::new(RejectingStorage::rejecting_remove(memory.clone(), USER_KEY));
    let err = failing.save(&Session::signed_in("tok-B", make_user(Some(Role::Donor)))).unwrap_err();
    assert_eq!(err, refused(USER_KEY));

    // The token went first, so whatever is left cannot load as a session.
    assert_eq!(memory.get(TOKEN_KEY), None);
    assert_eq!(SessionStore::new(memory).load(), Session::default());
}

#[test]
fn saving_replaces_previous_session() {
    let memory = MemoryStorage::default();
    let store = SessionStore::new(memory.clone());
    store.save(&Session::signed_in("tok-A", make_user(Some(Role::Admin)))).unwrap();
    let next = Session::signed_in("tok-B", make_user(Some(Role::Volunteer)));
    store.save(&next).unwrap();
    assert_eq!(SessionStore::new(memory).load(), next);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_inert_in_native_builds() {
    let store = SessionStore::browser();
    assert_eq!(store.load(), Session::default());
    assert_eq!(
        store.save(&Session::signed_in("tok-1", make_user(None))),
        Err(StorageError::Unavailable)
    );
    assert_eq!(store.clear(), Ok(()));
}
