use ticklist_core::{
    open_store_in_memory, KeyValueStore, ReduceOutcome, SqliteKeyValueStore, StoreError,
    StoreResult, TodoAction, TodoManager, STORAGE_KEY,
};

/// Store whose writes always fail, for the best-effort persistence path.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }
}

/// Store whose reads always fail, for the startup fallback path.
struct UnreadableStore;

impl KeyValueStore for UnreadableStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::MissingRequiredTable("kv_entries"))
    }

    fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Ok(())
    }
}

fn add(manager: &mut TodoManager<SqliteKeyValueStore<'_>>, text: &str) {
    assert_eq!(
        manager.dispatch(TodoAction::Add {
            text: text.to_string()
        }),
        ReduceOutcome::ListChanged
    );
}

#[test]
fn absent_key_loads_an_empty_list() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();

    let manager = TodoManager::load(store);
    assert!(manager.state().items.is_empty());
    assert_eq!(manager.remaining(), 0);
}

#[test]
fn mutations_round_trip_through_a_reload() {
    let conn = open_store_in_memory().unwrap();
    let mut manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());

    add(&mut manager, "Buy milk");
    add(&mut manager, "Call mom");
    let buy_milk = manager.state().items[1].id;
    manager.dispatch(TodoAction::Toggle { id: buy_milk });

    let reloaded = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(reloaded.state().items, manager.state().items);
    assert_eq!(reloaded.remaining(), 1);
}

#[test]
fn every_list_mutation_is_persisted_immediately() {
    let conn = open_store_in_memory().unwrap();
    let mut manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());

    add(&mut manager, "Buy milk");
    let id = manager.state().items[0].id;

    let after_add = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(after_add.state().items.len(), 1);

    manager.dispatch(TodoAction::Toggle { id });
    let after_toggle = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert!(after_toggle.state().items[0].done);

    manager.dispatch(TodoAction::StartEdit { id });
    manager.dispatch(TodoAction::SetEditDraft("Buy oat milk".into()));
    manager.dispatch(TodoAction::SaveEdit { id });
    let after_edit = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert_eq!(after_edit.state().items[0].text, "Buy oat milk");

    manager.dispatch(TodoAction::Remove { id });
    let after_remove = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert!(after_remove.state().items.is_empty());
}

#[test]
fn view_only_actions_do_not_write_to_the_store() {
    let conn = open_store_in_memory().unwrap();
    let mut manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());

    manager.dispatch(TodoAction::SetDraft("not committed".into()));

    let probe = SqliteKeyValueStore::try_new(&conn).unwrap();
    assert_eq!(probe.get(STORAGE_KEY).unwrap(), None);
}

#[test]
fn malformed_value_falls_back_to_an_empty_list() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store.set(STORAGE_KEY, "definitely not json").unwrap();

    let manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert!(manager.state().items.is_empty());
}

#[test]
fn wrong_shape_value_falls_back_to_an_empty_list() {
    let conn = open_store_in_memory().unwrap();
    let store = SqliteKeyValueStore::try_new(&conn).unwrap();
    store
        .set(STORAGE_KEY, r#"{"id": "not-an-array"}"#)
        .unwrap();

    let manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    assert!(manager.state().items.is_empty());
}

#[test]
fn unreadable_store_falls_back_to_an_empty_list() {
    let manager = TodoManager::load(UnreadableStore);
    assert!(manager.state().items.is_empty());
}

#[test]
fn failed_writes_do_not_block_in_memory_mutations() {
    let mut manager = TodoManager::load(BrokenStore);

    let outcome = manager.dispatch(TodoAction::Add {
        text: "survives anyway".into(),
    });

    assert_eq!(outcome, ReduceOutcome::ListChanged);
    assert_eq!(manager.state().items.len(), 1);
    assert_eq!(manager.remaining(), 1);

    let id = manager.state().items[0].id;
    manager.dispatch(TodoAction::Toggle { id });
    assert_eq!(manager.remaining(), 0);
}

#[test]
fn persisted_payload_uses_the_wire_field_names() {
    let conn = open_store_in_memory().unwrap();
    let mut manager = TodoManager::load(SqliteKeyValueStore::try_new(&conn).unwrap());
    add(&mut manager, "Buy milk");

    let probe = SqliteKeyValueStore::try_new(&conn).unwrap();
    let payload = probe
        .get(STORAGE_KEY)
        .unwrap()
        .expect("payload should be written after add");

    assert!(payload.starts_with('['));
    assert!(payload.contains("\"createdAt\":"));
    assert!(payload.contains("\"done\":false"));
    assert!(payload.contains("\"text\":\"Buy milk\""));
}
