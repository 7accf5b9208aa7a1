//! Property tests for the in-memory store.

use proptest::collection::vec;
use proptest::prelude::*;

use todo_core::{sort_by_id, InMemoryStore, Store, StoreError, Todo, TodoId};

fn any_todo() -> impl Strategy<Value = Todo> {
    (any::<u64>(), "[a-zA-Z0-9 ]{1,24}", any::<bool>()).prop_map(|(id, title, completed)| Todo {
        id,
        title,
        completed,
    })
}

proptest! {
    #[test]
    fn add_then_get_returns_input_with_assigned_id(todo in any_todo()) {
        let store = InMemoryStore::new();
        let stored = store.add(Some(todo.clone())).unwrap();

        let read = store.get_by_id(stored.id).unwrap();
        prop_assert_eq!(read.id, 1);
        prop_assert_eq!(&read.title, &todo.title);
        prop_assert_eq!(read.completed, todo.completed);
    }

    #[test]
    fn get_all_round_trips_every_added_todo(todos in vec(any_todo(), 0..32)) {
        let store = InMemoryStore::new();
        for todo in &todos {
            store.add(Some(todo.clone())).unwrap();
        }

        let mut read = store.get_all().unwrap();
        sort_by_id(&mut read);
        prop_assert_eq!(read.len(), todos.len());
        for (i, (got, want)) in read.iter().zip(&todos).enumerate() {
            prop_assert_eq!(got.id, i as TodoId + 1);
            prop_assert_eq!(&got.title, &want.title);
            prop_assert_eq!(got.completed, want.completed);
        }
    }

    #[test]
    fn invalid_add_leaves_size_unchanged(
        todos in vec(any_todo(), 0..8),
        completed in any::<bool>(),
        nil in any::<bool>(),
    ) {
        let store = InMemoryStore::new();
        for todo in &todos {
            store.add(Some(todo.clone())).unwrap();
        }

        let bad = if nil { None } else { Some(Todo::new("").with_completed(completed)) };
        let err = store.add(bad).unwrap_err();
        prop_assert!(matches!(err, StoreError::NilTodo | StoreError::InvalidTodo));
        prop_assert_eq!(store.len(), todos.len());
    }

    #[test]
    fn update_always_stores_under_path_id(
        count in 1usize..8,
        pick in any::<prop::sample::Index>(),
        payload in any_todo(),
    ) {
        let store = InMemoryStore::new();
        for i in 0..count {
            store.add(Some(Todo::new(format!("todo {i}")))).unwrap();
        }
        let id = pick.index(count) as TodoId + 1;

        let updated = store.update(id, Some(payload.clone())).unwrap();
        prop_assert_eq!(updated.id, id);
        prop_assert_eq!(store.get_by_id(id).unwrap(), Todo { id, ..payload });
        prop_assert_eq!(store.len(), count);
    }

    #[test]
    fn update_of_unknown_id_changes_nothing(todos in vec(any_todo(), 0..8), payload in any_todo()) {
        let store = InMemoryStore::new();
        for todo in &todos {
            store.add(Some(todo.clone())).unwrap();
        }
        let mut before = store.get_all().unwrap();
        sort_by_id(&mut before);

        let missing = todos.len() as TodoId + 1;
        prop_assert_eq!(store.update(missing, Some(payload)), Err(StoreError::NotFound));

        let mut after = store.get_all().unwrap();
        sort_by_id(&mut after);
        prop_assert_eq!(before, after);
    }
}
