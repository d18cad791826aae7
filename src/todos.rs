//! Todo List Transitions
//!
//! Pure functions over the todo list. Each returns the next list and
//! never fails: an unknown id or blank text leaves the list as it was.

use crate::models::Todo;

/// Prepend a new todo built from `raw_text`.
///
/// Blank (whitespace-only) input is ignored and `next_id` is not called.
/// The stored text is the input as typed, not the trimmed form.
pub fn add(list: &[Todo], raw_text: &str, next_id: impl FnOnce() -> u64) -> Vec<Todo> {
    if raw_text.trim().is_empty() {
        return list.to_vec();
    }

    let mut next = Vec::with_capacity(list.len() + 1);
    next.push(Todo::new(next_id(), raw_text));
    next.extend_from_slice(list);
    next
}

/// Flip `completed` on the todo with `id`
pub fn toggle(list: &[Todo], id: u64) -> Vec<Todo> {
    list.iter()
        .map(|todo| {
            if todo.id == id {
                Todo {
                    completed: !todo.completed,
                    ..todo.clone()
                }
            } else {
                todo.clone()
            }
        })
        .collect()
}

/// Remove the todo with `id`, keeping the rest in order
pub fn delete(list: &[Todo], id: u64) -> Vec<Todo> {
    list.iter().filter(|todo| todo.id != id).cloned().collect()
}

pub fn completed_count(list: &[Todo]) -> usize {
    list.iter().filter(|todo| todo.completed).count()
}

/// Id for a newly added todo: milliseconds since the epoch.
///
/// Two adds inside the same millisecond would collide; adds only come
/// from user submits, one event at a time.
pub fn timestamp_id() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_todos;

    fn make_todo(id: u64, text: &str, completed: bool) -> Todo {
        Todo {
            id,
            text: text.to_string(),
            completed,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(10, "water plants", false),
            make_todo(20, "call grandma", true),
            make_todo(30, "bake bread", false),
        ]
    }

    /// Empty, seed, sample, and an all-completed list
    fn fixtures() -> Vec<Vec<Todo>> {
        vec![
            Vec::new(),
            seed_todos(),
            sample(),
            vec![make_todo(7, "done", true), make_todo(8, "also done", true)],
        ]
    }

    #[test]
    fn test_add_prepends_untrimmed_text() {
        for list in fixtures() {
            for text in ["buy milk", "  buy milk ", "x", "🐾"] {
                let next = add(&list, text, || 99);

                assert_eq!(next.len(), list.len() + 1);
                assert_eq!(next[0], make_todo(99, text, false));
                assert_eq!(&next[1..], &list[..]);
            }
        }
    }

    #[test]
    fn test_add_blank_is_noop() {
        for list in fixtures() {
            let mut called = false;

            assert_eq!(add(&list, "", || { called = true; 1 }), list);
            assert_eq!(add(&list, "   \t\n", || { called = true; 1 }), list);
            assert!(!called, "blank input must not consume an id");
        }
    }

    #[test]
    fn test_add_to_empty_list() {
        let next = add(&[], "first", || 7);
        assert_eq!(next, vec![make_todo(7, "first", false)]);
    }

    #[test]
    fn test_toggle_flips_only_matching() {
        let list = sample();
        let next = toggle(&list, 10);

        assert!(next[0].completed);
        assert_eq!(next[1], list[1]);
        assert_eq!(next[2], list[2]);
    }

    #[test]
    fn test_toggle_is_self_inverse() {
        for list in fixtures() {
            for todo in &list {
                assert_eq!(toggle(&toggle(&list, todo.id), todo.id), list);
            }
        }
    }

    #[test]
    fn test_unknown_id_is_noop() {
        for list in fixtures() {
            for id in [0, 3, 404, u64::MAX] {
                assert_eq!(toggle(&list, id), list);
                assert_eq!(delete(&list, id), list);
            }
        }
    }

    #[test]
    fn test_delete_keeps_order() {
        let list = sample();
        let next = delete(&list, 20);

        let ids: Vec<u64> = next.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![10, 30]);
    }

    #[test]
    fn test_add_then_delete_is_identity() {
        for list in fixtures() {
            let added = add(&list, "task", || 12345);
            assert_eq!(delete(&added, added[0].id), list);
        }
    }

    #[test]
    fn test_completed_count() {
        let list = vec![make_todo(1, "a", true), make_todo(2, "b", false)];
        assert_eq!(completed_count(&list), 1);
        assert_eq!(completed_count(&[]), 0);
    }

    #[test]
    fn test_seed_session_walkthrough() {
        let seed = seed_todos();
        assert_eq!((completed_count(&seed), seed.len()), (1, 2));

        let list = add(&seed, "buy milk", || 1_700_000_000_000);
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].text, "buy milk");
        assert_eq!((completed_count(&list), list.len()), (1, 3));

        let list = toggle(&list, 1_700_000_000_000);
        assert_eq!((completed_count(&list), list.len()), (2, 3));

        let done_seed = seed.iter().find(|t| t.completed).map(|t| t.id).unwrap();
        let list = delete(&list, done_seed);
        assert_eq!((completed_count(&list), list.len()), (1, 2));
    }
}
