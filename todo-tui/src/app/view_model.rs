use std::cmp::Ordering;
use todo_client::Todo;

use super::state::Filter;

/// Derive the list to render from the cached todos and the active filter.
///
/// Incomplete tasks sort before completed ones; within equal completion
/// status, tasks with due dates sort by ascending due date. A pair where
/// either side lacks a due date compares equal, so the stable sort keeps
/// those in server-returned order. Recomputed in full on every render —
/// the dataset is a personal task list, not worth memoizing.
pub fn derive(todos: &[Todo], filter: Filter) -> Vec<Todo> {
    let mut visible: Vec<Todo> = todos
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();

    visible.sort_by(compare);
    visible
}

fn compare(a: &Todo, b: &Todo) -> Ordering {
    match a.completed.cmp(&b.completed) {
        Ordering::Equal => match (a.due_date, b.due_date) {
            (Some(da), Some(db)) => da.cmp(&db),
            _ => Ordering::Equal,
        },
        unequal => unequal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Date;

    fn task(id: i32, completed: bool, due: Option<Date>) -> Todo {
        Todo {
            id,
            title: format!("task {id}"),
            description: None,
            due_date: due,
            completed,
        }
    }

    fn ids(todos: &[Todo]) -> Vec<i32> {
        todos.iter().map(|t| t.id).collect()
    }

    #[test]
    fn filter_keeps_exactly_the_matching_subset() {
        let todos = vec![
            task(1, false, None),
            task(2, true, None),
            task(3, false, None),
            task(4, true, None),
        ];

        let completed = derive(&todos, Filter::Completed);
        assert!(completed.iter().all(|t| t.completed));
        assert_eq!(completed.len(), 2);

        let incomplete = derive(&todos, Filter::Incomplete);
        assert!(incomplete.iter().all(|t| !t.completed));
        assert_eq!(incomplete.len(), 2);

        assert!(derive(&todos, Filter::All).len() <= todos.len());
    }

    #[test]
    fn all_filter_preserves_every_element() {
        let todos = vec![
            task(1, false, Some(date!(2024 - 05 - 01))),
            task(2, true, None),
            task(3, false, None),
        ];
        let mut derived_ids = ids(&derive(&todos, Filter::All));
        derived_ids.sort();
        assert_eq!(derived_ids, vec![1, 2, 3]);
    }

    #[test]
    fn incomplete_sorts_before_completed_monotonically() {
        let todos = vec![
            task(1, true, None),
            task(2, false, None),
            task(3, true, None),
            task(4, false, None),
        ];
        let derived = derive(&todos, Filter::All);
        for pair in derived.windows(2) {
            if pair[0].completed {
                assert!(pair[1].completed, "completed task before incomplete one");
            }
        }
    }

    #[test]
    fn due_dates_order_ascending_within_equal_completion() {
        // Worked example: incomplete by due date, then completed.
        let todos = vec![
            task(1, false, Some(date!(2024 - 05 - 01))),
            task(2, true, Some(date!(2024 - 01 - 01))),
            task(3, false, Some(date!(2024 - 03 - 01))),
        ];
        assert_eq!(ids(&derive(&todos, Filter::All)), vec![3, 1, 2]);
    }

    #[test]
    fn dateless_pairs_keep_server_order() {
        let todos = vec![
            task(10, false, None),
            task(11, false, None),
            task(12, false, Some(date!(2024 - 06 - 15))),
            task(13, false, None),
        ];
        let derived = derive(&todos, Filter::All);
        // 10, 11, 13 have no due date: relative order must survive the sort.
        let dateless: Vec<i32> = derived
            .iter()
            .filter(|t| t.due_date.is_none())
            .map(|t| t.id)
            .collect();
        assert_eq!(dateless, vec![10, 11, 13]);
    }

    #[test]
    fn equal_due_dates_keep_server_order() {
        let due = Some(date!(2024 - 02 - 02));
        let todos = vec![task(5, false, due), task(6, false, due), task(7, false, due)];
        assert_eq!(ids(&derive(&todos, Filter::All)), vec![5, 6, 7]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(derive(&[], Filter::All).is_empty());
        assert!(derive(&[], Filter::Completed).is_empty());
    }
}
