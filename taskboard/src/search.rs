//! Read-time task filtering

use crate::types::{Board, List, Task};

/// Whether `task` would survive [`filter_board`] for `query`
pub fn matches(task: &Task, query: &str) -> bool {
    query.trim().is_empty() || task.matches_lowercase(&query.to_lowercase())
}

/// Board view holding only the tasks whose title or description contains `query`,
/// ignoring case. Every list stays, possibly empty.
///
/// A blank query returns the board as is. The query itself is not trimmed, so
/// surrounding spaces take part in the match.
pub fn filter_board(board: &Board, query: &str) -> Board {
    if query.trim().is_empty() {
        return board.clone();
    }

    Board {
        lists: board
            .lists
            .iter()
            .map(|list| List {
                tasks: list
                    .tasks
                    .iter()
                    .filter(|t| matches(t, query))
                    .cloned()
                    .collect(),
                ..list.clone()
            })
            .collect(),
        ..board.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        let board = Board::new("Home");
        let todo = board.lists[0]
            .with_task_added(Task::new("Paint fence"))
            .with_task_added(
                Task::new("Groceries").with_description(Some("Remember the Saffron".into())),
            );
        let done = board.lists[2].with_task_added(Task::new("Fix sink"));
        board.with_list_replaced(&todo).with_list_replaced(&done)
    }

    #[test]
    fn test_description_only_match() {
        let board = board();
        let view = filter_board(&board, "saffron");

        assert_eq!(view.lists.len(), 3);
        assert_eq!(view.lists[0].tasks.len(), 1);
        assert_eq!(view.lists[0].tasks[0].title, "Groceries");
        assert!(view.lists[1].tasks.is_empty());
        assert!(view.lists[2].tasks.is_empty());
    }

    #[test]
    fn test_title_match_is_case_insensitive() {
        let view = filter_board(&board(), "FIX");
        assert_eq!(view.task_count(), 1);
        assert_eq!(view.lists[2].tasks[0].title, "Fix sink");
    }

    #[test]
    fn test_blank_query_returns_board() {
        let board = board();
        assert_eq!(filter_board(&board, "   "), board);
        assert_eq!(filter_board(&board, ""), board);
    }

    #[test]
    fn test_no_match_keeps_lists() {
        let view = filter_board(&board(), "zebra");
        assert_eq!(view.lists.len(), 3);
        assert_eq!(view.task_count(), 0);
    }

    #[test]
    fn test_matches_keeps_surrounding_spaces() {
        let task = Task::new("Paint fence");
        assert!(matches(&task, "t f"));
        assert!(!matches(&task, " fence "));
        assert!(matches(&task, "  "));
    }

    #[test]
    fn test_filter_agrees_with_matches() {
        let board = board();
        for query in ["e", "SAFF", " sink", "zebra"] {
            let expected: Vec<_> = board
                .lists
                .iter()
                .flat_map(|l| l.tasks.iter())
                .filter(|t| matches(t, query))
                .map(|t| t.id.clone())
                .collect();
            let view = filter_board(&board, query);
            let kept: Vec<_> = view
                .lists
                .iter()
                .flat_map(|l| l.tasks.iter())
                .map(|t| t.id.clone())
                .collect();
            assert_eq!(kept, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_filter_does_not_touch_source() {
        let board = board();
        let _ = filter_board(&board, "sink");
        assert_eq!(board.task_count(), 3);
    }
}
