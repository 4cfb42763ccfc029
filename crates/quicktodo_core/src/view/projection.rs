//! Pure projection of the task list into the displayed sequence.

use crate::model::task::Task;

/// Which completion states to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Every task.
    #[default]
    All,
    /// Only `completed == false`.
    Active,
    /// Only `completed == true`.
    Done,
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Done => task.completed,
        }
    }
}

/// Derives the displayed sequence from the list plus view state.
///
/// A task is included iff it passes both the status filter and the search
/// predicate. The search is a case-insensitive substring match against the
/// task text; a blank query matches everything. Input order is preserved and
/// the input is never mutated.
pub fn project<'a>(tasks: &'a [Task], filter: StatusFilter, query: &str) -> Vec<&'a Task> {
    let needle = query.trim().to_lowercase();

    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| needle.is_empty() || task.text.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{project, StatusFilter};
    use crate::model::task::Task;
    use uuid::Uuid;

    fn sample() -> Vec<Task> {
        vec![
            Task::with_parts(Uuid::new_v4(), "Buy milk", false, 2),
            Task::with_parts(Uuid::new_v4(), "Call mom", true, 1),
        ]
    }

    #[test]
    fn all_with_blank_query_returns_everything_in_order() {
        let tasks = sample();
        let view = project(&tasks, StatusFilter::All, "");
        assert_eq!(view.len(), 2);
        assert_eq!(view[0].text, "Buy milk");
        assert_eq!(view[1].text, "Call mom");
    }

    #[test]
    fn status_filter_partitions_by_completion() {
        let tasks = sample();

        let active = project(&tasks, StatusFilter::Active, "");
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].text, "Buy milk");

        let done = project(&tasks, StatusFilter::Done, "");
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].text, "Call mom");
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let tasks = sample();

        let hits = project(&tasks, StatusFilter::All, "MILK");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Buy milk");

        assert!(project(&tasks, StatusFilter::All, "groceries").is_empty());
    }

    #[test]
    fn filters_are_conjunctive() {
        let tasks = sample();
        // "m" appears in both texts; the status filter must still apply.
        let hits = project(&tasks, StatusFilter::Done, "m");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].text, "Call mom");
    }

    #[test]
    fn whitespace_query_matches_everything() {
        let tasks = sample();
        assert_eq!(project(&tasks, StatusFilter::All, "   ").len(), 2);
    }
}
