//! Display Filter & Progress
//!
//! Pure view logic: the three-way completion filter and the progress
//! percentage shown above the list.

use crate::models::Todo;

/// Three-way completion filter, applied client-side only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Done,
    Undone,
}

/// Display order of the filter options.
pub const FILTERS: &[TodoFilter] = &[TodoFilter::All, TodoFilter::Done, TodoFilter::Undone];

impl TodoFilter {
    pub fn label(&self) -> &'static str {
        match self {
            TodoFilter::All => "All",
            TodoFilter::Done => "Done",
            TodoFilter::Undone => "Undone",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoFilter::All => true,
            TodoFilter::Done => todo.completed,
            TodoFilter::Undone => !todo.completed,
        }
    }

    /// The displayed sublist, in store order.
    pub fn apply(&self, todos: &[Todo]) -> Vec<Todo> {
        todos.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

/// Completion percentage for the progress bar. An empty list divides by
/// zero and yields NaN, which the bar renders verbatim.
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    (completed as f64 / total as f64) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn make_todos() -> Vec<Todo> {
        [("one", false), ("two", true), ("three", false), ("four", true)]
            .iter()
            .enumerate()
            .map(|(i, (title, completed))| Todo {
                id: Some((i as u64 + 1).into()),
                title: title.to_string(),
                completed: *completed,
                is_editable: false,
            })
            .collect()
    }

    fn titles(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn all_keeps_the_full_list_in_order() {
        let todos = make_todos();
        assert_eq!(TodoFilter::All.apply(&todos), todos);
    }

    #[test]
    fn done_keeps_exactly_the_completed_subset() {
        let filtered = TodoFilter::Done.apply(&make_todos());
        assert_eq!(titles(&filtered), vec!["two", "four"]);
        assert!(filtered.iter().all(|t| t.completed));
    }

    #[test]
    fn undone_keeps_the_complement() {
        let todos = make_todos();
        let done = TodoFilter::Done.apply(&todos);
        let undone = TodoFilter::Undone.apply(&todos);
        assert_eq!(done.len() + undone.len(), todos.len());
        assert_eq!(titles(&undone), vec!["one", "three"]);
    }

    #[test]
    fn progress_is_percentage_to_two_decimals() {
        assert_eq!(format!("{:.2}", progress_percent(1, 3)), "33.33");
        assert_eq!(format!("{:.2}", progress_percent(2, 4)), "50.00");
        assert_eq!(format!("{:.2}", progress_percent(4, 4)), "100.00");
    }

    #[test]
    fn progress_of_empty_list_is_nan() {
        let percent = progress_percent(0, 0);
        assert!(percent.is_nan());
        assert_eq!(format!("{:.2}", percent), "NaN");
    }
}
