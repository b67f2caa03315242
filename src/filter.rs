//! Task Filtering
//!
//! Client-side search over the fetched task list.

use crate::models::Task;

/// Case-insensitive substring match against title or description.
/// A whitespace-only term matches everything; any other term is matched as typed.
pub fn matches(task: &Task, term: &str) -> bool {
    if term.trim().is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    task.title.to_lowercase().contains(&term) || task.description.to_lowercase().contains(&term)
}

/// Tasks matching `term`, in their original order
pub fn filter_tasks(tasks: &[Task], term: &str) -> Vec<Task> {
    tasks.iter().filter(|t| matches(t, term)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskId;

    fn make_task(id: TaskId, title: &str, description: &str, is_completed: bool) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            is_completed,
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            make_task(1, "Buy milk", "From the corner shop", false),
            make_task(2, "Walk dog", "Around the park", true),
        ]
    }

    #[test]
    fn test_filter_by_title() {
        let found = filter_tasks(&sample(), "dog");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);
    }

    #[test]
    fn test_filter_by_description_ignores_case() {
        let found = filter_tasks(&sample(), "CORNER");
        assert_eq!(found.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(filter_tasks(&sample(), "taxes").is_empty());
    }

    #[test]
    fn test_surrounding_spaces_are_part_of_the_term() {
        assert!(filter_tasks(&sample(), "dog ").is_empty());
        assert!(filter_tasks(&sample(), " milk").iter().map(|t| t.id).eq([1]));
        assert!(filter_tasks(&sample(), "buy  milk").is_empty());
    }

    #[test]
    fn test_blank_term_keeps_everything() {
        assert_eq!(filter_tasks(&sample(), ""), sample());
        assert_eq!(filter_tasks(&sample(), "   "), sample());
    }

    #[test]
    fn test_every_substring_of_a_task_finds_it() {
        let tasks = sample();
        for task in &tasks {
            for text in [&task.title, &task.description] {
                let chars: Vec<char> = text.chars().collect();
                for start in 0..chars.len() {
                    for end in start + 1..=chars.len() {
                        let term: String = chars[start..end].iter().collect();
                        if term.trim().is_empty() {
                            continue;
                        }
                        assert!(
                            filter_tasks(&tasks, &term).iter().any(|t| t.id == task.id),
                            "{:?} should match task {}",
                            term,
                            task.id
                        );
                    }
                }
            }
        }
    }
}
