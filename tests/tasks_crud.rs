#[cfg(test)]
mod tests {
    use quicktd::db::tasks::Tasks;
    use quicktd::libs::task::{Task, TaskFilter};
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests redirect HOME to a private tempdir; serialize them so the
    // environment does not change under a running test.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct TaskTestContext {
        _lock: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext {
                _lock: lock,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_defaults_to_pending(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Buy milk")).unwrap();

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all.len(), 1);
        assert!(all[0].id.is_some());
        assert_eq!(all[0].name, "Buy milk");
        assert!(!all[0].completed);
        assert_eq!(all[0].completed_at, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_ids_are_assigned_increasing(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for i in 1..=3 {
            tasks.insert(&Task::new(&format!("Task {}", i))).unwrap();
        }

        let all = tasks.fetch(TaskFilter::All).unwrap();
        let ids: Vec<i64> = all.iter().filter_map(|t| t.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids[0] < ids[1] && ids[1] < ids[2]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_rename_changes_only_the_name(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Original")).unwrap();
        tasks.insert(&Task::new("Untouched")).unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        let first_id = all[0].id.unwrap();
        tasks.set_completion_state(&[first_id], "2024-01-15").unwrap();

        let affected = tasks.rename(first_id, "Renamed").unwrap();
        assert_eq!(affected, 1);

        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(all[0].name, "Renamed");
        assert!(all[0].completed);
        assert_eq!(all[0].completed_at.as_deref(), Some("2024-01-15"));
        assert_eq!(all[1].name, "Untouched");
        assert!(!all[1].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_rename_unknown_id_is_a_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Only task")).unwrap();
        let before = tasks.fetch(TaskFilter::All).unwrap();

        let affected = tasks.rename(9999, "Ghost").unwrap();
        assert_eq!(affected, 0);

        let after = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(before, after);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one_row(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("First")).unwrap();
        tasks.insert(&Task::new("Second")).unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        let first_id = all[0].id.unwrap();

        let deleted = tasks.delete(first_id).unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 1);

        // Deleting the same id again affects nothing
        let deleted = tasks.delete(first_id).unwrap();
        assert_eq!(deleted, 0);
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_on_matches_the_exact_date(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Done task")).unwrap();
        tasks.insert(&Task::new("Pending task")).unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        tasks.set_completion_state(&[all[0].id.unwrap()], "2024-01-15").unwrap();

        let on_date = tasks.fetch(TaskFilter::CompletedOn("2024-01-15".to_string())).unwrap();
        assert_eq!(on_date.len(), 1);
        assert_eq!(on_date[0].name, "Done task");

        let other_date = tasks.fetch(TaskFilter::CompletedOn("2024-01-16".to_string())).unwrap();
        assert!(other_date.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completion_replace_covers_the_whole_set(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        for i in 1..=3 {
            tasks.insert(&Task::new(&format!("Task {}", i))).unwrap();
        }
        let ids: Vec<i64> = tasks.fetch(TaskFilter::All).unwrap().iter().filter_map(|t| t.id).collect();

        // First pass completes two tasks
        tasks.set_completion_state(&ids[..2], "2024-01-15").unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert!(all[0].completed && all[1].completed && !all[2].completed);
        assert_eq!(all[0].completed_at.as_deref(), Some("2024-01-15"));

        // Second pass replaces the state entirely, regardless of the prior one
        tasks.set_completion_state(&ids[2..], "2024-02-01").unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert!(!all[0].completed && !all[1].completed && all[2].completed);
        assert_eq!(all[0].completed_at, None);
        assert_eq!(all[1].completed_at, None);
        assert_eq!(all[2].completed_at.as_deref(), Some("2024-02-01"));

        // An empty selection resets everything to pending
        tasks.set_completion_state(&[], "2024-02-01").unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        assert!(all.iter().all(|t| !t.completed && t.completed_at.is_none()));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completion_replace_rolls_back_on_failure(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Safe task")).unwrap();
        tasks.insert(&Task::new("poison")).unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();
        let safe_id = all[0].id.unwrap();
        let poison_id = all[1].id.unwrap();

        tasks.set_completion_state(&[safe_id], "2024-01-15").unwrap();
        let before = tasks.fetch(TaskFilter::All).unwrap();

        // Abort the update mid-transaction when the poison row is marked
        tasks
            .conn
            .execute_batch(
                "CREATE TRIGGER poison_completion
                 BEFORE UPDATE OF completed ON tasks
                 WHEN NEW.completed = 1 AND NEW.name = 'poison'
                 BEGIN SELECT RAISE(ABORT, 'poisoned row'); END;",
            )
            .unwrap();

        let result = tasks.set_completion_state(&[safe_id, poison_id], "2024-02-01");
        assert!(result.is_err());

        // The failed replace must leave the prior state untouched
        let after = tasks.fetch(TaskFilter::All).unwrap();
        assert_eq!(before, after);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_name_like_filter_is_case_insensitive(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("Buy milk")).unwrap();
        tasks.insert(&Task::new("Read BOOK")).unwrap();

        let matches = tasks.fetch(TaskFilter::NameLike("book".to_string())).unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Read BOOK");

        let matches = tasks.fetch(TaskFilter::NameLike("b".to_string())).unwrap();
        assert_eq!(matches.len(), 2);

        let matches = tasks.fetch(TaskFilter::NameLike("zzz".to_string())).unwrap();
        assert!(matches.is_empty());
    }
}
