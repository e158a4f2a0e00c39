//! Board state
//!
//! Holds the cached task list and the creation form. UI callbacks turn into
//! [`Request`]s, which the app runs against a [`TaskApi`]; their outcomes come
//! back as [`ApiEvent`]s and are applied with [`Board::apply`]. Nothing in here
//! performs I/O, and the task list is only changed once the server confirmed.

mod form;

pub use form::TaskForm;

use crate::api::{ApiError, TaskApi};
use crate::types::{NewTask, Task, TaskId, TaskStatus};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Work for the task API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadTasks,
    CreateTask(NewTask),
    UpdateTask(Task),
}

/// Outcome of a [`Request`]
#[derive(Debug)]
pub enum ApiEvent {
    TasksLoaded(Result<Vec<Task>, ApiError>),
    TaskCreated(Result<Task, ApiError>),
    TaskUpdated {
        task: Task,
        result: Result<(), ApiError>,
    },
}

impl Request {
    pub async fn execute(self, api: &dyn TaskApi) -> ApiEvent {
        match self {
            Request::LoadTasks => ApiEvent::TasksLoaded(api.list_tasks().await),
            Request::CreateTask(new_task) => ApiEvent::TaskCreated(api.create_task(&new_task).await),
            Request::UpdateTask(task) => {
                let result = api.update_task(&task).await;
                ApiEvent::TaskUpdated { task, result }
            }
        }
    }
}

/// End of a drag gesture. `destination` is `None` when the card was released
/// outside every column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub task_id: TaskId,
    pub source: TaskStatus,
    pub destination: Option<TaskStatus>,
}

#[derive(Debug, Default)]
pub struct Board {
    tasks: Vec<Task>,
    pub form: TaskForm,
    loading: bool,
    pending_moves: HashSet<TaskId>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks in one column, in list order
    pub fn column(&self, status: TaskStatus) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| t.status == status)
    }

    pub fn column_len(&self, status: TaskStatus) -> usize {
        self.column(status).count()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// A status update for this task is waiting on the server
    pub fn is_moving(&self, id: &TaskId) -> bool {
        self.pending_moves.contains(id)
    }

    pub fn load(&mut self) -> Request {
        self.loading = true;
        Request::LoadTasks
    }

    /// Submit the creation form. Returns `None` for a blank title or while a
    /// previous submission is still in flight.
    pub fn submit_form(&mut self) -> Option<Request> {
        if self.form.submitting {
            return None;
        }
        let draft = self.form.draft()?;
        self.form.submitting = true;
        debug!(title = %draft.title, status = %draft.status, "Submitting new task");
        Some(Request::CreateTask(draft))
    }

    /// Map a finished drag onto a status update, if it is one.
    pub fn drag_ended(&mut self, drag: DragEnd) -> Option<Request> {
        let destination = drag.destination?;
        if destination == drag.source {
            return None;
        }
        if self.pending_moves.contains(&drag.task_id) {
            debug!(task_id = %drag.task_id, "Move already in flight, ignoring drop");
            return None;
        }

        let task = self.tasks.iter().find(|t| t.id == drag.task_id)?;
        if task.status == destination {
            return None;
        }

        let updated = task.with_status(destination);
        self.pending_moves.insert(updated.id.clone());
        debug!(
            task_id = %updated.id,
            from = %drag.source,
            to = %destination,
            "Moving task"
        );
        Some(Request::UpdateTask(updated))
    }

    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::TasksLoaded(result) => {
                self.loading = false;
                match result {
                    Ok(tasks) => {
                        info!(count = tasks.len(), "Tasks loaded");
                        self.tasks = tasks;
                    }
                    Err(e) => error!(error = %e, "Failed to fetch tasks"),
                }
            }
            ApiEvent::TaskCreated(result) => {
                self.form.submitting = false;
                match result {
                    Ok(task) => {
                        info!(task_id = %task.id, title = %task.title, "Task created");
                        self.tasks.push(task);
                        self.form.reset();
                    }
                    Err(e) => error!(error = %e, "Failed to add task"),
                }
            }
            ApiEvent::TaskUpdated { task, result } => {
                self.pending_moves.remove(&task.id);
                match result {
                    Ok(()) => {
                        info!(task_id = %task.id, status = %task.status, "Task status updated");
                        if let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) {
                            *slot = task;
                        }
                    }
                    Err(e) => {
                        error!(task_id = %task.id, error = %e, "Failed to update task status")
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTaskApi;
    use rstest::{fixture, rstest};

    fn task(id: i64, title: &str, status: TaskStatus) -> Task {
        Task {
            id: TaskId::from(id),
            title: title.into(),
            description: String::new(),
            status,
            extra: serde_json::Map::new(),
        }
    }

    fn server_error() -> ApiError {
        ApiError::Status {
            url: "http://tasks.test/tasks".into(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[fixture]
    fn tasks() -> Vec<Task> {
        vec![
            task(1, "Design schema", TaskStatus::Todo),
            task(2, "Write API", TaskStatus::InProgress),
            task(3, "Set up CI", TaskStatus::Done),
            task(4, "Write tests", TaskStatus::Todo),
        ]
    }

    #[fixture]
    fn loaded(tasks: Vec<Task>) -> Board {
        let mut board = Board::new();
        board.load();
        board.apply(ApiEvent::TasksLoaded(Ok(tasks)));
        board
    }

    async fn run(board: &mut Board, request: Request, api: &MockTaskApi) {
        let event = request.execute(api).await;
        board.apply(event);
    }

    fn titles(board: &Board, status: TaskStatus) -> Vec<&str> {
        board.column(status).map(|t| t.title.as_str()).collect()
    }

    #[rstest]
    #[tokio::test]
    async fn load_partitions_tasks_into_three_columns(tasks: Vec<Task>) {
        let mut api = MockTaskApi::new();
        let response = tasks.clone();
        api.expect_list_tasks()
            .times(1)
            .returning(move || Ok(response.clone()));

        let mut board = Board::new();
        let request = board.load();
        assert!(board.is_loading());
        run(&mut board, request, &api).await;

        assert!(!board.is_loading());
        assert_eq!(titles(&board, TaskStatus::Todo), ["Design schema", "Write tests"]);
        assert_eq!(titles(&board, TaskStatus::InProgress), ["Write API"]);
        assert_eq!(titles(&board, TaskStatus::Done), ["Set up CI"]);
        let total: usize = TaskStatus::ALL.iter().map(|s| board.column_len(*s)).sum();
        assert_eq!(total, tasks.len());
    }

    #[tokio::test]
    async fn failed_load_leaves_board_empty() {
        let mut api = MockTaskApi::new();
        api.expect_list_tasks()
            .times(1)
            .returning(|| Err(server_error()));

        let mut board = Board::new();
        let request = board.load();
        run(&mut board, request, &api).await;

        assert!(board.tasks().is_empty());
        assert!(!board.is_loading());
    }

    #[tokio::test]
    async fn title_only_form_creates_todo_with_empty_description() {
        let mut api = MockTaskApi::new();
        api.expect_create_task()
            .withf(|t: &NewTask| {
                t.title == "Buy milk" && t.description.is_empty() && t.status == TaskStatus::Todo
            })
            .times(1)
            .returning(|t| {
                Ok(Task {
                    id: TaskId::Text("srv-1".into()),
                    title: t.title.clone(),
                    description: t.description.clone(),
                    status: t.status,
                    extra: serde_json::Map::new(),
                })
            });

        let mut board = Board::new();
        board.form.show();
        board.form.title = "Buy milk".into();
        let request = board.submit_form().expect("title is set");
        assert!(board.form.submitting);
        run(&mut board, request, &api).await;

        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].id, TaskId::Text("srv-1".into()));
        assert_eq!(titles(&board, TaskStatus::Todo), ["Buy milk"]);
        assert!(!board.form.open);
        assert!(board.form.title.is_empty());
        assert!(!board.form.submitting);
    }

    #[rstest]
    #[case("")]
    #[case("    ")]
    fn whitespace_title_issues_no_request(#[case] title: &str) {
        let mut board = Board::new();
        board.form.show();
        board.form.title = title.into();
        assert_eq!(board.submit_form(), None);
        assert!(board.form.open);
        assert!(!board.form.submitting);
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let mut board = Board::new();
        board.form.show();
        board.form.title = "Once".into();
        assert!(board.submit_form().is_some());
        assert_eq!(board.submit_form(), None);
    }

    #[tokio::test]
    async fn failed_creation_keeps_form_open_with_input() {
        let mut api = MockTaskApi::new();
        api.expect_create_task()
            .times(1)
            .returning(|_| Err(server_error()));

        let mut board = Board::new();
        board.form.show();
        board.form.title = "Plan sprint".into();
        board.form.description = "for Q3".into();
        board.form.status = TaskStatus::InProgress;
        let request = board.submit_form().unwrap();
        run(&mut board, request, &api).await;

        assert!(board.tasks().is_empty());
        assert!(board.form.open);
        assert_eq!(board.form.title, "Plan sprint");
        assert_eq!(board.form.description, "for Q3");
        assert_eq!(board.form.status, TaskStatus::InProgress);
        assert!(!board.form.submitting);
    }

    #[rstest]
    #[case(TaskStatus::Todo, Some(TaskStatus::Todo))]
    #[case(TaskStatus::Todo, None)]
    fn drop_in_origin_or_outside_issues_no_request(
        mut loaded: Board,
        #[case] source: TaskStatus,
        #[case] destination: Option<TaskStatus>,
    ) {
        let drag = DragEnd {
            task_id: TaskId::from(1),
            source,
            destination,
        };
        assert_eq!(loaded.drag_ended(drag), None);
        assert!(!loaded.is_moving(&TaskId::from(1)));
    }

    #[rstest]
    fn drop_of_unknown_task_issues_no_request(mut loaded: Board) {
        let drag = DragEnd {
            task_id: TaskId::from(99),
            source: TaskStatus::Todo,
            destination: Some(TaskStatus::Done),
        };
        assert_eq!(loaded.drag_ended(drag), None);
    }

    #[rstest]
    #[tokio::test]
    async fn drop_in_other_column_moves_task_after_confirmation(mut loaded: Board) {
        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .withf(|t: &Task| t.id == TaskId::from(1) && t.status == TaskStatus::Done)
            .times(1)
            .returning(|_| Ok(()));

        let request = loaded
            .drag_ended(DragEnd {
                task_id: TaskId::from(1),
                source: TaskStatus::Todo,
                destination: Some(TaskStatus::Done),
            })
            .expect("cross-column drop");
        assert!(loaded.is_moving(&TaskId::from(1)));
        // Not moved until the server answers
        assert!(titles(&loaded, TaskStatus::Todo).contains(&"Design schema"));

        run(&mut loaded, request, &api).await;

        assert!(!loaded.is_moving(&TaskId::from(1)));
        assert!(!titles(&loaded, TaskStatus::Todo).contains(&"Design schema"));
        assert!(!titles(&loaded, TaskStatus::InProgress).contains(&"Design schema"));
        assert_eq!(titles(&loaded, TaskStatus::Done), ["Design schema", "Set up CI"]);
    }

    #[rstest]
    #[tokio::test]
    async fn failed_update_leaves_task_in_original_column(mut loaded: Board) {
        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .times(1)
            .returning(|_| Err(server_error()));

        let request = loaded
            .drag_ended(DragEnd {
                task_id: TaskId::from(2),
                source: TaskStatus::InProgress,
                destination: Some(TaskStatus::Todo),
            })
            .unwrap();
        run(&mut loaded, request, &api).await;

        assert_eq!(titles(&loaded, TaskStatus::InProgress), ["Write API"]);
        assert!(!titles(&loaded, TaskStatus::Todo).contains(&"Write API"));
        assert!(!loaded.is_moving(&TaskId::from(2)));
    }

    #[rstest]
    fn drop_while_move_in_flight_is_ignored(mut loaded: Board) {
        let first = DragEnd {
            task_id: TaskId::from(3),
            source: TaskStatus::Done,
            destination: Some(TaskStatus::Todo),
        };
        let second = DragEnd {
            destination: Some(TaskStatus::InProgress),
            ..first.clone()
        };
        assert!(loaded.drag_ended(first).is_some());
        assert_eq!(loaded.drag_ended(second), None);
    }

    #[rstest]
    fn update_applies_to_current_list_not_snapshot(mut loaded: Board) {
        let request = loaded.drag_ended(DragEnd {
            task_id: TaskId::from(4),
            source: TaskStatus::Todo,
            destination: Some(TaskStatus::InProgress),
        });
        let Some(Request::UpdateTask(moved)) = request else {
            panic!("expected an update request");
        };

        // A creation lands while the update is still in flight
        loaded.apply(ApiEvent::TaskCreated(Ok(task(5, "Late arrival", TaskStatus::Todo))));
        loaded.apply(ApiEvent::TaskUpdated {
            task: moved,
            result: Ok(()),
        });

        assert_eq!(loaded.tasks().len(), 5);
        assert_eq!(titles(&loaded, TaskStatus::Todo), ["Design schema", "Late arrival"]);
        assert_eq!(titles(&loaded, TaskStatus::InProgress), ["Write API", "Write tests"]);
    }

    #[tokio::test]
    async fn move_sends_back_fields_the_board_does_not_know() {
        let stored: Task = serde_json::from_value(serde_json::json!({
            "id": 7,
            "title": "Audit logs",
            "status": "todo",
            "createdAt": "2024-01-01",
            "priority": 2
        }))
        .unwrap();
        let mut board = Board::new();
        board.apply(ApiEvent::TasksLoaded(Ok(vec![stored])));

        let mut api = MockTaskApi::new();
        api.expect_update_task()
            .withf(|t: &Task| {
                let body = serde_json::to_value(t).unwrap();
                body["status"] == "done"
                    && body["createdAt"] == "2024-01-01"
                    && body["priority"] == 2
            })
            .times(1)
            .returning(|_| Ok(()));

        let request = board
            .drag_ended(DragEnd {
                task_id: TaskId::from(7),
                source: TaskStatus::Todo,
                destination: Some(TaskStatus::Done),
            })
            .expect("cross-column drop");
        run(&mut board, request, &api).await;

        assert_eq!(board.tasks()[0].status, TaskStatus::Done);
        assert_eq!(board.tasks()[0].extra["priority"], 2);
    }

    #[tokio::test]
    async fn padded_title_is_posted_as_typed() {
        let mut api = MockTaskApi::new();
        api.expect_create_task()
            .withf(|t: &NewTask| t.title == "  Buy milk ")
            .times(1)
            .returning(|t| {
                Ok(Task {
                    id: TaskId::from(9),
                    title: t.title.clone(),
                    description: t.description.clone(),
                    status: t.status,
                    extra: serde_json::Map::new(),
                })
            });

        let mut board = Board::new();
        board.form.show();
        board.form.title = "  Buy milk ".into();
        let request = board.submit_form().expect("title is not blank");
        run(&mut board, request, &api).await;

        assert_eq!(board.tasks()[0].title, "  Buy milk ");
    }
}
