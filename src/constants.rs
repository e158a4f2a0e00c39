//! Application constants and configuration

pub const TASKS_URL: &str = "https://assignement01-backend-2.onrender.com/tasks";
pub const APP_NAME: &str = "Kanban Board";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOG_FILE_NAME: &str = "kanban-board.log";
