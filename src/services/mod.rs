//! Application services orchestrating the follow-up task core.

mod creation;
mod today;

pub use creation::{
    CreateTaskError, CreateTaskRequest, CreateTaskResult, ErrorKind, TaskCreationService,
};
pub use today::{TodayQueueError, TodayQueueResult, TodayQueueService};
