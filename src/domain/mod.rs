//! Domain model for follow-up task tracking.
//!
//! The domain models validated task creation input, the task lifecycle,
//! and the calendar-day window served by the operator queue, while keeping
//! all infrastructure concerns outside of the domain boundary.

mod due;
mod error;
mod ids;
mod status;
mod task;
mod task_type;
mod window;

pub use due::DueAt;
pub use error::{ParseTaskStatusError, ParseTaskTypeError, TaskDomainError};
pub use ids::{ApplicationId, TaskId, TenantId};
pub use status::TaskStatus;
pub use task::{NewTaskParams, PersistedTaskData, Task};
pub use task_type::TaskType;
pub use window::DayWindow;
