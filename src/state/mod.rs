pub mod app_state;
pub mod async_ops;

pub use app_state::{AppState, NotificationLevel};
pub use async_ops::{AsyncOperation, AsyncOperationResult, OperationType};
