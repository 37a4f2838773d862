use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct AsyncOperation {
    pub id: Uuid,
    pub operation_type: OperationType,
    pub status: AsyncStatus,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    /// Carries the id of the history entry the call belongs to.
    Calculate(Uuid),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncStatus {
    InProgress,
    Completed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub enum AsyncOperationResult {
    Calculated(Value),
}

impl AsyncOperation {
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            id: Uuid::new_v4(),
            operation_type,
            status: AsyncStatus::InProgress,
            started_at: Utc::now(),
        }
    }

    pub fn complete(&mut self) {
        self.status = AsyncStatus::Completed;
    }

    pub fn fail(&mut self, error: String) {
        self.status = AsyncStatus::Failed(error);
    }

    pub fn is_in_progress(&self) -> bool {
        matches!(self.status, AsyncStatus::InProgress)
    }
}
