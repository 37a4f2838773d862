use chrono::{DateTime, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::input::CalcInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Timeout,
    Status,
    InvalidResponse,
}

/// Cloneable record of why a calculate call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalcFailure {
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalcOutcome {
    Pending,
    Succeeded(Value),
    Failed(CalcFailure),
}

#[derive(Debug, Clone)]
pub struct Calculation {
    pub id: Uuid,
    pub input: CalcInput,
    pub outcome: CalcOutcome,
    pub requested_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Calculation {
    pub fn new(input: CalcInput) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            outcome: CalcOutcome::Pending,
            requested_at: Utc::now(),
            completed_at: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.outcome, CalcOutcome::Pending)
    }

    pub fn succeed(&mut self, response: Value) {
        self.outcome = CalcOutcome::Succeeded(response);
        self.completed_at = Some(Utc::now());
    }

    pub fn fail(&mut self, failure: CalcFailure) {
        self.outcome = CalcOutcome::Failed(failure);
        self.completed_at = Some(Utc::now());
    }

    /// Round-trip time, once the call has settled.
    pub fn elapsed_ms(&self) -> Option<i64> {
        self.completed_at
            .map(|done| (done - self.requested_at).num_milliseconds())
    }
}

impl FailureKind {
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Transport => "network",
            FailureKind::Timeout => "timeout",
            FailureKind::Status => "server",
            FailureKind::InvalidResponse => "bad response",
        }
    }
}
