use uuid::Uuid;

use crate::models::CalcFailure;
use crate::state::AsyncOperationResult;

#[derive(Debug, Clone)]
pub enum Action {
    // Input line
    InputChar(char),
    DeleteChar,
    ClearInput,
    Submit,

    // Overlays
    ToggleHelp,
    Cancel,

    // Async operation results
    AsyncOperationCompleted(Uuid, Result<AsyncOperationResult, CalcFailure>),

    // Notifications
    DismissNotification,

    // System
    Quit,

    // No-op
    None,
}
