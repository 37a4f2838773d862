use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::api::Calculator;
use crate::events::{handle_event, Action};
use crate::models::{CalcFailure, CalcInput, Calculation};
use crate::state::{
    AppState, AsyncOperation, AsyncOperationResult, NotificationLevel, OperationType,
};
use crate::ui::render;

pub struct App {
    pub state: AppState,
    pub calculator: Arc<dyn Calculator>,
    pub action_tx: mpsc::UnboundedSender<Action>,
    pub action_rx: mpsc::UnboundedReceiver<Action>,
}

impl App {
    pub fn new(state: AppState, calculator: Arc<dyn Calculator>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        Self {
            state,
            calculator,
            action_tx,
            action_rx,
        }
    }

    /// Main event loop following The Elm Architecture pattern
    pub async fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Terminal reads block, so they run on a plain thread that is not
        // joined on shutdown and never loses a keystroke to a cancelled read.
        let (event_tx, mut event_rx) = mpsc::unbounded_channel::<Event>();
        std::thread::spawn(move || {
            while let Ok(event) = event::read() {
                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            // Render (TEA View)
            terminal.draw(|frame| render(frame, &self.state))?;

            tokio::select! {
                // User input events
                Some(event) = event_rx.recv() => {
                    let action = handle_event(
                        event,
                        &self.state.current_screen,
                        self.state.help_visible,
                    );
                    if !matches!(action, Action::None) {
                        self.update(action);
                    }
                }

                // Async operation results
                Some(action) = self.action_rx.recv() => {
                    self.update(action);
                }

                else => break,
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Update function (TEA Update) - processes Actions and updates state
    pub fn update(&mut self, action: Action) {
        match action {
            Action::InputChar(c) => {
                self.state.push_input(c);
            }

            Action::DeleteChar => {
                self.state.pop_input();
            }

            Action::ClearInput => {
                self.state.clear_input();
            }

            Action::Submit => self.submit(),

            Action::ToggleHelp => {
                self.state.help_visible = !self.state.help_visible;
            }

            Action::Cancel => {
                if self.state.help_visible {
                    self.state.help_visible = false;
                } else if !self.state.input.is_empty() {
                    self.state.clear_input();
                } else {
                    self.state.dismiss_notification();
                }
            }

            Action::AsyncOperationCompleted(op_id, result) => {
                self.complete_operation(op_id, result);
            }

            Action::DismissNotification => {
                self.state.dismiss_notification();
            }

            Action::Quit => {
                tracing::info!(in_flight = self.state.in_flight(), "quitting");
                self.state.should_quit = true;
            }

            Action::None => {}
        }
    }

    fn submit(&mut self) {
        let input = match self.state.take_input() {
            Ok(input) => input,
            Err(e) => {
                tracing::debug!(text = %self.state.input, error = %e, "rejected input");
                self.state
                    .add_notification(e.to_string(), NotificationLevel::Warning);
                return;
            }
        };

        let calculation = Calculation::new(input);
        let op = AsyncOperation::new(OperationType::Calculate(calculation.id));
        let op_id = op.id;

        self.state.record_calculation(calculation);
        self.state.pending_operations.push(op);

        self.spawn_calculate(op_id, input);
    }

    fn complete_operation(
        &mut self,
        op_id: Uuid,
        result: Result<AsyncOperationResult, CalcFailure>,
    ) {
        let Some(index) = self
            .state
            .pending_operations
            .iter()
            .position(|o| o.id == op_id)
        else {
            tracing::warn!(%op_id, "completion for unknown operation");
            return;
        };

        let mut op = self.state.pending_operations.remove(index);
        let OperationType::Calculate(calc_id) = op.operation_type;

        match result {
            Ok(AsyncOperationResult::Calculated(value)) => {
                op.complete();
                let message = match self.state.get_calculation_mut(calc_id) {
                    Some(calc) => {
                        let message = format!("{} -> {}", calc.input, value);
                        calc.succeed(value);
                        message
                    }
                    None => format!("Result: {}", value),
                };
                self.state
                    .add_notification(message, NotificationLevel::Success);
            }
            Err(failure) => {
                op.fail(failure.message.clone());
                self.state.add_notification(
                    format!("Calculation failed: {}", failure.message),
                    NotificationLevel::Error,
                );
                if let Some(calc) = self.state.get_calculation_mut(calc_id) {
                    calc.fail(failure);
                }
            }
        }

        let elapsed_ms = (chrono::Utc::now() - op.started_at).num_milliseconds();
        tracing::debug!(%op_id, %calc_id, status = ?op.status, elapsed_ms, "operation settled");
    }

    // Async operation spawners
    fn spawn_calculate(&self, op_id: Uuid, input: CalcInput) {
        let calculator = Arc::clone(&self.calculator);
        let tx = self.action_tx.clone();

        tokio::spawn(async move {
            let result = calculator.calculate(input).await;

            let action = match result {
                Ok(value) => Action::AsyncOperationCompleted(
                    op_id,
                    Ok(AsyncOperationResult::Calculated(value)),
                ),
                Err(e) => Action::AsyncOperationCompleted(op_id, Err(CalcFailure::from(e))),
            };

            let _ = tx.send(action);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::ApiResult;
    use crate::api::error::ApiError;
    use crate::config::Settings;
    use crate::models::{CalcOutcome, FailureKind};
    use crate::ui::Screen;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Doubles the input, or fails with the given status.
    struct FakeCalculator {
        fail_with: Option<u16>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl Calculator for FakeCalculator {
        async fn calculate(&self, input: CalcInput) -> ApiResult<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail_with {
                Some(status) => Err(ApiError::ServerError {
                    status,
                    message: "boom".to_string(),
                }),
                None => Ok(json!({"result": input.value() * 2.0})),
            }
        }
    }

    fn app_with(fail_with: Option<u16>) -> (App, Arc<FakeCalculator>) {
        let fake = Arc::new(FakeCalculator {
            fail_with,
            calls: AtomicUsize::new(0),
        });
        let state = AppState::new(
            &Settings::default(),
            "http://backend.test".to_string(),
            Screen::Home,
        );
        (App::new(state, fake.clone()), fake)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.update(Action::InputChar(c));
        }
    }

    async fn settle(app: &mut App) {
        let action = app.action_rx.recv().await.unwrap();
        app.update(action);
    }

    #[tokio::test]
    async fn test_submit_records_result() {
        let (mut app, fake) = app_with(None);
        type_text(&mut app, "4");
        app.update(Action::Submit);

        assert!(app.state.input.is_empty());
        assert_eq!(app.state.history.len(), 1);
        assert!(app.state.history[0].is_pending());
        assert_eq!(app.state.in_flight(), 1);

        settle(&mut app).await;

        assert_eq!(
            app.state.history[0].outcome,
            CalcOutcome::Succeeded(json!({"result": 8.0}))
        );
        assert!(app.state.pending_operations.is_empty());
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);

        let note = app.state.notifications.back().unwrap();
        assert_eq!(note.level, NotificationLevel::Success);
        assert_eq!(note.message, "4 -> {\"result\":8.0}");
    }

    #[tokio::test]
    async fn test_failure_is_recorded_on_the_entry() {
        let (mut app, fake) = app_with(Some(500));
        type_text(&mut app, "1.5");
        app.update(Action::Submit);
        settle(&mut app).await;

        match &app.state.history[0].outcome {
            CalcOutcome::Failed(failure) => {
                assert_eq!(failure.kind, FailureKind::Status);
                assert!(failure.message.contains("500"));
            }
            other => panic!("expected failure, got {other:?}"),
        }
        assert_eq!(fake.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            app.state.notifications.back().unwrap().level,
            NotificationLevel::Error
        );
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let (mut app, fake) = app_with(None);

        app.update(Action::Submit);
        type_text(&mut app, "1e");
        app.update(Action::Submit);

        assert!(app.state.history.is_empty());
        assert!(app.state.pending_operations.is_empty());
        assert_eq!(app.state.input, "1e");
        assert_eq!(app.state.notifications.len(), 2);
        assert!(app
            .state
            .notifications
            .iter()
            .all(|n| n.level == NotificationLevel::Warning));

        tokio::task::yield_now().await;
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_concurrent_completions_match_their_entries() {
        let (mut app, _) = app_with(None);
        type_text(&mut app, "1");
        app.update(Action::Submit);
        type_text(&mut app, "10");
        app.update(Action::Submit);

        settle(&mut app).await;
        settle(&mut app).await;

        for calc in &app.state.history {
            assert_eq!(
                calc.outcome,
                CalcOutcome::Succeeded(json!({"result": calc.input.value() * 2.0}))
            );
        }
        assert_eq!(app.state.in_flight(), 0);
    }

    #[tokio::test]
    async fn test_unknown_completion_is_ignored() {
        let (mut app, _) = app_with(None);
        app.update(Action::AsyncOperationCompleted(
            Uuid::new_v4(),
            Ok(AsyncOperationResult::Calculated(json!(1))),
        ));
        assert!(app.state.notifications.is_empty());
    }

    #[test]
    fn test_cancel_closes_help_then_clears_input_then_dismisses() {
        let (mut app, _) = app_with(None);
        app.state
            .add_notification("hello".to_string(), NotificationLevel::Info);
        type_text(&mut app, "42");
        app.update(Action::ToggleHelp);

        app.update(Action::Cancel);
        assert!(!app.state.help_visible);
        assert_eq!(app.state.input, "42");

        app.update(Action::Cancel);
        assert!(app.state.input.is_empty());
        assert_eq!(app.state.notifications.len(), 1);

        app.update(Action::Cancel);
        assert!(app.state.notifications.is_empty());
    }

    #[test]
    fn test_latest_warning_is_the_current_notification() {
        let (mut app, _) = app_with(None);
        app.state.add_notification(
            "Using backend http://backend.test".to_string(),
            NotificationLevel::Info,
        );

        app.update(Action::Submit);
        let current = app.state.notifications.back().unwrap();
        assert_eq!(current.level, NotificationLevel::Warning);
        assert_eq!(current.message, "Enter a number first");

        app.update(Action::DismissNotification);
        let current = app.state.notifications.back().unwrap();
        assert_eq!(current.level, NotificationLevel::Info);
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app_with(None);
        app.update(Action::Quit);
        assert!(app.state.should_quit);
    }
}
