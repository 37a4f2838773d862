use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

use crate::config::Settings;
use crate::models::{CalcInput, Calculation, InputError};
use crate::ui::Screen;

use super::async_ops::AsyncOperation;

const MAX_NOTIFICATIONS: usize = 50;
const MAX_INPUT_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct AppState {
    // Calculator data
    pub input: String,
    pub history: VecDeque<Calculation>,
    pub history_limit: usize,
    pub endpoint: String,

    // UI state
    pub current_screen: Screen,
    pub help_visible: bool,

    // Async operations tracking
    pub pending_operations: Vec<AsyncOperation>,
    pub notifications: VecDeque<Notification>,

    // Application control
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl AppState {
    pub fn new(settings: &Settings, endpoint: String, screen: Screen) -> Self {
        Self {
            input: String::new(),
            history: VecDeque::new(),
            history_limit: settings.history_limit.max(1),
            endpoint,
            current_screen: screen,
            help_visible: false,
            pending_operations: Vec::new(),
            notifications: VecDeque::new(),
            should_quit: false,
        }
    }

    // Input editing
    pub fn push_input(&mut self, c: char) -> bool {
        let accepted = matches!(c, '0'..='9' | '.' | '-' | '+' | 'e' | 'E');
        if accepted && self.input.len() < MAX_INPUT_LEN {
            self.input.push(c);
            true
        } else {
            false
        }
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    /// Parse the input line. The text is left in place when it is invalid so
    /// the user can fix it.
    pub fn take_input(&mut self) -> Result<CalcInput, InputError> {
        let parsed = self.input.parse::<CalcInput>()?;
        self.input.clear();
        Ok(parsed)
    }

    // History
    pub fn record_calculation(&mut self, calculation: Calculation) {
        self.history.push_front(calculation);
        self.history.truncate(self.history_limit);
    }

    pub fn get_calculation_mut(&mut self, id: Uuid) -> Option<&mut Calculation> {
        self.history.iter_mut().find(|c| c.id == id)
    }

    pub fn in_flight(&self) -> usize {
        self.pending_operations
            .iter()
            .filter(|op| op.is_in_progress())
            .count()
    }

    // Notification methods
    pub fn add_notification(&mut self, message: String, level: NotificationLevel) {
        self.notifications.push_back(Notification {
            message,
            level,
            timestamp: Utc::now(),
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.pop_front();
        }
    }

    /// Drop the newest notification, revealing the one before it.
    pub fn dismiss_notification(&mut self) {
        self.notifications.pop_back();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_limit(limit: usize) -> AppState {
        let settings = Settings {
            history_limit: limit,
            ..Settings::default()
        };
        AppState::new(&settings, "http://backend.test".to_string(), Screen::Home)
    }

    #[test]
    fn test_input_accepts_only_number_characters() {
        let mut state = state_with_limit(10);
        for c in "-1.5e+3x a".chars() {
            state.push_input(c);
        }
        assert_eq!(state.input, "-1.5e+3");

        state.pop_input();
        assert_eq!(state.input, "-1.5e+");
        state.clear_input();
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_input_is_capped() {
        let mut state = state_with_limit(10);
        for _ in 0..100 {
            state.push_input('9');
        }
        assert_eq!(state.input.len(), MAX_INPUT_LEN);
    }

    #[test]
    fn test_take_input_keeps_invalid_text() {
        let mut state = state_with_limit(10);
        state.input = "1e".to_string();
        assert!(state.take_input().is_err());
        assert_eq!(state.input, "1e");

        state.input = "12".to_string();
        assert_eq!(state.take_input().unwrap().value(), 12.0);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_history_is_bounded_newest_first() {
        let mut state = state_with_limit(2);
        for n in 1..=3 {
            state.record_calculation(Calculation::new(CalcInput::new(n as f64).unwrap()));
        }

        let inputs: Vec<f64> = state.history.iter().map(|c| c.input.value()).collect();
        assert_eq!(inputs, vec![3.0, 2.0]);
    }

    #[test]
    fn test_zero_history_limit_still_keeps_latest() {
        let mut state = state_with_limit(0);
        state.record_calculation(Calculation::new(CalcInput::new(1.0).unwrap()));
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_notifications_are_bounded() {
        let mut state = state_with_limit(10);
        for i in 0..60 {
            state.add_notification(format!("n{}", i), NotificationLevel::Info);
        }
        assert_eq!(state.notifications.len(), MAX_NOTIFICATIONS);
        assert_eq!(state.notifications.front().unwrap().message, "n10");
        assert_eq!(state.notifications.back().unwrap().message, "n59");

        state.dismiss_notification();
        assert_eq!(state.notifications.back().unwrap().message, "n58");
        assert_eq!(state.notifications.front().unwrap().message, "n10");
    }
}
