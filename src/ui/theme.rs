use ratatui::style::{Color, Modifier, Style};

use crate::state::NotificationLevel;

pub struct Theme {
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
        }
    }
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notification_style(&self, level: &NotificationLevel) -> Style {
        match level {
            NotificationLevel::Info => self.text_style(),
            NotificationLevel::Success => self.success_style(),
            NotificationLevel::Warning => self.warning_style(),
            NotificationLevel::Error => self.error_style(),
        }
    }
}
