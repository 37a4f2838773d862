use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::Action;
use crate::ui::Screen;

/// Convert crossterm events to Actions
pub fn handle_event(event: Event, current_screen: &Screen, help_visible: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            handle_key_event(key_event, current_screen, help_visible)
        }
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent, current_screen: &Screen, help_visible: bool) -> Action {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Global key bindings (work on all screens)
    match key.code {
        KeyCode::Char('c') if ctrl => return Action::Quit,
        KeyCode::Char('q') if !ctrl => return Action::Quit,
        KeyCode::Char('?') if !ctrl => return Action::ToggleHelp,
        KeyCode::Esc => return Action::Cancel,
        _ => {}
    }

    // The help overlay swallows everything else
    if help_visible {
        return Action::None;
    }

    match current_screen {
        Screen::Home => handle_home_keys(key, ctrl),
    }
}

fn handle_home_keys(key: KeyEvent, ctrl: bool) -> Action {
    match key.code {
        KeyCode::Char('u') if ctrl => Action::ClearInput,
        KeyCode::Char('l') if ctrl => Action::DismissNotification,
        KeyCode::Char(c) if !ctrl => Action::InputChar(c),
        KeyCode::Backspace => Action::DeleteChar,
        KeyCode::Delete => Action::ClearInput,
        KeyCode::Enter => Action::Submit,
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn home(code: KeyCode) -> Action {
        handle_event(press(code, KeyModifiers::NONE), &Screen::Home, false)
    }

    #[test]
    fn test_global_bindings() {
        assert!(matches!(home(KeyCode::Char('q')), Action::Quit));
        assert!(matches!(
            handle_event(
                press(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &Screen::Home,
                false
            ),
            Action::Quit
        ));
        assert!(matches!(home(KeyCode::Esc), Action::Cancel));
        assert!(matches!(
            handle_event(
                press(KeyCode::Char('?'), KeyModifiers::SHIFT),
                &Screen::Home,
                false
            ),
            Action::ToggleHelp
        ));
    }

    #[test]
    fn test_home_bindings() {
        assert!(matches!(home(KeyCode::Char('7')), Action::InputChar('7')));
        assert!(matches!(
            handle_event(
                press(KeyCode::Char('E'), KeyModifiers::SHIFT),
                &Screen::Home,
                false
            ),
            Action::InputChar('E')
        ));
        assert!(matches!(home(KeyCode::Backspace), Action::DeleteChar));
        assert!(matches!(home(KeyCode::Delete), Action::ClearInput));
        assert!(matches!(home(KeyCode::Enter), Action::Submit));
        assert!(matches!(
            handle_event(
                press(KeyCode::Char('u'), KeyModifiers::CONTROL),
                &Screen::Home,
                false
            ),
            Action::ClearInput
        ));
    }

    #[test]
    fn test_help_overlay_swallows_input() {
        let action = handle_event(press(KeyCode::Char('4'), KeyModifiers::NONE), &Screen::Home, true);
        assert!(matches!(action, Action::None));

        let action = handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &Screen::Home, true);
        assert!(matches!(action, Action::Cancel));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert!(matches!(
            handle_event(Event::Key(key), &Screen::Home, false),
            Action::None
        ));
    }
}
