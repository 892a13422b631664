use super::app::TuiApp;
use super::msg::Msg;
use crate::error::{Result, TradeoffError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

/// Poll for the next input event and map it to a message, if any
pub fn next_msg(app: &TuiApp) -> Result<Option<Msg>> {
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TradeoffError::general(format!("Failed to poll events: {}", e)))?
    {
        match event::read()
            .map_err(|e| TradeoffError::general(format!("Failed to read event: {}", e)))?
        {
            Event::Key(key_event) => Ok(map_key(app, key_event)),
            // Terminal resize - ratatui handles this on the next draw
            _ => Ok(None),
        }
    } else {
        Ok(None)
    }
}

fn map_key(app: &TuiApp, key: KeyEvent) -> Option<Msg> {
    // While the help overlay is open, any key closes it (except quit)
    if app.show_help {
        return match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
            _ => Some(Msg::ToggleHelp),
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Msg::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),

        KeyCode::F(1) | KeyCode::Char('?') => Some(Msg::ToggleHelp),

        KeyCode::Right | KeyCode::Tab => Some(Msg::NextTab),
        KeyCode::Left | KeyCode::BackTab => Some(Msg::PrevTab),
        KeyCode::Char(c @ '1'..='9') => {
            Some(Msg::SelectTab(c as usize - '1' as usize))
        }

        KeyCode::Up => Some(Msg::ScrollUp),
        KeyCode::Down => Some(Msg::ScrollDown),
        KeyCode::Home => Some(Msg::ScrollTop),

        KeyCode::Char('s') => Some(Msg::SaveReport),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetStore;
    use crate::selection::Selection;
    use crossterm::event::KeyEventKind;
    use std::path::PathBuf;

    fn app() -> TuiApp {
        let store = DatasetStore::builtin();
        let selection = Selection::first(&store).unwrap();
        TuiApp::new(store, selection, PathBuf::from("."))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_key_mapping() {
        let app = app();
        assert_eq!(map_key(&app, key(KeyCode::Char('q'))), Some(Msg::Quit));
        assert_eq!(map_key(&app, key(KeyCode::Tab)), Some(Msg::NextTab));
        assert_eq!(map_key(&app, key(KeyCode::BackTab)), Some(Msg::PrevTab));
        assert_eq!(
            map_key(&app, key(KeyCode::Char('3'))),
            Some(Msg::SelectTab(2))
        );
        assert_eq!(map_key(&app, key(KeyCode::Char('s'))), Some(Msg::SaveReport));
        assert_eq!(map_key(&app, key(KeyCode::Char('z'))), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let app = app();
        let event = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        };
        assert_eq!(map_key(&app, event), Some(Msg::Quit));
    }

    #[test]
    fn test_any_key_closes_help() {
        let mut app = app();
        app.show_help = true;
        assert_eq!(
            map_key(&app, key(KeyCode::Char('s'))),
            Some(Msg::ToggleHelp)
        );
        assert_eq!(map_key(&app, key(KeyCode::Esc)), Some(Msg::Quit));
    }
}
