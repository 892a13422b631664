use super::app::TuiApp;
use super::msg::Msg;

/// Side effects produced by the reducer. The main loop executes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Effect {
    #[default]
    None,
    SaveReport,
    Quit,
}

pub fn update(app: &mut TuiApp, msg: Msg) -> Effect {
    match msg {
        Msg::Quit => Effect::Quit,
        Msg::ToggleHelp => {
            app.toggle_help();
            Effect::None
        }

        Msg::NextTab => {
            app.next_tab();
            Effect::None
        }
        Msg::PrevTab => {
            app.previous_tab();
            Effect::None
        }
        Msg::SelectTab(index) => {
            app.select_tab(index);
            Effect::None
        }

        Msg::ScrollUp => {
            app.scroll_up();
            Effect::None
        }
        Msg::ScrollDown => {
            app.scroll_down();
            Effect::None
        }
        Msg::ScrollTop => {
            app.scroll_to_top();
            Effect::None
        }

        Msg::SaveReport => Effect::SaveReport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetStore;
    use crate::selection::Selection;
    use std::path::PathBuf;

    fn app() -> TuiApp {
        let store = DatasetStore::builtin();
        let selection = Selection::first(&store).unwrap();
        TuiApp::new(store, selection, PathBuf::from("."))
    }

    #[test]
    fn test_quit_produces_quit_effect() {
        let mut app = app();
        assert_eq!(update(&mut app, Msg::Quit), Effect::Quit);
    }

    #[test]
    fn test_tab_messages_move_selection() {
        let mut app = app();
        update(&mut app, Msg::NextTab);
        assert_eq!(app.selection.active(), "cloud");
        update(&mut app, Msg::PrevTab);
        assert_eq!(app.selection.active(), "api");
        update(&mut app, Msg::SelectTab(2));
        assert_eq!(app.selection.active(), "stack");
    }

    #[test]
    fn test_save_report_is_an_effect() {
        let mut app = app();
        assert_eq!(update(&mut app, Msg::SaveReport), Effect::SaveReport);
    }

    #[test]
    fn test_scroll_messages() {
        let mut app = app();
        update(&mut app, Msg::ScrollDown);
        update(&mut app, Msg::ScrollDown);
        assert_eq!(app.scroll_offset, 2);
        update(&mut app, Msg::ScrollUp);
        assert_eq!(app.scroll_offset, 1);
        update(&mut app, Msg::ScrollTop);
        assert_eq!(app.scroll_offset, 0);
    }
}
