use crate::dataset::DatasetStore;
use crate::error::Result;
use crate::output::ReportWriter;
use crate::renderers::text::TextReportRenderer;
use crate::renderers::OutputRenderer;
use crate::selection::Selection;
use crate::types::ComparisonTopic;
use std::path::PathBuf;

/// UI feedback for user actions
#[derive(Debug, Clone)]
pub struct ActionFeedback {
    pub message: String,
    pub feedback_type: FeedbackType,
    pub timestamp: std::time::Instant,
}

/// Type of feedback to show different colors/styles
#[derive(Debug, Clone)]
pub enum FeedbackType {
    Success,
    Warning,
    Error,
    Info,
}

/// Main TUI application state.
///
/// The store is read-only for the whole session; `selection` is the single
/// mutable cell that decides what gets drawn.
pub struct TuiApp {
    /// Immutable topic store
    pub store: DatasetStore,
    /// Active topic key, validated on every change
    pub selection: Selection,
    /// Scroll position inside the option cards
    pub scroll_offset: u16,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Transient feedback popup after an action
    pub action_feedback: Option<ActionFeedback>,
    /// Where saved reports land
    pub output_dir: PathBuf,
}

impl TuiApp {
    pub fn new(store: DatasetStore, selection: Selection, output_dir: PathBuf) -> Self {
        Self {
            store,
            selection,
            scroll_offset: 0,
            show_help: false,
            action_feedback: None,
            output_dir,
        }
    }

    /// The topic currently on screen. The selection is validated on every
    /// mutation, so this only returns `None` if the store were empty.
    pub fn current_topic(&self) -> Option<&ComparisonTopic> {
        self.store.get(self.selection.active())
    }

    /// Index of the active tab
    pub fn active_tab(&self) -> usize {
        self.selection.index(&self.store)
    }

    pub fn next_tab(&mut self) {
        self.selection.next(&self.store);
        self.scroll_offset = 0;
    }

    pub fn previous_tab(&mut self) {
        self.selection.previous(&self.store);
        self.scroll_offset = 0;
    }

    /// Jump to a tab by index; out-of-range is a no-op
    pub fn select_tab(&mut self, index: usize) {
        if self.selection.select_index(&self.store, index) {
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Render the active topic and write it next to the session's output
    /// directory, returning the report path.
    pub fn save_report(&self) -> Result<PathBuf> {
        let topic = self
            .current_topic()
            .ok_or_else(|| crate::error::TradeoffError::general("No topic selected"))?;

        let report = TextReportRenderer::new().render(topic);
        ReportWriter::new(&self.output_dir).write_report(&topic.key, &report)
    }

    /// Show feedback message to user
    pub fn show_feedback(&mut self, message: &str, feedback_type: FeedbackType) {
        self.action_feedback = Some(ActionFeedback {
            message: message.to_string(),
            feedback_type,
            timestamp: std::time::Instant::now(),
        });
    }

    /// Clear feedback messages older than the display window
    pub fn clear_old_feedback(&mut self) {
        if let Some(ref feedback) = self.action_feedback {
            if feedback.timestamp.elapsed().as_millis() > 2500 {
                self.action_feedback = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> TuiApp {
        let store = DatasetStore::builtin();
        let selection = Selection::first(&store).unwrap();
        TuiApp::new(store, selection, PathBuf::from("."))
    }

    #[test]
    fn test_tab_navigation_resets_scroll() {
        let mut app = app();
        app.scroll_offset = 5;
        app.next_tab();
        assert_eq!(app.active_tab(), 1);
        assert_eq!(app.scroll_offset, 0);
    }

    #[test]
    fn test_select_tab_out_of_range_keeps_state() {
        let mut app = app();
        app.scroll_offset = 3;
        app.select_tab(42);
        assert_eq!(app.active_tab(), 0);
        assert_eq!(app.scroll_offset, 3);
    }

    #[test]
    fn test_current_topic_follows_selection() {
        let mut app = app();
        app.select_tab(2);
        assert_eq!(app.current_topic().unwrap().key, "stack");
    }

    #[test]
    fn test_feedback_lifecycle() {
        let mut app = app();
        app.show_feedback("saved", FeedbackType::Success);
        assert!(app.action_feedback.is_some());
        app.clear_old_feedback();
        // Still fresh, must survive
        assert!(app.action_feedback.is_some());
    }
}
