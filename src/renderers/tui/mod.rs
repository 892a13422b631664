//! Interactive terminal browser for comparison topics
//!
//! Built on ratatui with a unidirectional msg/update/view flow. When the
//! `tui` feature is disabled, a stub renderer keeps the rest of the crate
//! compiling and points users at the CLI commands.

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod events;
#[cfg(feature = "tui")]
pub mod msg;
#[cfg(feature = "tui")]
pub mod theme;
#[cfg(feature = "tui")]
pub mod update;
#[cfg(feature = "tui")]
pub mod view;

#[cfg(feature = "tui")]
pub use app::TuiApp;

use crate::dataset::DatasetStore;
use crate::error::Result;
use crate::renderers::OutputRenderer;
use crate::selection::Selection;
use crate::types::ComparisonTopic;
use std::path::PathBuf;

#[cfg(feature = "tui")]
use crate::error::TradeoffError;

#[cfg(feature = "tui")]
use ratatui::{backend::CrosstermBackend, Terminal};

#[cfg(feature = "tui")]
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

#[cfg(feature = "tui")]
use std::io::{self, Stdout};

/// Interactive renderer trait for renderers that support user interaction
pub trait InteractiveRenderer: OutputRenderer {
    /// Run the interactive interface over a dataset
    fn run_interactive(&self, store: DatasetStore, selection: Selection) -> Result<()>;
}

/// TUI renderer for browsing comparison topics
#[cfg(feature = "tui")]
pub struct TuiRenderer {
    output_dir: PathBuf,
}

#[cfg(feature = "tui")]
impl TuiRenderer {
    /// Create a new TUI renderer saving reports to the current directory
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }

    /// Set where saved reports land
    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| TradeoffError::general(format!("Failed to enable raw mode: {}", e)))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            TradeoffError::general(format!("Failed to enter alternate screen: {}", e))
        })?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
            .map_err(|e| TradeoffError::general(format!("Failed to create terminal: {}", e)))
    }

    /// Restore terminal after TUI
    fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| TradeoffError::general(format!("Failed to disable raw mode: {}", e)))?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
            TradeoffError::general(format!("Failed to leave alternate screen: {}", e))
        })?;
        terminal
            .show_cursor()
            .map_err(|e| TradeoffError::general(format!("Failed to show cursor: {}", e)))?;
        Ok(())
    }

    /// Run the main TUI event loop
    fn run_app(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        mut app: TuiApp,
    ) -> Result<()> {
        loop {
            // Clear old feedback messages
            app.clear_old_feedback();

            // Draw the UI
            terminal
                .draw(|f| view::draw(f, &mut app))
                .map_err(|e| TradeoffError::general(format!("Failed to draw: {}", e)))?;

            // Map input to Msg and update via reducer
            if let Some(msg) = events::next_msg(&app)? {
                let effect = update::update(&mut app, msg);
                match effect {
                    update::Effect::Quit => break,
                    update::Effect::SaveReport => match app.save_report() {
                        Ok(path) => app.show_feedback(
                            &format!("Report saved to {}", path.display()),
                            app::FeedbackType::Success,
                        ),
                        Err(e) => app.show_feedback(
                            &format!("Report failed: {}", e),
                            app::FeedbackType::Error,
                        ),
                    },
                    update::Effect::None => {}
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "tui")]
impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tui")]
impl OutputRenderer for TuiRenderer {
    fn render(&self, topic: &ComparisonTopic) -> String {
        // Fallback to CLI renderer for non-interactive use
        crate::renderers::CliRenderer::new().render(topic)
    }
}

#[cfg(feature = "tui")]
impl InteractiveRenderer for TuiRenderer {
    fn run_interactive(&self, store: DatasetStore, selection: Selection) -> Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let app = TuiApp::new(store, selection, self.output_dir.clone());

        let result = self.run_app(&mut terminal, app);

        // Always try to restore terminal, even if the app failed
        if let Err(restore_err) = Self::restore_terminal(&mut terminal) {
            eprintln!("Failed to restore terminal: {}", restore_err);
        }

        result
    }
}

// Provide stub implementations when the TUI feature is disabled
#[cfg(not(feature = "tui"))]
pub struct TuiRenderer {
    _output_dir: PathBuf,
}

#[cfg(not(feature = "tui"))]
impl TuiRenderer {
    pub fn new() -> Self {
        Self {
            _output_dir: PathBuf::from("."),
        }
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, output_dir: P) -> Self {
        self._output_dir = output_dir.into();
        self
    }
}

#[cfg(not(feature = "tui"))]
impl Default for TuiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "tui"))]
impl OutputRenderer for TuiRenderer {
    fn render(&self, topic: &ComparisonTopic) -> String {
        crate::renderers::CliRenderer::new().render(topic)
    }
}

#[cfg(not(feature = "tui"))]
impl InteractiveRenderer for TuiRenderer {
    fn run_interactive(&self, _store: DatasetStore, _selection: Selection) -> Result<()> {
        Err(crate::error::TradeoffError::general(
            "TUI feature not compiled. Use `show` or `report` instead.",
        ))
    }
}
