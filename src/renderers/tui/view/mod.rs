use crate::renderers::tui::{
    app::{ActionFeedback, FeedbackType, TuiApp},
    theme::{KeyHints, TuiTheme, UiSymbols},
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

pub mod cards;

/// Main UI drawing function
pub fn draw(f: &mut Frame, app: &mut TuiApp) {
    let size = f.area();

    // Main layout: title bar + tab strip + content + status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tab strip
            Constraint::Min(1),    // Comparison content
            Constraint::Length(3), // Status/help bar
        ])
        .split(size);

    draw_title_bar(f, app, chunks[0]);
    draw_tab_strip(f, app, chunks[1]);
    cards::draw_comparison(f, app, chunks[2]);
    draw_status_bar(f, chunks[3]);

    if app.show_help {
        draw_help_overlay(f);
    }

    if let Some(ref feedback) = app.action_feedback {
        draw_feedback_popup(f, feedback);
    }
}

/// Draw the title bar with the active topic
fn draw_title_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
    let topic_title = app
        .current_topic()
        .map(|t| t.title.as_str())
        .unwrap_or("No topic");

    let title_text = format!(
        "Trade-off Analyzer - {} | {} of {} topics",
        topic_title,
        app.active_tab() + 1,
        app.store.len()
    );

    let title = Paragraph::new(title_text)
        .style(TuiTheme::primary_text_style().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(TuiTheme::focused_block("Trade-off Analyzer"));

    f.render_widget(title, area);
}

/// Draw one tab per topic, highlighting the active one
fn draw_tab_strip(f: &mut Frame, app: &TuiApp, area: Rect) {
    let titles: Vec<Line> = app
        .store
        .topics()
        .iter()
        .map(|topic| Line::from(topic.title.as_str()))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab())
        .style(TuiTheme::inactive_tab_style())
        .highlight_style(TuiTheme::active_tab_style())
        .divider("|")
        .block(TuiTheme::normal_block("Topics"));

    f.render_widget(tabs, area);
}

/// Draw the status/help bar
fn draw_status_bar(f: &mut Frame, area: Rect) {
    let key_hints = KeyHints::format_key_hints(&KeyHints::browser_help());
    let status_content = format!("{} {}", UiSymbols::INFO, key_hints);

    let status = Paragraph::new(status_content)
        .style(TuiTheme::secondary_text_style())
        .alignment(Alignment::Center)
        .block(TuiTheme::normal_block("Quick Help"))
        .wrap(Wrap { trim: true });

    f.render_widget(status, area);
}

/// Draw help overlay
fn draw_help_overlay(f: &mut Frame) {
    let area = centered_rect(70, 50, f.area());
    f.render_widget(Clear, area);

    let help_text = format!(
        "Browser Help\n\n{}\n\n{} The tab strip mirrors the dataset's topic order.\n{} Reports are plain text, named tradeoff-analysis-<topic>-<millis>.txt.\n\nPress any key to close this help.",
        KeyHints::format_key_hints(&KeyHints::browser_help()),
        UiSymbols::BULLET,
        UiSymbols::BULLET,
    );

    let help_popup = Paragraph::new(help_text)
        .style(TuiTheme::primary_text_style())
        .block(TuiTheme::focused_block("Help").style(TuiTheme::info_style()))
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);

    f.render_widget(help_popup, area);
}

/// Draw feedback popup
fn draw_feedback_popup(f: &mut Frame, feedback: &ActionFeedback) {
    let area = centered_rect(60, 10, f.area());
    f.render_widget(Clear, area);

    let (style, symbol) = match feedback.feedback_type {
        FeedbackType::Success => (TuiTheme::success_style(), UiSymbols::PRO),
        FeedbackType::Warning => (TuiTheme::warning_style(), UiSymbols::WARNING),
        FeedbackType::Error => (TuiTheme::error_style(), UiSymbols::CON),
        FeedbackType::Info => (TuiTheme::info_style(), UiSymbols::INFO),
    };

    let feedback_text = format!("{} {}", symbol, feedback.message);
    let feedback_popup = Paragraph::new(feedback_text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(feedback_popup, area);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
