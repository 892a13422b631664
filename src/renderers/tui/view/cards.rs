//! Option cards and the recommendation panel

use crate::renderers::tui::{
    app::TuiApp,
    theme::{TuiTheme, UiSymbols},
};
use crate::types::{format_score, OptionProfile};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    prelude::*,
    widgets::{Paragraph, Wrap},
};

/// Draw the comparison area: one card per option plus the recommendation
pub fn draw_comparison(f: &mut Frame, app: &mut TuiApp, area: Rect) {
    let Some(topic) = app.current_topic() else {
        let empty = Paragraph::new("No topics in dataset")
            .style(TuiTheme::error_style())
            .block(TuiTheme::normal_block("Comparison"));
        f.render_widget(empty, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Option cards
            Constraint::Length(6), // Recommendation panel
        ])
        .split(area);

    // One equal-width column per option
    let option_count = topic.options.len() as u32;
    let constraints: Vec<Constraint> = (0..option_count)
        .map(|_| Constraint::Ratio(1, option_count))
        .collect();
    let card_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(chunks[0]);

    for (index, option) in topic.options.iter().enumerate() {
        draw_option_card(f, option, index, app.scroll_offset, card_chunks[index]);
    }

    draw_recommendation(f, app, chunks[1]);
}

fn draw_option_card(
    f: &mut Frame,
    option: &OptionProfile,
    index: usize,
    scroll: u16,
    area: Rect,
) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::styled("Score: ", TuiTheme::secondary_text_style()),
        Span::styled(
            format!("{}/10", format_score(option.score)),
            Style::default()
                .fg(TuiTheme::FOCUS)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    lines.push(Line::default());

    if !option.metrics.is_empty() {
        lines.push(Line::styled(
            "Key Metrics",
            TuiTheme::primary_text_style().add_modifier(Modifier::BOLD),
        ));
        for metric in &option.metrics {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", metric.label),
                    TuiTheme::secondary_text_style(),
                ),
                Span::styled(metric.value.clone(), TuiTheme::primary_text_style()),
            ]));
        }
        lines.push(Line::default());
    }

    lines.push(Line::styled("Strengths", TuiTheme::success_style()));
    for pro in &option.pros {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", UiSymbols::PRO), TuiTheme::success_style()),
            Span::styled(pro.text.clone(), TuiTheme::primary_text_style()),
            Span::styled(
                format!(" [{}]", pro.weight),
                TuiTheme::weight_style(pro.weight),
            ),
        ]));
    }
    lines.push(Line::default());

    lines.push(Line::styled("Weaknesses", TuiTheme::error_style()));
    for con in &option.cons {
        lines.push(Line::from(vec![
            Span::styled(format!("  {} ", UiSymbols::CON), TuiTheme::error_style()),
            Span::styled(con.text.clone(), TuiTheme::primary_text_style()),
            Span::styled(
                format!(" [{}]", con.weight),
                TuiTheme::weight_style(con.weight),
            ),
        ]));
    }

    if !option.best_for.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(
            "Best For",
            TuiTheme::primary_text_style().add_modifier(Modifier::BOLD),
        ));
        for item in &option.best_for {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {} ", UiSymbols::BULLET),
                    TuiTheme::info_style(),
                ),
                Span::styled(item.clone(), TuiTheme::primary_text_style()),
            ]));
        }
    }

    let title = format!("{}. {}", index + 1, option.name);
    let card = Paragraph::new(Text::from(lines))
        .block(TuiTheme::normal_block(&title))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    f.render_widget(card, area);
}

fn draw_recommendation(f: &mut Frame, app: &TuiApp, area: Rect) {
    let Some(topic) = app.current_topic() else {
        return;
    };
    let recommendation = &topic.recommendation;

    let lines = vec![
        Line::from(vec![
            Span::styled("Context: ", TuiTheme::secondary_text_style()),
            Span::styled(
                recommendation.context.clone(),
                TuiTheme::primary_text_style(),
            ),
        ]),
        Line::from(vec![
            Span::styled("Suggested Choice: ", TuiTheme::secondary_text_style()),
            Span::styled(recommendation.choice.clone(), TuiTheme::success_style()),
        ]),
        Line::from(vec![
            Span::styled("Reasoning: ", TuiTheme::secondary_text_style()),
            Span::styled(
                recommendation.reasoning.clone(),
                TuiTheme::primary_text_style(),
            ),
        ]),
    ];

    let panel = Paragraph::new(Text::from(lines))
        .block(TuiTheme::normal_block("Recommendation"))
        .wrap(Wrap { trim: true });

    f.render_widget(panel, area);
}
