//! Quiz panel overlay component

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::layout::centered_rect;
use crate::app::state::QuizUiState;
use crate::quiz::{AnswerFeedback, QuizResult, QuizSession, QuizState};
use crate::theme::Theme;

/// Draw the quiz panel as a centered overlay
pub fn draw(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizSession,
    ui: &QuizUiState,
    pass_percentage: u8,
    theme: &Theme,
) {
    // Calculate centered overlay area (70% width, 70% height)
    let overlay_area = centered_rect(70, 70, area);

    // Clear the background area
    frame.render_widget(Clear, overlay_area);

    let state = quiz.state();
    let title = match state {
        QuizState::Completed(_) => " Quiz Results ",
        QuizState::InProgress { .. } => " Quiz ",
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .style(Style::default().bg(theme.bg_secondary));

    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    match state {
        QuizState::Completed(result) => {
            draw_results(frame, inner, quiz, result, pass_percentage, theme)
        }
        QuizState::InProgress { .. } => draw_question(frame, inner, quiz, ui, theme),
    }
}

/// Draw results screen
fn draw_results(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizSession,
    result: QuizResult,
    pass_percentage: u8,
    theme: &Theme,
) {
    let mut lines = vec![Line::from(""), Line::from("")];

    let header = format!("{}/{} correct ({}%)", result.score, result.total, result.percentage());
    if result.passed(pass_percentage) {
        lines.push(Line::from(Span::styled(
            format!("Passed! {header}"),
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("{header} - Need {pass_percentage}% to pass"),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // Question results
    let mut result_spans = Vec::new();
    for (i, question) in quiz.questions().iter().enumerate() {
        let is_correct = quiz.answer(i).is_some_and(|a| question.is_correct(a));
        let (marker, style) = if is_correct {
            (" \u{2713} ", Style::default().fg(theme.success)) // ✓
        } else {
            (" \u{2717} ", Style::default().fg(theme.error)) // ✗
        };
        result_spans.push(Span::styled(format!("Q{}{}", i + 1, marker), style));
    }
    lines.push(Line::from(result_spans));

    lines.push(Line::from(""));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Retake    [Esc] Back to Topic",
        Style::default().fg(theme.fg_muted),
    )));

    let para = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

/// Draw current question
fn draw_question(
    frame: &mut Frame,
    area: Rect,
    quiz: &QuizSession,
    ui: &QuizUiState,
    theme: &Theme,
) {
    let Some(question) = quiz.current_question() else {
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Question {} of {}", quiz.current_index() + 1, quiz.total()),
            Style::default().fg(theme.fg_muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            question.prompt(),
            Style::default().fg(theme.fg_primary).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    // Options
    for (i, option) in question.options().iter().enumerate() {
        let is_selected = i == ui.cursor;
        let prefix = if is_selected { "\u{25CF}" } else { "\u{25CB}" }; // ● or ○

        let style = match &ui.feedback {
            Some(fb) if i == fb.correct => Style::default().fg(theme.success),
            Some(fb) if i == fb.chosen => Style::default().fg(theme.error),
            Some(_) => Style::default().fg(theme.fg_muted),
            None if is_selected => {
                Style::default().fg(theme.accent_primary).add_modifier(Modifier::BOLD)
            }
            None => Style::default().fg(theme.fg_secondary),
        };

        lines.push(Line::from(Span::styled(format!("  {} {}) {}", prefix, i + 1, option), style)));
    }

    lines.push(Line::from(""));

    if let Some(feedback) = &ui.feedback {
        lines.extend(feedback_lines(feedback, theme));
        lines.push(Line::from(""));
    }

    let hint = if ui.feedback.is_some() {
        "[Enter] Next    [Esc] Back to Topic"
    } else {
        "[j/k] Select    [1-9] Answer    [Enter] Confirm    [Esc] Back"
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(theme.fg_muted))));

    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(para, area);
}

fn feedback_lines<'a>(feedback: &'a AnswerFeedback, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    if feedback.is_correct() {
        lines.push(Line::from(Span::styled(
            "Correct!",
            Style::default().fg(theme.success).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Incorrect. The answer is option {}.", feedback.correct + 1),
            Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(explanation) = &feedback.explanation {
        lines.push(Line::from(Span::styled(
            explanation.as_str(),
            Style::default().fg(theme.fg_secondary),
        )));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_answer_names_correct_option() {
        let feedback =
            AnswerFeedback { question_index: 0, chosen: 0, correct: 2, explanation: None };
        let lines = feedback_lines(&feedback, &Theme::default());
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans[0].content, "Incorrect. The answer is option 3.");
    }

    #[test]
    fn explanation_follows_verdict() {
        let feedback = AnswerFeedback {
            question_index: 0,
            chosen: 1,
            correct: 1,
            explanation: Some("Because.".into()),
        };
        let lines = feedback_lines(&feedback, &Theme::default());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "Correct!");
        assert_eq!(lines[1].spans[0].content, "Because.");
    }
}
