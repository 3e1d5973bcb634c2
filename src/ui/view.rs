//! Pure renderers turning planner state into ratatui text.
//!
//! Nothing here touches the terminal or mutates state; components decide where
//! the returned text is painted.

use crate::config::DisplayConfig;
use crate::constants::{EMPTY_UPCOMING, UPCOMING_LIMIT};
use crate::entities::{Category, Collections, Item, Status};
use crate::utils::datetime::{format_date_with, format_relative, format_time_with, weekday_name};
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Quick-add shortcuts offered on the dashboard: (key, category)
pub const QUICK_ACTIONS: [(char, Category); 3] = [
    ('p', Category::Projects),
    ('s', Category::Assignments),
    ('c', Category::Classes),
];

/// Everything the dashboard cards show.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
    /// Future deadlines across all categories, soonest first
    pub upcoming: Vec<&'a Item>,
    pub pending_projects: Vec<&'a Item>,
    pub pending_assignments: Vec<&'a Item>,
}

impl<'a> DashboardSummary<'a> {
    pub fn build(items: &'a Collections, today: NaiveDate) -> Self {
        let mut upcoming: Vec<&Item> = items
            .iter_all()
            .filter(|item| item.deadline().is_some_and(|deadline| deadline > today))
            .collect();
        // Stable: equal deadlines keep category then insertion order
        upcoming.sort_by_key(|item| item.deadline());
        upcoming.truncate(UPCOMING_LIMIT);

        let pending = |category: Category| -> Vec<&'a Item> {
            items
                .list(category)
                .iter()
                .filter(|item| item.status() != Some(Status::Done))
                .collect()
        };

        Self {
            upcoming,
            pending_projects: pending(Category::Projects),
            pending_assignments: pending(Category::Assignments),
        }
    }
}

fn empty_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", message),
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    ))
}

fn deadline_span(deadline: NaiveDate, today: NaiveDate, display: &DisplayConfig) -> Span<'static> {
    Span::styled(
        format!(
            "{} ({})",
            format_date_with(deadline, &display.date_format),
            format_relative(deadline, today)
        ),
        Style::default().fg(ORANGE),
    )
}

/// Body of the upcoming deadlines card
pub fn upcoming_lines(summary: &DashboardSummary<'_>, today: NaiveDate, display: &DisplayConfig) -> Vec<Line<'static>> {
    if summary.upcoming.is_empty() {
        return vec![empty_line(EMPTY_UPCOMING)];
    }
    summary
        .upcoming
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::raw("  • "),
                Span::styled(item.title.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!(" [{}]", item.category().singular()),
                    Style::default().fg(Color::DarkGray),
                ),
            ];
            if let Some(deadline) = item.deadline() {
                spans.push(Span::raw(" "));
                spans.push(deadline_span(deadline, today, display));
            }
            Line::from(spans)
        })
        .collect()
}

/// Body of a pending projects/assignments card
pub fn pending_lines(items: &[&Item], empty_message: &str, display: &DisplayConfig) -> Vec<Line<'static>> {
    if items.is_empty() {
        return vec![empty_line(empty_message)];
    }
    items
        .iter()
        .map(|item| {
            let mut spans = vec![
                Span::raw("  • "),
                Span::styled(item.title.clone(), Style::default().fg(Color::White)),
            ];
            if let Some(course) = item.course() {
                spans.push(Span::styled(format!(" #{}", course), Style::default().fg(Color::Cyan)));
            }
            if let Some(deadline) = item.deadline() {
                spans.push(Span::styled(
                    format!(" due {}", format_date_with(deadline, &display.date_format)),
                    Style::default().fg(ORANGE),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

/// Quick-add shortcut row
pub fn quick_action_line() -> Line<'static> {
    let mut spans = Vec::new();
    for (index, (key, category)) in QUICK_ACTIONS.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled("  •  ", Style::default().fg(Color::Gray)));
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", category.add_label()),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

/// Message shown when a category has no entries
pub fn empty_category_message(category: Category) -> String {
    format!("No {} yet. Add one to get started!", category.key())
}

/// One list row for `item`, showing whichever fields it has
pub fn item_line(item: &Item, today: NaiveDate, display: &DisplayConfig) -> Line<'static> {
    let mut spans = Vec::new();
    let done = item.status() == Some(Status::Done);

    if let Some(status) = item.status() {
        let (icon, style) = match status {
            Status::Done => ("[x] ", Style::default().fg(Color::Green)),
            Status::Pending => ("[ ] ", Style::default().fg(Color::White)),
        };
        spans.push(Span::styled(icon, style));
    }

    let title_style = if done {
        Style::default().fg(Color::Green).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(Color::White)
    };
    spans.push(Span::styled(item.title.clone(), title_style));

    if let Some(course) = item.course() {
        spans.push(Span::styled(format!(" #{}", course), Style::default().fg(Color::Cyan)));
    }
    if let Some(deadline) = item.deadline() {
        spans.push(Span::raw(" "));
        spans.push(deadline_span(deadline, today, display));
    }
    if let Some(meeting) = item.schedule() {
        spans.push(Span::styled(
            format!(
                " {} at {}",
                weekday_name(meeting.day),
                format_time_with(meeting.time, &display.time_format)
            ),
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(semester) = item.semester() {
        spans.push(Span::styled(
            format!(" Semester: {}", semester),
            Style::default().fg(Color::Blue),
        ));
    }
    if let Some(attachment) = item.attachment() {
        spans.push(Span::styled(
            format!(" 📎 {}", attachment.file_name),
            Style::default().fg(Color::Yellow),
        ));
    }
    if let Some(status) = item.status() {
        spans.push(Span::styled(
            format!(" ({})", status.as_str()),
            Style::default().fg(Color::DarkGray),
        ));
    }

    Line::from(spans)
}

/// Key hints for the actions available on `item`
pub fn item_actions(item: &Item) -> Vec<(&'static str, &'static str)> {
    let mut actions = Vec::new();
    if item.attachment().is_some() {
        actions.push(("o", "Download"));
    }
    if item.status().is_some() {
        let label = match item.status() {
            Some(Status::Done) => "Mark Pending",
            _ => "Mark Done",
        };
        actions.push(("Space", label));
    }
    actions.push(("e", "Edit"));
    actions.push(("d", "Delete"));
    actions
}
