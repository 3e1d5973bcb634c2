use super::common::{create_instructions_paragraph, shortcuts};
use super::scroll_behavior::DialogScroll;
use crate::constants::{CONFIRM_DELETE, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

const HELP_TEXT: &str = r"
ACADEMIC PLANNER
================

NAVIGATION
----------
J/K         Switch view (down/up)
1-6         Jump to Dashboard, Projects, Assignments, Classes, Books, CTs
j/k         Select item (down/up)
Esc         Cancel action or close dialogs

DASHBOARD
---------
p           Add project
s           Add assignment
c           Add class

ITEMS
-----
a           Add item to the current category
e           Edit selected item
d           Delete selected item (with confirmation)
Space       Toggle done/pending (projects and assignments)
o           Save the attachment of the selected book

FORMS
-----
Tab         Next field
Shift+Tab   Previous field
←/→         Change day of week
Enter       Submit
Esc         Close without saving

GENERAL
-------
?           Toggle this help
G           Show logs
q / Ctrl+C  Quit

Press 'Esc' or '?' to close this help panel
";

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, title: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("⚠ Confirm Delete")
        .style(Style::default().fg(Color::Red));
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
    ])
    .split(inner);

    f.render_widget(
        Paragraph::new(CONFIRM_DELETE)
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(format!("\"{}\"", title))
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        chunks[1],
    );
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        chunks[2],
    );
}

pub fn render_info_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, "ℹ Info", Color::Blue, message, scroll);
}

pub fn render_error_dialog(f: &mut Frame, area: Rect, message: &str, scroll: &mut DialogScroll) {
    render_message_dialog(f, area, "⚠ Error", Color::Red, message, scroll);
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(color));

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );
    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    let (text, overflow) = visible_window(message, content_area.height as usize, scroll);

    f.render_widget(block, dialog_area);
    f.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true }),
        content_area,
    );
    f.render_widget(
        Paragraph::new("Press any key to continue • j/k to scroll if needed")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        instructions_area,
    );
    if overflow {
        render_scrollbar(f, content_area, scroll);
    }
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    render_panel(f, area, "📖 Help - Press 'Esc' or '?' to close", HELP_TEXT, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut DialogScroll) {
    let logs = logger.get_logs();
    let content = if logs.is_empty() {
        "No logs yet".to_string()
    } else {
        logs.join("\n")
    };
    render_panel(f, area, DIALOG_TITLE_LOGS, &content, scroll);
}

/// Large overlay with a bordered, scrollable body
fn render_panel(f: &mut Frame, area: Rect, title: &str, content: &str, scroll: &mut DialogScroll) {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        panel_area.x + margin_x,
        panel_area.y + margin_y,
        panel_area.width.saturating_sub(margin_x * 2),
        panel_area.height.saturating_sub(margin_y * 2),
    );

    let (text, overflow) = visible_window(content, content_area.height.saturating_sub(2) as usize, scroll);

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White));
    f.render_widget(paragraph, content_area);

    if overflow {
        render_scrollbar(f, content_area, scroll);
    }
}

/// Slices `content` to the lines visible at the current offset and clamps the
/// offset. Returns the text and whether it overflows the viewport.
fn visible_window(content: &str, visible_height: usize, scroll: &mut DialogScroll) -> (String, bool) {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();
    if total_lines <= visible_height {
        return (content.to_string(), false);
    }

    let max_scroll = total_lines.saturating_sub(visible_height);
    scroll.offset = scroll.offset.min(max_scroll);
    scroll.scrollbar = scroll
        .scrollbar
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(scroll.offset);

    let text = lines
        .iter()
        .skip(scroll.offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    (text, true)
}

fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"))
        .track_symbol(Some("│"))
        .thumb_symbol("▐")
        .style(Style::default().fg(Color::Gray))
        .thumb_style(Style::default().fg(Color::White));
    f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar);
}
