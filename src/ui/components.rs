//! UI Components and Layout Module
//!
//! Pieces shared by the start page and the reference pages: the bottom
//! navigation bar, the search box, the filter bar and the overlays.

use crate::app::{App, AppState, InputMode};
use crate::models::Filter;
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `text` to at most `width` terminal columns, ending in `…` when cut
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Renders the bottom navigation bar: breadcrumbs on the left, shortcuts for
/// the current screen on the right.
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(breadcrumbs(app))
        .alignment(Alignment::Left)
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    let right_content = Paragraph::new(context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn context_shortcuts(app: &App) -> String {
    let back_hint = if app.can_go_back() {
        " [Esc] Back │"
    } else {
        ""
    };

    match (&app.state, app.input_mode) {
        (_, InputMode::Search) => " [⏎] Done │ [Esc] Clear ".to_string(),
        (_, InputMode::HelpMenu) => " [?] [Esc] Close ".to_string(),
        (AppState::StartPage, InputMode::Normal) => {
            " [↑↓] Navigate │ [⏎] Open │ [/] Search │ [Tab] Filter │ [q] Quit ".to_string()
        }
        (AppState::Reference, InputMode::Normal) => format!(
            "{} [⏎] Fold │ [y] Copy │ [/] Search │ [Tab] Filter │ [?] Help ",
            back_hint
        ),
        (AppState::Unavailable { .. }, InputMode::Normal) => {
            format!("{} [q] Quit ", back_hint)
        }
    }
}

fn breadcrumbs(app: &App) -> Line<'static> {
    let active = Style::default().fg(RosePine::BASE).bg(RosePine::IRIS);
    let mut spans = Vec::new();

    if app.state == AppState::StartPage {
        spans.push(Span::styled(" 󰋜 Home ", active));
        return Line::from(spans);
    }

    spans.push(Span::styled(" 󰋜 Home ", Style::default().fg(RosePine::SUBTLE)));
    spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));

    match &app.state {
        AppState::Reference => {
            if let Some(view) = &app.page {
                spans.push(Span::styled(format!(" {} ", view.page.title), active));

                if let Some(snippet) = view.selected_snippet() {
                    spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));
                    spans.push(Span::styled(
                        format!(" {} {} ", snippet.language.icon(), snippet.title),
                        Style::default().fg(RosePine::BASE).bg(RosePine::GOLD),
                    ));
                }
            }
        }
        AppState::Unavailable { topic } => {
            spans.push(Span::styled(format!(" {} ", topic), active));
        }
        AppState::StartPage => {}
    }

    Line::from(spans)
}

/// One-line search box. The border lights up while typing.
pub fn render_search_bar(frame: &mut Frame, area: Rect, query: &str, active: bool, hint: &str) {
    let border = if active { RosePine::IRIS } else { RosePine::HIGHLIGHT_HIGH };

    let line = if query.is_empty() && !active {
        Line::from(Span::styled(format!("  {}", hint), Style::default().fg(RosePine::MUTED)))
    } else {
        let mut spans = vec![
            Span::styled("  ", Style::default().fg(RosePine::IRIS)),
            Span::styled(query.to_string(), Style::default().fg(RosePine::TEXT)),
        ];
        if active {
            spans.push(Span::styled("▏", Style::default().fg(RosePine::LOVE)));
        }
        Line::from(spans)
    };

    Paragraph::new(line)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(border)),
        )
        .render(area, frame.buffer_mut());
}

/// Filter chips with their number keys; the active one is filled
pub fn render_filter_bar(frame: &mut Frame, area: Rect, filters: &[Filter], active: usize) {
    let mut spans = Vec::new();

    for (i, filter) in filters.iter().enumerate() {
        let style = if i == active {
            Style::default().fg(RosePine::BASE).bg(RosePine::LOVE).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE).bg(RosePine::OVERLAY)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, filter.label), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

/// Renders a centered dialog for topics that have no page yet
pub fn render_wip_dialog(frame: &mut Frame, area: Rect, topic: &str, app: &App) {
    let block = Block::bordered()
        .title(format!(" {} ", topic))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let inner_area = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).split(inner_area);

    let dialog_area = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(60),
        Constraint::Fill(1),
    ])
    .split(chunks[0])[1];

    let dialog_vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ])
    .split(dialog_area)[1];

    let wip_content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "COMING SOON",
            Style::default().fg(RosePine::GOLD).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("The {} reference is still being written.", topic),
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(Span::styled(
            "Check back in a later release.",
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press [Esc] to go back",
            Style::default().fg(RosePine::FOAM),
        )),
    ];

    let dialog = Paragraph::new(wip_content)
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .title(" Under Construction 🚧 ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Double)
                .style(Style::default().fg(RosePine::LOVE)),
        )
        .style(Style::default().bg(RosePine::SURFACE));

    Clear.render(dialog_vertical, frame.buffer_mut());
    dialog.render(dialog_vertical, frame.buffer_mut());

    render_bottom_bar(frame, chunks[1], app);
}

fn key_line(key: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<9}", key), Style::default().fg(RosePine::GOLD)),
        Span::styled(action, Style::default().fg(RosePine::TEXT)),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(RosePine::LOVE).bold()))
}

pub fn render_help_overlay(frame: &mut Frame, area: Rect, _app: &App) {
    let width = 64;
    let height = 20;
    let popup_area = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width.min(area.width),
        height.min(area.height),
    );

    Clear.render(popup_area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" 󰘳 Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::SURFACE));

    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner_area);

    let left_column = vec![
        heading("Navigation"),
        Line::from(""),
        key_line("↑/k", "Move up"),
        key_line("↓/j", "Move down"),
        key_line("⏎", "Open / fold"),
        key_line("Space", "Fold section"),
        key_line("Esc", "Go back"),
        key_line("q", "Quit"),
    ];

    let right_column = vec![
        heading("Snippets"),
        Line::from(""),
        key_line("/", "Search"),
        key_line("Tab", "Next filter"),
        key_line("S-Tab", "Previous filter"),
        key_line("1-9", "Pick filter"),
        key_line("y/c", "Copy snippet"),
        key_line("PgUp/Dn", "Scroll preview"),
    ];

    Paragraph::new(left_column).render(columns[0], frame.buffer_mut());
    Paragraph::new(right_column).render(columns[1], frame.buffer_mut());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fit_width_cuts_on_display_columns() {
        assert_eq!(fit_width("MongoDB Connection", 40), "MongoDB Connection");
        assert_eq!(fit_width("MongoDB Connection", 8), "MongoDB…");
        assert_eq!(fit_width("⚡⚡⚡", 4), "⚡…");
        assert_eq!(fit_width("abc", 0), "");
    }
}
