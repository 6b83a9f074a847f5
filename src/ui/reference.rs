//! Reference Page UI Module
//!
//! Left pane: quick setup snippets, then every visible section with its
//! snippets when expanded. Right pane: preview of the selected row.

use std::time::Instant;

use crate::app::{App, InputMode};
use crate::models::Snippet;
use crate::search::SectionGroup;
use crate::state::{PageRow, PageView};
use crate::ui::colors::RosePine;
use crate::ui::components::{fit_width, render_bottom_bar, render_filter_bar, render_search_bar};
use crate::ui::highlight::highlight;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{
        Block, BorderType, List, ListItem, ListState, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Widget, Wrap,
    },
};

pub fn render(frame: &mut Frame, app: &App, view: &PageView) {
    let main_area = frame.area();
    let now = Instant::now();

    let block = Block::bordered()
        .title(format!(" {} ", view.page.title))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(1), // Tagline
        Constraint::Length(3), // Search
        Constraint::Length(1), // Filters
        Constraint::Fill(1),   // Panes
        Constraint::Length(1), // Stats
        Constraint::Length(3), // Bottom navigation bar
    ])
    .split(inner_area);

    Paragraph::new(view.page.tagline)
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::SUBTLE).italic())
        .render(chunks[0], frame.buffer_mut());

    render_search_bar(
        frame,
        chunks[1],
        &view.query,
        app.input_mode == InputMode::Search,
        "Press / to search snippets, descriptions and tags",
    );
    render_filter_bar(frame, chunks[2], view.page.filters, view.active_filter);

    let panes = Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[3]);

    let rows = view.rows();
    let copied = view.copied.current(now);
    render_rows(frame, panes[0], &rows, view.selected, copied);

    match rows.get(view.selected) {
        Some(PageRow::QuickSetup(snippet)) | Some(PageRow::SectionSnippet { snippet, .. }) => {
            render_snippet_preview(frame, panes[1], app, view, snippet, copied);
        }
        Some(PageRow::SectionHeader { section, .. }) => {
            let groups = view.groups();
            if let Some(group) = groups.iter().find(|g| g.section.key == section.key) {
                render_section_preview(frame, panes[1], group, view);
            }
        }
        Some(PageRow::QuickSetupHeader { .. }) => {
            let quick = view.quick_setup();
            render_quick_setup_preview(frame, panes[1], &quick);
        }
        None => {}
    }

    render_stats(frame, chunks[4], view);
    render_bottom_bar(frame, chunks[5], app);
}

fn row_item(row: &PageRow, copied: Option<&str>, title_width: usize) -> ListItem<'static> {
    let copied_mark = |snippet: &Snippet| {
        if copied == Some(snippet.id) {
            Span::styled("  ✓ copied", Style::default().fg(RosePine::FOAM).bold())
        } else {
            Span::raw("")
        }
    };

    let line = match row {
        PageRow::QuickSetupHeader { count } => Line::from(vec![
            Span::styled("⚡ Quick Setup ", Style::default().fg(RosePine::GOLD).bold()),
            Span::styled(format!("({})", count), Style::default().fg(RosePine::MUTED)),
        ]),
        PageRow::QuickSetup(snippet) => Line::from(vec![
            Span::styled(
                format!("   {} ", snippet.language.icon()),
                Style::default().fg(snippet.language.badge_color()),
            ),
            Span::styled(fit_width(snippet.title, title_width), Style::default().fg(RosePine::TEXT)),
            copied_mark(*snippet),
        ]),
        PageRow::SectionHeader {
            section,
            count,
            expanded,
        } => {
            let arrow = if *expanded { "▾" } else { "▸" };
            let color = section.accent.color();
            Line::from(vec![
                Span::styled(format!("{} {} ", arrow, section.accent.icon()), Style::default().fg(color)),
                Span::styled(section.title, Style::default().fg(color).bold()),
                Span::styled(format!(" ({})", count), Style::default().fg(RosePine::MUTED)),
            ])
        }
        PageRow::SectionSnippet { snippet, .. } => Line::from(vec![
            Span::styled("     ", Style::default()),
            Span::styled(fit_width(snippet.title, title_width), Style::default().fg(RosePine::TEXT)),
            copied_mark(*snippet),
        ]),
    };

    ListItem::new(line)
}

fn render_rows(
    frame: &mut Frame,
    area: Rect,
    rows: &[PageRow],
    selected: usize,
    copied: Option<&str>,
) {
    let block = Block::bordered()
        .title(" Snippets ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    if rows.is_empty() {
        let empty = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No snippets found",
                Style::default().fg(RosePine::GOLD).bold(),
            )),
            Line::from(Span::styled(
                "Try a different search term or filter",
                Style::default().fg(RosePine::MUTED),
            )),
        ];
        Paragraph::new(empty)
            .alignment(Alignment::Center)
            .block(block)
            .render(area, frame.buffer_mut());
        return;
    }

    // Room for borders, highlight symbol, indent and the copied mark
    let title_width = usize::from(area.width.saturating_sub(18));
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| row_item(row, copied, title_width))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(RosePine::HIGHLIGHT_LOW)
                .add_modifier(ratatui::style::Modifier::BOLD),
        )
        .highlight_symbol("▌");

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_snippet_preview(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &PageView,
    snippet: &Snippet,
    copied: Option<&str>,
) {
    let block = Block::bordered()
        .title(format!(" {} ", snippet.title))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let chunks = Layout::vertical([
        Constraint::Length(2), // Description
        Constraint::Length(1), // Badge, path, copy state
        Constraint::Length(1),
        Constraint::Fill(1),   // Body
        Constraint::Length(1), // Tags
    ])
    .split(inner);

    Paragraph::new(snippet.description)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(RosePine::SUBTLE))
        .render(chunks[0], frame.buffer_mut());

    let mut meta = vec![
        Span::styled(
            format!(" {} {} ", snippet.language.icon(), snippet.language.display_name()),
            Style::default()
                .fg(Color::White)
                .bg(snippet.language.badge_color())
                .bold(),
        ),
        Span::raw("  "),
    ];
    if let Some(path) = snippet.file_path {
        meta.push(Span::styled(format!(" {}", path), Style::default().fg(RosePine::MUTED)));
    }
    meta.push(Span::styled(
        format!("  {} lines", snippet.get_line_count()),
        Style::default().fg(RosePine::MUTED),
    ));
    if copied == Some(snippet.id) {
        meta.push(Span::styled(
            "   ✓ Copied!",
            Style::default().fg(RosePine::FOAM).bold(),
        ));
    } else {
        meta.push(Span::styled("   [y] copy", Style::default().fg(RosePine::MUTED)));
    }
    Paragraph::new(Line::from(meta)).render(chunks[1], frame.buffer_mut());

    render_body(frame, chunks[3], snippet, &app.config.theme, view.content_scroll_position);

    let tags: Vec<Span> = snippet
        .tags
        .iter()
        .map(|tag| Span::styled(format!("#{} ", tag), Style::default().fg(RosePine::PINE)))
        .collect();
    Paragraph::new(Line::from(tags)).render(chunks[4], frame.buffer_mut());
}

fn render_body(frame: &mut Frame, area: Rect, snippet: &Snippet, theme: &str, scroll: usize) {
    Block::default()
        .style(Style::default().bg(RosePine::SURFACE))
        .render(area, frame.buffer_mut());

    let lines = highlight(snippet.body, snippet.highlight, theme);
    let total_lines = lines.len();
    let visible_lines = area.height as usize;
    let scroll_position = scroll.min(total_lines.saturating_sub(visible_lines));

    let content_area = Rect {
        width: area.width.saturating_sub(1),
        ..area
    };
    let scrollbar_area = Rect {
        x: area.x + area.width.saturating_sub(1),
        y: area.y,
        width: 1,
        height: area.height,
    };

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(scroll_position)
        .take(visible_lines)
        .collect();

    Paragraph::new(visible)
        .style(Style::default().bg(RosePine::SURFACE))
        .render(content_area, frame.buffer_mut());

    if total_lines > visible_lines {
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(total_lines)
            .position(scroll_position);

        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .style(Style::default().fg(RosePine::SUBTLE))
            .thumb_style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn render_section_preview(frame: &mut Frame, area: Rect, group: &SectionGroup, view: &PageView) {
    let color = group.section.accent.color();
    let expanded = view.sections.is_expanded(group.section.key);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", group.section.accent.icon(), group.section.title),
            Style::default().fg(color).bold(),
        )),
        Line::from(Span::styled(
            format!("{} snippets", group.snippets.len()),
            Style::default().fg(RosePine::MUTED),
        )),
        Line::from(""),
    ];
    lines.extend(group.snippets.iter().map(|snippet| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(color)),
            Span::styled(snippet.title, Style::default().fg(RosePine::TEXT)),
            Span::styled(
                format!("  {}", snippet.description),
                Style::default().fg(RosePine::SUBTLE),
            ),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if expanded {
            "Press ⏎ to collapse"
        } else {
            "Press ⏎ to expand"
        },
        Style::default().fg(RosePine::FOAM),
    )));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(area, frame.buffer_mut());
}

fn render_quick_setup_preview(frame: &mut Frame, area: Rect, snippets: &[&Snippet]) {
    let mut lines = vec![
        Line::from(Span::styled(
            "⚡ Quick Setup",
            Style::default().fg(RosePine::GOLD).bold(),
        )),
        Line::from(Span::styled(
            "Commands and files to get a project running",
            Style::default().fg(RosePine::MUTED),
        )),
        Line::from(""),
    ];
    lines.extend(snippets.iter().map(|snippet| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(RosePine::GOLD)),
            Span::styled(snippet.title, Style::default().fg(RosePine::TEXT)),
        ])
    }));

    Paragraph::new(lines)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(area, frame.buffer_mut());
}

fn render_stats(frame: &mut Frame, area: Rect, view: &PageView) {
    let stats = view.page.stats();
    let number = Style::default().fg(RosePine::GOLD).bold();
    let label = Style::default().fg(RosePine::MUTED);

    let line = Line::from(vec![
        Span::styled(stats.snippets.to_string(), number),
        Span::styled(" snippets  ·  ", label),
        Span::styled(stats.technologies.to_string(), number),
        Span::styled(" technologies  ·  ", label),
        Span::styled(stats.languages.to_string(), number),
        Span::styled(" languages  ·  ", label),
        Span::styled(stats.quick_setups.to_string(), number),
        Span::styled(" quick setup", label),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}
