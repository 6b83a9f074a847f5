//! Start Page UI Module
//!
//! The topic index: header stats, search box, filter bar and the list of
//! topic cards. Cards with a reference page open it on Enter.

use crate::app::{App, InputMode};
use crate::catalog::{self, TOPIC_FILTERS, TOPICS};
use crate::models::Topic;
use crate::ui::colors::RosePine;
use crate::ui::components::{render_bottom_bar, render_filter_bar, render_search_bar};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};

pub fn render(frame: &mut Frame, app: &App) {
    let main_area = frame.area();

    let block = Block::bordered()
        .title(" devref - Web Development Reference ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));

    let inner_area = block.inner(main_area);
    block.render(main_area, frame.buffer_mut());

    let main_chunks = Layout::vertical([
        Constraint::Length(7), // Title
        Constraint::Length(1), // Stats
        Constraint::Length(1),
        Constraint::Length(3), // Search
        Constraint::Length(1), // Filters
        Constraint::Fill(1),   // Topics
        Constraint::Length(1), // Result count
        Constraint::Length(3), // Bottom navigation bar
    ])
    .split(inner_area);

    let content_column = |area: Rect| {
        Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Max(90),
            Constraint::Fill(1),
        ])
        .split(area)[1]
    };

    render_title(frame, main_chunks[0]);
    render_stats(frame, main_chunks[1]);
    render_search_bar(
        frame,
        content_column(main_chunks[3]),
        &app.home.query,
        app.input_mode == InputMode::Search,
        "Press / to search topics, tags and descriptions",
    );
    render_filter_bar(frame, main_chunks[4], TOPIC_FILTERS, app.home.active_filter);

    let visible = app.home.visible();
    render_topics(frame, content_column(main_chunks[5]), &visible, app.home.selected);

    Paragraph::new(format!("Showing {} of {} topics", visible.len(), TOPICS.len()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::MUTED))
        .render(main_chunks[6], frame.buffer_mut());

    render_bottom_bar(frame, main_chunks[7], app);
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = r#"
██████╗ ███████╗██╗   ██╗██████╗ ███████╗███████╗
██╔══██╗██╔════╝██║   ██║██╔══██╗██╔════╝██╔════╝
██║  ██║█████╗  ██║   ██║██████╔╝█████╗  █████╗
██║  ██║██╔══╝  ╚██╗ ██╔╝██╔══██╗██╔══╝  ██╔══╝
██████╔╝███████╗ ╚████╔╝ ██║  ██║███████╗██║
╚═════╝ ╚══════╝  ╚═══╝  ╚═╝  ╚═╝╚══════╝╚═╝"#;

    Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(Style::default().fg(RosePine::ROSE).bold())
        .render(area, frame.buffer_mut());
}

fn render_stats(frame: &mut Frame, area: Rect) {
    let number = Style::default().fg(RosePine::GOLD).bold();
    let label = Style::default().fg(RosePine::SUBTLE);

    let line = Line::from(vec![
        Span::styled(TOPICS.len().to_string(), number),
        Span::styled(" topics  ·  ", label),
        Span::styled(format!("{}+", catalog::total_topic_snippets()), number),
        Span::styled(" snippets  ·  ", label),
        Span::styled(catalog::topic_technologies().to_string(), number),
        Span::styled(" technologies", label),
    ]);

    Paragraph::new(line)
        .alignment(Alignment::Center)
        .render(area, frame.buffer_mut());
}

fn topic_item(topic: &Topic, selected: bool) -> ListItem<'static> {
    let title_style = if selected {
        Style::default().fg(RosePine::LOVE).bold()
    } else {
        Style::default().fg(RosePine::TEXT).bold()
    };
    let prefix = if selected { "▶ " } else { "  " };

    let mut header = vec![
        Span::styled(prefix, Style::default().fg(RosePine::LOVE)),
        Span::styled(topic.title, title_style),
        Span::styled(
            format!("  {} snippets · {}", topic.snippet_count, topic.last_updated),
            Style::default().fg(RosePine::MUTED),
        ),
    ];
    if topic.page.is_none() {
        header.push(Span::styled("  soon", Style::default().fg(RosePine::GOLD).italic()));
    }

    let tags: Vec<Span> = topic
        .tags
        .iter()
        .flat_map(|tag| {
            [
                Span::styled(format!(" {} ", tag), Style::default().fg(RosePine::FOAM)),
                Span::raw(" "),
            ]
        })
        .collect();

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("    {}", topic.description),
            Style::default().fg(RosePine::SUBTLE),
        )),
        Line::from([vec![Span::raw("   ")], tags].concat()),
        Line::from(""),
    ])
}

fn render_topics(frame: &mut Frame, area: Rect, topics: &[&Topic], selected: usize) {
    if topics.is_empty() {
        let empty = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No resources found",
                Style::default().fg(RosePine::GOLD).bold(),
            )),
            Line::from(Span::styled(
                "Try a different search term or filter",
                Style::default().fg(RosePine::MUTED),
            )),
        ];
        Paragraph::new(empty)
            .alignment(Alignment::Center)
            .render(area, frame.buffer_mut());
        return;
    }

    let items: Vec<ListItem> = topics
        .iter()
        .enumerate()
        .map(|(i, topic)| topic_item(topic, i == selected))
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW));

    let mut list_state = ListState::default();
    list_state.select(Some(selected));

    frame.render_stateful_widget(list, area, &mut list_state);
}
