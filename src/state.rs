//! View State Module
//!
//! State owned by a single open view: the search query, the active filter,
//! which sections are expanded, the copy indicator and the list selection.
//! A view's state is created when the page opens and dropped when it closes.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::catalog::{TOPIC_FILTERS, TOPICS};
use crate::models::{Filter, ReferencePage, Section, Snippet, Topic};
use crate::search::{SectionGroup, filtered, group_by_section, quick_setup};

/// How long the "copied" confirmation stays up
pub const COPY_INDICATOR_TTL: Duration = Duration::from_millis(2000);

/// Expanded/collapsed flags per section key. Unknown keys read as collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionState {
    expanded: HashMap<&'static str, bool>,
}

impl SectionState {
    pub fn new(initially_expanded: &[&'static str]) -> Self {
        Self {
            expanded: initially_expanded.iter().map(|key| (*key, true)).collect(),
        }
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.get(key).copied().unwrap_or(false)
    }

    /// Flips the flag for `key` and returns the new value
    pub fn toggle(&mut self, key: &'static str) -> bool {
        let entry = self.expanded.entry(key).or_insert(false);
        *entry = !*entry;
        *entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CopiedSnippet {
    id: String,
    expires_at: Instant,
}

/// The transient "copied" marker. At most one id is marked at a time and the
/// mark lapses `COPY_INDICATOR_TTL` after it was set, whether or not `tick`
/// runs in between.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyIndicator {
    active: Option<CopiedSnippet>,
}

impl CopyIndicator {
    pub fn mark(&mut self, id: impl Into<String>, now: Instant) {
        self.active = Some(CopiedSnippet {
            id: id.into(),
            expires_at: now + COPY_INDICATOR_TTL,
        });
    }

    pub fn current(&self, now: Instant) -> Option<&str> {
        self.active
            .as_ref()
            .filter(|copied| now < copied.expires_at)
            .map(|copied| copied.id.as_str())
    }

    /// Drops an expired mark. Returns true when something was cleared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(copied) if now >= copied.expires_at => {
                self.active = None;
                true
            }
            _ => false,
        }
    }
}

/// One line of the reference page list
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageRow {
    QuickSetupHeader { count: usize },
    QuickSetup(&'static Snippet),
    SectionHeader {
        section: &'static Section,
        count: usize,
        expanded: bool,
    },
    SectionSnippet {
        section: &'static Section,
        snippet: &'static Snippet,
    },
}

impl PageRow {
    pub fn snippet(&self) -> Option<&'static Snippet> {
        match *self {
            PageRow::QuickSetup(snippet) | PageRow::SectionSnippet { snippet, .. } => Some(snippet),
            _ => None,
        }
    }
}

/// Cycles through `len` filters, wrapping at both ends
fn step_filter(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    }
}

/// State of an open reference page
#[derive(Debug, Clone)]
pub struct PageView {
    pub page: &'static ReferencePage,
    /// Distinguishes this view from earlier views of the same page
    pub token: u64,
    pub query: String,
    pub active_filter: usize,
    pub sections: SectionState,
    pub copied: CopyIndicator,
    pub selected: usize,
    pub content_scroll_position: usize,
}

impl PageView {
    pub fn new(page: &'static ReferencePage, token: u64) -> Self {
        Self {
            page,
            token,
            query: String::new(),
            active_filter: 0,
            sections: SectionState::new(page.initially_expanded),
            copied: CopyIndicator::default(),
            selected: 0,
            content_scroll_position: 0,
        }
    }

    pub fn filter(&self) -> Option<&'static Filter> {
        self.page.filters.get(self.active_filter)
    }

    fn filter_id(&self) -> &'static str {
        self.filter().map(|f| f.id).unwrap_or(crate::models::ALL_FILTER)
    }

    /// Snippets passing the current query and filter, in catalog order
    pub fn visible(&self) -> Vec<&'static Snippet> {
        filtered(
            self.page.snippets,
            &self.query,
            self.page.filters,
            self.filter_id(),
        )
    }

    pub fn quick_setup(&self) -> Vec<&'static Snippet> {
        quick_setup(&self.visible())
    }

    pub fn groups(&self) -> Vec<SectionGroup<'static>> {
        group_by_section(&self.visible(), self.page.sections)
    }

    /// Flattened list: quick setup first, then each non-empty section with its
    /// snippets when expanded.
    pub fn rows(&self) -> Vec<PageRow> {
        let visible = self.visible();
        let mut rows = Vec::new();

        let quick = quick_setup(&visible);
        if !quick.is_empty() {
            rows.push(PageRow::QuickSetupHeader { count: quick.len() });
            rows.extend(quick.into_iter().map(PageRow::QuickSetup));
        }

        for group in group_by_section(&visible, self.page.sections) {
            let expanded = self.sections.is_expanded(group.section.key);
            rows.push(PageRow::SectionHeader {
                section: group.section,
                count: group.snippets.len(),
                expanded,
            });
            if expanded {
                rows.extend(group.snippets.into_iter().map(|snippet| {
                    PageRow::SectionSnippet {
                        section: group.section,
                        snippet,
                    }
                }));
            }
        }

        rows
    }

    pub fn selected_row(&self) -> Option<PageRow> {
        self.rows().get(self.selected).copied()
    }

    pub fn selected_snippet(&self) -> Option<&'static Snippet> {
        self.selected_row().and_then(|row| row.snippet())
    }

    pub fn next_row(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
            self.content_scroll_position = 0;
        }
    }

    pub fn previous_row(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
            self.content_scroll_position = 0;
        }
    }

    /// Toggles the section under the cursor, or the section holding the
    /// selected snippet. Returns the section key and its new state.
    pub fn toggle_selected_section(&mut self) -> Option<(&'static str, bool)> {
        let section = match self.selected_row()? {
            PageRow::SectionHeader { section, .. } | PageRow::SectionSnippet { section, .. } => {
                section
            }
            _ => return None,
        };

        let expanded = self.sections.toggle(section.key);

        // Keep the cursor on the header that was just folded
        if let Some(index) = self.rows().iter().position(
            |row| matches!(row, PageRow::SectionHeader { section: s, .. } if s.key == section.key),
        ) {
            self.selected = index;
        }

        Some((section.key, expanded))
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.active_filter = step_filter(self.active_filter, self.page.filters.len(), forward);
        self.clamp_selection();
    }

    pub fn set_filter(&mut self, index: usize) {
        if index < self.page.filters.len() {
            self.active_filter = index;
            self.clamp_selection();
        }
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.rows().len().saturating_sub(1));
        self.content_scroll_position = 0;
    }
}

/// State of the start page topic index
#[derive(Debug, Clone, Default)]
pub struct HomeView {
    pub query: String,
    pub active_filter: usize,
    pub selected: usize,
}

impl HomeView {
    pub fn filter(&self) -> Option<&'static Filter> {
        TOPIC_FILTERS.get(self.active_filter)
    }

    pub fn visible(&self) -> Vec<&'static Topic> {
        let filter_id = self.filter().map(|f| f.id).unwrap_or(crate::models::ALL_FILTER);
        filtered(TOPICS, &self.query, TOPIC_FILTERS, filter_id)
    }

    pub fn selected_topic(&self) -> Option<&'static Topic> {
        self.visible().get(self.selected).copied()
    }

    pub fn next_topic(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn previous_topic(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn cycle_filter(&mut self, forward: bool) {
        self.active_filter = step_filter(self.active_filter, TOPIC_FILTERS.len(), forward);
        self.clamp_selection();
    }

    pub fn set_filter(&mut self, index: usize) {
        if index < TOPIC_FILTERS.len() {
            self.active_filter = index;
            self.clamp_selection();
        }
    }

    pub fn push_query(&mut self, c: char) {
        self.query.push(c);
        self.clamp_selection();
    }

    pub fn pop_query(&mut self) {
        self.query.pop();
        self.clamp_selection();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.visible().len().saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pretty_assertions::assert_eq;

    fn express() -> PageView {
        PageView::new(catalog::page("express").expect("express page"), 0)
    }

    #[test]
    fn toggling_twice_restores_section_state() {
        let mut state = SectionState::new(&["setup"]);
        assert!(state.is_expanded("setup"));
        assert!(!state.is_expanded("mongodb"));

        assert!(!state.toggle("setup"));
        assert!(state.toggle("setup"));
        assert!(state.toggle("mongodb"));
        assert!(!state.toggle("mongodb"));
        assert_eq!(state, {
            let mut expected = SectionState::new(&["setup"]);
            expected.expanded.insert("mongodb", false);
            expected
        });
    }

    #[test]
    fn folding_a_section_leaves_the_filtered_set_alone() {
        let mut view = express();
        view.push_query('o');
        let visible = view.visible();
        let groups = view.groups();
        let rows = view.rows();

        let header = rows
            .iter()
            .position(|row| {
                matches!(row, PageRow::SectionHeader { section, .. } if section.key == "mongodb")
            })
            .expect("mongodb header");
        view.selected = header;
        assert_eq!(view.toggle_selected_section(), Some(("mongodb", true)));

        assert_eq!(view.visible(), visible);
        assert_eq!(view.groups(), groups);
        assert!(view.rows().len() > rows.len());
    }

    #[test]
    fn copy_indicator_lapses_after_two_seconds() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::default();
        indicator.mark("id1", start);

        assert_eq!(indicator.current(start), Some("id1"));
        assert_eq!(indicator.current(start + Duration::from_millis(1999)), Some("id1"));
        assert_eq!(indicator.current(start + COPY_INDICATOR_TTL), None);

        assert!(!indicator.tick(start + Duration::from_millis(500)));
        assert!(indicator.tick(start + COPY_INDICATOR_TTL));
        assert_eq!(indicator, CopyIndicator::default());
    }

    #[test]
    fn a_new_copy_replaces_the_previous_indicator() {
        let start = Instant::now();
        let mut indicator = CopyIndicator::default();
        indicator.mark("first", start);
        indicator.mark("second", start + Duration::from_millis(1500));

        let later = start + Duration::from_millis(2500);
        assert_eq!(indicator.current(later), Some("second"));
    }

    #[test]
    fn page_rows_follow_initial_expansion() {
        let view = express();
        let rows = view.rows();

        assert_eq!(rows[0], PageRow::QuickSetupHeader { count: 4 });
        let headers: Vec<_> = rows
            .iter()
            .filter_map(|row| match row {
                PageRow::SectionHeader { section, expanded, .. } => Some((section.key, *expanded)),
                _ => None,
            })
            .collect();
        assert_eq!(
            headers,
            vec![
                ("setup", true),
                ("mongodb", false),
                ("server", false),
                ("routes", false),
                ("tailwind", false),
                ("deployment", false),
            ]
        );

        let setup_members: Vec<_> = rows
            .iter()
            .filter_map(|row| match row {
                PageRow::SectionSnippet { section, snippet } if section.key == "setup" => {
                    Some(snippet.id)
                }
                _ => None,
            })
            .collect();
        assert_eq!(setup_members, vec!["folder-structure"]);
    }

    #[test]
    fn toggling_from_a_snippet_folds_its_section() {
        let mut view = express();
        let index = view
            .rows()
            .iter()
            .position(|row| matches!(row, PageRow::SectionSnippet { .. }))
            .expect("setup section is open");
        view.selected = index;

        assert_eq!(view.toggle_selected_section(), Some(("setup", false)));
        assert!(matches!(
            view.selected_row(),
            Some(PageRow::SectionHeader { expanded: false, .. })
        ));
        assert_eq!(view.toggle_selected_section(), Some(("setup", true)));
    }

    #[test]
    fn filtering_hides_empty_sections_and_clamps_selection() {
        let mut view = express();
        view.selected = 100;
        view.set_filter(5); // deployment
        assert_eq!(view.filter().map(|f| f.id), Some("deployment"));

        let groups = view.groups();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].section.key, "deployment");
        assert!(view.quick_setup().is_empty());
        assert_eq!(view.selected, view.rows().len() - 1);
    }

    #[test]
    fn query_narrows_rows_and_can_empty_them() {
        let mut view = express();
        for c in "zzzz".chars() {
            view.push_query(c);
        }
        assert!(view.rows().is_empty());
        assert_eq!(view.selected_snippet(), None);
        view.clear_query();
        assert!(!view.rows().is_empty());
    }

    #[test]
    fn filters_cycle_in_both_directions() {
        let mut view = express();
        view.cycle_filter(false);
        assert_eq!(view.filter().map(|f| f.id), Some("deployment"));
        view.cycle_filter(true);
        assert_eq!(view.filter().map(|f| f.id), Some("all"));
    }

    #[test]
    fn home_view_filters_topics_by_id() {
        let mut home = HomeView::default();
        assert_eq!(home.visible().len(), TOPICS.len());

        home.set_filter(2); // backend
        let ids: Vec<_> = home.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["express", "databases", "authentication"]);

        for c in "mongo".chars() {
            home.push_query(c);
        }
        let ids: Vec<_> = home.visible().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["databases"]);
        assert_eq!(home.selected_topic().map(|t| t.id), Some("databases"));
    }
}
