use crate::models::{Filter, Section, Snippet, Topic, find_filter};

/// Anything the search box and the filter bar can narrow down.
pub trait Searchable {
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn tags(&self) -> &[&'static str];
    /// Keywords compared against a filter's topic list
    fn filter_keys(&self) -> &[&'static str];
}

impl Searchable for Snippet {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&'static str] {
        self.tags
    }

    fn filter_keys(&self) -> &[&'static str] {
        self.tags
    }
}

// Topic filters match on the card id, not on its display tags
impl Searchable for Topic {
    fn title(&self) -> &str {
        self.title
    }

    fn description(&self) -> &str {
        self.description
    }

    fn tags(&self) -> &[&'static str] {
        self.tags
    }

    fn filter_keys(&self) -> &[&'static str] {
        std::slice::from_ref(&self.id)
    }
}

/// Case-insensitive substring test against title, description and tags.
/// The query is trimmed; an empty query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(item: &T, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }

    item.title().to_lowercase().contains(&query)
        || item.description().to_lowercase().contains(&query)
        || item
            .tags()
            .iter()
            .any(|tag| tag.to_lowercase().contains(&query))
}

/// Returns every item matching `query`, in catalog order.
pub fn search<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .collect()
}

/// Keeps the items whose filter keys intersect the topics of `filter_id`.
/// The unconstrained filter and unknown ids leave the input untouched.
pub fn apply_filter<'a, T: Searchable>(
    items: Vec<&'a T>,
    filters: &[Filter],
    filter_id: &str,
) -> Vec<&'a T> {
    let Some(filter) = find_filter(filters, filter_id) else {
        return items;
    };
    if filter.topics.is_none() {
        return items;
    }

    items
        .into_iter()
        .filter(|item| filter.accepts(item.filter_keys().iter().copied()))
        .collect()
}

/// Search then filter, the view shown for a query and an active filter
pub fn filtered<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    filters: &[Filter],
    filter_id: &str,
) -> Vec<&'a T> {
    apply_filter(search(items, query), filters, filter_id)
}

/// The quick-setup snippets, shown apart from the collapsible sections
pub fn quick_setup<'a>(snippets: &[&'a Snippet]) -> Vec<&'a Snippet> {
    snippets.iter().copied().filter(|s| s.quick_setup).collect()
}

/// A section together with the visible snippets listed under it
#[derive(Debug, Clone, PartialEq)]
pub struct SectionGroup<'a> {
    pub section: &'a Section,
    pub snippets: Vec<&'a Snippet>,
}

/// Groups snippets by their declared sections, in section order. Quick-setup
/// snippets are left out and sections with no members are dropped. A snippet
/// listed under several sections appears in each of them.
pub fn group_by_section<'a>(
    snippets: &[&'a Snippet],
    sections: &'a [Section],
) -> Vec<SectionGroup<'a>> {
    sections
        .iter()
        .filter_map(|section| {
            let members: Vec<&Snippet> = snippets
                .iter()
                .copied()
                .filter(|s| s.in_section(section.key))
                .collect();

            (!members.is_empty()).then_some(SectionGroup {
                section,
                snippets: members,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionAccent, SnippetLanguage};
    use pretty_assertions::assert_eq;

    const BASE: Snippet = Snippet {
        id: "",
        title: "",
        description: "",
        language: SnippetLanguage::JavaScript,
        highlight: SnippetLanguage::JavaScript,
        body: "",
        tags: &[],
        quick_setup: false,
        file_path: None,
        sections: &[],
    };

    const CATALOG: &[Snippet] = &[
        Snippet {
            id: "a",
            title: "MongoDB Connection Setup",
            description: "Mongoose connection with error handling",
            tags: &["mongodb", "database"],
            sections: &["database"],
            ..BASE
        },
        Snippet {
            id: "b",
            title: "Express Routes",
            description: "REST endpoints with controllers",
            tags: &["routes", "api"],
            sections: &["routes"],
            ..BASE
        },
        Snippet {
            id: "c",
            title: "Tailwind Install",
            description: "Install the CLI",
            tags: &["tailwind", "css"],
            quick_setup: true,
            ..BASE
        },
    ];

    const FILTERS: &[Filter] = &[
        Filter::all("All"),
        Filter::topics("backend", "Backend", &["mongodb", "express", "api"]),
    ];

    const SECTIONS: &[Section] = &[
        Section::new("database", "Database", SectionAccent::Database),
        Section::new("routes", "Routes", SectionAccent::Routes),
        Section::new("styling", "Styling", SectionAccent::Styling),
    ];

    fn ids(items: &[&Snippet]) -> Vec<&'static str> {
        items.iter().map(|s| s.id).collect()
    }

    fn all() -> Vec<&'static Snippet> {
        CATALOG.iter().collect()
    }

    #[test]
    fn empty_query_returns_whole_catalog_in_order() {
        assert_eq!(ids(&search(CATALOG, "")), vec!["a", "b", "c"]);
        assert_eq!(ids(&search(CATALOG, "   ")), vec!["a", "b", "c"]);
    }

    #[test]
    fn search_matches_tags_case_insensitively() {
        assert_eq!(ids(&search(CATALOG, "data")), vec!["a"]);
        assert_eq!(ids(&search(CATALOG, "  DATA ")), vec!["a"]);
    }

    #[test]
    fn search_matches_title_and_description() {
        assert_eq!(ids(&search(CATALOG, "express")), vec!["b"]);
        assert_eq!(ids(&search(CATALOG, "install the")), vec!["c"]);
        assert!(search(CATALOG, "kubernetes").is_empty());
    }

    #[test]
    fn search_result_is_the_exact_match_set() {
        for query in ["a", "css", "o", "controllers", "zzz", "Mongo"] {
            let found = ids(&search(CATALOG, query));
            let expected: Vec<_> = CATALOG
                .iter()
                .filter(|s| {
                    let q = query.to_lowercase();
                    s.title.to_lowercase().contains(&q)
                        || s.description.to_lowercase().contains(&q)
                        || s.tags.iter().any(|t| t.to_lowercase().contains(&q))
                })
                .map(|s| s.id)
                .collect();
            assert_eq!(found, expected, "query {query:?}");
        }
    }

    #[test]
    fn all_filter_is_identity() {
        let reversed: Vec<_> = CATALOG.iter().rev().collect();
        assert_eq!(ids(&apply_filter(reversed.clone(), FILTERS, "all")), ids(&reversed));
    }

    #[test]
    fn unknown_filter_is_identity() {
        assert_eq!(ids(&apply_filter(all(), FILTERS, "nope")), vec!["a", "b", "c"]);
    }

    #[test]
    fn known_filter_keeps_intersecting_snippets_in_order() {
        assert_eq!(ids(&apply_filter(all(), FILTERS, "backend")), vec!["a", "b"]);
    }

    #[test]
    fn filter_topics_are_case_sensitive() {
        const UPPER: &[Filter] = &[Filter::topics("backend", "Backend", &["MongoDB"])];
        assert!(apply_filter(all(), UPPER, "backend").is_empty());
    }

    #[test]
    fn search_and_filter_compose_in_either_order() {
        let searched_first = apply_filter(search(CATALOG, "e"), FILTERS, "backend");
        let filtered_first: Vec<_> = apply_filter(all(), FILTERS, "backend")
            .into_iter()
            .filter(|s| matches_query(*s, "e"))
            .collect();
        assert_eq!(ids(&searched_first), ids(&filtered_first));
        assert_eq!(ids(&filtered(CATALOG, "e", FILTERS, "backend")), ids(&searched_first));
    }

    #[test]
    fn grouping_excludes_quick_setup_and_hides_empty_sections() {
        let groups = group_by_section(&all(), SECTIONS);
        let keys: Vec<_> = groups.iter().map(|g| g.section.key).collect();
        assert_eq!(keys, vec!["database", "routes"]);
        assert_eq!(ids(&groups[0].snippets), vec!["a"]);
        assert_eq!(ids(&groups[1].snippets), vec!["b"]);
        assert!(groups.iter().all(|g| g.snippets.iter().all(|s| !s.quick_setup)));
    }

    #[test]
    fn a_snippet_may_sit_in_several_sections() {
        const SHARED: &[Snippet] = &[Snippet {
            id: "routes",
            sections: &["database", "routes"],
            ..BASE
        }];
        let items: Vec<_> = SHARED.iter().collect();
        let groups = group_by_section(&items, SECTIONS);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn quick_setup_is_split_out() {
        assert_eq!(ids(&quick_setup(&all())), vec!["c"]);
    }

    #[test]
    fn topics_filter_on_their_id() {
        const TOPICS: &[Topic] = &[
            Topic {
                id: "express",
                title: "Express",
                description: "Server framework",
                tags: &["Node.js"],
                snippet_count: 1,
                last_updated: "today",
                page: None,
            },
            Topic {
                id: "styling",
                title: "Styling",
                description: "CSS",
                tags: &["express"],
                snippet_count: 1,
                last_updated: "today",
                page: None,
            },
        ];
        let found = filtered(TOPICS, "", FILTERS, "backend");
        let found: Vec<_> = found.iter().map(|t| t.id).collect();
        assert_eq!(found, vec!["express"]);

        let by_tag: Vec<_> = search(TOPICS, "node").iter().map(|t| t.id).collect();
        assert_eq!(by_tag, vec!["express"]);
    }
}
