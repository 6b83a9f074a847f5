//! Compiled-in reference library
//!
//! Every page, snippet and topic shown by devref lives here as static data.
//! Nothing is loaded from disk and nothing is mutated at runtime.

mod express;
mod nextjs;
mod topics;

use std::collections::HashSet;

use crate::models::ReferencePage;

pub use topics::{TOPIC_FILTERS, TOPICS};

pub static PAGES: &[ReferencePage] = &[nextjs::PAGE, express::PAGE];

/// Page opened by the CLI when none is given
pub const DEFAULT_PAGE: &str = "nextjs";

pub fn page(id: &str) -> Option<&'static ReferencePage> {
    PAGES.iter().find(|p| p.id == id)
}

/// Sum of the advertised snippet counts across all topics
pub fn total_topic_snippets() -> usize {
    TOPICS.iter().map(|t| t.snippet_count).sum()
}

/// Number of distinct technology tags across all topics
pub fn topic_technologies() -> usize {
    TOPICS
        .iter()
        .flat_map(|t| t.tags.iter().copied())
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snippet_ids_are_unique_per_page() {
        for page in PAGES {
            let ids: HashSet<_> = page.snippets.iter().map(|s| s.id).collect();
            assert_eq!(ids.len(), page.snippets.len(), "duplicate id in {}", page.id);
        }
    }

    #[test]
    fn snippet_sections_are_defined_by_their_page() {
        for page in PAGES {
            for snippet in page.snippets {
                for key in snippet.sections {
                    assert!(
                        page.section(key).is_some(),
                        "{}/{} names unknown section {}",
                        page.id,
                        snippet.id,
                        key
                    );
                }
            }
        }
    }

    #[test]
    fn quick_setup_snippets_carry_no_sections() {
        for page in PAGES {
            for snippet in page.snippets.iter().filter(|s| s.quick_setup) {
                assert!(snippet.sections.is_empty(), "{}/{}", page.id, snippet.id);
            }
        }
    }

    #[test]
    fn every_reference_snippet_is_reachable_from_a_section() {
        for page in PAGES {
            for snippet in page.snippets.iter().filter(|s| !s.quick_setup) {
                assert!(!snippet.sections.is_empty(), "{}/{}", page.id, snippet.id);
            }
        }
    }

    #[test]
    fn every_page_starts_with_the_unconstrained_filter() {
        for page in PAGES {
            assert_eq!(page.filters[0].id, crate::models::ALL_FILTER);
            for key in page.initially_expanded {
                assert!(page.section(key).is_some());
            }
        }
        assert_eq!(TOPIC_FILTERS[0].id, crate::models::ALL_FILTER);
    }

    #[test]
    fn linked_topics_resolve_to_pages() {
        for topic in TOPICS {
            if let Some(page_id) = topic.page {
                assert!(page(page_id).is_some(), "{} links to {}", topic.id, page_id);
            }
        }
        assert!(page(DEFAULT_PAGE).is_some());
    }

    #[test]
    fn express_page_stats() {
        let stats = page("express").map(|p| p.stats());
        assert_eq!(
            stats,
            Some(crate::models::PageStats {
                snippets: 12,
                technologies: 33,
                languages: 3,
                quick_setups: 4,
            })
        );
    }

    #[test]
    fn topic_header_numbers() {
        assert_eq!(total_topic_snippets(), 204);
        let git = TOPICS.iter().find(|t| t.id == "git").map(|t| t.page);
        assert_eq!(git, Some(None));
    }
}
