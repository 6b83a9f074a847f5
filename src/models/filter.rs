use serde::Serialize;

/// Id of the unconstrained filter every view starts with.
pub const ALL_FILTER: &str = "all";

/// A named predicate restricting a list to items tagged with one of a fixed
/// set of topic keywords. `topics == None` is the unconstrained filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Filter {
    pub id: &'static str,
    pub label: &'static str,
    pub topics: Option<&'static [&'static str]>,
}

impl Filter {
    pub const fn all(label: &'static str) -> Self {
        Self {
            id: ALL_FILTER,
            label,
            topics: None,
        }
    }

    pub const fn topics(
        id: &'static str,
        label: &'static str,
        topics: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            label,
            topics: Some(topics),
        }
    }

    /// Exact, case-sensitive keyword test. The unconstrained filter accepts everything.
    pub fn accepts<'a>(&self, mut keys: impl Iterator<Item = &'a str>) -> bool {
        match self.topics {
            None => true,
            Some(topics) => keys.any(|key| topics.contains(&key)),
        }
    }
}

/// Looks a filter up by id. Unknown ids resolve to `None`, which callers treat
/// as the identity filter.
pub fn find_filter<'f>(filters: &'f [Filter], id: &str) -> Option<&'f Filter> {
    filters.iter().find(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND: Filter = Filter::topics("backend", "Backend", &["mongodb", "express", "api"]);

    #[test]
    fn topic_filters_match_exactly() {
        assert!(BACKEND.accepts(["routes", "api"].into_iter()));
        assert!(!BACKEND.accepts(["API"].into_iter()));
        assert!(!BACKEND.accepts(std::iter::empty()));
    }

    #[test]
    fn unconstrained_filter_accepts_untagged_items() {
        assert!(Filter::all("All").accepts(std::iter::empty()));
    }

    #[test]
    fn find_filter_by_id() {
        let filters = [Filter::all("All"), BACKEND];
        assert_eq!(find_filter(&filters, "backend"), Some(&BACKEND));
        assert_eq!(find_filter(&filters, "missing"), None);
    }
}
