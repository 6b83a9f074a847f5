use serde::Serialize;

/// A card on the start page. Topics with a `page` open that reference page;
/// the rest are announced but not yet written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub snippet_count: usize,
    pub last_updated: &'static str,
    pub page: Option<&'static str>,
}
