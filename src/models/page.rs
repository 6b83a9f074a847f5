use std::collections::HashSet;

use serde::Serialize;

use crate::models::{Filter, Section, Snippet};

/// One reference page: an immutable, ordered snippet catalog with the
/// filters and sections used to browse it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferencePage {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub snippets: &'static [Snippet],
    pub filters: &'static [Filter],
    pub sections: &'static [Section],
    /// Sections open when the page is first shown. Others start collapsed.
    #[serde(skip)]
    pub initially_expanded: &'static [&'static str],
}

/// Summary numbers shown in the page footer and by `devref pages`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageStats {
    pub snippets: usize,
    pub technologies: usize,
    pub languages: usize,
    pub quick_setups: usize,
}

impl ReferencePage {
    pub fn snippet(&self, id: &str) -> Option<&'static Snippet> {
        self.snippets.iter().find(|s| s.id == id)
    }

    pub fn section(&self, key: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn stats(&self) -> PageStats {
        let technologies: HashSet<&str> = self
            .snippets
            .iter()
            .flat_map(|s| s.tags.iter().copied())
            .collect();
        let languages: HashSet<_> = self.snippets.iter().map(|s| s.language).collect();

        PageStats {
            snippets: self.snippets.len(),
            technologies: technologies.len(),
            languages: languages.len(),
            quick_setups: self.snippets.iter().filter(|s| s.quick_setup).count(),
        }
    }
}
