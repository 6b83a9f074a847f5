pub mod export;
pub mod filter;
pub mod page;
pub mod section;
pub mod snippet;
pub mod topic;

pub use export::{ExportData, ExportFormat, render_markdown};
pub use filter::{ALL_FILTER, Filter, find_filter};
pub use page::{PageStats, ReferencePage};
pub use section::{Section, SectionAccent};
pub use snippet::{Snippet, SnippetLanguage};
pub use topic::Topic;
