use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{PageStats, ReferencePage, Section, Snippet};
use crate::search::group_by_section;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Markdown,
}

impl ExportFormat {
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "yaml" | "yml" => Ok(ExportFormat::Yaml),
            "md" | "markdown" => Ok(ExportFormat::Markdown),
            other => bail!("Unknown export format '{}' (expected json, yaml or markdown)", other),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Yaml => "yaml",
            ExportFormat::Markdown => "md",
        }
    }
}

/// One page as written to an export file
#[derive(Debug, Clone, Serialize)]
pub struct PageExport {
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub stats: PageStats,
    pub sections: &'static [Section],
    pub snippets: &'static [Snippet],
}

impl From<&'static ReferencePage> for PageExport {
    fn from(page: &'static ReferencePage) -> Self {
        Self {
            id: page.id,
            title: page.title,
            tagline: page.tagline,
            stats: page.stats(),
            sections: page.sections,
            snippets: page.snippets,
        }
    }
}

/// Export file structure
#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub version: String,
    pub created_at: DateTime<Utc>,
    pub pages: Vec<PageExport>,
}

impl ExportData {
    pub fn new(pages: impl IntoIterator<Item = &'static ReferencePage>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            created_at: Utc::now(),
            pages: pages.into_iter().map(PageExport::from).collect(),
        }
    }

    pub fn render(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => {
                serde_json::to_string_pretty(self).context("Failed to serialize export to JSON")
            }
            ExportFormat::Yaml => {
                serde_yaml::to_string(self).context("Failed to serialize export to YAML")
            }
            ExportFormat::Markdown => Ok(render_markdown(self)),
        }
    }

    pub fn write_to(&self, path: &Path, format: ExportFormat) -> Result<()> {
        let content = self.render(format)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, content)
            .with_context(|| format!("Failed to write export file {}", path.display()))
    }
}

fn write_snippet(out: &mut String, snippet: &Snippet) {
    let _ = writeln!(out, "### {}\n", snippet.title);
    if !snippet.description.is_empty() {
        let _ = writeln!(out, "{}\n", snippet.description);
    }
    if let Some(path) = snippet.file_path {
        let _ = writeln!(out, "`{}`\n", path);
    }
    let _ = writeln!(out, "```{}\n{}\n```\n", snippet.highlight.tag(), snippet.body.trim_end());
    if !snippet.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}\n", snippet.tags.join(", "));
    }
}

/// Renders every page as markdown: quick setup first, then each non-empty
/// section with its snippets as fenced code blocks.
pub fn render_markdown(data: &ExportData) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "<!-- devref {} export, {} -->\n",
        data.version,
        data.created_at.format("%Y-%m-%d %H:%M UTC")
    );

    for page in &data.pages {
        let _ = writeln!(out, "# {}\n\n{}\n", page.title, page.tagline);

        let all: Vec<&'static Snippet> = page.snippets.iter().collect();
        let quick: Vec<_> = all.iter().filter(|s| s.quick_setup).collect();
        if !quick.is_empty() {
            out.push_str("## Quick Setup\n\n");
            for snippet in quick {
                write_snippet(&mut out, snippet);
            }
        }

        for group in group_by_section(&all, page.sections) {
            let _ = writeln!(out, "## {}\n", group.section.title);
            for snippet in group.snippets {
                write_snippet(&mut out, snippet);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use pretty_assertions::assert_eq;

    fn express() -> ExportData {
        ExportData::new(catalog::page("express"))
    }

    #[test]
    fn parses_format_names() {
        assert_eq!(ExportFormat::parse("JSON").ok(), Some(ExportFormat::Json));
        assert_eq!(ExportFormat::parse("yml").ok(), Some(ExportFormat::Yaml));
        assert_eq!(ExportFormat::parse("md").ok(), Some(ExportFormat::Markdown));
        assert!(ExportFormat::parse("xml").is_err());
        assert_eq!(ExportFormat::Markdown.extension(), "md");
    }

    #[test]
    fn json_export_carries_pages_and_stats() {
        let json = express().render(ExportFormat::Json).expect("json");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["pages"][0]["id"], "express");
        assert_eq!(value["pages"][0]["stats"]["snippets"], 12);
        assert_eq!(value["pages"][0]["snippets"][0]["language"], "bash");
        assert!(value["pages"][0].get("initially_expanded").is_none());
    }

    #[test]
    fn yaml_export_lists_snippet_ids() {
        let yaml = express().render(ExportFormat::Yaml).expect("yaml");
        assert!(yaml.contains("id: express"));
        assert!(yaml.contains("mongodb-connection"));
    }

    #[test]
    fn markdown_groups_by_section() {
        let md = express().render(ExportFormat::Markdown).expect("markdown");
        let quick = md.find("## Quick Setup").expect("quick setup heading");
        let mongo = md.find("MongoDB Connection").expect("mongodb snippet");
        assert!(quick < mongo);
        assert!(md.starts_with("<!-- devref"));
        assert!(md.contains("```bash\n"));
    }

    #[test]
    fn writes_into_missing_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out").join("express.json");

        express()
            .write_to(&path, ExportFormat::Json)
            .expect("export written");
        let written = fs::read_to_string(&path).expect("read back");
        assert!(written.contains("\"express\""));
    }
}
