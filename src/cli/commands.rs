use std::io::Write;
use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::catalog;
use crate::handlers::clipboard::{Clipboard, SystemClipboard};
use crate::models::{ExportData, ExportFormat, ReferencePage, Snippet, find_filter};
use crate::search::{filtered, group_by_section, quick_setup};

fn rule(out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", "─".repeat(60).bright_magenta())?;
    Ok(())
}

fn snippet_line(out: &mut impl Write, snippet: &Snippet, indent: &str) -> Result<()> {
    writeln!(
        out,
        "{}  {}{:<24} {} {}",
        "┃".bright_magenta(),
        indent,
        snippet.id.bright_white(),
        snippet.title,
        format!("[{}]", snippet.language.display_name()).bright_black()
    )?;
    Ok(())
}

/// Lists every reference page with its statistics
pub fn list_pages(out: &mut impl Write) -> Result<()> {
    for page in catalog::PAGES {
        let stats = page.stats();
        writeln!(
            out,
            "{}  {:<10} {}",
            "┃".bright_magenta(),
            page.id.bright_white().bold(),
            page.title
        )?;
        writeln!(
            out,
            "{}  {:<10} {} snippets, {} technologies, {} languages, {} quick setup",
            "┃".bright_magenta(),
            "",
            stats.snippets.to_string().yellow(),
            stats.technologies.to_string().yellow(),
            stats.languages.to_string().yellow(),
            stats.quick_setups.to_string().yellow()
        )?;
    }
    Ok(())
}

/// Prints quick setup snippets and every non-empty section of a page
pub fn list_page(out: &mut impl Write, page: &'static ReferencePage) -> Result<()> {
    writeln!(
        out,
        "{}  {} {}",
        "┃".bright_magenta(),
        page.title.bold(),
        format!("({})", page.id).bright_black()
    )?;
    writeln!(out, "{}  {}", "┃".bright_magenta(), page.tagline.italic())?;
    rule(out)?;

    let all: Vec<&'static Snippet> = page.snippets.iter().collect();
    print_grouped(out, page, &all)
}

fn print_grouped(
    out: &mut impl Write,
    page: &'static ReferencePage,
    snippets: &[&'static Snippet],
) -> Result<()> {
    let quick = quick_setup(snippets);
    if !quick.is_empty() {
        writeln!(out, "{}  {}", "┃".bright_magenta(), "⚡ Quick Setup".bright_yellow())?;
        for snippet in quick {
            snippet_line(out, snippet, "  ")?;
        }
    }

    for group in group_by_section(snippets, page.sections) {
        writeln!(
            out,
            "{}  {} {}",
            "┃".bright_magenta(),
            group.section.title.bright_cyan(),
            format!("({})", group.snippets.len()).bright_black()
        )?;
        for snippet in group.snippets {
            snippet_line(out, snippet, "  ")?;
        }
    }

    Ok(())
}

/// Prints a snippet's metadata followed by its body
pub fn show_snippet(
    out: &mut impl Write,
    page: &ReferencePage,
    snippet: &Snippet,
) -> Result<()> {
    let bar = "┃".bright_magenta();

    writeln!(out, "{}  {} {}", bar, "SNIPPET".bright_green().bold(), snippet.title.bold())?;
    rule(out)?;
    writeln!(out, "{}  {}: {}", bar, "Page".bright_blue(), page.title)?;
    if let Some(path) = snippet.file_path {
        writeln!(out, "{}  {}: {}", bar, "Path".bright_magenta(), path)?;
    }
    writeln!(
        out,
        "{}  {}: {}",
        bar,
        "Language".bright_yellow(),
        snippet.language.display_name()
    )?;
    writeln!(out, "{}  {}: {}", bar, "Description".bright_cyan(), snippet.description)?;
    if !snippet.tags.is_empty() {
        writeln!(out, "{}  {}: {}", bar, "Tags".bright_green(), snippet.tags.join(", "))?;
    }
    writeln!(out, "{}  {}: {}", bar, "ID".bright_black(), snippet.id)?;
    rule(out)?;

    for line in snippet.body.lines() {
        writeln!(out, "{}  {}", bar, line)?;
    }
    Ok(())
}

/// Runs the combined query on each page and prints the hits grouped like the TUI
pub fn search_snippets(
    out: &mut impl Write,
    pages: &[&'static ReferencePage],
    query: &str,
    filter: Option<&str>,
) -> Result<()> {
    let mut total = 0;

    for &page in pages {
        let filter_id = match filter {
            Some(id) if find_filter(page.filters, id).is_some() => id,
            Some(id) => {
                let known: Vec<_> = page.filters.iter().map(|f| f.id).collect();
                writeln!(
                    out,
                    "{}  {} no filter '{}' on {} (has {}), showing all",
                    "┃".bright_magenta(),
                    "note:".bright_yellow(),
                    id,
                    page.id,
                    known.join(", ")
                )?;
                crate::models::ALL_FILTER
            }
            None => crate::models::ALL_FILTER,
        };

        let hits = filtered(page.snippets, query, page.filters, filter_id);
        if hits.is_empty() {
            continue;
        }
        total += hits.len();

        writeln!(
            out,
            "{}  {} {}",
            "┃".bright_magenta(),
            page.title.bold(),
            format!("({} matches)", hits.len()).bright_black()
        )?;
        print_grouped(out, page, &hits)?;
    }

    if total == 0 {
        writeln!(
            out,
            "{}  No snippets found matching: {}",
            "┃".bright_magenta(),
            query.bright_white()
        )?;
    }
    Ok(())
}

/// Copies a snippet body to the system clipboard, blocking until done
pub fn copy_snippet(out: &mut impl Write, page: &ReferencePage, snippet: &Snippet) -> Result<()> {
    copy_with(out, &mut SystemClipboard::new()?, page, snippet)
}

fn copy_with(
    out: &mut impl Write,
    clipboard: &mut dyn Clipboard,
    page: &ReferencePage,
    snippet: &Snippet,
) -> Result<()> {
    clipboard.set_text(snippet.body)?;
    log::info!("Copied {}/{} from the command line", page.id, snippet.id);
    writeln!(
        out,
        "{}  {} {} ({} lines)",
        "┃".bright_magenta(),
        "Copied".bright_green(),
        snippet.title.bold(),
        snippet.get_line_count()
    )?;
    Ok(())
}

/// Writes the export to `output`, or to `out` when no file is given. A file
/// name without an extension gets the format's one.
pub fn export_pages(
    out: &mut impl Write,
    pages: Vec<&'static ReferencePage>,
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let data = ExportData::new(pages);

    match output {
        Some(path) => {
            let path = match path.extension() {
                Some(_) => path.to_path_buf(),
                None => path.with_extension(format.extension()),
            };
            data.write_to(&path, format)?;
            writeln!(
                out,
                "{}  Exported {} page(s) to {}",
                "┃".bright_magenta(),
                data.pages.len(),
                path.display().to_string().bright_white()
            )?;
        }
        None => {
            write!(out, "{}", data.render(format)?)?;
        }
    }
    Ok(())
}
