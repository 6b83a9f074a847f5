//! CLI Module for devref
//! Prints pages, snippets and search results straight to the terminal
//! without launching the TUI.

pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Result, bail};
use colored::Colorize;

use crate::catalog;
use crate::models::{ExportFormat, ReferencePage, Snippet};

/// Parsed command line: a command, its positional arguments and the options
/// every command understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub command: String,
    pub positional: Vec<String>,
    pub page: Option<String>,
    pub filter: Option<String>,
    pub format: Option<String>,
    pub output: Option<PathBuf>,
}

impl CliArgs {
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut parsed = CliArgs::default();
        let mut iter = args.iter();

        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if arg.starts_with("--") => (flag, Some(value.to_string())),
                _ => (arg.as_str(), None),
            };

            let slot = match flag {
                "--page" | "-p" => &mut parsed.page,
                "--filter" | "-f" => &mut parsed.filter,
                "--format" => &mut parsed.format,
                "--output" | "-o" => {
                    let value = match inline {
                        Some(value) => value,
                        None => match iter.next() {
                            Some(value) => value.clone(),
                            None => bail!("Missing value for {}", flag),
                        },
                    };
                    parsed.output = Some(PathBuf::from(value));
                    continue;
                }
                "--help" | "-h" => {
                    parsed.command = "help".to_string();
                    continue;
                }
                other if other.starts_with('-') && other.len() > 1 => {
                    bail!("Unknown option {}", other)
                }
                _ => {
                    if parsed.command.is_empty() {
                        parsed.command = arg.clone();
                    } else {
                        parsed.positional.push(arg.clone());
                    }
                    continue;
                }
            };

            let value = match inline {
                Some(value) => value,
                None => match iter.next() {
                    Some(value) => value.clone(),
                    None => bail!("Missing value for {}", flag),
                },
            };
            *slot = Some(value);
        }

        Ok(parsed)
    }

    fn first(&self) -> Option<&str> {
        self.positional.first().map(String::as_str)
    }
}

/// Resolves a page id, listing the known pages when it does not exist
pub fn resolve_page(id: &str) -> Result<&'static ReferencePage> {
    match catalog::page(id) {
        Some(page) => Ok(page),
        None => {
            let known: Vec<_> = catalog::PAGES.iter().map(|p| p.id).collect();
            bail!("No page named '{}'. Available pages: {}", id, known.join(", "))
        }
    }
}

/// Ids close to `id` on `page`: ids containing it, then search hits
fn suggestions(page: &ReferencePage, id: &str) -> Vec<&'static str> {
    let needle = id.to_lowercase();
    let mut found: Vec<&'static str> = page
        .snippets
        .iter()
        .filter(|s| s.id.contains(&needle) || needle.contains(s.id))
        .map(|s| s.id)
        .collect();

    for part in needle.split(['-', '_', ' ']).filter(|p| p.len() > 2) {
        for snippet in crate::search::search(page.snippets, part) {
            if !found.contains(&snippet.id) {
                found.push(snippet.id);
            }
        }
    }

    found.truncate(5);
    found
}

/// Finds a snippet by id, on one page or across every page
pub fn resolve_snippet(
    id: &str,
    page: Option<&str>,
) -> Result<(&'static ReferencePage, &'static Snippet)> {
    if let Some(page_id) = page {
        let page = resolve_page(page_id)?;
        return match page.snippet(id) {
            Some(snippet) => Ok((page, snippet)),
            None => {
                let close = suggestions(page, id);
                if close.is_empty() {
                    bail!("No snippet '{}' on page {}", id, page.id)
                }
                bail!(
                    "No snippet '{}' on page {}. Did you mean: {}",
                    id,
                    page.id,
                    close.join(", ")
                )
            }
        };
    }

    let hits: Vec<_> = catalog::PAGES
        .iter()
        .filter_map(|page| page.snippet(id).map(|snippet| (page, snippet)))
        .collect();

    match hits.as_slice() {
        [hit] => Ok(*hit),
        [] => {
            let close: Vec<String> = catalog::PAGES
                .iter()
                .flat_map(|page| {
                    suggestions(page, id)
                        .into_iter()
                        .map(move |s| format!("{}/{}", page.id, s))
                })
                .take(5)
                .collect();
            if close.is_empty() {
                bail!("No snippet '{}' on any page", id)
            }
            bail!("No snippet '{}'. Did you mean: {}", id, close.join(", "))
        }
        many => {
            let pages: Vec<_> = many.iter().map(|(page, _)| page.id).collect();
            bail!(
                "Snippet '{}' exists on several pages ({}); pick one with --page",
                id,
                pages.join(", ")
            )
        }
    }
}

/// Executes CLI commands based on the provided arguments
pub fn execute_cli(args: &[String]) -> Result<()> {
    let args = CliArgs::parse(args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command.as_str() {
        "" | "help" => print_help(&mut out)?,
        "pages" => commands::list_pages(&mut out)?,
        "list" | "ls" => {
            let id = args
                .first()
                .or(args.page.as_deref())
                .unwrap_or(catalog::DEFAULT_PAGE);
            commands::list_page(&mut out, resolve_page(id)?)?;
        }
        "show" | "view" | "cat" => {
            let Some(id) = args.first() else {
                bail!("Missing snippet id. Usage: devref show <ID> [--page PAGE]");
            };
            let (page, snippet) = resolve_snippet(id, args.page.as_deref())?;
            commands::show_snippet(&mut out, page, snippet)?;
        }
        "search" | "find" => {
            if args.positional.is_empty() {
                bail!("Missing search query. Usage: devref search <QUERY> [--page PAGE] [--filter FILTER]");
            }
            let query = args.positional.join(" ");
            let pages: Vec<&'static ReferencePage> = match args.page.as_deref() {
                Some(id) => vec![resolve_page(id)?],
                None => catalog::PAGES.iter().collect(),
            };
            commands::search_snippets(&mut out, &pages, &query, args.filter.as_deref())?;
        }
        "copy" | "cp" => {
            let Some(id) = args.first() else {
                bail!("Missing snippet id. Usage: devref copy <ID> [--page PAGE]");
            };
            let (page, snippet) = resolve_snippet(id, args.page.as_deref())?;
            commands::copy_snippet(&mut out, page, snippet)?;
        }
        "export" => {
            let format = ExportFormat::parse(args.format.as_deref().unwrap_or("json"))?;
            let pages: Vec<&'static ReferencePage> = match args.page.as_deref() {
                Some(id) => vec![resolve_page(id)?],
                None => catalog::PAGES.iter().collect(),
            };
            commands::export_pages(&mut out, pages, format, args.output.as_deref())?;
        }
        other => {
            writeln!(out, "{}  Unknown command: {}", "┃".bright_magenta(), other)?;
            print_help(&mut out)?;
            bail!("Unknown command: {}", other);
        }
    }

    Ok(())
}

fn print_help(out: &mut impl Write) -> Result<()> {
    let bar = "┃".bright_magenta();
    writeln!(out, "{}  {}", bar, "DEVREF - WEB DEVELOPMENT REFERENCE".bold())?;
    writeln!(out, "{}  {}", bar, "USAGE:".bright_yellow())?;
    writeln!(out, "{}  devref [COMMAND] [ARGS] [OPTIONS]", bar)?;
    writeln!(out, "{}  {}", bar, "COMMANDS:".bright_yellow())?;

    let commands = [
        ("pages", "List reference pages with their statistics"),
        ("list, ls [PAGE]", "Quick setup and sections of a page"),
        ("show, cat <ID>", "Print a snippet"),
        ("search, find <QUERY>", "Search titles, descriptions and tags"),
        ("copy, cp <ID>", "Copy a snippet body to the clipboard"),
        ("export", "Export pages as json, yaml or markdown"),
        ("help", "Display this help message"),
    ];
    for (name, about) in commands {
        writeln!(out, "{}  {:<27} {}", bar, name.bright_white(), about)?;
    }

    writeln!(out, "{}  {}", bar, "OPTIONS:".bright_yellow())?;
    let options = [
        ("-p, --page <PAGE>", "Restrict to one page (nextjs, express)"),
        ("-f, --filter <FILTER>", "Apply a page filter to search results"),
        ("--format <FORMAT>", "Export format: json, yaml, markdown"),
        ("-o, --output <FILE>", "Write the export to a file"),
    ];
    for (name, about) in options {
        writeln!(out, "{}  {:<27} {}", bar, name.bright_white(), about)?;
    }

    writeln!(out, "{}  {}", bar, "TIP:".bright_green())?;
    writeln!(
        out,
        "{}  Run with no arguments to launch the full TUI (Terminal User Interface) mode",
        bar
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_options_anywhere() {
        let parsed = CliArgs::parse(&args(&[
            "search", "--page", "express", "mongo", "db", "--filter=database",
        ]))
        .expect("parsed");

        assert_eq!(parsed.command, "search");
        assert_eq!(parsed.positional, vec!["mongo", "db"]);
        assert_eq!(parsed.page.as_deref(), Some("express"));
        assert_eq!(parsed.filter.as_deref(), Some("database"));
    }

    #[test]
    fn output_option_is_a_path() {
        let parsed =
            CliArgs::parse(&args(&["export", "-o", "out/ref.md", "--format", "md"])).expect("parsed");
        assert_eq!(parsed.output, Some(PathBuf::from("out/ref.md")));
        assert_eq!(parsed.format.as_deref(), Some("md"));
    }

    #[test]
    fn rejects_unknown_and_incomplete_options() {
        assert!(CliArgs::parse(&args(&["list", "--verbose"])).is_err());
        assert!(CliArgs::parse(&args(&["list", "--page"])).is_err());
    }

    #[test]
    fn unknown_page_lists_the_known_ones() {
        let err = resolve_page("django").expect_err("no such page");
        let message = err.to_string();
        assert!(message.contains("nextjs"));
        assert!(message.contains("express"));
    }

    #[test]
    fn resolves_snippets_across_pages() {
        let (page, snippet) = resolve_snippet("mongoose-schema", None).expect("found");
        assert_eq!((page.id, snippet.id), ("express", "mongoose-schema"));
    }

    #[test]
    fn ids_on_several_pages_need_a_page() {
        let err = resolve_snippet("tailwind-config", None).expect_err("ambiguous");
        assert!(err.to_string().contains("--page"));

        let (page, _) = resolve_snippet("tailwind-config", Some("nextjs")).expect("found");
        assert_eq!(page.id, "nextjs");
    }

    #[test]
    fn unknown_snippet_suggests_close_ids() {
        let err = resolve_snippet("mongodb", Some("express")).expect_err("missing");
        assert!(err.to_string().contains("mongodb-connection"));
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(execute_cli(&args(&["frobnicate"])).is_err());
    }
}
