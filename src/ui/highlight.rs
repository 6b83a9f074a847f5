use once_cell::sync::Lazy;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use syntect::{
    easy::HighlightLines, highlighting::ThemeSet, parsing::SyntaxSet, util::LinesWithEndings,
};

use crate::models::SnippetLanguage;
use crate::ui::colors::RosePine;

static SYNTAX_SET: Lazy<SyntaxSet> = Lazy::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: Lazy<ThemeSet> = Lazy::new(ThemeSet::load_defaults);

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

pub fn has_theme(name: &str) -> bool {
    THEME_SET.themes.contains_key(name)
}

fn plain(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|line| Line::styled(line.to_string(), Style::default().fg(RosePine::TEXT)))
        .collect()
}

/// Highlights `text` as `language` with the named syntect theme. Unknown
/// syntaxes or themes fall back to the defaults; trailing newlines are dropped.
pub fn highlight(text: &str, language: SnippetLanguage, theme: &str) -> Vec<Line<'static>> {
    let text = text.trim_end_matches(['\n', '\r']);

    let syntax = match SYNTAX_SET.find_syntax_by_name(language.syntax_name()) {
        Some(syntax) => syntax,
        None => {
            log::debug!(
                "No syntax named {} for {:?}, using plain text",
                language.syntax_name(),
                language
            );
            SYNTAX_SET.find_syntax_plain_text()
        }
    };

    let theme = match THEME_SET.themes.get(theme) {
        Some(theme) => theme,
        None => {
            log::debug!("Unknown theme {}, using {}", theme, DEFAULT_THEME);
            match THEME_SET.themes.get(DEFAULT_THEME) {
                Some(theme) => theme,
                None => return plain(text),
            }
        }
    };

    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut lines = Vec::new();

    for line in LinesWithEndings::from(text) {
        let regions = match highlighter.highlight_line(line, &SYNTAX_SET) {
            Ok(regions) => regions,
            Err(e) => {
                log::debug!("Highlighting failed on a line: {}", e);
                lines.extend(plain(line));
                continue;
            }
        };

        let spans: Vec<Span<'static>> = regions
            .into_iter()
            .map(|(style, piece)| {
                let fg = style.foreground;
                Span::styled(
                    piece.trim_end_matches(['\n', '\r']).to_string(),
                    Style::default().fg(Color::Rgb(fg.r, fg.g, fg.b)),
                )
            })
            .filter(|span| !span.content.is_empty())
            .collect();

        lines.push(Line::from(spans));
    }

    lines
}
