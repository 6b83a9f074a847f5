use ratatui::style::Color;
use serde::Serialize;

/// A compiled-in reference snippet. Every field is static data; catalogs are
/// never mutated after start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snippet {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Language shown on the badge
    pub language: SnippetLanguage,
    /// Language handed to the highlighter, may differ from the badge (`.env` files highlight as bash)
    pub highlight: SnippetLanguage,
    pub body: &'static str,
    pub tags: &'static [&'static str],
    pub quick_setup: bool,
    pub file_path: Option<&'static str>,
    /// Keys of the sections this snippet is listed under
    pub sections: &'static [&'static str],
}

impl Snippet {
    pub fn in_section(&self, key: &str) -> bool {
        !self.quick_setup && self.sections.iter().any(|s| *s == key)
    }

    pub fn get_line_count(&self) -> usize {
        self.body.lines().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetLanguage {
    JavaScript,
    TypeScript,
    Bash,
    Json,
    Css,
    Html,
    Env,
    Yaml,
    Markdown,
    Text,
}

impl SnippetLanguage {
    /// Tag used on badges and in exported markdown fences
    pub fn tag(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "javascript",
            SnippetLanguage::TypeScript => "typescript",
            SnippetLanguage::Bash => "bash",
            SnippetLanguage::Json => "json",
            SnippetLanguage::Css => "css",
            SnippetLanguage::Html => "html",
            SnippetLanguage::Env => "env",
            SnippetLanguage::Yaml => "yaml",
            SnippetLanguage::Markdown => "markdown",
            SnippetLanguage::Text => "text",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "JavaScript",
            SnippetLanguage::TypeScript => "TypeScript",
            SnippetLanguage::Bash => "Bash",
            SnippetLanguage::Json => "JSON",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Env => "Env",
            SnippetLanguage::Yaml => "YAML",
            SnippetLanguage::Markdown => "Markdown",
            SnippetLanguage::Text => "Text",
        }
    }

    /// Name of the syntect syntax used to highlight this language
    pub fn syntax_name(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "JavaScript",
            // syntect's default set ships no TypeScript grammar
            SnippetLanguage::TypeScript => "JavaScript",
            SnippetLanguage::Bash | SnippetLanguage::Env => "Bourne Again Shell (bash)",
            SnippetLanguage::Json => "JSON",
            SnippetLanguage::Css => "CSS",
            SnippetLanguage::Html => "HTML",
            SnippetLanguage::Yaml => "YAML",
            SnippetLanguage::Markdown => "Markdown",
            SnippetLanguage::Text => "Plain Text",
        }
    }

    /// Get icon for the language
    pub fn icon(&self) -> &'static str {
        match self {
            SnippetLanguage::JavaScript => "",
            SnippetLanguage::TypeScript => "",
            SnippetLanguage::Bash => "",
            SnippetLanguage::Json => "",
            SnippetLanguage::Css => "",
            SnippetLanguage::Html => "",
            SnippetLanguage::Env => "",
            SnippetLanguage::Yaml => "",
            SnippetLanguage::Markdown => "",
            SnippetLanguage::Text => "",
        }
    }

    /// Badge background for the language, purple when nothing specific applies
    pub fn badge_color(&self) -> Color {
        match self {
            SnippetLanguage::TypeScript => Color::Rgb(37, 99, 235),
            SnippetLanguage::JavaScript => Color::Rgb(202, 138, 4),
            SnippetLanguage::Bash => Color::Rgb(55, 65, 81),
            SnippetLanguage::Json => Color::Rgb(217, 119, 6),
            SnippetLanguage::Css => Color::Rgb(219, 39, 119),
            SnippetLanguage::Env => Color::Rgb(5, 150, 105),
            _ => Color::Rgb(147, 51, 234),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_languages_share_the_default_badge() {
        assert_eq!(
            SnippetLanguage::Yaml.badge_color(),
            SnippetLanguage::Text.badge_color()
        );
        assert_ne!(
            SnippetLanguage::Bash.badge_color(),
            SnippetLanguage::Text.badge_color()
        );
    }

    #[test]
    fn quick_setup_snippets_are_never_in_a_section() {
        let snippet = Snippet {
            id: "setup",
            title: "Setup",
            description: "",
            language: SnippetLanguage::Bash,
            highlight: SnippetLanguage::Bash,
            body: "npm init -y",
            tags: &["setup"],
            quick_setup: true,
            file_path: None,
            sections: &["setup"],
        };
        assert!(!snippet.in_section("setup"));
        assert_eq!(snippet.get_line_count(), 1);
    }
}
