use crate::ui::colors::RosePine;
use ratatui::style::Color;
use serde::Serialize;

/// A named, collapsible grouping of snippets sharing a topic. Membership is
/// declared on each snippet through `Snippet::sections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub key: &'static str,
    pub title: &'static str,
    pub accent: SectionAccent,
}

impl Section {
    pub const fn new(key: &'static str, title: &'static str, accent: SectionAccent) -> Self {
        Self { key, title, accent }
    }
}

/// Topic category of a section, mapped statically to a color and an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionAccent {
    Terminal,
    Auth,
    Styling,
    Database,
    Server,
    Routes,
    Data,
    Deployment,
    Package,
    Other,
}

impl SectionAccent {
    pub fn color(&self) -> Color {
        match self {
            SectionAccent::Terminal => RosePine::FOAM,
            SectionAccent::Auth => Color::Rgb(74, 222, 128),
            SectionAccent::Styling => RosePine::LOVE,
            SectionAccent::Database => Color::Rgb(34, 211, 238),
            SectionAccent::Server => RosePine::IRIS,
            SectionAccent::Routes => RosePine::GOLD,
            SectionAccent::Data => Color::Rgb(250, 204, 21),
            SectionAccent::Deployment => Color::Rgb(129, 140, 248),
            SectionAccent::Package => Color::Rgb(251, 146, 60),
            SectionAccent::Other => RosePine::SUBTLE,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SectionAccent::Terminal => "",
            SectionAccent::Auth => "󰒃",
            SectionAccent::Styling => "",
            SectionAccent::Database => "",
            SectionAccent::Server => "󰒋",
            SectionAccent::Routes => "󱐋",
            SectionAccent::Data => "",
            SectionAccent::Deployment => "",
            SectionAccent::Package => "",
            SectionAccent::Other => "",
        }
    }
}
