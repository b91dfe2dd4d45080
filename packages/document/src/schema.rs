//! # Landing Page Schema
//!
//! Typed vocabulary over the generic [`Node`](crate::Node) tree: which
//! singleton sections exist, how section identifiers are spelled in
//! `sectionOrder`, and the theme presets the global settings panel offers.
//!
//! Section *contents* stay a property bag. Renderers and AI-generated pages
//! add fields freely, so only identity is typed here.

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix marking a dynamic content block in `sectionOrder`
pub const BLOCK_PREFIX: &str = "block-";

/// Top-level key holding the render order
pub const SECTION_ORDER_KEY: &str = "sectionOrder";

/// Top-level key holding the dynamic content blocks
pub const CONTENT_BLOCKS_KEY: &str = "contentBlocks";

/// Singleton sections stored directly under the document root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Navbar,
    Hero,
    PersonalHero,
    Features,
    Gallery,
    Testimonials,
    Cta,
    ContactForm,
    Footer,
    Timeline,
    Team,
    TwoColumnInfo,
    Steps,
    Process,
    Manifesto,
    ValueProposition,
    Philosophy,
    PullQuotes,
}

impl SectionKind {
    pub const ALL: [SectionKind; 18] = [
        SectionKind::Navbar,
        SectionKind::Hero,
        SectionKind::PersonalHero,
        SectionKind::Features,
        SectionKind::Gallery,
        SectionKind::Testimonials,
        SectionKind::Cta,
        SectionKind::ContactForm,
        SectionKind::Footer,
        SectionKind::Timeline,
        SectionKind::Team,
        SectionKind::TwoColumnInfo,
        SectionKind::Steps,
        SectionKind::Process,
        SectionKind::Manifesto,
        SectionKind::ValueProposition,
        SectionKind::Philosophy,
        SectionKind::PullQuotes,
    ];

    /// Key of this section in the document root
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Navbar => "navbar",
            SectionKind::Hero => "hero",
            SectionKind::PersonalHero => "personalHero",
            SectionKind::Features => "features",
            SectionKind::Gallery => "gallery",
            SectionKind::Testimonials => "testimonials",
            SectionKind::Cta => "cta",
            SectionKind::ContactForm => "contactForm",
            SectionKind::Footer => "footer",
            SectionKind::Timeline => "timeline",
            SectionKind::Team => "team",
            SectionKind::TwoColumnInfo => "twoColumnInfo",
            SectionKind::Steps => "steps",
            SectionKind::Process => "process",
            SectionKind::Manifesto => "manifesto",
            SectionKind::ValueProposition => "valueProposition",
            SectionKind::Philosophy => "philosophy",
            SectionKind::PullQuotes => "pullQuotes",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKind {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownSection(s.to_string()))
    }
}

/// Identifier of something the sidebar can select
///
/// Wire forms: `global`, a singleton key such as `hero`, or `block-<id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SectionId {
    /// Global settings panel (not a section of the page)
    Global,
    Singleton(SectionKind),
    Block(String),
}

impl SectionId {
    pub fn block(id: impl Into<String>) -> Self {
        SectionId::Block(id.into())
    }

    pub fn is_block(&self) -> bool {
        matches!(self, SectionId::Block(_))
    }

    pub fn block_id(&self) -> Option<&str> {
        match self {
            SectionId::Block(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionId::Global => f.write_str("global"),
            SectionId::Singleton(kind) => f.write_str(kind.as_str()),
            SectionId::Block(id) => write!(f, "{}{}", BLOCK_PREFIX, id),
        }
    }
}

impl FromStr for SectionId {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "global" {
            return Ok(SectionId::Global);
        }
        if let Some(id) = s.strip_prefix(BLOCK_PREFIX) {
            return Ok(SectionId::Block(id.to_string()));
        }
        s.parse().map(SectionId::Singleton)
    }
}

impl TryFrom<String> for SectionId {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SectionId> for String {
    fn from(id: SectionId) -> Self {
        id.to_string()
    }
}

/// Colour theme of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    Light,
    Dark,
    Sepia,
    HighContrastLight,
    HighContrastDark,
    Midnight,
    Ocean,
    Forest,
    Wine,
    Cyberpunk,
    Luxury,
    Retro,
    Lavender,
    Sunset,
    Dracula,
    Nord,
    Coffee,
    Navy,
    Hacker,
    Dim,
}

impl Theme {
    pub const ALL: [Theme; 20] = [
        Theme::Light,
        Theme::Dark,
        Theme::Sepia,
        Theme::HighContrastLight,
        Theme::HighContrastDark,
        Theme::Midnight,
        Theme::Ocean,
        Theme::Forest,
        Theme::Wine,
        Theme::Cyberpunk,
        Theme::Luxury,
        Theme::Retro,
        Theme::Lavender,
        Theme::Sunset,
        Theme::Dracula,
        Theme::Nord,
        Theme::Coffee,
        Theme::Navy,
        Theme::Hacker,
        Theme::Dim,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
            Theme::HighContrastLight => "high-contrast-light",
            Theme::HighContrastDark => "high-contrast-dark",
            Theme::Midnight => "midnight",
            Theme::Ocean => "ocean",
            Theme::Forest => "forest",
            Theme::Wine => "wine",
            Theme::Cyberpunk => "cyberpunk",
            Theme::Luxury => "luxury",
            Theme::Retro => "retro",
            Theme::Lavender => "lavender",
            Theme::Sunset => "sunset",
            Theme::Dracula => "dracula",
            Theme::Nord => "nord",
            Theme::Coffee => "coffee",
            Theme::Navy => "navy",
            Theme::Hacker => "hacker",
            Theme::Dim => "dim",
        }
    }

    /// Colour tokens applied when this theme is picked, if it has a preset
    pub fn preset(self) -> Option<ThemePreset> {
        let (background, surface, primary, secondary, button_text) = match self {
            Theme::Light => ("#ffffff", "#f3f4f6", "#2563eb", "#4f46e5", "#ffffff"),
            Theme::Dark => ("#111827", "#1f2937", "#3b82f6", "#6366f1", "#ffffff"),
            Theme::Sepia => ("#fdf6e3", "#eee8d5", "#d33682", "#b58900", "#fdf6e3"),
            Theme::Midnight => ("#0f172a", "#1e293b", "#38bdf8", "#0ea5e9", "#ffffff"),
            Theme::Ocean => ("#0f172a", "#1e293b", "#0ea5e9", "#0284c7", "#ffffff"),
            Theme::Forest => ("#052e16", "#064e3b", "#22c55e", "#16a34a", "#ffffff"),
            Theme::Cyberpunk => ("#09090b", "#18181b", "#f472b6", "#22d3ee", "#000000"),
            Theme::Luxury => ("#000000", "#1c1917", "#fbbf24", "#d97706", "#000000"),
            _ => return None,
        };

        Some(ThemePreset {
            background_color: background,
            surface_color: surface,
            primary_color: primary,
            secondary_color: secondary,
            button_text_color: button_text,
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| DocumentError::UnknownTheme(s.to_string()))
    }
}

/// Global colour tokens of a theme preset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreset {
    pub background_color: &'static str,
    pub surface_color: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub button_text_color: &'static str,
}

impl ThemePreset {
    /// Root-level keys and values this preset writes
    pub fn fields(&self) -> [(&'static str, &'static str); 5] {
        [
            ("backgroundColor", self.background_color),
            ("surfaceColor", self.surface_color),
            ("primaryColor", self.primary_color),
            ("secondaryColor", self.secondary_color),
            ("buttonTextColor", self.button_text_color),
        ]
    }
}
