//! Research mode descriptors

use super::Icon;

/// A named external destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchMode {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub accent: Accent,
    pub link: &'static str,
    pub features: &'static [&'static str],
}

/// Colour token; the screen layer decides what it looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Blue,
    Emerald,
    Purple,
}

static MODES: [ResearchMode; 3] = [
    ResearchMode {
        id: "study",
        title: "Study Mode",
        subtitle: "Academic Research",
        description: "Access curated academic papers, literature reviews, and educational resources",
        icon: Icon::BookOpen,
        accent: Accent::Blue,
        link: "https://biovit.netlify.app",
        features: &["Peer-reviewed papers", "Citation tools", "Research methodology"],
    },
    ResearchMode {
        id: "research",
        title: "Research Mode",
        subtitle: "Active Investigation",
        description: "Advanced tools for conducting original research and data analysis",
        icon: Icon::Search,
        accent: Accent::Emerald,
        link: "https://example.com/research-mode",
        features: &["Data analysis tools", "Collaboration space", "Publication support"],
    },
    ResearchMode {
        id: "advanced",
        title: "Advanced Mode",
        subtitle: "Expert Level",
        description: "Premium features for seasoned researchers and academic professionals",
        icon: Icon::Zap,
        accent: Accent::Purple,
        link: "https://example.com/advanced-mode",
        features: &["AI-powered insights", "Custom workflows", "Priority support"],
    },
];

/// All selectable research modes, in display order
pub fn research_modes() -> &'static [ResearchMode] {
    &MODES
}

/// Look up a mode by id
pub fn find_mode(id: &str) -> Option<&'static ResearchMode> {
    MODES.iter().find(|mode| mode.id == id)
}
