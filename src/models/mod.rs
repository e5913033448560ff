//! Data models module
//!
//! Static descriptor data for the walkthrough steps and research modes.
//! Visual styling lives in the screen layer; these records only carry
//! semantic tokens ([`Icon`], [`Accent`]).

pub mod mode;
pub mod walkthrough;

// Re-export commonly used types
pub use mode::{find_mode, research_modes, Accent, ResearchMode};
pub use walkthrough::{is_last_step, walkthrough_steps, Metric, PortfolioEntry, Standard, WalkthroughStep};

/// Semantic icon reference, rendered by the screen layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Award,
    BookOpen,
    ChevronRight,
    ExternalLink,
    Globe,
    Plus,
    Search,
    Shield,
    TrendingUp,
    Zap,
}
