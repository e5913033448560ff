//! Walkthrough step descriptors

use super::Icon;

/// One onboarding step. Exactly one of the optional lists is populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkthroughStep {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub standards: Option<&'static [Standard]>,
    pub portfolio: Option<&'static [PortfolioEntry]>,
    pub metrics: Option<&'static [Metric]>,
}

/// A laboratory practice standard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standard {
    pub title: &'static str,
    pub description: &'static str,
}

/// A published work in the user's portfolio
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioEntry {
    pub title: &'static str,
    pub journal: &'static str,
    pub year: &'static str,
    pub citations: &'static str,
    pub link: &'static str,
    /// Stand-in shown until the user adds real work
    pub is_placeholder: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

static STANDARDS: [Standard; 8] = [
    Standard {
        title: "Data Integrity",
        description: "Ensure all research data is accurate, complete, and verifiable",
    },
    Standard {
        title: "Documentation",
        description: "Maintain detailed records of all experimental procedures and results",
    },
    Standard {
        title: "Quality Control",
        description: "Implement systematic checks to verify experimental accuracy",
    },
    Standard {
        title: "Equipment Validation",
        description: "Regular calibration and maintenance of laboratory instruments",
    },
    Standard {
        title: "Safety Protocols",
        description: "Follow established safety procedures for laboratory work",
    },
    Standard {
        title: "Sample Management",
        description: "Proper handling, storage, and tracking of research samples",
    },
    Standard {
        title: "Standard Operating Procedures",
        description: "Develop and follow consistent methodological approaches",
    },
    Standard {
        title: "Audit Trail",
        description: "Maintain clear records of all changes and modifications",
    },
];

static PORTFOLIO: [PortfolioEntry; 1] = [PortfolioEntry {
    title: "Press + to add your first research work",
    journal: "Your Journal Here",
    year: "Year",
    citations: "0",
    link: "#",
    is_placeholder: true,
}];

static METRICS: [Metric; 4] = [
    Metric {
        label: "Research Skills",
        value: "Growing",
        icon: Icon::TrendingUp,
    },
    Metric {
        label: "Lab Techniques",
        value: "Learning",
        icon: Icon::Zap,
    },
    Metric {
        label: "Academic Grade",
        value: "A+",
        icon: Icon::Award,
    },
    Metric {
        label: "Study Progress",
        value: "85%",
        icon: Icon::BookOpen,
    },
];

static STEPS: [WalkthroughStep; 3] = [
    WalkthroughStep {
        title: "Welcome to Dr.researcher",
        subtitle: "Your Personal Research Companion",
        description: "Master research methodologies, maintain laboratory standards, and build your academic portfolio with precision and excellence.",
        standards: Some(&STANDARDS),
        portfolio: None,
        metrics: None,
    },
    WalkthroughStep {
        title: "My Research Portfolio",
        subtitle: "Published Works & Studies",
        description: "Build and showcase your research journey. Add your publications, studies, and academic achievements as you progress.",
        standards: None,
        portfolio: Some(&PORTFOLIO),
        metrics: None,
    },
    WalkthroughStep {
        title: "Academic Excellence",
        subtitle: "Skills & Achievements Tracker",
        description: "Monitor your academic growth, research skills development, and scholarly achievements throughout your educational journey.",
        standards: None,
        portfolio: None,
        metrics: Some(&METRICS),
    },
];

/// The ordered onboarding sequence
pub fn walkthrough_steps() -> &'static [WalkthroughStep] {
    &STEPS
}

/// Whether `index` is the final step
pub fn is_last_step(index: usize) -> bool {
    index + 1 == STEPS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_steps_with_one_section_each() {
        let steps = walkthrough_steps();
        assert_eq!(steps.len(), 3);

        for step in steps {
            let sections = [
                step.standards.is_some(),
                step.portfolio.is_some(),
                step.metrics.is_some(),
            ];
            assert_eq!(sections.iter().filter(|s| **s).count(), 1, "{}", step.title);
        }
    }

    #[test]
    fn test_section_order() {
        let steps = walkthrough_steps();
        assert_eq!(steps[0].standards.map(|s| s.len()), Some(8));
        assert_eq!(steps[1].portfolio.map(|p| p.len()), Some(1));
        assert_eq!(steps[2].metrics.map(|m| m.len()), Some(4));
    }

    #[test]
    fn test_portfolio_starts_with_placeholder() {
        let entry = &walkthrough_steps()[1].portfolio.unwrap()[0];
        assert!(entry.is_placeholder);
        assert_eq!(entry.citations, "0");
    }

    #[test]
    fn test_is_last_step() {
        assert!(!is_last_step(0));
        assert!(!is_last_step(1));
        assert!(is_last_step(2));
    }
}
