use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureIcon {
    Search,
    UserPlus,
    MessageSquare,
    FileText,
}

impl FeatureIcon {
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Search => "blue",
            Self::UserPlus => "green",
            Self::MessageSquare => "purple",
            Self::FileText => "orange",
        }
    }

    /// Inline SVG body (24x24 viewBox, stroked).
    pub const fn svg_path(self) -> &'static str {
        match self {
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::UserPlus => {
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/><circle cx="9" cy="7" r="4"/><path d="M19 8v6M22 11h-6"/>"#
            }
            Self::MessageSquare => {
                r#"<path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>"#
            }
            Self::FileText => {
                r#"<path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7z"/><path d="M14 2v5h5M16 13H8M16 17H8M10 9H8"/>"#
            }
        }
    }
}

/// Static quick-action card linking to a sibling page.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureCard {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
}

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard {
        icon: FeatureIcon::Search,
        title: "Search Records",
        description: "Quick access to criminal records with advanced search capabilities",
        link: "/search",
    },
    FeatureCard {
        icon: FeatureIcon::UserPlus,
        title: "Add Record",
        description: "Create and manage new criminal records with detailed information",
        link: "/newcriminal",
    },
    FeatureCard {
        icon: FeatureIcon::MessageSquare,
        title: "Register Complaint",
        description: "File a new complaint or report suspicious activity",
        link: "/complaint",
    },
    FeatureCard {
        icon: FeatureIcon::FileText,
        title: "Feedback",
        description: "Share your experience and help us improve our services",
        link: "/feedback",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_point_at_sibling_pages() {
        let links: Vec<&str> = FEATURES.iter().map(|card| card.link).collect();
        assert_eq!(links, ["/search", "/newcriminal", "/complaint", "/feedback"]);
    }
}
