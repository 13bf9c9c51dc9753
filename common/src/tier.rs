//! Three-bucket severity mapping for analysis results

/// Severity bucket used to color-code results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Fresh,
    Aging,
    Expiring,
}

impl Tier {
    /// Bucket for a 0-100 freshness score
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Tier::Fresh
        } else if score >= 60.0 {
            Tier::Aging
        } else {
            Tier::Expiring
        }
    }

    /// Bucket for a verdict label. Only the two known labels map upward;
    /// anything else is treated as expiring.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Fresh" => Tier::Fresh,
            "Slightly Aging" => Tier::Aging,
            _ => Tier::Expiring,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Fresh => "Fresh",
            Tier::Aging => "Slightly Aging",
            Tier::Expiring => "Expiring",
        }
    }

    /// CSS class used by the web frontend
    pub fn class_name(&self) -> &'static str {
        match self {
            Tier::Fresh => "tier-fresh",
            Tier::Aging => "tier-aging",
            Tier::Expiring => "tier-expiring",
        }
    }

    /// Terminal marker used by the CLI
    pub fn marker(&self) -> &'static str {
        match self {
            Tier::Fresh => "🟢",
            Tier::Aging => "🟡",
            Tier::Expiring => "🔴",
        }
    }

    /// RGB triple used by the desktop frontend
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tier::Fresh => (76, 175, 80),
            Tier::Aging => (246, 196, 69),
            Tier::Expiring => (229, 77, 66),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_score_thresholds() {
        assert_eq!(Tier::from_score(100.0), Tier::Fresh);
        assert_eq!(Tier::from_score(85.0), Tier::Fresh);
        assert_eq!(Tier::from_score(80.0), Tier::Fresh);
        assert_eq!(Tier::from_score(79.9), Tier::Aging);
        assert_eq!(Tier::from_score(60.0), Tier::Aging);
        assert_eq!(Tier::from_score(59.9), Tier::Expiring);
        assert_eq!(Tier::from_score(0.0), Tier::Expiring);
    }

    #[test]
    fn test_from_label_known_labels() {
        assert_eq!(Tier::from_label("Fresh"), Tier::Fresh);
        assert_eq!(Tier::from_label("Slightly Aging"), Tier::Aging);
    }

    #[test]
    fn test_from_label_anything_else_is_expiring() {
        assert_eq!(Tier::from_label("Expiring"), Tier::Expiring);
        assert_eq!(Tier::from_label("Expiring Soon"), Tier::Expiring);
        assert_eq!(Tier::from_label("Rotten"), Tier::Expiring);
        assert_eq!(Tier::from_label(""), Tier::Expiring);
        // the match is literal, not case-insensitive
        assert_eq!(Tier::from_label("fresh"), Tier::Expiring);
    }

    #[test]
    fn test_presentation_accessors() {
        assert_eq!(Tier::Fresh.class_name(), "tier-fresh");
        assert_eq!(Tier::Aging.label(), "Slightly Aging");
        assert_eq!(Tier::Expiring.marker(), "🔴");
        assert_eq!(Tier::Aging.rgb(), (246, 196, 69));
    }
}
