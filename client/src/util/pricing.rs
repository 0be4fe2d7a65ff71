//! Static pricing tiers revealed on the dashboard.

#[cfg(test)]
#[path = "pricing_test.rs"]
mod pricing_test;

pub const CURRENCY: &str = "Rs.";

/// Accent color of a pricing card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Blue,
    Red,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Self::Blue => "accent-blue",
            Self::Red => "accent-red",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub accent: Accent,
    pub featured: bool,
    /// Entrance stagger, in seconds.
    pub reveal_delay_s: f64,
}

impl PricingTier {
    pub fn card_class(&self) -> String {
        let mut class = format!("pricing-card {}", self.accent.class());
        if self.featured {
            class.push_str(" pricing-card--featured");
        }
        class
    }

    pub fn reveal_style(&self) -> String {
        format!("animation-delay: {:.1}s;", self.reveal_delay_s)
    }
}

pub const PRICING_TIERS: [PricingTier; 3] = [
    PricingTier {
        name: "Basic Defense",
        price: "0.00",
        features: &["10k API Requests", "Asset Takedown", "Reports"],
        accent: Accent::Blue,
        featured: false,
        reveal_delay_s: 0.1,
    },
    PricingTier {
        name: "Personal Shield",
        price: "499.00",
        features: &["Hygiene Report", "Phishing Detection", "24/7 Alerts"],
        accent: Accent::Blue,
        featured: true,
        reveal_delay_s: 0.2,
    },
    PricingTier {
        name: "Business Protect",
        price: "2499.00",
        features: &["Breach Alert", "Employee Training", "User Mgmt"],
        accent: Accent::Red,
        featured: false,
        reveal_delay_s: 0.3,
    },
];
