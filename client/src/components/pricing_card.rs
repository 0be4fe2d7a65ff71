//! Pricing section and individual tier cards.

use leptos::prelude::*;

use crate::util::pricing::{CURRENCY, PRICING_TIERS, PricingTier};

/// The three tier cards, staggered left to right.
#[component]
pub fn PricingGrid() -> impl IntoView {
    view! {
        <div class="pricing-grid">
            {PRICING_TIERS.iter().map(|tier| view! { <PricingCard tier=*tier/> }).collect_view()}
        </div>
    }
}

#[component]
pub fn PricingCard(tier: PricingTier) -> impl IntoView {
    view! {
        <div class=tier.card_class() style=tier.reveal_style()>
            <h3 class="pricing-card__name">{tier.name}</h3>
            <div class="pricing-card__price">
                <span class="pricing-card__currency">{CURRENCY}</span>
                <span class="pricing-card__amount">{tier.price}</span>
            </div>
            <ul class="pricing-card__features">
                {tier
                    .features
                    .iter()
                    .map(|feature| {
                        view! {
                            <li>
                                <span class="pricing-card__check">"✓"</span>
                                {*feature}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button class="pricing-card__select" type="button">
                "Select Plan"
            </button>
        </div>
    }
}
