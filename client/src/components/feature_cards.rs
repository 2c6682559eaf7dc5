//! Static overview cards shown above the analysis tool.

#[cfg(test)]
#[path = "feature_cards_test.rs"]
mod feature_cards_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const FEATURES: [Feature; 4] = [
    Feature {
        icon: "🌱",
        title: "Crop Suggestions",
        description: "Get personalized crop recommendations based on your land analysis",
    },
    Feature {
        icon: "☀",
        title: "Soil Assessment",
        description: "Comprehensive soil health evaluation and improvement suggestions",
    },
    Feature {
        icon: "🍃",
        title: "Sustainable Methods",
        description: "Eco-friendly farming practices and techniques",
    },
    Feature {
        icon: "💧",
        title: "Water Planning",
        description: "Smart irrigation and water conservation strategies",
    },
];

/// Row of the four capability cards.
#[component]
pub fn FeatureCards() -> impl IntoView {
    view! {
        <div class="features">
            {FEATURES
                .iter()
                .map(|feature| {
                    view! {
                        <article class="card features__card">
                            <div class="features__icon" aria-hidden="true">{feature.icon}</div>
                            <h3 class="features__title">{feature.title}</h3>
                            <p class="card__description">{feature.description}</p>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
