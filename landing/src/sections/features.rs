use leptos::prelude::*;

use crate::content::{FEATURES, Feature, Section};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=Section::Features.id() class="section">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Powerful Features"</h2>
                    <p class="section-description">
                        "Everything you need to manage your finances effectively"
                    </p>
                </div>
                <div class="features-grid">
                    {FEATURES
                        .into_iter()
                        .map(|feature| view! { <FeatureCard feature=feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{feature.icon}</div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
