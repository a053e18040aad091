use leptos::prelude::*;

use crate::content::{BENEFIT_TILES, BENEFITS, BRAND};

#[component]
pub fn Benefits() -> impl IntoView {
    let heading = format!("Why Choose {}?", BRAND);

    view! {
        <section class="section">
            <div class="container">
                <div class="benefits-grid">
                    <div>
                        <h2 class="section-title">{heading}</h2>
                        <p class="section-description benefits-lead">
                            "Experience the difference with our comprehensive financial management platform"
                        </p>
                        <ul class="benefits-list">
                            {BENEFITS
                                .into_iter()
                                .map(|benefit| {
                                    view! {
                                        <li class="benefit">
                                            <span class="benefit-check">"✓"</span>
                                            <span>{benefit}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="tiles">
                        {BENEFIT_TILES
                            .into_iter()
                            .map(|tile| {
                                view! {
                                    <div class=tile.tone.class()>
                                        <div class="stat-value">{tile.stat.value}</div>
                                        <div class="stat-label">{tile.stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
