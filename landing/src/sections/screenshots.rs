use leptos::prelude::*;

use crate::content::SCREENSHOTS;

#[component]
pub fn Screenshots() -> impl IntoView {
    view! {
        <section class="section section-alt">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"See It In Action"</h2>
                    <p class="section-description">
                        "Beautiful, intuitive interface designed for your financial success"
                    </p>
                </div>
                <div class="screenshots-grid">
                    {SCREENSHOTS
                        .into_iter()
                        .map(|shot| {
                            view! {
                                <figure class="screenshot">
                                    <img src=shot.src alt=shot.title loading="lazy" />
                                    <figcaption class="screenshot-caption">{shot.description}</figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
