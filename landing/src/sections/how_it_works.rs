use leptos::prelude::*;

use crate::content::{STEPS, Section};

#[component]
pub fn HowItWorks() -> impl IntoView {
    let last = STEPS.len() - 1;

    view! {
        <section id=Section::HowItWorks.id() class="section section-alt">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"How It Works"</h2>
                    <p class="section-description">"Get started in three simple steps"</p>
                </div>
                <div class="steps-grid">
                    {STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="step">
                                    // line to the next step
                                    {(index < last).then(|| view! { <div class="step-connector"></div> })}
                                    <div class="step-number">{step.number}</div>
                                    <h3 class="step-title">{step.title}</h3>
                                    <p class="step-description">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
