use leptos::prelude::*;

use crate::app::PageState;
use crate::content::{BRAND, NAV_LINKS, Section};

/// (label, glyph) for the social row. Profiles are not live yet.
const SOCIAL: [(&str, &str); 3] = [("Facebook", "📘"), ("Twitter", "🐦"), ("Instagram", "📷")];

const LEGAL: [&str; 2] = ["Privacy Policy", "Terms of Service"];

#[component]
pub fn Footer(state: PageState, year: i32) -> impl IntoView {
    let notice = format!("© {} {}. All rights reserved.", year, BRAND);

    view! {
        <footer id=Section::Footer.id() class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <h3 class="footer-title">{BRAND}</h3>
                        <p class="footer-text">
                            "Your personal finance assistant for smarter financial decisions."
                        </p>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            {NAV_LINKS
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <button class="footer-link" on:click=move |_| state.navigate(link.target)>
                                                {link.label}
                                            </button>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Legal"</h4>
                        <ul class="footer-links">
                            {LEGAL
                                .into_iter()
                                .map(|label| view! { <li><a href="#" class="footer-link">{label}</a></li> })
                                .collect_view()}
                        </ul>
                    </div>
                    <div>
                        <h4 class="footer-heading">"Connect"</h4>
                        <div class="footer-social">
                            {SOCIAL
                                .into_iter()
                                .map(|(name, glyph)| {
                                    view! { <a href="#" class="footer-link" aria-label=name>{glyph}</a> }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p class="footer-copyright">{notice}</p>
                </div>
            </div>
        </footer>
    }
}
