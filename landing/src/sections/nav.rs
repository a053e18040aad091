use leptos::prelude::*;

use super::icons::{ICON_CLOSE, ICON_MENU};
use crate::app::PageState;
use crate::content::{BRAND, NAV_CTA, NAV_LINKS, Section};

#[component]
pub fn Nav(state: PageState) -> impl IntoView {
    let nav_class = move || {
        if state.is_scrolled() {
            "navbar navbar-scrolled"
        } else {
            "navbar"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="container">
                <div class="navbar-inner">
                    <button class="navbar-brand" on:click=move |_| state.navigate(Section::Hero)>
                        {BRAND}
                    </button>

                    <div class="navbar-links">
                        {NAV_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <button class="navbar-link" on:click=move |_| state.navigate(link.target)>
                                        {link.label}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="btn btn-sm btn-primary"
                            on:click=move |_| state.navigate(NAV_CTA.target)
                        >
                            {NAV_CTA.label}
                        </button>
                    </div>

                    <button
                        class="navbar-toggle"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || state.is_menu_open().to_string()
                        on:click=move |_| state.toggle_menu()
                    >
                        <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d=move || if state.is_menu_open() { ICON_CLOSE } else { ICON_MENU }
                            ></path>
                        </svg>
                    </button>
                </div>
            </div>

            <Show when=move || state.is_menu_open()>
                <MobileMenu state=state />
            </Show>
        </nav>
    }
}

#[component]
fn MobileMenu(state: PageState) -> impl IntoView {
    view! {
        <div class="mobile-menu">
            {NAV_LINKS
                .into_iter()
                .map(|link| {
                    view! {
                        <button class="mobile-menu-link" on:click=move |_| state.navigate(link.target)>
                            {link.label}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="btn btn-sm btn-primary"
                on:click=move |_| state.navigate(NAV_CTA.target)
            >
                {NAV_CTA.label}
            </button>
        </div>
    }
}
