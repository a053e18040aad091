use leptos::prelude::*;

use super::icons::{
    ICON_CHART_BAR, ICON_CHEVRON_RIGHT, ICON_CURRENCY, ICON_DOWNLOAD, ICON_STAR, OutlineIcon,
    SolidIcon,
};
use crate::app::PageState;
use crate::content::{ANDROID_DOWNLOAD, DASHBOARD_IMAGE, HERO_STATS, Section};

#[component]
pub fn Hero(state: PageState) -> impl IntoView {
    view! {
        <section id=Section::Hero.id() class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <SolidIcon path=ICON_STAR />
                            <span>"Your Personal Finance Assistant"</span>
                        </div>
                        <h1 class="hero-title">
                            "Take Control of Your"
                            <span class="hero-title-accent">"Finances"</span>
                        </h1>
                        <p class="hero-description">
                            "Track expenses, plan budgets, and make smarter financial decisions with intelligent insights. "
                            "Start your journey to financial freedom today."
                        </p>
                        <div class="hero-actions">
                            <a
                                href=ANDROID_DOWNLOAD.href
                                download=ANDROID_DOWNLOAD.filename
                                class="btn btn-lg btn-primary"
                            >
                                <SolidIcon path=ICON_DOWNLOAD />
                                {ANDROID_DOWNLOAD.label}
                            </a>
                            <button
                                class="btn btn-lg btn-secondary"
                                on:click=move |_| state.navigate(Section::Features)
                            >
                                "Learn More"
                                <OutlineIcon path=ICON_CHEVRON_RIGHT />
                            </button>
                        </div>
                        <div class="hero-stats">
                            {HERO_STATS
                                .into_iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <div class="stat-value">{stat.value}</div>
                                            <div class="stat-label">{stat.label}</div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <AppPreview />
                </div>
            </div>

            <button
                class="scroll-indicator"
                on:click=move |_| state.navigate(Section::Features)
            >
                <span>"Scroll"</span>
                <div class="scroll-mouse">
                    <div class="scroll-dot"></div>
                </div>
            </button>
        </section>
    }
}

/// Phone mockup with the dashboard screenshot and two floating balance cards.
#[component]
fn AppPreview() -> impl IntoView {
    view! {
        <div class="hero-preview">
            <div class="phone">
                <div class="phone-glow"></div>
                <div class="phone-bezel">
                    <div class="phone-screen">
                        <img src=DASHBOARD_IMAGE alt="Smart Budget Dashboard" />
                    </div>
                </div>
            </div>
            <FloatingCard
                position="floating-card floating-card-top"
                tint="floating-card-icon green"
                icon=ICON_CURRENCY
                label="Balance"
                value="₱28,000"
            />
            <FloatingCard
                position="floating-card floating-card-bottom"
                tint="floating-card-icon blue"
                icon=ICON_CHART_BAR
                label="This Month"
                value="₱27,000"
            />
        </div>
    }
}

#[component]
fn FloatingCard(
    position: &'static str,
    tint: &'static str,
    icon: &'static str,
    label: &'static str,
    value: &'static str,
) -> impl IntoView {
    view! {
        <div class=position>
            <div class=tint>
                <OutlineIcon path=icon />
            </div>
            <div>
                <div class="floating-card-label">{label}</div>
                <div class="floating-card-value">{value}</div>
            </div>
        </div>
    }
}
