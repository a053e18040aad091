use leptos::prelude::*;

use crate::content::{BRAND, DOWNLOADS, Section};

#[component]
pub fn DownloadSection() -> impl IntoView {
    let lead = format!("Download {} today and start your journey to financial freedom", BRAND);

    view! {
        <section id=Section::Download.id() class="section download">
            <div class="container">
                <h2 class="section-title">"Ready to Take Control?"</h2>
                <p class="download-lead">{lead}</p>
                <div class="download-actions">
                    {DOWNLOADS
                        .into_iter()
                        .map(|download| {
                            view! {
                                <a href=download.href download=download.filename class="download-link">
                                    {download.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="download-note">
                    "iOS version is for Simulator use. For device installation, please use Xcode or TestFlight."
                </p>
            </div>
        </section>
    }
}
