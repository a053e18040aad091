//! CSS for the landing page.
//!
//! Light theme by default, dark theme via `prefers-color-scheme`. Class names
//! are the ones emitted by the components in [`crate::sections`].

/// Complete stylesheet, inlined into the prerendered `<head>` or injected at
/// mount time in the browser build.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-alt: #f9fafb;
    --bg-card: #f9fafb;
    --bg-raised: #ffffff;
    --text: #111827;
    --text-muted: #4b5563;
    --text-dim: #6b7280;
    --border: #e5e7eb;
    --accent: #2563eb;
    --accent-soft: #eff6ff;
    --accent-green: #16a34a;
    --btn-bg: #111827;
    --btn-text: #ffffff;
    --font-sans: system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 1280px;
}

@media (prefers-color-scheme: dark) {
    :root {
        --bg: #0a0a0a;
        --bg-alt: #111111;
        --bg-card: #111111;
        --bg-raised: #1a1a1a;
        --text: #f3f4f6;
        --text-muted: #9ca3af;
        --text-dim: #6b7280;
        --border: #1f2937;
        --accent: #60a5fa;
        --accent-soft: rgba(23, 37, 84, 0.3);
        --btn-bg: #ffffff;
        --btn-text: #111827;
    }
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    min-height: 100vh;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    -webkit-font-smoothing: antialiased;
}

button {
    font: inherit;
    color: inherit;
    background: none;
    border: 0;
    padding: 0;
    cursor: pointer;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.section {
    padding: 96px 0;
    background: var(--bg);
}

.section-alt {
    background: var(--bg-alt);
}

.section-header {
    text-align: center;
    margin-bottom: 80px;
}

.section-title {
    font-size: clamp(2.25rem, 4vw, 3rem);
    font-weight: 700;
    letter-spacing: -0.02em;
    margin: 0 0 16px;
}

.section-description {
    font-size: 1.125rem;
    color: var(--text-muted);
    max-width: 42rem;
    margin: 0 auto;
}

/* Navbar */
.navbar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: all 0.3s ease;
}

.navbar-scrolled {
    background: color-mix(in srgb, var(--bg) 80%, transparent);
    backdrop-filter: blur(16px);
    border-bottom: 1px solid color-mix(in srgb, var(--border) 50%, transparent);
}

.navbar-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    height: 80px;
}

.navbar-brand {
    font-size: 1.25rem;
    font-weight: 600;
    letter-spacing: -0.01em;
}

.navbar-links {
    display: none;
    align-items: center;
    gap: 40px;
}

.navbar-link {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-muted);
    transition: color 0.15s;
}

.navbar-link:hover {
    color: var(--text);
}

.navbar-toggle {
    display: inline-flex;
}

.navbar-toggle svg {
    width: 24px;
    height: 24px;
}

.mobile-menu {
    background: var(--bg);
    border-top: 1px solid var(--border);
    padding: 16px 24px;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.mobile-menu-link {
    display: block;
    width: 100%;
    text-align: left;
    padding: 8px 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

@media (min-width: 768px) {
    .navbar-links {
        display: flex;
    }
    .navbar-toggle,
    .mobile-menu {
        display: none;
    }
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 8px;
    border-radius: 8px;
    font-weight: 600;
    transition: all 0.2s;
}

.btn-sm {
    padding: 10px 20px;
    font-size: 0.875rem;
    font-weight: 500;
}

.btn-lg {
    padding: 16px 32px;
    font-size: 1rem;
}

.btn-primary {
    background: var(--btn-bg);
    color: var(--btn-text);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.btn-secondary {
    background: var(--bg-raised);
    border: 1px solid var(--border);
}

.btn svg {
    width: 20px;
    height: 20px;
}

/* Hero */
.hero {
    position: relative;
    min-height: 100vh;
    display: flex;
    align-items: center;
    overflow: hidden;
    padding-top: 80px;
    background: linear-gradient(to bottom, var(--bg-alt), var(--bg));
}

.hero-grid {
    display: grid;
    gap: 64px;
    align-items: center;
    padding: 80px 0;
}

@media (min-width: 1024px) {
    .hero-grid {
        grid-template-columns: 1fr 1fr;
    }
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 10px;
    padding: 10px 20px;
    background: var(--accent-soft);
    color: var(--accent);
    border-radius: 8px;
    font-size: 0.875rem;
    font-weight: 500;
}

.hero-badge svg {
    width: 16px;
    height: 16px;
}

.hero-title {
    font-size: clamp(3rem, 7vw, 4.5rem);
    font-weight: 700;
    line-height: 1.1;
    letter-spacing: -0.02em;
    margin: 40px 0;
}

.hero-title-accent {
    display: block;
    margin-top: 8px;
    background: linear-gradient(to right, #2563eb, #3b82f6, #16a34a);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-description {
    font-size: clamp(1.25rem, 2vw, 1.5rem);
    font-weight: 300;
    line-height: 1.6;
    color: var(--text-muted);
    max-width: 36rem;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    padding-top: 8px;
}

.hero-stats {
    display: flex;
    gap: 48px;
    margin-top: 40px;
    padding-top: 32px;
    border-top: 1px solid var(--border);
}

.stat-value {
    font-size: 2.25rem;
    font-weight: 700;
    margin-bottom: 4px;
}

.stat-label {
    font-size: 0.875rem;
    font-weight: 500;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

.hero-preview {
    position: relative;
    display: none;
}

@media (min-width: 1024px) {
    .hero-preview {
        display: block;
    }
}

.phone {
    position: relative;
    width: 320px;
    aspect-ratio: 9 / 16;
    margin: 0 auto;
    padding: 6px;
    border-radius: 3rem;
    background: linear-gradient(to bottom, #f3f4f6, #e5e7eb);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.phone-glow {
    position: absolute;
    inset: -16px;
    border-radius: 3.5rem;
    background: linear-gradient(to bottom right, rgba(59, 130, 246, 0.2), rgba(34, 197, 94, 0.2));
    filter: blur(40px);
    z-index: -1;
}

.phone-bezel {
    width: 100%;
    height: 100%;
    padding: 8px;
    border-radius: 2.75rem;
    background: #111827;
}

.phone-screen {
    width: 100%;
    height: 100%;
    border-radius: 2.5rem;
    overflow: hidden;
    background: var(--bg-raised);
}

.phone-screen img,
.screenshot img {
    width: 100%;
    height: 100%;
    object-fit: cover;
}

.floating-card {
    position: absolute;
    display: flex;
    align-items: center;
    gap: 16px;
    padding: 20px;
    border-radius: 1rem;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.floating-card-top {
    top: -48px;
    right: -48px;
}

.floating-card-bottom {
    bottom: -48px;
    left: -48px;
}

.floating-card-icon {
    display: flex;
    align-items: center;
    justify-content: center;
    width: 48px;
    height: 48px;
    border-radius: 12px;
    color: #ffffff;
}

.floating-card-icon svg {
    width: 24px;
    height: 24px;
}

.floating-card-icon.green {
    background: linear-gradient(to bottom right, #22c55e, #16a34a);
}

.floating-card-icon.blue {
    background: linear-gradient(to bottom right, #3b82f6, #2563eb);
}

.floating-card-label {
    font-size: 0.75rem;
    font-weight: 500;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.05em;
    margin-bottom: 4px;
}

.floating-card-value {
    font-size: 1.5rem;
    font-weight: 700;
}

.scroll-indicator {
    position: absolute;
    bottom: 48px;
    left: 50%;
    transform: translateX(-50%);
    display: none;
    flex-direction: column;
    align-items: center;
    gap: 12px;
    color: var(--text-dim);
    font-size: 0.75rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
}

@media (min-width: 1024px) {
    .scroll-indicator {
        display: flex;
    }
}

.scroll-mouse {
    display: flex;
    justify-content: center;
    width: 24px;
    height: 40px;
    padding: 8px;
    border: 2px solid var(--border);
    border-radius: 9999px;
}

.scroll-dot {
    width: 6px;
    height: 6px;
    border-radius: 9999px;
    background: var(--text-dim);
    animation: bounce 1s infinite;
}

@keyframes bounce {
    0%, 100% { transform: translateY(-25%); }
    50% { transform: translateY(0); }
}

/* Features */
.features-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 24px;
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (min-width: 1024px) {
    .features-grid { grid-template-columns: repeat(4, 1fr); }
}

.feature-card {
    padding: 24px;
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: 12px;
    transition: all 0.2s;
}

.feature-card:hover {
    border-color: var(--accent);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.feature-icon {
    font-size: 2.25rem;
    margin-bottom: 16px;
    transition: transform 0.2s;
}

.feature-card:hover .feature-icon {
    transform: scale(1.1);
}

.feature-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0 0 8px;
}

.feature-description {
    font-size: 0.875rem;
    line-height: 1.6;
    color: var(--text-muted);
    margin: 0;
}

/* How it works */
.steps-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 48px;
}

@media (min-width: 768px) {
    .steps-grid { grid-template-columns: repeat(3, 1fr); }
}

.step {
    position: relative;
    text-align: center;
}

.step-connector {
    display: none;
    position: absolute;
    top: 32px;
    left: 60%;
    width: 100%;
    height: 2px;
    background: linear-gradient(to right, #bfdbfe, #bbf7d0);
}

@media (min-width: 768px) {
    .step-connector { display: block; }
}

.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 80px;
    height: 80px;
    margin-bottom: 24px;
    border-radius: 1rem;
    background: linear-gradient(to bottom right, #3b82f6, #22c55e);
    color: #ffffff;
    font-size: 1.125rem;
    font-weight: 700;
    position: relative;
}

.step-title {
    font-size: 1.5rem;
    font-weight: 600;
    margin: 0 0 12px;
}

.step-description {
    color: var(--text-muted);
    line-height: 1.6;
    margin: 0;
}

/* Benefits */
.benefits-grid {
    display: grid;
    gap: 64px;
    align-items: center;
}

@media (min-width: 1024px) {
    .benefits-grid { grid-template-columns: 1fr 1fr; }
}

.benefits-list {
    list-style: none;
    padding: 0;
    margin: 40px 0 0;
    display: flex;
    flex-direction: column;
    gap: 16px;
}

.benefit {
    display: flex;
    align-items: flex-start;
    color: var(--text-muted);
}

.benefit-check {
    color: var(--accent);
    margin-right: 12px;
    font-size: 1.25rem;
}

.tiles {
    display: grid;
    grid-template-columns: repeat(2, 1fr);
    gap: 16px;
}

.tile {
    padding: 32px;
    border-radius: 1rem;
    color: #ffffff;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
}

.tile .stat-label {
    color: inherit;
    opacity: 0.9;
    text-transform: none;
    letter-spacing: normal;
}

.tile-blue { background: linear-gradient(to bottom right, #3b82f6, #2563eb); }
.tile-green { background: linear-gradient(to bottom right, #22c55e, #16a34a); }
.tile-purple { background: linear-gradient(to bottom right, #a855f7, #9333ea); }
.tile-orange { background: linear-gradient(to bottom right, #f97316, #ea580c); }

/* Screenshots */
.screenshots-grid {
    display: grid;
    grid-template-columns: 1fr;
    gap: 32px;
}

@media (min-width: 768px) {
    .screenshots-grid { grid-template-columns: repeat(3, 1fr); }
}

.screenshot {
    position: relative;
    margin: 0;
    aspect-ratio: 9 / 16;
    border-radius: 1rem;
    overflow: hidden;
    background: var(--bg-raised);
    border: 1px solid var(--border);
    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    transition: all 0.3s;
}

.screenshot:hover {
    transform: translateY(-8px);
    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
}

.screenshot-caption {
    position: absolute;
    left: 0;
    right: 0;
    bottom: 0;
    padding: 16px;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent);
    color: #ffffff;
    font-size: 0.875rem;
    opacity: 0;
    transition: opacity 0.3s;
}

.screenshot:hover .screenshot-caption {
    opacity: 1;
}

/* Download */
.download {
    background: linear-gradient(to bottom right, #111827, #1e3a8a, #14532d);
    color: #ffffff;
    text-align: center;
}

.download .container {
    max-width: 896px;
}

.download-lead {
    font-size: 1.25rem;
    opacity: 0.9;
    max-width: 42rem;
    margin: 0 auto 48px;
}

.download-actions {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 16px;
}

.download-link {
    padding: 16px 32px;
    border-radius: 12px;
    background: #ffffff;
    color: #111827;
    font-weight: 600;
    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
    transition: all 0.2s;
}

.download-link:hover {
    transform: translateY(-4px);
}

.download-note {
    font-size: 0.875rem;
    margin-top: 16px;
    opacity: 0.75;
}

/* Footer */
.footer {
    padding: 64px 0;
    background: var(--bg);
    border-top: 1px solid var(--border);
}

.footer-grid {
    display: grid;
    gap: 48px;
    margin-bottom: 48px;
}

@media (min-width: 768px) {
    .footer-grid { grid-template-columns: repeat(4, 1fr); }
}

.footer-title {
    font-size: 1.125rem;
    font-weight: 600;
    margin: 0 0 16px;
}

.footer-heading {
    font-size: 0.875rem;
    font-weight: 600;
    margin: 0 0 16px;
}

.footer-text,
.footer-links,
.footer-copyright {
    font-size: 0.875rem;
    color: var(--text-muted);
    line-height: 1.6;
}

.footer-links {
    list-style: none;
    padding: 0;
    margin: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.footer-link:hover {
    color: var(--text);
}

.footer-social {
    display: flex;
    gap: 16px;
    font-size: 1.25rem;
}

.footer-bottom {
    border-top: 1px solid var(--border);
    padding-top: 32px;
    text-align: center;
}
"#;
