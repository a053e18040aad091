// Smart Budget landing page - Leptos 0.8 Edition
//
// `csr`: mounts the page in the browser (trunk serve / trunk build).
// `ssr`: prerenders the page to static HTML.

#[cfg(feature = "csr")]
fn main() {
    smartbudget_landing::mount();
}

#[cfg(all(feature = "ssr", not(feature = "csr")))]
fn main() -> std::process::ExitCode {
    match prerender::run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[smartbudget-landing] Error: {:#}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(not(any(feature = "csr", feature = "ssr")))]
fn main() {
    eprintln!("[smartbudget-landing] built without `csr` or `ssr`; nothing to do");
}

#[cfg(all(feature = "ssr", not(feature = "csr")))]
mod prerender {
    use std::path::PathBuf;

    use anyhow::{Context, Result};
    use clap::Parser;
    use tracing::info;

    #[derive(Parser, Debug)]
    #[command(name = "smartbudget-landing")]
    #[command(about = "Prerender the Smart Budget landing page to static HTML")]
    #[command(version)]
    struct Args {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Year shown in the footer copyright notice (default: current year)
        #[arg(long)]
        year: Option<i32>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(long, default_value = "info")]
        log_level: String,
    }

    pub fn run() -> Result<()> {
        let args = Args::parse();

        // stdout may carry the page, logs go to stderr
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
            )
            .init();

        let year = args.year.unwrap_or_else(smartbudget_landing::copyright_year);
        info!(year, "prerendering landing page");

        let html = smartbudget_landing::render_page(year);
        smartbudget_landing::write_page(args.out.as_deref(), &html).with_context(|| {
            match &args.out {
                Some(path) => format!("writing {}", path.display()),
                None => "writing to stdout".to_string(),
            }
        })?;

        Ok(())
    }
}
