// Landing page sections
// Each component renders one region of the page from `crate::content`.

mod benefits;
mod console_banner;
mod download;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod nav;
mod screenshots;

pub use benefits::Benefits;
pub use console_banner::ConsoleBanner;
pub use download::DownloadSection;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use screenshots::Screenshots;
