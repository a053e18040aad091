//! Static page content.
//!
//! Every list here is a `const` array: defined once, ordered, never mutated.
//! Components iterate over these; nothing else in the crate owns copy text
//! that repeats.

/// Product name shown in the navbar, benefits heading and footer.
pub const BRAND: &str = "Smart Budget";

/// Phone mockup image in the hero.
pub const DASHBOARD_IMAGE: &str = "/Dashboard.png";

/// Named anchors on the page.
///
/// Anchor declarations (`id=...`) and navigation call sites both go through
/// this enum, so renaming a section cannot leave a dangling link behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Features,
    HowItWorks,
    Download,
    Footer,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::Features,
        Section::HowItWorks,
        Section::Download,
        Section::Footer,
    ];

    /// DOM id of the section element.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::HowItWorks => "how-it-works",
            Section::Download => "download",
            Section::Footer => "footer",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub src: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A headline number with a caption ("24/7" / "Available").
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

/// Gradient used for a benefit tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
}

impl Tone {
    pub const fn class(self) -> &'static str {
        match self {
            Tone::Blue => "tile tile-blue",
            Tone::Green => "tile tile-green",
            Tone::Purple => "tile tile-purple",
            Tone::Orange => "tile tile-orange",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub stat: Stat,
    pub tone: Tone,
}

/// A downloadable build, served as-is by the static host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Download {
    pub label: &'static str,
    pub href: &'static str,
    /// Filename forced through the `download` attribute.
    pub filename: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: Section,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "Features", target: Section::Features },
    NavLink { label: "How It Works", target: Section::HowItWorks },
    NavLink { label: "Download", target: Section::Download },
];

/// Call-to-action shown next to the nav links.
pub const NAV_CTA: NavLink = NavLink { label: "Get Started", target: Section::Download };

pub const FEATURES: [Feature; 8] = [
    Feature {
        icon: "💰",
        title: "Smart Budget Planning",
        description: "Category-based budgets with real-time tracking and alerts to keep you on target.",
    },
    Feature {
        icon: "📊",
        title: "Expense Tracking",
        description: "Track income and expenses with detailed categorization and transaction history.",
    },
    Feature {
        icon: "📈",
        title: "Inflation Tracker",
        description: "Real-time inflation rates with historical data to adjust your budget accordingly.",
    },
    Feature {
        icon: "💡",
        title: "Smart Suggestions",
        description: "Get intelligent financial recommendations based on your spending patterns.",
    },
    Feature {
        icon: "📋",
        title: "Analytics & Reports",
        description: "Comprehensive spending analytics and insights to understand your finances better.",
    },
    Feature {
        icon: "🔮",
        title: "Expense Predictions",
        description: "Future spending forecasts to help you plan ahead and avoid overspending.",
    },
    Feature {
        icon: "🔔",
        title: "Bill Reminders",
        description: "Never miss a payment with smart notifications and upcoming bill tracking.",
    },
    Feature {
        icon: "📱",
        title: "Visual Dashboards",
        description: "Interactive charts and graphs to visualize your financial health at a glance.",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        number: "01",
        title: "Track",
        description: "Add your income and expenses with detailed categorization",
    },
    Step {
        number: "02",
        title: "Plan",
        description: "Set budgets for different categories and track your progress",
    },
    Step {
        number: "03",
        title: "Optimize",
        description: "Get smart suggestions and insights to improve your financial health",
    },
];

pub const BENEFITS: [&str; 6] = [
    "Real-time inflation tracking",
    "Smart financial insights",
    "Comprehensive analytics",
    "Bill reminders and notifications",
    "Multi-currency support",
    "Secure cloud sync",
];

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "100%", label: "Secure" },
    Stat { value: "24/7", label: "Available" },
    Stat { value: "Free", label: "To Start" },
];

pub const BENEFIT_TILES: [Tile; 4] = [
    Tile { stat: Stat { value: "100%", label: "Secure" }, tone: Tone::Blue },
    Tile { stat: Stat { value: "24/7", label: "Available" }, tone: Tone::Green },
    Tile { stat: Stat { value: "Smart", label: "Insights" }, tone: Tone::Purple },
    Tile { stat: Stat { value: "Free", label: "To Start" }, tone: Tone::Orange },
];

pub const SCREENSHOTS: [Screenshot; 3] = [
    Screenshot {
        src: "/Dashboard.png",
        title: "Dashboard",
        description: "Track your balance, income, and expenses at a glance",
    },
    Screenshot {
        src: "/Profilesettings.png",
        title: "Profile & Settings",
        description: "Customize your preferences and manage your account",
    },
    Screenshot {
        src: "/InflationTRacker.png",
        title: "Inflation Tracker",
        description: "Monitor inflation rates and adjust your budget accordingly",
    },
];

pub const ANDROID_DOWNLOAD: Download = Download {
    label: "Download for Android",
    href: "/Smartbudget.apk",
    filename: "Smartbudget.apk",
};

pub const IOS_SIMULATOR_DOWNLOAD: Download = Download {
    label: "Download for iOS (Simulator)",
    href: "/Smartbudget-iOS-Simulator.zip",
    filename: "Smartbudget-iOS-Simulator.zip",
};

pub const DOWNLOADS: [Download; 2] = [ANDROID_DOWNLOAD, IOS_SIMULATOR_DOWNLOAD];
