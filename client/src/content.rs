//! Static page content: feature cards, onboarding steps, headline numbers and
//! the screenshot gallery.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Display name used in the header, footer and document title.
pub const PRODUCT_NAME: &str = "Finance Tracker";

/// In-page anchor shown in the header navigation.
pub struct NavLink {
    /// Element id of the target section.
    pub section: &'static str,
    pub label: &'static str,
}

pub struct Feature {
    /// Key into `util::icons::icon_markup`.
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// `from-*`/`to-*` stop classes for the icon badge (see `style/main.css`).
    pub gradient: &'static str,
}

pub struct Step {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Statistic {
    pub value: &'static str,
    pub label: &'static str,
    pub prefix: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Screenshot {
    pub id: usize,
    pub title: &'static str,
    pub image: &'static str,
    pub thumbnail: &'static str,
}

const NAV_LINKS: [NavLink; 4] = [
    NavLink { section: "features", label: "Features" },
    NavLink { section: "screenshots", label: "Screenshots" },
    NavLink { section: "how-it-works", label: "How It Works" },
    NavLink { section: "stats", label: "Stats" },
];

const FEATURES: [Feature; 8] = [
    Feature {
        icon: "chart",
        title: "Analytics Dashboard",
        description: "Visual charts and insights with real-time financial overview to track your money",
        gradient: "from-blue-500 to-cyan-500",
    },
    Feature {
        icon: "bank",
        title: "Multi-Account Management",
        description: "Track multiple bank accounts and wallets with unified balance view",
        gradient: "from-purple-500 to-pink-500",
    },
    Feature {
        icon: "tag",
        title: "Smart Categorization",
        description: "18+ pre-built categories for income & expense tracking made simple",
        gradient: "from-green-500 to-teal-500",
    },
    Feature {
        icon: "list",
        title: "Transaction History",
        description: "Complete transaction logs with advanced filtering and search options",
        gradient: "from-orange-500 to-red-500",
    },
    Feature {
        icon: "target",
        title: "Budget Planning",
        description: "Set category budgets with visual progress tracking and alerts",
        gradient: "from-indigo-500 to-purple-500",
    },
    Feature {
        icon: "bell",
        title: "Financial Reminders",
        description: "Never miss bill payments with custom notification system",
        gradient: "from-yellow-500 to-orange-500",
    },
    Feature {
        icon: "users",
        title: "User Management",
        description: "Role-based access control with multi-user support for families",
        gradient: "from-pink-500 to-rose-500",
    },
    Feature {
        icon: "shield",
        title: "Secure & Private",
        description: "Encrypted data storage - your data, your control, always protected",
        gradient: "from-emerald-500 to-green-500",
    },
];

const STEPS: [Step; 3] = [
    Step {
        number: 1,
        title: "Create Account",
        description: "Sign up in 30 seconds with just your email and password. No credit card required.",
    },
    Step {
        number: 2,
        title: "Add Transactions",
        description: "Track income & expenses easily with smart categorization and quick entry.",
    },
    Step {
        number: 3,
        title: "Get Insights",
        description: "View analytics & make better financial decisions with powerful visualizations.",
    },
];

const STATISTICS: [Statistic; 4] = [
    Statistic { value: "73.4K+", label: "Tracked in Income", prefix: Some("\u{20b9}") },
    Statistic { value: "72.2K+", label: "Managed in Expenses", prefix: Some("\u{20b9}") },
    Statistic { value: "18+", label: "Categories Available", prefix: None },
    Statistic { value: "100%", label: "Data Security", prefix: None },
];

const SCREENSHOTS: [Screenshot; 8] = [
    Screenshot {
        id: 0,
        title: "Analytics Dashboard",
        image: "/assets/images/dashboard.png",
        thumbnail: "/assets/images/dashboard.png",
    },
    Screenshot {
        id: 1,
        title: "Accounts",
        image: "/assets/images/accounts.png",
        thumbnail: "/assets/images/accounts.png",
    },
    Screenshot {
        id: 2,
        title: "Categories",
        image: "/assets/images/categories.png",
        thumbnail: "/assets/images/categories.png",
    },
    Screenshot {
        id: 3,
        title: "Transactions",
        image: "/assets/images/transactions.png",
        thumbnail: "/assets/images/transactions.png",
    },
    Screenshot {
        id: 4,
        title: "Budget Management",
        image: "/assets/images/budget.png",
        thumbnail: "/assets/images/budget.png",
    },
    Screenshot {
        id: 5,
        title: "Reminders",
        image: "/assets/images/reminders.png",
        thumbnail: "/assets/images/reminders.png",
    },
    Screenshot {
        id: 6,
        title: "User Management",
        image: "/assets/images/users.png",
        thumbnail: "/assets/images/users.png",
    },
    Screenshot {
        id: 7,
        title: "My Profile",
        image: "/assets/images/profile.png",
        thumbnail: "/assets/images/profile.png",
    },
];

pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

pub fn features() -> &'static [Feature] {
    &FEATURES
}

pub fn steps() -> &'static [Step] {
    &STEPS
}

pub fn statistics() -> &'static [Statistic] {
    &STATISTICS
}

pub fn screenshots() -> &'static [Screenshot] {
    &SCREENSHOTS
}

/// Screenshot with `id`. Ids equal table positions.
pub fn screenshot(id: usize) -> Option<&'static Screenshot> {
    SCREENSHOTS.get(id)
}
