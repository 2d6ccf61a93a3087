pub const DEFAULT_SITE_NAME: &str = "Panel";

/// Rows requested per page on admin listings.
pub const DEFAULT_PER_PAGE: u64 = 50;

pub const STYLESHEET_URL: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css";
pub const TAILWIND_SCRIPT_URL: &str = "https://cdn.tailwindcss.com";

/// Flash key rendered by the shared layout rather than a single page.
pub const GLOBAL_FLASH_KEY: &str = "global";
