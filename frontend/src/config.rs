use ee9_shared::config::{SiteConfig, DEFAULT_SITE_URL};

// Read at compile time; preview deployments set EE9_SITE_URL.
pub const SITE_URL: &str = match option_env!("EE9_SITE_URL") {
    Some(url) => url,
    None => DEFAULT_SITE_URL,
};

/// Outbound responsible gambling campaign link in the header.
pub const PLAY_SAFE_URL: &str = "https://t.ly/EE9";

/// Logo shown in the header and footer.
pub const LOGO_URL: &str = "https://static.ee9.com/images/logo.png";

pub fn site_config() -> SiteConfig {
    SiteConfig::with_site_url(SITE_URL)
}
