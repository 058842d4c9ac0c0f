//! Configuration for URLs and branding baked into page metadata.

/// Production origin used when no override is provided.
pub const DEFAULT_SITE_URL: &str = "https://ee9.com";

/// Brand name appended to page titles.
pub const SITE_NAME: &str = "EE9.com";

/// Default social sharing image.
pub const DEFAULT_OG_IMAGE: &str = "https://static.ee9.com/images/og-default.png";

/// Site-wide settings consumed by metadata and sitemap rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Origin without a trailing slash, e.g. `https://ee9.com`.
    pub site_url: String,
    /// Brand name.
    pub site_name: String,
    /// Fallback `og:image`.
    pub default_og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::with_site_url(DEFAULT_SITE_URL)
    }
}

impl SiteConfig {
    /// Default branding served from `site_url`. Blank values fall back to
    /// [`DEFAULT_SITE_URL`].
    pub fn with_site_url(site_url: &str) -> Self {
        let trimmed = site_url.trim().trim_end_matches('/');
        let site_url = if trimmed.is_empty() { DEFAULT_SITE_URL } else { trimmed };
        Self {
            site_url: site_url.to_string(),
            site_name: SITE_NAME.to_string(),
            default_og_image: DEFAULT_OG_IMAGE.to_string(),
        }
    }

    /// Absolute URL for a site path.
    pub fn absolute_url(&self, path_or_url: &str) -> String {
        let trimmed = path_or_url.trim();
        if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            return trimmed.to_string();
        }
        let normalized_path =
            if trimmed.starts_with('/') { trimmed.to_string() } else { format!("/{}", trimmed) };
        format!("{}{}", self.site_url, normalized_path)
    }

    /// Publisher logo used in schema.org organisations.
    pub fn logo_url(&self) -> String {
        self.absolute_url("/logo.png")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_dropped() {
        let config = SiteConfig::with_site_url("https://staging.ee9.com/");
        assert_eq!(config.absolute_url("tools"), "https://staging.ee9.com/tools");
        assert_eq!(config.absolute_url("/"), "https://staging.ee9.com/");
    }

    #[test]
    fn blank_override_uses_default() {
        assert_eq!(SiteConfig::with_site_url("  ").site_url, DEFAULT_SITE_URL);
        assert_eq!(
            SiteConfig::default().absolute_url("https://cdn.example/x.png"),
            "https://cdn.example/x.png"
        );
    }
}
