use log::warn;
use rocket::figment::Figment;
use serde::Deserialize;

use crate::interactions::{NAV_SCROLL_THRESHOLD, SCROLL_SPY_OFFSET};

/// Site settings, read from `Rocket.toml` / `ROCKET_*` alongside Rocket's own.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Path or http(s) URL of the profile document.
    pub profile_source: String,
    /// Address the contact form's mailto link is addressed to.
    pub contact_recipient: String,
    pub static_dir: String,
    pub nav_scroll_threshold: f64,
    pub scroll_spy_offset: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            profile_source: "website/data/profile.json".to_string(),
            contact_recipient: "chad@chadtwilson.com".to_string(),
            static_dir: "website/static".to_string(),
            nav_scroll_threshold: NAV_SCROLL_THRESHOLD,
            scroll_spy_offset: SCROLL_SPY_OFFSET,
        }
    }
}

impl SiteConfig {
    pub fn from_figment(figment: &Figment) -> Self {
        match figment.extract::<SiteConfig>() {
            Ok(config) => config,
            Err(e) => {
                warn!("Invalid site configuration, using defaults: {}", e);
                SiteConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::figment::providers::Serialized;

    #[test]
    fn empty_figment_gives_defaults() {
        let config = SiteConfig::from_figment(&Figment::new());
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.nav_scroll_threshold, 40.0);
        assert_eq!(config.scroll_spy_offset, 100.0);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let figment = Figment::new().merge(Serialized::default("contact_recipient", "me@example.com"));
        let config = SiteConfig::from_figment(&figment);
        assert_eq!(config.contact_recipient, "me@example.com");
        assert_eq!(config.profile_source, "website/data/profile.json");
    }

    #[test]
    fn bad_value_falls_back_to_defaults() {
        let figment = Figment::new().merge(Serialized::default("scroll_spy_offset", "lots"));
        assert_eq!(SiteConfig::from_figment(&figment), SiteConfig::default());
    }
}
