//! Navbar configuration.
//!
//! Values come from `config/navbar.toml`, embedded at compile time. Missing keys
//! take the defaults below; a file that fails to parse is logged and replaced by
//! the defaults wholesale.

use once_cell::sync::Lazy;
use serde::Deserialize;
use thiserror::Error;

const EMBEDDED_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/config/navbar.toml"
));

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REGISTER_PATH: &str = "/register";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid navbar config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("navbar config field `{0}` must be an absolute path")]
    RelativePath(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    pub brand_title: String,
    pub logo_url: String,
    pub login_path: String,
    pub register_path: String,
    pub default_avatar: String,
    pub fault_notice: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand_title: "BPS PROVINSI SULAWESI TENGAH".to_string(),
            logo_url: "https://res.cloudinary.com/djcm0swgo/image/upload/v1751775675/bps-logo_1_ldppzk.png"
                .to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            register_path: DEFAULT_REGISTER_PATH.to_string(),
            default_avatar: "/default-avatar.png".to_string(),
            fault_notice: "Terjadi Kesalahan: Reload Page".to_string(),
        }
    }
}

impl NavbarConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::RelativePath("login_path"));
        }
        if !self.register_path.starts_with('/') {
            return Err(ConfigError::RelativePath("register_path"));
        }
        Ok(())
    }
}

static NAVBAR_CONFIG: Lazy<NavbarConfig> = Lazy::new(|| {
    NavbarConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        tracing::warn!(%err, "falling back to default navbar config");
        NavbarConfig::default()
    })
});

/// Process-wide navbar configuration.
pub fn navbar_config() -> &'static NavbarConfig {
    &NAVBAR_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = NavbarConfig::from_toml_str(EMBEDDED_CONFIG).expect("embedded config");
        assert_eq!(config.login_path, "/login");
        assert_eq!(config.register_path, "/register");
    }

    #[test]
    fn partial_override_keeps_defaults() {
        let config = NavbarConfig::from_toml_str("brand_title = \"BPS KOTA PALU\"").unwrap();
        assert_eq!(config.brand_title, "BPS KOTA PALU");
        assert_eq!(config.login_path, DEFAULT_LOGIN_PATH);
        assert_eq!(config.fault_notice, NavbarConfig::default().fault_notice);
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = NavbarConfig::from_toml_str("login_path = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_relative_paths() {
        let err = NavbarConfig::from_toml_str("login_path = \"login\"").unwrap_err();
        assert!(matches!(err, ConfigError::RelativePath("login_path")));
    }

    #[test]
    fn global_config_is_available() {
        assert_eq!(navbar_config(), &NavbarConfig::from_toml_str(EMBEDDED_CONFIG).unwrap());
    }
}
