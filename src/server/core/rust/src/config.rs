/* src/server/core/rust/src/config.rs */

use serde::Deserialize;

use crate::collection::MetaKey;
use crate::errors::MetaTagsError;

pub const DEFAULT_NAMESPACE: &str = "meta_tags";

/// Binder settings, usually read from the `[meta_tags]` table of the app config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MetaTagsConfig {
  /// First segment of the locale namespace key: `<namespace>.<resource>.<action>.<key>`
  #[serde(default = "default_namespace")]
  pub namespace: String,
  /// Keys filled from locale defaults, in binding order.
  #[serde(default = "default_locale_keys")]
  pub locale_keys: Vec<MetaKey>,
}

#[derive(Deserialize)]
struct ConfigFile {
  #[serde(default)]
  meta_tags: Option<MetaTagsConfig>,
}

fn default_namespace() -> String {
  DEFAULT_NAMESPACE.to_string()
}

fn default_locale_keys() -> Vec<MetaKey> {
  MetaKey::ALL.to_vec()
}

impl Default for MetaTagsConfig {
  fn default() -> Self {
    Self { namespace: default_namespace(), locale_keys: default_locale_keys() }
  }
}

impl MetaTagsConfig {
  /// Parse a TOML document; a missing `[meta_tags]` table yields the defaults.
  pub fn from_toml_str(content: &str) -> Result<Self, MetaTagsError> {
    let file: ConfigFile = toml::from_str(content)?;
    let config = file.meta_tags.unwrap_or_default();
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), MetaTagsError> {
    if self.namespace.trim().is_empty() {
      return Err(MetaTagsError::invalid_config("meta_tags.namespace must not be empty"));
    }
    if self.namespace.starts_with('.') || self.namespace.ends_with('.') {
      return Err(MetaTagsError::invalid_config(format!(
        "meta_tags.namespace \"{}\" must not start or end with '.'",
        self.namespace
      )));
    }
    Ok(())
  }

  /// `<namespace>.<resource>.<action>`
  pub fn namespace_for(&self, resource: &str, action: &str) -> String {
    format!("{}.{resource}.{action}", self.namespace)
  }
}
