/* src/server/core/rust/src/catalog.rs */

use std::collections::HashMap;

use crate::errors::MetaTagsError;
use crate::translate::{LocaleTranslate, Translate, normalize_blank};

/// In-memory locale messages keyed by locale.
///
/// Each locale holds a JSON object. Keys resolve either as a flat entry
/// (`{"meta_tags.sessions.new.title": "..."}`) or by walking nested objects
/// one dotted segment at a time. A key missing or blank in the requested
/// locale falls back to the default locale.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
  default_locale: String,
  locales: Vec<String>,
  messages: HashMap<String, serde_json::Value>,
}

impl MessageCatalog {
  pub fn new(default_locale: impl Into<String>) -> Self {
    Self { default_locale: default_locale.into(), locales: Vec::new(), messages: HashMap::new() }
  }

  /// Register (or replace) the messages of one locale.
  pub fn with_locale(
    mut self,
    locale: impl Into<String>,
    messages: serde_json::Value,
  ) -> Result<Self, MetaTagsError> {
    let locale = locale.into();
    if !messages.is_object() {
      return Err(MetaTagsError::InvalidCatalog { locale });
    }
    if !self.locales.contains(&locale) {
      self.locales.push(locale.clone());
    }
    self.messages.insert(locale, messages);
    Ok(self)
  }

  fn lookup_raw(&self, locale: &str, key: &str) -> Option<String> {
    let root = self.messages.get(locale)?;
    if let Some(flat) = root.get(key).and_then(|v| v.as_str()) {
      return Some(flat.to_string());
    }
    let mut node = root;
    for segment in key.split('.') {
      node = node.get(segment)?;
    }
    node.as_str().map(str::to_string)
  }
}

impl LocaleTranslate for MessageCatalog {
  fn locales(&self) -> &[String] {
    &self.locales
  }

  fn default_locale(&self) -> &str {
    &self.default_locale
  }

  fn lookup_in(&self, locale: &str, key: &str) -> Option<String> {
    let found = normalize_blank(self.lookup_raw(locale, key));
    if found.is_some() || locale == self.default_locale {
      return found;
    }
    tracing::trace!(key, locale, fallback = %self.default_locale, "falling back to default locale");
    normalize_blank(self.lookup_raw(&self.default_locale, key))
  }
}

impl Translate for MessageCatalog {
  fn lookup(&self, key: &str) -> Option<String> {
    self.lookup_in(&self.default_locale, key)
  }
}
