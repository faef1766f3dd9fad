/* src/server/core/rust/src/collection.rs */

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Head metadata keys that can be filled from locale defaults and override fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetaKey {
  Title,
  Keywords,
  Description,
}

impl MetaKey {
  /// Locale binding order.
  pub const ALL: [MetaKey; 3] = [MetaKey::Title, MetaKey::Keywords, MetaKey::Description];

  pub fn as_str(self) -> &'static str {
    match self {
      MetaKey::Title => "title",
      MetaKey::Keywords => "keywords",
      MetaKey::Description => "description",
    }
  }
}

impl fmt::Display for MetaKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl AsRef<str> for MetaKey {
  fn as_ref(&self) -> &str {
    self.as_str()
  }
}

impl From<MetaKey> for String {
  fn from(key: MetaKey) -> Self {
    key.as_str().to_string()
  }
}

/// Per-request mapping of tag names to values destined for the page head.
///
/// Keys are free-form: the three [`MetaKey`] names are the ones the binder
/// fills on its own, anything else a handler sets is stored untouched for the
/// renderer to interpret. Iteration is sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetaTags {
  entries: BTreeMap<String, String>,
}

impl MetaTags {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, key: impl AsRef<str>) -> Option<&str> {
    self.entries.get(key.as_ref()).map(String::as_str)
  }

  pub fn title(&self) -> Option<&str> {
    self.get(MetaKey::Title)
  }

  pub fn keywords(&self) -> Option<&str> {
    self.get(MetaKey::Keywords)
  }

  pub fn description(&self) -> Option<&str> {
    self.get(MetaKey::Description)
  }

  /// Insert or overwrite one entry, returning the previous value.
  pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
    self.entries.insert(key.into(), value.into())
  }

  /// Merge `values` into the collection, overwriting on conflict.
  pub fn update<I, K, V>(&mut self, values: I)
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    for (key, value) in values {
      self.entries.insert(key.into(), value.into());
    }
  }

  pub fn remove(&mut self, key: impl AsRef<str>) -> Option<String> {
    self.entries.remove(key.as_ref())
  }

  pub fn contains_key(&self, key: impl AsRef<str>) -> bool {
    self.entries.contains_key(key.as_ref())
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MetaTags {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut tags = MetaTags::new();
    tags.update(iter);
    tags
  }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for MetaTags {
  fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
    self.update(iter);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn meta_key_names() {
    let names: Vec<&str> = MetaKey::ALL.iter().map(|k| k.as_str()).collect();
    assert_eq!(names, ["title", "keywords", "description"]);
    assert_eq!(MetaKey::Description.to_string(), "description");
  }

  #[test]
  fn update_overwrites_and_keeps_untouched() {
    let mut tags = MetaTags::from_iter([("title", "Home"), ("keywords", "a, b")]);
    tags.update([("title", "Login"), ("og:title", "Login")]);
    assert_eq!(tags.title(), Some("Login"));
    assert_eq!(tags.keywords(), Some("a, b"));
    assert_eq!(tags.get("og:title"), Some("Login"));
    assert_eq!(tags.len(), 3);
  }

  #[test]
  fn set_returns_previous() {
    let mut tags = MetaTags::new();
    assert_eq!(tags.set(MetaKey::Title, "One"), None);
    assert_eq!(tags.set(MetaKey::Title, "Two").as_deref(), Some("One"));
    assert_eq!(tags.remove(MetaKey::Title).as_deref(), Some("Two"));
    assert!(tags.is_empty());
  }

  #[test]
  fn iterates_sorted_by_key() {
    let tags = MetaTags::from_iter([("title", "T"), ("description", "D"), ("keywords", "K")]);
    let keys: Vec<&str> = tags.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["description", "keywords", "title"]);
  }

  #[test]
  fn serializes_as_flat_object() {
    let tags = MetaTags::from_iter([("title", "Member Login")]);
    assert_eq!(serde_json::to_value(&tags).unwrap(), serde_json::json!({"title": "Member Login"}));
  }
}
