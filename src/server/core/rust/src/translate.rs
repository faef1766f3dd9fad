/* src/server/core/rust/src/translate.rs */

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Dotted-key string lookup backing locale defaults.
///
/// A missing key is `None`, never an error. Implementations may return blank
/// strings; callers run results through [`normalize_blank`].
pub trait Translate: Send + Sync {
  fn lookup(&self, key: &str) -> Option<String>;
}

/// Translation tables that hold several locales and can answer for any one of them.
pub trait LocaleTranslate: Send + Sync {
  /// Supported locales, in preference order.
  fn locales(&self) -> &[String];

  fn default_locale(&self) -> &str;

  fn lookup_in(&self, locale: &str, key: &str) -> Option<String>;
}

/// Treat whitespace-only values the same as a missing entry.
pub fn normalize_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.trim().is_empty())
}

/// Adapts a closure into a [`Translate`].
pub struct FnTranslate<F>(pub F);

impl<F> Translate for FnTranslate<F>
where
  F: Fn(&str) -> Option<String> + Send + Sync,
{
  fn lookup(&self, key: &str) -> Option<String> {
    (self.0)(key)
  }
}

impl Translate for HashMap<String, String> {
  fn lookup(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl Translate for BTreeMap<String, String> {
  fn lookup(&self, key: &str) -> Option<String> {
    self.get(key).cloned()
  }
}

impl<T: Translate + ?Sized> Translate for Arc<T> {
  fn lookup(&self, key: &str) -> Option<String> {
    (**self).lookup(key)
  }
}

impl<T: Translate + ?Sized> Translate for &T {
  fn lookup(&self, key: &str) -> Option<String> {
    (**self).lookup(key)
  }
}

/// A [`LocaleTranslate`] pinned to one locale.
pub struct InLocale<'a> {
  pub translations: &'a dyn LocaleTranslate,
  pub locale: &'a str,
}

impl Translate for InLocale<'_> {
  fn lookup(&self, key: &str) -> Option<String> {
    self.translations.lookup_in(self.locale, key)
  }
}
