/* src/server/core/rust/src/binder.rs */

use std::sync::Arc;

use crate::config::MetaTagsConfig;
use crate::context::MetaContext;
use crate::errors::MetaTagsError;
use crate::translate::{InLocale, LocaleTranslate, Translate};

enum Translations {
  Single(Arc<dyn Translate>),
  Localized(Arc<dyn LocaleTranslate>),
}

/// Shared, read-only half of the meta tag lifecycle.
///
/// Holds the config and translator for the whole app; hands out one
/// [`MetaContext`] per request with locale defaults already bound.
pub struct MetaTagsBinder {
  config: MetaTagsConfig,
  translations: Translations,
}

impl MetaTagsBinder {
  pub fn new(
    config: MetaTagsConfig,
    translator: impl Translate + 'static,
  ) -> Result<Self, MetaTagsError> {
    config.validate()?;
    Ok(Self { config, translations: Translations::Single(Arc::new(translator)) })
  }

  /// Binder backed by a multi-locale table; see [`begin_in`](Self::begin_in).
  pub fn localized(
    config: MetaTagsConfig,
    translations: impl LocaleTranslate + 'static,
  ) -> Result<Self, MetaTagsError> {
    config.validate()?;
    Ok(Self { config, translations: Translations::Localized(Arc::new(translations)) })
  }

  pub fn config(&self) -> &MetaTagsConfig {
    &self.config
  }

  /// Locales the translator can answer for. Empty for a single-locale binder.
  pub fn locales(&self) -> &[String] {
    match &self.translations {
      Translations::Single(_) => &[],
      Translations::Localized(t) => t.locales(),
    }
  }

  /// Start a request cycle for `resource#action` in the default locale.
  pub fn begin(&self, resource: &str, action: &str) -> MetaContext {
    self.begin_in(resource, action, None)
  }

  /// Start a request cycle, binding locale defaults from `locale` when the
  /// translator is localized. `None` or an unsupported locale uses the default.
  pub fn begin_in(&self, resource: &str, action: &str, locale: Option<&str>) -> MetaContext {
    let mut ctx = MetaContext::with_namespace_key(
      self.config.namespace_for(resource, action),
      resource.to_string(),
      action.to_string(),
    );
    match &self.translations {
      Translations::Single(t) => ctx.bind_locale_keys(&self.config.locale_keys, t.as_ref()),
      Translations::Localized(t) => {
        let locale = locale
          .filter(|l| t.locales().iter().any(|known| known == l))
          .unwrap_or_else(|| t.default_locale());
        tracing::trace!(resource, action, locale, "binding meta tag defaults");
        let pinned = InLocale { translations: t.as_ref(), locale };
        ctx.bind_locale_keys(&self.config.locale_keys, &pinned);
      }
    }
    ctx
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use serde_json::json;

  use super::*;
  use crate::{MessageCatalog, MetaKey};

  fn catalog() -> MessageCatalog {
    MessageCatalog::new("en")
      .with_locale("en", json!({"meta_tags": {"sessions": {"new": {"title": "Member Login"}}}}))
      .unwrap()
      .with_locale("zh", json!({"meta_tags": {"sessions": {"new": {"title": "会员登录"}}}}))
      .unwrap()
  }

  #[test]
  fn begin_binds_locale_defaults() {
    let mut table = HashMap::new();
    table.insert("meta_tags.sessions.new.title".to_string(), "Member Login".to_string());
    let binder = MetaTagsBinder::new(MetaTagsConfig::default(), table).unwrap();
    assert!(binder.locales().is_empty());

    let ctx = binder.begin("sessions", "new");
    assert_eq!(ctx.resource(), "sessions");
    assert_eq!(ctx.action(), "new");
    assert_eq!(ctx.into_meta_tags().title(), Some("Member Login"));
  }

  #[test]
  fn fresh_context_per_cycle() {
    let binder = MetaTagsBinder::localized(MetaTagsConfig::default(), catalog()).unwrap();
    let mut first = binder.begin("sessions", "new");
    first.set_meta_tags([("title", "Changed")]);
    let second = binder.begin("sessions", "new");
    assert_eq!(second.into_meta_tags().title(), Some("Member Login"));
  }

  #[test]
  fn begin_in_picks_locale() {
    let binder = MetaTagsBinder::localized(MetaTagsConfig::default(), catalog()).unwrap();
    let zh = binder.begin_in("sessions", "new", Some("zh")).into_meta_tags();
    assert_eq!(zh.title(), Some("会员登录"));
    let unknown = binder.begin_in("sessions", "new", Some("fr")).into_meta_tags();
    assert_eq!(unknown.title(), Some("Member Login"));
  }

  #[test]
  fn configured_namespace_and_keys() {
    let config = MetaTagsConfig { namespace: "seo".into(), locale_keys: vec![MetaKey::Keywords] };
    let mut table = HashMap::new();
    table.insert("seo.users.show.title".to_string(), "Profile".to_string());
    table.insert("seo.users.show.keywords".to_string(), "user, profile".to_string());
    let binder = MetaTagsBinder::new(config, table).unwrap();
    let ctx = binder.begin("users", "show");
    assert_eq!(ctx.namespace(), binder.config().namespace_for("users", "show"));
    assert_eq!(ctx.namespace(), "seo.users.show");
    let tags = ctx.into_meta_tags();
    assert_eq!(tags.keywords(), Some("user, profile"));
    assert_eq!(tags.title(), None);
  }

  #[test]
  fn untouched_when_nothing_translates() {
    let binder = MetaTagsBinder::new(MetaTagsConfig::default(), HashMap::new()).unwrap();
    assert!(!binder.begin("home", "index").is_initialized());
  }

  #[test]
  fn rejects_invalid_config() {
    let config = MetaTagsConfig { namespace: String::new(), ..MetaTagsConfig::default() };
    assert!(MetaTagsBinder::new(config, HashMap::new()).is_err());
  }
}
