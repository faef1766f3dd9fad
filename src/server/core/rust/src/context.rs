/* src/server/core/rust/src/context.rs */

use crate::collection::{MetaKey, MetaTags};
use crate::config::DEFAULT_NAMESPACE;
use crate::translate::{Translate, normalize_blank};

/// Meta tag state for a single request cycle.
///
/// Created once per request (see [`MetaTagsBinder::begin`](crate::MetaTagsBinder::begin)),
/// owned by the handler while it runs, and consumed by
/// [`render_with_meta_tags`](Self::render_with_meta_tags). Values land in the
/// collection in this order, later writes winning:
///
/// 1. locale defaults, bound before the handler runs
/// 2. [`set_meta_tags`](Self::set_meta_tags), whenever the handler calls it
/// 3. the `page_*` override fields, applied right before render
#[derive(Debug, Clone)]
pub struct MetaContext {
  resource: String,
  action: String,
  namespace: String,
  pub page_title: Option<String>,
  pub page_keywords: Option<String>,
  pub page_description: Option<String>,
  meta_tags: Option<MetaTags>,
}

impl MetaContext {
  pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
    Self::with_namespace(DEFAULT_NAMESPACE, resource, action)
  }

  pub fn with_namespace(
    prefix: &str,
    resource: impl Into<String>,
    action: impl Into<String>,
  ) -> Self {
    let resource = resource.into();
    let action = action.into();
    let namespace = format!("{prefix}.{resource}.{action}");
    Self::with_namespace_key(namespace, resource, action)
  }

  /// Context whose locale namespace key is already built.
  pub(crate) fn with_namespace_key(namespace: String, resource: String, action: String) -> Self {
    Self {
      resource,
      action,
      namespace,
      page_title: None,
      page_keywords: None,
      page_description: None,
      meta_tags: None,
    }
  }

  pub fn resource(&self) -> &str {
    &self.resource
  }

  pub fn action(&self) -> &str {
    &self.action
  }

  /// Locale namespace key, e.g. `meta_tags.sessions.new`.
  pub fn namespace(&self) -> &str {
    &self.namespace
  }

  /// The request's collection, created empty on first access.
  pub fn meta_tags(&mut self) -> &mut MetaTags {
    self.meta_tags.get_or_insert_with(MetaTags::new)
  }

  /// Whether anything has touched the collection yet.
  pub fn is_initialized(&self) -> bool {
    self.meta_tags.is_some()
  }

  pub fn into_meta_tags(self) -> MetaTags {
    self.meta_tags.unwrap_or_default()
  }

  /// Merge `values` into the collection, overwriting on conflict.
  pub fn set_meta_tags<I, K, V>(&mut self, values: I)
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    self.meta_tags().update(values);
  }

  pub fn set_page_title(&mut self, title: impl Into<String>) -> &mut Self {
    self.page_title = Some(title.into());
    self
  }

  pub fn set_page_keywords(&mut self, keywords: impl Into<String>) -> &mut Self {
    self.page_keywords = Some(keywords.into());
    self
  }

  pub fn set_page_description(&mut self, description: impl Into<String>) -> &mut Self {
    self.page_description = Some(description.into());
    self
  }

  /// Fill title, keywords and description from `<namespace>.<key>` lookups.
  pub fn bind_locale_defaults(&mut self, translator: &dyn Translate) {
    self.bind_locale_keys(&MetaKey::ALL, translator);
  }

  /// Like [`bind_locale_defaults`](Self::bind_locale_defaults) for a chosen set of keys.
  /// Missing or blank translations leave the key unset.
  pub fn bind_locale_keys(&mut self, keys: &[MetaKey], translator: &dyn Translate) {
    for key in keys {
      let lookup_key = format!("{}.{key}", self.namespace);
      let Some(value) = normalize_blank(translator.lookup(&lookup_key)) else {
        tracing::trace!(key = %lookup_key, "no locale default");
        continue;
      };
      tracing::debug!(key = %lookup_key, "bound locale default");
      self.meta_tags().set(*key, value);
    }
  }

  /// Copy non-empty `page_*` fields into the collection.
  pub fn apply_override_fields(&mut self) {
    let overrides = [
      (MetaKey::Title, self.page_title.clone()),
      (MetaKey::Keywords, self.page_keywords.clone()),
      (MetaKey::Description, self.page_description.clone()),
    ];
    for (key, value) in overrides {
      if let Some(value) = value.filter(|v| !v.is_empty()) {
        tracing::debug!(%key, resource = %self.resource, action = %self.action, "page override");
        self.meta_tags().set(key, value);
      }
    }
  }

  /// Apply the override fields, then call `render` exactly once with `args`.
  ///
  /// `render` reads the finalized collection through the context it receives.
  /// Whatever it returns, errors included, is handed back untouched.
  pub fn render_with_meta_tags<A, R>(
    &mut self,
    args: A,
    render: impl FnOnce(&mut Self, A) -> R,
  ) -> R {
    self.apply_override_fields();
    render(self, args)
  }
}
