/* src/server/adapter/axum/src/extract.rs */

use std::ops::{Deref, DerefMut};

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use meta_tags::{MetaContext, MetaTagsError};

use crate::error::AxumError;

/// The request's [`MetaContext`], moved out of the request so the handler owns it.
///
/// Only available on routes tagged with
/// [`meta_action`](crate::MetaActionExt::meta_action).
#[derive(Debug)]
pub struct Meta(pub MetaContext);

impl Meta {
  /// Render through the meta tag wrapper: override fields are applied, then
  /// `render` runs once and its result is returned as-is.
  pub fn render<A, R>(mut self, args: A, render: impl FnOnce(&mut MetaContext, A) -> R) -> R {
    self.0.render_with_meta_tags(args, render)
  }

  pub fn into_inner(self) -> MetaContext {
    self.0
  }
}

impl Deref for Meta {
  type Target = MetaContext;

  fn deref(&self) -> &MetaContext {
    &self.0
  }
}

impl DerefMut for Meta {
  fn deref_mut(&mut self) -> &mut MetaContext {
    &mut self.0
  }
}

impl<S: Send + Sync> FromRequestParts<S> for Meta {
  type Rejection = AxumError;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    match parts.extensions.remove::<MetaContext>() {
      Some(ctx) => Ok(Meta(ctx)),
      None => {
        tracing::warn!(path = %parts.uri.path(), "route has no meta action");
        Err(AxumError(MetaTagsError::MissingContext))
      }
    }
  }
}
