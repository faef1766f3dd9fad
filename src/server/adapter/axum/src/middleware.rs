/* src/server/adapter/axum/src/middleware.rs */

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{Next, from_fn_with_state};
use axum::response::Response;
use axum::routing::MethodRouter;
use meta_tags::MetaTagsBinder;

use crate::locale::negotiate_locale;

#[derive(Clone)]
struct MetaAction {
  binder: Arc<MetaTagsBinder>,
  resource: Arc<str>,
  action: Arc<str>,
}

/// Before-handler hook: start the request's meta tag cycle and hand the
/// context to the handler through request extensions.
async fn bind_meta_tags(
  State(meta): State<MetaAction>,
  mut request: Request,
  next: Next,
) -> Response {
  let locale = negotiate_locale(request.headers(), meta.binder.locales());
  let ctx = meta.binder.begin_in(&meta.resource, &meta.action, locale.as_deref());
  request.extensions_mut().insert(ctx);
  next.run(request).await
}

/// Extension trait that tags a route with the `resource#action` pair whose
/// locale defaults seed its meta tags.
pub trait MetaActionExt {
  fn meta_action(self, binder: &Arc<MetaTagsBinder>, resource: &str, action: &str) -> Self;
}

impl<S> MetaActionExt for MethodRouter<S>
where
  S: Clone + Send + Sync + 'static,
{
  fn meta_action(self, binder: &Arc<MetaTagsBinder>, resource: &str, action: &str) -> Self {
    let state = MetaAction {
      binder: binder.clone(),
      resource: Arc::from(resource),
      action: Arc::from(action),
    };
    self.layer(from_fn_with_state(state, bind_meta_tags))
  }
}
