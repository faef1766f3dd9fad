/* demos/sessions/server-rust/src/pages.rs */

use std::sync::Arc;

use axum::Router;
use axum::extract::Path;
use axum::response::Html;
use axum::routing::get;
use meta_tags::{MessageCatalog, MetaTagsBinder, MetaTagsError};
use meta_tags_axum::{Meta, MetaActionExt};
use serde_json::json;

use crate::head::render_page;

pub fn catalog() -> Result<MessageCatalog, MetaTagsError> {
  MessageCatalog::new("en")
    .with_locale(
      "en",
      json!({
        "meta_tags": {
          "sessions": { "new": { "title": "Member Login" } },
          "users": { "show": { "title": "Member", "keywords": "members, profile" } }
        }
      }),
    )?
    .with_locale(
      "zh",
      json!({
        "meta_tags": {
          "sessions": { "new": { "title": "会员登录", "description": "会员登录页面。" } }
        }
      }),
    )
}

async fn sessions_new(meta: Meta) -> Html<String> {
  meta.render("<form>...</form>", |ctx, body| Html(render_page(ctx.meta_tags(), body)))
}

async fn users_show(Path(id): Path<String>, mut meta: Meta) -> Html<String> {
  meta.set_meta_tags([("og:type", "profile")]);
  meta.page_title = Some(format!("Member #{id}"));
  meta.page_description = Some(format!("Public profile of member {id}."));
  let body = format!("<h1>{id}</h1>");
  meta.render(body, |ctx, body| Html(render_page(ctx.meta_tags(), &body)))
}

pub fn router(binder: &Arc<MetaTagsBinder>) -> Router {
  Router::new()
    .route("/login", get(sessions_new).meta_action(binder, "sessions", "new"))
    .route("/users/{id}", get(users_show).meta_action(binder, "users", "show"))
}
