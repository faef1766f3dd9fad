/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use meta_tags::MetaTagsError;

/// Newtype wrapper to implement `IntoResponse` for `MetaTagsError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for MetaTagsError`
/// when both types are foreign to this crate.
#[derive(Debug)]
pub struct AxumError(pub MetaTagsError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": err.code(),
        "message": err.to_string(),
        "transient": false,
      }
    });
    (status, axum::Json(body)).into_response()
  }
}

impl From<MetaTagsError> for AxumError {
  fn from(err: MetaTagsError) -> Self {
    Self(err)
  }
}
